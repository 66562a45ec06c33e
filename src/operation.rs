//! Fields every order operation shares, in both shapes, plus the shared
//! conversion and patch steps the payment mapping builds on.

use crate::identity::{IdentityResolver, RecordKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum OperationKind {
    CustomerOrder,
    #[default]
    PaymentIn,
    Shipment,
    Refund,
    Capture,
}

/// Shared operation part of a domain object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: Option<String>,
    pub kind: OperationKind,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub sum: Decimal,
    #[serde(default)]
    pub outer_id: Option<String>,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default)]
    pub cancelled_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancel_reason: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub modified_by: Option<String>,
}

/// Shared operation part of a persisted row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub id: Option<String>,
    pub kind: OperationKind,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub sum: Decimal,
    #[serde(default)]
    pub outer_id: Option<String>,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default)]
    pub cancelled_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancel_reason: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub modified_by: Option<String>,
}

impl OperationRecord {
    pub fn to_domain(&self) -> Operation {
        Operation {
            id: self.id.clone(),
            kind: self.kind,
            number: self.number.clone(),
            is_approved: self.is_approved,
            status: self.status.clone(),
            comment: self.comment.clone(),
            currency: self.currency.clone(),
            sum: self.sum,
            outer_id: self.outer_id.clone(),
            is_cancelled: self.is_cancelled,
            cancelled_date: self.cancelled_date,
            cancel_reason: self.cancel_reason.clone(),
            created_date: self.created_date,
            modified_date: self.modified_date,
            created_by: self.created_by.clone(),
            modified_by: self.modified_by.clone(),
        }
    }

    pub fn from_domain(operation: &Operation, ids: &dyn IdentityResolver) -> Self {
        Self {
            id: Some(ids.resolve_id(RecordKind::Operation, operation.id.as_deref())),
            kind: operation.kind,
            number: operation.number.clone(),
            is_approved: operation.is_approved,
            status: operation.status.clone(),
            comment: operation.comment.clone(),
            currency: operation.currency.clone(),
            sum: operation.sum,
            outer_id: operation.outer_id.clone(),
            is_cancelled: operation.is_cancelled,
            cancelled_date: operation.cancelled_date,
            cancel_reason: operation.cancel_reason.clone(),
            created_date: operation.created_date,
            modified_date: operation.modified_date,
            created_by: operation.created_by.clone(),
            modified_by: operation.modified_by.clone(),
        }
    }

    /// Copies the mergeable shared fields onto `target`. Identity, kind and
    /// audit fields stay with the target; `sum` only moves when `patch_sum`.
    pub fn patch(&self, target: &mut OperationRecord, patch_sum: bool) {
        target.number = self.number.clone();
        target.is_approved = self.is_approved;
        target.status = self.status.clone();
        target.comment = self.comment.clone();
        target.currency = self.currency.clone();
        target.outer_id = self.outer_id.clone();
        target.is_cancelled = self.is_cancelled;
        target.cancelled_date = self.cancelled_date;
        target.cancel_reason = self.cancel_reason.clone();
        if patch_sum {
            target.sum = self.sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::UuidIdentityResolver;
    use rust_decimal_macros::dec;

    fn stored() -> OperationRecord {
        OperationRecord {
            id: Some("op-1".to_string()),
            number: Some("PI-0001".to_string()),
            status: Some("Pending".to_string()),
            currency: Some("EUR".to_string()),
            sum: dec!(40.00),
            created_by: Some("admin".to_string()),
            ..OperationRecord::default()
        }
    }

    #[test]
    fn patch_keeps_identity_and_audit_fields() {
        let mut target = stored();
        let source = OperationRecord {
            id: Some("other".to_string()),
            number: Some("PI-0002".to_string()),
            status: Some("Paid".to_string()),
            sum: dec!(55.10),
            created_by: Some("import".to_string()),
            ..OperationRecord::default()
        };

        source.patch(&mut target, false);

        assert_eq!(target.id.as_deref(), Some("op-1"));
        assert_eq!(target.created_by.as_deref(), Some("admin"));
        assert_eq!(target.number.as_deref(), Some("PI-0002"));
        assert_eq!(target.status.as_deref(), Some("Paid"));
        assert_eq!(target.currency, None);
        assert_eq!(target.sum, dec!(40.00));

        source.patch(&mut target, true);
        assert_eq!(target.sum, dec!(55.10));
    }

    #[test]
    fn from_domain_reuses_existing_id() {
        let operation = stored().to_domain();
        let record = OperationRecord::from_domain(&operation, &UuidIdentityResolver);
        assert_eq!(record, stored());
    }
}
