//! Gateway-side children of a payment: processing transactions, refunds and
//! captures. These carry their own primary keys, assigned through the
//! identity resolver when the record is built.

use crate::identity::{IdentityResolver, RecordKind};
use crate::reconcile::ChildPatch;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    pub id: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub is_processed: bool,
    #[serde(default)]
    pub processed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub process_error: Option<String>,
    #[serde(default)]
    pub process_attempt_count: u32,
    #[serde(default)]
    pub request_data: Option<String>,
    #[serde(default)]
    pub response_data: Option<String>,
    #[serde(default)]
    pub response_code: Option<String>,
    #[serde(default)]
    pub gateway_ip_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub is_processed: bool,
    #[serde(default)]
    pub processed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub process_error: Option<String>,
    #[serde(default)]
    pub process_attempt_count: u32,
    #[serde(default)]
    pub request_data: Option<String>,
    #[serde(default)]
    pub response_data: Option<String>,
    #[serde(default)]
    pub response_code: Option<String>,
    #[serde(default)]
    pub gateway_ip_address: Option<String>,
}

impl TransactionRecord {
    pub fn to_domain(&self, mut transaction: PaymentTransaction) -> PaymentTransaction {
        transaction.id = self.id.clone();
        transaction.amount = self.amount;
        transaction.currency = self.currency.clone();
        transaction.transaction_type = self.transaction_type.clone();
        transaction.status = self.status.clone();
        transaction.note = self.note.clone();
        transaction.is_processed = self.is_processed;
        transaction.processed_date = self.processed_date;
        transaction.process_error = self.process_error.clone();
        transaction.process_attempt_count = self.process_attempt_count;
        transaction.request_data = self.request_data.clone();
        transaction.response_data = self.response_data.clone();
        transaction.response_code = self.response_code.clone();
        transaction.gateway_ip_address = self.gateway_ip_address.clone();
        transaction
    }

    pub fn fill_from(
        mut self,
        transaction: &PaymentTransaction,
        ids: &dyn IdentityResolver,
    ) -> Self {
        self.id = Some(ids.resolve_id(RecordKind::Transaction, transaction.id.as_deref()));
        self.amount = transaction.amount;
        self.currency = transaction.currency.clone();
        self.transaction_type = transaction.transaction_type.clone();
        self.status = transaction.status.clone();
        self.note = transaction.note.clone();
        self.is_processed = transaction.is_processed;
        self.processed_date = transaction.processed_date;
        self.process_error = transaction.process_error.clone();
        self.process_attempt_count = transaction.process_attempt_count;
        self.request_data = transaction.request_data.clone();
        self.response_data = transaction.response_data.clone();
        self.response_code = transaction.response_code.clone();
        self.gateway_ip_address = transaction.gateway_ip_address.clone();
        self
    }
}

impl ChildPatch for TransactionRecord {
    fn patch(&self, target: &mut Self) {
        target.amount = self.amount;
        target.currency = self.currency.clone();
        target.transaction_type = self.transaction_type.clone();
        target.status = self.status.clone();
        target.note = self.note.clone();
        target.is_processed = self.is_processed;
        target.processed_date = self.processed_date;
        target.process_error = self.process_error.clone();
        target.process_attempt_count = self.process_attempt_count;
        target.request_data = self.request_data.clone();
        target.response_data = self.response_data.clone();
        target.response_code = self.response_code.clone();
        target.gateway_ip_address = self.gateway_ip_address.clone();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub outer_id: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub reason_code: Option<String>,
    #[serde(default)]
    pub reason_message: Option<String>,
    #[serde(default)]
    pub reject_reason_message: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub outer_id: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub reason_code: Option<String>,
    #[serde(default)]
    pub reason_message: Option<String>,
    #[serde(default)]
    pub reject_reason_message: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<String>,
}

impl RefundRecord {
    pub fn to_domain(&self, mut refund: Refund) -> Refund {
        refund.id = self.id.clone();
        refund.number = self.number.clone();
        refund.status = self.status.clone();
        refund.outer_id = self.outer_id.clone();
        refund.currency = self.currency.clone();
        refund.amount = self.amount;
        refund.reason_code = self.reason_code.clone();
        refund.reason_message = self.reason_message.clone();
        refund.reject_reason_message = self.reject_reason_message.clone();
        refund.transaction_id = self.transaction_id.clone();
        refund.vendor_id = self.vendor_id.clone();
        refund
    }

    pub fn fill_from(mut self, refund: &Refund, ids: &dyn IdentityResolver) -> Self {
        self.id = Some(ids.resolve_id(RecordKind::Refund, refund.id.as_deref()));
        self.number = refund.number.clone();
        self.status = refund.status.clone();
        self.outer_id = refund.outer_id.clone();
        self.currency = refund.currency.clone();
        self.amount = refund.amount;
        self.reason_code = refund.reason_code.clone();
        self.reason_message = refund.reason_message.clone();
        self.reject_reason_message = refund.reject_reason_message.clone();
        self.transaction_id = refund.transaction_id.clone();
        self.vendor_id = refund.vendor_id.clone();
        self
    }
}

impl ChildPatch for RefundRecord {
    fn patch(&self, target: &mut Self) {
        target.number = self.number.clone();
        target.status = self.status.clone();
        target.outer_id = self.outer_id.clone();
        target.currency = self.currency.clone();
        target.amount = self.amount;
        target.reason_code = self.reason_code.clone();
        target.reason_message = self.reason_message.clone();
        target.reject_reason_message = self.reject_reason_message.clone();
        target.transaction_id = self.transaction_id.clone();
        target.vendor_id = self.vendor_id.clone();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub outer_id: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub close_transaction: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub outer_id: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub close_transaction: bool,
}

impl CaptureRecord {
    pub fn to_domain(&self, mut capture: Capture) -> Capture {
        capture.id = self.id.clone();
        capture.number = self.number.clone();
        capture.status = self.status.clone();
        capture.outer_id = self.outer_id.clone();
        capture.currency = self.currency.clone();
        capture.amount = self.amount;
        capture.transaction_id = self.transaction_id.clone();
        capture.vendor_id = self.vendor_id.clone();
        capture.close_transaction = self.close_transaction;
        capture
    }

    pub fn fill_from(mut self, capture: &Capture, ids: &dyn IdentityResolver) -> Self {
        self.id = Some(ids.resolve_id(RecordKind::Capture, capture.id.as_deref()));
        self.number = capture.number.clone();
        self.status = capture.status.clone();
        self.outer_id = capture.outer_id.clone();
        self.currency = capture.currency.clone();
        self.amount = capture.amount;
        self.transaction_id = capture.transaction_id.clone();
        self.vendor_id = capture.vendor_id.clone();
        self.close_transaction = capture.close_transaction;
        self
    }
}

impl ChildPatch for CaptureRecord {
    fn patch(&self, target: &mut Self) {
        target.number = self.number.clone();
        target.status = self.status.clone();
        target.outer_id = self.outer_id.clone();
        target.currency = self.currency.clone();
        target.amount = self.amount;
        target.transaction_id = self.transaction_id.clone();
        target.vendor_id = self.vendor_id.clone();
        target.close_transaction = self.close_transaction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::UuidIdentityResolver;
    use rust_decimal_macros::dec;

    #[test]
    fn transaction_gets_an_id_when_missing() {
        let transaction = PaymentTransaction {
            amount: dec!(120.00),
            transaction_type: Some("Authorize".to_string()),
            ..PaymentTransaction::default()
        };
        let record = TransactionRecord::default().fill_from(&transaction, &UuidIdentityResolver);
        assert!(record.id.is_some());
        assert_eq!(record.amount, dec!(120.00));
    }

    #[test]
    fn refund_patch_leaves_target_id() {
        let source = RefundRecord {
            id: Some("new".to_string()),
            status: Some("Processed".to_string()),
            amount: dec!(15),
            reason_code: Some("Duplicate".to_string()),
            ..RefundRecord::default()
        };
        let mut target = RefundRecord {
            id: Some("rf-1".to_string()),
            status: Some("Pending".to_string()),
            amount: dec!(10),
            ..RefundRecord::default()
        };

        source.patch(&mut target);

        assert_eq!(target.id.as_deref(), Some("rf-1"));
        assert_eq!(target.status.as_deref(), Some("Processed"));
        assert_eq!(target.amount, dec!(15));
        assert_eq!(target.reason_code.as_deref(), Some("Duplicate"));
    }

    #[test]
    fn capture_round_trips_with_existing_id() {
        let capture = Capture {
            id: Some("cp-3".to_string()),
            amount: dec!(99.99),
            close_transaction: true,
            ..Capture::default()
        };
        let record = CaptureRecord::default().fill_from(&capture, &UuidIdentityResolver);
        assert_eq!(record.to_domain(Capture::default()), capture);
    }
}
