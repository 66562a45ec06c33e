use crate::address::AddressRecord;
use crate::adjustments::{DiscountRecord, FeeDetailRecord, TaxDetailRecord};
use crate::dynamic_property::DynamicPropertyValueRecord;
use crate::error::MappingError;
use crate::gateway::{CaptureRecord, RefundRecord, TransactionRecord};
use crate::operation::OperationKind;
use crate::price_guard::apply_price_guard;
use crate::reconcile::{reconcile_by_key, reconcile_by_position, ChildPatch, ReconcileStats};
use crate::record::PaymentRecord;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchOutcome {
    pub prices_overwritten: bool,
    pub children: ReconcileStats,
}

/// Merges `source` into the stored `target` in place.
///
/// Both records must be payments. Nothing is touched when the kind check
/// fails. Collections missing on `source` are left as they are on `target`.
pub fn patch_payment(
    source: &PaymentRecord,
    target: &mut PaymentRecord,
) -> Result<PatchOutcome, MappingError> {
    MappingError::expect_kind(OperationKind::PaymentIn, source.operation.kind)?;
    MappingError::expect_kind(source.operation.kind, target.operation.kind)?;

    let prices_overwritten = apply_price_guard(source, target);
    target.needs_sum_patch = prices_overwritten;
    source
        .operation
        .patch(&mut target.operation, prices_overwritten);

    target.tax_type = source.tax_type.clone();
    target.customer_id = source.customer_id.clone();
    target.customer_name = source.customer_name.clone();
    target.organization_id = source.organization_id.clone();
    target.organization_name = source.organization_name.clone();
    target.gateway_code = source.gateway_code.clone();
    target.purpose = source.purpose.clone();
    target.incoming_date = source.incoming_date;
    target.authorized_date = source.authorized_date;
    target.captured_date = source.captured_date;
    target.voided_date = source.voided_date;
    target.vendor_id = source.vendor_id.clone();

    let mut children = ReconcileStats::default();
    children += merge_by_position::<AddressRecord>(&source.addresses, &mut target.addresses);
    children += merge_by_key(
        &source.tax_details,
        &mut target.tax_details,
        TaxDetailRecord::key,
    );
    children += merge_by_key(
        &source.fee_details,
        &mut target.fee_details,
        FeeDetailRecord::key,
    );
    children += merge_by_key(&source.discounts, &mut target.discounts, DiscountRecord::key);
    children += merge_by_position::<TransactionRecord>(
        &source.transactions,
        &mut target.transactions,
    );
    children += merge_by_position::<RefundRecord>(&source.refunds, &mut target.refunds);
    children += merge_by_position::<CaptureRecord>(&source.captures, &mut target.captures);
    children += merge_by_key(
        &source.dynamic_property_values,
        &mut target.dynamic_property_values,
        DynamicPropertyValueRecord::key,
    );

    log::debug!(
        "patched payment {}: prices_overwritten={} children updated={} added={} removed={}",
        target.operation.id.as_deref().unwrap_or("<new>"),
        prices_overwritten,
        children.updated,
        children.added,
        children.removed
    );

    Ok(PatchOutcome {
        prices_overwritten,
        children,
    })
}

fn merge_by_key<T, K>(
    source: &Option<Vec<T>>,
    target: &mut Option<Vec<T>>,
    key_of: fn(&T) -> K,
) -> ReconcileStats
where
    T: ChildPatch + Clone,
    K: Eq + Hash,
{
    match source.as_deref() {
        Some(items) => reconcile_by_key(
            Some(items),
            target.get_or_insert_with(Vec::new),
            key_of,
            T::patch,
        ),
        None => ReconcileStats::default(),
    }
}

fn merge_by_position<T>(source: &Option<Vec<T>>, target: &mut Option<Vec<T>>) -> ReconcileStats
where
    T: ChildPatch + Clone,
{
    match source.as_deref() {
        Some(items) => {
            reconcile_by_position(Some(items), target.get_or_insert_with(Vec::new), T::patch)
        }
        None => ReconcileStats::default(),
    }
}
