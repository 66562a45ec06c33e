use crate::record::PaymentRecord;

/// Decides whether a patch may overwrite the stored monetary fields.
///
/// Allowed when the incoming record carries a pricing signal (any non-zero
/// non-calculable price) or when the stored record has never been priced.
pub fn may_overwrite_prices(source: &PaymentRecord, target: &PaymentRecord) -> bool {
    let source_has_signal = source
        .non_calculable_prices()
        .iter()
        .any(|price| !price.is_zero());
    let target_all_zero = target
        .non_calculable_prices()
        .iter()
        .all(|price| price.is_zero());
    source_has_signal || target_all_zero
}

/// Applies the guard to the payment-level money fields and returns the
/// decision. `sum` lives on the shared operation part and is moved by the
/// operation patch using the same decision.
pub fn apply_price_guard(source: &PaymentRecord, target: &mut PaymentRecord) -> bool {
    let overwrite = may_overwrite_prices(source, target);
    if overwrite {
        target.price = source.price;
        target.price_with_tax = source.price_with_tax;
        target.discount_amount = source.discount_amount;
        target.discount_amount_with_tax = source.discount_amount_with_tax;
        target.tax_percent_rate = source.tax_percent_rate;
        target.tax_total = source.tax_total;
        target.total = source.total;
        target.total_with_tax = source.total_with_tax;
    } else {
        log::debug!(
            "keeping stored prices of payment {}: incoming record has no pricing signal",
            target.operation.id.as_deref().unwrap_or("<new>")
        );
    }
    overwrite
}
