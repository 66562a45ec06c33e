use crate::address::AddressRecord;
use crate::adjustments::{DiscountRecord, FeeDetailRecord, TaxDetailRecord};
use crate::dynamic_property::DynamicPropertyValueRecord;
use crate::gateway::{CaptureRecord, RefundRecord, TransactionRecord};
use crate::operation::OperationRecord;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Storage view of an incoming payment. Every child exists only as part of
/// its owning payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub operation: OperationRecord,
    #[serde(default)]
    pub customer_order_id: Option<String>,
    #[serde(default)]
    pub shipment_id: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub gateway_code: Option<String>,
    #[serde(default)]
    pub incoming_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub authorized_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub captured_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub voided_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tax_type: Option<String>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub price_with_tax: Decimal,
    #[serde(default)]
    pub discount_amount: Decimal,
    #[serde(default)]
    pub discount_amount_with_tax: Decimal,
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub total_with_tax: Decimal,
    #[serde(default)]
    pub tax_total: Decimal,
    #[serde(default)]
    pub tax_percent_rate: Decimal,
    /// Outcome of the last price-guard decision taken while patching into
    /// this record.
    #[serde(default)]
    pub needs_sum_patch: bool,
    /// Only the first entry is meaningful: it is the billing address.
    #[serde(default)]
    pub addresses: Option<Vec<AddressRecord>>,
    #[serde(default)]
    pub transactions: Option<Vec<TransactionRecord>>,
    #[serde(default)]
    pub discounts: Option<Vec<DiscountRecord>>,
    #[serde(default)]
    pub tax_details: Option<Vec<TaxDetailRecord>>,
    #[serde(default)]
    pub fee_details: Option<Vec<FeeDetailRecord>>,
    #[serde(default)]
    pub refunds: Option<Vec<RefundRecord>>,
    #[serde(default)]
    pub captures: Option<Vec<CaptureRecord>>,
    #[serde(default)]
    pub dynamic_property_values: Option<Vec<DynamicPropertyValueRecord>>,
}

impl PaymentRecord {
    /// Prices an external pricing pass cannot derive from the others; any
    /// non-zero value among them means the record has been priced.
    pub fn non_calculable_prices(&self) -> [Decimal; 4] {
        [
            self.tax_percent_rate,
            self.price,
            self.discount_amount,
            self.operation.sum,
        ]
    }

    /// Zeroes every monetary field so the next pricing pass recomputes them.
    pub fn reset_prices(&mut self) {
        self.price = Decimal::ZERO;
        self.price_with_tax = Decimal::ZERO;
        self.discount_amount = Decimal::ZERO;
        self.discount_amount_with_tax = Decimal::ZERO;
        self.total = Decimal::ZERO;
        self.total_with_tax = Decimal::ZERO;
        self.tax_total = Decimal::ZERO;
        self.tax_percent_rate = Decimal::ZERO;
        self.operation.sum = Decimal::ZERO;
    }
}
