use crate::address::Address;
use crate::adjustments::{Discount, FeeDetail, TaxDetail};
use crate::dynamic_property::DynamicProperty;
use crate::gateway::{Capture, PaymentTransaction, Refund};
use crate::operation::Operation;
use crate::status::PaymentStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Business view of an incoming payment on an order.
///
/// Child collections are optional: `None` means the caller supplied no data
/// for that collection, which is different from an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentDomain {
    pub operation: Operation,
    #[serde(default)]
    pub order_id: Option<String>,
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
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
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
    #[serde(default)]
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub transactions: Option<Vec<PaymentTransaction>>,
    #[serde(default)]
    pub discounts: Option<Vec<Discount>>,
    #[serde(default)]
    pub tax_details: Option<Vec<TaxDetail>>,
    #[serde(default)]
    pub fee_details: Option<Vec<FeeDetail>>,
    #[serde(default)]
    pub refunds: Option<Vec<Refund>>,
    #[serde(default)]
    pub captures: Option<Vec<Capture>>,
    #[serde(default)]
    pub dynamic_properties: Option<Vec<DynamicProperty>>,
}
