//! Price adjustments attached to a payment: tax lines, fees and discounts.

use crate::reconcile::ChildPatch;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rate: Decimal,
    #[serde(default)]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxDetailRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rate: Decimal,
    #[serde(default)]
    pub amount: Decimal,
}

impl TaxDetailRecord {
    /// Reconciliation key: tax lines are matched by name.
    pub fn key(&self) -> Option<String> {
        self.name.clone()
    }

    pub fn to_domain(&self, mut detail: TaxDetail) -> TaxDetail {
        detail.name = self.name.clone();
        detail.rate = self.rate;
        detail.amount = self.amount;
        detail
    }

    pub fn fill_from(mut self, detail: &TaxDetail) -> Self {
        self.name = detail.name.clone();
        self.rate = detail.rate;
        self.amount = detail.amount;
        self
    }
}

impl ChildPatch for TaxDetailRecord {
    fn patch(&self, target: &mut Self) {
        target.name = self.name.clone();
        target.rate = self.rate;
        target.amount = self.amount;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeDetail {
    #[serde(default)]
    pub fee_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeDetailRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub fee_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
}

impl FeeDetailRecord {
    pub fn key(&self) -> Option<String> {
        self.fee_id.clone()
    }

    pub fn to_domain(&self, mut fee: FeeDetail) -> FeeDetail {
        fee.fee_id = self.fee_id.clone();
        fee.description = self.description.clone();
        fee.currency = self.currency.clone();
        fee.amount = self.amount;
        fee
    }

    pub fn fill_from(mut self, fee: &FeeDetail) -> Self {
        self.fee_id = fee.fee_id.clone();
        self.description = fee.description.clone();
        self.currency = fee.currency.clone();
        self.amount = fee.amount;
        self
    }
}

impl ChildPatch for FeeDetailRecord {
    fn patch(&self, target: &mut Self) {
        target.fee_id = self.fee_id.clone();
        target.description = self.description.clone();
        target.currency = self.currency.clone();
        target.amount = self.amount;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(default)]
    pub promotion_id: Option<String>,
    #[serde(default)]
    pub promotion_description: Option<String>,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub amount_with_tax: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub promotion_id: Option<String>,
    #[serde(default)]
    pub promotion_description: Option<String>,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub amount_with_tax: Decimal,
}

impl DiscountRecord {
    pub fn key(&self) -> Option<String> {
        self.promotion_id.clone()
    }

    pub fn to_domain(&self, mut discount: Discount) -> Discount {
        discount.promotion_id = self.promotion_id.clone();
        discount.promotion_description = self.promotion_description.clone();
        discount.coupon_code = self.coupon_code.clone();
        discount.currency = self.currency.clone();
        discount.amount = self.amount;
        discount.amount_with_tax = self.amount_with_tax;
        discount
    }

    pub fn fill_from(mut self, discount: &Discount) -> Self {
        self.promotion_id = discount.promotion_id.clone();
        self.promotion_description = discount.promotion_description.clone();
        self.coupon_code = discount.coupon_code.clone();
        self.currency = discount.currency.clone();
        self.amount = discount.amount;
        self.amount_with_tax = discount.amount_with_tax;
        self
    }
}

impl ChildPatch for DiscountRecord {
    fn patch(&self, target: &mut Self) {
        target.promotion_id = self.promotion_id.clone();
        target.promotion_description = self.promotion_description.clone();
        target.coupon_code = self.coupon_code.clone();
        target.currency = self.currency.clone();
        target.amount = self.amount;
        target.amount_with_tax = self.amount_with_tax;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn tax_detail_round_trips_through_record() {
        let detail = TaxDetail {
            name: Some("VAT".to_string()),
            rate: dec!(0.21),
            amount: dec!(4.20),
        };
        let record = TaxDetailRecord::default().fill_from(&detail);
        assert_eq!(record.id, None);
        assert_eq!(record.key().as_deref(), Some("VAT"));
        assert_eq!(record.to_domain(TaxDetail::default()), detail);
    }

    #[test]
    fn discount_patch_copies_amounts() {
        let source = DiscountRecord {
            promotion_id: Some("SPRING".to_string()),
            amount: dec!(5),
            amount_with_tax: dec!(6.05),
            ..DiscountRecord::default()
        };
        let mut target = DiscountRecord {
            id: Some("d-1".to_string()),
            promotion_id: Some("SPRING".to_string()),
            coupon_code: Some("OLD".to_string()),
            amount: dec!(3),
            ..DiscountRecord::default()
        };

        source.patch(&mut target);

        assert_eq!(target.id.as_deref(), Some("d-1"));
        assert_eq!(target.amount, dec!(5));
        assert_eq!(target.amount_with_tax, dec!(6.05));
        assert_eq!(target.coupon_code, None);
    }

    #[test]
    fn fee_detail_keyed_by_fee_id() {
        let fee = FeeDetailRecord::default().fill_from(&FeeDetail {
            fee_id: Some("card-surcharge".to_string()),
            amount: dec!(0.35),
            ..FeeDetail::default()
        });
        assert_eq!(fee.key().as_deref(), Some("card-surcharge"));
        assert_eq!(fee.amount, dec!(0.35));
    }
}
