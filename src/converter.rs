use crate::address::{Address, AddressRecord};
use crate::adjustments::{
    Discount, DiscountRecord, FeeDetail, FeeDetailRecord, TaxDetail, TaxDetailRecord,
};
use crate::domain::PaymentDomain;
use crate::dynamic_property::{expand_properties, group_rows};
use crate::error::MappingError;
use crate::factory::TypeRegistry;
use crate::gateway::{
    Capture, CaptureRecord, PaymentTransaction, Refund, RefundRecord, TransactionRecord,
};
use crate::identity::IdentityResolver;
use crate::operation::{OperationKind, OperationRecord};
use crate::record::PaymentRecord;
use crate::status::PaymentStatus;

/// Converts payments between the domain and storage shapes. Every instance
/// it builds comes from the supplied registry.
pub struct PaymentConverter<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> PaymentConverter<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn to_domain(&self, record: &PaymentRecord) -> Result<PaymentDomain, MappingError> {
        MappingError::expect_kind(OperationKind::PaymentIn, record.operation.kind)?;
        let registry = self.registry;

        let mut payment = registry.create::<PaymentDomain>();
        payment.operation = record.operation.to_domain();
        payment.order_id = record.customer_order_id.clone();
        payment.shipment_id = record.shipment_id.clone();
        payment.organization_id = record.organization_id.clone();
        payment.organization_name = record.organization_name.clone();
        payment.customer_id = record.customer_id.clone();
        payment.customer_name = record.customer_name.clone();
        payment.vendor_id = record.vendor_id.clone();
        payment.purpose = record.purpose.clone();
        payment.gateway_code = record.gateway_code.clone();
        payment.incoming_date = record.incoming_date;
        payment.authorized_date = record.authorized_date;
        payment.captured_date = record.captured_date;
        payment.voided_date = record.voided_date;
        payment.tax_type = record.tax_type.clone();

        payment.price = record.price;
        payment.price_with_tax = record.price_with_tax;
        payment.discount_amount = record.discount_amount;
        payment.discount_amount_with_tax = record.discount_amount_with_tax;
        payment.total = record.total;
        payment.total_with_tax = record.total_with_tax;
        payment.tax_total = record.tax_total;
        payment.tax_percent_rate = record.tax_percent_rate;

        payment.billing_address = record
            .addresses
            .as_deref()
            .and_then(<[AddressRecord]>::first)
            .map(|address| address.to_domain(registry.create::<Address>()));

        payment.transactions = record.transactions.as_ref().map(|items| {
            items
                .iter()
                .map(|item| item.to_domain(registry.create::<PaymentTransaction>()))
                .collect()
        });
        payment.tax_details = record.tax_details.as_ref().map(|items| {
            items
                .iter()
                .map(|item| item.to_domain(registry.create::<TaxDetail>()))
                .collect()
        });
        payment.fee_details = record.fee_details.as_ref().map(|items| {
            items
                .iter()
                .map(|item| item.to_domain(registry.create::<FeeDetail>()))
                .collect()
        });
        payment.discounts = record.discounts.as_ref().map(|items| {
            items
                .iter()
                .map(|item| item.to_domain(registry.create::<Discount>()))
                .collect()
        });
        payment.refunds = record.refunds.as_ref().map(|items| {
            items
                .iter()
                .map(|item| item.to_domain(registry.create::<Refund>()))
                .collect()
        });
        payment.captures = record.captures.as_ref().map(|items| {
            items
                .iter()
                .map(|item| item.to_domain(registry.create::<Capture>()))
                .collect()
        });
        payment.dynamic_properties = record
            .dynamic_property_values
            .as_deref()
            .map(|rows| group_rows(rows, registry));

        payment.payment_status = PaymentStatus::parse_lenient(record.operation.status.as_deref());

        Ok(payment)
    }

    /// Builds a fresh record from `payment`. Collections the domain object
    /// leaves unset stay unset on the record, so a later patch skips them.
    pub fn from_domain(
        &self,
        payment: &PaymentDomain,
        ids: &dyn IdentityResolver,
    ) -> Result<PaymentRecord, MappingError> {
        MappingError::expect_kind(OperationKind::PaymentIn, payment.operation.kind)?;
        let registry = self.registry;

        let mut record = registry.create::<PaymentRecord>();
        record.operation = OperationRecord::from_domain(&payment.operation, ids);
        record.customer_order_id = payment.order_id.clone();
        record.shipment_id = payment.shipment_id.clone();
        record.organization_id = payment.organization_id.clone();
        record.organization_name = payment.organization_name.clone();
        record.customer_id = payment.customer_id.clone();
        record.customer_name = payment.customer_name.clone();
        record.vendor_id = payment.vendor_id.clone();
        record.purpose = payment.purpose.clone();
        record.gateway_code = payment.gateway_code.clone();
        record.incoming_date = payment.incoming_date;
        record.authorized_date = payment.authorized_date;
        record.captured_date = payment.captured_date;
        record.voided_date = payment.voided_date;
        record.tax_type = payment.tax_type.clone();

        record.price = payment.price;
        record.price_with_tax = payment.price_with_tax;
        record.discount_amount = payment.discount_amount;
        record.discount_amount_with_tax = payment.discount_amount_with_tax;
        record.total = payment.total;
        record.total_with_tax = payment.total_with_tax;
        record.tax_total = payment.tax_total;
        record.tax_percent_rate = payment.tax_percent_rate;

        if let Some(method) = &payment.payment_method {
            record.gateway_code = Some(method.code.clone());
        }

        record.addresses = Some(
            payment
                .billing_address
                .iter()
                .map(|address| registry.create::<AddressRecord>().fill_from(address))
                .collect(),
        );

        record.tax_details = payment.tax_details.as_ref().map(|items| {
            items
                .iter()
                .map(|item| registry.create::<TaxDetailRecord>().fill_from(item))
                .collect()
        });
        record.fee_details = payment.fee_details.as_ref().map(|items| {
            items
                .iter()
                .map(|item| registry.create::<FeeDetailRecord>().fill_from(item))
                .collect()
        });
        record.discounts = payment.discounts.as_ref().map(|items| {
            items
                .iter()
                .map(|item| registry.create::<DiscountRecord>().fill_from(item))
                .collect()
        });
        record.transactions = payment.transactions.as_ref().map(|items| {
            items
                .iter()
                .map(|item| registry.create::<TransactionRecord>().fill_from(item, ids))
                .collect()
        });
        record.refunds = payment.refunds.as_ref().map(|items| {
            items
                .iter()
                .map(|item| registry.create::<RefundRecord>().fill_from(item, ids))
                .collect()
        });
        record.captures = payment.captures.as_ref().map(|items| {
            items
                .iter()
                .map(|item| registry.create::<CaptureRecord>().fill_from(item, ids))
                .collect()
        });

        if payment.operation.status.as_deref().map_or(true, str::is_empty) {
            record.operation.status = Some(payment.payment_status.to_string());
        }

        record.dynamic_property_values = payment.dynamic_properties.as_deref().map(|properties| {
            expand_properties(properties, record.operation.id.as_deref(), registry)
        });

        Ok(record)
    }
}
