use payment_in_sync::adjustments::TaxDetailRecord;
use payment_in_sync::dynamic_property::{
    DynamicPropertyValueRecord, PropertyValue, PropertyValueType,
};
use payment_in_sync::generator::{generate_payments, GeneratorConfig};
use payment_in_sync::operation::OperationKind;
use payment_in_sync::{
    patch_payment, MappingError, PaymentConverter, PaymentDomain, PaymentRecord, TypeRegistry,
    UuidIdentityResolver,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn sample_payments(seed: u64) -> Vec<PaymentDomain> {
    let config = GeneratorConfig {
        payments: 20,
        max_children: 4,
        ..GeneratorConfig::default()
    };
    generate_payments(&config, seed).unwrap()
}

fn to_record(payment: &PaymentDomain) -> PaymentRecord {
    let registry = TypeRegistry::new();
    PaymentConverter::new(&registry)
        .from_domain(payment, &UuidIdentityResolver)
        .unwrap()
}

fn monetary(record: &PaymentRecord) -> [Decimal; 9] {
    [
        record.price,
        record.price_with_tax,
        record.discount_amount,
        record.discount_amount_with_tax,
        record.total,
        record.total_with_tax,
        record.tax_total,
        record.tax_percent_rate,
        record.operation.sum,
    ]
}

fn text_row(property_id: &str, name: &str, value: &str) -> DynamicPropertyValueRecord {
    DynamicPropertyValueRecord {
        object_type: Some("PaymentIn".to_string()),
        object_id: Some("pay-1".to_string()),
        property_id: property_id.to_string(),
        property_name: Some(name.to_string()),
        value_type: PropertyValueType::ShortText,
        short_text_value: Some(value.to_string()),
        ..DynamicPropertyValueRecord::default()
    }
}

fn tax(id: Option<&str>, name: &str, amount: Decimal) -> TaxDetailRecord {
    TaxDetailRecord {
        id: id.map(str::to_string),
        name: Some(name.to_string()),
        amount,
        ..TaxDetailRecord::default()
    }
}

#[test]
fn domain_survives_a_trip_through_storage() {
    let registry = TypeRegistry::new();
    let converter = PaymentConverter::new(&registry);

    for seed in [1, 7, 42] {
        for payment in sample_payments(seed) {
            let record = converter
                .from_domain(&payment, &UuidIdentityResolver)
                .unwrap();
            let back = converter.to_domain(&record).unwrap();
            assert_eq!(back, payment);
        }
    }
}

#[test]
fn patching_twice_equals_patching_once() {
    for seed in [3, 11] {
        let stored = sample_payments(seed);
        let incoming = sample_payments(seed + 100);

        for (old, new) in stored.iter().zip(incoming.iter()) {
            let mut source = to_record(new);
            source.operation.id = old.operation.id.clone();

            let mut once = to_record(old);
            patch_payment(&source, &mut once).unwrap();
            let mut twice = once.clone();
            patch_payment(&source, &mut twice).unwrap();

            assert_eq!(twice, once);
        }
    }
}

#[test]
fn unpriced_source_does_not_clobber_stored_prices() {
    let mut source = PaymentRecord::default();
    source.total = dec!(100);

    let mut target = PaymentRecord {
        price: dec!(45),
        price_with_tax: dec!(54.45),
        discount_amount: dec!(5),
        discount_amount_with_tax: dec!(6.05),
        total: dec!(50),
        total_with_tax: dec!(48.40),
        tax_total: dec!(8.40),
        tax_percent_rate: dec!(0.21),
        ..PaymentRecord::default()
    };
    target.operation.sum = dec!(48.40);
    let before = monetary(&target);

    let outcome = patch_payment(&source, &mut target).unwrap();

    assert!(!outcome.prices_overwritten);
    assert_eq!(monetary(&target), before);
}

#[test]
fn priced_source_overwrites_every_money_field() {
    let mut source = PaymentRecord {
        price: dec!(10),
        tax_percent_rate: dec!(0.2),
        price_with_tax: dec!(12),
        total: dec!(10),
        total_with_tax: dec!(12),
        tax_total: dec!(2),
        ..PaymentRecord::default()
    };
    source.operation.sum = dec!(10);

    for seed in [5, 6] {
        for payment in sample_payments(seed) {
            let mut target = to_record(&payment);
            let outcome = patch_payment(&source, &mut target).unwrap();
            assert!(outcome.prices_overwritten);
            assert!(target.needs_sum_patch);
            assert_eq!(monetary(&target), monetary(&source));
        }
    }
}

#[test]
fn zero_source_into_zero_target_stays_zero() {
    let source = PaymentRecord::default();
    let mut target = PaymentRecord::default();

    let outcome = patch_payment(&source, &mut target).unwrap();

    assert!(outcome.prices_overwritten);
    assert!(monetary(&target).iter().all(Decimal::is_zero));
}

#[test]
fn tax_details_reconcile_by_name() {
    let mut target = PaymentRecord {
        tax_details: Some(vec![
            tax(Some("tax-vat"), "VAT", dec!(5)),
            tax(Some("tax-duty"), "Duty", dec!(2)),
        ]),
        ..PaymentRecord::default()
    };
    let source = PaymentRecord {
        tax_details: Some(vec![
            tax(None, "VAT", dec!(9)),
            tax(None, "Excise", dec!(1)),
        ]),
        ..PaymentRecord::default()
    };

    patch_payment(&source, &mut target).unwrap();

    assert_eq!(
        target.tax_details,
        Some(vec![
            tax(Some("tax-vat"), "VAT", dec!(9)),
            tax(None, "Excise", dec!(1)),
        ])
    );
}

#[test]
fn dynamic_rows_group_and_expand_in_first_seen_order() {
    let registry = TypeRegistry::new();
    let converter = PaymentConverter::new(&registry);
    let rows = vec![
        text_row("P1", "Color", "Red"),
        text_row("P1", "Color", "Blue"),
        text_row("P2", "Size", "M"),
    ];
    let mut record = PaymentRecord {
        dynamic_property_values: Some(rows.clone()),
        ..PaymentRecord::default()
    };
    record.operation.id = Some("pay-1".to_string());

    let payment = converter.to_domain(&record).unwrap();
    let properties = payment.dynamic_properties.clone().unwrap();

    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].id, "P1");
    assert_eq!(properties[0].name.as_deref(), Some("Color"));
    let colors: Vec<_> = properties[0]
        .values
        .iter()
        .map(|value| value.value.clone())
        .collect();
    assert_eq!(
        colors,
        vec![
            Some(PropertyValue::ShortText("Red".to_string())),
            Some(PropertyValue::ShortText("Blue".to_string())),
        ]
    );
    assert_eq!(properties[1].id, "P2");
    assert_eq!(properties[1].values.len(), 1);

    let back = converter
        .from_domain(&payment, &UuidIdentityResolver)
        .unwrap();
    assert_eq!(back.dynamic_property_values, Some(rows));
}

#[test]
fn wrong_kind_fails_everywhere_without_side_effects() {
    let registry = TypeRegistry::new();
    let converter = PaymentConverter::new(&registry);

    let mut shipment = sample_payments(2).remove(0);
    shipment.operation.kind = OperationKind::Shipment;
    assert!(matches!(
        converter.from_domain(&shipment, &UuidIdentityResolver),
        Err(MappingError::TypeMismatch { .. })
    ));

    let mut record = to_record(&sample_payments(2).remove(0));
    record.operation.kind = OperationKind::Shipment;
    assert!(matches!(
        converter.to_domain(&record),
        Err(MappingError::TypeMismatch { .. })
    ));

    let source = to_record(&sample_payments(4).remove(0));
    let before = record.clone();
    assert!(patch_payment(&source, &mut record).is_err());
    assert_eq!(record, before);
}
