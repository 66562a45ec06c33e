use crate::address::Address;
use crate::adjustments::{Discount, FeeDetail, TaxDetail};
use crate::domain::PaymentDomain;
use crate::dynamic_property::{DynamicProperty, DynamicPropertyValue, PropertyValue};
use crate::gateway::{Capture, PaymentTransaction, Refund};
use crate::operation::{Operation, OperationKind};
use crate::status::PaymentStatus;
use crate::util::{random_alphanum_upper, random_amount, random_digits, record_id};

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

pub struct GeneratorConfig {
    pub payments: usize,
    /// Upper bound for the length of each child collection.
    pub max_children: usize,
    /// Share of payments that already carry computed prices.
    pub priced_ratio: f64,
    pub currency: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            payments: 10,
            max_children: 3,
            priced_ratio: 0.8,
            currency: "EUR".to_string(),
        }
    }
}

const GATEWAYS: &[&str] = &["DefaultManualPaymentMethod", "AuthorizeNet", "Stripe", "PayPal"];

const STATUSES: &[PaymentStatus] = &[
    PaymentStatus::New,
    PaymentStatus::Pending,
    PaymentStatus::Authorized,
    PaymentStatus::Paid,
    PaymentStatus::PartiallyRefunded,
    PaymentStatus::Refunded,
    PaymentStatus::Voided,
];

const CUSTOMERS: &[&str] = &[
    "Ada Byrne", "Jonas Weber", "Lucia Moretti", "Pieter de Vries", "Maja Nowak", "Elena Costa",
];

const CITIES: &[(&str, &str)] = &[
    ("Dublin", "IRL"),
    ("Berlin", "DEU"),
    ("Lisbon", "PRT"),
    ("Warsaw", "POL"),
    ("Vienna", "AUT"),
    ("Riga", "LVA"),
];

const STREETS: &[&str] = &["Market", "Station", "Harbor", "Mill", "Garden", "King"];

const TAX_NAMES: &[&str] = &["VAT", "Duty", "Excise", "Eco fee", "City tax"];

const FEE_IDS: &[&str] = &["card-surcharge", "fx-margin", "wire-fee", "risk-review"];

const PROMOTIONS: &[&str] = &["SPRING", "LOYALTY10", "FREESHIP", "BUNDLE"];

const PROPERTIES: &[(&str, &str, &[&str])] = &[
    ("P-CHANNEL", "Channel", &["POS", "Web", "Mobile"]),
    ("P-COLOR", "Color", &["Red", "Blue", "Green"]),
    ("P-SIZE", "Size", &["S", "M", "L"]),
];

/// Builds `config.payments` well-formed payments. The same seed always
/// produces the same payments.
pub fn generate_payments(config: &GeneratorConfig, seed: u64) -> Result<Vec<PaymentDomain>, String> {
    if !(0.0..=1.0).contains(&config.priced_ratio) {
        return Err("priced_ratio must be 0..1".to_string());
    }
    if config.currency.len() != 3 {
        return Err("currency must be a 3-letter code".to_string());
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let base = Utc
        .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| "invalid base timestamp".to_string())?;

    let mut payments = Vec::with_capacity(config.payments);
    for _ in 0..config.payments {
        payments.push(generate_payment(config, base, &mut rng));
    }
    log::debug!("generated {} payments from seed {}", payments.len(), seed);
    Ok(payments)
}

fn generate_payment<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    base: DateTime<Utc>,
    rng: &mut R,
) -> PaymentDomain {
    let payment_status = *STATUSES.choose(rng).unwrap_or(&PaymentStatus::New);
    let created = base + Duration::seconds(rng.gen_range(0..86_400 * 90));
    let customer = *CUSTOMERS.choose(rng).unwrap_or(&"Anonymous");

    let operation = Operation {
        id: Some(record_id(rng, "pay")),
        kind: OperationKind::PaymentIn,
        number: Some(format!("PI{}", random_digits(rng, 6))),
        is_approved: rng.gen_bool(0.5),
        status: Some(payment_status.to_string()),
        currency: Some(config.currency.clone()),
        outer_id: Some(random_alphanum_upper(rng, 12)),
        created_date: Some(created),
        created_by: Some("generator".to_string()),
        ..Operation::default()
    };

    let mut payment = PaymentDomain {
        operation,
        order_id: Some(record_id(rng, "order")),
        customer_id: Some(record_id(rng, "cust")),
        customer_name: Some(customer.to_string()),
        organization_id: Some(record_id(rng, "org")),
        purpose: Some(format!("Payment for order of {customer}")),
        gateway_code: GATEWAYS.choose(rng).map(|code| code.to_string()),
        payment_status,
        incoming_date: Some(created),
        tax_type: Some("Standard".to_string()),
        billing_address: Some(generate_address(rng, customer)),
        ..PaymentDomain::default()
    };
    if matches!(
        payment_status,
        PaymentStatus::Authorized | PaymentStatus::Paid | PaymentStatus::PartiallyRefunded
    ) {
        payment.authorized_date = Some(created + Duration::minutes(rng.gen_range(1..60)));
    }
    if payment_status == PaymentStatus::Paid {
        payment.captured_date = Some(created + Duration::hours(rng.gen_range(1..48)));
    }

    if rng.gen_bool(config.priced_ratio) {
        apply_prices(&mut payment, rng);
    }

    let currency = config.currency.as_str();
    payment.tax_details = Some(
        pick_distinct(rng, TAX_NAMES, 0, config.max_children)
            .into_iter()
            .map(|name| TaxDetail {
                name: Some(name.to_string()),
                rate: Decimal::new(rng.gen_range(0..=25), 2),
                amount: random_amount(rng, 0, 2_000),
            })
            .collect(),
    );
    payment.fee_details = Some(
        pick_distinct(rng, FEE_IDS, 0, config.max_children)
            .into_iter()
            .map(|fee_id| FeeDetail {
                fee_id: Some(fee_id.to_string()),
                description: Some(format!("{fee_id} charged by gateway")),
                currency: Some(currency.to_string()),
                amount: random_amount(rng, 10, 500),
            })
            .collect(),
    );
    payment.discounts = Some(
        pick_distinct(rng, PROMOTIONS, 0, config.max_children)
            .into_iter()
            .map(|promotion| Discount {
                promotion_id: Some(promotion.to_string()),
                promotion_description: Some(format!("{promotion} promotion")),
                coupon_code: rng.gen_bool(0.3).then(|| random_alphanum_upper(rng, 8)),
                currency: Some(currency.to_string()),
                amount: random_amount(rng, 100, 1_500),
                amount_with_tax: random_amount(rng, 100, 1_800),
            })
            .collect(),
    );
    payment.transactions = Some(
        (0..rng.gen_range(0..=config.max_children))
            .map(|_| generate_transaction(rng, currency, created))
            .collect(),
    );
    payment.refunds = Some(
        (0..rng.gen_range(0..=config.max_children))
            .map(|_| Refund {
                id: Some(record_id(rng, "rf")),
                number: Some(format!("RF{}", random_digits(rng, 6))),
                status: Some("Processed".to_string()),
                currency: Some(currency.to_string()),
                amount: random_amount(rng, 100, 5_000),
                reason_code: Some("Other".to_string()),
                ..Refund::default()
            })
            .collect(),
    );
    payment.captures = Some(
        (0..rng.gen_range(0..=config.max_children))
            .map(|_| Capture {
                id: Some(record_id(rng, "cp")),
                number: Some(format!("CP{}", random_digits(rng, 6))),
                status: Some("Processed".to_string()),
                currency: Some(currency.to_string()),
                amount: random_amount(rng, 100, 5_000),
                close_transaction: rng.gen_bool(0.5),
                ..Capture::default()
            })
            .collect(),
    );
    let mut properties = Vec::new();
    for (id, name, choices) in PROPERTIES {
        if !rng.gen_bool(0.6) {
            continue;
        }
        let values = pick_distinct(rng, choices, 1, 2)
            .into_iter()
            .map(|value| DynamicPropertyValue {
                locale: None,
                value: Some(PropertyValue::ShortText(value.to_string())),
            })
            .collect();
        properties.push(DynamicProperty {
            id: id.to_string(),
            name: Some(name.to_string()),
            values,
        });
    }
    payment.dynamic_properties = Some(properties);

    payment
}

fn apply_prices<R: Rng + ?Sized>(payment: &mut PaymentDomain, rng: &mut R) {
    let rate = Decimal::new(rng.gen_range(0..=25), 2);
    let price = random_amount(rng, 500, 50_000);
    let discount = random_amount(rng, 0, 400);
    let total = price - discount;
    let tax_total = (total * rate).round_dp(2);

    payment.tax_percent_rate = rate;
    payment.price = price;
    payment.price_with_tax = (price * (Decimal::ONE + rate)).round_dp(2);
    payment.discount_amount = discount;
    payment.discount_amount_with_tax = (discount * (Decimal::ONE + rate)).round_dp(2);
    payment.total = total;
    payment.tax_total = tax_total;
    payment.total_with_tax = total + tax_total;
    payment.operation.sum = total + tax_total;
}

fn generate_address<R: Rng + ?Sized>(rng: &mut R, customer: &str) -> Address {
    let (city, country) = *CITIES.choose(rng).unwrap_or(&("Dublin", "IRL"));
    let street = *STREETS.choose(rng).unwrap_or(&"Market");
    let mut names = customer.splitn(2, ' ');
    Address {
        address_type: Some("Billing".to_string()),
        first_name: names.next().map(str::to_string),
        last_name: names.next().map(str::to_string),
        line1: Some(format!("{} {} Street", rng.gen_range(1..200), street)),
        city: Some(city.to_string()),
        country_code: Some(country.to_string()),
        postal_code: Some(random_digits(rng, 5)),
        email: Some(format!(
            "{}@example.com",
            customer.to_lowercase().replace(' ', ".")
        )),
        ..Address::default()
    }
}

fn generate_transaction<R: Rng + ?Sized>(
    rng: &mut R,
    currency: &str,
    created: DateTime<Utc>,
) -> PaymentTransaction {
    let processed = rng.gen_bool(0.7);
    PaymentTransaction {
        id: Some(record_id(rng, "tx")),
        amount: random_amount(rng, 100, 50_000),
        currency: Some(currency.to_string()),
        transaction_type: Some(if processed { "Capture" } else { "Authorize" }.to_string()),
        status: Some(if processed { "Processed" } else { "Pending" }.to_string()),
        is_processed: processed,
        processed_date: processed.then(|| created + Duration::minutes(5)),
        process_attempt_count: rng.gen_range(1..4),
        response_code: Some(random_digits(rng, 3)),
        gateway_ip_address: Some(format!("10.0.{}.{}", rng.gen_range(0..255), rng.gen_range(1..255))),
        ..PaymentTransaction::default()
    }
}

fn pick_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[&'static str],
    min: usize,
    max: usize,
) -> Vec<&'static str> {
    let upper = max.min(pool.len());
    let count = rng.gen_range(min.min(upper)..=upper);
    pool.choose_multiple(rng, count).copied().collect()
}
