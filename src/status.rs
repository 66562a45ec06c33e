use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// Lifecycle state of an incoming payment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum PaymentStatus {
    #[default]
    New,
    Pending,
    Authorized,
    Paid,
    PartiallyRefunded,
    Refunded,
    Voided,
    Cancelled,
    Declined,
    Error,
    Custom,
}

impl PaymentStatus {
    /// Parses a stored status string; anything unrecognized becomes `Custom`.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return PaymentStatus::Custom;
        };
        match PaymentStatus::from_str(raw.trim()) {
            Ok(status) => status,
            Err(_) => {
                log::trace!("status '{}' is not a known payment status, using Custom", raw);
                PaymentStatus::Custom
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values_ignoring_case() {
        assert_eq!(PaymentStatus::parse_lenient(Some("Paid")), PaymentStatus::Paid);
        assert_eq!(
            PaymentStatus::parse_lenient(Some("partiallyrefunded")),
            PaymentStatus::PartiallyRefunded
        );
        assert_eq!(PaymentStatus::parse_lenient(Some(" Voided ")), PaymentStatus::Voided);
    }

    #[test]
    fn unknown_or_missing_values_become_custom() {
        assert_eq!(
            PaymentStatus::parse_lenient(Some("AwaitingBankWire")),
            PaymentStatus::Custom
        );
        assert_eq!(PaymentStatus::parse_lenient(Some("")), PaymentStatus::Custom);
        assert_eq!(PaymentStatus::parse_lenient(None), PaymentStatus::Custom);
    }

    #[test]
    fn display_matches_parse() {
        assert_eq!(PaymentStatus::Authorized.to_string(), "Authorized");
        assert_eq!(
            PaymentStatus::parse_lenient(Some(&PaymentStatus::Declined.to_string())),
            PaymentStatus::Declined
        );
    }
}
