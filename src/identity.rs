use uuid::Uuid;

/// Record families that receive a primary key while being built from a
/// domain object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Operation,
    Transaction,
    Refund,
    Capture,
}

pub trait IdentityResolver {
    /// Returns the primary key for a record of `kind`, reusing `existing`
    /// when the domain object already carries one.
    fn resolve_id(&self, kind: RecordKind, existing: Option<&str>) -> String;
}

/// Reuses non-blank ids and mints a v4 UUID for everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdentityResolver;

impl IdentityResolver for UuidIdentityResolver {
    fn resolve_id(&self, kind: RecordKind, existing: Option<&str>) -> String {
        match existing.map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                let id = Uuid::new_v4().to_string();
                log::trace!("assigned new {:?} id {}", kind, id);
                id
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_existing_ids() {
        let id = UuidIdentityResolver.resolve_id(RecordKind::Refund, Some("rf-7"));
        assert_eq!(id, "rf-7");
    }

    #[test]
    fn mints_fresh_ids_for_missing_or_blank() {
        let first = UuidIdentityResolver.resolve_id(RecordKind::Capture, None);
        let second = UuidIdentityResolver.resolve_id(RecordKind::Capture, Some("  "));
        assert!(Uuid::parse_str(&first).is_ok());
        assert!(Uuid::parse_str(&second).is_ok());
        assert_ne!(first, second);
    }
}
