//! Mapping of incoming order payments between their domain and storage
//! shapes, and in-place merging of a freshly built record into a stored one.

pub mod address;
pub mod adjustments;
pub mod converter;
pub mod domain;
pub mod dynamic_property;
pub mod error;
pub mod factory;
pub mod gateway;
pub mod generator;
pub mod identity;
pub mod logging;
pub mod operation;
pub mod patch;
pub mod price_guard;
pub mod reconcile;
pub mod record;
pub mod status;
mod util;

pub use converter::PaymentConverter;
pub use domain::PaymentDomain;
pub use error::MappingError;
pub use factory::TypeRegistry;
pub use identity::{IdentityResolver, UuidIdentityResolver};
pub use patch::{patch_payment, PatchOutcome};
pub use record::PaymentRecord;
