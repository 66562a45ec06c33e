use crate::operation::OperationKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("operation must be of kind {expected}, got {actual}")]
    TypeMismatch {
        expected: OperationKind,
        actual: OperationKind,
    },
}

impl MappingError {
    pub(crate) fn expect_kind(expected: OperationKind, actual: OperationKind) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(MappingError::TypeMismatch { expected, actual })
        }
    }
}
