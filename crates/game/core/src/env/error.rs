//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a phase needs an oracle the driver did not supply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            OracleError::RngNotAvailable => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
