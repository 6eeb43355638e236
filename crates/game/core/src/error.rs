//! Common error infrastructure for battle-core.
//!
//! Domain errors live next to the code that raises them (`LifecycleError` in
//! [`crate::battle`], `PlayerTurnError` in [`crate::phase`], `RosterError` in
//! [`crate::roster`], `OracleError` in [`crate::env`]). This module only holds
//! the shared classification used by all of them.
//!
//! # Severity model
//!
//! - **Validation**: the caller handed in data the battle cannot use (unknown
//!   unit, ally decision after `done()`); the battle itself is untouched.
//! - **Fatal**: the caller broke the lifecycle contract (restarting a phase,
//!   updating a finished battle) or a required oracle is missing. The driver
//!   must stop; nothing in the core retries.

/// Severity level of an error, used for categorization and handling strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Temporary condition; the same call may succeed later.
    Recoverable,

    /// Invalid input, rejected without touching battle state.
    Validation,

    /// Unexpected inconsistency inside the core. Indicates a bug.
    Internal,

    /// Contract violation. The battle cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if the driver must stop driving the battle.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by what the driver must do, not by how bad it looks
/// - Return a stable SCREAMING_SNAKE code from `error_code` for logs and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
