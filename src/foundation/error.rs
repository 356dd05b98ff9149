/// Convenience result type used across dialogbox.
pub type DialogResult<T> = Result<T, DialogError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is reported to the caller; none of them abort the engine.
#[derive(thiserror::Error, Debug)]
pub enum DialogError {
    /// No dialogs are configured.
    #[error("no dialog has been set")]
    EmptySequence,

    /// A cursor, explicit index or background index is past the end of its list.
    #[error("invalid index: {what} index {index} while there are only {len} entries")]
    IndexOutOfRange {
        /// Which list was indexed.
        what: &'static str,
        /// The offending index.
        index: usize,
        /// Length of the list.
        len: usize,
    },

    /// A caller-supplied argument is malformed (e.g. a negative dialog index).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The visual tree does not have the expected shape.
    #[error("structure error: {0}")]
    Structure(String),

    /// Invalid user-provided modification or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The engine was built from an unusable configuration and ignores dispatches.
    #[error("engine is degraded: {0}")]
    Degraded(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DialogError {
    /// Build a [`DialogError::IndexOutOfRange`] value.
    pub fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { what, index, len }
    }

    /// Build a [`DialogError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`DialogError::Structure`] value.
    pub fn structure(msg: impl Into<String>) -> Self {
        Self::Structure(msg.into())
    }

    /// Build a [`DialogError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DialogError::Degraded`] value.
    pub fn degraded(msg: impl Into<String>) -> Self {
        Self::Degraded(msg.into())
    }

    /// Build a [`DialogError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
