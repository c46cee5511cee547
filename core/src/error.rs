//! Errors surfaced by the dispatch layer.
//!
//! Unknown platforms are not errors: they resolve to the unsupported
//! descriptor. Only missing capabilities and malformed input are raised.

use std::fmt;

/// A construction capability a platform descriptor may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Turns attached media into configuration slots
    Loader,
    /// Starts the emulation backend
    Runner,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Loader => "loader",
            Capability::Runner => "runner",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for loader/runner construction and media loading.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The platform exists (or is unsupported) but lacks the capability.
    #[error("{capability} is not available for platform '{platform}'")]
    CapabilityUnavailable {
        platform: String,
        capability: Capability,
    },

    /// Upstream handed us input that does not follow the contract.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl DispatchError {
    pub fn is_capability_unavailable(&self) -> bool {
        matches!(self, Self::CapabilityUnavailable { .. })
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedInput(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_unavailable_message() {
        let err = DispatchError::CapabilityUnavailable {
            platform: "amiga".to_string(),
            capability: Capability::Loader,
        };
        assert_eq!(err.to_string(), "loader is not available for platform 'amiga'");
        assert!(err.is_capability_unavailable());
    }

    #[test]
    fn test_json_error_becomes_malformed_input() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = DispatchError::from(json_err);
        assert!(matches!(err, DispatchError::MalformedInput(_)));
        assert!(!err.is_capability_unavailable());
    }
}
