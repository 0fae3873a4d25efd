//! Error handling for the fixmap library
//!
//! Every fallible operation in the crate reports a [`FixmapError`]. The
//! chained-bucket map never fails on insert; the open-addressing map reports
//! [`FixmapError::MapFull`] when a new key cannot be placed.

use thiserror::Error;

/// Main error type for the fixmap library
#[derive(Error, Debug)]
pub enum FixmapError {
    /// I/O related errors (config and report files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A new distinct key could not be placed in an open-addressing map
    #[error("Map is full: cannot insert new key into map of capacity {capacity}")]
    MapFull {
        /// Fixed slot count of the map that rejected the insert
        capacity: usize,
    },

    /// A lookup for a previously inserted key returned a wrong or missing value
    #[error("Lookup mismatch for key {key}")]
    LookupMismatch {
        /// The key whose stored value did not match
        key: u64,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// JSON encoding or decoding failures
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message from the serializer
        message: String,
    },
}

impl FixmapError {
    /// Create a map full error
    pub fn map_full(capacity: usize) -> Self {
        Self::MapFull { capacity }
    }

    /// Create a lookup mismatch error
    pub fn lookup_mismatch(key: u64) -> Self {
        Self::LookupMismatch { key }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// A full map is recoverable by the caller (use a larger capacity); a
    /// lookup mismatch means the map lost data and is not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::MapFull { .. } => true,
            Self::LookupMismatch { .. } => false,
            Self::Configuration { .. } => false,
            Self::Serialization { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::MapFull { .. } => "capacity",
            Self::LookupMismatch { .. } => "integrity",
            Self::Configuration { .. } => "config",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for FixmapError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FixmapError>;

/// Assert that a slot or bucket count can back a fixed-size table
#[inline]
pub fn check_slot_count(count: usize) -> Result<()> {
    if count == 0 {
        Err(FixmapError::configuration("slot count must be greater than 0"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = FixmapError::map_full(13);
        assert_eq!(err.category(), "capacity");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_slot_count_checking() {
        assert!(check_slot_count(1).is_ok());
        assert!(check_slot_count(54917).is_ok());
        assert!(check_slot_count(0).is_err());
    }

    #[test]
    fn test_error_categories() {
        let io_err = FixmapError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));
        assert_eq!(io_err.category(), "io");
        assert!(io_err.is_recoverable());

        let mismatch = FixmapError::lookup_mismatch(42);
        assert_eq!(mismatch.category(), "integrity");
        assert!(!mismatch.is_recoverable());

        let config_err = FixmapError::configuration("zero buckets");
        assert_eq!(config_err.category(), "config");
        assert!(!config_err.is_recoverable());

        let ser_err = FixmapError::serialization("bad json");
        assert_eq!(ser_err.category(), "serialization");
        assert!(!ser_err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let full = format!("{}", FixmapError::map_full(13));
        assert!(full.contains("Map is full"));
        assert!(full.contains("13"));

        let mismatch = format!("{}", FixmapError::lookup_mismatch(20000));
        assert!(mismatch.contains("Lookup mismatch"));
        assert!(mismatch.contains("20000"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: FixmapError = io_error.into();
        assert_eq!(err.category(), "io");
        assert!(format!("{}", err).contains("I/O error"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u64>("not a number").unwrap_err();
        let err: FixmapError = json_err.into();
        assert_eq!(err.category(), "serialization");
    }

    #[test]
    fn test_error_debug() {
        let err = FixmapError::configuration("debug test");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Configuration"));
        assert!(debug_str.contains("debug test"));
    }
}
