//! Error types for agreement scoring.

use thiserror::Error;

/// Errors that can occur while scoring agreement between label vectors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgreementError {
    /// The two label vectors do not describe the same number of items.
    ///
    /// Both vectors must assign a label to the same items in the same
    /// order; a length mismatch means the caller paired up the wrong
    /// vectors, so the computation is refused rather than truncated.
    #[error("Label vector length mismatch: left has {left} items, right has {right}")]
    LengthMismatch {
        /// Length of the first label vector
        left: usize,
        /// Length of the second label vector
        right: usize,
    },
}

impl AgreementError {
    /// Create a LengthMismatch error.
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }
}

/// Result type alias for agreement operations.
pub type AgreementResult<T> = Result<T, AgreementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = AgreementError::length_mismatch(3, 4);
        let display = err.to_string();
        assert!(display.contains("left has 3"), "got: {}", display);
        assert!(display.contains("right has 4"), "got: {}", display);

        println!("[PASS] test_length_mismatch_display - message names both lengths");
    }

    #[test]
    fn test_error_is_debug_and_eq() {
        let a = AgreementError::length_mismatch(1, 2);
        let b = AgreementError::LengthMismatch { left: 1, right: 2 };
        assert_eq!(a, b, "constructor should match struct literal");
        assert!(!format!("{:?}", a).is_empty(), "Debug should produce output");

        println!("[PASS] test_error_is_debug_and_eq - constructor matches literal");
    }
}
