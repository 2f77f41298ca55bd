// src/error.rs

use thiserror::Error;

/// Fatal error conditions of the tensor engine.
///
/// Soft conditions (axial ambiguity, self-check mismatches, identical
/// tensors) are NOT errors; they are reported as [`crate::diagnostics::Advisory`]
/// values attached to the result.
#[derive(Debug, Error)]
pub enum TensorError {
    /// Input was not a 3x3 matrix (9 elements, row-major).
    #[error("expected a 3x3 matrix (9 elements), got {0}")]
    Dimension(usize),

    /// A convention string could not be parsed.
    #[error("unsupported convention '{0}'")]
    UnsupportedConvention(String),

    /// An internal consistency check failed. This indicates a bug in the
    /// engine, not bad input.
    #[error("internal consistency failure: {0}")]
    InvariantViolation(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = TensorError::Dimension(6);
        assert!(e.to_string().contains("got 6"));

        let e = TensorError::UnsupportedConvention("zxy".into());
        assert!(e.to_string().contains("zxy"));
    }
}
