//! Argument validation for the public entry points.

/// Precondition violations on `build`, `project`, and `generate`.
///
/// These are caller programming errors, not transient conditions: a failing
/// call produces no partial output, and retrying with the same arguments
/// cannot succeed. The embedding layer is expected to validate user input
/// before it reaches this crate; these variants are the backstop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidArgument {
    /// Recursion depth below zero.
    NegativeRecursionDepth {
        /// The rejected depth.
        depth: i32,
    },
    /// Radius zero, negative, or not finite.
    NonPositiveRadius {
        /// The rejected radius.
        radius: f64,
    },
}

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeRecursionDepth { depth } => {
                write!(f, "recursion depth must be non-negative, got {depth}")
            }
            Self::NonPositiveRadius { radius } => {
                write!(f, "radius must be positive and finite, got {radius}")
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_value() {
        let e = InvalidArgument::NegativeRecursionDepth { depth: -1 };
        assert!(e.to_string().contains("-1"));

        let e = InvalidArgument::NonPositiveRadius { radius: 0.0 };
        assert!(e.to_string().contains('0'));
    }
}
