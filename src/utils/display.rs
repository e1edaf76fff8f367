// ============================================================================
// Sequence Display
// Space-separated rendering of a sequence for logs and demos
// ============================================================================

use crate::numeric::Element;
use std::fmt;

/// Formats a sequence as `[ 1 2 3 ]`.
///
/// An empty sequence renders as `[ ]`.
#[derive(Debug, Clone, Copy)]
pub struct SequenceDisplay<'a, T>(pub &'a [T]);

impl<T: Element> fmt::Display for SequenceDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for value in self.0 {
            write!(f, "{} ", value)?;
        }
        f.write_str("]")
    }
}

/// Shorthand for `SequenceDisplay(seq)`
pub fn display<T: Element>(seq: &[T]) -> SequenceDisplay<'_, T> {
    SequenceDisplay(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed() {
        let data = [-8, -9, 12];
        assert_eq!(display(&data).to_string(), "[ -8 -9 12 ]");
    }

    #[test]
    fn test_unsigned() {
        let data = [255u8, 0];
        assert_eq!(SequenceDisplay(&data).to_string(), "[ 255 0 ]");
    }

    #[test]
    fn test_empty() {
        let data: [u32; 0] = [];
        assert_eq!(display(&data).to_string(), "[ ]");
    }
}
