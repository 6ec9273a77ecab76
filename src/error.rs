//! Error kinds reserved for the block system.

use thiserror::Error;

/// Errors block handling can report.
///
/// None are produced by the current code; the enumeration reserves the
/// kinds the block derivatives were designed to raise.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    /// A block list was indexed outside its `0..n` range.
    #[error("block index out of bounds")]
    OutOfBounds,

    /// A block list was accessed while completely empty.
    #[error("block list is empty")]
    ArrayEmpty,

    /// A derivative-specific method was called on a block of a
    /// different derivative.
    #[error("wrong block type for this operation")]
    WrongBlockType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_error_display() {
        assert_eq!(
            BlockError::OutOfBounds.to_string(),
            "block index out of bounds"
        );
        assert_eq!(BlockError::ArrayEmpty.to_string(), "block list is empty");
        assert_eq!(
            BlockError::WrongBlockType.to_string(),
            "wrong block type for this operation"
        );
    }
}
