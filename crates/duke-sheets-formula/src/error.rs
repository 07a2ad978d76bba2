//! Formula decode error types.

use thiserror::Error;

/// Result type for formula decode operations.
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while decoding an RPN formula program.
///
/// There is no evaluation here (see `crate` docs), so there is no
/// `Evaluation`/`CircularReference`/`ArgumentCount` variant: those belong to
/// a calculation engine, which this crate deliberately does not implement.
#[derive(Debug, Error)]
pub enum FormulaError {
    /// The formula payload ended before an opcode's operand was fully read.
    #[error("unexpected end of formula payload at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// A byte did not match any entry in the family's opcode table.
    #[error("unknown opcode 0x{opcode:02x} at offset {offset}")]
    UnknownOpcode { opcode: u8, offset: usize },

    /// The instruction stack was not exactly one expression at formula end.
    #[error("formula did not reduce to a single expression (stack depth {depth})")]
    UnbalancedStack { depth: usize },

    /// A group-close or function-close opcode had no matching opener.
    #[error("unmatched closing marker at offset {offset}")]
    UnmatchedClose { offset: usize },

    /// A range reference decoded a column/row index outside the family's
    /// addressable extent.
    #[error("reference out of range at offset {offset}: {reason}")]
    ReferenceOutOfRange { offset: usize, reason: String },

    /// A named reference (via the Name pool) did not resolve.
    #[error("name id {id} not found in name pool")]
    UnresolvedName { id: u32 },
}
