//! # duke-sheets-formula
//!
//! RPN formula decoder shared by the Lotus and Multiplan family crates.
//!
//! Lotus and Multiplan formulas are stored as compiled stacks of
//! instructions over a private per-family opcode table, not as formula
//! text, so this crate decodes bytes straight into a [`FormulaExpr`] tree
//! (see [`lotus::decode`] and [`multiplan::decode`]). There is no
//! evaluator, no dependency graph, and no built-in function library here:
//! a decoded `Function` node carries the family's opcode-table name and its
//! already-decoded argument expressions, ready for an emitter to render,
//! and nothing in this crate ever computes a cell's value.
//!
//! ## Example
//!
//! ```rust,ignore
//! use duke_sheets_formula::lotus;
//!
//! let expr = lotus::decode(&payload, sheet_id, sheet_name_of, &names, true)?;
//! ```

pub mod ast;
pub mod error;
pub mod lotus;
pub mod multiplan;
pub mod rpn;

pub use ast::{BinaryOperator, ExternalRef, FormulaExpr, UnaryOperator};
pub use error::{FormulaError, FormulaResult};
