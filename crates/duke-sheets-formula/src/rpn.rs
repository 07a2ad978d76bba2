//! Shared RPN-to-tree reduction engine.
//!
//! Lotus and Multiplan formulas are compiled stacks of instructions (§4.G);
//! both families' opcode loops push/pop through the same small set of
//! operations, so the stack-management bookkeeping (and its error paths)
//! lives here once, while each family's `decode_*` walks its own bytes and
//! opcode table and drives this engine.

use crate::ast::{BinaryOperator, FormulaExpr, UnaryOperator};
use crate::error::FormulaError;

enum Frame {
    Value(FormulaExpr),
    FuncMarker {
        name: &'static str,
        args: Vec<FormulaExpr>,
    },
}

/// The instruction stack driving one formula's reduction.
pub struct ExprStack {
    frames: Vec<Frame>,
}

impl ExprStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push_value(&mut self, expr: FormulaExpr) {
        self.frames.push(Frame::Value(expr));
    }

    /// Wrap the value on top of the stack in an explicit parenthesized
    /// group. Lotus encodes its `(...)` group as a single postfix opcode
    /// (arity 1, like a unary operator) rather than a matched open/close
    /// pair, so this pops exactly one already-built value.
    pub fn wrap_group(&mut self, offset: usize) -> Result<(), FormulaError> {
        let inner = self.pop_value(offset)?;
        self.frames.push(Frame::Value(FormulaExpr::Group(Box::new(inner))));
        Ok(())
    }

    pub fn push_func_open(&mut self, name: &'static str) {
        self.frames.push(Frame::FuncMarker {
            name,
            args: Vec::new(),
        });
    }

    /// An argument separator: the value built since the last separator (or
    /// the function open) becomes the next positional argument.
    pub fn push_arg_separator(&mut self, offset: usize) -> Result<(), FormulaError> {
        let value = self.pop_value(offset)?;
        match self.frames.last_mut() {
            Some(Frame::FuncMarker { args, .. }) => {
                args.push(value);
                Ok(())
            }
            _ => Err(FormulaError::UnmatchedClose { offset }),
        }
    }

    /// Close a function call, folding in the final argument (if any were
    /// built since the last separator) and emitting `Function{name,args}`.
    pub fn close_function(&mut self, offset: usize) -> Result<(), FormulaError> {
        let trailing = if matches!(self.frames.last(), Some(Frame::Value(_))) {
            Some(self.pop_value(offset)?)
        } else {
            None
        };
        match self.frames.pop() {
            Some(Frame::FuncMarker { name, mut args }) => {
                if let Some(value) = trailing {
                    args.push(value);
                }
                self.frames.push(Frame::Value(FormulaExpr::Function { name, args }));
                Ok(())
            }
            _ => Err(FormulaError::UnmatchedClose { offset }),
        }
    }

    /// Pop `arity` already-reduced values off the stack (in the order they
    /// were pushed) and fold them into a function call. This is the shape
    /// Lotus formulas use: operands are fully decoded before the function
    /// opcode is seen, so the opcode just needs to know how many of the
    /// preceding values are its arguments.
    pub fn apply_function(
        &mut self,
        name: &'static str,
        arity: usize,
        offset: usize,
    ) -> Result<(), FormulaError> {
        let mut args = Vec::with_capacity(arity);
        for _ in 0..arity {
            args.push(self.pop_value(offset)?);
        }
        args.reverse();
        self.push_value(FormulaExpr::Function { name, args });
        Ok(())
    }

    /// Pop `n` already-reduced values off the stack, in the order they were
    /// pushed, without building any new node. Used by decoders that need to
    /// rewrite a function's arguments (e.g. Lotus's `TERM`/`CTERM` remap)
    /// before re-pushing a different call.
    pub fn pop_n(&mut self, n: usize, offset: usize) -> Result<Vec<FormulaExpr>, FormulaError> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(self.pop_value(offset)?);
        }
        values.reverse();
        Ok(values)
    }

    pub fn apply_unary(&mut self, op: UnaryOperator, offset: usize) -> Result<(), FormulaError> {
        let operand = self.pop_value(offset)?;
        self.push_value(FormulaExpr::UnaryOp {
            op,
            operand: Box::new(operand),
        });
        Ok(())
    }

    pub fn apply_binary(&mut self, op: BinaryOperator, offset: usize) -> Result<(), FormulaError> {
        let right = self.pop_value(offset)?;
        let left = self.pop_value(offset)?;
        self.push_value(FormulaExpr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        });
        Ok(())
    }

    fn pop_value(&mut self, offset: usize) -> Result<FormulaExpr, FormulaError> {
        match self.frames.pop() {
            Some(Frame::Value(v)) => Ok(v),
            Some(other) => {
                self.frames.push(other);
                Err(FormulaError::UnbalancedStack {
                    depth: self.frames.len(),
                })
            }
            None => Err(FormulaError::UnbalancedStack { depth: 0 }),
        }
    }

    /// Consume the stack; errors unless exactly one value remains.
    pub fn finish(mut self) -> Result<FormulaExpr, FormulaError> {
        if self.frames.len() != 1 {
            return Err(FormulaError::UnbalancedStack {
                depth: self.frames.len(),
            });
        }
        match self.frames.pop().unwrap() {
            Frame::Value(v) => Ok(v),
            _ => Err(FormulaError::UnbalancedStack { depth: 1 }),
        }
    }
}

impl Default for ExprStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_a_plus_b() {
        let mut stack = ExprStack::new();
        stack.push_value(FormulaExpr::Number(1.0));
        stack.push_value(FormulaExpr::Number(2.0));
        stack.apply_binary(BinaryOperator::Add, 0).unwrap();
        assert_eq!(
            stack.finish().unwrap(),
            FormulaExpr::BinaryOp {
                op: BinaryOperator::Add,
                left: Box::new(FormulaExpr::Number(1.0)),
                right: Box::new(FormulaExpr::Number(2.0)),
            }
        );
    }

    #[test]
    fn function_with_two_args() {
        let mut stack = ExprStack::new();
        stack.push_func_open("Sum");
        stack.push_value(FormulaExpr::Number(1.0));
        stack.push_arg_separator(0).unwrap();
        stack.push_value(FormulaExpr::Number(2.0));
        stack.close_function(0).unwrap();
        assert_eq!(
            stack.finish().unwrap(),
            FormulaExpr::Function {
                name: "Sum",
                args: vec![FormulaExpr::Number(1.0), FormulaExpr::Number(2.0)],
            }
        );
    }

    #[test]
    fn unbalanced_stack_is_an_error() {
        let mut stack = ExprStack::new();
        stack.push_value(FormulaExpr::Number(1.0));
        stack.push_value(FormulaExpr::Number(2.0));
        assert!(stack.finish().is_err());
    }
}
