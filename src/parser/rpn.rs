//! Reduction of reverse Polish notation into interned expressions.

use log::warn;

use super::{Op, ParseError, Token};
use crate::core::{
    arena::Arena,
    expr::{Expr::*, Id},
};

/// Reduces a token stream in reverse Polish notation to a single expression.
///
/// Every operator pops its operands (right before left) and pushes the constructed
/// expression.
/// An operator without enough operands is fatal to the formula; residual values beyond the
/// final one are discarded with a warning and the last-constructed value wins.
pub(super) fn reduce(arena: &mut Arena, tokens: Vec<Token>) -> Result<Id, ParseError> {
    let mut stack = Vec::<Id>::new();
    for token in tokens {
        let id = match token {
            Token::Atom(name) => arena.atom(name),
            Token::Operator(op) if op.is_prefix() => {
                let child = pop(&mut stack, op)?;
                match op {
                    Op::Not => arena.expr(Not(child)),
                    Op::Box => arena.expr(Box(child)),
                    Op::Diamond => arena.expr(Diamond(child)),
                    _ => unreachable!(),
                }
            }
            Token::Operator(op) => {
                let right = pop(&mut stack, op)?;
                let left = pop(&mut stack, op)?;
                match op {
                    Op::And => arena.expr(And(left, right)),
                    Op::Or => arena.expr(Or(left, right)),
                    Op::Imp => arena.expr(Imp(left, right)),
                    Op::Iff => arena.expr(Iff(left, right)),
                    _ => unreachable!(),
                }
            }
            // parentheses never survive shunting
            Token::Open | Token::Close => unreachable!(),
        };
        stack.push(id);
    }
    let top = stack.pop().ok_or(ParseError::EmptyFormula)?;
    if !stack.is_empty() {
        warn!(
            "input contained {} formulae that are not connected, keeping the last",
            stack.len() + 1
        );
    }
    Ok(top)
}

fn pop(stack: &mut Vec<Id>, op: Op) -> Result<Id, ParseError> {
    stack.pop().ok_or(ParseError::ArityUnderflow(op.symbol()))
}
