//! Shunting-yard conversion of token streams into reverse Polish notation.

use log::warn;

use super::Token;

/// Reorders an infix token stream into reverse Polish notation.
///
/// Prefix operators are pushed without popping anything, so a chain like `¬ □ ◇ p` nests to
/// the right.
/// A binary operator pops every stacked operator that binds at least as tightly (strictly
/// tighter for the right-associative →) before being pushed itself; since prefix operators
/// bind tightest, they are always popped first.
/// Mismatched parentheses are repaired: a stray closing parenthesis and a dangling opening
/// one are each dropped with a warning.
pub(super) fn shunt(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack = Vec::<Token>::new();
    for token in tokens {
        match token {
            Token::Atom(_) => output.push(token),
            Token::Operator(op) if op.is_prefix() => stack.push(token),
            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    let pops = if op.is_right_assoc() {
                        top.precedence() > op.precedence()
                    } else {
                        top.precedence() >= op.precedence()
                    };
                    if !pops {
                        break;
                    }
                    output.push(stack.pop().unwrap());
                }
                stack.push(token);
            }
            Token::Open => stack.push(token),
            Token::Close => loop {
                match stack.pop() {
                    Some(Token::Open) => break,
                    Some(stacked) => output.push(stacked),
                    None => {
                        warn!("closing parenthesis without a matching opening one, ignoring it");
                        break;
                    }
                }
            },
        }
    }
    while let Some(token) = stack.pop() {
        match token {
            Token::Open => warn!("opening parenthesis was never closed, discarding it"),
            token => output.push(token),
        }
    }
    output
}
