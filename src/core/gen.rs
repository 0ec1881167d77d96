//! Parametric formula families for exercising the reasoner.
//!
//! The families mirror the classic K workloads: a linear chain of negations, a balanced
//! conjunction tree of exponential size, and the series witnessing that K lacks the
//! polynomial-model property.

use std::fmt::Write;

use super::{
    arena::Arena,
    expr::{Expr::*, Id},
};
use crate::parser;

/// Returns a chain of `n` negations applied to the atom `p`.
///
/// Normalizes to `p` or `¬ p`; the tableau closes it in at most `n` non-branching steps.
pub(crate) fn linear_neg(arena: &mut Arena, n: usize) -> Id {
    let mut formula = "¬ ".repeat(n);
    formula.push('p');
    // generated strings are well-formed, so parsing cannot fail
    parser::parse_formula(arena, &formula).unwrap()
}

/// Returns a balanced conjunction tree of depth `n` over the atom `p`.
///
/// The result has `2^(n+1) - 1` symbols and is satisfiable by (∧) saturation alone.
pub(crate) fn exp_size(arena: &mut Arena, n: usize) -> Id {
    if n == 0 {
        arena.atom("p")
    } else {
        let child = exp_size(arena, n - 1);
        arena.expr(And(child, child))
    }
}

/// Returns the `n`-th member of the series of satisfiable formulae whose smallest Kripke
/// models grow exponentially.
///
/// It is a lot easier to write the formula in concrete syntax and let the parser deal with
/// it, which doubles as a cross-validation of the parser.
pub(crate) fn exp_model(arena: &mut Arena, n: usize) -> Id {
    parser::parse_formula(arena, &exp_model_str(n)).unwrap()
}

/// Builds φₙ in concrete syntax.
///
/// φ₀ = `p0`; φₙ extends φₙ₋₁ with a □-prefixed constraint forcing two successors that
/// disagree on `qn` while every earlier `qj` choice propagates along the accessibility
/// relation.
pub(crate) fn exp_model_str(n: usize) -> String {
    if n == 0 {
        return "p0".to_string();
    }
    let n = n - 1; // building φₙ₊₁ from here on keeps the indices aligned with the schema
    let phi = exp_model_str(n);
    let boxes = "□ ".repeat(n);
    let mut propagate = String::new();
    for j in 1..=n {
        write!(propagate, " ∧ ( ( q{j} → □ q{j} ) ∧ ( ¬ q{j} → □ ¬ q{j} ) )").unwrap();
    }
    format!(
        "{phi} ∧ {boxes}( p{n} → ( ◇ ( p{next} ∧ q{next} ) ∧ ◇ ( p{next} ∧ ¬ q{next} ){propagate} ) )",
        next = n + 1
    )
}
