//! Defines expressions and their cached tableau metadata.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Identifier type for expressions.
///
/// Serves as an index into [Arena::exprs](super::arena::Arena::exprs).
/// Because the arena interns every expression, an identifier doubles as a witness of
/// structural identity: two expressions are structurally equal iff their identifiers are equal.
/// Identifiers are handed out in creation order, which also makes them the deterministic
/// tie-break order used by the reasoner's heuristics and by label printing.
pub(crate) type Id = usize;

/// Identifier type for atoms.
///
/// Serves as an index into the arena's atom table.
/// We do not expect too many distinct atoms, so a 32-bit integer should suffice.
pub(crate) type AtomId = u32;

/// An expression in an arena.
///
/// An expression is always implicitly tied to an [Arena](super::arena::Arena), to which the
/// expression's [Id]s and [AtomId] refer.
/// The first four variants are the canonical connective set; the remaining four are surface
/// sugar that [Arena::normalize](super::arena::Arena::normalize) eliminates.
/// We derive the default equality check and hashing algorithm here:
/// this is sensible because the arena guarantees that each expression is assigned exactly one
/// identifier, so a shallow check on child identifiers is equivalent to a deep structural one.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) enum Expr {
    /// A propositional variable.
    Atom(AtomId),

    /// A negation of an expression.
    Not(Id),

    /// A conjunction of two expressions.
    And(Id, Id),

    /// A necessitation: the expression holds in every accessible world.
    Box(Id),

    /// A disjunction of two expressions.
    Or(Id, Id),

    /// An implication of two expressions.
    Imp(Id, Id),

    /// A biimplication of two expressions.
    Iff(Id, Id),

    /// A possibility: the expression holds in some accessible world.
    Diamond(Id),
}

/// Operations on expressions that are independent of their containing arena.
impl Expr {
    /// Calculates the hash of this expression.
    ///
    /// Used to look up an expression's identifier in the arena's interning table.
    pub(super) fn calc_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Cached classification of an expression's outermost pattern.
///
/// Derived once at creation from the head and, for negations, the head of the child.
/// The reasoner dispatches on this tag in O(1) instead of re-matching two levels deep.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Rule {
    /// No tableau rule applies to the expression itself.
    None,

    /// The expression is a double negation.
    NotNot,

    /// The expression is a negated conjunction.
    NotAnd,

    /// The expression is a negated necessitation.
    NotBox,

    /// The expression is a conjunction.
    And,
}

impl Rule {
    /// Returns whether this rule is applied during non-branching saturation.
    pub(crate) fn is_quick(self) -> bool {
        matches!(self, Rule::NotNot | Rule::And)
    }
}
