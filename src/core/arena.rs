//! Interned storage and algorithms for modal-logic formulae.

use std::fmt;

use rustc_hash::FxHashMap;

use super::expr::{AtomId, Expr, Expr::*, Id, Rule};

/// Interned storage for modal-logic formulae.
///
/// Every expression and every atom name is stored exactly once: [Arena::expr] looks up a
/// candidate identifier by hash and reuses it whenever an equal expression already exists
/// (hash-consing).
/// Structural equality thereby collapses to identifier equality, and sub-terms are shared
/// between all formulae ever created, so copying a label or branching a tableau never copies
/// formula storage.
/// Expressions are immutable after creation and no expression is ever removed.
/// This potentially keeps orphaned expressions around indefinitely, but avoids explicit
/// reference counting or garbage collection.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    /// Stores all expressions in this arena.
    ///
    /// Serves as a fast lookup for an expression, given its identifier.
    /// Expressions are stored in the order of their creation, so new expressions are appended
    /// with [Vec::push] and identifiers double as a deterministic creation order.
    pub(crate) exprs: Vec<Expr>,

    /// Maps expressions to their identifiers.
    ///
    /// Serves as a fast inverse lookup for the unique identifier of a given expression.
    /// To simplify ownership, we map from the hash of an expression to all identifiers
    /// carrying that hash; true equality is checked when reading, so hash collisions cost a
    /// probe but not correctness.
    exprs_inv: FxHashMap<u64, Vec<Id>>,

    /// Stores all atom names in this arena, analogously to [Arena::exprs].
    atoms: Vec<String>,

    /// Maps atom names to their identifiers.
    ///
    /// The inverse lookup of atoms is simpler than [Arena::exprs_inv]: names are never
    /// mutated, so the owned name maps directly to its identifier.
    atoms_inv: FxHashMap<String, AtomId>,

    /// Caches the number of connectives of each expression, keyed by identifier.
    ///
    /// Computed once at creation, bottom-up; the reasoner's branching heuristics read it.
    sizes: Vec<u32>,

    /// Caches the applicable tableau rule of each expression, keyed by identifier.
    rules: Vec<Rule>,
}

/// Algorithms for creating, normalizing, and displaying formulae.
impl Arena {
    /// Creates a new, empty arena.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a new expression to this arena, returning its new identifier.
    ///
    /// Appends the given expression to [Arena::exprs] and enables its lookup via
    /// [Arena::exprs_inv].
    /// Requires that no expression equal to the given expression is already in this arena.
    fn add_expr(&mut self, expr: Expr) -> Id {
        let id = self.exprs.len();
        let hash = expr.calc_hash();
        self.sizes.push(self.calc_size(&expr));
        self.rules.push(self.calc_rule(&expr));
        self.exprs.push(expr);
        self.exprs_inv.entry(hash).or_default().push(id);
        id
    }

    /// Looks up the identifier for an expression of this arena.
    fn get_expr(&self, expr: &Expr) -> Option<Id> {
        self.exprs_inv
            .get(&expr.calc_hash())?
            .iter()
            .find(|id| self.exprs[**id] == *expr)
            .copied()
    }

    /// Adds or looks up an expression of this arena, returning its identifier.
    ///
    /// This is the only way to obtain an identifier, which guarantees structural sharing:
    /// the expression is only added to this arena if it does not already exist.
    pub(crate) fn expr(&mut self, expr: Expr) -> Id {
        self.get_expr(&expr).unwrap_or_else(|| self.add_expr(expr))
    }

    /// Adds or looks up a named atom, returning its [Atom] expression's identifier.
    ///
    /// Works analogously to [Arena::expr] (see [Arena::atoms_inv]).
    pub(crate) fn atom(&mut self, name: &str) -> Id {
        let atom_id = match self.atoms_inv.get(name) {
            Some(atom_id) => *atom_id,
            None => {
                let atom_id: AtomId = self.atoms.len().try_into().unwrap();
                self.atoms.push(name.to_string());
                self.atoms_inv.insert(name.to_string(), atom_id);
                atom_id
            }
        };
        self.expr(Atom(atom_id))
    }

    /// Looks up the [Atom] expression for a name, if it was ever created.
    pub(crate) fn get_atom(&self, name: &str) -> Option<Id> {
        let atom_id = *self.atoms_inv.get(name)?;
        self.get_expr(&Atom(atom_id))
    }

    /// Returns the name of an atom.
    pub(crate) fn atom_name(&self, atom_id: AtomId) -> &str {
        let atom_id: usize = atom_id.try_into().unwrap();
        &self.atoms[atom_id]
    }

    /// Returns the number of connectives of an expression.
    pub(crate) fn size(&self, id: Id) -> u32 {
        self.sizes[id]
    }

    /// Returns the applicable tableau rule of an expression.
    pub(crate) fn rule(&self, id: Id) -> Rule {
        self.rules[id]
    }

    /// Calculates the number of connectives of an expression about to be added.
    ///
    /// Children already carry their sizes, as they are created before their parents.
    fn calc_size(&self, expr: &Expr) -> u32 {
        match *expr {
            Atom(_) => 1,
            Not(child) | Box(child) | Diamond(child) => 1 + self.sizes[child],
            And(left, right) | Or(left, right) | Imp(left, right) | Iff(left, right) => {
                1 + self.sizes[left] + self.sizes[right]
            }
        }
    }

    /// Calculates the applicable tableau rule of an expression about to be added.
    fn calc_rule(&self, expr: &Expr) -> Rule {
        match *expr {
            And(_, _) => Rule::And,
            Not(child) => match self.exprs[child] {
                Not(_) => Rule::NotNot,
                And(_, _) => Rule::NotAnd,
                Box(_) => Rule::NotBox,
                _ => Rule::None,
            },
            _ => Rule::None,
        }
    }

    /// Rewrites an expression into the canonical connective set {Atom, ¬, ∧, □}.
    ///
    /// Double negations are stripped at the top and the sugar connectives are eliminated by
    /// their defining equivalences.
    /// The rewrite is total, deterministic, and idempotent; the result is interned, so
    /// normalizing an already-normal expression returns the same identifier.
    pub(crate) fn normalize(&mut self, id: Id) -> Id {
        match self.exprs[id] {
            Atom(_) => id,
            Not(child) => {
                let child = self.normalize(child);
                match self.exprs[child] {
                    // the grandchild was already normalized along with the child
                    Not(grandchild) => grandchild,
                    _ => self.expr(Not(child)),
                }
            }
            And(left, right) => {
                let left = self.normalize(left);
                let right = self.normalize(right);
                self.expr(And(left, right))
            }
            Box(child) => {
                let child = self.normalize(child);
                self.expr(Box(child))
            }
            Or(left, right) => {
                // a ∨ b = ¬ ( ¬ a ∧ ¬ b )
                let not_left = self.expr(Not(left));
                let not_right = self.expr(Not(right));
                let and = self.expr(And(not_left, not_right));
                let not_and = self.expr(Not(and));
                self.normalize(not_and)
            }
            Imp(left, right) => {
                // a → b = ¬ ( a ∧ ¬ b )
                let not_right = self.expr(Not(right));
                let and = self.expr(And(left, not_right));
                let not_and = self.expr(Not(and));
                self.normalize(not_and)
            }
            Iff(left, right) => {
                // a ↔ b = ( a → b ) ∧ ( b → a )
                let forward = self.expr(Imp(left, right));
                let backward = self.expr(Imp(right, left));
                let and = self.expr(And(forward, backward));
                self.normalize(and)
            }
            Diamond(child) => {
                // ◇ a = ¬ □ ¬ a
                let not_child = self.expr(Not(child));
                let boxed = self.expr(Box(not_child));
                let not_boxed = self.expr(Not(boxed));
                self.normalize(not_boxed)
            }
        }
    }

    /// Writes an expression of this arena to a formatter.
    ///
    /// Produces the canonical concrete syntax: Unicode connectives, explicit parentheses
    /// around binary operators, and a space between any two tokens, so the output tokenizes
    /// back through the parser unchanged.
    pub(crate) fn format_expr(&self, id: Id, f: &mut fmt::Formatter) -> fmt::Result {
        match self.exprs[id] {
            Atom(atom_id) => write!(f, "{}", self.atom_name(atom_id)),
            Not(child) => {
                write!(f, "¬ ")?;
                self.format_expr(child, f)
            }
            Box(child) => {
                write!(f, "□ ")?;
                self.format_expr(child, f)
            }
            Diamond(child) => {
                write!(f, "◇ ")?;
                self.format_expr(child, f)
            }
            And(left, right) => self.format_binary(left, "∧", right, f),
            Or(left, right) => self.format_binary(left, "∨", right, f),
            Imp(left, right) => self.format_binary(left, "→", right, f),
            Iff(left, right) => self.format_binary(left, "↔", right, f),
        }
    }

    fn format_binary(&self, left: Id, op: &str, right: Id, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "( ")?;
        self.format_expr(left, f)?;
        write!(f, " {op} ")?;
        self.format_expr(right, f)?;
        write!(f, " )")
    }
}
