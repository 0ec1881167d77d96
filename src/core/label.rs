//! Defines labels, the sets of formulae a tableau branch must satisfy.

use rustc_hash::FxHashSet;

use super::{arena::Arena, expr::Id, label_ref::LabelRef};

/// A set of formulae that a tableau branch must simultaneously satisfy.
///
/// Membership is structural: because the arena interns every expression, identifier equality
/// is structural equality, and a plain set of identifiers deduplicates exactly as required.
/// Cloning a label copies only identifiers; formula storage stays shared with the arena, so
/// branching in the reasoner is cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Label {
    formulae: FxHashSet<Id>,
}

impl Label {
    /// Creates a new, empty label.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts a formula, deduplicating by structural equality.
    pub(crate) fn insert(&mut self, id: Id) -> bool {
        self.formulae.insert(id)
    }

    /// Removes a formula.
    pub(crate) fn remove(&mut self, id: Id) -> bool {
        self.formulae.remove(&id)
    }

    /// Returns whether a structurally equal formula is present.
    pub(crate) fn contains(&self, id: Id) -> bool {
        self.formulae.contains(&id)
    }

    /// Returns the set-theoretic union with another label.
    pub(crate) fn union(&self, other: &Label) -> Label {
        let mut union = self.clone();
        union.formulae.extend(&other.formulae);
        union
    }

    /// Iterates over the formulae in unspecified order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = Id> + '_ {
        self.formulae.iter().copied()
    }

    /// Returns the formulae in ascending creation order.
    ///
    /// This is the deterministic order used for printing and for seeding the reasoner's
    /// worklist.
    pub(crate) fn sorted_ids(&self) -> Vec<Id> {
        let mut ids: Vec<Id> = self.formulae.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the number of formulae.
    pub(crate) fn len(&self) -> usize {
        self.formulae.len()
    }

    /// Returns whether this label contains no formulae.
    pub(crate) fn is_empty(&self) -> bool {
        self.formulae.is_empty()
    }

    /// Returns a label with every formula replaced by its normal form.
    ///
    /// The reasoner requires normalized labels; callers normalize once between parsing and
    /// deciding.
    pub(crate) fn normalized(&self, arena: &mut Arena) -> Label {
        self.sorted_ids()
            .into_iter()
            .map(|id| arena.normalize(id))
            .collect()
    }

    /// Pairs this label with its arena for display.
    pub(crate) fn as_ref<'a>(&'a self, arena: &'a Arena) -> LabelRef<'a> {
        LabelRef { label: self, arena }
    }
}

impl FromIterator<Id> for Label {
    fn from_iter<T: IntoIterator<Item = Id>>(iter: T) -> Self {
        Label {
            formulae: iter.into_iter().collect(),
        }
    }
}
