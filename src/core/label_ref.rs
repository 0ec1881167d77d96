//! Defines displayable references to expressions and labels.

use std::fmt;

use super::{arena::Arena, expr::Id, label::Label};

/// An expression that is explicitly paired with the arena it is tied to.
///
/// This struct is useful whenever we need to pass an expression around, but the containing
/// arena is not available, for example whenever we want to [fmt::Display] an expression.
pub(crate) struct ExprRef<'a>(pub(crate) &'a Arena, pub(crate) Id);

impl<'a> fmt::Display for ExprRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.format_expr(self.1, f)
    }
}

/// A label that is explicitly paired with the arena its formulae are tied to.
pub(crate) struct LabelRef<'a> {
    pub(crate) label: &'a Label,
    pub(crate) arena: &'a Arena,
}

/// Displays a label as a braced, comma-separated set.
///
/// Formulae appear in ascending creation order, which matches the order they were first
/// parsed in.
impl<'a> fmt::Display for LabelRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ids = self.label.sorted_ids();
        if ids.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            self.arena.format_expr(*id, f)?;
        }
        write!(f, " }}")
    }
}
