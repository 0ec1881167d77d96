//! Tableau decision procedure for satisfiability in the modal logic K.
//!
//! [successful] implements the standard K-tableau discipline: detect clashes, saturate the
//! non-branching propositional rules with a worklist, branch over negated conjunctions, and
//! finally construct one modal successor per negated necessitation.
//! Labels are branched by shallow copy and successors are explored one at a time, so at any
//! point at most one successor of a node is live.

use std::collections::VecDeque;

use log::{debug, info};
use rustc_hash::FxHashSet;

use super::{
    arena::Arena,
    expr::{Expr::*, Id, Rule},
    label::Label,
    label_ref::ExprRef,
};

/// Name of the verum atom, whose negation clashes on sight.
pub(crate) const TOP: &str = "⊤";

/// Name of the falsum atom, which clashes on sight.
pub(crate) const BOT: &str = "⊥";

/// Decides whether a label is satisfiable in some Kripke model of K.
///
/// The label must be normalized (see [Label::normalized]); behavior on non-normalized input
/// is unspecified.
/// The procedure always terminates: the non-branching rules strictly decrease the connective
/// count and the modal rule strictly decreases the modal depth of the largest formula.
/// Propositional saturation always runs to completion before the modal step, which the
/// completeness of K-tableaux depends on.
pub(crate) fn successful(arena: &mut Arena, mut label: Label) -> bool {
    info!("starting with {}", label.as_ref(arena));

    if let Some(id) = clash(arena, &label) {
        info!("clash on {} detected", ExprRef(arena, id));
        return false;
    }

    saturate(arena, &mut label);
    debug!("after all quick rules: {}", label.as_ref(arena));

    if let Some(id) = clash(arena, &label) {
        info!("clash on {} detected", ExprRef(arena, id));
        return false;
    }

    if label.iter().all(|id| arena.rule(id) == Rule::None) {
        info!("label is saturated");
        return true;
    }

    // As a crude heuristic we branch on the smallest formula first, hoping it succeeds
    // (or clashes) quickly; ties go to the oldest identifier.
    let branching = label
        .iter()
        .filter(|id| arena.rule(*id) == Rule::NotAnd)
        .min_by_key(|id| (arena.size(*id), *id));
    if let Some(id) = branching {
        info!("or-branching on {}", ExprRef(arena, id));
        label.remove(id);
        let (left, right) = match arena.exprs[id] {
            Not(child) => match arena.exprs[child] {
                And(left, right) => (left, right),
                _ => unreachable!(),
            },
            _ => unreachable!(),
        };
        let not_left = arena.expr(Not(left));
        let mut branch_1 = label.clone();
        branch_1.insert(not_left);
        debug!("branch 1: {}", branch_1.as_ref(arena));
        let not_right = arena.expr(Not(right));
        let mut branch_2 = label.clone();
        branch_2.insert(not_right);
        debug!("branch 2: {}", branch_2.as_ref(arena));
        return successful(arena, branch_1) || successful(arena, branch_2);
    }
    info!(
        "{} is propositionally saturated, and-branching now",
        label.as_ref(arena)
    );

    // Every negated necessitation demands its own successor world; all of them must be
    // satisfiable, again smallest first.
    let mut pending: Vec<Id> = label
        .iter()
        .filter(|id| arena.rule(*id) == Rule::NotBox)
        .collect();
    if pending.is_empty() {
        info!("label is saturated");
        return true;
    }
    pending.sort_unstable_by_key(|&id| (arena.size(id), id));
    let unboxed: Label = label
        .iter()
        .filter_map(|id| match arena.exprs[id] {
            Box(child) => Some(child),
            _ => None,
        })
        .collect();
    debug!("unboxed label: {}", unboxed.as_ref(arena));
    for id in pending {
        let boxed_child = match arena.exprs[id] {
            Not(child) => match arena.exprs[child] {
                Box(grandchild) => grandchild,
                _ => unreachable!(),
            },
            _ => unreachable!(),
        };
        let not_child = arena.expr(Not(boxed_child));
        let mut successor = unboxed.clone();
        successor.insert(not_child);
        if !successful(arena, successor) {
            return false;
        }
    }
    true
}

/// Returns a formula that witnesses a clash, if any.
///
/// A label clashes if it contains some formula together with its negation, contains the
/// falsum atom, or contains the negated verum atom.
fn clash(arena: &Arena, label: &Label) -> Option<Id> {
    let top = arena.get_atom(TOP);
    let bot = arena.get_atom(BOT);
    for id in label.iter() {
        match arena.exprs[id] {
            Not(child) => {
                if label.contains(child) || Some(child) == top {
                    return Some(child);
                }
            }
            _ => {
                if Some(id) == bot {
                    return Some(id);
                }
            }
        }
    }
    None
}

/// Applies the non-branching rules (¬¬) and (∧) until neither is applicable.
///
/// Maintains an explicit worklist: the source formula is removed from the label, its results
/// are inserted, and any result that itself carries a non-branching tag joins the queue.
/// The companion set keeps a formula from being enqueued twice; a formula that was already
/// decomposed but is re-introduced by a later rule application is enqueued again.
fn saturate(arena: &mut Arena, label: &mut Label) {
    let mut queue: VecDeque<Id> = label
        .sorted_ids()
        .into_iter()
        .filter(|id| arena.rule(*id).is_quick())
        .collect();
    let mut queued: FxHashSet<Id> = queue.iter().copied().collect();
    while let Some(id) = queue.pop_front() {
        queued.remove(&id);
        if !label.contains(id) {
            continue;
        }
        let new_ids = match arena.rule(id) {
            Rule::NotNot => {
                let grandchild = match arena.exprs[id] {
                    Not(child) => match arena.exprs[child] {
                        Not(grandchild) => grandchild,
                        _ => unreachable!(),
                    },
                    _ => unreachable!(),
                };
                label.remove(id);
                label.insert(grandchild);
                vec![grandchild]
            }
            Rule::And => {
                let (left, right) = match arena.exprs[id] {
                    And(left, right) => (left, right),
                    _ => unreachable!(),
                };
                label.remove(id);
                label.insert(left);
                label.insert(right);
                vec![left, right]
            }
            _ => unreachable!(),
        };
        for new_id in new_ids {
            if arena.rule(new_id).is_quick() && queued.insert(new_id) {
                queue.push_back(new_id);
            }
        }
    }
}
