//! modalk decides satisfiability of modal-logic labels in the basic normal modal logic K.
//!
//! * A label is a comma-separated set of formulae; it is satisfiable iff some Kripke model
//!   makes all of its formulae true in one world at once.
//! * modalk should be called from a binary crate via [shell::main], use in library crates is
//!   not intended.
//! * As a starting point in this documentation, see [core::arena::Arena] and
//!   [core::reasoner] for the important data structures and algorithms.

#![allow(rustdoc::private_intra_doc_links)]

mod core;
mod parser;
pub mod shell;
mod util;
