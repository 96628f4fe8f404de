//! Abstract elements of a formula and their representation.
//!
//! - [Atoms](atom) are the variables of a formula.
//! - [Literals](literal) pair an atom with a polarity.
//! - [Clauses](clause) are (disjunctions of) literals, stored as [records](clause::ClauseRecord).

pub mod atom;
pub mod clause;
pub mod literal;
