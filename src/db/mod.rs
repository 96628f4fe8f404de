//! Databases for holding information relevant to a session.
//!
//!   - [The clause store](crate::db::clause)
//!     + The clauses added to a session, each indexed by the index assigned to the clause by the [engine](crate::engine) of the session.

pub mod clause;

/// The index of a clause, in order of registration with an engine and counting from zero.
pub type ClauseIndex = usize;
