/*!
The boundary between a session and a satisfiability engine.

A [session](crate::session::Session) reaches an engine only through the [Engine] trait, which follows the shape of the incremental APIs offered by solvers such as PicoSAT and those implementing [IPASIR](https://github.com/biotomas/ipasir):

- Clauses are added one literal at a time, and terminated by [zero](crate::structures::clause::CLAUSE_TERMINATOR).
  On the terminator, the engine assigns the clause the next [index](ClauseIndex), counting from zero.
- A solve returns a [report](Report), and is optionally bounded by some time limit.
- After a satisfiable solve the engine may be asked for the value of each atom.
- After an unsatisfiable solve, and if proof traces were enabled before any clause was added, the engine may be asked whether a clause (by index) is part of the unsatisfiable core identified.

An engine session is created with [create](Engine::create), and released by dropping the engine.

Engines may allocate for every atom up to the greatest atom seen, and failure of such an allocation is fatal.
A session only passes an engine literals whose atom is within the configured [atom limit](crate::config::Config::atom_limit), and never `i32::MIN`.

A [built-in engine](cdcl) is provided.
*/

pub mod cdcl;

use std::time::Duration;

use crate::{
    config::EngineConfig,
    db::ClauseIndex,
    reports::Report,
    structures::{atom::Atom, clause::CLAUSE_TERMINATOR, literal::CLiteral},
};

/// An incremental satisfiability engine.
pub trait Engine {
    /// A fresh engine, with no clauses.
    fn create(config: &EngineConfig) -> Self
    where
        Self: Sized;

    /// Adds a literal to the clause being built, or terminates the clause on zero.
    ///
    /// On zero, returns the index assigned to the terminated clause.
    fn add(&mut self, literal_or_zero: CLiteral) -> Option<ClauseIndex>;

    /// Adds each literal of the given clause and then terminates the clause, returning the index assigned to the clause.
    fn add_clause(&mut self, literals: &[CLiteral]) -> Option<ClauseIndex> {
        for literal in literals {
            self.add(*literal);
        }
        self.add(CLAUSE_TERMINATOR)
    }

    /// Requests proof traces be recorded, returning whether traces will be recorded.
    fn enable_trace(&mut self) -> bool;

    /// Determines the satisfiability of the clauses added, within the time limit if given.
    fn solve(&mut self, time_limit: Option<Duration>) -> Report;

    /// The greatest atom known to the engine.
    fn variable_count(&self) -> Atom;

    /// The value of an atom on the satisfying valuation found by the most recent solve, if any.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// Whether the clause at the given index is part of the unsatisfiable core found by the most recent solve.
    fn is_core_clause(&self, index: ClauseIndex) -> bool;

    /// A count of (terminated) clauses added to the engine.
    fn clause_count(&self) -> usize;
}
