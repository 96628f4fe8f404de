/*!
Queries on a session.

Each query reads the [clause store](crate::db::clause::ClauseStore), consulting the engine where needed:
- [clauses](GenericSession::clauses) and [clause](GenericSession::clause) read the store alone, and so are valid in any state.
- [unsat_core](GenericSession::unsat_core) asks the engine whether each stored clause is part of the core identified by the most recent solve.
- [model](GenericSession::model) asks the engine for the value of each atom on the valuation found by the most recent solve.

A core is only sought after an unsatisfiable solve of a session with [proof traces](GenericSession::trace_capable), and a model only after a satisfiable solve.
Otherwise, each returns an empty vector.
*/

use crate::{
    db::ClauseIndex,
    engine::Engine,
    misc::log::targets::{self},
    reports::Report,
    structures::{atom::ATOM_MAX, literal::CLiteral},
    types::err::ErrorKind,
};

use super::GenericSession;

impl<E: Engine> GenericSession<E> {
    /// The literals of every clause added, in order of addition.
    pub fn clauses(&self) -> Vec<Vec<CLiteral>> {
        self.clause_store
            .iter()
            .map(|record| record.literals().to_vec())
            .collect()
    }

    /// The literals of the clause at the given index.
    pub fn clause(&self, index: ClauseIndex) -> Result<&[CLiteral], ErrorKind> {
        match self.clause_store.get(index) {
            Ok(record) => Ok(record.literals()),
            Err(e) => Err(e.into()),
        }
    }

    /// The clauses of the unsatisfiable core identified by the most recent solve, among those with index at most `bound`, in order of addition.
    ///
    /// A negative bound, or a bound beyond the last index, is read as the last index.
    ///
    /// ```rust
    /// # use clause_stage::session::Session;
    /// # use clause_stage::reports::Report;
    /// let mut session = Session::default();
    /// assert!(session.init().is_ok());
    /// assert!(session.add_clauses(&[vec![1, 2], vec![-1], vec![3], vec![-2]]).is_ok());
    ///
    /// assert_eq!(session.solve(0), Report::Unsatisfiable);
    /// assert_eq!(session.unsat_core(-1), vec![vec![1, 2], vec![-1], vec![-2]]);
    /// assert_eq!(session.unsat_core(1), vec![vec![1, 2], vec![-1]]);
    /// ```
    pub fn unsat_core(&self, bound: isize) -> Vec<Vec<CLiteral>> {
        let Some(engine) = &self.engine else {
            return Vec::default();
        };

        if self.last_report != Report::Unsatisfiable || !self.trace_capable {
            log::debug!(target: targets::QUERY, "No core, as the most recent solve was {} with traces {}", self.last_report, self.trace_capable);
            return Vec::default();
        }

        let Some(last_index) = self.clause_store.last_index() else {
            return Vec::default();
        };

        let bound = match usize::try_from(bound) {
            Ok(bound) if bound <= last_index => bound,
            _ => {
                log::debug!(target: targets::QUERY, "Core bound {bound} read as {last_index}");
                last_index
            }
        };

        let mut core = Vec::default();
        for (index, record) in self.clause_store.iter().enumerate().take(bound + 1) {
            if engine.is_core_clause(index) {
                core.push(record.literals().to_vec());
            }
        }

        core
    }

    /// The literals true on the valuation found by the most recent solve, ordered by atom.
    ///
    /// Atoms without a value on the valuation are omitted.
    pub fn model(&self) -> Vec<CLiteral> {
        let Some(engine) = &self.engine else {
            return Vec::default();
        };

        if self.last_report != Report::Satisfiable {
            log::debug!(target: targets::QUERY, "No model, as the most recent solve was {}", self.last_report);
            return Vec::default();
        }

        let mut model = Vec::default();
        for atom in 1..=engine.variable_count().min(ATOM_MAX) {
            let literal = atom as CLiteral;
            match engine.value_of(atom) {
                Some(true) => model.push(literal),
                Some(false) => model.push(-literal),
                None => {}
            }
        }

        model
    }

    /// The [clause](GenericSession::clause) at the given index, as a DIMACS string.
    pub fn clause_as_dimacs(&self, index: ClauseIndex) -> Result<String, ErrorKind> {
        match self.clause_store.get(index) {
            Ok(record) => Ok(record.as_dimacs(true)),
            Err(e) => Err(ErrorKind::from(e)),
        }
    }
}
