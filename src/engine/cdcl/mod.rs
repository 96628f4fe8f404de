/*!
A small conflict-driven clause-learning engine.

The engine is the default [Engine] of a [session](crate::session::Session), and is intended to support the bookkeeping of a session rather than to compete with dedicated solvers.

# Overview

Internally, every clause has an id.
Original clauses (those [added](Engine::add) to the engine) are also assigned an [index](ClauseIndex), in order of addition, and the engine keeps a map from indices to ids.
Clauses learnt during a solve have an id but no index.

A solve is the usual loop of [propagation](bcp), [conflict analysis](analysis), backjumping, and [decisions](decision), with restarts scheduled by the [luby](crate::generic::luby) sequence.
See [solve] for details.

# Proof traces

If traces are [enabled](Engine::enable_trace) before any clause is added, each learnt clause records its *derivation*: the clauses resolved to derive the clause, and the atoms valued at level zero whose literals were dropped from the clause.
When a conflict is found with no decision made, the derivations are walked back to original clauses, which together form an unsatisfiable core.
See [core] for details.

# Example

```rust
# use clause_stage::config::EngineConfig;
# use clause_stage::engine::{Engine, cdcl::BuiltinEngine};
# use clause_stage::reports::Report;
let mut engine = BuiltinEngine::create(&EngineConfig::default());
assert!(engine.enable_trace());

assert_eq!(engine.add_clause(&[1, 2]), Some(0));
assert_eq!(engine.add_clause(&[-1]), Some(1));
assert_eq!(engine.add_clause(&[3]), Some(2));
assert_eq!(engine.add_clause(&[-2]), Some(3));

assert_eq!(engine.solve(None), Report::Unsatisfiable);
assert!(engine.is_core_clause(0));
assert!(engine.is_core_clause(1));
assert!(!engine.is_core_clause(2));
assert!(engine.is_core_clause(3));
```
*/

pub mod analysis;
pub mod bcp;
pub mod core;
pub mod decision;
pub mod solve;
mod valuation;

use std::time::Duration;

use rand::Rng;
use valuation::Valuation;

use crate::{
    config::EngineConfig,
    db::ClauseIndex,
    engine::Engine,
    generic::minimal_pcg::MinimalPCG32,
    misc::log::targets::{self},
    reports::Report,
    structures::{
        atom::Atom,
        clause::CLAUSE_TERMINATOR,
        literal::{CLiteral, Literal},
    },
};

/// The engine with the default source of randomness.
pub type BuiltinEngine = CdclEngine<MinimalPCG32>;

/// The internal identifier of a clause, original or learnt.
pub type ClauseId = usize;

/// The clauses and level zero atoms from which a learnt clause was derived.
#[derive(Clone, Debug, Default)]
pub struct Derivation {
    /// Clauses resolved, in order of resolution.
    pub clauses: Vec<ClauseId>,

    /// Atoms valued at level zero whose literals were dropped during resolution.
    pub atoms: Vec<Atom>,
}

/// The source of a clause.
#[derive(Clone, Debug)]
pub enum ClauseSource {
    /// An original clause, with the index assigned on addition.
    Original(ClauseIndex),

    /// A learnt clause, with a derivation if traces are enabled.
    Learnt(Option<Derivation>),
}

/// A clause, as stored by the engine.
#[derive(Clone, Debug)]
pub struct EngineClause {
    /// The literals of the clause.
    ///
    /// If the clause has two or more literals, the first two literals are watched.
    pub literals: Vec<CLiteral>,

    /// Where the clause came from.
    pub source: ClauseSource,
}

/// The state of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Clauses may be added, and satisfiability is unknown.
    Input,

    /// The most recent solve found a satisfying valuation.
    Satisfiable,

    /// The clauses added are unsatisfiable, as witnessed by a conflict with the given clause at level zero.
    Unsatisfiable(ClauseId),

    /// The most recent solve was stopped before satisfiability was determined.
    Unknown,
}

/// Counters related to solves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    pub conflicts: usize,
    pub decisions: usize,
    pub propagations: usize,
    pub restarts: usize,
}

/// A conflict-driven clause-learning engine, parameterised to a source of randomness.
pub struct CdclEngine<R: Rng + Default> {
    /// The configuration of the engine.
    pub config: EngineConfig,

    /// Counters related to solves.
    pub counters: Counters,

    /// The state of the engine.
    pub state: EngineState,

    /// The source of rng.
    rng: R,

    /// Whether derivations are recorded.
    trace: bool,

    /// Every clause, indexed by id.
    clauses: Vec<EngineClause>,

    /// The ids of original clauses, indexed by clause index.
    originals: Vec<ClauseId>,

    /// Literals of a clause not yet terminated.
    pending: Vec<CLiteral>,

    /// Values, levels, reasons, etc. of each atom.
    valuation: Valuation,

    /// Ids of clauses watching each literal, indexed by slot.
    watches: Vec<Vec<ClauseId>>,

    /// Literals in the order they were valued.
    trail: Vec<CLiteral>,

    /// The length of the trail before each decision.
    trail_limits: Vec<usize>,

    /// The index of the next literal on the trail to propagate.
    q_head: usize,

    /// A mark for each atom, used during analysis.
    seen: Vec<bool>,

    /// The amount by which activity is bumped.
    activity_increment: f64,

    /// The valuation found by the most recent satisfiable solve.
    model: Vec<Option<bool>>,

    /// Flags for each clause index, set if the clause is in the unsatisfiable core.
    core: Vec<bool>,
}

/// The position of the watch list of a literal.
fn slot(literal: CLiteral) -> usize {
    (literal.atom() as usize) * 2 + (literal < 0) as usize
}

impl<R: Rng + Default> CdclEngine<R> {
    /// A fresh engine.
    pub fn from_config(config: EngineConfig) -> Self {
        CdclEngine {
            config,
            counters: Counters::default(),
            state: EngineState::Input,
            rng: R::default(),
            trace: false,
            clauses: Vec::default(),
            originals: Vec::default(),
            pending: Vec::default(),
            valuation: Valuation::default(),
            watches: vec![Vec::default(), Vec::default()],
            trail: Vec::default(),
            trail_limits: Vec::default(),
            q_head: 0,
            seen: vec![false],
            activity_increment: 1.0,
            model: Vec::default(),
            core: Vec::default(),
        }
    }

    /// The clause with the given id.
    pub fn clause(&self, id: ClauseId) -> Option<&EngineClause> {
        self.clauses.get(id)
    }

    /// A count of clauses learnt.
    pub fn learnt_count(&self) -> usize {
        self.clauses.len() - self.originals.len()
    }

    /// The current decision level.
    pub fn level(&self) -> usize {
        self.trail_limits.len()
    }

    /// Extends internal structures to include the given atom, and any smaller atom.
    fn ensure_atom(&mut self, atom: Atom) {
        while self.valuation.atom_count() < atom {
            let previous = self.rng.gen_bool(self.config.polarity_lean.value);
            self.valuation.push_atom(previous);
            self.watches.push(Vec::default());
            self.watches.push(Vec::default());
            self.seen.push(false);
        }
    }

    /// Values the atom of a literal to match the polarity of the literal, at the current level.
    pub(super) fn assign(&mut self, literal: CLiteral, reason: Option<ClauseId>) {
        self.valuation.set(literal, self.trail_limits.len(), reason);
        self.trail.push(literal);
    }

    /// Removes every valuation made after the given level.
    pub(super) fn backjump(&mut self, level: usize) {
        if self.level() <= level {
            return;
        }

        let limit = self.trail_limits[level];
        for literal in self.trail.drain(limit..) {
            self.valuation.clear(literal);
        }
        self.trail_limits.truncate(level);
        self.q_head = self.q_head.min(self.trail.len());
    }

    /// Stores and watches an original clause, returning the index of the clause.
    fn register_original(&mut self, mut literals: Vec<CLiteral>) -> ClauseIndex {
        match self.state {
            EngineState::Unsatisfiable(_) => {}
            _ => {
                self.backjump(0);
                self.state = EngineState::Input;
            }
        }

        literals.sort_unstable();
        literals.dedup();

        let index = self.originals.len();
        let id = self.clauses.len();
        self.clauses.push(EngineClause {
            literals,
            source: ClauseSource::Original(index),
        });
        self.originals.push(id);

        log::trace!(target: targets::ENGINE, "Original {index} as {id}: {:?}", self.clauses[id].literals);

        if let EngineState::Input = self.state {
            self.attach_original(id);
        }

        index
    }

    /// Watches an original clause, and notes any consequence of the clause at level zero.
    fn attach_original(&mut self, id: ClauseId) {
        let valuation = &self.valuation;
        let literals = &mut self.clauses[id].literals;

        // Satisfied literals first, then those without a value, then those falsified.
        literals.sort_by_key(|literal| match valuation.literal_value(*literal) {
            Some(true) => 0,
            None => 1,
            Some(false) => 2,
        });

        let first = literals.first().copied();
        let second = literals.get(1).copied();

        match (first, second) {
            (None, _) => self.note_fundamental_conflict(id),

            (Some(unit), None) => match self.valuation.literal_value(unit) {
                Some(true) => {}
                None => self.assign(unit, Some(id)),
                Some(false) => self.note_fundamental_conflict(id),
            },

            (Some(first), Some(second)) => {
                self.watches[slot(first)].push(id);
                self.watches[slot(second)].push(id);

                match (
                    self.valuation.literal_value(first),
                    self.valuation.literal_value(second),
                ) {
                    (Some(false), _) => self.note_fundamental_conflict(id),
                    (None, Some(false)) => self.assign(first, Some(id)),
                    _ => {}
                }
            }
        }
    }

    /// Notes the formula is unsatisfiable, and if traces are enabled identifies a core.
    fn note_fundamental_conflict(&mut self, id: ClauseId) {
        log::info!(target: targets::ENGINE, "Conflict at level zero with {id}");
        self.state = EngineState::Unsatisfiable(id);
        if self.trace {
            self.core = self.core_of(id);
        }
    }
}

impl<R: Rng + Default> Engine for CdclEngine<R> {
    fn create(config: &EngineConfig) -> Self {
        CdclEngine::from_config(config.clone())
    }

    fn add(&mut self, literal_or_zero: CLiteral) -> Option<ClauseIndex> {
        match literal_or_zero {
            CLAUSE_TERMINATOR => {
                let literals = std::mem::take(&mut self.pending);
                Some(self.register_original(literals))
            }

            literal => {
                self.ensure_atom(literal.atom());
                self.pending.push(literal);
                None
            }
        }
    }

    fn enable_trace(&mut self) -> bool {
        if self.originals.is_empty() && self.pending.is_empty() {
            self.trace = true;
        }
        self.trace
    }

    fn solve(&mut self, time_limit: Option<Duration>) -> Report {
        self.solve_within(time_limit)
    }

    fn variable_count(&self) -> Atom {
        self.valuation.atom_count()
    }

    fn value_of(&self, atom: Atom) -> Option<bool> {
        match self.state {
            EngineState::Satisfiable => self.model.get(atom as usize).copied().flatten(),
            _ => None,
        }
    }

    fn is_core_clause(&self, index: ClauseIndex) -> bool {
        match self.state {
            EngineState::Unsatisfiable(_) => self.core.get(index).copied().unwrap_or(false),
            _ => false,
        }
    }

    fn clause_count(&self) -> usize {
        self.originals.len()
    }
}
