/*!
A procedure to obtain the unsatisfiable core of an unsatisfiable formula.

When a clause conflicts with the valuation at level zero, each literal of the clause is falsified by some clause which asserted the negation of the literal at level zero (its reason).
In turn, each reason asserted its literal as every other literal of the reason was falsified, again at level zero.
And, each learnt clause was derived from the clauses and level zero atoms in its [derivation](super::Derivation).

So, starting from the conflicting clause, the procedure walks back through reasons and derivations until only original clauses remain.
The original clauses met form an unsatisfiable core.

Note, this requires traces to have been enabled before any clause was added, as otherwise no derivation is recorded.
*/

use std::collections::{HashSet, VecDeque};

use rand::Rng;

use crate::{
    misc::log::targets::{self},
    structures::{atom::Atom, literal::Literal},
};

use super::{CdclEngine, ClauseId, ClauseSource};

/// Something used to reach a conflict at level zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Premise {
    Clause(ClauseId),
    Atom(Atom),
}

impl<R: Rng + Default> CdclEngine<R> {
    /// Flags for each original clause, by index, set if the clause is in the core of the given conflict at level zero.
    pub(super) fn core_of(&self, conflict: ClauseId) -> Vec<bool> {
        let mut core = vec![false; self.originals.len()];

        let mut seen: HashSet<Premise> = HashSet::default();
        let mut todo: VecDeque<Premise> = VecDeque::default();

        todo.push_back(Premise::Clause(conflict));
        for literal in &self.clauses[conflict].literals {
            todo.push_back(Premise::Atom(literal.atom()));
        }

        while let Some(premise) = todo.pop_front() {
            if !seen.insert(premise) {
                continue;
            }

            match premise {
                Premise::Clause(id) => match &self.clauses[id].source {
                    ClauseSource::Original(index) => core[*index] = true,

                    ClauseSource::Learnt(Some(derivation)) => {
                        todo.extend(derivation.clauses.iter().map(|id| Premise::Clause(*id)));
                        todo.extend(derivation.atoms.iter().map(|atom| Premise::Atom(*atom)));
                    }

                    ClauseSource::Learnt(None) => {
                        log::warn!(target: targets::ENGINE, "Learnt clause {id} without a derivation");
                    }
                },

                Premise::Atom(atom) => {
                    let Some(reason) = self.valuation.reason_of(atom) else {
                        continue;
                    };

                    todo.push_back(Premise::Clause(reason));
                    for literal in &self.clauses[reason].literals {
                        if literal.atom() != atom {
                            todo.push_back(Premise::Atom(literal.atom()));
                        }
                    }
                }
            }
        }

        log::info!(target: targets::ENGINE, "Core of {} clauses", core.iter().filter(|flag| **flag).count());
        core
    }
}
