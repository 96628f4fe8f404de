/*!
Analysis of a conflict.

Takes the id of a clause which conflicts with the current valuation, and resolves the clause against the reasons of literals valued at the current level until a single literal of the current level remains (the first unique implication point).
The result is an asserting clause: on backjumping to the greatest level of the other literals of the clause, the clause asserts the negation of the unique implication point.

Literals valued at level zero are dropped from the clause, as they are falsified on every valuation considered by the engine.
If traces are enabled, the atoms of dropped literals are recorded in the [derivation](super::Derivation) of the clause, alongside each clause resolved.

Every atom met during analysis has its activity bumped.
*/

use rand::Rng;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

use super::{slot, CdclEngine, ClauseId, ClauseSource, Derivation, EngineClause};

/// The result of conflict analysis.
pub struct Analysis {
    /// The literals of the learnt clause, with the asserted literal first and (if present) a literal of the backjump level second.
    pub literals: Vec<CLiteral>,

    /// The level to backjump to.
    pub level: usize,

    /// The derivation of the clause, if traces are enabled.
    pub derivation: Option<Derivation>,
}

/// Atom activity is rescaled once some activity passes this limit.
const ACTIVITY_LIMIT: f64 = 1e100;

impl<R: Rng + Default> CdclEngine<R> {
    /// Derives an asserting clause from a conflict found after some decision.
    pub(super) fn conflict_analysis(&mut self, conflict: ClauseId) -> Analysis {
        let current_level = self.level();
        log::trace!(target: targets::ANALYSIS, "Analysis of {conflict} at level {current_level}");

        let mut literals: Vec<CLiteral> = vec![0];
        let mut derivation = Derivation::default();
        let mut marked: Vec<Atom> = Vec::default();

        let mut clause = conflict;
        let mut pivot: Option<Atom> = None;
        let mut open = 0;
        let mut trail_index = self.trail.len();

        loop {
            if self.trace {
                derivation.clauses.push(clause);
            }

            for position in 0..self.clauses[clause].literals.len() {
                let literal = self.clauses[clause].literals[position];
                let atom = literal.atom();

                if pivot == Some(atom) || self.seen[atom as usize] {
                    continue;
                }

                let level = self.valuation.level_of(atom);
                if level == 0 {
                    if self.trace {
                        self.seen[atom as usize] = true;
                        marked.push(atom);
                        derivation.atoms.push(atom);
                    }
                    continue;
                }

                self.seen[atom as usize] = true;
                marked.push(atom);
                self.bump_activity(atom);

                match level == current_level {
                    true => open += 1,
                    false => literals.push(literal),
                }
            }

            // The most recent literal of the current level in the clause.
            let resolvent = loop {
                trail_index -= 1;
                let literal = self.trail[trail_index];
                if self.seen[literal.atom() as usize] {
                    break literal;
                }
            };

            open -= 1;
            if open == 0 {
                literals[0] = resolvent.negate();
                break;
            }

            pivot = Some(resolvent.atom());
            clause = match self.valuation.reason_of(resolvent.atom()) {
                Some(reason) => reason,
                None => panic!("! A decision was met before the unique implication point"),
            };
        }

        for atom in marked {
            self.seen[atom as usize] = false;
        }

        let level = match literals.len() {
            1 => 0,
            _ => {
                let mut deepest = 1;
                for position in 2..literals.len() {
                    if self.valuation.level_of(literals[position].atom())
                        > self.valuation.level_of(literals[deepest].atom())
                    {
                        deepest = position;
                    }
                }
                literals.swap(1, deepest);
                self.valuation.level_of(literals[1].atom())
            }
        };

        log::trace!(target: targets::ANALYSIS, "Learnt {literals:?}, backjumping to {level}");

        Analysis {
            literals,
            level,
            derivation: match self.trace {
                true => Some(derivation),
                false => None,
            },
        }
    }

    /// Stores a learnt clause, watching the first two literals of the clause if present.
    pub(super) fn store_learnt(&mut self, analysis: Analysis) -> ClauseId {
        let id = self.clauses.len();

        if analysis.literals.len() > 1 {
            self.watches[slot(analysis.literals[0])].push(id);
            self.watches[slot(analysis.literals[1])].push(id);
        }

        self.clauses.push(EngineClause {
            literals: analysis.literals,
            source: ClauseSource::Learnt(analysis.derivation),
        });

        id
    }

    fn bump_activity(&mut self, atom: Atom) {
        let heap = &mut self.valuation.activity;
        let index = atom as usize;

        let bumped = heap.value_at(index) + self.activity_increment;
        heap.revalue(index, bumped);

        if bumped > ACTIVITY_LIMIT {
            heap.apply_to_all(|activity| activity / ACTIVITY_LIMIT);
            heap.heapify();
            self.activity_increment /= ACTIVITY_LIMIT;
        } else {
            heap.heapify_if_active(index);
        }
    }

    /// Increases the amount by which activity is bumped, relatively decaying the activity of every atom.
    pub(super) fn decay_activity(&mut self) {
        self.activity_increment /= self.config.activity_decay.value;
    }
}
