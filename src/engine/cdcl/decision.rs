/*!
Methods for choosing the value of an atom.

The core decision procedure is straightforward:
- Take the most active atom which is not assigned a value from the [activity heap](crate::generic::index_heap), and assign either true or false.

Every atom without a value is on the heap, as atoms are placed back on the heap when their value is cleared on a backjump.
Atoms with a value may also be on the heap, and are dropped when met.

# Heuristics

- With probability [random_decision_bias](crate::config::EngineConfig::random_decision_bias) a random atom is tried first, and chosen if the atom has no value.
- If [phase saving](crate::config::EngineConfig::phase_saving) is enabled the chosen atom is assigned the value it most recently had, and otherwise true with probability [polarity_lean](crate::config::EngineConfig::polarity_lean).
  Note, every atom has some previous value, initialised via the polarity lean when the atom is first seen.
*/

use rand::Rng;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

use super::CdclEngine;

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value was chosen for some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

impl<R: Rng + Default> CdclEngine<R> {
    /// Chooses a literal to value, or notes every atom has a value.
    pub(super) fn make_decision(&mut self) -> DecisionOk {
        // Takes ownership of rng to satisfy the borrow checker.
        let mut rng = std::mem::take(&mut self.rng);
        let chosen_atom = self.atom_without_value(&mut rng);
        let decision = chosen_atom.map(|atom| {
            let polarity = match self.config.phase_saving.value {
                true => self.valuation.previous[atom as usize],
                false => rng.gen_bool(self.config.polarity_lean.value),
            };
            CLiteral::new(atom, polarity)
        });
        self.rng = rng;

        match decision {
            Some(literal) => {
                self.counters.decisions += 1;
                log::trace!(target: targets::ENGINE, "Decision {literal}");
                DecisionOk::Literal(literal)
            }
            None => DecisionOk::Exhausted,
        }
    }

    /// An atom without a value, either by random decision or by most activity.
    fn atom_without_value(&mut self, rng: &mut impl Rng) -> Option<Atom> {
        let atom_count = self.valuation.atom_count();
        if atom_count > 0 && rng.gen_bool(self.config.random_decision_bias.value) {
            let atom = rng.gen_range(1..=atom_count);
            if self.valuation.value_of(atom).is_none() {
                return Some(atom);
            }
        }

        while let Some(index) = self.valuation.activity.pop_max() {
            let atom = index as Atom;
            if self.valuation.value_of(atom).is_none() {
                return Some(atom);
            }
        }

        None
    }
}
