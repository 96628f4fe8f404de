use crate::{
    generic::index_heap::IndexHeap,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

use super::ClauseId;

/// Properties of each atom, indexed by atom.
///
/// Index zero is a placeholder, as zero is not an atom.
pub(super) struct Valuation {
    /// The current value of each atom.
    pub values: Vec<Option<bool>>,

    /// The level at which each atom was valued.
    pub levels: Vec<usize>,

    /// The clause which asserted the value of each atom, if the value was not a decision.
    pub reasons: Vec<Option<ClauseId>>,

    /// The most recent value of each atom, for phase saving.
    pub previous: Vec<bool>,

    /// The activity of each atom, with every atom without a value active on the heap.
    ///
    /// Atoms given a value are removed lazily, when met at the top of the heap.
    pub activity: IndexHeap<f64>,
}

impl Default for Valuation {
    fn default() -> Self {
        let mut activity = IndexHeap::default();
        activity.add(0, 0.0);

        Valuation {
            values: vec![None],
            levels: vec![0],
            reasons: vec![None],
            previous: vec![false],
            activity,
        }
    }
}

impl Valuation {
    /// The greatest atom.
    pub fn atom_count(&self) -> Atom {
        (self.values.len() - 1) as Atom
    }

    pub fn push_atom(&mut self, previous: bool) {
        self.values.push(None);
        self.levels.push(0);
        self.reasons.push(None);
        self.previous.push(previous);

        let atom = self.values.len() - 1;
        self.activity.add(atom, 0.0);
        self.activity.activate(atom);
    }

    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.values[atom as usize]
    }

    /// The value of a literal, i.e. whether the value of the atom matches the polarity of the literal.
    pub fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.values[literal.atom() as usize].map(|value| value == literal.polarity())
    }

    pub fn level_of(&self, atom: Atom) -> usize {
        self.levels[atom as usize]
    }

    pub fn reason_of(&self, atom: Atom) -> Option<ClauseId> {
        self.reasons[atom as usize]
    }

    pub fn set(&mut self, literal: CLiteral, level: usize, reason: Option<ClauseId>) {
        let atom = literal.atom() as usize;
        self.values[atom] = Some(literal.polarity());
        self.levels[atom] = level;
        self.reasons[atom] = reason;
    }

    pub fn clear(&mut self, literal: CLiteral) {
        let atom = literal.atom() as usize;
        self.values[atom] = None;
        self.reasons[atom] = None;
        self.previous[atom] = literal.polarity();
        self.activity.activate(atom);
    }
}
