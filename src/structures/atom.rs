//! Atoms, the variables of a formula.
//!
//! Atoms are positive integers.
//! Zero is not an atom, as the negation of zero is zero and so zero could not distinguish a positive from a negative literal.

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The greatest atom, as the greatest atom which is also a [literal](crate::structures::literal::CLiteral).
pub const ATOM_MAX: Atom = i32::MAX as Atom;
