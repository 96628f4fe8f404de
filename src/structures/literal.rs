//! Literals are atoms paired with a (boolean) polarity.
//!
//! Literals are represented as nonzero integers, with the sign of the integer indicating the polarity of the literal.
//! Zero is reserved to terminate a clause, and is never a literal.
//!
//! ```rust
//! # use clause_stage::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, false);
//!
//! assert_eq!(literal, -79);
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert!(literal.negate().polarity());
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The canonical representation of a literal, as an integer.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}
