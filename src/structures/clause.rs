//! Clauses, as immutable records of literals.
//!
//! A [ClauseRecord] is materialized from the [staging buffer](crate::transient::StagingBuffer) once all literals of a clause have been staged.
//! The record owns a copy of the staged literals followed by a [terminator](CLAUSE_TERMINATOR), and is not mutated after creation.
//!
//! ```rust
//! # use clause_stage::transient::StagingBuffer;
//! let mut buffer = StagingBuffer::new(4);
//! for literal in [1, -2, 3] {
//!     assert!(buffer.push(literal).is_ok());
//! }
//!
//! let record = buffer.snapshot().unwrap();
//! assert_eq!(record.literals(), &[1, -2, 3]);
//! assert_eq!(record.terminated(), &[1, -2, 3, 0]);
//! assert_eq!(record.as_dimacs(true), "1 -2 3 0");
//! ```

use crate::{structures::literal::CLiteral, types::err};

/// The sentinel which terminates each clause record, and each clause given to an [engine](crate::engine::Engine).
pub const CLAUSE_TERMINATOR: CLiteral = 0;

/// An immutable, owned, terminated sequence of literals.
#[derive(Debug, PartialEq, Eq)]
pub struct ClauseRecord {
    /// The literals of the clause, always followed by [CLAUSE_TERMINATOR].
    literals: Box<[CLiteral]>,
}

impl ClauseRecord {
    /// A record of the given literals.
    ///
    /// The literals are assumed to be nonzero, as is ensured by the staging buffer.
    pub(crate) fn from_staged(staged: &[CLiteral]) -> Result<Self, err::StagingError> {
        let mut literals = Vec::new();
        if literals.try_reserve_exact(staged.len() + 1).is_err() {
            return Err(err::StagingError::Allocation);
        }
        literals.extend_from_slice(staged);
        literals.push(CLAUSE_TERMINATOR);

        Ok(ClauseRecord {
            literals: literals.into_boxed_slice(),
        })
    }

    /// The literals of the clause, without the terminator.
    pub fn literals(&self) -> &[CLiteral] {
        // Every record ends with the terminator, so the slice is never empty.
        &self.literals[..self.literals.len() - 1]
    }

    /// The literals of the clause, including the terminator.
    pub fn terminated(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len() - 1
    }

    /// The clause as a string of space separated literals, optionally followed by the terminator as in DIMACS.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let slice = match zero {
            true => self.terminated(),
            false => self.literals(),
        };

        slice
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for ClauseRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, literal) in self.literals().iter().enumerate() {
            match index {
                0 => write!(f, "{literal}")?,
                _ => write!(f, ", {literal}")?,
            }
        }
        write!(f, "]")
    }
}
