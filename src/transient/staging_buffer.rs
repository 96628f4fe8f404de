/*!
A buffer to accumulate the literals of a clause.

Literals are staged one at a time, and once all literals of a clause have been staged a [record](crate::structures::clause::ClauseRecord) of the clause is taken with [snapshot](StagingBuffer::snapshot).

The buffer is [cleared](StagingBuffer::clear) before and after each clause, though clearing keeps the storage of the buffer.
So, over the lifetime of a session the buffer follows a single growth curve, and reaches the size of the longest clause staged after logarithmically many allocations.

Storage is only freed on [release](StagingBuffer::release), when a session is reset.

Literals whose atom exceeds the [atom limit](StagingBuffer::with_atom_limit) of the buffer are refused, and `i32::MIN` is always refused.

```rust
# use clause_stage::transient::StagingBuffer;
let mut buffer = StagingBuffer::new(2);

for literal in [1, 2, 3, 4, 5] {
    assert!(buffer.push(literal).is_ok());
}
assert_eq!(buffer.len(), 5);
assert!(buffer.capacity() >= 5);

let capacity = buffer.capacity();
buffer.clear();
assert!(buffer.is_empty());
assert_eq!(buffer.capacity(), capacity);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::ClauseRecord,
        literal::CLiteral,
    },
    types::err::{self},
};

/// A growable buffer of literals, with capacity doubling on overflow.
#[derive(Debug)]
pub struct StagingBuffer {
    /// The staged literals.
    ///
    /// The capacity of the vector is managed by the buffer rather than by the vector.
    literals: Vec<CLiteral>,

    /// The capacity allocated on the first push to an empty buffer.
    initial_capacity: usize,

    /// The greatest atom of a literal which may be staged.
    atom_limit: Atom,

    /// A count of allocations made since the buffer was created or released.
    growths: usize,
}

impl StagingBuffer {
    /// A fresh buffer, which allocates `initial_capacity` literals on first use.
    pub fn new(initial_capacity: usize) -> Self {
        StagingBuffer {
            literals: Vec::new(),
            initial_capacity: initial_capacity.max(1),
            atom_limit: ATOM_MAX,
            growths: 0,
        }
    }

    /// The buffer, refusing literals whose atom exceeds `atom_limit`.
    ///
    /// ```rust
    /// # use clause_stage::transient::StagingBuffer;
    /// # use clause_stage::types::err::StagingError;
    /// let mut buffer = StagingBuffer::new(4).with_atom_limit(10);
    ///
    /// assert!(buffer.push(-10).is_ok());
    /// assert_eq!(buffer.push(11), Err(StagingError::AtomOutOfRange));
    /// assert_eq!(buffer.literals(), &[-10]);
    /// ```
    pub fn with_atom_limit(mut self, atom_limit: Atom) -> Self {
        self.atom_limit = atom_limit.min(ATOM_MAX);
        self
    }

    /// The greatest atom of a literal which may be staged.
    pub fn atom_limit(&self) -> Atom {
        self.atom_limit
    }

    /// Whether the literal may be staged, without staging the literal.
    pub fn check(&self, literal: CLiteral) -> Result<(), err::StagingError> {
        match literal.unsigned_abs() {
            0 => Err(err::StagingError::ZeroLiteral),
            atom if atom > self.atom_limit => Err(err::StagingError::AtomOutOfRange),
            _ => Ok(()),
        }
    }

    /// Stages a literal.
    ///
    /// If the buffer is full, the capacity of the buffer is first doubled.
    pub fn push(&mut self, literal: CLiteral) -> Result<(), err::StagingError> {
        self.check(literal)?;

        if self.literals.len() == self.literals.capacity() {
            self.grow()?;
        }

        self.literals.push(literal);
        Ok(())
    }

    /// Doubles the capacity of the buffer, or allocates the initial capacity if no storage is held.
    fn grow(&mut self) -> Result<(), err::StagingError> {
        let capacity = self.literals.capacity();
        let fresh_capacity = match capacity {
            0 => self.initial_capacity,
            _ => capacity.saturating_mul(2),
        };

        if self
            .literals
            .try_reserve_exact(fresh_capacity - self.literals.len())
            .is_err()
        {
            log::error!(target: targets::STAGING, "Failed to grow from {capacity} to {fresh_capacity} literals");
            return Err(err::StagingError::Allocation);
        }

        self.growths += 1;
        log::trace!(target: targets::STAGING, "Grown from {capacity} to {} literals", self.literals.capacity());
        Ok(())
    }

    /// Forgets all staged literals, keeping the storage of the buffer.
    pub fn clear(&mut self) {
        self.literals.clear();
    }

    /// Forgets all staged literals and frees the storage of the buffer.
    pub fn release(&mut self) {
        self.literals = Vec::new();
        self.growths = 0;
    }

    /// An owned record of the staged literals.
    ///
    /// The buffer is not cleared.
    pub fn snapshot(&self) -> Result<ClauseRecord, err::StagingError> {
        ClauseRecord::from_staged(&self.literals)
    }

    /// The staged literals.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// A count of staged literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether any literals are staged.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// A count of literals which may be staged without an allocation.
    pub fn capacity(&self) -> usize {
        self.literals.capacity()
    }

    /// A count of allocations made since the buffer was created or released.
    pub fn growths(&self) -> usize {
        self.growths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_push_allocates_initial_capacity() {
        let mut buffer = StagingBuffer::new(8);
        assert_eq!(buffer.capacity(), 0);

        assert!(buffer.push(1).is_ok());
        assert!(buffer.capacity() >= 8);
        assert_eq!(buffer.growths(), 1);
    }

    #[test]
    fn growth_keeps_literals() {
        let mut buffer = StagingBuffer::new(1);
        let literals = (1..=100).map(|atom| if atom % 2 == 0 { atom } else { -atom });

        for literal in literals.clone() {
            assert!(buffer.push(literal).is_ok());
        }

        assert_eq!(buffer.literals(), literals.collect::<Vec<_>>().as_slice());
        assert!(buffer.capacity() >= buffer.len());
    }

    #[test]
    fn logarithmic_growth() {
        let mut buffer = StagingBuffer::new(1);
        for literal in 1..=10_000 {
            assert!(buffer.push(literal).is_ok());
        }

        // 1, 2, 4, …, 16384
        assert!(buffer.growths() <= 15);
    }

    #[test]
    fn zero_rejected() {
        let mut buffer = StagingBuffer::new(4);
        assert!(buffer.push(3).is_ok());
        assert_eq!(buffer.push(0), Err(err::StagingError::ZeroLiteral));
        assert_eq!(buffer.literals(), &[3]);
    }

    #[test]
    fn extreme_literals() {
        let mut buffer = StagingBuffer::new(4);
        assert_eq!(buffer.push(i32::MIN), Err(err::StagingError::AtomOutOfRange));
        assert!(buffer.push(i32::MAX).is_ok());
        assert!(buffer.push(-i32::MAX).is_ok());

        let mut limited = StagingBuffer::new(4).with_atom_limit(3);
        assert!(limited.push(-3).is_ok());
        assert_eq!(limited.push(4), Err(err::StagingError::AtomOutOfRange));
        assert_eq!(limited.push(i32::MAX), Err(err::StagingError::AtomOutOfRange));
        assert_eq!(limited.literals(), &[-3]);
    }

    #[test]
    fn clear_keeps_storage() {
        let mut buffer = StagingBuffer::new(2);
        for literal in 1..=9 {
            assert!(buffer.push(literal).is_ok());
        }
        let capacity = buffer.capacity();
        let growths = buffer.growths();

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), capacity);

        for literal in 1..=9 {
            assert!(buffer.push(-literal).is_ok());
        }
        assert_eq!(buffer.growths(), growths);
    }

    #[test]
    fn release_frees_storage() {
        let mut buffer = StagingBuffer::new(4);
        for literal in 1..=5 {
            assert!(buffer.push(literal).is_ok());
        }

        buffer.release();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.growths(), 0);

        assert!(buffer.push(1).is_ok());
        assert_eq!(buffer.growths(), 1);
    }

    #[test]
    fn snapshot_is_terminated_and_leaves_buffer() {
        let mut buffer = StagingBuffer::new(4);
        for literal in [-4, 2] {
            assert!(buffer.push(literal).is_ok());
        }

        let record = buffer.snapshot().unwrap();
        assert_eq!(record.terminated(), &[-4, 2, 0]);
        assert_eq!(record.size(), 2);
        assert_eq!(buffer.literals(), &[-4, 2]);
    }

    #[test]
    fn empty_snapshot() {
        let buffer = StagingBuffer::new(4);
        let record = buffer.snapshot().unwrap();
        assert!(record.literals().is_empty());
        assert_eq!(record.terminated(), &[0]);
    }
}
