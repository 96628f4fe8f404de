/*!
A store of clause records.

The store is a directory of [clause records](ClauseRecord), where the position of each record is the [index](ClauseIndex) assigned to the clause by the engine of a session.
That is, `store[i]` is the i-th clause registered with the engine, for each `i` less than the [count](ClauseStore::len) of stored clauses.

To preserve this alignment, the store is append-only between [teardowns](ClauseStore::clear_all):
- Records are never reordered, deleted, or mutated.
- Storage for a record is obtained [ahead of registration](ClauseStore::ensure_vacancy), so a clause registered with an engine can always be appended.

The directory grows geometrically, with capacity always some whole number of blocks.

```rust
# use clause_stage::db::clause::ClauseStore;
# use clause_stage::transient::StagingBuffer;
let mut store = ClauseStore::new(4);
let mut buffer = StagingBuffer::new(4);

for literal in [1, -2] {
    assert!(buffer.push(literal).is_ok());
}

assert_eq!(store.append(buffer.snapshot().unwrap()), Ok(0));
assert_eq!(store.get(0).unwrap().literals(), &[1, -2]);
assert!(store.get(1).is_err());

store.clear_all();
assert!(store.is_empty());
```
*/

mod store;

use crate::{db::ClauseIndex, structures::clause::ClauseRecord, types::err};

/// An append-only directory of clause records.
#[derive(Debug)]
pub struct ClauseStore {
    /// The records, in order of registration.
    records: Vec<ClauseRecord>,

    /// The number of records by which the directory grows, at least.
    block_size: usize,
}

impl ClauseStore {
    /// An empty store, which grows in blocks of `block_size` records.
    pub fn new(block_size: usize) -> Self {
        ClauseStore {
            records: Vec::new(),
            block_size: block_size.max(1),
        }
    }

    /// The record at the given index.
    pub fn get(&self, index: ClauseIndex) -> Result<&ClauseRecord, err::ClauseStoreError> {
        self.records
            .get(index)
            .ok_or(err::ClauseStoreError::IndexOutOfRange)
    }

    /// The index the next record appended will be stored at, and equivalently a count of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any record is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A count of records which may be stored without an allocation.
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// The index of the most recently stored record, if some record is stored.
    pub fn last_index(&self) -> Option<ClauseIndex> {
        self.records.len().checked_sub(1)
    }

    /// An iterator over stored records, in order of registration.
    pub fn iter(&self) -> impl Iterator<Item = &ClauseRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transient::StagingBuffer;

    fn record(literals: &[i32]) -> ClauseRecord {
        let mut buffer = StagingBuffer::new(4);
        for literal in literals {
            assert!(buffer.push(*literal).is_ok());
        }
        buffer.snapshot().unwrap()
    }

    #[test]
    fn append_in_order() {
        let mut store = ClauseStore::new(2);
        let clauses = [vec![1, 2], vec![-1], vec![3, -4, 5]];

        for (index, clause) in clauses.iter().enumerate() {
            assert_eq!(store.append(record(clause)), Ok(index));
        }

        assert_eq!(store.len(), 3);
        assert_eq!(store.last_index(), Some(2));
        for (index, clause) in clauses.iter().enumerate() {
            assert_eq!(store.get(index).unwrap().literals(), clause.as_slice());
        }

        let in_order = store.iter().map(|r| r.literals().to_vec()).collect::<Vec<_>>();
        assert_eq!(in_order, clauses);
    }

    #[test]
    fn out_of_range() {
        let mut store = ClauseStore::new(2);
        assert_eq!(store.get(0), Err(err::ClauseStoreError::IndexOutOfRange));

        assert!(store.append(record(&[1])).is_ok());
        assert!(store.get(0).is_ok());
        assert_eq!(store.get(1), Err(err::ClauseStoreError::IndexOutOfRange));
        assert_eq!(store.get(usize::MAX), Err(err::ClauseStoreError::IndexOutOfRange));
    }

    #[test]
    fn capacity_in_blocks() {
        let block_size = 4;
        let mut store = ClauseStore::new(block_size);

        for atom in 1..=37 {
            assert!(store.append(record(&[atom])).is_ok());
            assert_eq!(store.capacity() % block_size, 0);
            assert!(store.capacity() >= store.len());
        }
    }

    #[test]
    fn vacancy_ahead_of_append() {
        let mut store = ClauseStore::new(3);
        assert!(store.ensure_vacancy().is_ok());
        let capacity = store.capacity();
        assert!(capacity >= 1);

        assert!(store.append(record(&[7])).is_ok());
        assert_eq!(store.capacity(), capacity);
    }

    #[test]
    fn clear_all_is_idempotent() {
        let mut store = ClauseStore::new(2);
        store.clear_all();
        assert!(store.is_empty());

        for atom in 1..=5 {
            assert!(store.append(record(&[atom, -atom])).is_ok());
        }

        store.clear_all();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 0);
        assert_eq!(store.last_index(), None);

        store.clear_all();
        assert!(store.is_empty());

        assert_eq!(store.append(record(&[2])), Ok(0));
    }
}
