/*!
An iterator over the luby sequence.

See <https://oeis.org/A182105> for details on the luby sequence.

The sequence is used to schedule restarts in the [built-in engine](crate::engine::cdcl): after the n-th restart, the next restart is made after `u * luby(n)` conflicts for some fixed `u`.

```rust
# use clause_stage::generic::luby::Luby;
let prefix = Luby::default().take(7).collect::<Vec<_>>();
assert_eq!(prefix, vec![1, 1, 2, 1, 1, 2, 4]);
```
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u32;

/// The state of the iterator.
///
/// `index` counts completed runs of powers of two, and `term` is the most recent element of the current run.
#[derive(Default)]
pub struct Luby {
    index: LubyRepresentation,
    term: LubyRepresentation,
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        // A run ends when the term reaches the largest power of two dividing the index.
        if self.index & self.index.wrapping_neg() == self.term {
            self.index = self.index.checked_add(1)?;
            self.term = 1;
        } else {
            self.term = self.term.checked_add(self.term)?;
        }

        Some(self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://oeis.org/A182105
    const LUBY_PREFIX: &[LubyRepresentation] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32, 1, 1,
    ];

    #[test]
    fn prefix() {
        let sequence = Luby::default().take(LUBY_PREFIX.len()).collect::<Vec<_>>();
        assert_eq!(sequence, LUBY_PREFIX);
    }
}
