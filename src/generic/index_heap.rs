/*!
A max heap over a subset of indices, each index paired with a value.

Every index known to the structure has a value, and an index may be *active* (on the heap) or not.
Values may be revised whether or not an index is active, and [heapify_if_active](IndexHeap::heapify_if_active) restores the heap after revising the value of an active index.

The built-in engine uses the structure to order atoms by activity, with each atom without a value active.

```rust
# use clause_stage::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10);
heap.add(0, 70);

heap.activate(600);
heap.activate(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));
assert!(heap.pop_max().is_none());
```
*/

/// A max heap of indices, ordered by the value of each index.
#[derive(Clone, Debug)]
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The value of each index.
    values: Vec<V>,

    /// The position of each index on the heap, if active.
    position: Vec<Option<usize>>,

    /// The active indices, as a binary heap.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Values `index` with `value`, returning true if the index was fresh.
    ///
    /// Indices below a fresh index are also made known, with the default value.
    /// A fresh index is not active until [activated](IndexHeap::activate).
    pub fn add(&mut self, index: usize, value: V) -> bool {
        let fresh = self.values.len() <= index;
        if fresh {
            self.values.resize_with(index + 1, V::default);
            self.position.resize(index + 1, None);
        }

        self.revalue(index, value);
        if !fresh {
            self.heapify_if_active(index);
        }
        fresh
    }

    /// Places `index` on the heap, returning true if the index was not already active.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.position[index] {
            Some(_) => {
                self.heapify_if_active(index);
                false
            }

            None => {
                let last = self.heap.len();
                self.heap.push(index);
                self.position[index] = Some(last);
                self.sift_up(last);
                true
            }
        }
    }

    /// Removes `index` from the heap, returning true if the index was active.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(at) = self.position[index] else {
            return false;
        };

        let last = self.heap.len() - 1;
        self.swap(at, last);
        self.heap.pop();
        self.position[index] = None;

        if at < self.heap.len() {
            self.sift_down(at);
            self.sift_up(at);
        }
        true
    }

    /// Whether `index` is on the heap.
    pub fn is_active(&self, index: usize) -> bool {
        self.position.get(index).is_some_and(Option::is_some)
    }

    /// The active index of greatest value, if any index is active.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Removes and returns the active index of greatest value, if any index is active.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// Restores the heap around `index`, if active, after the value of the index was revised.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(at) = self.position[index] {
            self.sift_up(at);
            self.sift_down(at);
        }
    }

    /// Restores the heap after any number of values were revised.
    pub fn heapify(&mut self) {
        for at in (0..self.heap.len() / 2).rev() {
            self.sift_down(at);
        }
    }

    /// The value of `index`.
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Sets the value of `index`, without restoring the heap.
    pub fn revalue(&mut self, index: usize, value: V) {
        self.values[index] = value;
    }

    /// Applies `f` to every value, without restoring the heap.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value);
        }
    }

    /// A count of indices known.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Whether no index is known.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Whether the index at heap position `a` has a greater value than the index at heap position `b`.
    fn greater(&self, a: usize, b: usize) -> bool {
        self.values[self.heap[a]] > self.values[self.heap[b]]
    }

    /// Swaps two heap positions, keeping positions in step.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut at: usize) {
        while at > 0 {
            let parent = (at - 1) / 2;
            if !self.greater(at, parent) {
                break;
            }
            self.swap(at, parent);
            at = parent;
        }
    }

    fn sift_down(&mut self, mut at: usize) {
        loop {
            let left = 2 * at + 1;
            if left >= self.heap.len() {
                break;
            }

            let mut greatest = at;
            if self.greater(left, greatest) {
                greatest = left;
            }

            let right = left + 1;
            if right < self.heap.len() && self.greater(right, greatest) {
                greatest = right;
            }

            if greatest == at {
                break;
            }
            self.swap(at, greatest);
            at = greatest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_of(pairs: &[(usize, i32)]) -> IndexHeap<i32> {
        let mut heap = IndexHeap::default();
        for (index, value) in pairs {
            heap.add(*index, *value);
            heap.activate(*index);
        }
        heap
    }

    #[test]
    fn pops_by_value() {
        let mut heap = heap_of(&[(6, 10), (5, 20), (4, 30), (1, 60), (0, 70)]);

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(6));
        assert!(heap.pop_max().is_none());
    }

    #[test]
    fn revalue_then_heapify() {
        let mut heap = heap_of(&[(6, 10), (4, 30), (1, 60), (0, 70)]);

        for index in [0, 1, 4, 6] {
            heap.revalue(index, index as i32);
        }
        heap.heapify();

        assert_eq!(heap.pop_max(), Some(6));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
        assert!(heap.pop_max().is_none());
    }

    #[test]
    fn revalue_single_index() {
        let mut heap = heap_of(&[(1, 1), (2, 2), (3, 3)]);

        heap.revalue(1, 10);
        heap.heapify_if_active(1);
        assert_eq!(heap.peek_max(), Some(1));

        heap.revalue(1, 0);
        heap.heapify_if_active(1);
        assert_eq!(heap.pop_max(), Some(3));
        assert_eq!(heap.pop_max(), Some(2));
        assert_eq!(heap.pop_max(), Some(1));
    }

    #[test]
    fn remove_and_reactivate() {
        let mut heap = heap_of(&[(6, 6), (5, 5), (4, 4), (1, 1), (0, 0)]);

        assert!(heap.remove(4));
        assert!(!heap.remove(4));
        assert!(!heap.is_active(4));
        assert!(heap.remove(6));

        assert!(!heap.add(4, 10));
        assert!(!heap.add(4, 3));
        assert!(heap.activate(4));
        assert!(!heap.activate(4));

        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
        assert!(heap.pop_max().is_none());
    }

    #[test]
    fn inactive_values_kept() {
        let mut heap = IndexHeap::default();
        assert!(heap.add(3, 2.5));
        assert_eq!(heap.count(), 4);
        assert!(!heap.is_active(3));
        assert!(heap.pop_max().is_none());

        heap.apply_to_all(|value| value * 2.0);
        assert_eq!(heap.value_at(3), &5.0);
        assert_eq!(heap.value_at(0), &0.0);
    }
}
