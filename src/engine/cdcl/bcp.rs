/*!
Boolean constraint propagation, with two watched literals.

Each clause of two or more literals watches its first two literals.
When a watched literal is falsified, the clause looks for some other literal which is not falsified to watch instead.
If no such literal exists, then either:
- The other watched literal is satisfied, and nothing follows.
- The other watched literal has no value, and the clause asserts the other watched literal.
- The other watched literal is falsified, and the clause conflicts with the valuation.

Propagation works through the trail from the head of the propagation queue, so literals valued while adding clauses at level zero are propagated at the start of the next solve.
*/

use rand::Rng;

use crate::structures::literal::Literal;

use super::{slot, CdclEngine, ClauseId};

impl<R: Rng + Default> CdclEngine<R> {
    /// Propagates every literal on the trail which has not been propagated, returning the id of a conflicting clause if a conflict is found.
    pub(super) fn propagate(&mut self) -> Result<(), ClauseId> {
        while self.q_head < self.trail.len() {
            let literal = self.trail[self.q_head];
            self.q_head += 1;
            self.counters.propagations += 1;

            let falsified = literal.negate();
            let falsified_slot = slot(falsified);

            let mut watchers = std::mem::take(&mut self.watches[falsified_slot]);
            let mut conflict = None;
            let mut index = 0;

            'watch_loop: while index < watchers.len() {
                let id = watchers[index];
                let literals = &mut self.clauses[id].literals;

                if literals[0] == falsified {
                    literals.swap(0, 1);
                }
                let other = literals[0];

                if self.valuation.literal_value(other) == Some(true) {
                    index += 1;
                    continue 'watch_loop;
                }

                for position in 2..literals.len() {
                    if self.valuation.literal_value(literals[position]) != Some(false) {
                        literals.swap(1, position);
                        self.watches[slot(literals[1])].push(id);
                        watchers.swap_remove(index);
                        continue 'watch_loop;
                    }
                }

                match self.valuation.literal_value(other) {
                    Some(false) => {
                        conflict = Some(id);
                        break 'watch_loop;
                    }

                    _ => {
                        self.assign(other, Some(id));
                        index += 1;
                    }
                }
            }

            self.watches[falsified_slot] = watchers;

            if let Some(id) = conflict {
                return Err(id);
            }
        }

        Ok(())
    }
}
