/*!
Determines the satisfiability of the clauses added to an engine.

Roughly, the loop is as diagrammed:

```none
          +---------------+
  +-------| make_decision |-----> satisfiable, if every atom has a value
  |       +---------------+
  |               ⌃
  |               | if there is no conflict
  ⌄               |
--+-->+-----------+----+
  ⌃   |   propagate    |-----> unsatisfiable, if there is a conflict at level zero
  |   +----------------+
  |               |
  |               | if there is a conflict after some decision
  |               ⌄
  |   +-------------------+
  +---| analyse, backjump |
      +-------------------+
```

After each conflict a restart (a backjump to level zero) may be made, scheduled by the luby sequence.
The time limit, if given, is checked on each iteration of the loop.

Once a conflict is found at level zero the engine remains unsatisfiable, and further solves return immediately.
*/

use std::time::{Duration, Instant};

use rand::Rng;

use crate::{
    generic::luby::{Luby, LubyRepresentation},
    misc::log::targets::{self},
    reports::Report,
};

use super::{decision::DecisionOk, CdclEngine, EngineState};

impl<R: Rng + Default> CdclEngine<R> {
    /// Solves, within the time limit if given.
    pub fn solve_within(&mut self, time_limit: Option<Duration>) -> Report {
        let total_time = Instant::now();

        if let EngineState::Unsatisfiable(_) = self.state {
            return Report::Unsatisfiable;
        }

        self.backjump(0);
        self.state = EngineState::Input;
        self.model.clear();

        let mut luby = Luby::default();
        let mut restart_interval = self.restart_interval(&mut luby);
        let mut fresh_conflicts: usize = 0;

        'solve_loop: loop {
            if time_limit.is_some_and(|limit| total_time.elapsed() > limit) {
                log::info!(target: targets::ENGINE, "Time limit reached after {} conflicts", self.counters.conflicts);
                self.state = EngineState::Unknown;
                return Report::Unknown;
            }

            match self.propagate() {
                Ok(()) => match self.make_decision() {
                    DecisionOk::Literal(decision) => {
                        self.trail_limits.push(self.trail.len());
                        self.assign(decision, None);
                        continue 'solve_loop;
                    }

                    DecisionOk::Exhausted => {
                        self.model = self.valuation.values.clone();
                        self.state = EngineState::Satisfiable;
                        log::info!(target: targets::ENGINE, "Satisfiable after {} conflicts", self.counters.conflicts);
                        return Report::Satisfiable;
                    }
                },

                Err(conflict) => {
                    self.counters.conflicts += 1;

                    if self.level() == 0 {
                        self.note_fundamental_conflict(conflict);
                        return Report::Unsatisfiable;
                    }

                    let analysis = self.conflict_analysis(conflict);
                    self.backjump(analysis.level);

                    let asserted = analysis.literals[0];
                    let learnt = self.store_learnt(analysis);
                    self.assign(asserted, Some(learnt));

                    self.decay_activity();
                }
            }

            fresh_conflicts += 1;
            if self.config.restart.value && fresh_conflicts >= restart_interval {
                self.backjump(0);
                self.counters.restarts += 1;
                fresh_conflicts = 0;
                restart_interval = self.restart_interval(&mut luby);
            }
        }
    }

    /// The count of conflicts before the next restart.
    fn restart_interval(&self, luby: &mut Luby) -> usize {
        let term = luby.next().unwrap_or(LubyRepresentation::MAX);
        term.saturating_mul(self.config.luby_u.value) as usize
    }
}
