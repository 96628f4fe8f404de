//! A session over an engine whose answers are scripted, to check the session relies on nothing beyond the engine trait.

use std::{cell::RefCell, time::Duration};

use clause_stage::{
    config::{Config, EngineConfig},
    db::ClauseIndex,
    engine::Engine,
    reports::Report,
    session::GenericSession,
    structures::{atom::Atom, literal::CLiteral},
};

/// Answers given by a scripted engine.
#[derive(Clone, Default)]
struct Script {
    accepts_trace: bool,
    verdict: Report,
    values: Vec<(Atom, bool)>,
    core: Vec<ClauseIndex>,
}

thread_local! {
    /// The script read by each scripted engine on creation.
    static SCRIPT: RefCell<Script> = RefCell::new(Script::default());
}

/// An engine which records clauses, and answers solves and queries from a script.
#[derive(Default)]
struct ScriptedEngine {
    script: Script,
    trace: bool,
    pending: Vec<CLiteral>,
    clauses: Vec<Vec<CLiteral>>,
    variables: Atom,
    time_limits: Vec<Option<Duration>>,
}

impl Engine for ScriptedEngine {
    fn create(_config: &EngineConfig) -> Self {
        ScriptedEngine {
            script: SCRIPT.with(|script| script.borrow().clone()),
            ..Default::default()
        }
    }

    fn add(&mut self, literal_or_zero: CLiteral) -> Option<ClauseIndex> {
        match literal_or_zero {
            0 => {
                self.clauses.push(std::mem::take(&mut self.pending));
                Some(self.clauses.len() - 1)
            }
            literal => {
                self.variables = self.variables.max(literal.unsigned_abs());
                self.pending.push(literal);
                None
            }
        }
    }

    fn enable_trace(&mut self) -> bool {
        self.trace = self.script.accepts_trace;
        self.trace
    }

    fn solve(&mut self, time_limit: Option<Duration>) -> Report {
        self.time_limits.push(time_limit);
        self.script.verdict
    }

    fn variable_count(&self) -> Atom {
        self.variables
    }

    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.script
            .values
            .iter()
            .find(|(a, _)| *a == atom)
            .map(|(_, value)| *value)
    }

    fn is_core_clause(&self, index: ClauseIndex) -> bool {
        self.script.core.contains(&index)
    }

    fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

/// An engine which numbers clauses from one, rather than zero.
#[derive(Default)]
struct MisalignedEngine {
    count: usize,
}

impl Engine for MisalignedEngine {
    fn create(_config: &EngineConfig) -> Self {
        MisalignedEngine::default()
    }

    fn add(&mut self, literal_or_zero: CLiteral) -> Option<ClauseIndex> {
        match literal_or_zero {
            0 => {
                self.count += 1;
                Some(self.count)
            }
            _ => None,
        }
    }

    fn enable_trace(&mut self) -> bool {
        false
    }

    fn solve(&mut self, _time_limit: Option<Duration>) -> Report {
        Report::Unknown
    }

    fn variable_count(&self) -> Atom {
        0
    }

    fn value_of(&self, _atom: Atom) -> Option<bool> {
        None
    }

    fn is_core_clause(&self, _index: ClauseIndex) -> bool {
        false
    }

    fn clause_count(&self) -> usize {
        self.count
    }
}

type ScriptedSession = GenericSession<ScriptedEngine>;

/// An initialised session, with an engine following the given script.
fn scripted_session(script: Script) -> ScriptedSession {
    SCRIPT.with(|cell| *cell.borrow_mut() = script);
    let mut session = ScriptedSession::with_engine(Config::default());
    assert!(session.init().is_ok());
    session
}

mod contract {
    use super::*;

    #[test]
    fn clauses_registered_in_order() {
        let mut session = scripted_session(Script::default());

        let formula = [vec![1, -2], vec![3], vec![-1, 2, -3]];
        assert_eq!(session.add_clauses(&formula), Ok(3));

        let engine = session.engine().unwrap();
        assert_eq!(engine.clauses, formula.to_vec());
        assert!(engine.pending.is_empty());
        assert_eq!(session.clauses(), formula.to_vec());
    }

    #[test]
    fn timeout_passed_through() {
        let mut session = scripted_session(Script::default());

        assert_eq!(session.solve(0), Report::Unknown);
        assert_eq!(session.solve(7), Report::Unknown);

        let engine = session.engine().unwrap();
        assert_eq!(
            engine.time_limits,
            vec![None, Some(Duration::from_secs(7))]
        );
    }

    #[test]
    fn trace_refused() {
        let mut session = scripted_session(Script {
            accepts_trace: false,
            verdict: Report::Unsatisfiable,
            core: vec![0],
            ..Default::default()
        });

        assert!(!session.trace_capable());
        assert!(session.add_clause([1]).is_ok());
        assert_eq!(session.solve(0), Report::Unsatisfiable);
        assert!(session.unsat_core(-1).is_empty());
    }

    #[test]
    fn trace_not_requested() {
        SCRIPT.with(|cell| cell.borrow_mut().accepts_trace = true);

        let mut config = Config::default();
        config.proof_trace.value = false;
        let mut session = ScriptedSession::with_engine(config);
        assert!(session.init().is_ok());

        assert!(!session.trace_capable());
        assert!(!session.engine().unwrap().trace);
    }

    #[test]
    fn scripted_core() {
        let mut session = scripted_session(Script {
            accepts_trace: true,
            verdict: Report::Unsatisfiable,
            core: vec![1, 3, 4],
            ..Default::default()
        });
        assert!(session.trace_capable());

        let formula = [vec![1], vec![2], vec![3], vec![4], vec![5]];
        assert!(session.add_clauses(&formula).is_ok());
        assert!(session.unsat_core(-1).is_empty());

        assert_eq!(session.solve(0), Report::Unsatisfiable);

        assert_eq!(session.unsat_core(-1), vec![vec![2], vec![4], vec![5]]);
        assert_eq!(session.unsat_core(3), vec![vec![2], vec![4]]);
        assert_eq!(session.unsat_core(0), Vec::<Vec<i32>>::new());
        assert_eq!(session.unsat_core(99), session.unsat_core(4));
    }

    #[test]
    fn scripted_model() {
        let mut session = scripted_session(Script {
            verdict: Report::Satisfiable,
            values: vec![(3, false), (1, true), (4, true)],
            ..Default::default()
        });

        assert!(session.add_clauses(&[vec![1, 2], vec![-3, 4]]).is_ok());
        assert!(session.model().is_empty());

        assert_eq!(session.solve(0), Report::Satisfiable);

        // Atom 2 has no value, and is omitted.
        assert_eq!(session.model(), vec![1, -3, 4]);
    }

    #[test]
    fn reset_releases_engine() {
        let mut session = scripted_session(Script {
            accepts_trace: true,
            verdict: Report::Unsatisfiable,
            core: vec![0],
            ..Default::default()
        });

        assert!(session.add_clause([1]).is_ok());
        assert_eq!(session.solve(0), Report::Unsatisfiable);
        assert!(session.reset().is_ok());

        assert!(session.engine().is_none());
        assert_eq!(session.solve(0), Report::Unknown);
        assert!(session.unsat_core(-1).is_empty());

        assert!(session.init().is_ok());
        assert_eq!(session.engine().map(|engine| engine.clause_count()), Some(0));
        assert_eq!(session.add_clause([2]), Ok(0));
    }

    #[test]
    #[should_panic]
    fn misaligned_engine() {
        let mut session = GenericSession::<MisalignedEngine>::with_engine(Config::default());
        assert!(session.init().is_ok());
        let _ = session.add_clause([1]);
    }
}
