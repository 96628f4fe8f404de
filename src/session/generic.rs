use std::time::Duration;

use crate::{
    config::Config,
    db::{clause::ClauseStore, ClauseIndex},
    engine::Engine,
    misc::log::targets::{self},
    reports::Report,
    structures::literal::CLiteral,
    transient::StagingBuffer,
    types::err::{self, ErrorKind},
};

use super::SessionState;

/// A generic session, parameterised to an engine.
///
/// # Example
///
/// ```rust
/// # use clause_stage::session::GenericSession;
/// # use clause_stage::engine::cdcl::BuiltinEngine;
/// # use clause_stage::config::Config;
/// let session = GenericSession::<BuiltinEngine>::with_engine(Config::default());
/// ```
pub struct GenericSession<E: Engine> {
    /// The configuration of the session.
    pub config: Config,

    /// A buffer for the literals of the clause being added.
    pub(crate) staging: StagingBuffer,

    /// Records of every clause added, indexed as the engine indexes clauses.
    pub(crate) clause_store: ClauseStore,

    /// The engine, if the session is initialised.
    pub(crate) engine: Option<E>,

    /// The verdict of the most recent solve.
    pub(crate) last_report: Report,

    /// Whether the engine agreed to record proof traces.
    pub(crate) trace_capable: bool,
}

impl<E: Engine> GenericSession<E> {
    /// Creates an uninitialised session from some given configuration.
    pub fn with_engine(config: Config) -> Self {
        GenericSession {
            staging: fresh_staging(&config),
            clause_store: ClauseStore::new(config.store_block.value),
            config,
            engine: None,
            last_report: Report::Unknown,
            trace_capable: false,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.engine {
            Some(_) => SessionState::Initialized,
            None => SessionState::Uninitialized,
        }
    }

    /// The verdict of the most recent solve, or unknown if no solve has been made since the session was initialised.
    pub fn last_report(&self) -> Report {
        self.last_report
    }

    /// Whether the engine agreed to record proof traces.
    pub fn trace_capable(&self) -> bool {
        self.trace_capable
    }

    /// A count of clauses added since the session was initialised.
    pub fn clause_count(&self) -> usize {
        self.clause_store.len()
    }

    /// The engine, if the session is initialised.
    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    /// The staging buffer.
    pub fn staging(&self) -> &StagingBuffer {
        &self.staging
    }

    /// The clause store.
    pub fn clause_store(&self) -> &ClauseStore {
        &self.clause_store
    }

    /// Initialises the session, creating an engine.
    ///
    /// The staging buffer and clause store are rebuilt from the configuration, so revisions to the configuration made since the session was last initialised take effect.
    ///
    /// If [proof traces](crate::config::Config::proof_trace) are configured, the engine is asked to record traces.
    /// A refusal is noted, and after an unsatisfiable solve the [core](GenericSession::unsat_core) is then empty.
    pub fn init(&mut self) -> Result<(), ErrorKind> {
        if self.engine.is_some() {
            log::warn!(target: targets::SESSION, "Initialisation requested of an initialised session");
            return Err(err::SessionError::AlreadyInitialized.into());
        }

        self.staging = fresh_staging(&self.config);
        self.clause_store = ClauseStore::new(self.config.store_block.value);

        let mut engine = E::create(&self.config.engine);

        self.trace_capable = match self.config.proof_trace.value {
            true => match engine.enable_trace() {
                true => {
                    log::info!(target: targets::SESSION, "Proof traces enabled");
                    true
                }
                false => {
                    log::warn!(target: targets::SESSION, "The engine does not support proof traces");
                    false
                }
            },
            false => false,
        };

        self.last_report = Report::Unknown;
        self.engine = Some(engine);

        log::info!(target: targets::SESSION, "Initialised");
        Ok(())
    }

    /// Adds a clause, returning the index the engine assigned to the clause.
    ///
    /// The literals are staged, stored as a record, and registered with the engine.
    /// On any error the session is unchanged.
    ///
    /// ```rust
    /// # use clause_stage::session::Session;
    /// # use clause_stage::types::err::{ErrorKind, StagingError};
    /// let mut session = Session::default();
    /// assert!(session.init().is_ok());
    ///
    /// assert_eq!(session.add_clause([1, 2]), Ok(0));
    /// assert_eq!(session.add_clause(vec![-3]), Ok(1));
    /// assert_eq!(session.add_clause(&[4, 0, 5]), Err(ErrorKind::Staging(StagingError::ZeroLiteral)));
    /// assert_eq!(session.add_clause(Vec::<i32>::new()), Ok(2));
    /// assert_eq!(session.clause_count(), 3);
    /// ```
    pub fn add_clause(&mut self, literals: impl AsRef<[CLiteral]>) -> Result<ClauseIndex, ErrorKind> {
        let Some(engine) = self.engine.as_mut() else {
            log::warn!(target: targets::SESSION, "Clause added to an uninitialised session");
            return Err(err::SessionError::NotInitialized.into());
        };

        self.staging.clear();
        for literal in literals.as_ref() {
            if let Err(e) = self.staging.push(*literal) {
                self.staging.clear();
                return Err(e.into());
            }
        }

        let record = match self.staging.snapshot() {
            Ok(record) => record,
            Err(e) => {
                self.staging.clear();
                return Err(e.into());
            }
        };

        if let Err(e) = self.clause_store.ensure_vacancy() {
            self.staging.clear();
            return Err(e.into());
        }

        let expected_index = self.clause_store.len();
        let index = engine.add_clause(record.literals());
        assert_eq!(
            index,
            Some(expected_index),
            "! Engine index misaligned with the clause store"
        );

        let index = match self.clause_store.append(record) {
            Ok(index) => index,
            Err(e) => panic!("! Append failed after a vacancy was ensured: {e:?}"),
        };
        assert_eq!(
            engine.clause_count(),
            self.clause_store.len(),
            "! Engine clause count misaligned with the clause store"
        );

        self.staging.clear();
        Ok(index)
    }

    /// Adds each clause in order, returning a count of clauses added.
    ///
    /// Every literal is checked before any clause is added, and if some clause contains zero (or a literal whose atom exceeds the [atom limit](crate::config::Config::atom_limit)) no clause is added.
    /// Otherwise, an error part way through leaves earlier clauses added.
    pub fn add_clauses<C: AsRef<[CLiteral]>>(&mut self, clauses: &[C]) -> Result<usize, ErrorKind> {
        if self.engine.is_none() {
            log::warn!(target: targets::SESSION, "Clauses added to an uninitialised session");
            return Err(err::SessionError::NotInitialized.into());
        }

        for (position, clause) in clauses.iter().enumerate() {
            for literal in clause.as_ref() {
                if let Err(e) = self.staging.check(*literal) {
                    log::warn!(target: targets::SESSION, "Literal {literal} of clause {position} refused: {e:?}");
                    return Err(e.into());
                }
            }
        }

        for clause in clauses {
            self.add_clause(clause)?;
        }

        Ok(clauses.len())
    }

    /// Solves the clauses added, within `timeout` seconds (or without limit, if `timeout` is zero).
    ///
    /// The verdict is kept, and returned.
    /// An uninitialised session returns [Unknown](Report::Unknown) without solving.
    pub fn solve(&mut self, timeout: u64) -> Report {
        let Some(engine) = self.engine.as_mut() else {
            log::warn!(target: targets::SESSION, "Solve requested of an uninitialised session");
            return Report::Unknown;
        };

        let time_limit = match timeout {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        };

        self.last_report = engine.solve(time_limit);
        log::info!(target: targets::SESSION, "Solve of {} clauses: {}", self.clause_store.len(), self.last_report);

        self.last_report
    }

    /// Resets the session, releasing every clause and the engine.
    ///
    /// A reset session may be initialised again.
    pub fn reset(&mut self) -> Result<(), ErrorKind> {
        if self.engine.is_none() {
            log::warn!(target: targets::SESSION, "Reset requested of an uninitialised session");
            return Err(err::SessionError::NotInitialized.into());
        }

        self.clause_store.clear_all();
        self.staging.release();
        self.last_report = Report::Unknown;
        self.trace_capable = false;
        self.engine = None;

        log::info!(target: targets::SESSION, "Reset");
        Ok(())
    }
}

/// A staging buffer, as configured.
fn fresh_staging(config: &Config) -> StagingBuffer {
    StagingBuffer::new(config.staging_capacity.value).with_atom_limit(config.atom_limit.value)
}
