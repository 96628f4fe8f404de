//! Clause staging and storage for an incremental satisfiability engine.
//!
//! clause_stage sits between a caller who describes a boolean formula as a sequence of literal lists and a satisfiability engine which consumes clauses one at a time.
//! After a solve the engine may be asked which clauses belong to an unsatisfiable core, or for the value of each atom on a satisfying valuation, and clause_stage reconstructs formula-level answers from those per-clause and per-atom answers.
//!
//! # Orientation
//!
//! The library is designed around a [session](crate::session).
//!
//! A session owns:
//! - A [staging buffer](crate::transient::StagingBuffer), in which the literals of a clause are accumulated.
//! - A [clause store](crate::db::clause::ClauseStore), a directory of immutable [clause records](crate::structures::clause::ClauseRecord) indexed exactly as the engine indexes clauses.
//! - An [engine](crate::engine::Engine), created on [init](crate::session::GenericSession::init) and released on [reset](crate::session::GenericSession::reset).
//!
//! Any engine which satisfies the [Engine](crate::engine::Engine) trait may be used.
//! A small conflict-driven clause-learning engine is included, see [engine::cdcl].
//!
//! # Examples
//!
//! + The two atom contradiction, and its core.
//!
//! ```rust
//! # use clause_stage::session::Session;
//! # use clause_stage::reports::Report;
//! let mut session = Session::default();
//! assert!(session.init().is_ok());
//!
//! let formula = [vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]];
//! assert!(session.add_clauses(&formula).is_ok());
//!
//! assert_eq!(session.solve(0), Report::Unsatisfiable);
//!
//! let core = session.unsat_core(-1);
//! assert!(!core.is_empty());
//! assert!(core.iter().all(|clause| formula.contains(clause)));
//! ```
//!
//! + A model.
//!
//! ```rust
//! # use clause_stage::session::Session;
//! # use clause_stage::reports::Report;
//! let mut session = Session::default();
//! assert!(session.init().is_ok());
//!
//! assert!(session.add_clause([1, 2]).is_ok());
//! assert!(session.add_clause([-1]).is_ok());
//!
//! assert_eq!(session.solve(0), Report::Satisfiable);
//! assert_eq!(session.model(), vec![-1, 2]);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library.
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs of the clause store may be seen with `RUST_LOG=clause_store …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod db;
pub mod engine;
pub mod generic;
pub mod misc;
pub mod reports;
pub mod session;
pub mod structures;
pub mod transient;
pub mod types;
