/*!
Configuration of a session.

All configuration for a session is contained within a [Config].
The configuration is read when a session is [initialised](crate::session::GenericSession::init), and so changes to the configuration of an initialised session take effect after the session is reset and initialised again.
This includes the capacity of the staging buffer and the block size of the clause store, as both are rebuilt on initialisation.

Each option is bounded, and options should be revised through [ConfigOption::set] to respect the bounds.
*/

mod config_option;
pub use config_option::ConfigOption;

mod engine;
pub use engine::EngineConfig;

use crate::structures::atom::{Atom, ATOM_MAX};

/// The default initial capacity of the staging buffer, in literals.
pub const DEFAULT_STAGING_CAPACITY: usize = 256;

/// The default block size of the clause store, in records.
pub const DEFAULT_STORE_BLOCK: usize = 1024;

/// The default greatest atom of a literal in a clause.
///
/// An engine may allocate storage for every atom up to the greatest atom seen, and so the default is well below [ATOM_MAX].
pub const DEFAULT_ATOM_LIMIT: Atom = 1 << 24;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The greatest atom of a literal in a clause, with clauses containing a greater atom refused.
    pub atom_limit: ConfigOption<Atom>,

    /// Request the engine to record proof traces, required for [unsatisfiable cores](crate::session::GenericSession::unsat_core).
    pub proof_trace: ConfigOption<bool>,

    /// The capacity of the staging buffer on first use.
    pub staging_capacity: ConfigOption<usize>,

    /// The number of records by which the clause store grows, at least.
    pub store_block: ConfigOption<usize>,

    /// Configuration passed to an engine on creation.
    pub engine: EngineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            atom_limit: ConfigOption {
                name: "atom_limit",
                min: 1,
                max: ATOM_MAX,
                value: DEFAULT_ATOM_LIMIT,
            },

            proof_trace: ConfigOption {
                name: "proof_trace",
                min: false,
                max: true,
                value: true,
            },

            staging_capacity: ConfigOption {
                name: "staging_capacity",
                min: 1,
                max: usize::MAX / 2,
                value: DEFAULT_STAGING_CAPACITY,
            },

            store_block: ConfigOption {
                name: "store_block",
                min: 1,
                max: usize::MAX / 2,
                value: DEFAULT_STORE_BLOCK,
            },

            engine: EngineConfig::default(),
        }
    }
}
