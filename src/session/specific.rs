use crate::{config::Config, engine::cdcl::BuiltinEngine};

use super::GenericSession;

/// A session which uses the [built-in engine](BuiltinEngine).
pub type Session = GenericSession<BuiltinEngine>;

impl Session {
    /// Creates a session from some given configuration.
    pub fn from_config(config: Config) -> Self {
        GenericSession::with_engine(config)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::from_config(Config::default())
    }
}
