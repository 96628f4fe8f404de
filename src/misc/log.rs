/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
Warnings are used for requests made in the wrong state of a session (e.g. adding a clause before initialisation), as these are reported to the caller but do not otherwise interrupt use of a session.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [session](crate::session) lifecycle.
    pub const SESSION: &str = "session";

    /// Logs related to the [staging buffer](crate::transient::StagingBuffer).
    pub const STAGING: &str = "staging";

    /// Logs related to the [clause store](crate::db::clause).
    pub const CLAUSE_STORE: &str = "clause_store";

    /// Logs related to the [built-in engine](crate::engine::cdcl).
    pub const ENGINE: &str = "engine";

    /// Logs related to conflict analysis within the [built-in engine](crate::engine::cdcl).
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [queries](crate::session::GenericSession::unsat_core) on a session.
    pub const QUERY: &str = "query";

    /// Logs related to parsing [DIMACS](crate::builder::dimacs).
    pub const PARSE: &str = "parse";
}
