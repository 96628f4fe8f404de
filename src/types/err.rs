//! Error types used in the library.
//!
//! - Session errors note a request made in the wrong state of a session, and are reported without any change to the session.
//! - Staging errors note a clause which could not be staged, and likewise leave the session unchanged.
//! - Others are specific to some part of the library, e.g. parsing a DIMACS formula or bounds on a configuration option.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The umbrella error, to which each specific error converts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ClauseStore(ClauseStoreError),
    Config(ConfigError),
    Parse(ParseError),
    Session(SessionError),
    Staging(StagingError),
}

/// Errors in the clause store.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseStoreError {
    /// An index outside of the clauses stored.
    IndexOutOfRange,

    /// Storage for a further clause could not be allocated.
    Allocation,
}

impl From<ClauseStoreError> for ErrorKind {
    fn from(e: ClauseStoreError) -> Self {
        ErrorKind::ClauseStore(e)
    }
}

/// Errors when setting a configuration option.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value given is outside the bounds of the (named) option.
    OutOfRange(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// Something other than a literal at a specific line.
    Literal(usize),

    /// The reader failed.
    Io,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors related to the state of a session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// The session has not been initialised, or has been reset.
    NotInitialized,

    /// The session has already been initialised.
    AlreadyInitialized,
}

impl From<SessionError> for ErrorKind {
    fn from(e: SessionError) -> Self {
        ErrorKind::Session(e)
    }
}

/// Errors when staging a clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StagingError {
    /// Zero appeared as a literal.
    /// Zero is reserved to terminate a clause.
    ZeroLiteral,

    /// The atom of a literal exceeds the atom limit of the session.
    /// As the negation of `i32::MIN` is not an `i32`, the atom of `i32::MIN` is always out of range.
    AtomOutOfRange,

    /// Storage for a further literal could not be allocated.
    Allocation,
}

impl From<StagingError> for ErrorKind {
    fn from(e: StagingError) -> Self {
        ErrorKind::Staging(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClauseStore(ClauseStoreError::IndexOutOfRange) => write!(f, "Clause index out of range"),
            Self::ClauseStore(ClauseStoreError::Allocation) => write!(f, "Clause store allocation failed"),
            Self::Config(ConfigError::OutOfRange(name)) => write!(f, "Value out of range for {name}"),
            Self::Parse(ParseError::ProblemSpecification) => write!(f, "Malformed problem specification"),
            Self::Parse(ParseError::Line(line)) => write!(f, "Parse error on line {line}"),
            Self::Parse(ParseError::Literal(line)) => write!(f, "Invalid literal on line {line}"),
            Self::Parse(ParseError::Io) => write!(f, "Failed to read input"),
            Self::Session(SessionError::NotInitialized) => write!(f, "Session not initialized"),
            Self::Session(SessionError::AlreadyInitialized) => write!(f, "Session already initialized"),
            Self::Staging(StagingError::ZeroLiteral) => write!(f, "Zero is not a literal"),
            Self::Staging(StagingError::AtomOutOfRange) => write!(f, "Literal atom out of range"),
            Self::Staging(StagingError::Allocation) => write!(f, "Staging buffer allocation failed"),
        }
    }
}
