//! Reports on the result of a solve.

/// The result of a solve, as reported by an engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula is unknown, e.g. as no solve has been made or the time allowed for a solve was exceeded.
    #[default]
    Unknown,
}

impl Report {
    /// The report as an exit code, following the conventions of the SAT competition and the IPASIR API.
    pub fn code(&self) -> i32 {
        match self {
            Self::Satisfiable => 10,
            Self::Unsatisfiable => 20,
            Self::Unknown => 0,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
