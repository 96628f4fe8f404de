/*!
Tools for building a session.

The basic method to build a session is [add_clause](crate::session::GenericSession::add_clause), with [add_clauses](crate::session::GenericSession::add_clauses) for a batch of clauses.
A formula in DIMACS form may instead be [read](crate::session::GenericSession::read_dimacs) into a session, clause by clause.

# Examples

```rust
# use clause_stage::session::Session;
# use clause_stage::reports::Report;
# use std::io::Write;
let mut session = Session::default();
assert!(session.init().is_ok());

let mut dimacs = vec![];
let _ = dimacs.write(b"
c The two atom contradiction.
p cnf 2 4
 1  2 0
-1  2 0
 1 -2 0
-1 -2 0
");

let report = session.read_dimacs(dimacs.as_slice()).unwrap();
assert_eq!(report.expected_clauses, Some(4));
assert_eq!(report.added_clauses, 4);

assert_eq!(session.solve(0), Report::Unsatisfiable);
```
*/

mod dimacs;

/// Details of a DIMACS formula read into a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// The count of atoms given in the problem specification, if present.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem specification, if present.
    pub expected_clauses: Option<usize>,

    /// The greatest atom known to the engine after reading.
    pub added_atoms: usize,

    /// A count of clauses added while reading.
    pub added_clauses: usize,
}

impl ParseReport {
    /// Whether the counts given in the problem specification (if any) match the counts read.
    ///
    /// ```rust
    /// # use clause_stage::session::Session;
    /// let mut session = Session::default();
    /// assert!(session.init().is_ok());
    ///
    /// let report = session.read_dimacs("p cnf 3 2\n1 -2 0\n".as_bytes()).unwrap();
    /// assert!(!report.matches_preamble());
    ///
    /// let report = session.read_dimacs("1 -2 0\n".as_bytes()).unwrap();
    /// assert!(report.matches_preamble());
    /// ```
    pub fn matches_preamble(&self) -> bool {
        self.expected_atoms.map_or(true, |atoms| atoms >= self.added_atoms)
            && self.expected_clauses.map_or(true, |clauses| clauses == self.added_clauses)
    }
}
