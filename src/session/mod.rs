/*!
The session --- within which clauses are staged, stored, and passed to an engine, and from which formulas, cores, and models are queried.

Strictly, a [GenericSession] and a [Session].

The generic session is generic over the [engine](crate::engine::Engine) used, while a session uses the [built-in engine](crate::engine::cdcl::BuiltinEngine).
As with the methods of the generic session, [from_config](Session::from_config) is implemented for a session to avoid requiring an engine to be named alongside a config.

# Lifecycle

```none
               init                    add_clause(s), solve, queries
Uninitialized ------> Initialized <-+
      ^                   |         |
      |     reset         +---------+
      +-------------------+
```

- [init](GenericSession::init) creates an engine and, if [configured](crate::config::Config::proof_trace), requests proof traces.
- [add_clause](GenericSession::add_clause) stages the literals of a clause, materialises a [record](crate::structures::clause::ClauseRecord), registers the literals with the engine, and appends the record to the [store](crate::db::clause::ClauseStore).
- [solve](GenericSession::solve) passes the clauses to the engine and keeps the verdict.
- [reset](GenericSession::reset) clears the store, releases the staging buffer, forgets the verdict, and releases the engine, in that order.

Requests made in the wrong state are refused with a [SessionError](crate::types::err::SessionError), and leave the session as it was.
Queries are never refused, and instead return nothing if nothing follows from the state of the session.

# Example

```rust
# use clause_stage::session::{Session, SessionState};
# use clause_stage::reports::Report;
# use clause_stage::types::err::{ErrorKind, SessionError};
let mut session = Session::default();
assert_eq!(session.add_clause([1]), Err(ErrorKind::Session(SessionError::NotInitialized)));

assert!(session.init().is_ok());
assert_eq!(session.state(), SessionState::Initialized);

assert_eq!(session.add_clause([1, -2]), Ok(0));
assert_eq!(session.add_clause([2]), Ok(1));
assert_eq!(session.clauses(), vec![vec![1, -2], vec![2]]);

assert_eq!(session.solve(0), Report::Satisfiable);
assert_eq!(session.model(), vec![1, 2]);

assert!(session.reset().is_ok());
assert_eq!(session.state(), SessionState::Uninitialized);
assert!(session.clauses().is_empty());
```
*/

mod generic;
pub use generic::GenericSession;
mod query;
mod specific;
pub use specific::Session;

/// The state of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No engine exists, and no clause is stored.
    Uninitialized,

    /// An engine exists, to which clauses may be added.
    Initialized,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::Initialized => write!(f, "Initialized"),
        }
    }
}
