use std::{fs::File, io::BufReader, path::Path};

use clause_stage::{
    builder::ParseReport,
    reports::Report,
    session::Session,
    types::err::{ErrorKind, ParseError, SessionError, StagingError},
};

fn cnf_paths(dir: &str) -> Vec<std::path::PathBuf> {
    let pattern = format!("{}/tests/cnf/{dir}/*.cnf", env!("CARGO_MANIFEST_DIR"));
    let paths = glob::glob(&pattern)
        .expect("Invalid pattern")
        .filter_map(Result::ok)
        .collect::<Vec<_>>();
    assert!(!paths.is_empty(), "No formulas found for {pattern}");
    paths
}

fn read_and_solve(path: &Path) -> (Session, ParseReport) {
    let mut session = Session::default();
    assert!(session.init().is_ok());

    let file = File::open(path).expect("Failed to open formula");
    let report = match session.read_dimacs(BufReader::new(&file)) {
        Ok(report) => report,
        Err(e) => panic!("Failed to read {path:?}: {e}"),
    };

    session.solve(0);
    (session, report)
}

mod files {
    use super::*;

    #[test]
    fn satisfiable() {
        for path in cnf_paths("sat") {
            let (session, report) = read_and_solve(&path);
            assert_eq!(session.last_report(), Report::Satisfiable, "{path:?}");

            assert!(report.matches_preamble(), "{path:?}");

            let model = session.model();
            for clause in session.clauses() {
                assert!(clause.iter().any(|literal| model.contains(literal)), "{path:?}");
            }
        }
    }

    #[test]
    fn unsatisfiable() {
        for path in cnf_paths("unsat") {
            let (session, report) = read_and_solve(&path);
            assert_eq!(session.last_report(), Report::Unsatisfiable, "{path:?}");

            assert!(report.matches_preamble(), "{path:?}");

            let core = session.unsat_core(-1);
            assert!(!core.is_empty(), "{path:?}");

            let mut core_session = Session::default();
            assert!(core_session.init().is_ok());
            assert!(core_session.add_clauses(&core).is_ok());
            assert_eq!(core_session.solve(0), Report::Unsatisfiable, "{path:?}");
        }
    }

    #[test]
    fn chain_core() {
        let path = format!("{}/tests/cnf/unsat/chain_refuted.cnf", env!("CARGO_MANIFEST_DIR"));
        let (session, report) = read_and_solve(Path::new(&path));

        assert_eq!(report.expected_atoms, None);
        assert_eq!(report.added_clauses, 8);
        assert_eq!(report.added_atoms, 8);

        assert_eq!(session.unsat_core(-1).len(), 6);
        assert!(!session.unsat_core(-1).contains(&vec![7, 8]));
    }
}

mod parsing {
    use super::*;

    fn initialized_session() -> Session {
        let mut session = Session::default();
        assert!(session.init().is_ok());
        session
    }

    #[test]
    fn without_preamble() {
        let mut session = initialized_session();
        let dimacs = "1 -2 0\n2 0\n";

        let report = session.read_dimacs(dimacs.as_bytes());
        assert_eq!(
            report,
            Ok(ParseReport {
                expected_atoms: None,
                expected_clauses: None,
                added_atoms: 2,
                added_clauses: 2,
            })
        );
        assert_eq!(session.clauses(), vec![vec![1, -2], vec![2]]);
    }

    #[test]
    fn unterminated_final_clause() {
        let mut session = initialized_session();
        let dimacs = "p cnf 3 2\n1 2 0\n-3";

        assert!(session.read_dimacs(dimacs.as_bytes()).is_ok());
        assert_eq!(session.clauses(), vec![vec![1, 2], vec![-3]]);
    }

    #[test]
    fn comments_between_clauses() {
        let mut session = initialized_session();
        let dimacs = "c first\np cnf 2 2\n1 0\nc second\n-2 0\n";

        assert!(session.read_dimacs(dimacs.as_bytes()).is_ok());
        assert_eq!(session.clauses(), vec![vec![1], vec![-2]]);
    }

    #[test]
    fn bad_problem_specification() {
        let mut session = initialized_session();

        assert_eq!(
            session.read_dimacs("p cnf two 1\n1 0\n".as_bytes()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
        assert_eq!(
            session.read_dimacs("p dnf 1 1\n1 0\n".as_bytes()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
        assert!(session.clauses().is_empty());
    }

    #[test]
    fn bad_literal() {
        let mut session = initialized_session();

        assert_eq!(
            session.read_dimacs("p cnf 2 2\n1 2 0\n1 x 0\n".as_bytes()),
            Err(ErrorKind::Parse(ParseError::Literal(3)))
        );

        // Clauses before the error remain.
        assert_eq!(session.clauses(), vec![vec![1, 2]]);
    }

    #[test]
    fn preamble_mismatch() {
        let mut session = initialized_session();

        let report = session.read_dimacs("p cnf 2 3\n1 0\n-2 0\n".as_bytes());
        assert!(report.is_ok_and(|report| !report.matches_preamble()));
    }

    #[test]
    fn atom_out_of_range() {
        let mut session = initialized_session();

        assert_eq!(
            session.read_dimacs("p cnf 1 2\n1 0\n-2147483648 0\n".as_bytes()),
            Err(ErrorKind::Staging(StagingError::AtomOutOfRange))
        );
        assert_eq!(session.clauses(), vec![vec![1]]);
    }

    #[test]
    fn misplaced_problem_specification() {
        let mut session = initialized_session();

        assert_eq!(
            session.read_dimacs("1 0\np cnf 1 1\n".as_bytes()),
            Err(ErrorKind::Parse(ParseError::Line(2)))
        );
    }

    #[test]
    fn uninitialized() {
        let mut session = Session::default();

        assert_eq!(
            session.read_dimacs("1 0\n".as_bytes()),
            Err(ErrorKind::Session(SessionError::NotInitialized))
        );
    }
}
