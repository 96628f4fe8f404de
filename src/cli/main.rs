#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{fs::File, io::BufReader, path::Path};

use clause_stage::{builder::ParseReport, reports::Report, session::Session, types::err::ErrorKind};

mod parse;

/// Ways reading a formula from the command line may fail.
enum FormulaError {
    Open(std::io::Error),
    Format(Option<String>),
    Parse(ErrorKind),
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(e) => write!(f, "Failed to open the formula: {e}"),
            Self::Format(Some(extension)) => write!(f, "Formulas with extension '{extension}' are not supported"),
            Self::Format(None) => write!(f, "The formula has no extension, expected 'cnf'"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

/// Reads the formula at `path` into `session`, choosing a decoder by extension.
fn read_formula(path: &Path, session: &mut Session) -> Result<ParseReport, FormulaError> {
    let file = File::open(path).map_err(FormulaError::Open)?;

    let parsed = match path.extension().and_then(|extension| extension.to_str()) {
        Some("cnf") => session.read_dimacs(BufReader::new(file)),

        #[cfg(feature = "xz")]
        Some("xz") => session.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(file))),

        other => return Err(FormulaError::Format(other.map(str::to_owned))),
    };

    parsed.map_err(FormulaError::Parse)
}

fn main() {
    env_logger::init();

    let matches = parse::cli().get_matches();

    let config = parse::config_from_args(&matches);
    let options = parse::options_from_args(&matches);

    let mut session = Session::from_config(config);
    if let Err(e) = session.init() {
        println!("c Initialisation error: {e}");
        std::process::exit(1);
    }

    println!("c Reading {:?}", options.path);
    match read_formula(&options.path, &mut session) {
        Ok(parsed) => {
            println!("c Read {} clauses over {} atoms", parsed.added_clauses, parsed.added_atoms);
            if !parsed.matches_preamble() {
                println!(
                    "c The problem specification gave {} atoms and {} clauses",
                    parsed.expected_atoms.unwrap_or_default(),
                    parsed.expected_clauses.unwrap_or_default()
                );
            }
        }

        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    }

    let report = session.solve(options.time_limit);

    println!("s {report}");

    match report {
        Report::Satisfiable if options.model => {
            let mut line = String::from("v");
            for literal in session.model() {
                line.push_str(&format!(" {literal}"));
            }
            println!("{line} 0");
        }

        Report::Unsatisfiable if options.core => {
            if !session.trace_capable() {
                println!("c No core, as proof traces were not recorded.");
            }

            for clause in session.unsat_core(options.core_bound) {
                let mut line = String::default();
                for literal in clause {
                    line.push_str(&format!("{literal} "));
                }
                println!("{line}0");
            }
        }

        _ => {}
    }

    std::process::exit(report.code());
}
