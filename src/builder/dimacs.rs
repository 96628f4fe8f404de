use std::io::BufRead;

use crate::{
    engine::Engine,
    misc::log::targets::{self},
    session::GenericSession,
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

use super::ParseReport;

/// Parses a count from the problem specification.
fn problem_count(item: Option<&str>) -> Result<usize, ErrorKind> {
    match item.map(str::parse::<usize>) {
        Some(Ok(count)) => Ok(count),
        _ => Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
    }
}

impl<E: Engine> GenericSession<E> {
    /// Reads a DIMACS formula into an initialised session.
    ///
    /// ```rust,ignore
    /// session.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// - Lines beginning with `c` are comments.
    /// - The problem specification `p cnf <atoms> <clauses>` is optional, and if present precedes the formula.
    /// - Each clause is terminated by `0`, and a clause may span lines.
    /// - A line beginning with `%` ends the formula.
    ///
    /// A final clause without a terminator is added, as though terminated.
    #[allow(unused_labels)]
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParseReport, ErrorKind> {
        if self.engine.is_none() {
            log::warn!(target: targets::PARSE, "DIMACS read into an uninitialised session");
            return Err(err::SessionError::NotInitialized.into());
        }

        let mut report = ParseReport::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: Vec<CLiteral> = Vec::default();

        let mut line_counter = 0;

        // first phase, read until the formula begins
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Io.into()),
            }

            match buffer.trim_start().chars().next() {
                Some('c') | None => {
                    buffer.clear();
                    continue;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();
                    if problem_details.nth(1) != Some("cnf") {
                        return Err(err::ParseError::ProblemSpecification.into());
                    }
                    report.expected_atoms = Some(problem_count(problem_details.next())?);
                    report.expected_clauses = Some(problem_count(problem_details.next())?);

                    log::info!(target: targets::PARSE, "Expecting {:?} atoms and {:?} clauses", report.expected_atoms, report.expected_clauses);
                    buffer.clear();
                    break;
                }

                // The line is part of the formula, and is kept in the buffer for the second phase.
                _ => break,
            }
        }

        // second phase, read until the formula ends
        'formula_loop: loop {
            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => {}
                Some('p') => return Err(err::ParseError::Line(line_counter).into()),
                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                self.add_clause(&clause_buffer)?;
                                clause_buffer.clear();
                                report.added_clauses += 1;
                            }

                            _ => match item.parse::<CLiteral>() {
                                Ok(literal) => clause_buffer.push(literal),
                                Err(_) => return Err(err::ParseError::Literal(line_counter).into()),
                            },
                        }
                    }
                }
            }

            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Io.into()),
            }
        }

        if !clause_buffer.is_empty() {
            log::warn!(target: targets::PARSE, "Final clause without a terminator");
            self.add_clause(&clause_buffer)?;
            report.added_clauses += 1;
        }

        if let Some(engine) = &self.engine {
            report.added_atoms = engine.variable_count() as usize;
        }

        if let Some(expected) = report.expected_clauses {
            if expected != report.added_clauses {
                log::warn!(target: targets::PARSE, "Expected {expected} clauses, read {}", report.added_clauses);
            }
        }

        log::info!(target: targets::PARSE, "Read {} clauses from {line_counter} lines", report.added_clauses);
        Ok(report)
    }
}
