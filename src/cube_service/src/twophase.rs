//! The optimal-solver collaborator, reached through rob-twophase's
//! interactive console.

use std::{
    fs,
    io::{self, BufRead, BufReader, Write},
    process::{Child, ChildStdin, ChildStdout, Command, Stdio},
    sync::{Mutex, PoisonError},
};

use log::{debug, info, trace};
use thiserror::Error;

use crate::config::TwophaseConfig;

#[derive(Error, Debug)]
pub enum ExternalSolverError {
    /// The solver's sentinel for a facelet string that is not a solvable cube.
    #[error("The optimal solver rejected the cube: {0}")]
    InvalidCube(String),
    #[error("Failed to communicate with the optimal solver: {0}")]
    Io(#[from] io::Error),
    #[error("Unexpected output from the optimal solver: {0}")]
    UnexpectedOutput(String),
    #[error("The optimal solver returned an unreadable solution: {0}")]
    MalformedSolution(#[source] cube_core::InvalidMoveToken),
}

/// Something that finds a short solution for a cube given as a facelet
/// string in U, R, F, D, L, B order.
pub trait OptimalSolver {
    /// Returns the solution as whitespace-separated move tokens.
    ///
    /// # Errors
    ///
    /// `ExternalSolverError::InvalidCube` when the solver says the facelets
    /// do not describe a solvable cube, and any other variant when the solver
    /// itself failed.
    fn solve(&self, facelets: &str) -> Result<String, ExternalSolverError>;
}

impl<S: OptimalSolver + ?Sized> OptimalSolver for &S {
    fn solve(&self, facelets: &str) -> Result<String, ExternalSolverError> {
        (**self).solve(facelets)
    }
}

struct Session {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl Drop for Session {
    fn drop(&mut self) {
        // The process may already be gone; nothing to report either way
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// A long-running `twophase` process, started on first use and reused for
/// every later query.
pub struct TwophaseProcess {
    config: TwophaseConfig,
    session: Mutex<Option<Session>>,
}

impl TwophaseProcess {
    pub fn new(config: TwophaseConfig) -> Self {
        TwophaseProcess {
            config,
            session: Mutex::new(None),
        }
    }

    fn spawn(&self) -> Result<Session, ExternalSolverError> {
        let mut command = Command::new(&self.config.binary);

        // rob-twophase dumps its tables into its working directory
        if let Some(table_dir) = self.config.table_dir() {
            fs::create_dir_all(&table_dir)?;
            command.current_dir(table_dir);
        }

        info!(
            "Starting {} with {} threads",
            self.config.binary.display(),
            self.config.threads()
        );

        let mut child = command
            .args(["-c", "-m"])
            .arg(self.config.max_length.to_string())
            .arg("-t")
            .arg(self.config.threads().to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            return Err(ExternalSolverError::UnexpectedOutput(
                "the solver process has no piped stdio".to_owned(),
            ));
        };

        Ok(Session {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

impl OptimalSolver for TwophaseProcess {
    fn solve(&self, facelets: &str) -> Result<String, ExternalSolverError> {
        let mut maybe_session = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let session = if let Some(v) = &mut *maybe_session {
            v
        } else {
            maybe_session.insert(self.spawn()?)
        };

        let result = query(&mut session.stdout, &mut session.stdin, facelets);

        // A process that broke mid-conversation is replaced on the next call
        if matches!(
            result,
            Err(ExternalSolverError::Io(_) | ExternalSolverError::UnexpectedOutput(_))
        ) {
            *maybe_session = None;
        }

        result
    }
}

fn read_line<R: BufRead>(reader: &mut R, waiting_for: &str) -> Result<String, ExternalSolverError> {
    let mut line = String::new();

    if reader.read_line(&mut line)? == 0 {
        return Err(ExternalSolverError::UnexpectedOutput(format!(
            "output ended while waiting for {waiting_for}"
        )));
    }

    Ok(line.trim_end().to_owned())
}

fn rejection(line: &str) -> Option<ExternalSolverError> {
    line.starts_with("Error")
        .then(|| ExternalSolverError::InvalidCube(line.to_owned()))
}

/// Runs one `solve` exchange.
///
/// The console looks like
///
/// ```text
/// Ready!
/// solve LBDLULDDURDRRRFRURBFFRFBFRDLDBDDBDFBBULRLFFBUFLUUBUULL
/// 30.177ms
/// R F2 R' U R U2 F2 U2 F' D' R D2 L2 D2 L' U2 F2 (17)
/// Ready!
/// ```
///
/// and the reply is the solution line without its move count.
pub(crate) fn query<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    facelets: &str,
) -> Result<String, ExternalSolverError> {
    loop {
        let line = read_line(reader, "`Ready!`")?;
        trace!("twophase: {line}");

        if line == "Ready!" {
            break;
        }
    }

    writeln!(writer, "solve {facelets}")?;
    writer.flush()?;

    let timing = read_line(reader, "the solve time")?;
    if let Some(err) = rejection(&timing) {
        return Err(err);
    }
    debug!("twophase solved in {timing}");

    let solution = read_line(reader, "the solution")?;
    if let Some(err) = rejection(&solution) {
        return Err(err);
    }

    Ok(strip_move_count(&solution))
}

/// `R F2 R' (3)` becomes `R F2 R'`.
fn strip_move_count(line: &str) -> String {
    line.split_whitespace()
        .filter(|token| !token.starts_with('('))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{ExternalSolverError, OptimalSolver, TwophaseProcess, query, strip_move_count};
    use crate::config::TwophaseConfig;

    const BANNER: &str = "This is rob-twophase v2.0; copyright Elias Frantar 2020.\n\
        \n\
        Loading tables ...\n\
        Done. 0.518s\n\
        \n\
        Enter >>solve FACECUBE<< to solve, >>scramble<< to scramble or >>bench<< to benchmark.\n\
        \n\
        Ready!\n";

    #[test]
    fn strips_the_move_count() {
        assert_eq!(strip_move_count("R F2 R' (3)"), "R F2 R'");
        assert_eq!(strip_move_count("(0)"), "");
        assert_eq!(strip_move_count("U  D2 (2)  "), "U D2");
    }

    #[test]
    fn sends_the_facelets_and_reads_the_solution() {
        let facelets = "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB";
        let mut reader = Cursor::new(format!("{BANNER}0.412ms\nU' (1)\nReady!\n"));
        let mut written = Vec::new();

        let solution = query(&mut reader, &mut written, facelets).unwrap();

        assert_eq!(solution, "U'");
        assert_eq!(String::from_utf8(written).unwrap(), format!("solve {facelets}\n"));
    }

    #[test]
    fn later_queries_skip_straight_to_ready() {
        let mut reader = Cursor::new(format!("{BANNER}1ms\nR (1)\nReady!\n2ms\nF2 (1)\nReady!\n"));
        let mut written = Vec::new();

        assert_eq!(query(&mut reader, &mut written, "A").unwrap(), "R");
        assert_eq!(query(&mut reader, &mut written, "B").unwrap(), "F2");
        assert_eq!(
            String::from_utf8(written).unwrap(),
            "solve A\nsolve B\n"
        );
    }

    #[test]
    fn error_replies_are_invalid_cubes() {
        let mut reader = Cursor::new(format!("{BANNER}Error. Invalid cube.\nReady!\n"));
        let err = query(&mut reader, &mut Vec::new(), "UUU").unwrap_err();
        assert!(matches!(err, ExternalSolverError::InvalidCube(ref line) if line == "Error. Invalid cube."));

        let mut reader = Cursor::new(format!("{BANNER}0.1ms\nError 2\n"));
        let err = query(&mut reader, &mut Vec::new(), "UUU").unwrap_err();
        assert!(matches!(err, ExternalSolverError::InvalidCube(_)));
    }

    #[test]
    fn truncated_output_is_unexpected() {
        let mut reader = Cursor::new("Loading tables ...\n");
        let err = query(&mut reader, &mut Vec::new(), "UUU").unwrap_err();
        assert!(matches!(err, ExternalSolverError::UnexpectedOutput(_)));

        let mut reader = Cursor::new(format!("{BANNER}0.1ms\n"));
        let err = query(&mut reader, &mut Vec::new(), "UUU").unwrap_err();
        assert!(matches!(err, ExternalSolverError::UnexpectedOutput(_)));
    }

    #[test]
    fn missing_binary_is_an_io_error() {
        let solver = TwophaseProcess::new(TwophaseConfig {
            binary: "/nonexistent/twophase".into(),
            table_dir: Some(std::env::temp_dir()),
            ..TwophaseConfig::default()
        });

        let err = solver.solve("UUU").unwrap_err();
        assert!(matches!(err, ExternalSolverError::Io(_)));
    }

    #[test]
    #[ignore = "needs the rob-twophase `twophase` binary on PATH"]
    fn real_twophase_solves_a_scramble() {
        let mut cube = cube_core::CubeState::new_solved();
        cube_core::apply_sequence(&mut cube, "R U R' U' R U R' U' R U R'").unwrap();

        let solver = TwophaseProcess::new(TwophaseConfig::default());
        let solution = solver.solve(&cube.to_compact_string()).unwrap();

        let moves = cube_core::apply_sequence(&mut cube, &solution).unwrap();
        assert!(cube.is_solved());
        assert!(moves <= 20);
    }
}
