use std::{
    fmt::{self, Display},
    time::{Duration, Instant},
};

use clap::ValueEnum;
use cube_core::{CubeState, InvalidMoveToken, MoveSeq, apply_moves, state_after};
use lbl_solver::{PhaseBounds, PhaseReport, SolverPipeline};
use log::{info, warn};
use thiserror::Error;

use crate::{
    config::Config,
    twophase::{ExternalSolverError, OptimalSolver, TwophaseProcess},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum SolveMethod {
    /// The external two-phase solver
    #[default]
    Twophase,
    /// The built-in layer-by-layer solver
    #[value(name = "lbl")]
    LayerByLayer,
    /// Two-phase, falling back to layer-by-layer if it fails
    #[value(name = "twophase-then-lbl")]
    TwophaseThenLayerByLayer,
}

impl Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SolveMethod::Twophase => "two-phase",
            SolveMethod::LayerByLayer => "layer-by-layer",
            SolveMethod::TwophaseThenLayerByLayer => "two-phase then layer-by-layer",
        })
    }
}

#[derive(Error, Debug)]
pub enum SolveError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveToken),
    #[error(transparent)]
    ExternalSolver(#[from] ExternalSolverError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub scramble: MoveSeq,
    pub solution: MoveSeq,
    /// The solver that produced `solution`.
    pub method: SolveMethod,
    /// Whether replaying `solution` after `scramble` solves the cube.
    pub verified: bool,
    pub move_count: usize,
    pub quarter_turns: usize,
    pub elapsed: Duration,
    /// Empty unless the layer-by-layer solver ran.
    pub phases: Vec<PhaseReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub move_count: usize,
    pub reason: Option<String>,
}

/// Checks that every token in `moves` is a legal move.
pub fn validate(moves: &str) -> Validation {
    match moves.parse::<MoveSeq>() {
        Ok(seq) => Validation {
            valid: true,
            move_count: seq.len(),
            reason: None,
        },
        Err(err) => Validation {
            valid: false,
            move_count: 0,
            reason: Some(err.to_string()),
        },
    }
}

/// Solve and validate requests over an optimal solver and the layer-by-layer
/// pipeline. Holds no per-request state.
pub struct CubeService<S> {
    optimal: S,
    pipeline: SolverPipeline,
    simplify: bool,
}

impl CubeService<TwophaseProcess> {
    pub fn from_config(config: &Config) -> Self {
        CubeService::new(
            TwophaseProcess::new(config.twophase.clone()),
            SolverPipeline::new(PhaseBounds::from(&config.pipeline)),
        )
        .with_simplify(config.service.simplify)
    }
}

impl<S: OptimalSolver> CubeService<S> {
    pub fn new(optimal: S, pipeline: SolverPipeline) -> Self {
        CubeService {
            optimal,
            pipeline,
            simplify: false,
        }
    }

    /// Whether to cancel adjacent same-face turns in reported solutions.
    #[must_use]
    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    /// Applies `scramble` to a solved cube and solves the result.
    ///
    /// # Errors
    ///
    /// Fails if `scramble` has an invalid token, in which case nothing is
    /// solved, or if the optimal solver fails and `method` does not allow
    /// falling back.
    pub fn solve(&self, scramble: &str, method: SolveMethod) -> Result<SolveReport, SolveError> {
        let scramble = scramble.parse::<MoveSeq>()?;
        let scrambled = state_after(&scramble);

        let start = Instant::now();
        let (solution, method, phases) = match method {
            SolveMethod::Twophase => (self.solve_optimal(&scrambled)?, method, Vec::new()),
            SolveMethod::LayerByLayer => self.solve_lbl(&scrambled),
            SolveMethod::TwophaseThenLayerByLayer => match self.solve_optimal(&scrambled) {
                Ok(solution) => (solution, SolveMethod::Twophase, Vec::new()),
                Err(err) => {
                    warn!("Two-phase solve failed, falling back to layer-by-layer: {err}");
                    self.solve_lbl(&scrambled)
                }
            },
        };
        let elapsed = start.elapsed();

        let solution = if self.simplify {
            solution.cancelled()
        } else {
            solution
        };

        let mut replay = scrambled;
        apply_moves(&mut replay, &solution);
        let verified = replay.is_solved();

        info!(
            "Solved with {method} in {:.3}s: {} moves, verified: {verified}",
            elapsed.as_secs_f64(),
            solution.len()
        );

        Ok(SolveReport {
            scramble,
            move_count: solution.len(),
            quarter_turns: solution.quarter_turns(),
            solution,
            method,
            verified,
            elapsed,
            phases,
        })
    }

    fn solve_optimal(&self, scrambled: &CubeState) -> Result<MoveSeq, ExternalSolverError> {
        if scrambled.is_solved() {
            return Ok(MoveSeq::default());
        }

        self.optimal
            .solve(&scrambled.to_compact_string())?
            .parse()
            .map_err(ExternalSolverError::MalformedSolution)
    }

    fn solve_lbl(&self, scrambled: &CubeState) -> (MoveSeq, SolveMethod, Vec<PhaseReport>) {
        let solution = self.pipeline.solve(scrambled);
        let phases = solution.phases().to_vec();
        (solution.into_moves(), SolveMethod::LayerByLayer, phases)
    }
}
