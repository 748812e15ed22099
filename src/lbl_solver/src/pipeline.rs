use std::{
    fmt::{self, Display},
    time::Instant,
};

use cube_core::{CubeState, Move, MoveSeq, apply_move, notation};
use log::{debug, info, trace, warn};

use crate::{
    phases::{
        Cross, FirstLayerCorners, MiddleLayer, Permutation, Phase, PhaseKind, Side,
        TopCornerOrientation, TopCross,
    },
    start, success, working,
};

pub const DEFAULT_CROSS_BOUND: usize = 50;
pub const DEFAULT_FIRST_LAYER_CORNERS_BOUND: usize = 50;
pub const DEFAULT_MIDDLE_LAYER_BOUND: usize = 100;
pub const DEFAULT_TOP_CROSS_BOUND: usize = 20;
pub const DEFAULT_TOP_CORNER_ORIENTATION_BOUND: usize = 50;
pub const DEFAULT_PERMUTATION_BOUND: usize = 50;

/// Turned when no case is recognised, to look at the cube from another angle.
const FALLBACK: &[Move] = &[notation::U];

/// How many detect-then-apply iterations each phase may run before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseBounds {
    pub cross: usize,
    pub first_layer_corners: usize,
    pub middle_layer: usize,
    pub top_cross: usize,
    pub top_corner_orientation: usize,
    pub permutation: usize,
}

impl PhaseBounds {
    pub const DEFAULT: Self = PhaseBounds {
        cross: DEFAULT_CROSS_BOUND,
        first_layer_corners: DEFAULT_FIRST_LAYER_CORNERS_BOUND,
        middle_layer: DEFAULT_MIDDLE_LAYER_BOUND,
        top_cross: DEFAULT_TOP_CROSS_BOUND,
        top_corner_orientation: DEFAULT_TOP_CORNER_ORIENTATION_BOUND,
        permutation: DEFAULT_PERMUTATION_BOUND,
    };

    /// The same bound for every phase.
    pub const fn uniform(bound: usize) -> Self {
        PhaseBounds {
            cross: bound,
            first_layer_corners: bound,
            middle_layer: bound,
            top_cross: bound,
            top_corner_orientation: bound,
            permutation: bound,
        }
    }

    pub const fn for_phase(&self, kind: PhaseKind) -> usize {
        match kind {
            PhaseKind::Cross => self.cross,
            PhaseKind::FirstLayerCorners => self.first_layer_corners,
            PhaseKind::MiddleLayer => self.middle_layer,
            PhaseKind::TopCross => self.top_cross,
            PhaseKind::TopCornerOrientation => self.top_corner_orientation,
            PhaseKind::Permutation => self.permutation,
        }
    }
}

impl Default for PhaseBounds {
    fn default() -> Self {
        PhaseBounds::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseOutcome {
    /// The goal already held on entry; nothing was emitted.
    AlreadyComplete,
    Completed,
    /// The iteration bound ran out with the goal still unmet.
    BoundExhausted,
}

impl Display for PhaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhaseOutcome::AlreadyComplete => "already complete",
            PhaseOutcome::Completed => "completed",
            PhaseOutcome::BoundExhausted => "bound exhausted",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseReport {
    pub phase: PhaseKind,
    pub outcome: PhaseOutcome,
    pub iterations: usize,
    /// Number of moves this phase appended to the solution.
    pub moves: usize,
}

impl Display for PhaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} iterations, {} moves)",
            self.phase, self.outcome, self.iterations, self.moves
        )
    }
}

/// The moves emitted by every phase, in phase order.
///
/// A solution is not guaranteed to solve the cube. Replay it against the
/// scrambled state to find out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    moves: MoveSeq,
    phases: Vec<PhaseReport>,
}

impl Solution {
    pub fn moves(&self) -> &MoveSeq {
        &self.moves
    }

    pub fn into_moves(self) -> MoveSeq {
        self.moves
    }

    pub fn phases(&self) -> &[PhaseReport] {
        &self.phases
    }

    /// Whether no phase ran out of iterations.
    pub fn every_phase_finished(&self) -> bool {
        self.phases
            .iter()
            .all(|report| report.outcome != PhaseOutcome::BoundExhausted)
    }
}

/// Runs the six phases in order over a copy of the cube.
#[derive(Debug, Clone, Default)]
pub struct SolverPipeline {
    bounds: PhaseBounds,
}

impl SolverPipeline {
    pub fn new(bounds: PhaseBounds) -> Self {
        SolverPipeline { bounds }
    }

    pub fn bounds(&self) -> &PhaseBounds {
        &self.bounds
    }

    /// Solves a copy of `scrambled`. The caller's state is left untouched.
    pub fn solve(&self, scrambled: &CubeState) -> Solution {
        info!(start!("Solving layer by layer"));
        let start = Instant::now();

        let mut state = scrambled.clone();
        let mut moves = MoveSeq::default();

        let phases = vec![
            self.run_phase::<Cross>(&mut state, &mut moves),
            self.run_phase::<FirstLayerCorners>(&mut state, &mut moves),
            self.run_phase::<MiddleLayer>(&mut state, &mut moves),
            self.run_phase::<TopCross>(&mut state, &mut moves),
            self.run_phase::<TopCornerOrientation>(&mut state, &mut moves),
            self.run_phase::<Permutation>(&mut state, &mut moves),
        ];

        if state.is_solved() {
            info!(
                success!("Solved with {} moves in {:.3}s"),
                moves.len(),
                start.elapsed().as_secs_f64()
            );
        } else {
            warn!(
                "Layer-by-layer solver stopped unsolved after {} moves",
                moves.len()
            );
        }

        Solution { moves, phases }
    }

    fn run_phase<P: Phase>(&self, state: &mut CubeState, moves: &mut MoveSeq) -> PhaseReport {
        let bound = self.bounds.for_phase(P::KIND);
        let emitted_before = moves.len();
        let mut iterations = 0;

        debug!(working!("Entering the {} phase (bound {})"), P::KIND, bound);

        let outcome = loop {
            if P::is_complete(state) {
                break if iterations == 0 {
                    PhaseOutcome::AlreadyComplete
                } else {
                    PhaseOutcome::Completed
                };
            }

            if iterations == bound {
                break PhaseOutcome::BoundExhausted;
            }

            let (algorithm, side) = match P::classify(state) {
                Some((case, side)) => {
                    trace!("{}: {case:?} on {side}", P::KIND);
                    (P::algorithm(case), side)
                }
                None => {
                    trace!("{}: no case recognised", P::KIND);
                    (FALLBACK, Side::F)
                }
            };

            for &mv in algorithm {
                let mv = side.remap(mv);
                apply_move(state, mv);
                moves.push(mv);
            }

            iterations += 1;
        };

        let report = PhaseReport {
            phase: P::KIND,
            outcome,
            iterations,
            moves: moves.len() - emitted_before,
        };

        if outcome == PhaseOutcome::BoundExhausted {
            warn!("The {} phase gave up after {bound} iterations", P::KIND);
        } else {
            debug!(working!("{}"), report);
        }

        report
    }
}
