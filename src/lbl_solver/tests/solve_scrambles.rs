use cube_core::{CubeState, Move, MoveSeq, apply_moves, apply_sequence};
use lbl_solver::{PhaseOutcome, SolverPipeline};
use proptest::collection::vec;
use proptest::prelude::*;

static SCRAMBLES: [&str; 20] = [
    "U",
    "R L2 U2 D2 R2 U2 R' D2 R' F' R L2 B R2 L' F' B2 U' D' F B2 U R' L2",
    "F U2 D2 R2 F' B2 D2 F B D2 L2 U2 D R F2 B' L' B R L U D2 R2 L'",
    "F2 L' D2 F2 B2 R' U2 B2 R' F' B2 R' D F R2 L2 D' R L2 F2 B R2",
    "F2 U D2 R2 D' F' D R L2 U2 D B2 R' U2 D2 R L2 B2 R' L' U2 L'",
    "U D' B2 U D2 B R' L F B2 R2 L' U D F2 U2 D2 R L2 D2 R2 L B2 L D2 B2",
    "L2 F U2 D' R L2 B L' U' D' F' R2 F' D2 F' B' U2 L2 F B2 D2",
    "R2 D2 B' D2 F B L2 U2 D2 F2 L' U D F' B R F R' L2 B",
    "F B2 R2 L F B R2 L U' F2 B R2 L' F B R2 L2 U' D2 R2 U D2 B2 R2 L2 U R2 L2",
    "F U' F' B' L' U F B R F' B D2 F B2 U2 R2 U2 D2 F B",
    "L' U2 D2 F2 R' L2 U2 R' F2 B2 R' F2 B2 D F2 B U2 L' U2 D' R' L U' D' F2 B2",
    "F2 B R' F' R L' U D2 F B2 L U R' D2 R2 F' B2 L2 U2 F' B'",
    "B2 U2 D2 R L2 D2 R2 L' U2 D2 L B2 R D F2 B2 R2 L' U2 D R2 L2 F' B2 D' R' L2",
    "L2 F2 B2 U D2 R2 D R2 L2 F2 R L2 F' B' U D2 R L2 U2 F' B' R' L2 U2 D R' L",
    "B R' L' U' F2 B' R' U D2 F2 B' D2 R2 L2 F' R2 F B2 U2 R2 D2 R2 L2",
    "B U' D2 F2 B' U2 D' L' U D2 F2 B R L' U F2 U2 D' F2 U' D' B2 R2 F2",
    "R F' B' R B2 U F B2 U D F2 B U' D2 R2 B2 D2 F2 D R2",
    "F2 B2 R' U2 R' F2 D2 R F2 B' R2 D' F U F2 B' R L2 U' D'",
    "R2 U2 L' B2 R2 L' B2 U2 D2 L' F' B2 U' F' B' U2 D' F' R' U' L",
    "U' F2 U2 F2 B2 U F2 R2 F U' D R' L' U' D2 F2 B D2 F' B2 R' L'",
];

/// Scrambles the demo command walks through.
static DEMO_SCRAMBLES: [&str; 4] = [
    "R U R' F R F'",
    "R U R' U R U2 R'",
    "F R U' R' U' R U R' F'",
    "R U R' U' R' F R2 U' R' U' R U R' F'",
];

fn solves(scramble: &str) -> lbl_solver::Solution {
    let mut cube = CubeState::new_solved();
    apply_sequence(&mut cube, scramble).unwrap();

    let solution = SolverPipeline::default().solve(&cube);

    apply_moves(&mut cube, solution.moves());
    assert!(cube.is_solved(), "{scramble:?} was left unsolved");
    assert!(solution.every_phase_finished(), "{scramble:?}");

    solution
}

#[test_log::test]
fn solves_full_length_scrambles() {
    for scramble in SCRAMBLES {
        solves(scramble);
    }
}

#[test_log::test]
fn solves_demo_scrambles() {
    for scramble in DEMO_SCRAMBLES {
        solves(scramble);
    }
}

#[test_log::test]
fn solves_repeated_trigger() {
    let solution = solves("R U R' U' R U R' U' R U R'");
    assert_eq!(solution.phases()[0].outcome, PhaseOutcome::AlreadyComplete);
}

#[test_log::test]
fn last_layer_cases_skip_the_first_two_layers() {
    let solution = solves("F R U' R' U' R U R' F'");

    for report in &solution.phases()[..3] {
        assert_eq!(report.outcome, PhaseOutcome::AlreadyComplete);
        assert_eq!(report.moves, 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solves_random_scrambles(indices in vec(0..Move::ALL.len(), 0..30)) {
        let scramble = indices.into_iter().map(|i| Move::ALL[i]).collect::<MoveSeq>();
        let mut cube = CubeState::new_solved();
        apply_moves(&mut cube, &scramble);

        let solution = SolverPipeline::default().solve(&cube);
        apply_moves(&mut cube, solution.moves());
        prop_assert!(cube.is_solved(), "{} was left unsolved", scramble);
    }
}
