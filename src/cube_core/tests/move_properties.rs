use cube_core::{
    CubeState, Face, Move, MoveSeq, Turn, apply_move, apply_moves, apply_sequence, state_after,
};
use proptest::collection::vec;
use proptest::prelude::*;

fn any_move() -> impl Strategy<Value = Move> {
    (0..Move::ALL.len()).prop_map(|i| Move::ALL[i])
}

fn any_seq(max_len: usize) -> impl Strategy<Value = MoveSeq> {
    vec(any_move(), 0..max_len).prop_map(MoveSeq::new)
}

// Scrambles paired with the facelet string a two-phase solver expects for them.
static REFERENCE_STATES: [[&str; 2]; 8] = [
    ["", "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"],
    [
        "U2 R2 L D2 L F2 B2 U' D' F U R' L2 U2 D L F' B2 D R2",
        "FLLLULFRFRUURRRBBBLDDFFUBRUDFRDDUFLDUFUFLDLBRBDRBBULBD",
    ],
    [
        "L U' R2 F B2 R2 L U' D2 R2 F B' U R' U2 R2 D2 F2 U2 L'",
        "BLBLUFFFFDULURFRRULDLBFRDBUFDFBDDDBRDUUFLULRRUDRLBRBLB",
    ],
    [
        "R L2 U2 D2 R2 U2 R' D2 R' F' R L2 B R2 L' F' B2 U' D' F B2 U R' L2",
        "DUULUFBDDRRFURDBFLRBBUFBLBLULURDLLBDFUUFLRBDFRFRLBDFRD",
    ],
    [
        "R2 D' B2 U' D' R2 U' L2 U' L2 B' R' F D F' B U2 L'",
        "BUDFUDRFDBRFURBFDRDULRFBUBURDLFDLRDDULFULBBRFLRLLBLBFU",
    ],
    [
        "L D2 R' L' D2 F' R' L' F B2 U' D F B' R' U2 L",
        "FRFDUDULRUBDFRBFFRLDBLFRDULRRDLDUBLULFBBLFDBBRDURBUFUL",
    ],
    [
        "B' U2 B U2 D R' L' D F B R F' D2 L2 F' R2 L2 F' D2 F2 R2 L2",
        "UFLBURFFLBFBLRRFRRLUUDFUBBDDRRFDDFBBRUULLLLLRDDFUBBUDD",
    ],
    [
        "R2 U2 L' B2 R2 L' B2 U2 D2 L' F' B2 U' F' B' U2 D' F' R' U' L",
        "FLUBULFRDBUBFRUBFFUDLDFDDLURBRFDRRBLLURFLBFLBLDURBUDRD",
    ],
];

#[test]
fn scrambles_reach_reference_states() {
    for [scramble, expected] in REFERENCE_STATES {
        let mut cube = CubeState::new_solved();
        let applied = apply_sequence(&mut cube, scramble).unwrap();

        assert_eq!(applied, scramble.split_whitespace().count());
        assert_eq!(cube.to_compact_string(), expected, "scramble {scramble:?}");
        assert_eq!(expected.parse::<CubeState>().unwrap(), cube);
    }
}

#[test]
fn solutions_undo_scrambles() {
    for [scramble, _] in REFERENCE_STATES {
        let seq = scramble.parse::<MoveSeq>().unwrap();
        let mut cube = state_after(&seq);
        apply_moves(&mut cube, &seq.inverse());
        assert!(cube.is_solved(), "inverse of {scramble:?}");
    }
}

proptest! {
    #[test]
    fn move_then_inverse_is_identity(seq in any_seq(30), mv in any_move()) {
        let start = state_after(&seq);
        let mut cube = start.clone();

        apply_move(&mut cube, mv);
        apply_move(&mut cube, mv.inverse());
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn turns_preserve_color_counts_and_centers(seq in any_seq(60)) {
        let cube = state_after(&seq);

        prop_assert_eq!(cube.color_counts(), [9; 6]);
        for face in Face::ALL {
            prop_assert_eq!(cube.facelet(face, 1, 1), face);
        }
    }

    #[test]
    fn quarter_turns_have_order_four(seq in any_seq(30), mv in any_move()) {
        prop_assume!(mv.turn() != Turn::Double);
        let start = state_after(&seq);
        let mut cube = start.clone();

        for _ in 0..4 {
            apply_move(&mut cube, mv);
        }
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn double_turn_is_two_quarter_turns(seq in any_seq(30), mv in any_move()) {
        let mut doubled = state_after(&seq);
        let mut twice = doubled.clone();

        apply_move(&mut doubled, Move::new(mv.face(), Turn::Double));
        apply_move(&mut twice, Move::new(mv.face(), Turn::Clockwise));
        apply_move(&mut twice, Move::new(mv.face(), Turn::Clockwise));
        prop_assert_eq!(doubled, twice);
    }

    #[test]
    fn compact_string_round_trips(seq in any_seq(40)) {
        let cube = state_after(&seq);
        let text = cube.to_compact_string();

        prop_assert_eq!(text.len(), 54);
        prop_assert_eq!(CubeState::from_compact_string(&text), Ok(cube));
    }

    #[test]
    fn sequence_inverse_restores_the_state(seq in any_seq(40), prefix in any_seq(20)) {
        let start = state_after(&prefix);
        let mut cube = start.clone();

        apply_moves(&mut cube, &seq);
        apply_moves(&mut cube, &seq.inverse());
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn cancellation_preserves_the_effect(seq in any_seq(40)) {
        let cancelled = seq.cancelled();

        prop_assert!(cancelled.len() <= seq.len());
        prop_assert_eq!(state_after(&cancelled), state_after(&seq));
    }

    #[test]
    fn text_form_parses_back(seq in any_seq(40)) {
        prop_assert_eq!(seq.to_string().parse::<MoveSeq>(), Ok(seq));
    }
}
