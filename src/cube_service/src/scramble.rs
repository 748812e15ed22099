use cube_core::{Move, MoveSeq};

pub const SCRAMBLE_LENGTH: usize = 20;

/// Twenty random moves, never turning the same face twice in a row.
pub fn generate_random_scramble(rng: &mut fastrand::Rng) -> MoveSeq {
    let mut scramble = MoveSeq::default();
    let mut last_face = None;

    for _ in 0..SCRAMBLE_LENGTH {
        let candidates = Move::ALL
            .into_iter()
            .filter(|mv| Some(mv.face()) != last_face)
            .collect::<Vec<_>>();

        let mv = candidates[rng.usize(..candidates.len())];
        last_face = Some(mv.face());
        scramble.push(mv);
    }

    scramble
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{SCRAMBLE_LENGTH, generate_random_scramble};

    #[test]
    fn never_turns_a_face_twice_in_a_row() {
        let mut rng = fastrand::Rng::with_seed(0xC0BE);

        for _ in 0..200 {
            let scramble = generate_random_scramble(&mut rng);
            assert_eq!(scramble.len(), SCRAMBLE_LENGTH);
            assert!(
                scramble
                    .iter()
                    .tuple_windows()
                    .all(|(a, b)| a.face() != b.face()),
                "{scramble}"
            );
        }
    }

    #[test]
    fn seeded_scrambles_repeat() {
        let a = generate_random_scramble(&mut fastrand::Rng::with_seed(42));
        let b = generate_random_scramble(&mut fastrand::Rng::with_seed(42));
        let c = generate_random_scramble(&mut fastrand::Rng::with_seed(43));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
