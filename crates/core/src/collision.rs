//! Collision evaluation: playfield band and pipe overlap.

use crate::scroller::PipePair;
use crate::types::{
    Bound, LossCause, BIRD_HEIGHT, GROUND_BOUND, HIT_BAND_MAX_X, HIT_BAND_MIN_X, TOP_BOUND,
};

/// Band edge a bird row lies beyond, if any.
pub fn check_bounds(y: i16) -> Option<Bound> {
    if y > GROUND_BOUND {
        Some(Bound::Ground)
    } else if y < TOP_BOUND {
        Some(Bound::Ceiling)
    } else {
        None
    }
}

/// True when the pair is in the bird's column band and the bird touches
/// either piece.
pub fn pipe_overlap(y: i16, pipes: &PipePair) -> bool {
    let x = pipes.x();
    if !(HIT_BAND_MIN_X..=HIT_BAND_MAX_X).contains(&x) {
        return false;
    }
    let y = y as i32;
    y <= pipes.upper_height() as i32
        || y + BIRD_HEIGHT as i32 >= pipes.lower_top() as i32
}

/// One evaluation per Play frame.
///
/// `bound` is the band edge crossed this frame; `y` is the clamped row the
/// bird is drawn at.
pub fn evaluate(bound: Option<Bound>, y: i16, pipes: &PipePair) -> Option<LossCause> {
    if let Some(bound) = bound {
        return Some(bound.into());
    }
    if pipe_overlap(y, pipes) {
        return Some(LossCause::Pipe);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_at(x: i16) -> PipePair {
        let mut p = PipePair::new();
        p.set_x(x);
        p
    }

    #[test]
    fn band_limits_are_inclusive() {
        assert_eq!(check_bounds(TOP_BOUND), None);
        assert_eq!(check_bounds(GROUND_BOUND), None);
        assert_eq!(check_bounds(TOP_BOUND - 1), Some(Bound::Ceiling));
        assert_eq!(check_bounds(GROUND_BOUND + 1), Some(Bound::Ground));
    }

    #[test]
    fn pipe_outside_hit_band_never_collides() {
        assert!(!pipe_overlap(TOP_BOUND, &pair_at(111)));
        assert!(!pipe_overlap(TOP_BOUND, &pair_at(39)));
    }

    #[test]
    fn bird_in_gap_passes() {
        // Upper 39 rows, lower piece starts at row 95: rows 40..=69 are safe.
        let p = pair_at(80);
        assert!(!pipe_overlap(40, &p));
        assert!(!pipe_overlap(69, &p));
    }

    #[test]
    fn bird_touching_either_piece_collides() {
        let p = pair_at(40);
        assert!(pipe_overlap(39, &p));
        assert!(pipe_overlap(70, &p));
        let p = pair_at(110);
        assert!(pipe_overlap(10, &p));
    }

    #[test]
    fn evaluate_prefers_band_then_pipe() {
        let p = pair_at(80);
        assert_eq!(evaluate(Some(Bound::Ground), 100, &p), Some(LossCause::Ground));
        assert_eq!(evaluate(Some(Bound::Ceiling), TOP_BOUND, &p), Some(LossCause::Ceiling));
        assert_eq!(evaluate(None, 20, &p), Some(LossCause::Pipe));
        assert_eq!(evaluate(None, 50, &p), None);
    }
}
