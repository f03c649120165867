//! Decorative confetti for the graduation celebration
//!
//! Each piece falls from just above the screen to just below it, fading out
//! over the second half of its fall, then waits [`REPEAT_DELAY_SECS`] and
//! starts again. Parameters are randomised once per piece.

use std::time::Duration;

use rand::Rng;

/// Number of pieces in a celebration
pub const CONFETTI_COUNT: usize = 30;

/// Pause between two falls of the same piece
pub const REPEAT_DELAY_SECS: f64 = 2.0;

/// Vertical start and end, as fractions of the screen height
const START_Y: f64 = -0.2;
const END_Y: f64 = 1.2;

/// Randomised parameters of one looping piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    pub id: usize,
    /// Horizontal position, 0-100
    pub x_percent: f64,
    /// Phase delay before the first fall, 0-5 s
    pub delay_secs: f64,
    /// Length of one fall, 3-7 s
    pub duration_secs: f64,
    /// Rotation reached at the bottom, 0-360 degrees
    pub rotation_deg: f64,
}

/// Where a piece is at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiFrame {
    pub x_percent: f64,
    /// 0.0 is the top edge, 1.0 the bottom edge
    pub y_fraction: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            x_percent: rng.gen::<f64>() * 100.0,
            delay_secs: rng.gen::<f64>() * 5.0,
            duration_secs: 3.0 + rng.gen::<f64>() * 4.0,
            rotation_deg: rng.gen::<f64>() * 360.0,
        }
    }

    /// Position `elapsed` after the animation started, or `None` while the
    /// piece is hidden (before its first fall or between falls)
    pub fn frame_at(&self, elapsed: Duration) -> Option<ConfettiFrame> {
        let t = elapsed.as_secs_f64() - self.delay_secs;
        if t < 0.0 || self.duration_secs <= 0.0 {
            return None;
        }

        let phase = t % (self.duration_secs + REPEAT_DELAY_SECS);
        if phase > self.duration_secs {
            return None;
        }

        let progress = phase / self.duration_secs;
        let opacity = if progress <= 0.5 {
            1.0
        } else {
            1.0 - (progress - 0.5) * 2.0
        };

        Some(ConfettiFrame {
            x_percent: self.x_percent,
            y_fraction: START_Y + (END_Y - START_Y) * progress,
            rotation_deg: self.rotation_deg * progress,
            opacity,
        })
    }
}

/// Generate `count` independently parameterised pieces
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ConfettiPiece> {
    (0..count).map(|id| ConfettiPiece::random(id, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn piece() -> ConfettiPiece {
        ConfettiPiece {
            id: 0,
            x_percent: 40.0,
            delay_secs: 1.0,
            duration_secs: 4.0,
            rotation_deg: 200.0,
        }
    }

    #[test]
    fn test_generated_parameters_are_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let pieces = generate(CONFETTI_COUNT, &mut rng);

        assert_eq!(pieces.len(), CONFETTI_COUNT);
        for (i, p) in pieces.iter().enumerate() {
            assert_eq!(p.id, i);
            assert!((0.0..100.0).contains(&p.x_percent));
            assert!((0.0..5.0).contains(&p.delay_secs));
            assert!((3.0..7.0).contains(&p.duration_secs));
            assert!((0.0..360.0).contains(&p.rotation_deg));
        }
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let a = generate(5, &mut StdRng::seed_from_u64(9));
        let b = generate(5, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_hidden_before_delay_and_between_falls() {
        let p = piece();
        assert!(p.frame_at(Duration::from_millis(500)).is_none());
        // delay 1 + fall 4 = 5; the pause runs until 7
        assert!(p.frame_at(Duration::from_secs(6)).is_none());
        assert!(p.frame_at(Duration::from_millis(7500)).is_some());
    }

    #[test]
    fn test_frame_midway() {
        let frame = piece().frame_at(Duration::from_secs(3)).unwrap();
        assert!((frame.y_fraction - 0.5).abs() < 1e-9);
        assert!((frame.rotation_deg - 100.0).abs() < 1e-9);
        assert_eq!(frame.opacity, 1.0);
        assert_eq!(frame.x_percent, 40.0);
    }

    #[test]
    fn test_fades_out_near_the_bottom() {
        let frame = piece().frame_at(Duration::from_secs(4)).unwrap();
        assert!((frame.opacity - 0.5).abs() < 1e-9);
    }
}
