//! The score wheel
//!
//! A spin decelerates over a fixed number of steps and stops wherever the
//! accumulated rotation leaves it. The segment under the indicator decides
//! how much each revealed letter is worth.

use log::debug;
use rand::Rng;

/// Segment scores in wheel order
pub const DEFAULT_SEGMENTS: [u32; 10] = [0, 100, 1000, 500, 300, 0, 1000, 300, 5000, 800];

/// Number of deceleration steps in one spin
const SPIN_STEPS: u32 = 20;

/// Where a spin stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spin {
    pub segment: usize,
    pub score: u32,
}

/// A wheel with its current rotation
#[derive(Debug, Clone)]
pub struct Wheel {
    segments: Vec<u32>,
    angle: f64,
}

impl Wheel {
    /// Create a wheel from segment scores
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn new(segments: Vec<u32>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            segments,
            angle: 0.0,
        })
    }

    /// Spin with a random deceleration step in [15, 20)
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Spin {
        let step = 15.0 + 5.0 * rng.random::<f64>();
        self.spin_by(step)
    }

    /// Spin with a given deceleration step
    ///
    /// Starting speed is `20 * step` degrees per tick and drops by `step`
    /// each tick, so the wheel turns `210 * step` degrees in total.
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::wheel::Wheel;
    ///
    /// let mut wheel = Wheel::default();
    /// // 210 * 16 = 3360 degrees, which stops 120 degrees past nine full turns
    /// let spin = wheel.spin_by(16.0);
    /// assert_eq!(spin.segment, 6);
    /// assert_eq!(spin.score, 1000);
    /// ```
    pub fn spin_by(&mut self, step: f64) -> Spin {
        let mut speed = f64::from(SPIN_STEPS) * step;
        for _ in 0..SPIN_STEPS {
            self.angle += speed;
            speed -= step;
        }
        self.angle = self.angle.rem_euclid(360.0);

        let spin = self.segment_at(self.angle);
        debug!(
            "Wheel stopped at {:.1} degrees: segment {} worth {}",
            self.angle, spin.segment, spin.score
        );
        spin
    }

    /// Segment under the indicator for a rotation angle in degrees
    #[must_use]
    pub fn segment_at(&self, angle: f64) -> Spin {
        let count = self.segments.len();
        let sector = 360.0 / count as f64;
        let offset = (angle.rem_euclid(360.0) / sector).floor() as usize;
        let segment = (count - 1).saturating_sub(offset.min(count - 1));

        Spin {
            segment,
            score: self.segments[segment],
        }
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    /// Current rotation in degrees, in [0, 360)
    #[inline]
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS.to_vec(),
            angle: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_wheel_is_rejected() {
        assert!(Wheel::new(Vec::new()).is_none());
    }

    #[test]
    fn segment_at_counts_back_from_the_last_sector() {
        let wheel = Wheel::default();
        assert_eq!(wheel.segment_at(0.0).segment, 9);
        assert_eq!(wheel.segment_at(35.9).segment, 9);
        assert_eq!(wheel.segment_at(36.0).segment, 8);
        assert_eq!(wheel.segment_at(36.0).score, 5000);
        assert_eq!(wheel.segment_at(359.9).segment, 0);
        assert_eq!(wheel.segment_at(359.9).score, 0);
    }

    #[test]
    fn segment_at_wraps_angles() {
        let wheel = Wheel::default();
        assert_eq!(wheel.segment_at(396.0), wheel.segment_at(36.0));
        assert_eq!(wheel.segment_at(-1.0).segment, 0);
    }

    #[test]
    fn spin_by_is_deterministic() {
        let mut a = Wheel::default();
        let mut b = Wheel::default();
        assert_eq!(a.spin_by(17.5), b.spin_by(17.5));
        assert!((a.angle() - b.angle()).abs() < f64::EPSILON);
    }

    #[test]
    fn spin_by_rotates_210_steps() {
        let mut wheel = Wheel::default();
        // 210 * 15 = 3150 = 8 * 360 + 270
        let spin = wheel.spin_by(15.0);
        assert!((wheel.angle() - 270.0).abs() < 1e-9);
        assert_eq!(spin.segment, 2);
        assert_eq!(spin.score, 1000);
    }

    #[test]
    fn rotation_carries_over_between_spins() {
        let mut wheel = Wheel::default();
        wheel.spin_by(15.0);
        // 270 + 3150 = 3420 = 9 * 360 + 180
        let spin = wheel.spin_by(15.0);
        assert!((wheel.angle() - 180.0).abs() < 1e-9);
        assert_eq!(spin.segment, 4);
        assert_eq!(spin.score, 300);
    }

    #[test]
    fn random_spins_land_on_a_segment() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut wheel = Wheel::default();
        for _ in 0..500 {
            let spin = wheel.spin(&mut rng);
            assert!(spin.segment < DEFAULT_SEGMENTS.len());
            assert_eq!(spin.score, DEFAULT_SEGMENTS[spin.segment]);
            assert!((0.0..360.0).contains(&wheel.angle()));
        }
    }

    #[test]
    fn single_segment_wheel() {
        let mut wheel = Wheel::new(vec![250]).unwrap();
        let spin = wheel.spin_by(18.3);
        assert_eq!(spin.segment, 0);
        assert_eq!(spin.score, 250);
    }
}
