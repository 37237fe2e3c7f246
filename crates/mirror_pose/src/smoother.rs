use glam::Vec3;

/// Fixed blend toward the newest detection, per landmark and axis.
pub const BLEND_FACTOR: f32 = 0.5;

/// Exponential smoothing over a whole landmark set.
///
/// The first detected set is adopted verbatim and establishes the baseline;
/// every later set is blended into it in place. Frames with no detection
/// must simply not call [`update`](Self::update), which leaves the held set
/// untouched (motion freezes rather than resetting).
#[derive(Debug, Default)]
pub struct LandmarkSmoother {
    points: Vec<Vec3>,
}

impl LandmarkSmoother {
    pub fn update(&mut self, raw: &[Vec3]) {
        if self.points.is_empty() {
            self.points = raw.to_vec();
            return;
        }

        debug_assert_eq!(self.points.len(), raw.len());
        for (held, new) in self.points.iter_mut().zip(raw) {
            *held = held.lerp(*new, BLEND_FACTOR);
        }
    }

    /// True once at least one detection has been absorbed.
    pub fn is_primed(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_copies_verbatim() {
        let raw = vec![Vec3::new(12.5, -3.25, 0.875), Vec3::new(640.0, 480.0, -7.0)];
        let mut smoother = LandmarkSmoother::default();
        assert!(!smoother.is_primed());

        smoother.update(&raw);
        assert!(smoother.is_primed());
        // Bit-for-bit: priming applies no blending.
        assert_eq!(smoother.points(), raw.as_slice());
    }

    #[test]
    fn blends_halfway_toward_new_detection() {
        let mut smoother = LandmarkSmoother::default();
        smoother.update(&[Vec3::splat(10.0)]);
        smoother.update(&[Vec3::splat(20.0)]);
        assert_eq!(smoother.points()[0], Vec3::splat(15.0));
    }

    #[test]
    fn converges_geometrically_to_constant_input() {
        let target = Vec3::new(100.0, -40.0, 8.0);
        let start = Vec3::ZERO;
        let mut smoother = LandmarkSmoother::default();
        smoother.update(&[start]);

        for _ in 0..10 {
            smoother.update(&[target]);
        }

        // Residual halves per frame: after 10 frames it is at most
        // 0.5^10 of the initial gap on every axis.
        let bound = (target - start).abs() * 0.5f32.powi(10);
        let residual = (target - smoother.points()[0]).abs();
        assert!(residual.x <= bound.x + f32::EPSILON);
        assert!(residual.y <= bound.y + f32::EPSILON);
        assert!(residual.z <= bound.z + f32::EPSILON);
    }

    #[test]
    fn untouched_when_not_updated() {
        let mut smoother = LandmarkSmoother::default();
        smoother.update(&[Vec3::new(1.0, 2.0, 3.0)]);
        smoother.update(&[Vec3::new(3.0, 4.0, 5.0)]);
        let before: Vec<Vec3> = smoother.points().to_vec();

        // A frame with zero detections never reaches the smoother; the
        // held set must be exactly what the previous frame left behind.
        assert_eq!(smoother.points(), before.as_slice());
    }

    #[test]
    fn reset_forgets_the_baseline() {
        let mut smoother = LandmarkSmoother::default();
        smoother.update(&[Vec3::ONE]);
        smoother.reset();
        assert!(!smoother.is_primed());

        smoother.update(&[Vec3::splat(9.0)]);
        assert_eq!(smoother.points()[0], Vec3::splat(9.0));
    }
}
