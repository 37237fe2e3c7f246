use glam::Vec2;

use crate::landmarks::PointsOfInterest;

/// Default dramatization multiplier applied to every motion component.
pub const DEFAULT_DRAMA: f32 = 1.5;

// Distance domains tuned to typical webcam-frame pixel magnitudes.
// Fixed constants, not derived from any calibration step.
const FACE_HEIGHT_DOMAIN: f32 = 600.0;
const EYE_SPAN_DOMAIN: f32 = 400.0;
const SCALE_RANGE: f32 = 3.0;

/// Per-frame rigid-body-like transform derived from one landmark set.
///
/// The rotation fields are not true radian measures: each is the raw
/// adjacent/hypotenuse cosine ratio of its point pair, multiplied by the
/// drama factor with no inverse-cosine applied. The exaggeration is the
/// point of the piece; treat these as stylized proxy signals rather than
/// physical angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadPose {
    /// Canvas-space offset, X mirrored like a real mirror.
    pub translation: Vec2,
    pub scale: f32,
    /// Shake, applied about the vertical axis.
    pub yaw: f32,
    /// Nod, applied about the horizontal axis.
    pub pitch: f32,
    /// Tilt, applied about the depth axis.
    pub roll: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct PoseEstimator {
    pub drama: f32,
}

impl Default for PoseEstimator {
    fn default() -> Self {
        Self { drama: DEFAULT_DRAMA }
    }
}

impl PoseEstimator {
    pub fn new(drama: f32) -> Self {
        Self { drama }
    }

    /// Derives the full pose from the five points of interest.
    ///
    /// `frame` is the webcam frame size in pixels (the space the landmarks
    /// live in), `canvas` the render surface size the translation maps onto.
    pub fn estimate(&self, poi: &PointsOfInterest, frame: Vec2, canvas: Vec2) -> HeadPose {
        HeadPose {
            translation: camera_to_canvas(poi.nose.truncate(), frame, canvas),
            scale: self.scale(poi),
            yaw: self.yaw(poi),
            pitch: self.pitch(poi),
            roll: self.roll(poi),
        }
    }

    /// Uniform scale from two independent depth cues: apparent face height
    /// (forehead to chin) and apparent eye span, each remapped to [0, 3]
    /// over its fixed pixel domain, then averaged.
    fn scale(&self, poi: &PointsOfInterest) -> f32 {
        let y_distance = poi.forehead.distance(poi.chin);
        let x_distance = poi.left_eye.distance(poi.right_eye);
        let y_scale = remap(y_distance, 0.0, FACE_HEIGHT_DOMAIN, 0.0, SCALE_RANGE);
        let x_scale = remap(x_distance, 0.0, EYE_SPAN_DOMAIN, 0.0, SCALE_RANGE);
        (y_scale + x_scale) / 2.0 * self.drama
    }

    fn yaw(&self, poi: &PointsOfInterest) -> f32 {
        let mid = (poi.left_eye + poi.right_eye) * 0.5;
        let adjacent = poi.left_eye.z - mid.z;
        let opposite = poi.left_eye.x - mid.x;
        cosine_ratio(adjacent, opposite) * self.drama
    }

    fn pitch(&self, poi: &PointsOfInterest) -> f32 {
        let mid = (poi.forehead + poi.chin) * 0.5;
        let adjacent = poi.forehead.z - mid.z;
        let opposite = poi.forehead.y - mid.y;
        cosine_ratio(adjacent, opposite) * self.drama
    }

    fn roll(&self, poi: &PointsOfInterest) -> f32 {
        let mid = (poi.forehead + poi.chin) * 0.5;
        let adjacent = poi.forehead.x - mid.x;
        let opposite = poi.forehead.y - mid.y;
        -cosine_ratio(adjacent, opposite) * self.drama
    }
}

/// adjacent/hypotenuse for one point pair. Coincident points leave no
/// usable direction; the ratio is defined as 0 instead of faulting.
fn cosine_ratio(adjacent: f32, opposite: f32) -> f32 {
    let hypotenuse = adjacent.hypot(opposite);
    if hypotenuse <= f32::EPSILON {
        return 0.0;
    }
    adjacent / hypotenuse
}

/// Linear remap of `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`,
/// unclamped.
pub fn remap(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    out_lo + (value - in_lo) * (out_hi - out_lo) / (in_hi - in_lo)
}

/// Maps a webcam-pixel point onto the origin-centered canvas, mirroring X
/// so that motion toward the camera's right moves the image left, as in a
/// real mirror. Unknown frame dimensions yield no offset.
pub fn camera_to_canvas(point: Vec2, frame: Vec2, canvas: Vec2) -> Vec2 {
    if frame.x <= 0.0 || frame.y <= 0.0 {
        return Vec2::ZERO;
    }
    let x = remap(point.x, 0.0, frame.x, -canvas.x / 2.0, canvas.x / 2.0);
    let y = remap(point.y, 0.0, frame.y, -canvas.y / 2.0, canvas.y / 2.0);
    Vec2::new(-x, y)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn poi(forehead: Vec3, chin: Vec3, left_eye: Vec3, right_eye: Vec3) -> PointsOfInterest {
        PointsOfInterest {
            nose: Vec3::ZERO,
            forehead,
            chin,
            left_eye,
            right_eye,
        }
    }

    fn level_head() -> PointsOfInterest {
        poi(
            Vec3::new(0.0, -50.0, 0.0),
            Vec3::new(0.0, 50.0, 0.0),
            Vec3::new(-50.0, 0.0, 0.0),
            Vec3::new(50.0, 0.0, 0.0),
        )
    }

    #[test]
    fn scale_grows_with_face_height() {
        let estimator = PoseEstimator::default();
        let mut previous = f32::NEG_INFINITY;

        // Eye span held fixed; scale must be strictly monotonic in the
        // forehead-to-chin distance across its whole domain.
        for height in [0.0, 50.0, 150.0, 300.0, 450.0, 600.0] {
            let half = height / 2.0;
            let p = poi(
                Vec3::new(0.0, -half, 0.0),
                Vec3::new(0.0, half, 0.0),
                Vec3::new(-100.0, 0.0, 0.0),
                Vec3::new(100.0, 0.0, 0.0),
            );
            let scale = estimator.estimate(&p, Vec2::ZERO, Vec2::ZERO).scale;
            assert!(scale > previous, "scale {scale} not above {previous} at height {height}");
            previous = scale;
        }
    }

    #[test]
    fn scale_averages_both_cues_and_applies_drama() {
        let estimator = PoseEstimator::new(1.5);
        // Face height 300 -> y cue 1.5; eye span 100 -> x cue 0.75.
        let p = poi(
            Vec3::new(0.0, -150.0, 0.0),
            Vec3::new(0.0, 150.0, 0.0),
            Vec3::new(-50.0, 0.0, 0.0),
            Vec3::new(50.0, 0.0, 0.0),
        );
        let scale = estimator.estimate(&p, Vec2::ZERO, Vec2::ZERO).scale;
        assert!((scale - (1.5 + 0.75) / 2.0 * 1.5).abs() < 1e-6);
    }

    #[test]
    fn yaw_sign_follows_left_eye_depth() {
        let estimator = PoseEstimator::default();

        // Left eye pushed away from the camera (positive z), right eye at
        // zero: the adjacent leg is positive, so the shake angle must be
        // positive.
        let mut p = level_head();
        p.left_eye.z = 10.0;
        let turned = estimator.estimate(&p, Vec2::ZERO, Vec2::ZERO);
        assert!(turned.yaw > 0.0);

        // Mirrored depth offset flips the sign.
        p.left_eye.z = -10.0;
        let opposite = estimator.estimate(&p, Vec2::ZERO, Vec2::ZERO);
        assert!(opposite.yaw < 0.0);
    }

    #[test]
    fn level_head_has_no_rotation() {
        let estimator = PoseEstimator::default();
        let pose = estimator.estimate(&level_head(), Vec2::ZERO, Vec2::ZERO);
        assert_eq!(pose.yaw, 0.0);
        assert_eq!(pose.pitch, 0.0);
        assert_eq!(pose.roll, 0.0);
    }

    #[test]
    fn coincident_pair_yields_zero_angle() {
        let estimator = PoseEstimator::default();
        // Forehead and chin collapsed onto one point: pitch and roll have
        // no defined direction and must fall back to 0 without faulting.
        let p = poi(
            Vec3::new(3.0, 3.0, 3.0),
            Vec3::new(3.0, 3.0, 3.0),
            Vec3::new(-50.0, 0.0, 0.0),
            Vec3::new(50.0, 0.0, 0.0),
        );
        let pose = estimator.estimate(&p, Vec2::ZERO, Vec2::ZERO);
        assert_eq!(pose.pitch, 0.0);
        assert_eq!(pose.roll, 0.0);
    }

    #[test]
    fn drama_scales_the_rotation_proxy() {
        let mut p = level_head();
        p.left_eye.z = 30.0;

        let tame = PoseEstimator::new(1.0).estimate(&p, Vec2::ZERO, Vec2::ZERO);
        let dramatic = PoseEstimator::new(1.8).estimate(&p, Vec2::ZERO, Vec2::ZERO);
        assert!((dramatic.yaw - tame.yaw * 1.8).abs() < 1e-6);
    }

    #[test]
    fn nose_translation_is_mirrored_on_x_only() {
        let estimator = PoseEstimator::default();
        let frame = Vec2::new(640.0, 480.0);
        let canvas = Vec2::new(1280.0, 960.0);

        let mut p = level_head();
        // Nose in the right quarter of the frame, below center.
        p.nose = Vec3::new(480.0, 360.0, 0.0);
        let pose = estimator.estimate(&p, frame, canvas);

        // x: 480/640 maps to +320 on the canvas, mirrored to -320.
        // y: 360/480 maps to +240, not mirrored.
        assert!((pose.translation.x - -320.0).abs() < 1e-3);
        assert!((pose.translation.y - 240.0).abs() < 1e-3);
    }

    #[test]
    fn unknown_frame_size_means_no_offset() {
        assert_eq!(
            camera_to_canvas(Vec2::new(320.0, 240.0), Vec2::ZERO, Vec2::new(800.0, 600.0)),
            Vec2::ZERO,
        );
    }

    #[test]
    fn frame_center_lands_on_canvas_origin() {
        let frame = Vec2::new(640.0, 480.0);
        let canvas = Vec2::new(1920.0, 1080.0);
        let center = camera_to_canvas(frame / 2.0, frame, canvas);
        assert!(center.length() < 1e-3);
    }
}
