use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use crate::estimator::HeadPose;

/// Fixed corrective rotation about the horizontal axis, compensating for
/// the renderer's default mesh orientation. Always applied last.
pub const CALIBRATION_ROTATION: f32 = PI;

impl HeadPose {
    /// Composes the pose into a single model matrix:
    /// translation, then scale, then yaw, pitch, roll, then the fixed
    /// calibration flip. The order is load-bearing; reordering changes
    /// the rendered result.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation.extend(0.0))
            * Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_rotation_y(self.yaw)
            * Mat4::from_rotation_x(self.pitch)
            * Mat4::from_rotation_z(self.roll)
            * Mat4::from_rotation_x(CALIBRATION_ROTATION)
    }
}
