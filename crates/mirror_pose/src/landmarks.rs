use glam::Vec3;
use thiserror::Error;

/// Number of points in a face-mesh landmark set.
pub const FACE_MESH_LANDMARKS: usize = 468;

// MediaPipe Face Mesh topology. See the facemesh mesh_map reference
// published with the tfjs-models repository for the full numbering.
pub const NOSE_TIP: usize = 1;
pub const FOREHEAD: usize = 10;
pub const CHIN: usize = 152;
pub const LEFT_EYE_OUTER: usize = 226;
pub const RIGHT_EYE_OUTER: usize = 446;

#[derive(Error, Debug)]
pub enum LandmarkError {
    #[error("landmark set has {len} points, face mesh contract is {FACE_MESH_LANDMARKS}")]
    TruncatedSet { len: usize },
}

/// The five landmarks the pose estimator reads, resolved by fixed index
/// from a full smoothed landmark set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsOfInterest {
    pub nose: Vec3,
    pub forehead: Vec3,
    pub chin: Vec3,
    pub left_eye: Vec3,
    pub right_eye: Vec3,
}

impl PointsOfInterest {
    /// Fails only when the detector breaks its fixed-length contract;
    /// callers treat that as fatal rather than recoverable.
    pub fn from_landmarks(points: &[Vec3]) -> Result<Self, LandmarkError> {
        if points.len() < FACE_MESH_LANDMARKS {
            return Err(LandmarkError::TruncatedSet { len: points.len() });
        }

        Ok(Self {
            nose: points[NOSE_TIP],
            forehead: points[FOREHEAD],
            chin: points[CHIN],
            left_eye: points[LEFT_EYE_OUTER],
            right_eye: points[RIGHT_EYE_OUTER],
        })
    }
}
