//! The head-pose pipeline behind the mirror: exponential landmark
//! smoothing, fixed-index extraction of the five points of interest, and
//! the dramatized translation/scale/rotation estimate composed into one
//! model matrix. Pure math; rendering and detection live elsewhere.

pub mod estimator;
pub mod landmarks;
pub mod smoother;
pub mod transform;

pub use estimator::{HeadPose, PoseEstimator, DEFAULT_DRAMA};
pub use landmarks::{LandmarkError, PointsOfInterest, FACE_MESH_LANDMARKS};
pub use smoother::LandmarkSmoother;
