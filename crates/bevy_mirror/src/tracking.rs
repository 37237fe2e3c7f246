use bevy::math::{Vec2, Vec3};
use bevy::prelude::Resource;

use mirror_api::Face;

#[derive(Debug, Clone)]
pub struct TrackedFace {
    pub points: Vec<Vec3>,
}

impl From<&Face> for TrackedFace {
    fn from(face: &Face) -> Self {
        Self {
            points: face.landmarks.iter().map(|l| l.position).collect(),
        }
    }
}

/// The most recent detection snapshot delivered by the tracker, plus the
/// pixel size of the frame it was measured against. Replaced wholesale on
/// every snapshot; stale contents persist while the tracker is silent.
#[derive(Debug, Default, Resource)]
pub struct TrackedFaces {
    pub faces: Vec<TrackedFace>,
    pub frame_size: Vec2,
}

impl TrackedFaces {
    /// Only the first detected face drives the mirror.
    pub fn primary(&self) -> Option<&TrackedFace> {
        self.faces.first()
    }
}
