use bevy::color::Srgba;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use mirror_pose::estimator::camera_to_canvas;
use mirror_pose::{LandmarkSmoother, PointsOfInterest, PoseEstimator};

use crate::scene::MirrorModel;
use crate::tracking::TrackedFaces;
use crate::Options;

/// Shown while no face has ever been detected.
pub const LOADING_BACKGROUND: Color = Color::Srgba(Srgba::new(0.05, 0.05, 0.08, 1.0));
/// Revealed on the first detection (#afdda3, the reveal green).
const READY_BACKGROUND: Color = Color::Srgba(Srgba::new(0.686, 0.867, 0.639, 1.0));

const OVERLAY_DEPTH: f32 = 850.0;
const OVERLAY_RADIUS: f32 = 2.5;

#[derive(Resource)]
pub struct MirrorSession {
    pub smoother: LandmarkSmoother,
    pub estimator: PoseEstimator,
    pub ready: bool,
}

impl MirrorSession {
    pub fn new(drama: f32) -> Self {
        Self {
            smoother: LandmarkSmoother::default(),
            estimator: PoseEstimator::new(drama),
            ready: false,
        }
    }
}

/// The per-frame tick: smooth the newest detection, extract the points of
/// interest, estimate the pose and write the composed transform onto the
/// model. Runs after [`crate::api::update_api`] so it always sees the
/// latest snapshot the tracker managed to deliver.
pub fn update_mirror(
    mut session: ResMut<MirrorSession>,
    faces: Res<TrackedFaces>,
    mut clear_color: ResMut<ClearColor>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut model: Query<(&mut Transform, &mut Visibility), With<MirrorModel>>,
) {
    let Ok((mut transform, mut visibility)) = model.get_single_mut() else {
        return;
    };

    let Some(face) = faces.primary() else {
        // Zero faces in the newest snapshot: blank frame. The smoothed
        // landmarks are left untouched so motion freezes instead of
        // resetting when the face comes back.
        *visibility = Visibility::Hidden;
        return;
    };

    if !session.ready {
        session.ready = true;
        clear_color.0 = READY_BACKGROUND;
        info!("first face detected, revealing the mirror");
    }
    *visibility = Visibility::Visible;

    session.smoother.update(&face.points);
    let poi = PointsOfInterest::from_landmarks(session.smoother.points())
        .expect("tracked face was validated against the face mesh contract");

    let canvas = windows
        .get_single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(Vec2::ZERO);
    let pose = session.estimator.estimate(&poi, faces.frame_size, canvas);
    *transform = Transform::from_matrix(pose.to_matrix());
}

/// Draws the smoothed landmark cloud in canvas space, mirrored the same
/// way the nose translation is.
pub fn draw_landmark_overlay(
    options: Res<Options>,
    session: Res<MirrorSession>,
    faces: Res<TrackedFaces>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    if !options.debug_landmarks || !session.ready {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };

    let canvas = Vec2::new(window.width(), window.height());
    for point in session.smoother.points() {
        let on_canvas = camera_to_canvas(point.truncate(), faces.frame_size, canvas);
        gizmos.circle(
            on_canvas.extend(OVERLAY_DEPTH),
            Dir3::Z,
            OVERLAY_RADIUS,
            Color::srgb(1.0, 0.0, 0.0),
        );
    }
}
