use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::put;
use axum::{Json, Router};
use axum_extra::TypedHeader;
use bevy::math::Vec2;
use bevy::prelude::{Assets, Image, Query, ResMut, Resource};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bytes::Bytes;
use headers::ContentLength;
use tokio::sync::mpsc;

use mirror_api::{ApiError, SetCameraRequest, SetFacesRequest};
use mirror_pose::FACE_MESH_LANDMARKS;

use crate::tracking::{TrackedFace, TrackedFaces};
use crate::webcam::WebcamTexture;

pub enum Command {
    SetFaces(SetFacesRequest),
    SetCamera(SetCameraRequest),
}

pub struct ApiState {
    tx: mpsc::UnboundedSender<Command>,
}

impl ApiState {
    pub fn new() -> (Arc<Self>, ApiResource) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), ApiResource { rx })
    }
}

async fn put_faces(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SetFacesRequest>,
) -> Result<StatusCode, ApiError> {
    // Zero faces is a valid snapshot; a face with the wrong landmark count
    // is a tracker that broke the face mesh contract.
    for face in &request.faces {
        if face.landmarks.len() != FACE_MESH_LANDMARKS {
            return Err(ApiError::invalid_argument(format!(
                "face carried {} landmarks, the face mesh contract is {}",
                face.landmarks.len(),
                FACE_MESH_LANDMARKS,
            )));
        }
    }

    state.tx.send(Command::SetFaces(request)).ok();
    Ok(StatusCode::OK)
}

async fn put_camera(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    TypedHeader(ContentLength(content_length)): TypedHeader<ContentLength>,
    payload: Bytes,
) -> Result<StatusCode, ApiError> {
    let Some(width) = headers
        .get("width")
        .and_then(|w| w.to_str().ok())
        .and_then(|s| s.parse::<u32>().ok())
    else {
        return Err(ApiError::invalid_argument("missing width"));
    };

    let Some(height) = headers
        .get("height")
        .and_then(|w| w.to_str().ok())
        .and_then(|s| s.parse::<u32>().ok())
    else {
        return Err(ApiError::invalid_argument("missing height"));
    };

    let payload_size = u64::from(width) * u64::from(height) * 4;
    if content_length != payload_size {
        return Err(ApiError::invalid_argument("payload is not width * height RGBA8"));
    }

    state.tx.send(Command::SetCamera(SetCameraRequest {
        width,
        height,
        payload,
    })).ok();
    Ok(StatusCode::OK)
}

pub fn new_api() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/v1/faces", put(put_faces))
        .route("/v1/camera", put(put_camera))
        .layer(DefaultBodyLimit::disable())
}

#[derive(Resource)]
pub struct ApiResource {
    rx: mpsc::UnboundedReceiver<Command>,
}

/// Drains everything the tracker queued since the last tick. The newest
/// snapshot wins; the render systems behind this one always read the
/// most-recent-available detection and never wait.
pub fn update_api(
    mut api: ResMut<ApiResource>,
    mut faces: ResMut<TrackedFaces>,
    cameras: Query<&WebcamTexture>,
    mut images: ResMut<Assets<Image>>,
) {
    while let Ok(command) = api.rx.try_recv() {
        match command {
            Command::SetFaces(request) => {
                faces.frame_size =
                    Vec2::new(request.frame_width as f32, request.frame_height as f32);
                faces.faces.clear();
                faces.faces.extend(request.faces.iter().map(TrackedFace::from));
            }
            Command::SetCamera(request) => {
                let size = Extent3d {
                    width: request.width,
                    height: request.height,
                    depth_or_array_layers: 1,
                };
                let image = Image::new(
                    size,
                    TextureDimension::D2,
                    request.payload.to_vec(),
                    TextureFormat::Rgba8UnormSrgb,
                    RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
                );
                for component in &cameras {
                    images.insert(&component.image, image.clone());
                }
            }
        }
    }
}
