use std::net::SocketAddr;

use anyhow::anyhow;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowPlugin;
use bevy_obj::ObjPlugin;
use clap::Parser;
use tracing::error;

mod api;
mod mirror;
mod scene;
mod tracking;
mod webcam;

#[derive(Parser, Resource)]
struct Options {
    /// Address the tracker-facing API listens on.
    #[arg(long, default_value = "127.0.0.1:8888")]
    pub api_bind: String,
    /// Mesh shown in the mirror.
    #[arg(long, short = 'm', default_value = "models/rocks.obj")]
    pub model: String,
    /// Texture applied to the mesh.
    #[arg(long, short = 't', default_value = "textures/rocks.jpg")]
    pub texture: String,
    /// Motion exaggeration multiplier.
    #[arg(long, default_value_t = mirror_pose::DEFAULT_DRAMA)]
    pub drama: f32,
    /// Show frames sent to /v1/camera on a preview plane.
    #[arg(long)]
    pub show_camera: bool,
    /// Draw the smoothed landmark cloud over the model.
    #[arg(long)]
    pub debug_landmarks: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let options = Options::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let api_addr: SocketAddr = options.api_bind.parse()?;
    let (api_state, api_resource) = api::ApiState::new();
    runtime.spawn(async move {
        let router = api::new_api().with_state(api_state);
        match tokio::net::TcpListener::bind(api_addr).await {
            Ok(listener) => {
                if let Err(err) = axum::serve(listener, router).await {
                    error!("failed to serve the tracker API: {err}");
                }
            }
            Err(err) => error!("failed to bind the tracker API on {api_addr}: {err}"),
        }
    });

    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins
            .build()
            .disable::<LogPlugin>()
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "mirror".into(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        ObjPlugin,
    ))
    .insert_resource(ClearColor(mirror::LOADING_BACKGROUND))
    .insert_resource(tracking::TrackedFaces::default())
    .insert_resource(mirror::MirrorSession::new(options.drama))
    .insert_resource(api_resource)
    .insert_resource(options)
    .add_systems(Startup, scene::setup)
    .add_systems(
        Update,
        (
            (api::update_api, mirror::update_mirror).chain(),
            mirror::draw_landmark_overlay,
            scene::watch_assets,
        ),
    );

    if let AppExit::Error(code) = app.run() {
        return Err(anyhow!("mirror exited with error code {code}"));
    }
    Ok(())
}
