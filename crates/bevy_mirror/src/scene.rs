use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::webcam;
use crate::Options;

#[derive(Component)]
pub struct MirrorModel;

#[derive(Resource)]
pub struct MirrorAssets {
    pub mesh: Handle<Mesh>,
    pub texture: Handle<Image>,
}

pub fn setup(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    options: Res<Options>,
) {
    // Orthographic pixel-scale camera: origin-centered canvas coordinates,
    // one world unit per logical pixel, so the estimator's translation
    // mapping lands directly in render space. Resizes track the window.
    commands.spawn(Camera3dBundle {
        projection: Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::WindowSize(1.0),
            near: -2000.0,
            far: 2000.0,
            ..OrthographicProjection::default()
        }),
        ..Default::default()
    });

    let mesh = asset_server.load(options.model.clone());
    let texture = asset_server.load(options.texture.clone());
    // Unlit keeps the texture colors independent of any lighting, as the
    // original piece's material was.
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(texture.clone()),
        unlit: true,
        ..Default::default()
    });

    // Hidden until the first face arrives.
    commands.spawn((
        PbrBundle {
            mesh: mesh.clone(),
            material,
            visibility: Visibility::Hidden,
            ..Default::default()
        },
        MirrorModel,
    ));
    commands.insert_resource(MirrorAssets { mesh, texture });

    if options.show_camera {
        webcam::spawn_preview(&mut commands, &mut meshes, &mut materials, &mut images);
    }
}

/// There is nothing to show without the model and its texture: a failed
/// load is fatal. Logs once when both are in.
pub fn watch_assets(
    asset_server: Res<AssetServer>,
    assets: Res<MirrorAssets>,
    mut announced: Local<bool>,
    mut exit: EventWriter<AppExit>,
) {
    if let LoadState::Failed(err) = asset_server.load_state(&assets.mesh) {
        error!("failed to load the mirror model: {err}");
        exit.send(AppExit::error());
    }
    if let LoadState::Failed(err) = asset_server.load_state(&assets.texture) {
        error!("failed to load the mirror texture: {err}");
        exit.send(AppExit::error());
    }

    if !*announced
        && asset_server.is_loaded_with_dependencies(&assets.mesh)
        && asset_server.is_loaded_with_dependencies(&assets.texture)
    {
        info!("mirror model and texture ready");
        *announced = true;
    }
}
