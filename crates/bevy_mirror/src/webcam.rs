use bevy::prelude::*;

/// Marks the preview quad textured by frames sent to /v1/camera.
#[derive(Component)]
pub struct WebcamTexture {
    pub image: Handle<Image>,
}

const PREVIEW_SIZE: Vec2 = Vec2::new(320.0, 240.0);
// In front of the model, below and left of the canvas center.
const PREVIEW_OFFSET: Vec3 = Vec3::new(-400.0, -240.0, 900.0);

/// Spawns the preview plane with a placeholder image; the API replaces
/// the image contents whenever the tracker sends a frame.
pub fn spawn_preview(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
) {
    let image = images.add(Image::default());
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(image.clone()),
        unlit: true,
        ..Default::default()
    });

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Rectangle::new(PREVIEW_SIZE.x, PREVIEW_SIZE.y)),
            material,
            transform: Transform::from_translation(PREVIEW_OFFSET),
            ..Default::default()
        },
        WebcamTexture { image },
    ));
}
