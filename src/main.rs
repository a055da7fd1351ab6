mod camera;
mod content;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod signs;
#[cfg(test)]
mod test_app;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Penguin Slide".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * 9.81))
    .insert_resource(ClearColor(Color::srgb(0.55, 0.75, 0.9)))
    .add_plugins((
        content::ContentPlugin,
        movement::MovementPlugin,
        camera::CameraPlugin,
        signs::SignsPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
