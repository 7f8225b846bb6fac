#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]

pub mod config;
#[cfg(feature = "dev")]
mod dev_tools;
pub mod menus;
pub mod screens;

use bevy::{
    asset::AssetMetaCheck,
    prelude::*,
    render::view::screenshot::{Screenshot, save_to_disk},
};

use config::{GAME_TITLE, GAME_VERSION, SCREEN_HEIGHT, SCREEN_WIDTH};

pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        // Add Bevy plugins.
        app.add_plugins(
            DefaultPlugins
                .set(AssetPlugin {
                    // Wasm builds would otherwise look for `.meta` files that don't exist.
                    // See https://github.com/bevyengine/bevy_github_ci_template/issues/48.
                    meta_check: AssetMetaCheck::Never,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Window {
                        title: GAME_TITLE.to_string(),
                        resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                        fit_canvas_to_parent: true,
                        ..default()
                    }
                    .into(),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        );

        // Add other plugins.
        app.add_plugins((screens::plugin, menus::plugin));

        #[cfg(feature = "dev")]
        app.add_plugins(dev_tools::plugin);

        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, screenshot_system);

        info!("{} v{}", GAME_TITLE, GAME_VERSION);
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Camera"), Camera2d));
}

fn screenshot_system(keyboard_input: Res<ButtonInput<KeyCode>>, mut commands: Commands) {
    if keyboard_input.just_pressed(KeyCode::F12) {
        let path = format!(
            "screenshot_{}.png",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        info!("Saving screenshot to {}", path);
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path));
    }
}
