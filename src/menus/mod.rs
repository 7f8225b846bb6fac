//! The colour select menu: both players pick a colour, then Enter starts the game.

pub mod bindings;
pub mod layout;
pub mod palette;
pub mod picker;
mod view;

use bevy::prelude::*;

use crate::{config::SWATCH_STEP, screens::Screen};
use bindings::{MenuBindings, MenuCommand};
use picker::{ColourPicker, Player};

/// The whole menu: [`controls_plugin`] plus the spawned scene.
pub fn plugin(app: &mut App) {
    app.add_plugins((controls_plugin, view::plugin));
}

/// Selection state, key handling and header/cursor updates.
///
/// Needs no rendering, so it can run in a headless app.
pub fn controls_plugin(app: &mut App) {
    app.init_resource::<MenuBindings>();

    app.add_systems(OnEnter(Screen::Menu), reset_picker);
    app.add_systems(OnExit(Screen::Menu), remove_picker);
    app.add_systems(
        Update,
        (handle_menu_input, sync_header_colours)
            .chain()
            .run_if(in_state(Screen::Menu)),
    );
}

/// Text showing a player's name, tinted with their current colour.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerHeader(pub Player);

/// Triangle under the selected swatch of a player.
#[derive(Component, Debug, Clone, Copy)]
pub struct SelectionCursor(pub Player);

pub(super) fn reset_picker(mut commands: Commands) {
    commands.insert_resource(ColourPicker::default());
}

fn remove_picker(mut commands: Commands) {
    commands.remove_resource::<ColourPicker>();
}

/// Applies this frame's key edges to the picker and moves the cursors along.
fn handle_menu_input(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<MenuBindings>,
    mut picker: ResMut<ColourPicker>,
    mut cursors: Query<(&SelectionCursor, &mut Transform)>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    for command in bindings.commands(keys.as_ref()) {
        match command {
            MenuCommand::Confirm => {
                let colours = picker.game_colours();
                info!(
                    "Starting game: player 1 {} ({}), player 2 {} ({})",
                    colours.color1.name,
                    colours.color1.hex,
                    colours.color2.name,
                    colours.color2.hex
                );
                commands.insert_resource(colours);
                next_screen.set(Screen::Gameplay);
            }
            MenuCommand::Shift(player, direction) => {
                let steps = picker.shift(player, direction);
                debug!("{} selected {}", player.label(), picker.selected(player).name);

                // Moved by delta; wrapping jumps back across all swatches.
                for (cursor, mut transform) in &mut cursors {
                    if cursor.0 == player {
                        transform.translation.x += steps as f32 * SWATCH_STEP;
                    }
                }
            }
        }
    }
}

/// Keeps each header tinted with the player's selected colour.
fn sync_header_colours(
    picker: Res<ColourPicker>,
    mut headers: Query<(&PlayerHeader, &mut TextColor)>,
) {
    for (header, mut colour) in &mut headers {
        colour.set_if_neq(TextColor(picker.selected(header.0).colour()));
    }
}
