//! Spawns the colour menu: title, player panels, cursors and instructions.

use bevy::{prelude::*, sprite::Anchor};

use super::{
    bindings::MenuBindings,
    layout::{
        cursor_position, cursor_triangle, local_offset, panel_origin, screen_to_world, swatch_x,
    },
    palette::{PALETTE, TITLE_COLOUR},
    picker::{ColourPicker, Player},
    reset_picker, PlayerHeader, SelectionCursor,
};
use crate::{config::*, screens::Screen};

const CHOOSE_COLOUR: &str = "Choose Colour:";
const CONTROLS: &str = "Controls";
const INSTRUCTIONS_HEADER: &str = "Game Instructions";
const INSTRUCTIONS: [&str; 2] = [
    "- Player score + 1 when opponent fails to return ball",
    "- Player loses when snake touches a wall",
];
const PROMPT: &str = "[Hit Enter]";

pub(super) fn plugin(app: &mut App) {
    // `Screen::Menu` is entered before `Startup`, so handles are fetched on entry.
    app.add_systems(
        OnEnter(Screen::Menu),
        (load_menu_assets, spawn_menu).chain().after(reset_picker),
    );
}

#[derive(Resource)]
pub struct MenuAssets {
    /// Control-scheme images, indexed like [`Player::index`].
    pub controls: [Handle<Image>; 2],
}

fn load_menu_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    bindings: Res<MenuBindings>,
) {
    debug!("Loading menu assets");
    let controls = Player::ALL.map(|player| asset_server.load(bindings.scheme(player).image));
    commands.insert_resource(MenuAssets { controls });
}

fn text(value: impl Into<String>, colour: Color) -> impl Bundle {
    (
        Text2d::new(value),
        TextFont {
            font_size: FONT_SIZE,
            ..default()
        },
        TextColor(colour),
    )
}

fn spawn_menu(
    mut commands: Commands,
    menu_assets: Res<MenuAssets>,
    picker: Res<ColourPicker>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        Name::new("Title"),
        StateScoped(Screen::Menu),
        text(GAME_TITLE, TITLE_COLOUR),
        Anchor::TopCenter,
        Transform::from_translation(screen_to_world(MIDDLE_X, TITLE_Y, MENU_Z)),
    ));

    let cursor_mesh = meshes.add(cursor_triangle());
    let cursor_material = materials.add(Color::WHITE);

    for player in Player::ALL {
        spawn_player_panel(
            &mut commands,
            player,
            picker.selected(player).colour(),
            menu_assets.controls[player.index()].clone(),
        );

        let apex = cursor_position(player, picker.selection(player).index());
        commands.spawn((
            Name::new(format!("{} Cursor", player.label())),
            StateScoped(Screen::Menu),
            SelectionCursor(player),
            Mesh2d(cursor_mesh.clone()),
            MeshMaterial2d(cursor_material.clone()),
            Transform::from_translation(screen_to_world(apex.x, apex.y, CURSOR_Z)),
        ));
    }

    spawn_instructions(&mut commands);
}

fn spawn_player_panel(
    commands: &mut Commands,
    player: Player,
    header_colour: Color,
    controls_image: Handle<Image>,
) {
    let origin = panel_origin(player);

    commands
        .spawn((
            Name::new(format!("{} Panel", player.label())),
            StateScoped(Screen::Menu),
            Transform::from_translation(screen_to_world(origin.x, origin.y, MENU_Z)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerHeader(player),
                text(player.label(), header_colour),
                Anchor::TopLeft,
                Transform::from_translation(local_offset(0.0, 0.0, 0.0)),
            ));
            parent.spawn((
                text(CHOOSE_COLOUR, Color::WHITE),
                Anchor::TopLeft,
                Transform::from_translation(local_offset(0.0, CHOOSE_COLOUR_Y, 0.0)),
            ));

            for (i, swatch) in PALETTE.iter().enumerate() {
                parent.spawn((
                    Name::new(swatch.name),
                    Sprite {
                        color: swatch.colour(),
                        custom_size: Some(Vec2::splat(SWATCH_SIZE)),
                        anchor: Anchor::TopLeft,
                        ..default()
                    },
                    Transform::from_translation(local_offset(swatch_x(i), SWATCH_Y, 0.0)),
                ));
            }

            parent.spawn((
                Sprite {
                    image: controls_image,
                    custom_size: Some(Vec2::new(CONTROLS_IMAGE_SIZE.0, CONTROLS_IMAGE_SIZE.1)),
                    anchor: Anchor::TopLeft,
                    ..default()
                },
                Transform::from_translation(local_offset(0.0, CONTROLS_IMAGE_Y, 0.0)),
            ));
            parent.spawn((
                text(CONTROLS, Color::WHITE),
                Anchor::TopLeft,
                Transform::from_translation(local_offset(
                    CONTROLS_LABEL_POS.0,
                    CONTROLS_LABEL_POS.1,
                    0.0,
                )),
            ));
        });
}

fn spawn_instructions(commands: &mut Commands) {
    commands.spawn((
        Name::new("Instructions Header"),
        StateScoped(Screen::Menu),
        text(INSTRUCTIONS_HEADER, Color::WHITE),
        Anchor::TopCenter,
        Transform::from_translation(screen_to_world(MIDDLE_X, INSTRUCTIONS_HEADER_Y, MENU_Z)),
    ));

    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        let y = INSTRUCTIONS_Y + i as f32 * INSTRUCTION_LINE_HEIGHT;
        commands.spawn((
            Name::new("Instruction"),
            StateScoped(Screen::Menu),
            text(*line, Color::WHITE),
            Anchor::TopCenter,
            Transform::from_translation(screen_to_world(MIDDLE_X, y, MENU_Z)),
        ));
    }

    commands.spawn((
        Name::new("Prompt"),
        StateScoped(Screen::Menu),
        text(PROMPT, Color::WHITE),
        Anchor::TopCenter,
        Transform::from_translation(screen_to_world(MIDDLE_X, PROMPT_Y, MENU_Z)),
    ));
}
