//! Landing screen for a confirmed match. It only shows who plays which colour.

use bevy::{input::common_conditions::input_just_pressed, prelude::*, sprite::Anchor};

use crate::{
    config::*,
    menus::{
        layout::screen_to_world,
        picker::{GameColours, Player},
    },
    screens::Screen,
};

const GAMEPLAY_BACKGROUND_COLOR: Color = Color::srgb(0.05, 0.05, 0.08);
const BACK_HINT: &str = "[Esc] Back to menu";

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Gameplay), spawn_gameplay_screen);
    app.add_systems(OnExit(Screen::Gameplay), restore_background);
    app.add_systems(
        Update,
        go_back.run_if(in_state(Screen::Gameplay).and(input_just_pressed(KeyCode::Escape))),
    );
}

fn spawn_gameplay_screen(mut commands: Commands, colours: Option<Res<GameColours>>) {
    let Some(colours) = colours else {
        warn!("Entered gameplay without chosen colours, returning to menu");
        commands.set_state(Screen::Menu);
        return;
    };

    info!("Gameplay with {} vs {}", colours.color1.hex, colours.color2.hex);
    commands.insert_resource(ClearColor(GAMEPLAY_BACKGROUND_COLOR));

    for player in Player::ALL {
        let x = match player {
            Player::One => MIDDLE_X / 2.0,
            Player::Two => MIDDLE_X * 1.5,
        };
        commands.spawn((
            Name::new(player.label()),
            StateScoped(Screen::Gameplay),
            Text2d::new(player.label()),
            TextFont {
                font_size: FONT_SIZE * 2.0,
                ..default()
            },
            TextColor(colours.get(player).colour()),
            Anchor::TopCenter,
            Transform::from_translation(screen_to_world(x, SCREEN_HEIGHT / 2.0, MENU_Z)),
        ));
    }

    commands.spawn((
        Name::new("Back Hint"),
        StateScoped(Screen::Gameplay),
        Text2d::new(BACK_HINT),
        TextFont {
            font_size: FONT_SIZE,
            ..default()
        },
        Anchor::TopCenter,
        Transform::from_translation(screen_to_world(MIDDLE_X, PROMPT_Y + 120.0, MENU_Z)),
    ));
}

fn restore_background(mut commands: Commands) {
    commands.insert_resource(ClearColor::default());
}

fn go_back(mut next_screen: ResMut<NextState<Screen>>) {
    next_screen.set(Screen::Menu);
}
