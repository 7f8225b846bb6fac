//! Development tools for the game. This plugin is only enabled in dev builds.

use bevy::{
    dev_tools::states::log_transitions, input::common_conditions::input_just_pressed, prelude::*,
};

use crate::{
    menus::picker::{ColourPicker, Player},
    screens::Screen,
};

pub(super) fn plugin(app: &mut App) {
    // Log `Screen` state transitions.
    app.add_systems(Update, log_transitions::<Screen>);
    app.add_systems(Update, dump_picker.run_if(input_just_pressed(KeyCode::F1)));
}

fn dump_picker(screen: Res<State<Screen>>, picker: Option<Res<ColourPicker>>) {
    info!("=== Debug info ===");
    info!("Screen: {:?}", screen.get());
    let Some(picker) = picker else {
        info!("No colour selection outside the menu");
        return;
    };
    for player in Player::ALL {
        let selection = picker.selection(player);
        info!(
            "{}: index {} ({})",
            player.label(),
            selection.index(),
            selection.swatch().hex
        );
    }
}
