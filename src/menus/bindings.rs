//! Keyboard bindings of the colour menu.
//!
//! Input is read through [`KeyEdges`] so the menu logic can be driven without a
//! window or Bevy's input plugin.

use bevy::prelude::*;

use super::picker::{Direction, Player};

/// Edge-triggered key queries: `true` only on the frame a key goes down.
pub trait KeyEdges {
    fn just_pressed(&self, key: KeyCode) -> bool;
}

impl KeyEdges for ButtonInput<KeyCode> {
    fn just_pressed(&self, key: KeyCode) -> bool {
        ButtonInput::just_pressed(self, key)
    }
}

/// A player's pair of keys and the image that shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlScheme {
    pub left: KeyCode,
    pub right: KeyCode,
    pub image: &'static str,
}

pub const WASD: ControlScheme = ControlScheme {
    left: KeyCode::KeyA,
    right: KeyCode::KeyD,
    image: "images/WASD.png",
};

pub const ARROW_KEYS: ControlScheme = ControlScheme {
    left: KeyCode::ArrowLeft,
    right: KeyCode::ArrowRight,
    image: "images/arrowKeys.png",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Shift(Player, Direction),
    Confirm,
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct MenuBindings {
    pub schemes: [ControlScheme; 2],
    pub confirm: KeyCode,
}

impl Default for MenuBindings {
    fn default() -> Self {
        Self {
            schemes: [WASD, ARROW_KEYS],
            confirm: KeyCode::Enter,
        }
    }
}

impl MenuBindings {
    pub fn scheme(&self, player: Player) -> &ControlScheme {
        &self.schemes[player.index()]
    }

    /// Commands triggered this frame.
    ///
    /// A confirm edge short-circuits: the menu is left with the colours as they
    /// were before any movement on the same frame.
    pub fn commands(&self, keys: &impl KeyEdges) -> Vec<MenuCommand> {
        if keys.just_pressed(self.confirm) {
            return vec![MenuCommand::Confirm];
        }

        let mut commands = Vec::new();
        for player in Player::ALL {
            let scheme = self.scheme(player);
            if keys.just_pressed(scheme.right) {
                commands.push(MenuCommand::Shift(player, Direction::Right));
            }
            if keys.just_pressed(scheme.left) {
                commands.push(MenuCommand::Shift(player, Direction::Left));
            }
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct Pressed(HashSet<KeyCode>);

    impl KeyEdges for Pressed {
        fn just_pressed(&self, key: KeyCode) -> bool {
            self.0.contains(&key)
        }
    }

    fn pressed(keys: &[KeyCode]) -> Pressed {
        Pressed(keys.iter().copied().collect())
    }

    #[test]
    fn test_no_keys_no_commands() {
        let bindings = MenuBindings::default();
        assert!(bindings.commands(&pressed(&[])).is_empty());
    }

    #[test]
    fn test_each_player_has_own_keys() {
        let bindings = MenuBindings::default();
        assert_eq!(
            bindings.commands(&pressed(&[KeyCode::KeyD])),
            vec![MenuCommand::Shift(Player::One, Direction::Right)]
        );
        assert_eq!(
            bindings.commands(&pressed(&[KeyCode::ArrowLeft])),
            vec![MenuCommand::Shift(Player::Two, Direction::Left)]
        );
    }

    #[test]
    fn test_command_order() {
        let bindings = MenuBindings::default();
        let keys = pressed(&[
            KeyCode::ArrowLeft,
            KeyCode::KeyA,
            KeyCode::ArrowRight,
            KeyCode::KeyD,
        ]);
        assert_eq!(
            bindings.commands(&keys),
            vec![
                MenuCommand::Shift(Player::One, Direction::Right),
                MenuCommand::Shift(Player::One, Direction::Left),
                MenuCommand::Shift(Player::Two, Direction::Right),
                MenuCommand::Shift(Player::Two, Direction::Left),
            ]
        );
    }

    #[test]
    fn test_confirm_wins() {
        let bindings = MenuBindings::default();
        let keys = pressed(&[KeyCode::KeyD, KeyCode::Enter]);
        assert_eq!(bindings.commands(&keys), vec![MenuCommand::Confirm]);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let bindings = MenuBindings::default();
        let keys = pressed(&[KeyCode::KeyW, KeyCode::KeyS, KeyCode::Space]);
        assert!(bindings.commands(&keys).is_empty());
    }
}
