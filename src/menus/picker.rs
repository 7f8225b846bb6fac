//! Per-player colour selection and the cursor movement it implies.

use bevy::prelude::*;

use super::palette::{PALETTE, PALETTE_LEN, Swatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// An index into [`PALETTE`], always in `0..PALETTE_LEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSelection {
    index: usize,
}

impl PlayerSelection {
    pub fn new(index: usize) -> Self {
        Self {
            index: index % PALETTE_LEN,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn swatch(&self) -> Swatch {
        PALETTE[self.index]
    }

    /// Moves one swatch over, wrapping at either end.
    ///
    /// Returns how many swatch steps the cursor has to travel: `±1` normally,
    /// `∓(len - 1)` when the selection wraps around.
    pub fn shift(&mut self, direction: Direction) -> i32 {
        let last = PALETTE_LEN - 1;
        match direction {
            Direction::Right if self.index == last => {
                self.index = 0;
                -(last as i32)
            }
            Direction::Right => {
                self.index += 1;
                1
            }
            Direction::Left if self.index == 0 => {
                self.index = last;
                last as i32
            }
            Direction::Left => {
                self.index -= 1;
                -1
            }
        }
    }
}

/// Selection state of the menu. Lives only while the menu screen is active.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ColourPicker {
    selections: [PlayerSelection; 2],
}

impl Default for ColourPicker {
    fn default() -> Self {
        // Player 2 starts on the second colour so the defaults never clash.
        Self {
            selections: [PlayerSelection::new(0), PlayerSelection::new(1)],
        }
    }
}

impl ColourPicker {
    pub fn selection(&self, player: Player) -> PlayerSelection {
        self.selections[player.index()]
    }

    pub fn selected(&self, player: Player) -> Swatch {
        self.selection(player).swatch()
    }

    pub fn shift(&mut self, player: Player, direction: Direction) -> i32 {
        self.selections[player.index()].shift(direction)
    }

    pub fn game_colours(&self) -> GameColours {
        GameColours {
            color1: self.selected(Player::One),
            color2: self.selected(Player::Two),
        }
    }
}

/// Colours handed to the gameplay screen when the players confirm.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameColours {
    pub color1: Swatch,
    pub color2: Swatch,
}

impl GameColours {
    pub fn get(&self, player: Player) -> Swatch {
        match player {
            Player::One => self.color1,
            Player::Two => self.color2,
        }
    }
}
