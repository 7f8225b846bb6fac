use bevy::prelude::*;

/// One colour choice offered to the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
    rgb: [u8; 3],
}

impl Swatch {
    const fn new(name: &'static str, hex: &'static str, rgb: [u8; 3]) -> Self {
        Self { name, hex, rgb }
    }

    pub fn colour(&self) -> Color {
        let [r, g, b] = self.rgb;
        Color::srgb_u8(r, g, b)
    }
}

/// Shared by both players, in on-screen order.
pub const PALETTE: [Swatch; 4] = [
    Swatch::new("Red", "#DF1A2D", [0xDF, 0x1A, 0x2D]),
    Swatch::new("Blue", "#0798BB", [0x07, 0x98, 0xBB]),
    Swatch::new("Yellow", "#F8E71C", [0xF8, 0xE7, 0x1C]),
    Swatch::new("Green", "#7ED321", [0x7E, 0xD3, 0x21]),
];

pub const PALETTE_LEN: usize = PALETTE.len();

pub const TITLE_COLOUR: Color = Color::srgb(0.0, 1.0, 0.0);
