//! Menu geometry. Positions are given y-down from the top-left corner of the
//! screen and converted to Bevy's centred, y-up world space when spawned.

use bevy::prelude::*;

use super::{palette::PALETTE_LEN, picker::Player};
use crate::config::*;

/// Converts a y-down screen position to world space.
pub fn screen_to_world(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x - SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - y, z)
}

/// Converts a y-down offset inside a panel to a child translation.
pub fn local_offset(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, -y, z)
}

/// Left edge of swatch `i`, relative to its panel.
pub fn swatch_x(i: usize) -> f32 {
    CHOOSE_COLOUR_WIDTH + SWATCH_SPACING + i as f32 * SWATCH_STEP
}

/// Width of a player panel: the rightmost edge of any of its children.
pub fn panel_width() -> f32 {
    [
        HEADER_WIDTH,
        CHOOSE_COLOUR_WIDTH,
        swatch_x(PALETTE_LEN - 1) + SWATCH_SIZE,
        CONTROLS_IMAGE_SIZE.0,
        CONTROLS_LABEL_POS.0 + CONTROLS_LABEL_WIDTH,
    ]
    .into_iter()
    .fold(0.0, f32::max)
}

/// Top-left corner of a player panel in screen space.
pub fn panel_origin(player: Player) -> Vec2 {
    let width = panel_width();
    let x = match player {
        Player::One => (MIDDLE_X - width) * 2.0 / 3.0,
        Player::Two => MIDDLE_X + (MIDDLE_X - width) / 3.0,
    };
    Vec2::new(x, PANEL_Y)
}

/// Screen position of the cursor apex under swatch `index`.
pub fn cursor_position(player: Player, index: usize) -> Vec2 {
    let origin = panel_origin(player);
    Vec2::new(
        origin.x + swatch_x(index) + SWATCH_SIZE / 2.0,
        origin.y + CURSOR_Y_OFFSET,
    )
}

/// Equilateral triangle with its apex at the origin, pointing up.
pub fn cursor_triangle() -> Triangle2d {
    let height = CURSOR_SIDE * 3.0_f32.sqrt() / 2.0;
    Triangle2d::new(
        Vec2::ZERO,
        Vec2::new(CURSOR_SIDE / 2.0, -height),
        Vec2::new(-CURSOR_SIDE / 2.0, -height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_corners() {
        assert_eq!(
            screen_to_world(0.0, 0.0, 0.0),
            Vec3::new(-SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0, 0.0)
        );
        assert_eq!(
            screen_to_world(MIDDLE_X, SCREEN_HEIGHT / 2.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn test_panel_width_covers_swatches() {
        assert_eq!(panel_width(), swatch_x(3) + SWATCH_SIZE);
    }

    #[test]
    fn test_panels_fit_their_half() {
        let width = panel_width();
        let one = panel_origin(Player::One);
        let two = panel_origin(Player::Two);
        assert!(one.x >= 0.0);
        assert!(one.x + width <= MIDDLE_X);
        assert!(two.x >= MIDDLE_X);
        assert!(two.x + width <= SCREEN_WIDTH);
    }

    #[test]
    fn test_cursor_sits_under_swatch_centre() {
        let origin = panel_origin(Player::Two);
        for i in 0..PALETTE_LEN {
            let cursor = cursor_position(Player::Two, i);
            assert_eq!(cursor.x, origin.x + swatch_x(i) + SWATCH_SIZE / 2.0);
            assert!(cursor.y > origin.y + SWATCH_Y + SWATCH_SIZE);
        }
        let step = cursor_position(Player::One, 1).x - cursor_position(Player::One, 0).x;
        assert_eq!(step, SWATCH_STEP);
    }

    #[test]
    fn test_cursor_points_up() {
        let triangle = cursor_triangle();
        assert!(triangle.vertices[1].y < 0.0);
        assert!(triangle.vertices[2].y < 0.0);
        assert_eq!(triangle.vertices[1].y, triangle.vertices[2].y);
    }
}
