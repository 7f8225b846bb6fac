// ============ Screen ============

/// Logical screen size. Layout coordinates below are y-down from the top-left corner.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const MIDDLE_X: f32 = SCREEN_WIDTH / 2.0;

pub const GAME_TITLE: &str = "Ouro";
pub const GAME_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============ Z layers ============

/// Swatches, images and text.
pub const MENU_Z: f32 = 0.0;

/// Selection cursors, drawn over everything else in the menu.
pub const CURSOR_Z: f32 = 1.0;

// ============ Menu layout ============

pub const TITLE_Y: f32 = 20.0;
pub const PANEL_Y: f32 = 50.0;

pub const CHOOSE_COLOUR_Y: f32 = 30.0;
/// Rendered width of the "Choose Colour:" label; swatches start right after it.
pub const CHOOSE_COLOUR_WIDTH: f32 = 126.0;

pub const SWATCH_Y: f32 = 29.0;
pub const SWATCH_SIZE: f32 = 20.0;
pub const SWATCH_SPACING: f32 = 8.0;
/// Horizontal distance between two neighbouring swatches, and the cursor step.
pub const SWATCH_STEP: f32 = 30.0;

pub const CONTROLS_IMAGE_Y: f32 = 70.0;
pub const CONTROLS_IMAGE_SIZE: (f32, f32) = (96.0, 84.0);
pub const CONTROLS_LABEL_POS: (f32, f32) = (32.0, 160.0);
pub const CONTROLS_LABEL_WIDTH: f32 = 72.0;
pub const HEADER_WIDTH: f32 = 72.0;

/// Offset of the cursor apex below the panel origin.
pub const CURSOR_Y_OFFSET: f32 = 55.0;
pub const CURSOR_SIDE: f32 = 15.0;

pub const INSTRUCTIONS_HEADER_Y: f32 = 260.0;
pub const INSTRUCTIONS_Y: f32 = 300.0;
pub const INSTRUCTION_LINE_HEIGHT: f32 = 20.0;
pub const PROMPT_Y: f32 = 360.0;

pub const FONT_SIZE: f32 = 16.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_layer_ordering() {
        assert!(MENU_Z < CURSOR_Z);
    }

    #[test]
    fn test_swatches_do_not_overlap() {
        assert!(SWATCH_SIZE < SWATCH_STEP);
    }

    #[test]
    fn test_vertical_sections_in_order() {
        assert!(TITLE_Y < PANEL_Y);
        assert!(PANEL_Y + CONTROLS_LABEL_POS.1 < INSTRUCTIONS_HEADER_Y);
        assert!(INSTRUCTIONS_HEADER_Y < INSTRUCTIONS_Y);
        assert!(INSTRUCTIONS_Y + INSTRUCTION_LINE_HEIGHT < PROMPT_Y);
        assert!(PROMPT_Y < SCREEN_HEIGHT);
    }
}
