use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 900;
pub const INITIAL_WINDOW_HEIGHT: i32 = 1200;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 90.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 70.0;
pub const PANEL_TOP_PADDING: f32 = 40.0;
pub const PANEL_BOTTOM_PADDING: f32 = 60.0;

pub const TITLE_Y: f32 = 40.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 5;
pub const CURVE_THICKNESS: f32 = 2.5;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.443, 0.486, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.118, 0.118, 0.137, 1.0);
pub const X_CURVE_COLOR: Color = Color::new(0.12, 0.467, 0.706, 1.0);
pub const Y_CURVE_COLOR: Color = Color::new(1.0, 0.498, 0.055, 1.0);
