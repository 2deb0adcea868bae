use std::path::PathBuf;

use chrono::{DateTime, Local};

// 8x12 inch figure at 100 dpi.
pub const PLOT_WIDTH_PX: u32 = 800;
pub const PLOT_HEIGHT_PX: u32 = 1200;

pub const PLOT_FILE_PREFIX: &str = "trajectory";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const TRAJECTORY_TITLE: &str = "Projectile trajectory";
pub const COMPONENTS_TITLE: &str = "Position components over time";
pub const SPEED_TITLE: &str = "Speed over time";

pub const HORIZONTAL_LABEL: &str = "Horizontal position, m";
pub const VERTICAL_LABEL: &str = "Vertical position, m";
pub const TIME_LABEL: &str = "Time, s";
pub const POSITION_LABEL: &str = "Position, m";
pub const SPEED_LABEL: &str = "Speed, m/s";

pub const X_SERIES_LABEL: &str = "x(t)";
pub const Y_SERIES_LABEL: &str = "y(t)";

/// Plot file name used when `--plot` is given without a path.
pub fn timestamped_plot_path(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "{PLOT_FILE_PREFIX}_{}.png",
        now.format("%Y%m%d_%H%M%S")
    ))
}

/// Log filter for a `-v` count: 0 → warn, 1 → info, 2+ → debug.
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => "info",
        _ => "debug",
    }
}
