//! Closed-form projectile motion without air resistance: trajectory samples above ground,
//! speed over time, and the reports and plots built from them.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod plot;
pub mod report;

pub use crate::core::ballistics::{
    FlightEstimate, GRAVITY_MPS2, Kinematics, LaunchParameters, SampleSeries, TRAJECTORY_SAMPLES,
    TrajectorySample, VelocitySeries, compute_trajectory, compute_velocity,
};
pub use crate::error::{Error, Result};
pub use crate::report::MotionReport;
