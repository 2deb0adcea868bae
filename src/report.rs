use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::ballistics::{FlightEstimate, Kinematics, LaunchParameters, VelocitySeries};
use crate::error::Result;

/// One computation: inputs, flight estimate and the three time-aligned series.
#[derive(Clone, Debug, Serialize)]
pub struct MotionReport {
    pub generated_at: DateTime<Utc>,
    pub parameters: LaunchParameters,
    pub gravity_mps2: f64,
    pub raw_sample_count: usize,
    pub flight: FlightEstimate,
    pub time: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub speed: VelocitySeries,
}

impl MotionReport {
    pub fn compute(kinematics: Kinematics, parameters: LaunchParameters) -> Self {
        Self::compute_at(kinematics, parameters, Utc::now())
    }

    pub fn compute_at(
        kinematics: Kinematics,
        parameters: LaunchParameters,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let series = kinematics.compute_trajectory(parameters);
        let time = series.times();
        let speed = kinematics.compute_velocity(
            parameters.initial_speed,
            parameters.launch_angle_deg,
            &time,
        );

        Self {
            generated_at,
            parameters,
            gravity_mps2: kinematics.gravity_mps2,
            raw_sample_count: kinematics.sample_count,
            flight: kinematics.flight_estimate(parameters),
            x: series.xs(),
            y: series.ys(),
            time,
            speed,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.time.len()
    }

    /// Horizontal position of the last sample at or above ground.
    pub fn range_m(&self) -> Option<f64> {
        self.x.last().copied()
    }

    pub fn max_height_m(&self) -> Option<f64> {
        self.y.iter().copied().reduce(f64::max)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        [
            format!("Time of flight (estimate): {:.4} s", self.flight.total_time),
            format!("Time to peak: {:.4} s", self.flight.time_to_peak),
            format!("Peak height: {:.4} m", self.flight.peak_height),
            format!("Horizontal distance: {}", format_metric(self.range_m(), "m")),
            format!("Max sampled height: {}", format_metric(self.max_height_m(), "m")),
            format!("Max speed: {}", format_metric(self.speed.max(), "m/s")),
            format!(
                "Samples above ground: {} of {}",
                self.sample_count(),
                self.raw_sample_count
            ),
        ]
        .join("\n")
    }
}

fn format_metric(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.4} {unit}"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp")
    }

    fn report(height: f64, speed: f64, angle: f64) -> MotionReport {
        MotionReport::compute_at(
            Kinematics::default(),
            LaunchParameters::new(height, speed, angle),
            fixed_time(),
        )
    }

    #[test]
    fn columns_are_aligned() {
        let report = report(2.0, 20.0, 35.0);

        assert!(report.sample_count() > 0);
        assert_eq!(report.x.len(), report.sample_count());
        assert_eq!(report.y.len(), report.sample_count());
        assert_eq!(report.speed.len(), report.sample_count());
    }

    #[test]
    fn summary_lists_flight_figures() {
        let summary = report(0.0, 10.0, 45.0).summary();

        assert!(summary.contains("Time of flight (estimate): 2.1624 s"));
        assert!(summary.contains("Peak height: 2.5484 m"));
        assert!(summary.contains("Samples above ground: 333 of 500"));
    }

    #[test]
    fn summary_has_one_line_per_figure() {
        let summary = report(0.0, 10.0, 45.0).summary();

        assert_eq!(summary.lines().count(), 7);
        assert!(!summary.ends_with('\n'));
        assert!(summary.lines().nth(3).is_some_and(|l| l.starts_with("Horizontal distance: ")));
    }

    #[test]
    fn empty_series_summary_uses_placeholders() {
        let report = report(-5.0, 0.0, 45.0);

        assert_eq!(report.sample_count(), 0);
        assert_eq!(report.range_m(), None);
        assert!(report.summary().contains("Horizontal distance: n/a"));
    }

    #[test]
    fn json_carries_parameters_and_series() {
        let json = report(0.0, 10.0, 45.0).to_json().expect("report serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["parameters"]["initial_speed"], 10.0);
        assert_eq!(value["gravity_mps2"], 9.81);
        assert_eq!(value["generated_at"], "2026-01-02T03:04:05Z");
        let time_len = value["time"].as_array().map(Vec::len);
        assert_eq!(time_len, value["speed"].as_array().map(Vec::len));
        assert_eq!(time_len, Some(333));
    }

    #[test]
    fn max_height_matches_peak_for_flat_ground() {
        let report = report(0.0, 10.0, 45.0);
        let max_height = report.max_height_m().expect("non-empty series");

        assert!(max_height <= report.flight.peak_height + 1e-9);
        assert!(report.flight.peak_height - max_height < 0.01);
    }
}
