use serde::Serialize;

pub const GRAVITY_MPS2: f64 = 9.81;
pub const TRAJECTORY_SAMPLES: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LaunchParameters {
    pub initial_height: f64,
    pub initial_speed: f64,
    pub launch_angle_deg: f64,
}

impl LaunchParameters {
    pub fn new(initial_height: f64, initial_speed: f64, launch_angle_deg: f64) -> Self {
        Self {
            initial_height,
            initial_speed,
            launch_angle_deg,
        }
    }
}

/// Intermediate quantities behind the sampled time range.
///
/// `total_time` is `2 * time_to_peak + time_to_fall`. That is an estimate, not the root of
/// `y(t) = 0`: for a non-zero launch height it overshoots or undershoots the real landing
/// time, which is why samples are filtered by height afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FlightEstimate {
    pub time_to_peak: f64,
    pub peak_height: f64,
    pub time_to_fall: f64,
    pub total_time: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
}

/// Samples of the trajectory that are at or above the ground.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleSeries {
    samples: Vec<TrajectorySample>,
}

impl SampleSeries {
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrajectorySample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }
}

impl FromIterator<TrajectorySample> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = TrajectorySample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

/// Speed magnitudes, index-aligned with the times they were evaluated at.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VelocitySeries(Vec<f64>);

impl VelocitySeries {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    pub fn max(&self) -> Option<f64> {
        self.0.iter().copied().reduce(f64::max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    pub gravity_mps2: f64,
    pub sample_count: usize,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            gravity_mps2: GRAVITY_MPS2,
            sample_count: TRAJECTORY_SAMPLES,
        }
    }
}

impl Kinematics {
    pub fn new(gravity_mps2: f64, sample_count: usize) -> Self {
        Self {
            gravity_mps2,
            sample_count,
        }
    }

    pub fn flight_estimate(&self, params: LaunchParameters) -> FlightEstimate {
        let g = self.gravity_mps2;
        let (_, vy) = velocity_components(params.initial_speed, params.launch_angle_deg);

        let time_to_peak = vy / g;
        let peak_height = params.initial_height + (vy * vy) / (2.0 * g);
        // NaN for a negative peak height; it carries through to an empty series.
        let time_to_fall = (2.0 * peak_height / g).sqrt();

        FlightEstimate {
            time_to_peak,
            peak_height,
            time_to_fall,
            total_time: 2.0 * time_to_peak + time_to_fall,
        }
    }

    pub fn position_at(&self, params: LaunchParameters, time_s: f64) -> (f64, f64) {
        let (vx, vy) = velocity_components(params.initial_speed, params.launch_angle_deg);
        let x = vx * time_s;
        let y = params.initial_height + (vy * time_s)
            - (0.5 * self.gravity_mps2 * time_s * time_s);
        (x, y)
    }

    /// Uniform grid of `sample_count` times over `[0, total_time]`, both ends included.
    pub fn time_grid(&self, total_time: f64) -> Vec<f64> {
        match self.sample_count {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let last = n - 1;
                let step = total_time / last as f64;
                (0..n)
                    .map(|i| if i == last { total_time } else { i as f64 * step })
                    .collect()
            }
        }
    }

    pub fn compute_trajectory(&self, params: LaunchParameters) -> SampleSeries {
        let estimate = self.flight_estimate(params);
        self.time_grid(estimate.total_time)
            .into_iter()
            .map(|time| {
                let (x, y) = self.position_at(params, time);
                TrajectorySample { time, x, y }
            })
            .filter(|sample| sample.y >= 0.0)
            .collect()
    }

    pub fn compute_velocity(
        &self,
        initial_speed: f64,
        launch_angle_deg: f64,
        time_values: &[f64],
    ) -> VelocitySeries {
        let (vx, vy0) = velocity_components(initial_speed, launch_angle_deg);
        VelocitySeries(
            time_values
                .iter()
                .map(|t| {
                    let vy = vy0 - self.gravity_mps2 * t;
                    (vx * vx + vy * vy).sqrt()
                })
                .collect(),
        )
    }
}

pub fn velocity_components(speed_mps: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    let vx = speed_mps * theta.cos();
    let vy = speed_mps * theta.sin();
    (vx, vy)
}

pub fn compute_trajectory(
    initial_height: f64,
    initial_velocity: f64,
    launch_angle_deg: f64,
) -> SampleSeries {
    Kinematics::default().compute_trajectory(LaunchParameters::new(
        initial_height,
        initial_velocity,
        launch_angle_deg,
    ))
}

pub fn compute_velocity(
    initial_velocity: f64,
    launch_angle_deg: f64,
    time_values: &[f64],
) -> VelocitySeries {
    Kinematics::default().compute_velocity(initial_velocity, launch_angle_deg, time_values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn estimates_flight_for_flat_ground_at_45_degrees() {
        let estimate =
            Kinematics::default().flight_estimate(LaunchParameters::new(0.0, 10.0, 45.0));

        assert_close(estimate.time_to_peak, 0.7208, 0.0001);
        assert_close(estimate.peak_height, 2.5484, 0.0001);
        assert_close(estimate.time_to_fall, 0.7208, 0.0001);
        assert_close(estimate.total_time, 2.1624, 0.0001);
    }

    #[test]
    fn time_grid_spans_total_time_uniformly() {
        let kinematics = Kinematics::default();
        let grid = kinematics.time_grid(4.99);

        assert_eq!(grid.len(), TRAJECTORY_SAMPLES);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[TRAJECTORY_SAMPLES - 1], 4.99);
        for pair in grid.windows(2) {
            assert_close(pair[1] - pair[0], 0.01, 1e-9);
        }
    }

    #[test]
    fn time_grid_handles_tiny_sample_counts() {
        assert!(Kinematics::new(GRAVITY_MPS2, 0).time_grid(3.0).is_empty());
        assert_eq!(Kinematics::new(GRAVITY_MPS2, 1).time_grid(3.0), vec![0.0]);
        assert_eq!(Kinematics::new(GRAVITY_MPS2, 2).time_grid(3.0), vec![0.0, 3.0]);
    }

    #[test]
    fn flat_ground_trajectory_stops_at_landing() {
        let params = LaunchParameters::new(0.0, 10.0, 45.0);
        let kinematics = Kinematics::default();
        let series = kinematics.compute_trajectory(params);
        let grid = kinematics.time_grid(kinematics.flight_estimate(params).total_time);

        let first = series.first().expect("series should not be empty");
        assert_eq!((first.time, first.y), (0.0, 0.0));
        assert_close(first.x, 0.0, 1e-12);

        assert_eq!(series.len(), 333);
        let last = series.last().expect("series should not be empty");
        assert!(last.y >= 0.0);
        let (_, next_y) = kinematics.position_at(params, grid[series.len()]);
        assert!(next_y < 0.0, "next grid sample should be below ground, got {next_y}");
    }

    #[test]
    fn kept_samples_follow_the_uniform_grid() {
        let params = LaunchParameters::new(12.0, 25.0, 30.0);
        let kinematics = Kinematics::default();
        let series = kinematics.compute_trajectory(params);
        let grid = kinematics.time_grid(kinematics.flight_estimate(params).total_time);

        assert!(!series.is_empty());
        assert!(series.len() <= TRAJECTORY_SAMPLES);
        for (sample, expected_time) in series.iter().zip(grid.iter()) {
            assert_eq!(sample.time, *expected_time);
            assert!(sample.y >= 0.0);
        }
    }

    #[test]
    fn initial_sample_matches_launch_point() {
        let series = compute_trajectory(3.5, 18.0, 60.0);
        let first = series.first().expect("series should not be empty");

        assert_eq!(first.time, 0.0);
        assert_close(first.x, 0.0, 1e-12);
        assert_close(first.y, 3.5, 1e-12);

        let speeds = compute_velocity(18.0, 60.0, &[0.0]);
        assert_close(speeds.as_slice()[0], 18.0, 1e-9);
    }

    #[test]
    fn vertical_launch_has_no_horizontal_motion() {
        let series = compute_trajectory(0.0, 20.0, 90.0);
        let times = series.times();
        let speeds = compute_velocity(20.0, 90.0, &times);

        assert!(!series.is_empty());
        for (sample, speed) in series.iter().zip(speeds.iter()) {
            assert_close(sample.x, 0.0, 1e-9);
            assert_close(*speed, (20.0 - GRAVITY_MPS2 * sample.time).abs(), 1e-9);
        }
    }

    #[test]
    fn zero_velocity_drops_straight_down() {
        let series = compute_trajectory(5.0, 0.0, 30.0);

        assert!(!series.is_empty());
        assert_close(series.first().map(|s| s.y).unwrap_or_default(), 5.0, 1e-12);
        for sample in series.iter() {
            assert_eq!(sample.x, 0.0);
            assert!(sample.y <= 5.0);
        }
    }

    #[test]
    fn negative_height_without_speed_is_empty() {
        assert!(compute_trajectory(-2.0, 0.0, 45.0).is_empty());
    }

    #[test]
    fn velocity_series_aligns_with_times() {
        let times = [0.0, 0.25, 0.5, 3.0];
        let speeds = compute_velocity(15.0, 40.0, &times);

        assert_eq!(speeds.len(), times.len());
        assert!(compute_velocity(15.0, 40.0, &[]).is_empty());
    }

    #[test]
    fn custom_gravity_changes_flight_time() {
        let moon = Kinematics::new(1.62, TRAJECTORY_SAMPLES);
        let params = LaunchParameters::new(0.0, 10.0, 45.0);

        let earth_time = Kinematics::default().flight_estimate(params).total_time;
        let moon_time = moon.flight_estimate(params).total_time;
        assert!(moon_time > earth_time * 5.0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(
            compute_trajectory(1.5, 30.0, 45.0),
            compute_trajectory(1.5, 30.0, 45.0)
        );
    }
}
