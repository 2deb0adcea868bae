use std::fmt::Display;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::{
    COMPONENTS_TITLE, HORIZONTAL_LABEL, PLOT_HEIGHT_PX, PLOT_WIDTH_PX, POSITION_LABEL,
    SPEED_LABEL, SPEED_TITLE, TIME_LABEL, TRAJECTORY_TITLE, VERTICAL_LABEL, X_SERIES_LABEL,
    Y_SERIES_LABEL,
};
use crate::core::window::AxisWindow;
use crate::error::{Error, Result};
use crate::report::MotionReport;

const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);
const PANEL_MARGIN_PX: u32 = 12;
const X_LABEL_AREA_PX: u32 = 40;
const Y_LABEL_AREA_PX: u32 = 60;
const LINE_WIDTH_PX: u32 = 2;

const X_COLOR: RGBColor = RGBColor(31, 119, 180);
const Y_COLOR: RGBColor = RGBColor(255, 127, 14);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotFormat {
    Png,
    Svg,
}

impl PlotFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }
}

/// Path the plot is written to. Bitmaps are encoded by extension, so anything that is not
/// `.svg` or `.png` gets `.png` appended.
pub fn output_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("png") => {
            path.to_path_buf()
        }
        _ => {
            let mut name = path.as_os_str().to_owned();
            name.push(".png");
            PathBuf::from(name)
        }
    }
}

/// Whether plotters can lay out caption text on this machine.
pub fn fonts_available() -> bool {
    CAPTION_FONT.into_font().box_size("0").is_ok()
}

fn plot_err(err: impl Display) -> Error {
    Error::Plot(err.to_string())
}

/// Draws the trajectory, position components and speed panels stacked top to bottom and
/// returns the path written.
pub fn render(report: &MotionReport, path: &Path) -> Result<PathBuf> {
    let path = output_path(path);
    let size = (PLOT_WIDTH_PX, PLOT_HEIGHT_PX);
    match PlotFormat::from_path(&path) {
        PlotFormat::Png => draw(BitMapBackend::new(&path, size).into_drawing_area(), report)?,
        PlotFormat::Svg => draw(SVGBackend::new(&path, size).into_drawing_area(), report)?,
    }
    Ok(path)
}

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, report: &MotionReport) -> Result<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let panels = root.split_evenly((3, 1));
    draw_trajectory_panel(&panels[0], report)?;
    draw_components_panel(&panels[1], report)?;
    draw_speed_panel(&panels[2], report)?;

    root.present().map_err(plot_err)
}

fn points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

fn draw_trajectory_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &MotionReport,
) -> Result<()> {
    let window = AxisWindow::covering(&report.x, &report.y).including_origin();
    let mut chart = ChartBuilder::on(area)
        .caption(TRAJECTORY_TITLE, CAPTION_FONT)
        .margin(PANEL_MARGIN_PX)
        .x_label_area_size(X_LABEL_AREA_PX)
        .y_label_area_size(Y_LABEL_AREA_PX)
        .build_cartesian_2d(window.x.as_range(), window.y.as_range())
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(HORIZONTAL_LABEL)
        .y_desc(VERTICAL_LABEL)
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            points(&report.x, &report.y),
            X_COLOR.stroke_width(LINE_WIDTH_PX),
        ))
        .map_err(plot_err)?;
    Ok(())
}

fn draw_components_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &MotionReport,
) -> Result<()> {
    let window = AxisWindow::covering_curves(&report.time, &[&report.x, &report.y]);
    let mut chart = ChartBuilder::on(area)
        .caption(COMPONENTS_TITLE, CAPTION_FONT)
        .margin(PANEL_MARGIN_PX)
        .x_label_area_size(X_LABEL_AREA_PX)
        .y_label_area_size(Y_LABEL_AREA_PX)
        .build_cartesian_2d(window.x.as_range(), window.y.as_range())
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(TIME_LABEL)
        .y_desc(POSITION_LABEL)
        .draw()
        .map_err(plot_err)?;

    for (label, values, color) in [
        (X_SERIES_LABEL, &report.x, X_COLOR),
        (Y_SERIES_LABEL, &report.y, Y_COLOR),
    ] {
        chart
            .draw_series(LineSeries::new(
                points(&report.time, values),
                color.stroke_width(LINE_WIDTH_PX),
            ))
            .map_err(plot_err)?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_PX))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)
}

fn draw_speed_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &MotionReport,
) -> Result<()> {
    let window = AxisWindow::covering(&report.time, report.speed.as_slice());
    let mut chart = ChartBuilder::on(area)
        .caption(SPEED_TITLE, CAPTION_FONT)
        .margin(PANEL_MARGIN_PX)
        .x_label_area_size(X_LABEL_AREA_PX)
        .y_label_area_size(Y_LABEL_AREA_PX)
        .build_cartesian_2d(window.x.as_range(), window.y.as_range())
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(TIME_LABEL)
        .y_desc(SPEED_LABEL)
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            points(&report.time, report.speed.as_slice()),
            X_COLOR.stroke_width(LINE_WIDTH_PX),
        ))
        .map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::{Kinematics, LaunchParameters};

    #[test]
    fn format_follows_extension() {
        assert_eq!(PlotFormat::from_path(Path::new("out.svg")), PlotFormat::Svg);
        assert_eq!(PlotFormat::from_path(Path::new("OUT.SVG")), PlotFormat::Svg);
        assert_eq!(PlotFormat::from_path(Path::new("out.png")), PlotFormat::Png);
        assert_eq!(PlotFormat::from_path(Path::new("trajectory")), PlotFormat::Png);
    }

    #[test]
    fn output_path_keeps_known_extensions() {
        assert_eq!(output_path(Path::new("a/out.svg")), PathBuf::from("a/out.svg"));
        assert_eq!(output_path(Path::new("out.PNG")), PathBuf::from("out.PNG"));
        assert_eq!(output_path(Path::new("flight.plot")), PathBuf::from("flight.plot.png"));
        assert_eq!(output_path(Path::new("trajectory")), PathBuf::from("trajectory.png"));
    }

    #[test]
    fn points_pair_columns() {
        assert_eq!(
            points(&[0.0, 1.0], &[2.0, 3.0]),
            vec![(0.0, 2.0), (1.0, 3.0)]
        );
    }

    fn rendered(report: &MotionReport, file_name: &str) -> Option<Vec<u8>> {
        if !fonts_available() {
            eprintln!("skipping {file_name}: no system sans-serif font");
            return None;
        }
        let dir = tempfile::tempdir().expect("temp dir");
        let written = render(report, &dir.path().join(file_name)).expect("plot renders");
        Some(std::fs::read(&written).expect("plot written"))
    }

    fn report(height: f64, speed: f64, angle: f64) -> MotionReport {
        MotionReport::compute(Kinematics::default(), LaunchParameters::new(height, speed, angle))
    }

    #[test]
    fn renders_svg_with_all_panels() {
        let Some(bytes) = rendered(&report(1.0, 15.0, 50.0), "flight.svg") else {
            return;
        };

        let svg = String::from_utf8(bytes).expect("svg is utf-8");
        assert!(svg.contains(TRAJECTORY_TITLE));
        assert!(svg.contains(COMPONENTS_TITLE));
        assert!(svg.contains(SPEED_TITLE));
        assert!(svg.contains(X_SERIES_LABEL));
    }

    #[test]
    fn renders_empty_series_to_svg() {
        let report = report(-5.0, 0.0, 45.0);
        assert_eq!(report.sample_count(), 0);

        let Some(bytes) = rendered(&report, "empty.svg") else {
            return;
        };
        let svg = String::from_utf8(bytes).expect("svg is utf-8");
        assert!(svg.contains(SPEED_TITLE));
    }

    #[test]
    fn renders_empty_series_to_png() {
        let Some(bytes) = rendered(&report(-5.0, 0.0, 45.0), "empty.png") else {
            return;
        };

        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn renders_png_for_unknown_extension() {
        let Some(bytes) = rendered(&report(0.0, 10.0, 45.0), "flight.plot") else {
            return;
        };

        assert!(bytes.starts_with(b"\x89PNG"));
    }
}
