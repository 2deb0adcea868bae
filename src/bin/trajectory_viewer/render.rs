use macroquad::prelude::*;
use projectile_plot::MotionReport;
use projectile_plot::config::{
    COMPONENTS_TITLE, HORIZONTAL_LABEL, POSITION_LABEL, SPEED_LABEL, SPEED_TITLE, TIME_LABEL,
    TRAJECTORY_TITLE, VERTICAL_LABEL, X_SERIES_LABEL, Y_SERIES_LABEL,
};
use projectile_plot::core::window::{AxisRange, AxisWindow};

use crate::constants::{
    CURVE_THICKNESS, GRID_COLOR, HEADER_HEIGHT, LABEL_COLOR, LEFT_MARGIN, PANEL_BOTTOM_PADDING,
    PANEL_TOP_PADDING, RIGHT_MARGIN, X_CURVE_COLOR, X_GRID_LINES, Y_CURVE_COLOR, Y_GRID_LINES,
};

pub(crate) struct Curve<'a> {
    pub(crate) label: &'static str,
    pub(crate) xs: &'a [f64],
    pub(crate) ys: &'a [f64],
    pub(crate) color: Color,
}

pub(crate) struct Panel<'a> {
    pub(crate) title: &'static str,
    pub(crate) x_label: &'static str,
    pub(crate) y_label: &'static str,
    pub(crate) window: AxisWindow,
    pub(crate) curves: Vec<Curve<'a>>,
    pub(crate) show_legend: bool,
}

#[derive(Clone, Copy)]
pub(crate) struct PanelRect {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PanelRect {
    fn to_screen(&self, window: &AxisWindow, x: f64, y: f64) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        vec2(
            self.left + window.x.fraction(x) as f32 * plot_w,
            self.bottom - window.y.fraction(y) as f32 * plot_h,
        )
    }
}

pub(crate) fn panels(report: &MotionReport) -> [Panel<'_>; 3] {
    [
        Panel {
            title: TRAJECTORY_TITLE,
            x_label: HORIZONTAL_LABEL,
            y_label: VERTICAL_LABEL,
            window: AxisWindow::covering(&report.x, &report.y).including_origin(),
            curves: vec![Curve {
                label: "",
                xs: &report.x,
                ys: &report.y,
                color: X_CURVE_COLOR,
            }],
            show_legend: false,
        },
        Panel {
            title: COMPONENTS_TITLE,
            x_label: TIME_LABEL,
            y_label: POSITION_LABEL,
            window: AxisWindow::covering_curves(&report.time, &[&report.x, &report.y]),
            curves: vec![
                Curve {
                    label: X_SERIES_LABEL,
                    xs: &report.time,
                    ys: &report.x,
                    color: X_CURVE_COLOR,
                },
                Curve {
                    label: Y_SERIES_LABEL,
                    xs: &report.time,
                    ys: &report.y,
                    color: Y_CURVE_COLOR,
                },
            ],
            show_legend: true,
        },
        Panel {
            title: SPEED_TITLE,
            x_label: TIME_LABEL,
            y_label: SPEED_LABEL,
            window: AxisWindow::covering(&report.time, report.speed.as_slice()),
            curves: vec![Curve {
                label: "",
                xs: &report.time,
                ys: report.speed.as_slice(),
                color: X_CURVE_COLOR,
            }],
            show_legend: false,
        },
    ]
}

/// Splits the area below the header into three equal rows.
pub(crate) fn panel_rects(screen_w: f32, screen_h: f32) -> [PanelRect; 3] {
    let row_h = ((screen_h - HEADER_HEIGHT) / 3.0).max(1.0);
    std::array::from_fn(|i| {
        let row_top = HEADER_HEIGHT + row_h * i as f32;
        PanelRect {
            left: LEFT_MARGIN,
            right: (screen_w - RIGHT_MARGIN).max(LEFT_MARGIN + 1.0),
            top: row_top + PANEL_TOP_PADDING,
            bottom: (row_top + row_h - PANEL_BOTTOM_PADDING).max(row_top + PANEL_TOP_PADDING + 1.0),
        }
    })
}

fn format_axis_value(value: f64, range: &AxisRange) -> String {
    let magnitude = range.min.abs().max(range.max.abs());
    if magnitude >= 1000.0 {
        format!("{value:.0}")
    } else if magnitude >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn draw_grid(rect: PanelRect) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = rect.left + t * (rect.right - rect.left);
        draw_line(x, rect.top, x, rect.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = rect.bottom - t * (rect.bottom - rect.top);
        draw_line(rect.left, y, rect.right, y, 1.0, GRID_COLOR);
    }
}

fn draw_axis_tick_labels(rect: PanelRect, panel: &Panel<'_>, font: Option<&Font>) {
    let tick_font_size: u16 = 15;
    let window = &panel.window;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = rect.left + t * (rect.right - rect.left);
        let value = window.x.min + f64::from(t) * window.x.span();
        let label = format_axis_value(value, &window.x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            rect.bottom + 20.0,
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = rect.bottom - t * (rect.bottom - rect.top);
        let value = window.y.min + f64::from(t) * window.y.span();
        let label = format_axis_value(value, &window.y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (rect.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    let x_label_size = measure_text(panel.x_label, font, 17, 1.0);
    draw_ui_text(
        panel.x_label,
        rect.right - x_label_size.width,
        rect.bottom + 42.0,
        17,
        LABEL_COLOR,
        font,
    );
    draw_ui_text(panel.y_label, rect.left + 8.0, rect.top - 6.0, 17, LABEL_COLOR, font);
}

fn draw_curve(curve: &Curve<'_>, window: &AxisWindow, rect: PanelRect) {
    let mut points = curve
        .xs
        .iter()
        .zip(curve.ys)
        .map(|(&x, &y)| rect.to_screen(window, x, y));

    let Some(mut prev) = points.next() else {
        return;
    };
    for cur in points {
        draw_line(prev.x, prev.y, cur.x, cur.y, CURVE_THICKNESS, curve.color);
        prev = cur;
    }
}

fn draw_legend(panel: &Panel<'_>, rect: PanelRect, font: Option<&Font>) {
    let row_h = 20.0;
    let box_w = 96.0;
    let box_h = row_h * panel.curves.len() as f32 + 8.0;
    let x = rect.right - box_w - 10.0;
    let y = rect.top + 10.0;

    draw_rectangle(x, y, box_w, box_h, Color::new(1.0, 1.0, 1.0, 0.85));
    draw_rectangle_lines(x, y, box_w, box_h, 1.0, DARKGRAY);
    for (i, curve) in panel.curves.iter().enumerate() {
        let row_y = y + 4.0 + row_h * (i as f32 + 0.5);
        draw_line(x + 8.0, row_y, x + 32.0, row_y, CURVE_THICKNESS, curve.color);
        draw_ui_text(curve.label, x + 40.0, row_y + 5.0, 16, LABEL_COLOR, font);
    }
}

pub(crate) fn draw_panel(panel: &Panel<'_>, rect: PanelRect, font: Option<&Font>) {
    draw_grid(rect);
    draw_line(rect.left, rect.bottom, rect.right, rect.bottom, 2.0, DARKGRAY);
    draw_line(rect.left, rect.top, rect.left, rect.bottom, 2.0, DARKGRAY);
    draw_axis_tick_labels(rect, panel, font);

    let title_size = measure_text(panel.title, font, 20, 1.0);
    draw_ui_text(
        panel.title,
        (rect.left + rect.right - title_size.width) * 0.5,
        rect.top - 12.0,
        20,
        DARKGRAY,
        font,
    );

    for curve in &panel.curves {
        draw_curve(curve, &panel.window, rect);
    }
    if panel.show_legend {
        draw_legend(panel, rect, font);
    }
}
