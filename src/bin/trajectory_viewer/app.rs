use macroquad::prelude::*;
use projectile_plot::MotionReport;

use crate::constants::{
    BACKGROUND, HEADER_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LABEL_COLOR,
    LEFT_MARGIN, MSAA_SAMPLES, TITLE_Y, UI_FONT_PATH,
};
use crate::render::{draw_panel, draw_ui_text, panel_rects, panels};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Plot".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn header_line(report: &MotionReport) -> String {
    let p = report.parameters;
    format!(
        "h0 = {:.2} m   v0 = {:.2} m/s   angle = {:.1} deg   g = {:.2} m/s^2   flight ~ {:.3} s",
        p.initial_height,
        p.initial_speed,
        p.launch_angle_deg,
        report.gravity_mps2,
        report.flight.total_time
    )
}

pub(crate) async fn run(report: MotionReport) {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::warn!(path = UI_FONT_PATH, %err, "falling back to default font");
            None
        }
    };

    let views = panels(&report);
    let header = header_line(&report);
    if report.sample_count() == 0 {
        tracing::warn!("nothing above ground to draw");
    }

    loop {
        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            break;
        }

        clear_background(BACKGROUND);
        draw_ui_text(
            "Projectile motion without air resistance",
            LEFT_MARGIN,
            TITLE_Y,
            26,
            HEADER_COLOR,
            ui_font.as_ref(),
        );
        draw_ui_text(
            &header,
            LEFT_MARGIN,
            TITLE_Y + 24.0,
            16,
            LABEL_COLOR,
            ui_font.as_ref(),
        );

        let rects = panel_rects(screen_width(), screen_height());
        for (panel, rect) in views.iter().zip(rects) {
            draw_panel(panel, rect, ui_font.as_ref());
        }

        next_frame().await;
    }
}
