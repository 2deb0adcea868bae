use clap::{ArgAction, Parser};
use macroquad::Window;
use projectile_plot::cli::{LaunchArgs, PromptStream};
use projectile_plot::{MotionReport, logging};

mod app;
mod constants;
mod render;

#[derive(Debug, Parser)]
#[command(
    name = "trajectory_viewer",
    version,
    about = "Show trajectory, position and speed plots in a window"
)]
struct ViewerCli {
    #[command(flatten)]
    launch: LaunchArgs,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = ViewerCli::parse();
    logging::init(cli.verbose);

    // Parameters are read before the window opens so prompts stay on the terminal.
    let params = match cli.launch.resolve_from_terminal(PromptStream::Stdout) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let report = MotionReport::compute(cli.launch.kinematics(), params);
    tracing::info!(samples = report.sample_count(), "opening viewer");

    Window::from_config(app::window_conf(), app::run(report));
}
