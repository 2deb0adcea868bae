use clap::Parser;
use projectile_plot::cli::{Cli, OutputFormat};
use projectile_plot::config::timestamped_plot_path;
use projectile_plot::{MotionReport, Result, logging, plot};

fn run(cli: Cli) -> Result<()> {
    let params = cli.launch.resolve_from_terminal(cli.format.prompt_stream())?;
    let kinematics = cli.launch.kinematics();
    tracing::debug!(?params, ?kinematics, "launch parameters");

    let report = MotionReport::compute(kinematics, params);
    tracing::info!(
        total_time_s = report.flight.total_time,
        peak_height_m = report.flight.peak_height,
        samples = report.sample_count(),
        "trajectory computed"
    );
    if report.sample_count() == 0 {
        tracing::warn!("no samples at or above ground for these parameters");
    }

    match cli.format {
        OutputFormat::Summary => println!("\n{}", report.summary()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(path) = cli.plot {
        let path = path.unwrap_or_else(|| timestamped_plot_path(chrono::Local::now()));
        if !plot::fonts_available() {
            tracing::warn!("no sans-serif font found; plot text may fail to render");
        }
        let path = plot::render(&report, &path)?;
        tracing::info!(path = %path.display(), "plot written");
        if cli.format == OutputFormat::Summary {
            println!("Plot: {}", path.display());
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        tracing::error!(%err, "run failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
