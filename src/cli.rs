use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};

use crate::core::ballistics::{GRAVITY_MPS2, Kinematics, LaunchParameters, TRAJECTORY_SAMPLES};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Flight time, peak height, range and maximum speed.
    #[default]
    Summary,
    /// Full report with the sampled series.
    Json,
}

impl OutputFormat {
    /// Stream the prompts go to, so machine-readable stdout stays clean.
    pub fn prompt_stream(self) -> PromptStream {
        match self {
            Self::Summary => PromptStream::Stdout,
            Self::Json => PromptStream::Stderr,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptStream {
    Stdout,
    Stderr,
}

#[derive(Debug, Parser)]
#[command(
    name = "projectile_plot",
    version,
    about = "Trajectory, position and speed of a projectile launched without air resistance",
    after_help = "Examples:\n  projectile_plot\n  projectile_plot 1.5 30 45 --format json\n  projectile_plot 0 10 45 --plot=flight.svg"
)]
pub struct Cli {
    #[command(flatten)]
    pub launch: LaunchArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Render the three plots to PATH (.svg or .png); timestamped name when PATH is omitted.
    #[arg(long, value_name = "PATH", require_equals = true)]
    pub plot: Option<Option<PathBuf>>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Launch parameters as given on the command line. Missing positionals are prompted for.
#[derive(Debug, Args)]
pub struct LaunchArgs {
    /// Initial height in meters.
    #[arg(value_name = "HEIGHT_M", allow_negative_numbers = true)]
    pub height: Option<String>,

    /// Initial speed in m/s.
    #[arg(value_name = "SPEED_MPS", allow_negative_numbers = true)]
    pub speed: Option<String>,

    /// Launch angle in degrees above the horizontal.
    #[arg(value_name = "ANGLE_DEG", allow_negative_numbers = true)]
    pub angle: Option<String>,

    /// Gravitational acceleration in m/s^2.
    #[arg(long, default_value_t = GRAVITY_MPS2)]
    pub gravity: f64,

    /// Number of time samples before filtering.
    #[arg(long, default_value_t = TRAJECTORY_SAMPLES)]
    pub samples: usize,
}

impl LaunchArgs {
    pub fn kinematics(&self) -> Kinematics {
        Kinematics::new(self.gravity, self.samples)
    }

    fn positionals(&self) -> [Option<&str>; 3] {
        [
            self.height.as_deref(),
            self.speed.as_deref(),
            self.angle.as_deref(),
        ]
    }

    /// Parameters from the positionals, or from prompts on `input`/`output` when none were given.
    pub fn resolve<R, W>(&self, input: &mut R, output: &mut W) -> Result<LaunchParameters>
    where
        R: BufRead,
        W: Write,
    {
        match self.positionals() {
            [None, None, None] => prompt_parameters(input, output),
            [Some(height), Some(speed), Some(angle)] => parameters_from_args(height, speed, angle),
            given => Err(Error::ArgumentCount {
                found: given.iter().flatten().count(),
            }),
        }
    }

    pub fn resolve_from_terminal(&self, prompts: PromptStream) -> Result<LaunchParameters> {
        let mut input = io::stdin().lock();
        match prompts {
            PromptStream::Stdout => self.resolve(&mut input, &mut io::stdout().lock()),
            PromptStream::Stderr => self.resolve(&mut input, &mut io::stderr().lock()),
        }
    }
}

pub fn parse_f64(value: &str, label: &'static str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| Error::InputParse {
        label,
        value: value.to_string(),
    })
}

pub fn parameters_from_args(height: &str, speed: &str, angle: &str) -> Result<LaunchParameters> {
    Ok(LaunchParameters::new(
        parse_f64(height, "height")?,
        parse_f64(speed, "speed")?,
        parse_f64(angle, "angle")?,
    ))
}

/// Prompts until a number is entered. End of input is an error.
pub fn read_f64<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<f64>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::UnexpectedEof);
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => {
                tracing::debug!(line = line.trim(), "rejected prompt input");
                writeln!(output, "Please enter a valid number (e.g., 45 or 12.5).")?;
            }
        }
    }
}

pub fn prompt_parameters<R, W>(input: &mut R, output: &mut W) -> Result<LaunchParameters>
where
    R: BufRead,
    W: Write,
{
    Ok(LaunchParameters::new(
        read_f64(input, output, "Initial height (m): ")?,
        read_f64(input, output, "Initial speed (m/s): ")?,
        read_f64(input, output, "Launch angle (degrees): ")?,
    ))
}
