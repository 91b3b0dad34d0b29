use super::config::ConfigArgs;
use super::logging_system::setup_logging_safe;
use crate::domain::{DisplayOptions, LinearColor, Severity};
use crate::format::Number;
use crate::math::{Rotator, Transform, Vector};
use crate::router::Log;
use crate::sink::{BoardEntry, MessageBoard};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::debug;

/// Format a value and route it to the overlay and the console.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Message severity
    #[arg(long, default_value = "info")]
    pub severity: Severity,

    /// Text placed before the value
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Text placed after the value
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Free-form text
    Message { text: String },
    /// Integer or float
    Number {
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Number followed by %
    Percent {
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },
    /// True or False
    Bool {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// X Y Z
    Vector {
        #[arg(allow_negative_numbers = true, num_args = 3)]
        components: Vec<f64>,
    },
    /// Pitch Yaw Roll, in degrees
    Rotator {
        #[arg(allow_negative_numbers = true, num_args = 3)]
        angles: Vec<f64>,
    },
    /// R G B [A]
    Color {
        #[arg(allow_negative_numbers = true, num_args = 3..=4)]
        channels: Vec<f32>,
    },
    /// Translation X Y Z
    Transform {
        #[arg(allow_negative_numbers = true, num_args = 3)]
        translation: Vec<f64>,
        /// Put translation, rotation and scale on separate lines
        #[arg(long)]
        expanded: bool,
    },
    Hello,
    Yes,
    No,
    Valid,
    Invalid,
}

/// Parse the number the way a caller would have typed it: integer first, then float.
pub fn parse_number(value: &str) -> anyhow::Result<Number> {
    if let Ok(v) = value.parse::<i64>() {
        return Ok(Number::from(v));
    }
    if let Ok(v) = value.parse::<u64>() {
        return Ok(Number::from(v));
    }
    value
        .parse::<f64>()
        .map(Number::from)
        .with_context(|| format!("'{value}' is not a number"))
}

fn triple(values: &[f64]) -> anyhow::Result<(f64, f64, f64)> {
    match values {
        [x, y, z] => Ok((*x, *y, *z)),
        _ => anyhow::bail!("expected 3 components, got {}", values.len()),
    }
}

fn vector(values: &[f64]) -> anyhow::Result<Vector> {
    let (x, y, z) = triple(values)?;
    Ok(Vector::new(x, y, z))
}

/// Route one CLI command through `log`.
pub fn emit(log: &Log, options: &DisplayOptions, command: &Command) -> anyhow::Result<()> {
    let destination = options.destination;
    match command {
        Command::Message { text } => log.message(options, text),
        Command::Number { value } => log.number(parse_number(value)?, options),
        Command::Percent { value } => log.percent(*value, options),
        Command::Bool { value } => log.boolean(*value, options),
        Command::Vector { components } => log.vector(&vector(components)?, options),
        Command::Rotator { angles } => {
            let (pitch, yaw, roll) = triple(angles)?;
            log.rotator(&Rotator::new(pitch, yaw, roll), options);
        }
        Command::Color { channels } => {
            let color = match channels.as_slice() {
                [r, g, b] => LinearColor::rgb(*r, *g, *b),
                [r, g, b, a] => LinearColor::new(*r, *g, *b, *a),
                _ => anyhow::bail!("expected 3 or 4 channels, got {}", channels.len()),
            };
            log.color(&color, options);
        }
        Command::Transform {
            translation,
            expanded,
        } => log.transform(
            &Transform::from_translation(vector(translation)?),
            &options.prefix,
            *expanded,
            destination,
            options.display_time,
        ),
        Command::Hello => log.hello(destination),
        Command::Yes => log.yes(&options.prefix, &options.suffix, destination),
        Command::No => log.no(&options.prefix, &options.suffix, destination),
        Command::Valid => log.valid(&options.prefix, &options.suffix, destination),
        Command::Invalid => log.invalid(&options.prefix, &options.suffix, destination),
    }
    Ok(())
}

/// One overlay line with a 24-bit ANSI foreground in the entry's color.
pub fn render_overlay_line(entry: &BoardEntry) -> String {
    let [r, g, b, _] = entry.color.to_rgba8();
    format!("\x1b[38;2;{r};{g};{b}m[{}] {}\x1b[0m", entry.severity, entry.text)
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config.clone().resolve()?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if let Err(e) = setup_logging_safe(&config) {
        eprintln!("Warning: {e}, console output disabled");
    }
    debug!(
        "debug-log v{} destination={} display_time={}",
        crate::VERSION,
        config.destination,
        config.display_time
    );

    let board = Arc::new(MessageBoard::new(config.board_capacity));
    let log = Log::builder()
        .config(config)
        .viewport(board.clone())
        .build();

    let options = log
        .options()
        .severity(cli.severity)
        .prefix(cli.prefix)
        .suffix(cli.suffix);
    emit(&log, &options, &cli.command)?;

    for entry in board.visible() {
        println!("{}", render_overlay_line(&entry));
    }
    Ok(())
}

// Main entry point for the binary
pub fn main() -> anyhow::Result<()> {
    run(Cli::parse())
}
