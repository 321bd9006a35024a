//! pixkit - single-file raster and SVG transformations.

mod cli;
mod error;
mod image;
mod logger;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli.command) {
        Ok(summary) => {
            logger::success(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let detail: Vec<String> = err
                .chain()
                .skip(1)
                .map(|cause| format!("  caused by: {cause}"))
                .collect();
            logger::error(&err.to_string(), &detail.join("\n"));
            ExitCode::from(error::exit_code_of(&err))
        }
    }
}

/// Run one subcommand and describe what was written.
fn run(command: &Commands) -> Result<String> {
    let io = command.io();
    debug!("run"; "{} -> {}", io.input.display(), io.output.display());

    let summary = match command {
        Commands::FormatConvert { args, .. } => {
            let format = image::convert::convert_format(&io.input, &io.output, &args.into())?;
            format!("wrote {} as {}", io.output.display(), format.name())
        }
        Commands::AddMargins { margin, .. } => {
            let margin = image::margin::parse_margin(margin)?;
            image::margin::add_margins(&io.input, &io.output, margin)?;
            format!("wrote {} with a {margin}px margin", io.output.display())
        }
        Commands::TrimBackground { args, .. } => {
            let stats = image::background::trim_background(&io.input, &io.output, &args.into())?;
            format!(
                "wrote {} ({} pixels cleared)",
                io.output.display(),
                stats.pixels_cleared
            )
        }
        Commands::FlattenToWhite { args, .. } => {
            let rule = args.rule();
            let changed =
                image::recolor::recolor_file(&io.input, &io.output, &rule, args.threshold)?;
            format!("wrote {} ({changed} pixels filled)", io.output.display())
        }
        Commands::ColorizeGradient { args, .. } => {
            let rule = args.rule();
            let changed =
                image::recolor::recolor_file(&io.input, &io.output, &rule, args.threshold)?;
            format!("wrote {} ({changed} pixels colorized)", io.output.display())
        }
        Commands::SquareSvg { .. } => {
            let size = image::svg::square_svg(&io.input, &io.output)?;
            format!("wrote {} ({size}x{size})", io.output.display())
        }
    };

    Ok(summary)
}
