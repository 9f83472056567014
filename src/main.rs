// SPDX-License-Identifier: MIT
//
// contrast-matrix — pairwise WCAG contrast for a named palette.
//
// This is the binary that wires the crates together:
//
//   cm-color    → hex parsing, sRGB transfer
//   cm-contrast → luminance, ratios, ratings, the matrix itself
//   cm-render   → HTML / terminal / JSON output
//
// Flow:
//
//   palette file (or stdin) → Palette → build_matrix → render → stdout/file
//
// Logs go to stderr so piping the rendered matrix stays clean.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cm_contrast::{Palette, build_matrix};
use cm_render::{Format, RenderOptions, render};
use tracing::{debug, info};

// ─── Command line ───────────────────────────────────────────────────────────

/// Check every pair of colors in a palette against WCAG contrast tiers.
#[derive(Parser, Debug)]
#[command(name = "contrast-matrix", version, about)]
#[command(
    long_about = "Reads a palette (JSON object of name → #RRGGBB, or a list of {name, color}) \
                  and prints the contrast ratio and AAA/AA/G rating of every ordered pair."
)]
struct Cli {
    /// Palette file, or `-` for stdin
    #[arg(env = "CONTRAST_MATRIX_PALETTE")]
    palette: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ansi)]
    format: OutputFormat,

    /// Decimals shown in ratios
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=6))]
    precision: u8,

    /// Show rating labels only, without ratios
    #[arg(long)]
    no_ratios: bool,

    /// Leave out the "Show Ratings" toggle in HTML output
    #[arg(long)]
    no_toggle: bool,

    /// Disable terminal colors (also honored via NO_COLOR)
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Ansi,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => Self::Html,
            OutputFormat::Ansi => Self::Ansi,
            OutputFormat::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Resolve render options. Terminal colors are only used when writing to
    /// an interactive stdout.
    fn render_options(&self, interactive: bool) -> RenderOptions {
        RenderOptions {
            show_ratios: !self.no_ratios,
            show_toggle: !self.no_toggle,
            precision: usize::from(self.precision),
            color: !self.no_color && self.output.is_none() && interactive,
        }
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Read palette text from a path, or stdin for `-`.
fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read palette from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read palette {}", path.display()))
}

fn load_palette(path: &Path) -> Result<Palette> {
    let text = read_source(path)?;
    let palette = Palette::from_json(&text)
        .with_context(|| format!("failed to parse palette {}", path.display()))?;
    info!(entries = palette.len(), path = %path.display(), "loaded palette");
    Ok(palette)
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(stdout)?;
            }
            Ok(())
        }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn run(cli: &Cli) -> Result<()> {
    let palette = load_palette(&cli.palette)?;
    let matrix = build_matrix(&palette)?;

    let options = cli.render_options(io::stdout().is_terminal());
    debug!(?options, format = ?cli.format, "rendering");

    let rendered = render(&matrix, cli.format.into(), &options)?;
    write_output(cli.output.as_deref(), &rendered)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    run(&cli)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("contrast-matrix").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&["palette.json"]);
        assert_eq!(cli.palette, PathBuf::from("palette.json"));
        assert_eq!(cli.format, OutputFormat::Ansi);
        assert_eq!(cli.precision, 1);
        assert!(!cli.no_ratios);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn flags_map_to_render_options() {
        let cli = parse(&["-f", "html", "--precision", "2", "--no-ratios", "--no-toggle", "p.json"]);
        assert_eq!(cli.format, OutputFormat::Html);
        let options = cli.render_options(true);
        assert!(!options.show_ratios);
        assert!(!options.show_toggle);
        assert_eq!(options.precision, 2);
    }

    #[test]
    fn color_off_when_not_interactive_or_writing_file() {
        let cli = parse(&["p.json"]);
        assert!(!cli.render_options(false).color);

        let cli = parse(&["-o", "out.txt", "p.json"]);
        assert!(!cli.render_options(true).color);

        let cli = parse(&["--no-color", "p.json"]);
        assert!(!cli.render_options(true).color);
    }

    #[test]
    fn precision_is_bounded() {
        let args = ["contrast-matrix", "--precision", "9", "p.json"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let args = ["contrast-matrix", "-f", "svg", "p.json"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn format_conversion() {
        assert_eq!(Format::from(OutputFormat::Json), Format::Json);
        assert_eq!(Format::from(OutputFormat::Html), Format::Html);
    }

    #[test]
    fn missing_file_has_context() {
        let err = load_palette(Path::new("/nonexistent/palette.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/palette.json"), "{err}");
    }
}
