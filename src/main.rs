//! Variant Grid CLI
//!
//! Usage:
//!   variant-grid [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>      Write the arranged document here (stdout if omitted)
//!   -c, --config <FILE>      Layout settings (TOML, `[layout]` table)
//!   --padding <N>            Override the container padding
//!   --corner-radius <N>      Override the container corner radius
//!   --threshold <N>          Override the alignment threshold
//!   --svg-dir <DIR>          Write an SVG preview per arranged component set
//!   --svg-margin <N>         Space around the container in previews
//!   --svg-compact            Single-line previews without the XML declaration
//!   --svg-class-prefix <S>   Class name prefix in previews
//!   --svg-no-guides          Leave guides out of previews
//!   -d, --debug              Verbose logging
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use variant_grid::{render_svg, run, AppError, Document, DocumentError, LayoutConfig, SvgConfig};

#[derive(Parser)]
#[command(name = "variant-grid")]
#[command(about = "Snap component set variants into an aligned grid")]
struct Cli {
    /// Scene document (JSON); reads from stdin if not provided
    input: Option<PathBuf>,

    /// Output file for the arranged document (stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Layout settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Distance from the container edge to the variants
    #[arg(long)]
    padding: Option<f64>,

    /// Corner radius applied to each component set
    #[arg(long)]
    corner_radius: Option<f64>,

    /// Maximum offset for variants to share a row or column
    #[arg(long)]
    threshold: Option<f64>,

    /// Directory for SVG previews, one per arranged component set
    #[arg(long)]
    svg_dir: Option<PathBuf>,

    /// Space around the container in previews
    #[arg(long)]
    svg_margin: Option<f64>,

    /// Single-line previews without the XML declaration
    #[arg(long)]
    svg_compact: bool,

    /// Class name prefix in previews (may be empty)
    #[arg(long)]
    svg_class_prefix: Option<String>,

    /// Leave guides out of previews
    #[arg(long)]
    svg_no_guides: bool,

    /// Debug mode: log clustering and commit details
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = execute(&cli) {
        match e {
            AppError::Report(report) => eprint!("{}", report),
            e => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn execute(cli: &Cli) -> Result<(), AppError> {
    let config = load_config(cli)?;

    let (source, filename) = read_input(cli.input.as_deref())?;
    let mut doc = Document::from_json(&source)
        .map_err(|e| AppError::from_document(e, &source, &filename))?;

    let selection = doc.selection.clone();
    let report = run(&selection, &mut doc, &config)?;

    for (id, err) in report.failures() {
        eprintln!("Warning: component set '{}' left partially arranged: {}", id, err);
    }

    if let Some(dir) = &cli.svg_dir {
        fs::create_dir_all(dir)?;
        let preview = svg_config(cli);
        for (id, arrangement) in report.arranged() {
            let path = dir.join(format!("{}.svg", file_stem(id.as_str())));
            fs::write(&path, render_svg(arrangement, &config, &preview))?;
            tracing::info!(path = %path.display(), "wrote preview");
        }
    }

    let json = doc.to_json_pretty()?;
    match &cli.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }

    if let Some(notice) = report.notice {
        eprintln!("{}", notice);
    }

    Ok(())
}

/// Defaults, then the config file, then command-line overrides
fn load_config(cli: &Cli) -> Result<LayoutConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => LayoutConfig::from_file(path)?,
        None => LayoutConfig::default(),
    };
    if let Some(padding) = cli.padding {
        config = config.with_padding(padding);
    }
    if let Some(radius) = cli.corner_radius {
        config = config.with_corner_radius(radius);
    }
    if let Some(threshold) = cli.threshold {
        config = config.with_alignment_threshold(threshold);
    }
    Ok(config)
}

fn svg_config(cli: &Cli) -> SvgConfig {
    let mut config = SvgConfig::new()
        .with_compact(cli.svg_compact)
        .with_guides(!cli.svg_no_guides);
    if let Some(margin) = cli.svg_margin {
        config = config.with_margin(margin);
    }
    if let Some(prefix) = &cli.svg_class_prefix {
        config = config.with_class_prefix(prefix.as_str());
    }
    config
}

fn read_input(path: Option<&Path>) -> Result<(String, String), AppError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(DocumentError::from)?;
            Ok((content, path.display().to_string()))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(DocumentError::from)?;
            Ok((buffer, "<stdin>".to_string()))
        }
    }
}

/// Node ids like "1:2" are not valid file names everywhere
fn file_stem(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
