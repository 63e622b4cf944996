//! Sudoku Sheets CLI
//!
//! Usage:
//!   sudoku-sheets [OPTIONS]
//!
//! Options:
//!   --nx <N>                 Puzzles placed horizontally [default: 1]
//!   --ny <N>                 Puzzles placed vertically [default: 1]; give both or neither
//!   --difficulty <LEVEL>     simple, easy, intermediate, expert or any [default: any]
//!   --pages <N>              Pages to fill [default: 1]
//!   --puzzles <FILE>         Read puzzles from a file instead of running qqwing
//!   -o, --output <FILE>      Output PDF path
//!   -s, --settings <FILE>    Settings file (TOML format)
//!   -h, --help               Print help
//!
//! Single-dash long flags such as `-nx 2` are accepted as well.

use std::ffi::OsString;
use std::path::PathBuf;

use chrono::Local;
use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sudoku_sheets::layout::{LayoutError, Orientation, Paper};
use sudoku_sheets::{
    generate_sheet, output_filename, Difficulty, DrawingSurface, FileSource, PdfSurface,
    PuzzleSource, RenderOptions, Settings, SheetConfig, SheetError, TileGrid,
};

#[derive(Parser, Debug)]
#[command(name = "sudoku-sheets", version)]
#[command(about = "Lay out generated Sudoku puzzles on a printable PDF page")]
struct Cli {
    /// Number of puzzles placed horizontally [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    nx: Option<i64>,

    /// Number of puzzles placed vertically [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    ny: Option<i64>,

    /// Puzzle difficulty [default: any]
    #[arg(long, value_enum, ignore_case = true)]
    difficulty: Option<Difficulty>,

    /// Number of pages, each holding nx*ny puzzles
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Paper size
    #[arg(long, value_enum, ignore_case = true)]
    paper: Option<Paper>,

    /// Page orientation
    #[arg(long, value_enum, ignore_case = true)]
    orientation: Option<Orientation>,

    /// Page margin in millimetres
    #[arg(long)]
    margin: Option<f64>,

    /// Title printed along the left edge
    #[arg(long, allow_hyphen_values = true)]
    title: Option<String>,

    /// Read puzzles from a file (one per line) instead of running the generator
    #[arg(long)]
    puzzles: Option<PathBuf>,

    /// Output file [default: sudokus-<timestamp>-<nx>x<ny>-<difficulty>.pdf]
    #[arg(short, long, allow_hyphen_values = true)]
    output: Option<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(path) => {
            println!("Wrote sudokus to file {}", path.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "sudoku_sheets=debug"
    } else {
        "sudoku_sheets=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<PathBuf, SheetError> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    apply_page_flags(&cli, &mut settings);

    let grid = grid_from_flags(cli.nx, cli.ny)?;
    let difficulty = cli
        .difficulty
        .or(settings.generator.difficulty)
        .unwrap_or_default();
    let mut render = settings.render_options(RenderOptions::default());
    if let Some(title) = &cli.title {
        render.title = Some(title.clone());
    }

    let config = SheetConfig::new()
        .with_page(settings.page_spec())
        .with_grid(grid)
        .with_pages(cli.pages as usize)
        .with_difficulty(difficulty)
        .with_render(render);

    let path = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(output_filename(
            &Local::now().naive_local(),
            grid,
            difficulty,
        ))
    });

    let mut source: Box<dyn PuzzleSource> = match &cli.puzzles {
        Some(file) => Box::new(FileSource::new(file)),
        None => Box::new(settings.generator()),
    };

    info!(
        "Generating {} page(s) of {} Sudokus in a {} x {} grid",
        config.pages,
        difficulty,
        grid.nx,
        grid.ny
    );

    let mut surface = PdfSurface::new();
    generate_sheet(source.as_mut(), &config, &mut surface)?;
    surface.save(&path)?;
    Ok(path)
}

/// Tiling from `--nx`/`--ny`; both default to 1 but must be given together
fn grid_from_flags(nx: Option<i64>, ny: Option<i64>) -> Result<TileGrid, LayoutError> {
    match (nx, ny) {
        (None, None) => Ok(TileGrid::default()),
        (Some(nx), Some(ny)) => TileGrid::from_signed(nx, ny),
        (nx, ny) => Err(LayoutError::invalid_grid(nx.unwrap_or(0), ny.unwrap_or(0))),
    }
}

/// Command-line page flags take precedence over the settings file
fn apply_page_flags(cli: &Cli, settings: &mut Settings) {
    if cli.paper.is_some() || cli.orientation.is_some() {
        settings.page.width = None;
        settings.page.height = None;
    }
    if let Some(paper) = cli.paper {
        settings.page.paper = Some(paper);
    }
    if let Some(orientation) = cli.orientation {
        settings.page.orientation = Some(orientation);
    }
    if let Some(margin) = cli.margin {
        settings.page.margin = Some(margin);
    }
}

/// Rewrite single-dash long flags (`-nx 2`, `-difficulty=easy`) to their
/// double-dash form so clap accepts them.
///
/// The value following an option that takes one (`--title -pages`) is passed
/// through untouched, as is everything after `--`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let command = Cli::command();
    let mut longs: Vec<(&str, bool)> = Vec::new();
    let mut shorts: Vec<(char, bool)> = Vec::new();
    for arg in command.get_arguments() {
        let takes_value = arg.get_action().takes_values();
        if let Some(long) = arg.get_long() {
            longs.push((long, takes_value));
        }
        if let Some(short) = arg.get_short() {
            shorts.push((short, takes_value));
        }
    }
    let long_takes_value = |name: &str| longs.iter().find(|(l, _)| *l == name).map(|(_, v)| *v);

    let mut expecting_value = false;
    let mut passthrough = false;
    let mut normalized = Vec::new();

    for arg in args {
        if passthrough || std::mem::take(&mut expecting_value) {
            normalized.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        if let Some(rest) = text.strip_prefix("--") {
            // `--name value` leaves the value for the next argument
            if !rest.contains('=') {
                expecting_value = long_takes_value(rest).unwrap_or(false);
            }
            normalized.push(arg);
        } else if let Some(rest) = text.strip_prefix('-') {
            let (name, inline_value) = match rest.split_once('=') {
                Some((name, _)) => (name, true),
                None => (rest, false),
            };
            match long_takes_value(name) {
                Some(takes_value) if name.len() > 1 => {
                    expecting_value = takes_value && !inline_value;
                    normalized.push(OsString::from(format!("-{}", text)));
                }
                _ => {
                    // `-o out.pdf`; an attached value (`-oout.pdf`) needs no lookahead
                    let mut chars = rest.chars();
                    if let (Some(short), None) = (chars.next(), chars.next()) {
                        expecting_value = shorts
                            .iter()
                            .any(|(c, takes_value)| *c == short && *takes_value);
                    }
                    normalized.push(arg);
                }
            }
        } else {
            normalized.push(arg);
        }
    }
    normalized
}
