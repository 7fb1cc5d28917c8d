//! Racetrack — find the fewest-step route around a track and draw it.
//!
//! The driver reads a track (a `P3` image, or the ASCII layout for files
//! ending in `.txt`), searches from the start cell, paints the route's cells
//! as trace and writes the result back out.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use thiserror::Error;

use racetrack_core::{CellKind, Point, PpmError, Track, TrackError, read_ppm, write_ppm};
use racetrack_paths::{
    DEFAULT_VMAX, Exploration, KinematicState, SearchConfig, SearchError, SearchStatus, explore,
};

/// Command-line options.
#[derive(Parser, Debug, Clone)]
#[command(name = "racetrack", version, about)]
pub struct Cli {
    /// Track to solve: a P3 image, or an ASCII layout if the name ends in `.txt`.
    pub track: PathBuf,
    /// Where to write the track with the route drawn on it.
    #[arg(long, short, default_value = "path.ppm")]
    pub output: PathBuf,
    /// Largest speed along either axis.
    #[arg(long, default_value_t = DEFAULT_VMAX, value_parser = clap::value_parser!(i32).range(0..))]
    pub vmax: i32,
    /// Start cell as `ROW,COL`. Defaults to the first start cell of the track.
    #[arg(long, value_parser = parse_row_col)]
    pub start: Option<Point>,
    /// Give up after expanding this many states.
    #[arg(long)]
    pub max_expansions: Option<usize>,
}

fn parse_row_col(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok(Point::from_row_col(row, col))
}

/// Errors that stop a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Ascii { path: PathBuf, source: TrackError },
    #[error("{}: {source}", path.display())]
    Ppm { path: PathBuf, source: PpmError },
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// On-disk track encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    Ascii,
    Ppm,
}

impl TrackFormat {
    /// `.txt` files are ASCII layouts; anything else is an image.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => TrackFormat::Ascii,
            _ => TrackFormat::Ppm,
        }
    }
}

/// Read a track from disk.
pub fn load_track(path: &Path) -> Result<Track, RunError> {
    match TrackFormat::from_path(path) {
        TrackFormat::Ascii => {
            let text = fs::read_to_string(path).map_err(|source| RunError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Track::from_ascii(&text).map_err(|source| RunError::Ascii {
                path: path.to_path_buf(),
                source,
            })
        }
        TrackFormat::Ppm => {
            let file = File::open(path).map_err(|source| RunError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            read_ppm(BufReader::new(file)).map_err(|source| RunError::Ppm {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Write a track to disk in the format its name asks for.
pub fn save_track(track: &Track, path: &Path) -> Result<(), RunError> {
    let io_err = |source| RunError::Io {
        path: path.to_path_buf(),
        source,
    };
    match TrackFormat::from_path(path) {
        TrackFormat::Ascii => fs::write(path, track.to_ascii() + "\n").map_err(io_err),
        TrackFormat::Ppm => {
            let file = File::create(path).map_err(io_err)?;
            let mut writer = BufWriter::new(file);
            write_ppm(track, &mut writer).map_err(|source| RunError::Ppm {
                path: path.to_path_buf(),
                source,
            })?;
            writer.flush().map_err(io_err)
        }
    }
}

/// The vehicle at rest on the requested cell, else on the first start cell,
/// else on the top-left corner.
pub fn start_state(track: &Track, start: Option<Point>) -> KinematicState {
    let pos = start
        .or_else(|| track.find(CellKind::Start))
        .unwrap_or(Point::ZERO);
    KinematicState::at_rest(pos)
}

/// Result of one search, with its wall-clock time.
#[derive(Debug)]
pub struct Report {
    pub exploration: Exploration,
    pub path: Vec<KinematicState>,
    pub elapsed: Duration,
}

/// Search `track` and paint the route found, if any, as trace.
pub fn solve(
    track: &mut Track,
    start: KinematicState,
    config: &SearchConfig,
) -> Result<Report, SearchError> {
    let began = Instant::now();
    let exploration = explore(&*track, start, config)?;
    let elapsed = began.elapsed();
    let path = exploration.path();
    track.mark_trace(path.iter().map(|s| s.pos()));
    Ok(Report {
        exploration,
        path,
        elapsed,
    })
}

/// Run the whole pipeline for parsed command-line options.
pub fn run(cli: &Cli) -> Result<Report, RunError> {
    log::info!("Reading the map from {} ...", cli.track.display());
    let mut track = load_track(&cli.track)?;
    log::info!("Track is {}x{}", track.width(), track.height());

    let start = start_state(&track, cli.start);
    let mut config = SearchConfig::new(cli.vmax);
    config.max_expansions = cli.max_expansions;

    log::info!("Finding the path from {start} ...");
    let report = solve(&mut track, start, &config)?;
    let stats = report.exploration.stats;
    log::info!("Search took {:.6} s", report.elapsed.as_secs_f64());
    log::info!(
        "BFS: states processed: {}, total added: {}, lookups: {}",
        stats.processed,
        stats.discovered,
        stats.lookups
    );
    match report.exploration.status {
        SearchStatus::Found(_) => log::info!("Path length: {}", report.path.len()),
        SearchStatus::Exhausted => log::warn!("No path reaches a finish cell"),
        SearchStatus::Aborted => log::warn!(
            "Search aborted after {} expansions without reaching a finish cell",
            stats.processed
        ),
    }

    log::info!("Writing the path to {} ...", cli.output.display());
    save_track(&track, &cli.output)?;
    log::info!("Done");
    Ok(report)
}
