//! Rubik's Cube playground
//!
//! Scrambles a 3x3 cube, applies and plays back move sequences, and edits
//! saved states by hand. States are printed as an unfolded text net and can
//! be saved to or loaded from JSON files for use by an external renderer.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cubeplay::scramble::DEFAULT_SCRAMBLE_LENGTH;
use cubeplay::{
    apply_algorithm, format_time, generate_seeded, parse_algorithm, persistence, solved_cube,
    Algorithm, Color, CubeState, Face, Playback, Result, ScrambleParams,
};

/// Scrambles, turns and inspects a 3x3 Rubik's Cube.
#[derive(Parser)]
#[command(name = "cubeplay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random scramble and show the scrambled cube.
    Scramble {
        /// Number of moves.
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
        /// Never turn the same face twice in a row.
        #[arg(long)]
        avoid_same_face: bool,
        /// Save the scrambled state to this file.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Apply a move sequence and show the result.
    Apply {
        /// Moves, e.g. `R U R' U'`.
        #[arg(required = true)]
        moves: Vec<String>,
        /// Start from a saved state instead of the solved cube.
        #[arg(long)]
        state: Option<PathBuf>,
        /// Save the resulting state to this file.
        #[arg(long)]
        save: Option<PathBuf>,
        /// Fail on unrecognized tokens instead of skipping them.
        #[arg(long)]
        strict: bool,
    },
    /// Show every intermediate state of a move sequence.
    Play {
        #[arg(required = true)]
        moves: Vec<String>,
        /// Start from a saved state instead of the solved cube.
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Print the sequence that undoes a move sequence.
    Invert {
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Paint one facelet of a saved state.
    Paint {
        /// State file to edit in place (created solved if missing).
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        face: Face,
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
        #[arg(long)]
        color: Color,
    },
    /// Format a duration in milliseconds as MM:SS.mmm.
    Time { ms: u64 },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Option<Command>) -> Result<()> {
    match command {
        Some(Command::Scramble {
            length,
            seed,
            avoid_same_face,
            save,
        }) => run_scramble(length, seed, avoid_same_face, save.as_deref()),
        Some(Command::Apply {
            moves,
            state,
            save,
            strict,
        }) => run_apply(&moves, state.as_deref(), save.as_deref(), strict),
        Some(Command::Play { moves, state }) => run_play(&moves, state.as_deref()),
        Some(Command::Invert { moves }) => run_invert(&moves),
        Some(Command::Paint {
            state,
            face,
            row,
            col,
            color,
        }) => run_paint(&state, face, row, col, color),
        Some(Command::Time { ms }) => {
            println!("{}", format_time(ms));
            Ok(())
        }
        // default: a fresh scramble with default settings
        None => run_scramble(DEFAULT_SCRAMBLE_LENGTH, None, false, None),
    }
}

/// Joins command-line tokens and parses them as one algorithm.
///
/// Lenient mode skips unrecognized tokens and reports them on stderr.
fn read_algorithm(tokens: &[String], strict: bool) -> Result<Algorithm> {
    let text = tokens.join(" ");
    if strict {
        return text.parse();
    }

    let parsed = parse_algorithm(&text);
    for skipped in &parsed.skipped {
        eprintln!(
            "Skipped unrecognized move {:?} (token {})",
            skipped.token,
            skipped.index + 1
        );
    }
    Ok(parsed.algorithm)
}

fn load_or_solved(path: Option<&Path>) -> Result<CubeState> {
    match path {
        Some(path) => persistence::load_state(path),
        None => Ok(solved_cube()),
    }
}

/// Generates a scramble, applies it to the solved cube, and prints both.
fn run_scramble(
    length: usize,
    seed: Option<u64>,
    avoid_same_face: bool,
    save: Option<&Path>,
) -> Result<()> {
    let mut params = ScrambleParams::new(length).avoiding_same_face(avoid_same_face);
    if let Some(seed) = seed {
        params = params.with_seed(seed);
    }

    let scramble = generate_seeded(&params);
    let state = apply_algorithm(&solved_cube(), &scramble);

    println!("Scramble ({} moves, seed {}): {}", scramble.len(), params.seed, scramble);
    print!("{}", state.format_net());

    if let Some(path) = save {
        persistence::save_state(path, &state)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Applies a sequence and prints the resulting net.
fn run_apply(tokens: &[String], start: Option<&Path>, save: Option<&Path>, strict: bool) -> Result<()> {
    let algorithm = read_algorithm(tokens, strict)?;
    let state = apply_algorithm(&load_or_solved(start)?, &algorithm);

    println!("Applied {} moves: {}", algorithm.len(), algorithm);
    print!("{}", state.format_net());
    println!("{}", if state.is_solved() { "Solved" } else { "Not solved" });

    if let Some(path) = save {
        persistence::save_state(path, &state)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn run_play(tokens: &[String], start: Option<&Path>) -> Result<()> {
    let algorithm = read_algorithm(tokens, false)?;
    let mut playback = Playback::new(load_or_solved(start)?, algorithm);
    print!("{}", format_playback(&mut playback));
    Ok(())
}

/// Renders every step of a playback, starting from its current position.
fn format_playback(playback: &mut Playback) -> String {
    let total = playback.len();
    let mut output = String::new();

    output.push_str(&format!("Step {}/{}\n", playback.position(), total));
    output.push_str(&playback.current().format_net());
    while let Some(mv) = playback.step_forward() {
        output.push_str(&format!("Step {}/{}: {}\n", playback.position(), total, mv));
        output.push_str(&playback.current().format_net());
    }

    output
}

fn run_invert(tokens: &[String]) -> Result<()> {
    let algorithm = read_algorithm(tokens, false)?;
    println!("{}", algorithm.inverse());
    Ok(())
}

/// Paints one facelet of a saved state, creating the file if needed.
fn run_paint(path: &Path, face: Face, row: usize, col: usize, color: Color) -> Result<()> {
    let mut state = if path.exists() {
        persistence::load_state(path)?
    } else {
        solved_cube()
    };

    state.set_facelet(face, row, col, color)?;
    if !state.has_consistent_color_counts() {
        eprintln!("Warning: color counts are inconsistent; this state cannot be reached by turning");
    }

    persistence::save_state(path, &state)?;
    print!("{}", state.format_net());
    Ok(())
}
