use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_engine::{parse_coordinate_move, Color, Game, SearchEngine};
use clap::{Args, Parser, Subcommand};
use duelchess::core::{load_settings, save_settings, settings_path, SearchOverrides, Settings};
use duelchess::game::GameSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play chess against an alpha-beta engine in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    /// Difficulty level: easy, greedy, medium or hard
    #[arg(global = true, long)]
    difficulty: Option<String>,

    /// Search depth in plies
    #[arg(global = true, long)]
    depth: Option<u8>,

    /// Time budget per AI move in milliseconds (enables iterative deepening)
    #[arg(global = true, long)]
    time_ms: Option<u64>,

    /// Use the blitz time control
    #[arg(global = true, long, default_value_t = false)]
    blitz: bool,

    /// Color played by the AI
    #[arg(global = true, long, value_parser = parse_color)]
    ai_color: Option<Color>,

    /// Seed for the AI's random choices
    #[arg(global = true, long)]
    seed: Option<u64>,

    /// Settings file (defaults to the user config directory)
    #[arg(global = true, long)]
    settings: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(global = true, long, default_value_t = false)]
    save_settings: bool,

    /// Log filter, e.g. `info` or `chess_engine=debug` (overrides RUST_LOG)
    #[arg(global = true, long)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play against the AI, typing moves as `e2e4` or `e7e8q`
    Play,
    /// Let the AI play both sides
    Selfplay {
        /// Maximum number of plies to play
        #[arg(long, default_value_t = 80)]
        plies: usize,
    },
    /// Print the AI's move after a sequence of coordinate moves
    Bestmove {
        /// Moves from the starting position, e.g. `e2e4 e7e5`
        moves: Vec<String>,
    },
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => Err(format!("expected white or black, got '{s}'")),
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_settings(opts: &GlobalOpts) -> Result<Settings> {
    let path = opts.settings.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path);

    settings
        .apply_overrides(&SearchOverrides {
            level: opts.difficulty.clone(),
            depth: opts.depth,
            time_ms: opts.time_ms,
            blitz: opts.blitz,
        })
        .context("Invalid search options")?;
    if let Some(color) = opts.ai_color {
        settings.ai_color = color;
    }
    if opts.seed.is_some() {
        settings.rng_seed = opts.seed;
    }

    if opts.save_settings {
        save_settings(&settings, &path)
            .with_context(|| format!("Failed to save settings to {}", path.display()))?;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global_opts.log_level.as_deref());
    let settings = resolve_settings(&cli.global_opts)?;
    info!(
        "[SETTINGS] AI plays {} at {:?}",
        settings.ai_color, settings.difficulty
    );

    match cli.command {
        Commands::Play => play(&settings),
        Commands::Selfplay { plies } => selfplay(&settings, plies),
        Commands::Bestmove { moves } => bestmove(&settings, &moves),
    }
}

fn play(settings: &Settings) -> Result<()> {
    let mut session = GameSession::new(settings);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "You play {}. Type moves like e2e4, `new` to restart, `quit` to leave.",
        session.human_color()
    );
    loop {
        if session.is_over() {
            println!("{}\n{}", session.game().board(), session.status());
            println!("{}", session.formatted_log());
            break;
        }

        if session.is_ai_turn() {
            let played = session.play_ai().context("AI failed to move")?;
            println!("AI plays {}", played.notation);
            continue;
        }

        println!("{}", session.game().board());
        if settings.show_notation && !session.move_log().is_empty() {
            println!("{}", session.formatted_log());
        }
        print!("{} to move> ", session.human_color());
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "new" => {
                session.reset();
                continue;
            }
            text => match parse_coordinate_move(text) {
                Ok((mv, promotion)) => {
                    if let Err(e) = session.play_human(mv.from, mv.to, promotion) {
                        println!("{e}");
                    }
                }
                Err(e) => println!("{e}"),
            },
        }
    }
    Ok(())
}

fn selfplay(settings: &Settings, plies: usize) -> Result<()> {
    let mut session = GameSession::new(settings);
    let opponent_color = session.human_color();
    let mut opponent = match settings.rng_seed {
        Some(seed) => {
            SearchEngine::with_seed(opponent_color, settings.difficulty, seed.wrapping_add(1))
        }
        None => SearchEngine::new(opponent_color, settings.difficulty),
    };

    for _ in 0..plies {
        if session.is_over() {
            break;
        }
        let played = if session.is_ai_turn() {
            session.play_ai()
        } else {
            session.play_engine(&mut opponent)
        }
        .context("Self-play move failed")?;
        if settings.show_notation {
            println!("{} {}", played.color, played.notation);
        }
    }

    println!("{}", session.game().board());
    println!("{}", session.formatted_log());
    println!("{}", session.status());
    Ok(())
}

fn bestmove(settings: &Settings, moves: &[String]) -> Result<()> {
    let mut game = Game::new();
    for text in moves {
        let (mv, promotion) =
            parse_coordinate_move(text).with_context(|| format!("Bad move '{text}'"))?;
        game.try_commit_move(mv.from, mv.to, promotion)
            .with_context(|| format!("Cannot play '{text}'"))?;
    }

    // The engine always answers for the side to move
    let color = game.side_to_move();
    let mut engine = match settings.rng_seed {
        Some(seed) => SearchEngine::with_seed(color, settings.difficulty, seed),
        None => SearchEngine::new(color, settings.difficulty),
    };

    match engine.best_move(&mut game) {
        Some(mv) => println!("bestmove {mv}"),
        None => {
            let status = game.game_status(color);
            if !status.is_over() {
                bail!("No move found for {color}");
            }
            println!("bestmove (none) {status}");
        }
    }
    Ok(())
}
