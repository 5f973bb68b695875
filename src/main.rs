#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{init_logging, ui, AiPlayer, CliPlayer, GameError, Match, Player, Side};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Sea battle on a 6x6 board", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log level (error, warn, info, debug, trace); overrides SEA_BATTLE_LOG.
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer (default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let game = Match::new(CliPlayer::stdio(), AiPlayer::new(), seeded_rng(seed));
            run(game)
        }
        Commands::Watch { seed } => {
            let game = Match::new(AiPlayer::new(), AiPlayer::new(), seeded_rng(seed));
            run(game)
        }
    }
}

#[cfg(feature = "std")]
fn run<U: Player, C: Player>(mut game: Match<U, C, SmallRng>) -> anyhow::Result<()> {
    println!("{}", ui::greeting());
    while let Some(side) = game.active_side() {
        println!(
            "{}",
            ui::render_boards(game.grid(Side::User), game.grid(Side::Computer))
        );
        println!("{}", ui::turn_banner(side));
        let report = match game.step() {
            Ok(report) => report,
            Err(GameError::InputClosed) => {
                println!("\nInput closed, leaving the game.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        println!("{}", ui::describe_turn(&report));
        if let Some(winner) = report.winner {
            println!("{}", ui::announce_winner(winner));
        }
    }
    Ok(())
}
