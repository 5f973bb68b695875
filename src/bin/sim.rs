use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{AiPlayer, Match};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program = args.first().map_or("sim", String::as_str);
        eprintln!("Usage: {} <seed>", program);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    sea_battle::init_logging(None);

    let mut game = Match::new(AiPlayer::new(), AiPlayer::new(), SmallRng::seed_from_u64(seed));
    game.play()?;
    let summary = game
        .summary()
        .ok_or_else(|| anyhow::anyhow!("match ended without a winner"))?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
