//! Policy evaluation harness: plays seeded hands between decision
//! policies and reports per-team book statistics.

mod simulator;

use clap::{Parser, ValueEnum};
use engine::ai::PolicyKind;
use engine::domain::state::Seat;
use rand::Rng;
use tracing::{debug, info};

use simulator::run_hand;

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Play seeded hands between decision policies")]
struct Args {
    /// Number of hands to simulate
    #[arg(short = 'n', long, default_value = "100")]
    hands: u32,

    /// Policy for all seats (shortcut to set all 4 seats at once)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// Policy for seat 0
    #[arg(long, default_value = "partner-aware")]
    seat0: AiType,

    /// Policy for seat 1
    #[arg(long, default_value = "baseline")]
    seat1: AiType,

    /// Policy for seat 2
    #[arg(long, default_value = "partner-aware")]
    seat2: AiType,

    /// Policy for seat 3
    #[arg(long, default_value = "baseline")]
    seat3: AiType,

    /// Base seed; hand i plays with seed + i. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AiType {
    Baseline,
    PartnerAware,
    Random,
}

impl From<AiType> for PolicyKind {
    fn from(ai: AiType) -> Self {
        match ai {
            AiType::Baseline => PolicyKind::Baseline,
            AiType::PartnerAware => PolicyKind::PartnerAware,
            AiType::Random => PolicyKind::Random,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let kinds: [PolicyKind; 4] = match args.seats {
        Some(all) => [all.into(); 4],
        None => [
            args.seat0.into(),
            args.seat1.into(),
            args.seat2.into(),
            args.seat3.into(),
        ],
    };
    let base_seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(hands = args.hands, ?kinds, base_seed, "starting simulation");

    let mut total_books = [0u64; 2];
    let mut wins = [0u64; 2];
    for i in 0..args.hands {
        let seed = base_seed.wrapping_add(u64::from(i));
        let dealer = (i % 4) as Seat;
        let outcome = run_hand(dealer, seed, kinds)?;
        total_books[0] += u64::from(outcome.books[0]);
        total_books[1] += u64::from(outcome.books[1]);
        wins[outcome.winning_team as usize] += 1;
        debug!(hand = i, seed, books = ?outcome.books, winner = outcome.winning_team, "hand finished");
    }

    for team in 0..2u8 {
        info!(
            team,
            seats = ?simulator::team_seats(team),
            wins = wins[team as usize],
            books = total_books[team as usize],
            "team totals"
        );
    }
    Ok(())
}
