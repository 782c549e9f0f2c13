use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rookery_core::Board;

/// Moves played when none are given on the command line.
const DEFAULT_MOVES: [(&str, &str); 4] =
    [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")];

/// Demo settings taken from the command line.
struct DemoConfig {
    /// `(start, end)` pairs in algebraic notation.
    moves: Vec<(String, String)>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            moves: DEFAULT_MOVES
                .iter()
                .map(|&(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

impl DemoConfig {
    /// Build from `[START END]...`; no arguments selects the default opening.
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let args: Vec<String> = args.into_iter().collect();
        if args.is_empty() {
            return Ok(Self::default());
        }
        if args.len() % 2 != 0 {
            bail!("expected pairs of squares, got {} arguments", args.len());
        }
        let moves = args
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect();
        Ok(Self { moves })
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = DemoConfig::from_args(std::env::args().skip(1))?;
    info!(moves = config.moves.len(), "rookery starting");

    let mut board = Board::starting_position();
    println!("{}\n", board.pretty());

    for (from, to) in &config.moves {
        board
            .move_piece(from, to)
            .with_context(|| format!("cannot move {from} to {to}"))?;
        info!(%from, %to, "moved");
        println!("{}\n", board.pretty());
    }

    Ok(())
}
