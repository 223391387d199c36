// Builds the state graph for one Klondike deal and exports it as JSON.
// Usage: klondike_graph <OUTPUT_DIR> [--deck FILE | --seed N] [--max-depth N] [--strategy bfs|dfs]

use std::path::PathBuf;
use std::time::Duration;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use klondike_graph::core::{deck_to_string, load_deck, random_deck, DefaultRanker, Table, DEFAULT_MAX_DEPTH};
use klondike_graph::state_graph::{describe_populate, get_graph_info, get_json_data, GenerateLimits, StateGraph};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Every reachable table up to the depth limit
    Bfs,
    /// A single greedy path, stops at the first win or when the path runs dry
    Dfs,
}

#[derive(Parser, Debug)]
#[command(name = "klondike_graph")]
#[command(about = "Explore the reachable state graph of a Klondike deal")]
struct Cli {
    /// Directory that receives graph.json
    output_dir: PathBuf,

    /// Deck file with 52 card tokens such as `10♣` or `A♠`
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Seed for the random deal, ignored when --deck is given
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop expanding nodes at this depth. Breadth-first defaults to a small
    /// depth, depth-first is unbounded unless given
    #[arg(short = 'm', long)]
    max_depth: Option<usize>,

    /// Stop once the graph holds this many nodes
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Wall-clock budget in seconds
    #[arg(short, long)]
    timeout: Option<f64>,

    #[arg(long, value_enum, default_value_t = Strategy::Bfs)]
    strategy: Strategy,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let deck = match &cli.deck {
        Some(path) => load_deck(path)?,
        None => random_deck(cli.seed),
    };
    info!("deck: {}", deck_to_string(&deck));
    let table = Table::from_deck(&deck);
    info!("initial table:\n{}", table);

    let timeout = match cli.timeout {
        Some(seconds) => Some(Duration::try_from_secs_f64(seconds)?),
        None => None,
    };
    let max_depth = match cli.strategy {
        Strategy::Bfs => Some(cli.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)),
        Strategy::Dfs => cli.max_depth,
    };
    let limits = GenerateLimits {
        max_depth,
        max_nodes: cli.max_nodes,
        timeout,
    };

    let mut state_graph = StateGraph::new(table);
    let start_time = std::time::Instant::now();
    let stats = match cli.strategy {
        Strategy::Bfs => state_graph.generate_bfs(&limits),
        Strategy::Dfs => state_graph.generate_dfs(&DefaultRanker, &limits),
    };
    info!("{}", describe_populate(&stats));
    println!("Generated graph in {:?}", start_time.elapsed());
    println!("{}", get_graph_info(&state_graph));

    let export_start = std::time::Instant::now();
    let json_data = get_json_data(&state_graph, max_depth)?;
    std::fs::create_dir_all(&cli.output_dir)?;
    let out_path = cli.output_dir.join("graph.json");
    std::fs::write(&out_path, json_data)?;
    println!("State graph exported to {} in {:?}", out_path.display(), export_start.elapsed());

    Ok(())
}
