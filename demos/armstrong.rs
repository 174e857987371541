use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};

use armstrong_rs::attribute::AttributeSet;
use armstrong_rs::search::{find_min_agree_set_graph, SearchConfig};

/// Find a minimum Armstrong relation for a family of agree-sets.
///
/// Agree-sets are read as whitespace-separated bit strings, highest attribute first.
#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Input file with agree-sets (default: stdin).
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Largest number of tuples to try.
    #[arg(long, value_name = "INT")]
    max_nodes: Option<usize>,

    /// Limit on backtracking steps.
    #[arg(short, long = "bt", value_name = "INT", default_value_t = u32::MAX as u64)]
    bt: u64,

    /// Disable symmetry pruning.
    #[arg(long)]
    no_symmetry: bool,

    /// Print the agree-set graph in DOT format.
    #[arg(long)]
    dot: bool,

    /// Print debug information.
    #[arg(short, long)]
    debug: bool,

    /// Print trace information (including debug).
    #[arg(short, long)]
    trace: bool,
}

fn read_agree_sets(text: &str) -> color_eyre::Result<Vec<AttributeSet>> {
    let mut agree_sets: Vec<AttributeSet> = Vec::new();
    for token in text.split_whitespace() {
        let agree_set: AttributeSet = token.parse().wrap_err_with(|| format!("parsing {:?}", token))?;
        if let Some(first) = agree_sets.first() {
            if first.width() != agree_set.width() {
                bail!("agree-set {} has width {}, expected {}", agree_set, agree_set.width(), first.width());
            }
        }
        // Empty and full agree-sets carry no information.
        if !agree_set.is_empty() && !agree_set.is_full() && !agree_sets.contains(&agree_set) {
            agree_sets.push(agree_set);
        }
    }
    Ok(agree_sets)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.trace {
        simplelog::LevelFilter::Trace
    } else if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let agree_sets = read_agree_sets(&text)?;
    log::info!("read {} agree-sets", agree_sets.len());

    let mut config = SearchConfig::default()
        .with_max_steps(args.bt)
        .with_symmetry_pruning(!args.no_symmetry);
    config.max_nodes = args.max_nodes;

    let time_total = std::time::Instant::now();
    let graph = find_min_agree_set_graph(&agree_sets, &config)?;
    log::info!("search took {:?}", time_total.elapsed());

    println!("{}", graph);
    if args.dot {
        println!("{}", graph.to_dot()?);
    }
    print!("{}", graph.to_table());

    Ok(())
}
