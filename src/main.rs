use avl_set::avl_tree::AvlSet;
use clap::Parser;
use log::{info, LevelFilter};
use rand::{Rng, SeedableRng, XorShiftRng};
use simplelog::{Config, SimpleLogger};
use std::process;

/// Builds an avl set one item at a time, checking every invariant after each insertion.
#[derive(Parser, Debug)]
#[command(name = "avl-set-demo", version)]
struct Args {
    /// Number of items to insert, starting from 0.
    #[arg(long, default_value_t = 100)]
    count: u32,

    /// Insert the items in a shuffled order.
    #[arg(long)]
    shuffle: bool,

    /// Seed for the shuffle.
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Raise the log level; repeat for rotation tracing.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = Args::parse();
    if let Err(error) = SimpleLogger::init(level_filter(args.verbose), Config::default()) {
        eprintln!("failed to initialize logger: {}", error);
    }

    let mut items: Vec<u32> = (0..args.count).collect();
    if args.shuffle {
        let seed = args.seed;
        let mut rng: XorShiftRng = SeedableRng::from_seed([seed, seed, seed, seed | 1]);
        rng.shuffle(&mut items);
    }

    let mut set = AvlSet::new();
    for item in &items {
        info!("inserting {}", item);
        set.add(*item);
        if let Err(error) = set.check() {
            eprintln!("invariant violated after inserting {}: {}", item, error);
            process::exit(1);
        }
    }

    for item in &items {
        if !set.contains(item) {
            eprintln!("missing item {}", item);
            process::exit(1);
        }
    }

    println!("final set contains {}", set);
    println!("final set is {}", set.structure());
}
