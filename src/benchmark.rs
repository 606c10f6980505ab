use clap::Parser;
use classic_ds::ordered_tree::OrderedTree;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A tree performance testing tool")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    println!("Running with {} node count and seed {}", args.size, args.seed);

    // Shuffle the values first: the tree does not rebalance, so sorted
    // inserts would turn it into a list and time the worst case instead.
    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let mut values: Vec<usize> = (0..args.size).collect();
    values.shuffle(&mut rng);

    let mut tree = OrderedTree::new();

    let start = Instant::now();
    for (i, &value) in values.iter().enumerate() {
        assert_eq!(tree.len(), i);
        tree.insert(value);
        assert!(tree.contains(&value));
    }
    let inserted = Instant::now();
    for value in 0..args.size {
        assert!(tree.contains(&value));
    }
    let checked_contains = Instant::now();
    let walked: usize = tree.iter().count();
    assert_eq!(walked, args.size);
    let iterated = Instant::now();
    for &value in values.iter() {
        assert!(tree.remove(&value));
    }
    let end = Instant::now();

    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Checking contains took {} seconds",
        checked_contains
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    println!(
        "In-order walk took {} seconds",
        iterated
            .saturating_duration_since(checked_contains)
            .as_secs_f32()
    );
    println!(
        "Removals took {} seconds",
        end.saturating_duration_since(iterated).as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}
