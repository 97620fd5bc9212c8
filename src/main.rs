use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rebuild_bst::{Node, Order, Tree};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds a tree from random values, unbalances it, and rebalances it,
/// printing the tree after each step.
#[derive(Parser, Debug)]
#[command(name = "bst-demo", version)]
struct Cli {
    /// How many random values to build the tree from.
    #[arg(long, default_value_t = 15)]
    count: usize,

    /// Random values are drawn from `0..max`.
    #[arg(long, default_value_t = 100)]
    max: u32,

    /// Seed for the random values. A fresh seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Values inserted after construction to unbalance the tree.
    #[arg(long, value_delimiter = ',', default_values_t = [150, 160, 170, 180, 190])]
    unbalance: Vec<u32>,

    /// Traversal orders to print (level, pre, in, post). Defaults to all four.
    #[arg(long = "order")]
    orders: Vec<Order>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.max > 0, "--max must be at least 1");
    let orders = if cli.orders.is_empty() {
        Order::ALL.to_vec()
    } else {
        cli.orders.clone()
    };

    let values = random_values(cli.count, cli.max, cli.seed);
    println!("Initial random array: {:?}", values);

    let mut tree = Tree::construct(values);
    info!(len = tree.len(), "built tree");
    println!("Is balanced? {}", tree.is_balanced());
    print_tree(&tree, &orders)?;

    for value in &cli.unbalance {
        tree.insert(*value);
    }
    println!("Inserted values to unbalance: {:?}", cli.unbalance);
    println!("Is balanced after insertions? {}", tree.is_balanced());

    tree.rebalance();
    println!("Rebalanced the tree.");
    println!("Is balanced after rebalance? {}", tree.is_balanced());
    print_tree(&tree, &orders)?;

    Ok(())
}

/// Draws `count` values uniformly from `0..max`.
fn random_values(count: usize, max: u32, seed: Option<u64>) -> Vec<u32> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    (0..count).map(|_| rng.gen_range(0..max)).collect()
}

fn print_tree(tree: &Tree<u32>, orders: &[Order]) -> Result<()> {
    for &order in orders {
        let mut values = Vec::with_capacity(tree.len());
        tree.walk(order, Some(&mut |node: &Node<u32>| values.push(node.value().to_string())))
            .with_context(|| format!("failed to print {} traversal", order))?;
        println!("{}: {}", capitalize(&order.to_string()), values.join(", "));
    }
    print!("{}", tree.pretty());

    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
