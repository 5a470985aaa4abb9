use anyhow::{Context, Result};
use bst::input::{parse_keys, EXAMPLE_SETS};
use bst::session::Session;
use bst::Order;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bst-walk",
    about = "Build a binary search tree and walk it breadth-first, preorder, inorder or postorder"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert comma-separated keys in order and print the traversals.
    Walk {
        /// Keys to insert, e.g. "8,3,10,1,6,14,4,7,13".
        #[arg(allow_hyphen_values = true)]
        keys: String,
        /// Traversal to print (breadth-first, preorder, inorder, postorder). Repeatable;
        /// defaults to all four.
        #[arg(long = "order", short = 'o')]
        orders: Vec<Order>,
    },
    /// Insert comma-separated keys in order, then look for one key.
    Search {
        /// Keys to insert.
        #[arg(allow_hyphen_values = true)]
        keys: String,
        /// Key to look for.
        #[arg(allow_hyphen_values = true)]
        key: i64,
    },
    /// Walk the sample book catalogue.
    Catalog {
        /// Traversal to print.
        #[arg(long, short = 'o', default_value = "inorder")]
        order: Order,
    },
    /// Print every traversal of the built-in example key sets.
    Examples,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    for line in run(cli.command)? {
        println!("{}", line);
    }

    Ok(())
}

/// Runs one subcommand and returns the lines it prints.
fn run(command: Commands) -> Result<Vec<String>> {
    Ok(match command {
        Commands::Walk { keys, orders } => walk(&keys, orders)?,
        Commands::Search { keys, key } => vec![search(&keys, key)?],
        Commands::Catalog { order } => catalog(order),
        Commands::Examples => examples(),
    })
}

fn load(keys: &str) -> Result<Session> {
    let keys = parse_keys(keys).with_context(|| format!("failed to read keys from {:?}", keys))?;
    let mut session = Session::new();
    session.load_keys(keys);
    Ok(session)
}

fn walk(keys: &str, orders: Vec<Order>) -> Result<Vec<String>> {
    let session = load(keys)?;
    let orders = if orders.is_empty() {
        Order::ALL.to_vec()
    } else {
        orders
    };
    Ok(orders
        .into_iter()
        .map(|order| order_line(&session, order))
        .collect())
}

fn search(keys: &str, key: i64) -> Result<String> {
    let session = load(keys)?;
    let found = if session.search(key) {
        "found"
    } else {
        "not found"
    };
    Ok(found.to_string())
}

fn catalog(order: Order) -> Vec<String> {
    let session = Session::with_sample_catalog();
    let mut lines = vec![format!("{}:", order)];
    lines.extend(session.render(order));
    lines
}

fn examples() -> Vec<String> {
    let mut session = Session::new();
    let mut lines = Vec::new();
    for keys in EXAMPLE_SETS {
        session.load_keys(keys.iter().copied());
        lines.push(format!("keys: {}", join(keys.iter().map(i64::to_string))));
        lines.extend(Order::ALL.iter().map(|&order| order_line(&session, order)));
        lines.push(String::new());
    }
    lines
}

/// `<order>: k1, k2, ...`
fn order_line(session: &Session, order: Order) -> String {
    format!("{}: {}", order, join(session.render(order)))
}

fn join(items: impl IntoIterator<Item = String>) -> String {
    items.into_iter().collect::<Vec<_>>().join(", ")
}
