//! CLI entry point for the `primer` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use primer_structures::cli::commands::{self, GraphDemo, StackVariant};
use primer_structures::cli::{exit_code, EXIT_INVALID_ARGUMENT};
use primer_structures::DEFAULT_BUCKET_COUNT;

#[derive(Parser)]
#[command(
    name = "primer",
    about = "Walkthroughs of foundational data structures"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build adjacency-list graphs and enumerate their edges
    Graph {
        /// Which walkthrough: undirected, directed, weighted, or all
        #[arg(long, default_value = "all")]
        kind: String,
    },
    /// Index-addressed array operations
    Array,
    /// Separate-chaining hash table operations
    HashTable {
        /// Number of buckets
        #[arg(long, default_value_t = DEFAULT_BUCKET_COUNT)]
        buckets: usize,
    },
    /// Singly linked list operations
    LinkedList,
    /// LIFO stack operations
    Stack {
        /// Implementation: array or linked
        #[arg(long, default_value = "array")]
        variant: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Graph { kind } => {
            let demo = match GraphDemo::from_name(&kind) {
                Some(demo) => demo,
                None => {
                    eprintln!("Invalid graph kind: {}", kind);
                    process::exit(EXIT_INVALID_ARGUMENT);
                }
            };
            commands::cmd_graph(demo, json)
        }
        Commands::Array => commands::cmd_array(json),
        Commands::HashTable { buckets } => commands::cmd_hash_table(buckets, json),
        Commands::LinkedList => commands::cmd_linked_list(json),
        Commands::Stack { variant } => {
            let variant = match StackVariant::from_name(&variant) {
                Some(v) => v,
                None => {
                    eprintln!("Invalid stack variant: {}", variant);
                    process::exit(EXIT_INVALID_ARGUMENT);
                }
            };
            commands::cmd_stack(variant, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}
