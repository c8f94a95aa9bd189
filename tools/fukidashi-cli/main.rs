use clap::{Parser, ValueEnum};
use fukidashi::prelude::*;
use itertools::Itertools;
use std::fs;
use std::time::Instant;

/// How the resolved tree is printed.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Tree,
    Json,
}

/// Resolves Flex Message documents into visual trees
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the Flex Message JSON file
    message_path: String,

    /// How to print the resolved tree
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Write the resolved tree as JSON to this path
    #[arg(short, long)]
    output: Option<String>,

    /// Fail on components with an unrecognized type instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    run_resolution(cli);
}

fn run_resolution(cli: Cli) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let json = fs::read_to_string(&cli.message_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read message file '{}': {}",
            &cli.message_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Resolution ---
    let policy = if cli.strict {
        UnknownComponentPolicy::Reject
    } else {
        UnknownComponentPolicy::Skip
    };
    let resolver = Resolver::builder().with_unknown_components(policy).build();

    let resolve_start = Instant::now();
    let message = resolver
        .resolve_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Resolution failed: {}", e)));
    let resolve_duration = resolve_start.elapsed();

    // --- 3. Output ---
    if !cli.quiet {
        match cli.format {
            OutputFormat::Tree => println!("{}", DisplayTree::new(&message)),
            OutputFormat::Json => {
                let json = message
                    .to_json_string()
                    .unwrap_or_else(|e| exit_with_error(&e.to_string()));
                println!("{}", json);
            }
        }
    }
    if let Some(path) = &cli.output {
        message
            .save_json(path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        println!("Resolved tree written to '{}'", path);
    }

    // --- 4. Summary ---
    let total_duration = total_start.elapsed();
    let counts = message.kind_counts();
    println!("\n--- Message Summary ---");
    println!("Alt Text:             {}", message.alt_text);
    println!("Bubbles:              {}", message.bubbles().len());
    println!("Resolved Nodes:       {}", counts.values().sum::<usize>());
    for (kind, count) in counts.iter().sorted() {
        println!("  {:<20}{}", kind, count);
    }

    println!("\n--- Performance Summary ---");
    println!("File Loading:         {:?}", load_duration);
    println!("Resolution:           {:?}", resolve_duration);
    println!("-----------------------------");
    println!("Total Execution:      {:?}", total_duration);
    println!("Unknown Components:   {:?}", policy);
    println!();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
