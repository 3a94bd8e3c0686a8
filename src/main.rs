use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use avl_console::AvlTree;

/// Interactive console for an AVL tree of integer keys
#[derive(Parser, Debug)]
#[command(name = "avl-console")]
#[command(about = "Build and inspect an AVL tree of integer keys", long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Do not print the menu before each prompt
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut tree = AvlTree::new();

    loop {
        if !args.quiet {
            print_menu();
        }
        print!("Enter your choice: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            // End of input closes the session like an explicit exit
            None => break,
            Some(line) => line?,
        };

        match line.trim() {
            "1" => {
                if let Some(key) = prompt_key(&mut lines, "Enter a value to insert: ")? {
                    if tree.insert(key) {
                        debug!(key, len = tree.len(), "inserted");
                        println!("Inserted: {key}");
                    } else {
                        println!("{key} is already in the tree");
                    }
                    print_tree(&tree);
                }
            }
            "2" => {
                if let Some(key) = prompt_key(&mut lines, "Enter a value to delete: ")? {
                    if tree.remove(&key) {
                        debug!(key, len = tree.len(), "deleted");
                        println!("Deleted: {key}");
                    } else {
                        println!("{key} is not in the tree");
                    }
                    print_tree(&tree);
                }
            }
            "3" => {
                println!("AVL tree with balance factors:");
                print_tree(&tree);
            }
            "4" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("AVL tree operations:");
    println!("1. Insert");
    println!("2. Delete");
    println!("3. Print tree with balance factors");
    println!("4. Exit");
}

/// Prompts for an integer key on the next input line.
/// Returns None at end of input or if the line does not parse;
/// a malformed line is reported and must not wedge the loop.
fn prompt_key(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<i64>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let line = match lines.next() {
        None => return Ok(None),
        Some(line) => line?,
    };

    match line.trim().parse() {
        Ok(key) => Ok(Some(key)),
        Err(_) => {
            println!("Not an integer: {}", line.trim());
            Ok(None)
        }
    }
}

/// Renders the tree one line per depth level, each entry formatted
/// as key(balance factor).
fn print_tree(tree: &AvlTree) {
    for level in tree.levels() {
        let entries: Vec<String> = level
            .iter()
            .map(|(key, balance)| format!("{key}({balance})"))
            .collect();
        println!("{}", entries.join(" "));
    }
}
