//! Example that builds a trie from a list of paths and prints it with scores
//!
//! Usage:
//!   cargo run --example print_tree [file]
//!
//! The file holds one path per line. Without it, a small built-in list is used.

use path_trie::prelude::*;
use std::env;
use std::fs;

const SAMPLE: &[&str] = &[
    "/home/alice/src/main.rs",
    "/home/alice/src/lib.rs",
    "/home/alice/notes.txt",
    "/home/bob/.bashrc",
    "/var/log/syslog",
];

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let contents = match args.get(1) {
        Some(file) => match fs::read_to_string(file) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Error reading {}: {}", file, e);
                std::process::exit(1);
            }
        },
        None => SAMPLE.join("\n"),
    };

    let mut trie = PathTrie::new();
    let inserted = trie.extend(contents.lines().filter(|l| !l.is_empty()));

    println!("Inserted {} paths into {} nodes", inserted, trie.node_count());
    println!();

    for id in trie.walk(TraversalOrder::PreOrder) {
        let Some(node) = trie.get(id) else { continue };
        if node.is_root() {
            println!("{}", trie.path(id));
            continue;
        }
        let indent = "  ".repeat(trie.depth(id));
        println!("{}{} [{}]", indent, node, node.score());
    }

    println!();
    let hottest = trie.hottest(2);
    println!(
        "Hottest prefix: {} (score {})",
        trie.path(hottest),
        trie.score(hottest)
    );
}
