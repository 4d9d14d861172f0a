mod cli;
mod input;
mod report;

use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use path_trie::prelude::*;

use crate::cli::Args;
use crate::report::{render_tree, Report};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let paths = input::read_paths(args.input_file().map(|p| p.as_path()))?;

    let mut trie = PathTrie::with_separator(args.separator);
    let total = trie.extend(&paths);
    info!(
        "Built trie with {} nodes from {} paths",
        trie.node_count(),
        total
    );

    if args.tree {
        print!("{}", render_tree(&trie));
    }

    let report = Report::new(&trie, total, args.min_score, args.top);
    debug!("{:?}", report);
    print!("{}", report);

    Ok(())
}
