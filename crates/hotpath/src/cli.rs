//! Command line arguments

use clap::{ArgAction, Parser};
use log::LevelFilter;
use path_trie::tree::DEFAULT_SEPARATOR;
use std::path::PathBuf;

/// Find the directory that recurs most often across a list of paths.
///
/// Reads one path per line from FILE (or stdin), builds a scored path trie
/// and reports the deepest prefix shared by at least `--min-score` paths.
#[derive(Debug, Parser)]
#[command(name = "hotpath", version)]
pub struct Args {
    /// File with one path per line. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Segment separator.
    #[arg(long, short = 's', default_value_t = DEFAULT_SEPARATOR)]
    pub separator: char,

    /// Stop descending once the heaviest child is shared by fewer paths.
    #[arg(long, short = 'm', default_value_t = 2)]
    pub min_score: u64,

    /// Also list the N highest-scoring top-level entries.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Print the whole trie with scores.
    #[arg(long)]
    pub tree: bool,

    /// Increase log verbosity (repeatable).
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default log level when `RUST_LOG` is unset
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// The input file, `None` meaning stdin
    pub fn input_file(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["hotpath"]).unwrap();
        assert_eq!(args.input, None);
        assert_eq!(args.separator, '/');
        assert_eq!(args.min_score, 2);
        assert_eq!(args.top, None);
        assert!(!args.tree);
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "hotpath", "paths.txt", "-s", ".", "-m", "5", "--top", "3", "--tree", "-vv",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("paths.txt")));
        assert_eq!(args.separator, '.');
        assert_eq!(args.min_score, 5);
        assert_eq!(args.top, Some(3));
        assert!(args.tree);
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = Args::try_parse_from(["hotpath", "-"]).unwrap();
        assert_eq!(args.input_file(), None);

        let args = Args::try_parse_from(["hotpath", "list"]).unwrap();
        assert_eq!(args.input_file(), Some(&PathBuf::from("list")));
    }

    #[test]
    fn test_separator_must_be_one_char() {
        assert!(Args::try_parse_from(["hotpath", "--separator", "::"]).is_err());
    }
}
