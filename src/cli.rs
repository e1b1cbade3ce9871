use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "doctree", version, disable_version_flag = true)]
#[command(about = "Print a directory tree in README style", long_about = None)]
pub struct Cli {
    /// Root directory to print (defaults to the current directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Maximum recursion depth; -1 means unlimited
    #[arg(short = 'd', long, default_value_t = -1, allow_negative_numbers = true)]
    pub depth: i64,

    /// Write the tree to this file instead of standard output
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print version information and exit
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    /// `-1` is the unlimited sentinel; other negatives degrade to depth 0,
    /// the same as the `depth >= max` cutoff they would hit immediately.
    pub fn max_depth(&self) -> Option<usize> {
        match self.depth {
            -1 => None,
            depth => Some(usize::try_from(depth).unwrap_or(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_sentinel_maps_to_unlimited() {
        let cli = Cli::parse_from(["doctree", "-d", "-1"]);
        assert_eq!(cli.max_depth(), None);
    }

    #[test]
    fn non_negative_depth_is_passed_through() {
        let cli = Cli::parse_from(["doctree", "--depth", "3"]);
        assert_eq!(cli.max_depth(), Some(3));
    }

    #[test]
    fn other_negative_depths_clamp_to_zero() {
        let cli = Cli::parse_from(["doctree", "-d", "-5"]);
        assert_eq!(cli.max_depth(), Some(0));
    }

    #[test]
    fn root_defaults_to_current_directory() {
        let cli = Cli::parse_from(["doctree"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.max_depth(), None);
        assert!(cli.output.is_none());
    }
}
