pub mod demo;
pub mod sum;

use clap::{Parser, Subcommand};

use crate::cli::sum::SumArgs;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sum the built-in sample maps with the generic and non-generic functions.
    #[clap(name = "demo")]
    Demo,

    /// Sum `KEY=VALUE` entries from the command line.
    #[clap(name = "sum")]
    Sum(Box<SumArgs>),
}

#[cfg(test)]
mod tests {
    use tally::number::Kind;

    use super::*;

    #[test]
    fn test_parse_sum() {
        let args = Args::try_parse_from(["tally", "sum", "--kind", "float", "a=1", "b=2.5"]).unwrap();
        let Command::Sum(args) = args.command else {
            panic!("expected `sum`");
        };
        assert_eq!(args.kind, Some(Kind::Float));
        assert_eq!(args.shards.get(), 1);
        assert_eq!(args.entries.len(), 2);
    }

    #[test]
    fn test_parse_invalid_entry() {
        assert!(Args::try_parse_from(["tally", "sum", "a"]).is_err());
        assert!(Args::try_parse_from(["tally", "sum", "--shards", "0", "a=1"]).is_err());
    }
}
