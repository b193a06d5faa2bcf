use std::num::NonZeroUsize;

use clap::Parser;
use tally::{
    entry::{Entry, collect_entries},
    number::Kind,
    prelude::*,
    value::try_sum,
};

use crate::tables::build_entries_table;

#[derive(Parser)]
pub struct SumArgs {
    /// Entries to sum. For example: `first=34 second=12`.
    pub entries: Vec<Entry>,

    /// Coerce all the values into this kind. By default, all values must be of the same kind.
    #[clap(long, env = "TALLY_KIND")]
    pub kind: Option<Kind>,

    /// Number of threads to split the summation across.
    #[clap(long, env = "TALLY_SHARDS", default_value = "1")]
    pub shards: NonZeroUsize,

    /// Print a table of the entries and their total instead of just the total.
    #[clap(long)]
    pub table: bool,
}

impl SumArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let entries = collect_entries(self.entries)?;
        info!(n_entries = entries.len(), "collected");
        let total = try_sum(&entries, self.kind, self.shards)?;
        if self.table {
            println!("{}", build_entries_table(&entries, total));
        } else {
            println!("{total}");
        }
        Ok(())
    }
}
