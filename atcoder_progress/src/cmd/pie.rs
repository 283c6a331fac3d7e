use crate::cmd::{load_snapshot, print_json};
use anyhow::Result;
use atcoder_progress_libs::view::PieChartEntry;
use clap::Args;
use std::ffi::OsString;

#[derive(Debug, Args)]
pub struct PieArgs {
    #[arg(long)]
    user: String,
    #[arg(long)]
    data_dir: Option<OsString>,
}

pub async fn run(args: PieArgs) -> Result<()> {
    let snapshot = load_snapshot(args.data_dir).await?;

    let counts = snapshot.category_counts(&args.user);
    for count in counts.iter().filter(|count| count.total > 0) {
        tracing::info!(
            "{}: solved={} rejected={} trying={}",
            count.category,
            count.solved,
            count.rejected,
            count.trying()
        );
    }

    let entries: Vec<PieChartEntry> = counts.into_iter().map(PieChartEntry::from).collect();
    print_json(&entries)?;

    Ok(())
}
