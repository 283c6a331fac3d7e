use crate::cmd::{load_snapshot, print_json};
use anyhow::Result;
use clap::Args;
use std::ffi::OsString;

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[arg(long)]
    user: String,
    #[arg(long, value_delimiter = ',')]
    rivals: Vec<String>,
    #[arg(long)]
    data_dir: Option<OsString>,
}

pub async fn run(args: CategoryArgs) -> Result<()> {
    let snapshot = load_snapshot(args.data_dir).await?;

    let blocks = snapshot.category_view(&args.user, &args.rivals);
    for block in blocks.iter() {
        tracing::debug!("{} contests in block", block.rows().len());
    }
    print_json(&blocks)?;

    Ok(())
}
