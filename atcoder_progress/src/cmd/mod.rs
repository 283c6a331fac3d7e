pub mod category;
pub mod pie;
pub mod server;

use anyhow::{Context, Result};
use atcoder_progress_libs::{DataSnapshot, DirectorySnapshotLoader, LoadSnapshot};
use serde::Serialize;
use std::{env, ffi::OsString, io::Write, path::PathBuf};

/// スナップショットの保存先ディレクトリを決める
///
/// コマンドライン引数が指定されていなければ環境変数`SNAPSHOT_DIRECTORY`を使う。
pub fn resolve_data_dir(data_dir: Option<OsString>) -> Result<PathBuf> {
    match data_dir {
        Some(path) => Ok(PathBuf::from(path)),
        None => match env::var("SNAPSHOT_DIRECTORY") {
            Ok(path) => Ok(PathBuf::from(path)),
            Err(e) => {
                let message = format!("couldn't determine snapshot directory {:?}", e);
                tracing::error!(message);
                anyhow::bail!(message)
            }
        },
    }
}

pub async fn load_snapshot(data_dir: Option<OsString>) -> Result<DataSnapshot> {
    let data_dir = resolve_data_dir(data_dir)?;
    let loader = DirectorySnapshotLoader::new(&data_dir);

    loader.load().await.with_context(|| {
        let message = format!("failed to load data snapshot from {}", data_dir.display());
        tracing::error!(message);
        message
    })
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    serde_json::to_writer_pretty(&mut writer, value).context("failed to write JSON")?;
    writeln!(writer)?;

    Ok(())
}
