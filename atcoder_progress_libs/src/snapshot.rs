use crate::aggregation::{aggregate, CategoryCount};
use crate::grouping::{problems_by_contest, ProblemsByContest};
use crate::models::{Contest, Problem, Submission};
use crate::submission::{index_by_problem, SubmissionsByProblem};
use crate::view::{category_blocks, CategoryBlock, ProblemStatusSets};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use thiserror::Error;

type Result<T> = std::result::Result<T, SnapshotError>;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to deserialize JSON data in {path}")]
    DeserializeError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("required file {0} not found")]
    FileNotFoundError(PathBuf),
}

/// 集計の入力となるコンテスト・問題・提出の一式
#[derive(Debug, Clone, Default)]
pub struct DataSnapshot {
    pub contests: Vec<Contest>,
    pub problems: Vec<Problem>,
    pub submissions: Vec<Submission>,
}

impl DataSnapshot {
    pub fn new(contests: Vec<Contest>, problems: Vec<Problem>, submissions: Vec<Submission>) -> Self {
        Self {
            contests,
            problems,
            submissions,
        }
    }

    pub fn contests_by_id(&self) -> HashMap<&str, &Contest> {
        self.contests
            .iter()
            .map(|contest| (contest.id.as_str(), contest))
            .collect()
    }

    pub fn contest_to_problems(&self) -> ProblemsByContest<'_> {
        problems_by_contest(&self.problems)
    }

    pub fn submissions_by_problem(&self) -> SubmissionsByProblem<'_> {
        index_by_problem(&self.submissions)
    }

    /// ユーザのカテゴリごとの集計結果を求める
    pub fn category_counts(&self, user_id: &str) -> Vec<CategoryCount> {
        aggregate(
            &self.contest_to_problems(),
            &self.contests_by_id(),
            &self.submissions_by_problem(),
            user_id,
        )
    }

    /// カテゴリ別の表を作る
    pub fn category_view(&self, user_id: &str, rivals: &[String]) -> Vec<CategoryBlock> {
        let statuses = ProblemStatusSets::new(&self.submissions, user_id, rivals);
        category_blocks(&self.contests, &self.contest_to_problems(), &statuses)
    }
}

#[async_trait]
pub trait LoadSnapshot {
    async fn load(&self) -> Result<DataSnapshot>;
}

/// ディレクトリに保存されたJSONファイルからスナップショットを読み込む
///
/// ```text
/// <dir>/contests.json
/// <dir>/problems.json
/// <dir>/submissions.json      (optional)
/// <dir>/submissions/*.json    (optional)
/// ```
pub struct DirectorySnapshotLoader {
    dir: PathBuf,
}

impl DirectorySnapshotLoader {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_owned(),
        }
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SnapshotError::ReadError {
                path: path.to_owned(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| SnapshotError::DeserializeError {
            path: path.to_owned(),
            source,
        })
    }

    async fn exists(path: &Path) -> Result<bool> {
        tokio::fs::try_exists(path)
            .await
            .map_err(|source| SnapshotError::ReadError {
                path: path.to_owned(),
                source,
            })
    }

    async fn is_dir(path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }

    async fn read_required<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>> {
        let path = self.dir.join(filename);
        if !Self::exists(&path).await? {
            tracing::error!("{} doesn't exist", path.display());
            return Err(SnapshotError::FileNotFoundError(path));
        }

        Self::read_json(&path).await
    }

    async fn read_submissions(&self) -> Result<Vec<Submission>> {
        let mut submissions: Vec<Submission> = Vec::new();

        let path = self.dir.join("submissions.json");
        if Self::exists(&path).await? {
            let mut chunk: Vec<Submission> = Self::read_json(&path).await?;
            tracing::info!("{} submissions loaded from {}", chunk.len(), path.display());
            submissions.append(&mut chunk);
        }

        let dir = self.dir.join("submissions");
        if Self::is_dir(&dir).await {
            let mut paths: Vec<PathBuf> = Vec::new();
            let mut entries =
                tokio::fs::read_dir(&dir)
                    .await
                    .map_err(|source| SnapshotError::ReadError {
                        path: dir.clone(),
                        source,
                    })?;
            while let Some(entry) =
                entries
                    .next_entry()
                    .await
                    .map_err(|source| SnapshotError::ReadError {
                        path: dir.clone(),
                        source,
                    })?
            {
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                    paths.push(path);
                }
            }
            paths.sort();

            for path in paths.iter() {
                let mut chunk: Vec<Submission> = Self::read_json(path).await?;
                tracing::info!("{} submissions loaded from {}", chunk.len(), path.display());
                submissions.append(&mut chunk);
            }
        }

        Ok(submissions)
    }
}

#[async_trait]
impl LoadSnapshot for DirectorySnapshotLoader {
    async fn load(&self) -> Result<DataSnapshot> {
        tracing::info!("Start to load data snapshot from {}", self.dir.display());

        let contests: Vec<Contest> = self.read_required("contests.json").await?;
        let problems: Vec<Problem> = self.read_required("problems.json").await?;
        let submissions = self.read_submissions().await?;

        tracing::info!(
            "{} contests, {} problems and {} submissions successfully loaded.",
            contests.len(),
            problems.len(),
            submissions.len()
        );

        Ok(DataSnapshot::new(contests, problems, submissions))
    }
}
