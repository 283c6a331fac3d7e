use crate::aggregation::CategoryCount;
use crate::grouping::{
    group_and_filter, group_other_contests, ContestProblems, OfficialFamily, ProblemsByContest,
};
use crate::models::{Contest, Submission, Verdict};
use crate::submission::{extract_problem_ids_by_users, SubmissionsByProblem};
use chrono::{DateTime, Local, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

// 表で「不正解」として扱う判定
static WRONG_RESULTS: Lazy<HashSet<Verdict>> = Lazy::new(|| {
    HashSet::from([
        Verdict::WrongAnswer,
        Verdict::TimeLimitExceeded,
        Verdict::MemoryLimitExceeded,
        Verdict::RuntimeError,
    ])
});

/// ユーザとライバルの提出から作る、問題ごとの状態の集合
pub struct ProblemStatusSets<'a> {
    pub accepted: HashSet<&'a str>,
    pub wrong: SubmissionsByProblem<'a>,
    pub rival_accepted: HashSet<&'a str>,
}

impl<'a> ProblemStatusSets<'a> {
    pub fn new(submissions: &'a [Submission], user_id: &str, rivals: &[String]) -> Self {
        let user: HashSet<String> = HashSet::from([String::from(user_id)]);
        let rivals: HashSet<String> = rivals.iter().cloned().collect();

        let accepted = extract_problem_ids_by_users(submissions, &user, None)
            .into_keys()
            .collect();
        let wrong = extract_problem_ids_by_users(submissions, &user, Some(&*WRONG_RESULTS));
        let rival_accepted = extract_problem_ids_by_users(submissions, &rivals, None)
            .into_keys()
            .collect();

        Self {
            accepted,
            wrong,
            rival_accepted,
        }
    }

    pub fn cell_status(&self, problem_id: &str) -> CellStatus {
        if self.accepted.contains(problem_id) {
            CellStatus::Accepted
        } else if self.rival_accepted.contains(problem_id) {
            CellStatus::RivalAccepted
        } else if self.wrong.contains_key(problem_id) {
            CellStatus::Rejected
        } else {
            CellStatus::Unsolved
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    Accepted,
    RivalAccepted,
    Rejected,
    Unsolved,
}

#[derive(Debug, Serialize)]
pub struct ProblemCell {
    pub problem_id: String,
    pub title: String,
    pub status: CellStatus,
    pub wrong_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ContestRow {
    pub contest_id: String,
    pub contest_title: String,
    pub start_at: DateTime<Local>,
    pub cells: Vec<ProblemCell>,
}

impl ContestRow {
    fn new(group: &ContestProblems<'_>, statuses: &ProblemStatusSets<'_>) -> Self {
        let (contest, problems) = group;
        let start_at = Local
            .timestamp_opt(contest.start_epoch_second, 0)
            .earliest()
            .unwrap_or(DateTime::<Utc>::MIN_UTC.with_timezone(&Local));

        let cells = problems
            .iter()
            .map(|problem| ProblemCell {
                problem_id: problem.id.clone(),
                title: problem.title.clone(),
                status: statuses.cell_status(&problem.id),
                wrong_count: statuses
                    .wrong
                    .get(problem.id.as_str())
                    .map(|submissions| submissions.len())
                    .unwrap_or(0),
            })
            .collect();

        Self {
            contest_id: contest.id.clone(),
            contest_title: contest.title.clone(),
            start_at,
            cells,
        }
    }
}

/// カテゴリ別の表の1ブロック
///
/// 公式コンテストは問題の記号を見出しに持つ表、それ以外は小さな一覧として表示する。
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryBlock {
    Official {
        family: OfficialFamily,
        title: String,
        header: Vec<String>,
        rows: Vec<ContestRow>,
    },
    Others {
        rows: Vec<ContestRow>,
    },
}

impl CategoryBlock {
    pub fn rows(&self) -> &[ContestRow] {
        match self {
            CategoryBlock::Official { rows, .. } => rows,
            CategoryBlock::Others { rows } => rows,
        }
    }
}

/// AGC, ABC, ARC, その他のコンテストの順にブロックを作る
pub fn category_blocks(
    contests: &[Contest],
    problems_by_contest: &ProblemsByContest<'_>,
    statuses: &ProblemStatusSets<'_>,
) -> Vec<CategoryBlock> {
    let mut blocks: Vec<CategoryBlock> = OfficialFamily::ALL
        .iter()
        .map(|family| {
            let rows = group_and_filter(contests, problems_by_contest, &family.filter())
                .iter()
                .map(|group| ContestRow::new(group, statuses))
                .collect();

            CategoryBlock::Official {
                family: *family,
                title: String::from(family.title()),
                header: family.header(),
                rows,
            }
        })
        .collect();

    let rows = group_other_contests(contests, problems_by_contest)
        .iter()
        .map(|group| ContestRow::new(group, statuses))
        .collect();
    blocks.push(CategoryBlock::Others { rows });

    blocks
}

/// 円グラフ1つ分の値
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChartEntry {
    pub title: String,
    pub accepted: u32,
    pub rejected: u32,
    pub trying: u32,
}

impl From<CategoryCount> for PieChartEntry {
    fn from(value: CategoryCount) -> Self {
        Self {
            title: value.category.to_string(),
            accepted: value.solved,
            rejected: value.rejected,
            trying: value.trying(),
        }
    }
}
