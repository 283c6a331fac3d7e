use crate::classifier::{classify, ContestCategory};
use crate::grouping::ProblemsByContest;
use crate::models::Contest;
use crate::submission::{problem_status, ProblemStatus, SubmissionsByProblem};
use serde::Serialize;
use std::collections::HashMap;

/// カテゴリごとの問題数の集計結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: ContestCategory,
    pub solved: u32,
    pub rejected: u32,
    pub total: u32,
}

impl CategoryCount {
    pub fn new(category: ContestCategory) -> Self {
        Self {
            category,
            solved: 0,
            rejected: 0,
            total: 0,
        }
    }

    /// 提出していない、または有効な判定の提出がない問題の数
    pub fn trying(&self) -> u32 {
        self.total
            .saturating_sub(self.solved)
            .saturating_sub(self.rejected)
    }

    fn add(&mut self, status: ProblemStatus) {
        match status {
            ProblemStatus::Accepted => self.solved += 1,
            ProblemStatus::Rejected => self.rejected += 1,
            ProblemStatus::Trying => {}
        }
        self.total += 1;
    }
}

/// ユーザの問題の状態をコンテストのカテゴリごとに集計する
///
/// 結果は`ContestCategory::ALL`の順に並ぶ。コンテスト情報が見つからない問題は集計に含めない。
pub fn aggregate(
    contest_to_problems: &ProblemsByContest<'_>,
    contests_by_id: &HashMap<&str, &Contest>,
    submissions_by_problem: &SubmissionsByProblem<'_>,
    user_id: &str,
) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = ContestCategory::ALL
        .iter()
        .map(|category| CategoryCount::new(*category))
        .collect();

    for (contest_id, problems) in contest_to_problems.iter() {
        let contest = match contests_by_id.get(*contest_id) {
            Some(contest) => contest,
            None => {
                tracing::debug!(
                    "contest {} is not found, so its {} problems are skipped",
                    contest_id,
                    problems.len()
                );
                continue;
            }
        };

        let count = &mut counts[classify(contest).index()];
        for problem in problems.iter() {
            count.add(problem_status(submissions_by_problem, &problem.id, user_id));
        }
    }

    counts
}
