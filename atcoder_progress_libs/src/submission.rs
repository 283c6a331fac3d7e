use crate::models::{Submission, Verdict};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// 問題IDごとに提出をまとめたもの
///
/// キーは各問題の提出が最初に現れた順に並ぶ。
pub type SubmissionsByProblem<'a> = IndexMap<&'a str, Vec<&'a Submission>>;

/// 提出を問題IDごとにまとめる
///
/// 各問題の提出は入力の順序を保つ。
pub fn index_by_problem(submissions: &[Submission]) -> SubmissionsByProblem<'_> {
    submissions
        .iter()
        .fold(IndexMap::new(), |mut map, submission| {
            map.entry(submission.problem_id.as_str())
                .or_insert_with(Vec::new)
                .push(submission);
            map
        })
}

/// 指定したユーザの提出のうち、判定結果が条件を満たすものを問題IDごとにまとめる
///
/// - ユーザIDは大文字小文字を区別せずに比較する
/// - `results`が`None`のときはACの提出のみを対象とする
/// - 条件を満たす提出が一つもない問題は結果に含まれない
pub fn extract_problem_ids_by_users<'a>(
    submissions: &'a [Submission],
    user_ids: &HashSet<String>,
    results: Option<&HashSet<Verdict>>,
) -> SubmissionsByProblem<'a> {
    let user_ids: HashSet<String> = user_ids.iter().map(|id| id.to_lowercase()).collect();

    submissions
        .iter()
        .filter(|submission| user_ids.contains(&submission.user_id.to_lowercase()))
        .filter(|submission| match results {
            Some(results) => results.contains(&submission.result),
            None => submission.result.is_accepted(),
        })
        .fold(IndexMap::new(), |mut map, submission| {
            map.entry(submission.problem_id.as_str())
                .or_insert_with(Vec::new)
                .push(submission);
            map
        })
}

/// あるユーザから見た問題の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProblemStatus {
    Trying,
    Rejected,
    Accepted,
}

/// 問題への提出からユーザの状態を求める
///
/// CEやWJのような有効でない判定は数えないので、それらしかない問題は`Trying`になる。
pub fn problem_status(
    submissions_by_problem: &SubmissionsByProblem<'_>,
    problem_id: &str,
    user_id: &str,
) -> ProblemStatus {
    let mut valid_submissions = submissions_by_problem
        .get(problem_id)
        .map(|submissions| submissions.as_slice())
        .unwrap_or_default()
        .iter()
        .filter(|submission| submission.is_submitted_by(user_id) && submission.result.is_valid())
        .peekable();

    if valid_submissions.peek().is_none() {
        return ProblemStatus::Trying;
    }

    if valid_submissions.any(|submission| submission.result.is_accepted()) {
        ProblemStatus::Accepted
    } else {
        ProblemStatus::Rejected
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn submissions() -> Vec<Submission> {
        vec![
            Submission::new("abc001_a", "alice", Verdict::WrongAnswer),
            Submission::new("abc001_b", "bob", Verdict::Accepted),
            Submission::new("abc001_a", "Alice", Verdict::Accepted),
            Submission::new("abc001_c", "alice", Verdict::TimeLimitExceeded),
            Submission::new("abc001_d", "alice", Verdict::CompileError),
            Submission::new("abc001_a", "bob", Verdict::RuntimeError),
        ]
    }

    fn users(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_index_by_problem_partitions_input() {
        let submissions = submissions();
        let index = index_by_problem(&submissions);

        let total: usize = index.values().map(|group| group.len()).sum();
        assert_eq!(total, submissions.len());
        for (problem_id, group) in index.iter() {
            assert!(group.iter().all(|s| s.problem_id == *problem_id));
        }

        let group_a: Vec<&str> = index["abc001_a"]
            .iter()
            .map(|s| s.user_id.as_str())
            .collect();
        assert_eq!(group_a, vec!["alice", "Alice", "bob"]);
    }

    #[test]
    fn test_index_by_problem_keeps_first_appearance_order() {
        let submissions = vec![
            Submission::new("zzz_b", "alice", Verdict::Accepted),
            Submission::new("aaa_a", "alice", Verdict::WrongAnswer),
            Submission::new("zzz_b", "bob", Verdict::Accepted),
        ];

        let index = index_by_problem(&submissions);
        assert_eq!(index.keys().cloned().collect::<Vec<_>>(), vec!["zzz_b", "aaa_a"]);

        let accepted = extract_problem_ids_by_users(
            &submissions,
            &users(&["alice", "bob"]),
            Some(&HashSet::from([Verdict::Accepted, Verdict::WrongAnswer])),
        );
        assert_eq!(
            accepted.keys().cloned().collect::<Vec<_>>(),
            vec!["zzz_b", "aaa_a"]
        );
    }

    #[test]
    fn test_index_by_problem_empty() {
        assert!(index_by_problem(&[]).is_empty());
    }

    #[test]
    fn test_extract_accepted_problems() {
        let submissions = submissions();
        let accepted = extract_problem_ids_by_users(&submissions, &users(&["ALICE"]), None);

        assert_eq!(accepted.keys().cloned().collect::<Vec<_>>(), vec!["abc001_a"]);
        assert_eq!(accepted["abc001_a"].len(), 1);
    }

    #[test]
    fn test_extract_with_result_filter() {
        let submissions = submissions();
        let results: HashSet<Verdict> = HashSet::from([
            Verdict::WrongAnswer,
            Verdict::TimeLimitExceeded,
            Verdict::MemoryLimitExceeded,
            Verdict::RuntimeError,
        ]);
        let wrong = extract_problem_ids_by_users(&submissions, &users(&["alice"]), Some(&results));

        assert_eq!(
            wrong.keys().cloned().collect::<Vec<_>>(),
            vec!["abc001_a", "abc001_c"]
        );
    }

    #[test]
    fn test_default_filter_equals_explicit_accepted_filter() {
        let submissions = submissions();
        let user_ids = users(&["alice", "bob"]);
        let accepted_only = HashSet::from([Verdict::Accepted]);

        assert_eq!(
            extract_problem_ids_by_users(&submissions, &user_ids, None),
            extract_problem_ids_by_users(&submissions, &user_ids, Some(&accepted_only))
        );
    }

    #[test]
    fn test_extract_with_no_users() {
        let submissions = submissions();
        assert!(extract_problem_ids_by_users(&submissions, &HashSet::new(), None).is_empty());
    }

    #[test]
    fn test_problem_status() {
        let submissions = submissions();
        let index = index_by_problem(&submissions);

        assert_eq!(problem_status(&index, "abc001_a", "alice"), ProblemStatus::Accepted);
        assert_eq!(problem_status(&index, "abc001_c", "alice"), ProblemStatus::Rejected);
        assert_eq!(problem_status(&index, "abc001_b", "alice"), ProblemStatus::Trying);
        assert_eq!(problem_status(&index, "abc001_d", "alice"), ProblemStatus::Trying);
        assert_eq!(problem_status(&index, "abc001_z", "alice"), ProblemStatus::Trying);
        assert_eq!(problem_status(&index, "abc001_a", "bob"), ProblemStatus::Rejected);
    }
}
