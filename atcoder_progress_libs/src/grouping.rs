use crate::classifier::{ContestCategory, RE_ABC, RE_AGC, RE_ARC};
use crate::models::{Contest, Problem};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// コンテストIDごとにまとめた問題
pub type ProblemsByContest<'a> = BTreeMap<&'a str, Vec<&'a Problem>>;

/// コンテストと、そのコンテストに属する問題の組
pub type ContestProblems<'a> = (&'a Contest, Vec<&'a Problem>);

static RE_OFFICIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^a[rgb]c\d{3}").unwrap());

/// コンテストIDに対する絞り込み条件
#[derive(Debug, Clone)]
pub enum ContestFilter {
    /// パターンにマッチするIDのみを残す
    Matching(Regex),
    /// パターンにマッチしないIDのみを残す
    Excluding(Regex),
}

impl ContestFilter {
    pub fn is_match(&self, contest_id: &str) -> bool {
        match self {
            ContestFilter::Matching(pattern) => pattern.is_match(contest_id),
            ContestFilter::Excluding(pattern) => !pattern.is_match(contest_id),
        }
    }

    /// 公式コンテスト(ABC, ARC, AGC)以外のコンテストを残す条件
    pub fn others() -> Self {
        ContestFilter::Excluding(Regex::clone(&RE_OFFICIAL))
    }
}

/// AtCoderの公式コンテストシリーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OfficialFamily {
    #[serde(rename = "AGC")]
    Agc,
    #[serde(rename = "ABC")]
    Abc,
    #[serde(rename = "ARC")]
    Arc,
}

impl OfficialFamily {
    pub const ALL: [OfficialFamily; 3] = [
        OfficialFamily::Agc,
        OfficialFamily::Abc,
        OfficialFamily::Arc,
    ];

    pub fn filter(&self) -> ContestFilter {
        let pattern = match self {
            OfficialFamily::Agc => &RE_AGC,
            OfficialFamily::Abc => &RE_ABC,
            OfficialFamily::Arc => &RE_ARC,
        };
        ContestFilter::Matching(Regex::clone(pattern))
    }

    pub fn title(&self) -> &'static str {
        match self {
            OfficialFamily::Agc => "AtCoder Grand Contest",
            OfficialFamily::Abc => "AtCoder Beginner Contest",
            OfficialFamily::Arc => "AtCoder Regular Contest",
        }
    }

    /// 表の見出しに使う問題の記号
    pub fn header(&self) -> Vec<String> {
        let letters = match self {
            OfficialFamily::Agc => "ABCDEF",
            OfficialFamily::Abc | OfficialFamily::Arc => "ABCD",
        };
        letters.chars().map(String::from).collect()
    }

    pub fn category(&self) -> ContestCategory {
        match self {
            OfficialFamily::Agc => ContestCategory::Agc,
            OfficialFamily::Abc => ContestCategory::Abc,
            OfficialFamily::Arc => ContestCategory::Arc,
        }
    }
}

/// 問題を所属するコンテストのIDごとにまとめる
pub fn problems_by_contest(problems: &[Problem]) -> ProblemsByContest<'_> {
    problems.iter().fold(BTreeMap::new(), |mut map, problem| {
        map.entry(problem.contest_id.as_str())
            .or_insert_with(Vec::new)
            .push(problem);
        map
    })
}

/// 条件にマッチするコンテストと、その問題の組をID降順に並べて返す
///
/// 問題が一つもないコンテストは含めない。各コンテストの問題はID昇順に並べる。
pub fn group_and_filter<'a>(
    contests: &'a [Contest],
    problems_by_contest: &ProblemsByContest<'a>,
    filter: &ContestFilter,
) -> Vec<ContestProblems<'a>> {
    contests
        .iter()
        .filter(|contest| filter.is_match(&contest.id))
        .sorted_by(|a, b| a.id.cmp(&b.id))
        .rev()
        .filter_map(|contest| {
            let problems = problems_by_contest.get(contest.id.as_str())?;
            if problems.is_empty() {
                return None;
            }

            let problems: Vec<&Problem> = problems
                .iter()
                .copied()
                .sorted_by(|a, b| a.id.cmp(&b.id))
                .collect();
            Some((contest, problems))
        })
        .collect()
}

/// 公式コンテスト以外のコンテストを開始時刻の新しい順に並べて返す
pub fn group_other_contests<'a>(
    contests: &'a [Contest],
    problems_by_contest: &ProblemsByContest<'a>,
) -> Vec<ContestProblems<'a>> {
    let mut others = group_and_filter(contests, problems_by_contest, &ContestFilter::others());
    others.sort_by(|a, b| b.0.start_epoch_second.cmp(&a.0.start_epoch_second));
    others
}

#[cfg(test)]
mod test {
    use super::*;

    fn ids(groups: &[ContestProblems<'_>]) -> Vec<String> {
        groups.iter().map(|(contest, _)| contest.id.clone()).collect()
    }

    #[test]
    fn test_group_official_contests_in_descending_order() {
        let contests = vec![
            Contest::new("abc001", 100),
            Contest::new("abc002", 200),
            Contest::new("abc010", 300),
            Contest::new("arc001", 150),
        ];
        let problems = vec![
            Problem::new("abc001_a", "abc001"),
            Problem::new("abc002_a", "abc002"),
            Problem::new("abc010_a", "abc010"),
            Problem::new("arc001_a", "arc001"),
        ];
        let problems_by_contest = problems_by_contest(&problems);

        let groups =
            group_and_filter(&contests, &problems_by_contest, &OfficialFamily::Abc.filter());
        assert_eq!(ids(&groups), vec!["abc010", "abc002", "abc001"]);
    }

    #[test]
    fn test_problems_are_sorted_by_id() {
        let contests = vec![Contest::new("agc001", 0)];
        let problems = vec![
            Problem::new("agc001_c", "agc001"),
            Problem::new("agc001_a", "agc001"),
            Problem::new("agc001_b", "agc001"),
        ];
        let problems_by_contest = problems_by_contest(&problems);

        let groups =
            group_and_filter(&contests, &problems_by_contest, &OfficialFamily::Agc.filter());
        let problem_ids: Vec<&str> = groups[0].1.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(problem_ids, vec!["agc001_a", "agc001_b", "agc001_c"]);
    }

    #[test]
    fn test_contest_without_problems_is_excluded() {
        let contests = vec![Contest::new("arc001", 0), Contest::new("arc002", 0)];
        let problems = vec![Problem::new("arc002_a", "arc002")];
        let problems_by_contest = problems_by_contest(&problems);

        let groups =
            group_and_filter(&contests, &problems_by_contest, &OfficialFamily::Arc.filter());
        assert_eq!(ids(&groups), vec!["arc002"]);
    }

    #[test]
    fn test_problems_of_unknown_contest_are_ignored() {
        let contests = vec![Contest::new("abc001", 0)];
        let problems = vec![
            Problem::new("abc001_a", "abc001"),
            Problem::new("abc999_a", "abc999"),
        ];
        let problems_by_contest = problems_by_contest(&problems);

        let groups =
            group_and_filter(&contests, &problems_by_contest, &OfficialFamily::Abc.filter());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1.len(), 1);
    }

    #[test]
    fn test_other_contests_are_sorted_by_start_time() {
        let contests = vec![
            Contest::new("abc001", 500),
            Contest::new("code-festival-2017-quala", 100),
            Contest::new("xmascon20", 300),
            Contest::new("abc001_extra", 400),
            Contest::new("ddcc2020-qual", 200),
        ];
        let problems: Vec<Problem> = contests
            .iter()
            .map(|contest| Problem::new(&format!("{}_a", contest.id), &contest.id))
            .collect();
        let problems_by_contest = problems_by_contest(&problems);

        let groups = group_other_contests(&contests, &problems_by_contest);
        assert_eq!(
            ids(&groups),
            vec!["xmascon20", "ddcc2020-qual", "code-festival-2017-quala"]
        );
    }

    #[test]
    fn test_other_contests_with_same_start_time_keep_id_order() {
        let contests = vec![Contest::new("aaa", 100), Contest::new("bbb", 100)];
        let problems = vec![Problem::new("aaa_a", "aaa"), Problem::new("bbb_a", "bbb")];
        let problems_by_contest = problems_by_contest(&problems);

        let groups = group_other_contests(&contests, &problems_by_contest);
        assert_eq!(ids(&groups), vec!["bbb", "aaa"]);
    }

    #[test]
    fn test_official_family() {
        assert_eq!(OfficialFamily::Agc.header().join(""), "ABCDEF");
        assert_eq!(OfficialFamily::Abc.header().join(""), "ABCD");
        assert_eq!(OfficialFamily::Arc.category(), ContestCategory::Arc);
        assert!(OfficialFamily::Agc.filter().is_match("agc050"));
        assert!(!OfficialFamily::Agc.filter().is_match("agc050_b"));
        assert!(ContestFilter::others().is_match("agc"));
        assert!(!ContestFilter::others().is_match("agc0501"));
    }
}
