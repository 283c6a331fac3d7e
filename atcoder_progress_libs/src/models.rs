use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// AtCoder Problemsの`contests.json`の1要素に相当するコンテスト情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: String,
    pub start_epoch_second: i64,
    #[serde(default)]
    pub duration_second: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default = "unrated")]
    pub rate_change: String,
}

fn unrated() -> String {
    String::from("-")
}

impl Contest {
    pub fn new(id: &str, start_epoch_second: i64) -> Self {
        Self {
            id: String::from(id),
            start_epoch_second,
            duration_second: 0,
            title: String::new(),
            rate_change: unrated(),
        }
    }

    /// レート変動対象のコンテストかどうか
    pub fn is_rated(&self) -> bool {
        let rate_change = self.rate_change.trim();
        !(rate_change.is_empty() || rate_change == "-")
    }

    /// `rate_change`をレート変動対象の範囲(下限, 上限)として解釈する
    ///
    /// `"All"`は上下限なし、`" ~ 1999"`は上限のみ、`"1200 ~ "`は下限のみを表す。
    /// 解釈できない文字列やunratedのときは`None`を返す。
    pub fn rated_range(&self) -> Option<(Option<i32>, Option<i32>)> {
        if !self.is_rated() {
            return None;
        }

        let rate_change = self.rate_change.trim();
        if rate_change == "All" {
            return Some((None, None));
        }

        let (lower, upper) = rate_change.split_once('~')?;
        let parse = |bound: &str| -> Option<Option<i32>> {
            let bound = bound.trim();
            if bound.is_empty() {
                Some(None)
            } else {
                bound.parse::<i32>().ok().map(Some)
            }
        };

        Some((parse(lower)?, parse(upper)?))
    }
}

/// AtCoder Problemsの`problems.json`の1要素に相当する問題情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub contest_id: String,
    #[serde(default)]
    pub problem_index: String,
    #[serde(default)]
    pub title: String,
}

impl Problem {
    pub fn new(id: &str, contest_id: &str) -> Self {
        Self {
            id: String::from(id),
            contest_id: String::from(contest_id),
            problem_index: String::new(),
            title: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub epoch_second: i64,
    pub problem_id: String,
    #[serde(default)]
    pub contest_id: String,
    pub user_id: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub point: f64,
    pub result: Verdict,
}

impl Submission {
    pub fn new(problem_id: &str, user_id: &str, result: Verdict) -> Self {
        Self {
            id: 0,
            epoch_second: 0,
            problem_id: String::from(problem_id),
            contest_id: String::new(),
            user_id: String::from(user_id),
            language: String::new(),
            point: 0.0,
            result,
        }
    }

    /// ユーザIDを大文字小文字を区別せずに比較する
    pub fn is_submitted_by(&self, user_id: &str) -> bool {
        self.user_id.to_lowercase() == user_id.to_lowercase()
    }
}

/// 提出の判定結果
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    RuntimeError,
    OutputLimitExceeded,
    QueryLimitExceeded,
    InternalError,
    CompileError,
    WaitingJudge,
    WaitingRejudge,
    /// `"3/12"`のようなジャッジ中の進捗
    Judging(String),
    Other(String),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// ジャッジが完了し、提出の成否を表す判定かどうか
    ///
    /// CEやWJ、ジャッジ中の提出は挑戦の結果として数えない。
    pub fn is_valid(&self) -> bool {
        matches!(
            self,
            Verdict::Accepted
                | Verdict::WrongAnswer
                | Verdict::TimeLimitExceeded
                | Verdict::MemoryLimitExceeded
                | Verdict::RuntimeError
                | Verdict::OutputLimitExceeded
                | Verdict::QueryLimitExceeded
                | Verdict::InternalError
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            Verdict::Accepted => "AC",
            Verdict::WrongAnswer => "WA",
            Verdict::TimeLimitExceeded => "TLE",
            Verdict::MemoryLimitExceeded => "MLE",
            Verdict::RuntimeError => "RE",
            Verdict::OutputLimitExceeded => "OLE",
            Verdict::QueryLimitExceeded => "QLE",
            Verdict::InternalError => "IE",
            Verdict::CompileError => "CE",
            Verdict::WaitingJudge => "WJ",
            Verdict::WaitingRejudge => "WR",
            Verdict::Judging(progress) => progress,
            Verdict::Other(raw) => raw,
        }
    }
}

impl From<&str> for Verdict {
    fn from(value: &str) -> Self {
        match value {
            "AC" => Verdict::Accepted,
            "WA" => Verdict::WrongAnswer,
            "TLE" => Verdict::TimeLimitExceeded,
            "MLE" => Verdict::MemoryLimitExceeded,
            "RE" => Verdict::RuntimeError,
            "OLE" => Verdict::OutputLimitExceeded,
            "QLE" => Verdict::QueryLimitExceeded,
            "IE" => Verdict::InternalError,
            "CE" => Verdict::CompileError,
            "WJ" => Verdict::WaitingJudge,
            "WR" => Verdict::WaitingRejudge,
            progress if is_judging_progress(progress) => Verdict::Judging(String::from(progress)),
            other => Verdict::Other(String::from(other)),
        }
    }
}

fn is_judging_progress(value: &str) -> bool {
    let progress = value.split_whitespace().next().unwrap_or_default();
    match progress.split_once('/') {
        Some((done, all)) => {
            !done.is_empty()
                && !all.is_empty()
                && done.chars().all(|c| c.is_ascii_digit())
                && all.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

impl From<String> for Verdict {
    fn from(value: String) -> Self {
        Verdict::from(value.as_str())
    }
}

impl From<Verdict> for String {
    fn from(value: Verdict) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Verdict {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Verdict::from(s))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_contest() {
        let raw = r#"
        {
            "id": "abc300",
            "start_epoch_second": 1682251200,
            "duration_second": 6000,
            "title": "ユニークビジョンプログラミングコンテスト2023 春 (AtCoder Beginner Contest 300)",
            "rate_change": " ~ 1999"
        }
        "#;
        let contest: Contest = serde_json::from_str(raw).unwrap();
        assert_eq!(contest.id, "abc300");
        assert_eq!(contest.start_epoch_second, 1682251200);
        assert_eq!(contest.rated_range(), Some((None, Some(1999))));
    }

    #[test]
    fn test_deserialize_contest_with_missing_fields() {
        let raw = r#"{"id": "zzz042", "start_epoch_second": 0}"#;
        let contest: Contest = serde_json::from_str(raw).unwrap();
        assert_eq!(contest, Contest::new("zzz042", 0));
        assert!(!contest.is_rated());
        assert_eq!(contest.rated_range(), None);
    }

    #[test]
    fn test_rated_range() {
        let mut contest = Contest::new("agc001", 0);
        contest.rate_change = String::from("All");
        assert_eq!(contest.rated_range(), Some((None, None)));

        contest.rate_change = String::from("1200 ~ ");
        assert_eq!(contest.rated_range(), Some((Some(1200), None)));

        contest.rate_change = String::from("1200 ~ 2799");
        assert_eq!(contest.rated_range(), Some((Some(1200), Some(2799))));

        contest.rate_change = String::from("unknown");
        assert_eq!(contest.rated_range(), None);
    }

    #[test]
    fn test_deserialize_submission() {
        let raw = r#"
        {
            "id": 5870244,
            "epoch_second": 1559440012,
            "problem_id": "abc128_d",
            "contest_id": "abc128",
            "user_id": "Tourist",
            "language": "C++14 (GCC 5.4.1)",
            "point": 400.0,
            "length": 1024,
            "result": "AC",
            "execution_time": 1
        }
        "#;
        let submission: Submission = serde_json::from_str(raw).unwrap();
        assert_eq!(submission.result, Verdict::Accepted);
        assert!(submission.is_submitted_by("tourist"));
        assert!(!submission.is_submitted_by("petr"));
    }

    #[test]
    fn test_verdict_from_str() {
        assert_eq!(Verdict::from("TLE"), Verdict::TimeLimitExceeded);
        assert_eq!(Verdict::from("CE"), Verdict::CompileError);
        assert_eq!(
            Verdict::from("3/12 TLE"),
            Verdict::Judging(String::from("3/12 TLE"))
        );
        assert_eq!(Verdict::from("NG"), Verdict::Other(String::from("NG")));
        assert_eq!(Verdict::from("/"), Verdict::Other(String::from("/")));
    }

    #[test]
    fn test_verdict_validity() {
        let valid = ["AC", "WA", "TLE", "MLE", "RE", "OLE", "QLE", "IE"];
        for result in valid {
            assert!(Verdict::from(result).is_valid(), "{} should be valid", result);
        }

        let invalid = ["CE", "WJ", "WR", "1/5", "NG"];
        for result in invalid {
            assert!(!Verdict::from(result).is_valid(), "{} should be invalid", result);
        }

        assert!(Verdict::Accepted.is_accepted());
        assert!(!Verdict::WrongAnswer.is_accepted());
    }

    #[test]
    fn test_serialize_verdict() {
        let submission = Submission::new("abc001_a", "user", Verdict::MemoryLimitExceeded);
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["result"], "MLE");
    }
}
