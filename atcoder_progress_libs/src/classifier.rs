use crate::models::Contest;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) static RE_ABC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^abc\d{3}$").unwrap());
pub(crate) static RE_ARC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^arc\d{3}$").unwrap());
pub(crate) static RE_AGC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^agc\d{3}$").unwrap());
static RE_AHC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ahc\d{3}$").unwrap());
static RE_JAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(jag|JAG)").unwrap());
static RE_MARATHON_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^Chokudai Contest|ハーフマラソン|^HACK TO THE FUTURE|Asprova|Heuristics Contest)")
        .unwrap()
});
static RE_MARATHON_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^future-meets-you-contest|^hokudai-hitachi|^toyota-hc)").unwrap()
});
static RE_SPONSORED_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(Sponsored|協賛)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContestCategory {
    #[serde(rename = "ABC")]
    Abc,
    #[serde(rename = "ARC")]
    Arc,
    #[serde(rename = "AGC")]
    Agc,
    #[serde(rename = "ABC-Like")]
    AbcLike,
    #[serde(rename = "ARC-Like")]
    ArcLike,
    #[serde(rename = "AGC-Like")]
    AgcLike,
    #[serde(rename = "PAST")]
    Past,
    #[serde(rename = "JOI")]
    Joi,
    #[serde(rename = "JAG")]
    Jag,
    #[serde(rename = "AHC")]
    Ahc,
    #[serde(rename = "Marathon")]
    Marathon,
    #[serde(rename = "Other Sponsored")]
    OtherSponsored,
    #[serde(rename = "Other Contests")]
    OtherContests,
}

impl ContestCategory {
    /// 表示順に並べたすべてのカテゴリ
    pub const ALL: [ContestCategory; 13] = [
        ContestCategory::Abc,
        ContestCategory::Arc,
        ContestCategory::Agc,
        ContestCategory::AbcLike,
        ContestCategory::ArcLike,
        ContestCategory::AgcLike,
        ContestCategory::Past,
        ContestCategory::Joi,
        ContestCategory::Jag,
        ContestCategory::Ahc,
        ContestCategory::Marathon,
        ContestCategory::OtherSponsored,
        ContestCategory::OtherContests,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContestCategory::Abc => "ABC",
            ContestCategory::Arc => "ARC",
            ContestCategory::Agc => "AGC",
            ContestCategory::AbcLike => "ABC-Like",
            ContestCategory::ArcLike => "ARC-Like",
            ContestCategory::AgcLike => "AGC-Like",
            ContestCategory::Past => "PAST",
            ContestCategory::Joi => "JOI",
            ContestCategory::Jag => "JAG",
            ContestCategory::Ahc => "AHC",
            ContestCategory::Marathon => "Marathon",
            ContestCategory::OtherSponsored => "Other Sponsored",
            ContestCategory::OtherContests => "Other Contests",
        }
    }

    /// `ALL`における位置
    pub fn index(&self) -> usize {
        ContestCategory::ALL
            .iter()
            .position(|category| category == self)
            .unwrap_or(ContestCategory::ALL.len() - 1)
    }
}

impl fmt::Display for ContestCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// コンテストをカテゴリに分類する
///
/// どのルールにも当てはまらないコンテストは`Other Contests`になる。
pub fn classify(contest: &Contest) -> ContestCategory {
    let id = contest.id.as_str();

    if RE_ABC.is_match(id) {
        return ContestCategory::Abc;
    }
    if RE_ARC.is_match(id) {
        return ContestCategory::Arc;
    }
    if RE_AGC.is_match(id) {
        return ContestCategory::Agc;
    }
    if RE_AHC.is_match(id) {
        return ContestCategory::Ahc;
    }

    if id.starts_with("past") {
        return ContestCategory::Past;
    }
    if id.starts_with("joi") {
        return ContestCategory::Joi;
    }
    if RE_JAG.is_match(id) {
        return ContestCategory::Jag;
    }

    if RE_MARATHON_TITLE.is_match(&contest.title) || RE_MARATHON_ID.is_match(id) {
        return ContestCategory::Marathon;
    }

    if let Some(range) = contest.rated_range() {
        return match range {
            (Some(_), _) | (None, None) => ContestCategory::AgcLike,
            (None, Some(upper)) if upper <= 1999 => ContestCategory::AbcLike,
            (None, Some(upper)) if upper <= 2799 => ContestCategory::ArcLike,
            (None, Some(_)) => ContestCategory::AgcLike,
        };
    }

    if id.ends_with("-open") || RE_SPONSORED_TITLE.is_match(&contest.title) {
        return ContestCategory::OtherSponsored;
    }

    ContestCategory::OtherContests
}
