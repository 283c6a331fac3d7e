use serde::{de, Deserialize, Deserializer, Serialize};
use serde_with::skip_serializing_none;

/// APIのレスポンス
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct ApiResponse<P, D>
where
    P: Serialize,
    D: Serialize,
{
    pub stats: ResponseStats<P>,
    pub items: Vec<D>,
    pub message: Option<String>,
}

impl<P, D> ApiResponse<P, D>
where
    P: Serialize,
    D: Serialize,
{
    pub fn ok(params: P, items: Vec<D>, time: u32) -> Self {
        Self {
            stats: ResponseStats {
                time,
                count: items.len() as u32,
                params,
            },
            items,
            message: None,
        }
    }

    pub fn error(params: P, message: impl ToString) -> Self {
        Self {
            stats: ResponseStats {
                time: 0,
                count: 0,
                params,
            },
            items: Vec::new(),
            message: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseStats<P> {
    pub time: u32,
    pub count: u32,
    pub params: P,
}

/// `a,b,c`のようなカンマ区切りの文字列を`Vec<String>`としてデシリアライズする
///
/// 空の要素は取り除く。
pub fn deserialize_optional_comma_separated<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value {
        Some(value) => {
            let values: Vec<String> = value
                .split(',')
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
                .collect();
            if values.iter().any(|v| v.contains(char::is_whitespace)) {
                return Err(de::Error::custom("values must not contain whitespace"));
            }
            Ok(Some(values))
        }
        None => Ok(None),
    }
}
