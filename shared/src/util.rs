use serde::{Deserialize, Deserializer};

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Deserialize a present field into `Some(..)`, including an explicit `null`.
///
/// Paired with `#[serde(default)]` on an `Option<Option<T>>` field so that an
/// absent key stays `None` while `null` becomes `Some(None)`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
