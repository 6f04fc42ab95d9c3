use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一条短链接记录：自增 ID 与原始 URL
///
/// `original_url` 按提交时的原样保存，不做任何规范化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrlRecord {
    pub id: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StorageConfig {
    pub storage_type: String,
}
