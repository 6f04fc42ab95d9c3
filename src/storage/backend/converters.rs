use crate::storage::ShortUrlRecord;
use migration::entities::short_url;

/// 将 Sea-ORM Model 转换为 ShortUrlRecord
pub fn model_to_record(model: short_url::Model) -> ShortUrlRecord {
    ShortUrlRecord {
        id: model.id,
        original_url: model.original_url,
        created_at: model.created_at,
    }
}

/// 为新记录构建 ActiveModel，`id` 留给数据库分配
pub fn new_active_model(original_url: &str) -> short_url::ActiveModel {
    use sea_orm::ActiveValue::*;

    short_url::ActiveModel {
        id: NotSet,
        original_url: Set(original_url.to_string()),
        created_at: Set(chrono::Utc::now()),
    }
}
