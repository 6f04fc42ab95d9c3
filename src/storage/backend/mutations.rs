//! Mutation operations for SeaOrmStorage

use sea_orm::ActiveModelTrait;
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::{model_to_record, new_active_model};
use crate::errors::{Result, ShortUrlError};
use crate::storage::ShortUrlRecord;

impl SeaOrmStorage {
    /// 新增一条记录并返回数据库分配的 ID
    ///
    /// ID 由自增主键在单条 INSERT 中分配，不存在“先 COUNT 再写入”的竞态，
    /// 并发写入也不会产生重复 ID。
    pub async fn create(&self, original_url: &str) -> Result<ShortUrlRecord> {
        let model = new_active_model(original_url)
            .insert(&self.db)
            .await
            .map_err(|e| {
                ShortUrlError::database_operation(format!("Failed to insert short URL: {}", e))
            })?;

        debug!("Short URL {} stored for {}", model.id, model.original_url);
        Ok(model_to_record(model))
    }
}
