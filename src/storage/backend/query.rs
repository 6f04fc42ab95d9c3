//! Query operations for SeaOrmStorage

use sea_orm::{EntityTrait, PaginatorTrait};

use super::SeaOrmStorage;
use super::converters::model_to_record;
use crate::errors::{Result, ShortUrlError};
use crate::storage::ShortUrlRecord;

use migration::entities::short_url;

impl SeaOrmStorage {
    /// 按 ID 精确查询；不存在时返回 `Ok(None)`
    pub async fn lookup(&self, id: i64) -> Result<Option<ShortUrlRecord>> {
        let model = short_url::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                ShortUrlError::database_operation(format!("Failed to query short URL {}: {}", id, e))
            })?;

        Ok(model.map(model_to_record))
    }

    /// 记录总数
    pub async fn count(&self) -> Result<u64> {
        short_url::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| {
                ShortUrlError::database_operation(format!("Failed to count short URLs: {}", e))
            })
    }
}
