//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::errors::{Result, ShortUrlError};
use crate::storage::models::StorageConfig;

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_record, new_active_model};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(ShortUrlError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based storage backend
///
/// Holds the process-wide connection pool. Cloning shares the pool.
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(database_url: &str, backend_name: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(ShortUrlError::database_config("DATABASE_URL is not set"));
        }

        // 根据不同数据库类型配置连接选项
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, backend_name).await?
        };

        let storage = SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
        };

        // 运行迁移
        run_migrations(&storage.db).await?;

        warn!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    pub fn get_backend_config(&self) -> StorageConfig {
        StorageConfig {
            storage_type: self.backend_name.clone(),
        }
    }

    /// 获取数据库连接（健康检查、关闭流程需要直接访问）
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// 关闭连接池，进程退出前调用一次
    pub async fn close(&self) -> Result<()> {
        self.db.clone().close().await.map_err(|e| {
            ShortUrlError::database_connection(format!("Failed to close database: {}", e))
        })?;
        info!("{} connection pool closed", self.backend_name.to_uppercase());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_backend_from_url() {
        assert_eq!(
            infer_backend_from_url("sqlite://data/urls.db?mode=rwc").unwrap(),
            "sqlite"
        );
        assert_eq!(infer_backend_from_url("urls.db").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("urls.sqlite").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url(":memory:").unwrap(), "sqlite");
        assert_eq!(
            infer_backend_from_url("mysql://root@localhost/urls").unwrap(),
            "mysql"
        );
        assert_eq!(
            infer_backend_from_url("mariadb://root@localhost/urls").unwrap(),
            "mysql"
        );
        assert_eq!(
            infer_backend_from_url("postgresql://u:p@db/urls").unwrap(),
            "postgres"
        );
    }

    #[test]
    fn test_infer_backend_rejects_unknown() {
        let err = infer_backend_from_url("mongodb+srv://cluster0/urls").unwrap_err();
        assert!(matches!(err, ShortUrlError::DatabaseConfig(_)));
    }
}
