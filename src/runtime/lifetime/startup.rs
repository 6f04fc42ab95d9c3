use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::Result;
use crate::services::{HostResolver, ShortUrlService, SystemResolver};
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub shorturl_service: Arc<ShortUrlService>,
}

/// 准备服务器启动的上下文
///
/// 连接存储（并运行迁移），组装业务服务。连接池在整个进程生命周期内只创建这一次。
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let storage = StorageFactory::create().await?;
    warn!(
        "Using storage backend: {}",
        storage.get_backend_config().storage_type
    );

    match storage.count().await {
        Ok(count) => info!("{} short URLs in storage", count),
        Err(e) => warn!("Could not count stored short URLs: {}", e),
    }

    let resolver: Arc<dyn HostResolver> = Arc::new(SystemResolver);
    let shorturl_service = Arc::new(ShortUrlService::new(storage.clone(), resolver));

    Ok(StartupContext {
        storage,
        shorturl_service,
    })
}
