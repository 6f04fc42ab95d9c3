use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 short_urls 表，id 使用自增主键
        manager
            .create_table(
                Table::create()
                    .table(ShortUrl::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShortUrl::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShortUrl::OriginalUrl).text().not_null())
                    .col(
                        ColumnDef::new(ShortUrl::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_short_urls_created_at")
                    .table(ShortUrl::Table)
                    .col(ShortUrl::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_short_urls_created_at").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ShortUrl::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ShortUrl {
    #[sea_orm(iden = "short_urls")]
    Table,
    Id,
    OriginalUrl,
    CreatedAt,
}
