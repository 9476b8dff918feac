use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        // Administrators keeps the legacy column names so pre-existing
        // database files remain compatible. The unique index on Username
        // is what makes concurrent registration safe.
        manager
            .create_table(
                schema
                    .create_table_from_entity(Administrators)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(ActionEvents)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActionEvents).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Administrators).to_owned())
            .await?;

        Ok(())
    }
}
