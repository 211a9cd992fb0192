use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 AI 聊天历史表
        manager
            .create_table(
                Table::create()
                    .table(ChatHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChatHistory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ChatHistory::UserId).big_integer().not_null())
                    .col(ColumnDef::new(ChatHistory::Provider).string().not_null())
                    .col(ColumnDef::new(ChatHistory::Prompt).text().not_null())
                    .col(ColumnDef::new(ChatHistory::Response).text().not_null())
                    .col(
                        ColumnDef::new(ChatHistory::Fallback)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ChatHistory::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ChatHistory::Table, ChatHistory::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 AI 分析结果表
        manager
            .create_table(
                Table::create()
                    .table(AiAnalytics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AiAnalytics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AiAnalytics::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AiAnalytics::AnalysisType).string().not_null())
                    .col(ColumnDef::new(AiAnalytics::Provider).string().not_null())
                    .col(ColumnDef::new(AiAnalytics::Content).text().not_null())
                    .col(
                        ColumnDef::new(AiAnalytics::Fallback)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AiAnalytics::RequestedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AiAnalytics::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AiAnalytics::Table, AiAnalytics::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AiAnalytics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChatHistory::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ChatHistory {
    Table,
    Id,
    UserId,
    Provider,
    Prompt,
    Response,
    Fallback,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AiAnalytics {
    Table,
    Id,
    StudentId,
    AnalysisType,
    Provider,
    Content,
    Fallback,
    RequestedBy,
    CreatedAt,
}
