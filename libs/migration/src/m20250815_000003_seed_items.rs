use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Insert the collectable item catalog
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO items (id, title, image)
            VALUES
                (1, 'Lâmpadas', 'lampadas.svg'),
                (2, 'Pilhas e Baterias', 'baterias.svg'),
                (3, 'Papéis e Papelão', 'papeis-papelao.svg'),
                (4, 'Resíduos Eletrônicos', 'eletronicos.svg'),
                (5, 'Resíduos Orgânicos', 'organicos.svg'),
                (6, 'Óleo de Cozinha', 'oleo.svg')
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Keep the sequence past the seeded ids
        manager
            .get_connection()
            .execute_unprepared("SELECT setval('items_id_seq', (SELECT MAX(id) FROM items))")
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM items WHERE id BETWEEN 1 AND 6")
            .await?;

        Ok(())
    }
}
