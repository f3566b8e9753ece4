#[cfg(test)]
mod tests {
    use eyre::Result;
    use store::{
        client::Client,
        crypto_transfer::{BalanceChange, CryptoTransfer, SCHEMA, TABLE_NAME, store::Store},
        entity::EntityId,
    };

    async fn new_store() -> Result<Store> {
        let client = Client::init("sqlite::memory:").await?;
        Ok(Store::new(client))
    }

    #[tokio::test]
    async fn test_insert_and_select_by_entity_id() -> Result<()> {
        let store = new_store().await?;

        let transfer = CryptoTransfer::new(1001, 123456789, 500);
        store.insert_crypto_transfer(&transfer).await?;

        let transfers = store.get_crypto_transfers_by_entity_id(1001).await?;

        assert_eq!(transfers, vec![transfer]);
        assert_eq!(CryptoTransfer::table_name(), TABLE_NAME);
        assert_eq!(TABLE_NAME, "crypto_transfer");

        Ok(())
    }

    #[tokio::test]
    async fn test_rows_land_in_crypto_transfer_table() -> Result<()> {
        let client = Client::init("sqlite::memory:").await?;
        let store = Store::new(client.clone());

        store.insert_crypto_transfer(&CryptoTransfer::new(1001, 123456789, 500)).await?;
        let row: (i64, i64, i64) = sqlx::query_as(
            "SELECT entity_id, consensus_timestamp, amount FROM crypto_transfer",
        )
        .fetch_one(client.pool())
        .await?;

        assert_eq!(row, (1001, 123456789, 500));
        assert_eq!(store.count().await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_table_columns_match_schema_mapping() -> Result<()> {
        let client = Client::init("sqlite::memory:").await?;

        let columns: Vec<(String, String, i64)> = sqlx::query_as(
            "SELECT name, type, \"notnull\" FROM pragma_table_info('crypto_transfer') ORDER BY cid",
        )
        .fetch_all(client.pool())
        .await?;

        let expected: Vec<(String, String, i64)> = SCHEMA
            .columns
            .iter()
            .map(|c| (c.name.to_string(), c.column_type.sql().to_string(), 1))
            .collect();
        assert_eq!(columns, expected);

        Ok(())
    }

    #[tokio::test]
    async fn test_extreme_values_survive_storage() -> Result<()> {
        let store = new_store().await?;

        let transfers = [
            CryptoTransfer::new(i64::MIN, i64::MIN, i64::MIN),
            CryptoTransfer::new(0, 0, 0),
            CryptoTransfer::new(i64::MAX, i64::MAX, i64::MAX),
        ];
        for transfer in &transfers {
            store.insert_crypto_transfer(transfer).await?;
        }

        for transfer in &transfers {
            let stored = store.get_crypto_transfers_by_entity_id(transfer.entity_id).await?;
            assert_eq!(stored, vec![*transfer]);
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_select_between_timestamps_is_inclusive() -> Result<()> {
        let store = new_store().await?;

        store
            .insert_crypto_transfers(&[
                CryptoTransfer::new(98, 10, -100),
                CryptoTransfer::new(2, 20, 40),
                CryptoTransfer::new(1, 20, 60),
                CryptoTransfer::new(3, 30, 1),
                CryptoTransfer::new(4, 40, 1),
            ])
            .await?;

        let transfers = store.get_crypto_transfers_between_timestamps(20, 30).await?;
        assert_eq!(
            transfers,
            vec![
                CryptoTransfer::new(1, 20, 60),
                CryptoTransfer::new(2, 20, 40),
                CryptoTransfer::new(3, 30, 1),
            ]
        );

        assert!(store.get_crypto_transfers_between_timestamps(30, 20).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_batch_insert_counts_rows() -> Result<()> {
        let store = new_store().await?;

        assert_eq!(store.insert_crypto_transfers(&[]).await?, 0);

        let rows = store
            .insert_crypto_transfers(&[
                CryptoTransfer::new(98, 1_600_000_000_000_000_000, -50),
                CryptoTransfer::new(100, 1_600_000_000_000_000_000, 50),
            ])
            .await?;

        assert_eq!(rows, 2);
        assert_eq!(store.count().await?, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_balance_changes_window() -> Result<()> {
        let store = new_store().await?;
        let treasury = EntityId::new(0, 0, 2)?.encode();
        let alice = EntityId::new(0, 0, 1001)?.encode();

        store
            .insert_crypto_transfers(&[
                // excluded: on the lower bound
                CryptoTransfer::new(treasury, 100, -1000),
                CryptoTransfer::new(alice, 100, 1000),
                CryptoTransfer::new(treasury, 101, -300),
                CryptoTransfer::new(alice, 101, 300),
                CryptoTransfer::new(alice, 150, -20),
                CryptoTransfer::new(treasury, 150, 20),
                // included: on the upper bound
                CryptoTransfer::new(alice, 200, 5),
                // excluded: past the upper bound
                CryptoTransfer::new(alice, 201, 7),
            ])
            .await?;

        let changes = store.get_balance_changes(100, 200).await?;

        assert_eq!(
            changes,
            vec![
                BalanceChange { entity_id: treasury, amount: -280 },
                BalanceChange { entity_id: alice, amount: 285 },
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_batch_insert_is_all_or_nothing() -> Result<()> {
        let client = Client::init("sqlite::memory:").await?;
        let store = Store::new(client.clone());

        sqlx::raw_sql(
            r#"
            CREATE TRIGGER reject_amount_13 BEFORE INSERT ON crypto_transfer
            WHEN NEW.amount = 13
            BEGIN
                SELECT RAISE(ABORT, 'rejected');
            END;
            "#,
        )
        .execute(client.pool())
        .await?;

        let result = store
            .insert_crypto_transfers(&[
                CryptoTransfer::new(1, 10, 1),
                CryptoTransfer::new(2, 10, 13),
                CryptoTransfer::new(3, 10, 1),
            ])
            .await;

        assert!(result.is_err());
        assert_eq!(store.count().await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_balance_change_overflow_is_an_error() -> Result<()> {
        let store = new_store().await?;

        store
            .insert_crypto_transfers(&[
                CryptoTransfer::new(7, 10, i64::MAX),
                CryptoTransfer::new(7, 11, 1),
            ])
            .await?;

        assert!(store.get_balance_changes(0, 20).await.is_err());
        assert_eq!(store.get_crypto_transfers_by_entity_id(7).await?.len(), 2);

        Ok(())
    }
}
