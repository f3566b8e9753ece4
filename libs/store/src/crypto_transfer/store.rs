use crate::client::Client;
use crate::crypto_transfer::model::{BalanceChange, CryptoTransfer};
use crate::crypto_transfer::schema::SCHEMA;
use sqlx::Error;

#[derive(Clone)]
pub struct Store {
    client: Client,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // WRITES
    // ---------------------------

    pub async fn insert_crypto_transfer(&self, transfer: &CryptoTransfer) -> Result<(), Error> {
        sqlx::query(&insert_query())
            .bind(transfer.entity_id)
            .bind(transfer.consensus_timestamp)
            .bind(transfer.amount)
            .execute(self.client.pool())
            .await?;
        tracing::debug!(?transfer, "inserted crypto transfer");
        Ok(())
    }

    /// Writes all rows in a single transaction and returns how many were written.
    pub async fn insert_crypto_transfers(
        &self,
        transfers: &[CryptoTransfer],
    ) -> Result<u64, Error> {
        if transfers.is_empty() {
            return Ok(0);
        }

        let query = insert_query();
        let mut tx = self.client.pool().begin().await?;
        let mut rows = 0;
        for transfer in transfers {
            rows += sqlx::query(&query)
                .bind(transfer.entity_id)
                .bind(transfer.consensus_timestamp)
                .bind(transfer.amount)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;

        tracing::debug!(rows, "inserted crypto transfer batch");
        Ok(rows)
    }

    // ---------------------------
    // READS
    // ---------------------------

    pub async fn get_crypto_transfers_by_entity_id(
        &self,
        entity_id: i64,
    ) -> Result<Vec<CryptoTransfer>, Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE entity_id = ? ORDER BY consensus_timestamp ASC",
            SCHEMA.column_list(),
            SCHEMA.name
        );
        let transfers =
            sqlx::query_as(&query).bind(entity_id).fetch_all(self.client.pool()).await?;

        Ok(transfers)
    }

    /// Both bounds are inclusive.
    pub async fn get_crypto_transfers_between_timestamps(
        &self,
        from_timestamp: i64,
        to_timestamp: i64,
    ) -> Result<Vec<CryptoTransfer>, Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE consensus_timestamp BETWEEN ? AND ? \
             ORDER BY consensus_timestamp ASC, entity_id ASC",
            SCHEMA.column_list(),
            SCHEMA.name
        );
        let transfers = sqlx::query_as(&query)
            .bind(from_timestamp)
            .bind(to_timestamp)
            .fetch_all(self.client.pool())
            .await?;

        Ok(transfers)
    }

    /// Net amount per entity for `from_timestamp < consensus_timestamp <= to_timestamp`.
    pub async fn get_balance_changes(
        &self,
        from_timestamp: i64,
        to_timestamp: i64,
    ) -> Result<Vec<BalanceChange>, Error> {
        let query = format!(
            "SELECT entity_id, SUM(amount) AS amount FROM {} \
             WHERE consensus_timestamp > ? AND consensus_timestamp <= ? \
             GROUP BY entity_id ORDER BY entity_id ASC",
            SCHEMA.name
        );
        let changes = sqlx::query_as(&query)
            .bind(from_timestamp)
            .bind(to_timestamp)
            .fetch_all(self.client.pool())
            .await?;

        Ok(changes)
    }

    pub async fn count(&self) -> Result<i64, Error> {
        let query = format!("SELECT COUNT(*) FROM {}", SCHEMA.name);
        let (count,): (i64,) = sqlx::query_as(&query).fetch_one(self.client.pool()).await?;

        Ok(count)
    }
}

fn insert_query() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        SCHEMA.name,
        SCHEMA.column_list(),
        SCHEMA.placeholders()
    )
}
