use crate::crypto_transfer::{
    model::{BalanceChange, CryptoTransfer},
    schema::{AMOUNT, CONSENSUS_TIMESTAMP, ENTITY_ID},
};
use sqlx::{FromRow, Row, sqlite::SqliteRow};

impl<'r> FromRow<'r, SqliteRow> for CryptoTransfer {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            entity_id: row.try_get(ENTITY_ID.name)?,
            consensus_timestamp: row.try_get(CONSENSUS_TIMESTAMP.name)?,
            amount: row.try_get(AMOUNT.name)?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for BalanceChange {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self { entity_id: row.try_get(ENTITY_ID.name)?, amount: row.try_get(AMOUNT.name)? })
    }
}
