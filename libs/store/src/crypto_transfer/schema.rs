//! Table mapping for [`CryptoTransfer`](crate::crypto_transfer::CryptoTransfer).
//!
//! The model carries no storage attributes; readers and writers consult
//! [`SCHEMA`] for the table and column names instead.

use crate::crypto_transfer::TABLE_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    BigInt,
}

impl ColumnType {
    pub const fn sql(self) -> &'static str {
        match self {
            ColumnType::BigInt => "BIGINT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

pub const ENTITY_ID: Column = Column { name: "entity_id", column_type: ColumnType::BigInt };
pub const CONSENSUS_TIMESTAMP: Column =
    Column { name: "consensus_timestamp", column_type: ColumnType::BigInt };
pub const AMOUNT: Column = Column { name: "amount", column_type: ColumnType::BigInt };

pub const SCHEMA: TableSchema =
    TableSchema { name: TABLE_NAME, columns: &[ENTITY_ID, CONSENSUS_TIMESTAMP, AMOUNT] };

impl TableSchema {
    /// Comma separated column names in declaration order.
    pub fn column_list(&self) -> String {
        self.columns.iter().map(|c| c.name).collect::<Vec<_>>().join(", ")
    }

    /// One `?` bind placeholder per column.
    pub fn placeholders(&self) -> String {
        vec!["?"; self.columns.len()].join(", ")
    }
}
