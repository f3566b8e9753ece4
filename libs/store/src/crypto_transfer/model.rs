use crate::crypto_transfer::TABLE_NAME;

/// One row per entity affected by a crypto transfer.
///
/// `amount` is signed: debits are negative, credits positive. No field is
/// range checked.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CryptoTransfer {
    pub entity_id: i64,
    /// Nanoseconds since the epoch.
    pub consensus_timestamp: i64,
    /// Tinybars.
    pub amount: i64,
}

impl CryptoTransfer {
    pub const fn new(entity_id: i64, consensus_timestamp: i64, amount: i64) -> Self {
        Self { entity_id, consensus_timestamp, amount }
    }

    pub const fn table_name() -> &'static str {
        TABLE_NAME
    }
}

/// Net amount moved for one entity over a consensus timestamp window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceChange {
    pub entity_id: i64,
    pub amount: i64,
}
