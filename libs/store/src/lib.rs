pub mod client;
pub mod entity;
pub mod utils;
pub mod crypto_transfer {
    pub mod adapter;
    pub mod model;
    pub mod pretty;
    pub mod schema;
    pub mod store;

    pub use model::{BalanceChange, CryptoTransfer};
    pub use schema::SCHEMA;

    /// Table holding one row per entity affected by a crypto transfer.
    pub const TABLE_NAME: &str = "crypto_transfer";
}
