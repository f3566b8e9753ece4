use serde::{Serialize, ser::SerializeStruct};
use store::{
    crypto_transfer::{BalanceChange, CryptoTransfer},
    utils,
};

// Tuple wrapper for CryptoTransfer
pub struct CryptoTransferResponse(pub CryptoTransfer);

impl Serialize for CryptoTransferResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let t = &self.0;
        let mut state = serializer.serialize_struct("CryptoTransfer", 5)?;
        state.serialize_field("entity_id", &utils::entity_id_to_string(t.entity_id))?;
        state.serialize_field("encoded_entity_id", &t.entity_id)?;
        state.serialize_field(
            "consensus_timestamp",
            &utils::timestamp_to_string(t.consensus_timestamp),
        )?;
        state.serialize_field("consensus_timestamp_ns", &t.consensus_timestamp)?;
        state.serialize_field("amount", &t.amount)?;
        state.end()
    }
}

// Tuple wrapper for BalanceChange
pub struct BalanceChangeResponse(pub BalanceChange);

impl Serialize for BalanceChangeResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let c = &self.0;
        let mut state = serializer.serialize_struct("BalanceChange", 3)?;
        state.serialize_field("entity_id", &utils::entity_id_to_string(c.entity_id))?;
        state.serialize_field("encoded_entity_id", &c.entity_id)?;
        state.serialize_field("amount", &c.amount)?;
        state.end()
    }
}
