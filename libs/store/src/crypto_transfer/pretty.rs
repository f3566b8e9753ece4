use std::fmt::{Debug, Formatter, Result};

use crate::{crypto_transfer::model::CryptoTransfer, utils};

impl Debug for CryptoTransfer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("CryptoTransfer")
            .field("entity_id", &utils::entity_id_to_string(self.entity_id))
            .field("consensus_timestamp", &utils::timestamp_to_string(self.consensus_timestamp))
            .field("amount", &self.amount)
            .finish()
    }
}
