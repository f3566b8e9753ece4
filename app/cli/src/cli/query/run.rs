use crate::cli::query::args::{BalanceQuery, Query};
use crate::cli::query::response::{BalanceChangeResponse, CryptoTransferResponse};
use eyre::{Result, eyre};
use store::client::Client;
use store::crypto_transfer::store::Store;

pub async fn select(query: &Query) -> Result<()> {
    let client = Client::init(&query.db_url).await?;
    let store = Store::new(client);

    let transfers = match (query.entity_id, query.from, query.to) {
        (Some(entity_id), _, _) => {
            store.get_crypto_transfers_by_entity_id(entity_id.encode()).await?
        }
        (None, Some(from), Some(to)) => {
            store.get_crypto_transfers_between_timestamps(from, to).await?
        }
        _ => return Err(eyre!("Either --entity-id or both --from and --to are required")),
    };

    if transfers.is_empty() {
        println!("No Crypto Transfers Found")
    } else {
        let response: Vec<CryptoTransferResponse> =
            transfers.into_iter().map(CryptoTransferResponse).collect();
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}

pub async fn balances(query: &BalanceQuery) -> Result<()> {
    let client = Client::init(&query.db_url).await?;
    let store = Store::new(client);

    let changes = store.get_balance_changes(query.from, query.to).await?;

    if changes.is_empty() {
        println!("No Balance Changes Found")
    } else {
        let response: Vec<BalanceChangeResponse> =
            changes.into_iter().map(BalanceChangeResponse).collect();
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
