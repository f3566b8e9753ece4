use crate::cli::insert::args::Args;
use eyre::Result;
use store::client::Client;
use store::crypto_transfer::{CryptoTransfer, store::Store};

pub async fn insert(args: &Args) -> Result<()> {
    let client = Client::init(&args.db_url).await?;
    let store = Store::new(client);

    let transfer =
        CryptoTransfer::new(args.entity_id.encode(), args.consensus_timestamp, args.amount);
    store.insert_crypto_transfer(&transfer).await?;

    println!("Inserted {transfer:?} into {}", CryptoTransfer::table_name());

    Ok(())
}
