use clap::Parser;
use store::entity::EntityId;

#[derive(Parser, Debug)]
#[command(about = "Record one crypto transfer row", long_about = None)]
pub struct Args {
    /// SQLite connection string
    #[arg(short, long)]
    pub db_url: String,

    /// Entity as `shard.realm.num` or encoded id
    #[arg(short, long, allow_negative_numbers = true)]
    pub entity_id: EntityId,

    /// Consensus timestamp in nanoseconds since the epoch
    #[arg(short, long, allow_negative_numbers = true)]
    pub consensus_timestamp: i64,

    /// Amount in tinybars, negative for debits
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: i64,
}
