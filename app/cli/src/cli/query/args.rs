use clap::Parser;
use store::entity::EntityId;

#[derive(Parser, Debug)]
#[command(about = "Select crypto transfers", long_about = None)]
pub struct Query {
    /// SQLite connection string
    #[arg(short, long)]
    pub db_url: String,

    /// Entity as `shard.realm.num` or encoded id
    #[arg(
        short,
        long,
        conflicts_with_all = ["from", "to"],
        required_unless_present = "from",
        allow_negative_numbers = true
    )]
    pub entity_id: Option<EntityId>,

    /// Lowest consensus timestamp, inclusive
    #[arg(long, requires = "to", allow_negative_numbers = true)]
    pub from: Option<i64>,

    /// Highest consensus timestamp, inclusive
    #[arg(long, requires = "from", allow_negative_numbers = true)]
    pub to: Option<i64>,
}

#[derive(Parser, Debug)]
#[command(about = "Net amount per entity", long_about = None)]
pub struct BalanceQuery {
    /// SQLite connection string
    #[arg(short, long)]
    pub db_url: String,

    /// Lower consensus timestamp, exclusive
    #[arg(long, allow_negative_numbers = true)]
    pub from: i64,

    /// Upper consensus timestamp, inclusive
    #[arg(long, allow_negative_numbers = true)]
    pub to: i64,
}
