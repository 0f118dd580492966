use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use scl_crypto::SignatureScheme;
use scl_types::{ActorType, EventType};

#[derive(Parser)]
#[command(
    name = "scl",
    about = "Supply-Chain Ledger: tamper-evident product trace records",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Ledger configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a signing key pair
    Keygen(KeygenArgs),
    /// Print a 128-bit random identifier
    SecureId,
    /// Recompute canonical hashes of a record file
    Hash(FileArgs),
    /// Check hashes, chain links, and optionally signatures
    Verify(VerifyArgs),
    /// Show the trace chain of one product
    Chain(ChainArgs),
    /// Search records by product, actor, event, time, or location
    Search(SearchArgs),
    /// Show network statistics
    Stats(FileArgs),
    /// Create, sign, and append a record to a record file
    Append(AppendArgs),
}

#[derive(Args)]
pub struct KeygenArgs {
    /// Defaults to the configured scheme
    #[arg(long)]
    pub scheme: Option<SignatureScheme>,
}

#[derive(Args)]
pub struct FileArgs {
    /// JSON array of trace records
    pub file: PathBuf,
}

#[derive(Args)]
pub struct VerifyArgs {
    pub file: PathBuf,
    /// Also verify signatures with this key
    #[arg(long)]
    pub key: Option<String>,
}

#[derive(Args)]
pub struct ChainArgs {
    pub file: PathBuf,
    pub product: String,
}

#[derive(Args)]
pub struct SearchArgs {
    pub file: PathBuf,
    #[arg(long)]
    pub product: Option<String>,
    #[arg(long)]
    pub actor: Option<String>,
    #[arg(long)]
    pub event: Option<EventType>,
    /// Earliest timestamp (ms, inclusive)
    #[arg(long)]
    pub from: Option<u64>,
    /// Latest timestamp (ms, inclusive)
    #[arg(long)]
    pub to: Option<u64>,
    /// Case-insensitive fragment of the location name
    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Args)]
pub struct AppendArgs {
    /// Record file; created if missing
    pub file: PathBuf,
    /// Private signing key
    #[arg(long)]
    pub key: String,
    #[arg(long)]
    pub actor_id: String,
    #[arg(long)]
    pub actor_name: String,
    #[arg(long, default_value = "producer")]
    pub actor_type: ActorType,
    #[arg(long, default_value = "")]
    pub public_key: String,
    #[arg(long)]
    pub event: EventType,
    #[arg(long)]
    pub product_id: String,
    #[arg(long)]
    pub product_name: String,
    #[arg(long, default_value = "general")]
    pub category: String,
    #[arg(long, default_value = "1")]
    pub quantity: f64,
    #[arg(long, default_value = "unit")]
    pub unit: String,
    #[arg(long)]
    pub location: String,
    /// Id of the record this one follows
    #[arg(long)]
    pub previous: Option<String>,
    /// Extra event detail as key=value (repeatable)
    #[arg(long = "detail")]
    pub details: Vec<String>,
}
