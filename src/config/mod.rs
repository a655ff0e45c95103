pub mod toml_file;

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "chainbot")]
#[command(about = "Answers chain-explorer queries as paginated fixed-width reports")]
pub struct BotConfig {
    /// Indexer API base (chain parameters, governance, pgf, player search)
    #[arg(long, default_value = "https://it.api.namada.red/api/v1")]
    pub indexer_base: String,

    /// Node RPC base (sync status)
    #[arg(long, default_value = "https://rpc-namada.cosmostation.io")]
    pub rpc_base: String,

    /// Transaction lookup API base
    #[arg(long, default_value = "https://api-namada.cosmostation.io")]
    pub tx_base: String,

    /// Validator ranking API base
    #[arg(long, default_value = "https://namadafinder.cryptosj.net")]
    pub validators_base: String,

    #[arg(long, default_value = "10")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Optional TOML file overriding the endpoint settings
    #[arg(long)]
    pub config_file: Option<String>,

    /// Command name (help lists the known ones)
    pub command: String,

    /// Command arguments (transaction hash, player query)
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl BotConfig {
    pub fn validators_url(&self) -> String {
        format!("{}/sortedResults", self.validators_base)
    }

    pub fn parameters_url(&self) -> String {
        format!("{}/chain/parameter", self.indexer_base)
    }

    pub fn chain_info_url(&self) -> String {
        format!("{}/chain/info", self.indexer_base)
    }

    pub fn node_status_url(&self) -> String {
        format!("{}/status", self.rpc_base)
    }

    pub fn proposals_url(&self) -> String {
        format!("{}/chain/governance/proposals", self.indexer_base)
    }

    pub fn stewards_url(&self) -> String {
        format!("{}/chain/pgf/stewards", self.indexer_base)
    }

    pub fn transaction_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.tx_base, hash)
    }

    pub fn player_search_url(&self, query: &str) -> String {
        format!("{}/player/search/{}?player_kind=Crew", self.indexer_base, query)
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        validate_url("indexer_base", &self.indexer_base)?;
        validate_url("rpc_base", &self.rpc_base)?;
        validate_url("tx_base", &self.tx_base)?;
        validate_url("validators_base", &self.validators_base)?;
        validate_positive("request_timeout_secs", self.request_timeout_secs)?;
        Ok(())
    }
}
