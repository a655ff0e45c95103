//! Maps inbound command names onto one pipeline run each:
//! fetch -> normalize -> present. Always replies; errors never escape.

use crate::config::BotConfig;
use crate::core::{normalize, present};
use crate::domain::model::{OutgoingMessage, ReportKind};
use crate::domain::ports::Fetcher;
use crate::utils::error::{BotError, Result};

pub const HELP_TEXT: &str = "\
Known commands:
  topvalidator             top validators by voting power
  proposals                all governance proposals
  pendingproposals         proposals still pending
  votingproposals          proposals in their voting period
  info                     chain parameters and node status
  pgf                      public goods funding summary
  steward                  list of PGF stewards
  txn <hash>               transaction lookup
  searchplayer <query>     player lookup (tpknam/tnam prefix)
  help                     this message";

pub async fn handle_command(
    config: &BotConfig,
    fetcher: &dyn Fetcher,
    command: &str,
    args: &[String],
) -> Vec<OutgoingMessage> {
    match run_command(config, fetcher, command, args).await {
        Ok(messages) => messages,
        Err(err) => vec![present::error_message(&err)],
    }
}

async fn run_command(
    config: &BotConfig,
    fetcher: &dyn Fetcher,
    command: &str,
    args: &[String],
) -> Result<Vec<OutgoingMessage>> {
    match command {
        "topvalidator" => {
            let payload = fetcher.fetch(&config.validators_url()).await?;
            let rows = normalize::top_validators(&payload)?;
            present::table_messages(ReportKind::TopValidators, rows)
        }
        "proposals" | "pendingproposals" | "votingproposals" => {
            let kind = match command {
                "proposals" => ReportKind::Proposals,
                "pendingproposals" => ReportKind::ProposalsPending,
                _ => ReportKind::ProposalsVoting,
            };
            let payload = fetcher.fetch(&config.proposals_url()).await?;
            let rows = normalize::proposals(kind, &payload)?;
            present::table_messages(kind, rows)
        }
        "info" => {
            let parameters = fetcher.fetch(&config.parameters_url()).await;
            let info = fetcher.fetch(&config.chain_info_url()).await;
            let status = fetcher.fetch(&config.node_status_url()).await;
            match (parameters, info, status) {
                (Ok(parameters), Ok(info), Ok(status)) => {
                    let lines = normalize::chain_info(&parameters, &info, &status)?;
                    Ok(vec![present::summary_message(&lines)])
                }
                (parameters, info, status) => Err(incomplete(&[
                    ("chain parameters", parameters.is_err()),
                    ("chain info", info.is_err()),
                    ("node status", status.is_err()),
                ])),
            }
        }
        "pgf" => {
            let parameters = fetcher.fetch(&config.parameters_url()).await;
            let stewards = fetcher.fetch(&config.stewards_url()).await;
            match (parameters, stewards) {
                (Ok(parameters), Ok(stewards)) => {
                    let lines = normalize::pgf_summary(&parameters, &stewards)?;
                    Ok(vec![present::summary_message(&lines)])
                }
                (parameters, stewards) => Err(incomplete(&[
                    ("chain parameters", parameters.is_err()),
                    ("stewards", stewards.is_err()),
                ])),
            }
        }
        "steward" => {
            let payload = fetcher.fetch(&config.stewards_url()).await?;
            let lines = normalize::steward_list(&payload)?;
            Ok(vec![present::summary_message(&lines)])
        }
        "txn" => {
            let hash = args.first().ok_or_else(|| {
                BotError::InvalidQuery("please provide a transaction hash".to_string())
            })?;
            let payload = fetcher.fetch(&config.transaction_url(hash)).await?;
            let lines = normalize::transaction(&payload)?;
            Ok(vec![present::summary_message(&lines)])
        }
        "searchplayer" => {
            let query = args.join(" ");
            normalize::validate_player_query(&query)?;
            let payload = fetcher.fetch(&config.player_search_url(&query)).await?;
            let lines = normalize::player_search(&payload)?;
            Ok(vec![present::summary_message(&lines)])
        }
        "help" | "start" => Ok(vec![OutgoingMessage::plain(HELP_TEXT)]),
        other => Ok(vec![OutgoingMessage::plain(format!(
            "Unknown command: {other}\n\n{HELP_TEXT}"
        ))]),
    }
}

// Composite reports are all-or-nothing; the error names every leg
// that failed, not just the first.
fn incomplete(legs: &[(&str, bool)]) -> BotError {
    let missing: Vec<&str> = legs
        .iter()
        .filter(|(_, failed)| *failed)
        .map(|(name, _)| *name)
        .collect();
    BotError::IncompleteSource {
        missing: missing.join(", "),
    }
}
