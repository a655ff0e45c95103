//! Per-report normalization: validates and coerces raw JSON payloads
//! into row records or summary lines. Shape violations surface as
//! typed errors, never as panics.

use crate::domain::model::{ReportKind, RowRecord};
use crate::utils::error::{BotError, Result};
use serde_json::Value;

/// Base-unit display convention: divide by 1e6, two decimals.
pub fn amount(base_units: f64) -> String {
    format!("{:.2}", base_units / 1_000_000.0)
}

/// `first4 + "..." + last4`; addresses shorter than 8 chars are malformed.
pub fn truncate_address(field: &str, address: &str) -> Result<String> {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 8 {
        return Err(BotError::malformed(field, "address shorter than 8 characters"));
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    Ok(format!("{head}...{tail}"))
}

pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn req_display(entry: &Value, field: &str) -> Result<String> {
    entry
        .get(field)
        .map(scalar)
        .ok_or_else(|| BotError::malformed(field, "missing field"))
}

fn opt_display(entry: &Value, field: &str) -> String {
    entry.get(field).map(scalar).unwrap_or_default()
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Required base-unit field, given as a number or a numeric string.
fn base_amount_display(entry: &Value, field: &str) -> Result<String> {
    let raw = entry
        .get(field)
        .and_then(numeric)
        .ok_or_else(|| BotError::malformed(field, "expected a numeric value"))?;
    Ok(amount(raw))
}

/// Vote tally in base units; absent or null counts as zero.
fn vote_amount_display(entry: &Value, field: &str) -> Result<String> {
    match entry.get(field) {
        None | Some(Value::Null) => Ok(amount(0.0)),
        Some(value) => numeric(value)
            .map(amount)
            .ok_or_else(|| BotError::malformed(field, "expected a numeric value")),
    }
}

pub fn top_validators(payload: &Value) -> Result<Vec<RowRecord>> {
    let entries = payload
        .as_array()
        .ok_or_else(|| BotError::malformed("validators", "expected an array"))?;
    entries.iter().map(validator_row).collect()
}

fn validator_row(entry: &Value) -> Result<RowRecord> {
    let address = entry
        .get("address")
        .and_then(Value::as_str)
        .ok_or_else(|| BotError::malformed("address", "expected a string"))?;
    let voting_power = entry
        .get("votingPower")
        .and_then(Value::as_f64)
        .ok_or_else(|| BotError::malformed("votingPower", "expected a number"))?;

    Ok(RowRecord::new(vec![
        ("Address", truncate_address("address", address)?),
        ("Alias", req_display(entry, "alias")?),
        ("Voting Power", amount(voting_power)),
        ("Percentage", req_display(entry, "percentage")?),
        ("Uptime", req_display(entry, "uptime")?),
    ]))
}

fn result_filter(kind: ReportKind) -> Result<Option<&'static str>> {
    match kind {
        ReportKind::Proposals => Ok(None),
        ReportKind::ProposalsPending => Ok(Some("Pending")),
        ReportKind::ProposalsVoting => Ok(Some("VotingPeriod")),
        other => Err(BotError::Render {
            expected: "a proposal report kind".to_string(),
            got: other.title().to_string(),
        }),
    }
}

/// Filtering happens here, before pagination: row limits bound the
/// post-filter count.
pub fn proposals(kind: ReportKind, payload: &Value) -> Result<Vec<RowRecord>> {
    let wanted = result_filter(kind)?;
    let entries = payload
        .get("proposals")
        .and_then(Value::as_array)
        .ok_or_else(|| BotError::malformed("proposals", "expected an array"))?;

    let mut rows = Vec::new();
    for entry in entries {
        if let Some(wanted) = wanted {
            if entry.get("result").and_then(Value::as_str) != Some(wanted) {
                continue;
            }
        }
        rows.push(proposal_row(kind, entry)?);
    }
    Ok(rows)
}

fn proposal_row(kind: ReportKind, entry: &Value) -> Result<RowRecord> {
    let author = match entry
        .get("author")
        .and_then(|author| author.get("Account"))
        .and_then(Value::as_str)
    {
        Some(account) => truncate_address("author.Account", account)?,
        None => String::new(),
    };

    let mut fields = vec![
        ("ID", opt_display(entry, "id")),
        ("Kind", opt_display(entry, "kind")),
        ("Author", author),
        ("Start Epoch", opt_display(entry, "start_epoch")),
        ("End Epoch", opt_display(entry, "end_epoch")),
        ("Grace Epoch", opt_display(entry, "grace_epoch")),
        ("Result", opt_display(entry, "result")),
    ];
    if kind == ReportKind::ProposalsVoting {
        fields.push(("Yay", vote_amount_display(entry, "yay_votes")?));
        fields.push(("Nay", vote_amount_display(entry, "nay_votes")?));
        fields.push(("Abstain", vote_amount_display(entry, "abstain_votes")?));
    }
    Ok(RowRecord::new(fields))
}

/// Composite chain report from three sources; the caller guarantees
/// all three fetched successfully.
pub fn chain_info(parameters: &Value, info: &Value, status: &Value) -> Result<Vec<String>> {
    let params = parameters
        .get("parameters")
        .ok_or_else(|| BotError::malformed("parameters", "missing field"))?;
    let sync_info = status
        .get("result")
        .and_then(|result| result.get("sync_info"))
        .ok_or_else(|| BotError::malformed("result.sync_info", "missing field"))?;
    let block_time = info
        .get("block_time")
        .and_then(Value::as_f64)
        .ok_or_else(|| BotError::malformed("block_time", "expected a number"))?;

    Ok(vec![
        format!("Block time: {:.3}", block_time),
        format!(
            "Latest block height: {}",
            req_display(sync_info, "latest_block_height")?
        ),
        format!(
            "Latest block time (UTC): {}",
            strip_subseconds(&req_display(sync_info, "latest_block_time")?)
        ),
        format!(
            "Total transparent txs: {}",
            req_display(info, "total_transparent_txs")?
        ),
        format!(
            "Total shielded txs: {}",
            req_display(info, "total_shielded_txs")?
        ),
        format!("Max validators: {}", req_display(params, "max_validators")?),
        format!(
            "Total native token supply: {}",
            base_amount_display(params, "total_native_token_supply")?
        ),
        format!(
            "Total staked native token: {}",
            base_amount_display(params, "total_staked_native_token")?
        ),
    ])
}

// Upstream timestamps carry sub-second digits plus a trailing Z; the
// last 4 characters are dropped for display.
fn strip_subseconds(timestamp: &str) -> String {
    let chars: Vec<char> = timestamp.chars().collect();
    if chars.len() <= 4 {
        return timestamp.to_string();
    }
    chars[..chars.len() - 4].iter().collect()
}

fn steward_names(payload: &Value) -> Result<Vec<String>> {
    let stewards = payload
        .get("stewards")
        .and_then(Value::as_array)
        .ok_or_else(|| BotError::malformed("stewards", "expected an array"))?;
    stewards
        .iter()
        .map(|steward| {
            steward
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| BotError::malformed("stewards", "expected string entries"))
        })
        .collect()
}

pub fn pgf_summary(parameters: &Value, stewards: &Value) -> Result<Vec<String>> {
    let params = parameters
        .get("parameters")
        .ok_or_else(|| BotError::malformed("parameters", "missing field"))?;
    let names = steward_names(stewards)?;

    Ok(vec![
        format!("Epoch: {}", req_display(params, "epoch")?),
        format!("Total PGF Stewards: {}", names.len()),
        format!("PGF Treasury: {}", req_display(params, "pgf_treasury")?),
        format!(
            "PGF Inflation(%): {}%",
            req_display(params, "pgf_treasury_inflation")?
        ),
        format!(
            "Steward Incent/year (%): {}%",
            req_display(params, "pos_inflation")?
        ),
    ])
}

pub fn steward_list(payload: &Value) -> Result<Vec<String>> {
    let names = steward_names(payload)?;
    let mut lines = vec![format!("List of Stewards | Total: {}", names.len())];
    lines.extend(names);
    Ok(lines)
}

/// Transaction summary; the optional `tx` object is flattened exactly
/// one nesting level deep.
pub fn transaction(payload: &Value) -> Result<Vec<String>> {
    let mut lines = vec![
        format!("Hash: {}", req_display(payload, "hash")?),
        format!("Block ID: {}", req_display(payload, "block_id")?),
        format!("Transaction Type: {}", req_display(payload, "tx_type")?),
        format!("Wrapper ID: {}", req_display(payload, "wrapper_id")?),
        format!("Code: {}", req_display(payload, "code")?),
        format!("Data: {}", req_display(payload, "data")?),
    ];

    if let Some(tx) = payload.get("tx").filter(|tx| !tx.is_null()) {
        let sections = tx
            .as_object()
            .ok_or_else(|| BotError::malformed("tx", "expected an object"))?;
        lines.push("Transaction Details:".to_string());
        for (section, details) in sections {
            let entries = details
                .as_object()
                .ok_or_else(|| BotError::malformed("tx", "expected object entries"))?;
            lines.push(String::new());
            lines.push(format!("{section}:"));
            for (key, value) in entries {
                lines.push(format!("{key}: {}", scalar(value)));
            }
        }
    }
    Ok(lines)
}

const PLAYER_QUERY_PREFIXES: [&str; 2] = ["tpknam", "tnam"];

/// Precondition on user input, checked before any fetch happens.
pub fn validate_player_query(query: &str) -> Result<()> {
    if PLAYER_QUERY_PREFIXES
        .iter()
        .any(|prefix| query.starts_with(prefix))
    {
        Ok(())
    } else {
        Err(BotError::InvalidQuery(
            "player queries must start with `tpknam` or `tnam`".to_string(),
        ))
    }
}

pub fn player_search(payload: &Value) -> Result<Vec<String>> {
    let players = payload
        .get("players")
        .and_then(Value::as_array)
        .ok_or_else(|| BotError::malformed("players", "expected an array"))?;
    let player = players.first().ok_or(BotError::NotFound)?;
    let score = player
        .get("score")
        .and_then(Value::as_i64)
        .ok_or_else(|| BotError::malformed("score", "expected an integer"))?;

    Ok(vec![
        format!("Moniker: {}", req_display(player, "moniker")?),
        format!("Player Address: {}", req_display(player, "player_address")?),
        format!("Score: {}", thousands(score)),
        format!(
            "Ranking Position: {}",
            req_display(player, "ranking_position")?
        ),
        format!("Avatar URL: {}", req_display(player, "avatar_url")?),
        format!("Is Banned: {}", req_display(player, "is_banned")?),
    ])
}
