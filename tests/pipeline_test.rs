use chainbot::core::dispatch;
use chainbot::domain::model::MessageFormat;
use chainbot::{BotConfig, HttpFetcher};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn test_config(base: &str) -> BotConfig {
    BotConfig {
        indexer_base: base.to_string(),
        rpc_base: base.to_string(),
        tx_base: base.to_string(),
        validators_base: base.to_string(),
        request_timeout_secs: 5,
        verbose: false,
        config_file: None,
        command: String::new(),
        args: vec![],
    }
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(Duration::from_secs(5)).unwrap()
}

// title border, title, rule, header, rule ... bottom rule
fn body_rows(text: &str) -> usize {
    text.lines().count() - 6
}

#[tokio::test]
async fn thirty_validators_paginate_into_two_chunks() {
    let server = MockServer::start();
    let entries: Vec<_> = (0..30)
        .map(|i| {
            json!({
                "address": format!("tnam1validator{i:04}"),
                "alias": format!("node-{i}"),
                "votingPower": 1_000_000 + i,
                "percentage": "0.5",
                "uptime": "100%"
            })
        })
        .collect();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/sortedResults");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!(entries));
    });

    let config = test_config(&server.url(""));
    let messages = dispatch::handle_command(&config, &fetcher(), "topvalidator", &[]).await;

    api_mock.assert();
    assert_eq!(messages.len(), 2);
    assert_eq!(body_rows(&messages[0].text), 25);
    assert_eq!(body_rows(&messages[1].text), 5);
    for message in &messages {
        assert_eq!(message.format, MessageFormat::Preformatted);
        assert!(message.text.contains("Top Validators"));
        assert!(message.text.contains("tnam...0000") || message.text.contains("tnam...0029"));
    }
}

fn proposals_payload() -> serde_json::Value {
    let entry = |id: u64, result: &str| {
        json!({
            "id": id,
            "kind": "default",
            "author": {"Account": "tnam1author9xyz0"},
            "start_epoch": 1,
            "end_epoch": 2,
            "grace_epoch": 3,
            "result": result,
            "yay_votes": "1000000",
            "nay_votes": "0",
            "abstain_votes": "500000"
        })
    };
    json!({"proposals": [
        entry(1, "Pending"),
        entry(2, "VotingPeriod"),
        entry(3, "Pending"),
        entry(4, "ExecutedPassed"),
        entry(5, "Pending"),
    ]})
}

#[tokio::test]
async fn pending_and_voting_commands_filter_before_rendering() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/chain/governance/proposals");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(proposals_payload());
    });

    let config = test_config(&server.url(""));

    let pending = dispatch::handle_command(&config, &fetcher(), "pendingproposals", &[]).await;
    assert_eq!(pending.len(), 1);
    assert_eq!(body_rows(&pending[0].text), 3);
    assert!(pending[0].text.contains("Pending Proposals"));

    let voting = dispatch::handle_command(&config, &fetcher(), "votingproposals", &[]).await;
    assert_eq!(voting.len(), 1);
    assert_eq!(body_rows(&voting[0].text), 1);
    assert!(voting[0].text.contains("Voting Period - Proposals"));
    assert!(voting[0].text.contains("Yay"));
    assert!(voting[0].text.contains("1.00"));
    assert!(voting[0].text.contains("0.50"));
}

#[tokio::test]
async fn filtered_out_everything_yields_a_no_data_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/chain/governance/proposals");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"proposals": [{"id": 1, "result": "ExecutedPassed"}]}));
    });

    let config = test_config(&server.url(""));
    let messages = dispatch::handle_command(&config, &fetcher(), "votingproposals", &[]).await;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].format, MessageFormat::Plain);
    assert_eq!(messages[0].text, "No data for Voting Period - Proposals.");
}

#[tokio::test]
async fn chain_info_joins_three_sources_into_one_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/chain/parameter");
        then.status(200).json_body(json!({"parameters": {
            "total_native_token_supply": "1000000000000",
            "total_staked_native_token": "250000000000",
            "max_validators": 255,
            "epoch": 12
        }}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/chain/info");
        then.status(200).json_body(json!({
            "block_time": 6.001,
            "total_transparent_txs": 100,
            "total_shielded_txs": 50
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/status");
        then.status(200).json_body(json!({"result": {"sync_info": {
            "latest_block_height": "424242",
            "latest_block_time": "2024-02-25T10:15:30.123456789Z"
        }}}));
    });

    let config = test_config(&server.url(""));
    let messages = dispatch::handle_command(&config, &fetcher(), "info", &[]).await;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].format, MessageFormat::Plain);
    assert!(messages[0].text.contains("Block time: 6.001"));
    assert!(messages[0].text.contains("Latest block height: 424242"));
    assert!(messages[0]
        .text
        .contains("Total native token supply: 1000000.00"));
}

#[tokio::test]
async fn chain_info_with_a_failed_leg_emits_no_partial_output() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/chain/parameter");
        then.status(200).json_body(json!({"parameters": {}}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/chain/info");
        then.status(200).json_body(json!({"block_time": 6.0}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/status");
        then.status(500);
    });

    let config = test_config(&server.url(""));
    let messages = dispatch::handle_command(&config, &fetcher(), "info", &[]).await;

    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].text,
        "Could not assemble the report: missing node status."
    );
    assert!(!messages[0].text.contains("Block time"));
}

#[tokio::test]
async fn pgf_summary_includes_the_epoch_line() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/chain/parameter");
        then.status(200).json_body(json!({"parameters": {
            "epoch": 42,
            "pgf_treasury": "77000000",
            "pgf_treasury_inflation": 10,
            "pos_inflation": 5
        }}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/chain/pgf/stewards");
        then.status(200).json_body(json!({"stewards": ["tnam1a", "tnam1b"]}));
    });

    let config = test_config(&server.url(""));
    let messages = dispatch::handle_command(&config, &fetcher(), "pgf", &[]).await;

    assert_eq!(messages.len(), 1);
    let text = &messages[0].text;
    assert!(text.starts_with("Epoch: 42\n"));
    assert!(text.contains("Total PGF Stewards: 2"));
    assert!(text.contains("PGF Inflation(%): 10%"));
}

#[tokio::test]
async fn steward_command_lists_every_steward() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/chain/pgf/stewards");
        then.status(200)
            .json_body(json!({"stewards": ["tnam1a", "tnam1b", "tnam1c"]}));
    });

    let config = test_config(&server.url(""));
    let messages = dispatch::handle_command(&config, &fetcher(), "steward", &[]).await;

    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].text,
        "List of Stewards | Total: 3\ntnam1a\ntnam1b\ntnam1c"
    );
}

#[tokio::test]
async fn transaction_lookup_renders_a_flat_summary() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/tx/ABCD1234");
        then.status(200).json_body(json!({
            "hash": "ABCD1234",
            "block_id": "999",
            "tx_type": "Wrapper",
            "wrapper_id": "EF01",
            "code": "c0de",
            "data": "raw",
            "tx": {"Transfer": {"amount": "100", "source": "tnam1src"}}
        }));
    });

    let config = test_config(&server.url(""));
    let args = vec!["ABCD1234".to_string()];
    let messages = dispatch::handle_command(&config, &fetcher(), "txn", &args).await;

    assert_eq!(messages.len(), 1);
    let text = &messages[0].text;
    assert!(text.starts_with("Hash: ABCD1234\n"));
    assert!(text.contains("Transaction Details:"));
    assert!(text.contains("Transfer:"));
    assert!(text.contains("amount: 100"));
}

#[tokio::test]
async fn transaction_404_is_a_single_failure_message() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/tx/UNKNOWN");
        then.status(404);
    });

    let config = test_config(&server.url(""));
    let args = vec!["UNKNOWN".to_string()];
    let messages = dispatch::handle_command(&config, &fetcher(), "txn", &args).await;

    api_mock.assert();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].format, MessageFormat::Plain);
    assert_eq!(messages[0].text, "Failed to fetch data from the API.");
}

#[tokio::test]
async fn player_search_formats_the_first_hit() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/player/search/tnam1player")
            .query_param("player_kind", "Crew");
        then.status(200).json_body(json!({"players": [{
            "moniker": "captain",
            "player_address": "tnam1player",
            "score": 1_234_567,
            "ranking_position": 3,
            "avatar_url": "https://example.com/a.png",
            "is_banned": false
        }]}));
    });

    let config = test_config(&server.url(""));
    let args = vec!["tnam1player".to_string()];
    let messages = dispatch::handle_command(&config, &fetcher(), "searchplayer", &args).await;

    assert_eq!(messages.len(), 1);
    assert!(messages[0].text.contains("Score: 1,234,567"));
    assert!(messages[0].text.contains("Is Banned: false"));
}

#[tokio::test]
async fn empty_player_result_reports_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/player/search/tnam1ghost")
            .query_param("player_kind", "Crew");
        then.status(200).json_body(json!({"players": []}));
    });

    let config = test_config(&server.url(""));
    let args = vec!["tnam1ghost".to_string()];
    let messages = dispatch::handle_command(&config, &fetcher(), "searchplayer", &args).await;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "No information found for this query.");
}
