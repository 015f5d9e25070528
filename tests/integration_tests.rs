use anyhow::Result;
use card_loader::{parse_cards, AnkiClient, AnkiRequest, CliConfig, HttpTransport, RetryPolicy, Uploader};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;

fn test_config(endpoint: String) -> CliConfig {
    CliConfig {
        input: "cardData.txt".to_string(),
        endpoint,
        category: "IOL".to_string(),
        month: "February".to_string(),
        max_retries: 3,
        retry_delay_ms: 0,
        card_delay_ms: 0,
        verbose: false,
    }
}

fn test_client(endpoint: String, max_attempts: u32) -> AnkiClient<HttpTransport> {
    AnkiClient::new(
        HttpTransport::new(endpoint),
        RetryPolicy {
            max_attempts,
            delay: Duration::ZERO,
        },
    )
}

#[tokio::test]
async fn uploads_all_cards_when_deck_already_exists() -> Result<()> {
    let server = MockServer::start();

    let deck_names_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_partial(r#"{"action": "deckNames"}"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "result": ["Default", "IOL::February::Cell Biology"],
                "error": null
            }));
    });
    let create_deck_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_partial(r#"{"action": "createDeck"}"#);
        then.status(200)
            .json_body(json!({ "result": 1519323742721i64, "error": null }));
    });
    let add_note_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_partial(r#"{"action": "addNote"}"#);
        then.status(200)
            .json_body(json!({ "result": 1519323742722i64, "error": null }));
    });

    let raw = "Topic 2: Cell Biology\n\
               Card 1\n\
               Front: What is a ribosome?\n\
               Back: The site of protein synthesis.\n\
               Card 2\n\
               Front: What does the mitochondrion do?\n\
               Back: Produces ATP.\n";
    let parsed = parse_cards(raw);
    assert_eq!(parsed.topic, "Cell Biology");
    assert_eq!(parsed.cards.len(), 2);

    let uploader = Uploader::new(test_client(server.url("/"), 3), test_config(server.url("/")));
    let summary = uploader.run(&parsed).await?;

    assert_eq!(summary.deck, "IOL::February::Cell Biology");
    assert_eq!(summary.uploaded, 2);
    assert_eq!(summary.failed, 0);

    // Deck was present on the first listing, so creation is skipped entirely.
    deck_names_mock.assert_hits(1);
    create_deck_mock.assert_hits(0);
    add_note_mock.assert_hits(2);
    Ok(())
}

#[tokio::test]
async fn aborts_run_when_deck_creation_keeps_failing() -> Result<()> {
    let server = MockServer::start();

    let deck_names_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_partial(r#"{"action": "deckNames"}"#);
        then.status(200)
            .json_body(json!({ "result": ["Default"], "error": null }));
    });
    let create_deck_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_partial(r#"{"action": "createDeck"}"#);
        then.status(200)
            .json_body(json!({ "result": null, "error": "collection is not available" }));
    });
    let add_note_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_partial(r#"{"action": "addNote"}"#);
        then.status(200)
            .json_body(json!({ "result": 1519323742722i64, "error": null }));
    });

    let parsed = parse_cards("Topic: Botany\nCard 1\nFront: Q\nBack: A\n");
    let mut config = test_config(server.url("/"));
    config.max_retries = 2;

    let uploader = Uploader::new(test_client(server.url("/"), 2), config);
    let err = uploader.run(&parsed).await.unwrap_err();

    assert!(err.to_string().contains("2 attempts"));
    assert!(err.to_string().contains("collection is not available"));

    deck_names_mock.assert_hits(1);
    create_deck_mock.assert_hits(2);
    add_note_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn add_note_carries_the_fixed_note_shape() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_partial(r#"{"action": "deckNames"}"#);
        then.status(200)
            .json_body(json!({ "result": ["IOL::February::Biology"], "error": null }));
    });
    let add_note_mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body_partial(
            r#"{
                "action": "addNote",
                "version": 6,
                "params": {
                    "note": {
                        "deckName": "IOL::February::Biology",
                        "modelName": "Basic",
                        "fields": { "Front": "Q", "Back": "A" },
                        "options": { "allowDuplicate": true },
                        "tags": ["auto-added"]
                    }
                }
            }"#,
        );
        then.status(200)
            .json_body(json!({ "result": 1519323742722i64, "error": null }));
    });

    let parsed = parse_cards("Topic: Biology\nCard 1\nFront: Q\nBack: A\n");
    let uploader = Uploader::new(test_client(server.url("/"), 3), test_config(server.url("/")));
    let summary = uploader.run(&parsed).await?;

    assert_eq!(summary.uploaded, 1);
    add_note_mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn http_failures_are_retried_up_to_the_bound() {
    let server = MockServer::start();

    let failing_mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(500);
    });

    let client = test_client(server.url("/"), 3);
    let err = client.call(&AnkiRequest::deck_names()).await.unwrap_err();

    assert!(err.to_string().contains("3 attempts"));
    failing_mock.assert_hits(3);
}

#[tokio::test]
async fn reads_card_file_from_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("cardData.txt");
    std::fs::write(
        &input_path,
        "Topic 1: Genetics\nCard 1\nFront: What is DNA?\nBack: Deoxyribonucleic acid.\n",
    )?;

    let raw = std::fs::read_to_string(&input_path)?;
    let parsed = parse_cards(&raw);

    assert_eq!(parsed.topic, "Genetics");
    assert_eq!(parsed.cards.len(), 1);
    assert_eq!(parsed.cards[0].front, "What is DNA?");
    Ok(())
}
