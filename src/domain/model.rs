use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// AnkiConnect protocol version carried on every request.
pub const ANKI_CONNECT_VERSION: u32 = 6;

/// One flashcard extracted from the input file. Front and back are trimmed and
/// non-empty; the parser drops anything that does not meet that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

/// Parser output: the topic line (or its fallback) plus the cards in source
/// order. Warnings describe skipped chunks and the missing-topic case.
#[derive(Debug, Clone, Default)]
pub struct ParsedCards {
    pub topic: String,
    pub cards: Vec<Card>,
    pub warnings: Vec<String>,
}

/// Request envelope for the AnkiConnect JSON-RPC-like protocol.
#[derive(Debug, Clone, Serialize)]
pub struct AnkiRequest {
    pub action: &'static str,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl AnkiRequest {
    fn new(action: &'static str, params: Option<Value>) -> Self {
        Self {
            action,
            version: ANKI_CONNECT_VERSION,
            params,
        }
    }

    pub fn deck_names() -> Self {
        Self::new("deckNames", None)
    }

    pub fn create_deck(deck: &str) -> Self {
        Self::new("createDeck", Some(json!({ "deck": deck })))
    }

    pub fn add_note(deck: &str, card: &Card) -> Self {
        Self::new(
            "addNote",
            Some(json!({
                "note": {
                    "deckName": deck,
                    "modelName": "Basic",
                    "fields": { "Front": card.front, "Back": card.back },
                    "options": { "allowDuplicate": true },
                    "tags": ["auto-added"]
                }
            })),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnkiResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of one upload run, reported by the orchestrator to the caller.
#[derive(Debug, Clone, Default)]
pub struct UploadSummary {
    pub deck: String,
    pub attempted: usize,
    pub uploaded: usize,
    pub failed: usize,
}
