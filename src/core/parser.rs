use crate::domain::model::{Card, ParsedCards};
use regex::Regex;

pub const DEFAULT_TOPIC: &str = "Default Topic";

/// Parses raw flashcard text into a topic and an ordered list of cards.
///
/// The expected shape is a `Topic[ N]:` line followed by `Card N` blocks, each
/// carrying a `Front:` and a `Back:` label. Malformed blocks are skipped with a
/// warning, never failing the whole parse. The caller supplies the text, so
/// this stays a pure function.
pub fn parse_cards(raw: &str) -> ParsedCards {
    let mut warnings = Vec::new();

    // Topic runs until the first line starting with "Card", or end of input.
    let topic_re = Regex::new(r"(?s)Topic\s*\d*:\s*(.*?)(?:\nCard|$)").unwrap();
    let topic = match topic_re.captures(raw) {
        Some(caps) => {
            let topic = caps[1].trim().to_string();
            tracing::info!("Parsed topic: \"{}\"", topic);
            topic
        }
        None => {
            let msg = format!("No valid topic found in input. Using '{}'.", DEFAULT_TOPIC);
            tracing::warn!("{}", msg);
            warnings.push(msg);
            DEFAULT_TOPIC.to_string()
        }
    };

    let chunk_re = Regex::new(r"Card \d+\s*").unwrap();
    let front_re = Regex::new(r"(?s)Front:\s*(.*?)\nBack:").unwrap();
    let back_re = Regex::new(r"(?s)Back:\s*(.*)").unwrap();

    let mut cards = Vec::new();
    let chunks = chunk_re
        .split(raw)
        .filter(|chunk| !chunk.trim().is_empty() && !chunk.starts_with("Topic"));

    for (index, chunk) in chunks.enumerate() {
        let (front, back) = match (front_re.captures(chunk), back_re.captures(chunk)) {
            (Some(front), Some(back)) => (
                front[1].trim().to_string(),
                back[1].trim().to_string(),
            ),
            _ => {
                let msg = format!("Invalid card format in chunk {}. Skipping.", index + 1);
                tracing::warn!("{}", msg);
                warnings.push(msg);
                continue;
            }
        };

        if front.is_empty() || back.is_empty() {
            let msg = format!("Empty front or back in card {}. Skipping.", index + 1);
            tracing::warn!("{}", msg);
            warnings.push(msg);
            continue;
        }

        cards.push(Card { front, back });
    }

    tracing::info!("Parsed {} valid cards", cards.len());
    if cards.is_empty() {
        // Not fatal here; the orchestrator decides whether to proceed.
        tracing::error!("No valid cards parsed from input");
    }

    ParsedCards {
        topic,
        cards,
        warnings,
    }
}
