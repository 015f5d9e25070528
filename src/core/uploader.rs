use crate::core::client::AnkiClient;
use crate::domain::model::{ParsedCards, UploadSummary};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{LoaderError, Result};

/// Drives one upload run: derive the deck name, make sure the deck exists,
/// then push each card in order with a pause between submissions.
pub struct Uploader<T: Transport, C: ConfigProvider> {
    client: AnkiClient<T>,
    config: C,
}

impl<T: Transport, C: ConfigProvider> Uploader<T, C> {
    pub fn new(client: AnkiClient<T>, config: C) -> Self {
        Self { client, config }
    }

    /// `::` nests sub-decks in Anki.
    pub fn deck_name(&self, topic: &str) -> String {
        format!("{}::{}::{}", self.config.category(), self.config.month(), topic)
    }

    pub async fn run(&self, parsed: &ParsedCards) -> Result<UploadSummary> {
        let deck = self.deck_name(&parsed.topic);
        tracing::info!("Using deck name: \"{}\"", deck);

        self.ensure_deck(&deck).await?;

        let mut summary = UploadSummary {
            deck: deck.clone(),
            attempted: parsed.cards.len(),
            ..Default::default()
        };

        for card in &parsed.cards {
            match self.client.add_note(&deck, card).await {
                Ok(_) => {
                    tracing::info!("Added card \"{}\" to \"{}\"", card.front, deck);
                    summary.uploaded += 1;
                }
                Err(err) => {
                    // Best-effort once the deck exists; keep going.
                    tracing::error!("Error adding card \"{}\" to \"{}\": {}", card.front, deck, err);
                    summary.failed += 1;
                }
            }
            // The daemon is single-threaded; back-to-back requests get the
            // connection reset, so throttle between submissions.
            tokio::time::sleep(self.config.card_delay()).await;
        }

        Ok(summary)
    }

    /// Checks for the deck and creates it when absent, re-listing afterwards
    /// to confirm the service really has it. Any failure here aborts the run
    /// before cards are touched.
    async fn ensure_deck(&self, deck: &str) -> Result<()> {
        let existing = self.client.deck_names().await?;
        if existing.iter().any(|d| d == deck) {
            tracing::info!("Deck \"{}\" already exists", deck);
            return Ok(());
        }

        self.client.create_deck(deck).await?;

        let existing = self.client.deck_names().await?;
        if !existing.iter().any(|d| d == deck) {
            return Err(LoaderError::DeckNotConfirmed {
                deck: deck.to_string(),
            });
        }
        tracing::info!("Deck \"{}\" confirmed to exist", deck);
        Ok(())
    }
}
