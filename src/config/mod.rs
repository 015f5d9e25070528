use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "card-loader")]
#[command(about = "Parses a flashcard text file and uploads the cards to a local AnkiConnect service")]
pub struct CliConfig {
    /// Input file holding the topic line and Card blocks
    #[arg(long, default_value = "cardData.txt")]
    pub input: String,

    /// AnkiConnect endpoint
    #[arg(long, default_value = "http://localhost:8765")]
    pub endpoint: String,

    /// Top-level deck the month and topic nest under
    #[arg(long, default_value = "IOL")]
    pub category: String,

    /// Month sub-deck
    #[arg(long, default_value = "February")]
    pub month: String,

    /// Attempts per request before giving up
    #[arg(long, default_value = "3")]
    pub max_retries: u32,

    /// Pause between retry attempts, in milliseconds
    #[arg(long, default_value = "1000")]
    pub retry_delay_ms: u64,

    /// Pause between card submissions, in milliseconds
    #[arg(long, default_value = "400")]
    pub card_delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn month(&self) -> &str {
        &self.month
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    fn card_delay(&self) -> Duration {
        Duration::from_millis(self.card_delay_ms)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("input", &self.input)?;
        validation::validate_non_empty_string("category", &self.category)?;
        validation::validate_non_empty_string("month", &self.month)?;
        validation::validate_positive_number("max_retries", self.max_retries as usize, 1)?;
        Ok(())
    }
}
