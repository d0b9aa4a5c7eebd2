//! The yes/no rating question.

use moviequiz_catalog::domain::items::CatalogItem;

/// Lowest threshold a question may ask about.
pub const THRESHOLD_MIN: u32 = 4;

/// Highest threshold a question may ask about.
pub const THRESHOLD_MAX: u32 = 7;

/// A generated question bound to one movie's poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    image_data: Vec<u8>,
    prompt_text: String,
    is_answer_yes: bool,
}

impl Question {
    /// Asks whether `item` is rated strictly above `threshold`.
    ///
    /// A rating equal to the threshold answers "no".
    #[must_use]
    pub fn about(item: &CatalogItem, threshold: u32, image_data: Vec<u8>) -> Self {
        Self {
            image_data,
            prompt_text: prompt_for(threshold),
            is_answer_yes: f64::from(item.rating()) > f64::from(threshold),
        }
    }

    /// Returns the poster bytes.
    #[must_use]
    pub fn image_data(&self) -> &[u8] {
        &self.image_data
    }

    /// Returns the prompt shown to the player.
    #[must_use]
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    /// Returns the correct answer.
    #[must_use]
    pub fn is_answer_yes(&self) -> bool {
        self.is_answer_yes
    }
}

fn prompt_for(threshold: u32) -> String {
    format!("Is the rating of this movie greater than {threshold}?")
}
