use lexi_core::definition::Definition;
use lexi_core::entities::SavedWord;
use serde::Serialize;

use crate::output::TextView;
use crate::output::table::render_table;

/// Saved words as returned by `list` and `search`.
#[derive(Debug, Serialize)]
pub struct WordListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub words: Vec<SavedWord>,
}

impl TextView for WordListResponse {
    fn to_text(&self) -> String {
        if self.words.is_empty() {
            return match &self.query {
                Some(query) => format!("(no saved words matching '{query}')"),
                None => String::from("(no saved words)"),
            };
        }

        let rows = self
            .words
            .iter()
            .map(|word| {
                vec![
                    word.word.clone(),
                    sense_summary(word),
                    word.saved_at.format("%Y-%m-%d %H:%M").to_string(),
                ]
            })
            .collect::<Vec<_>>();
        render_table(&["word", "senses", "saved"], &rows)
    }
}

/// Number of stored senses, or `?` when the payload does not decode.
pub fn sense_summary(word: &SavedWord) -> String {
    word.parse_definitions().map_or_else(
        |_| String::from("?"),
        |definitions| {
            definitions
                .iter()
                .map(Definition::sense_count)
                .sum::<usize>()
                .to_string()
        },
    )
}
