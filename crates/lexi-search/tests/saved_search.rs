//! Saved-words screen and dictionary screen driven together, the way a front
//! end would: look a word up, save the result, then find it again.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lexi_core::definition::{Definition, Meaning, MeaningDefinition};
use lexi_core::entities::SavedWord;
use lexi_core::state::LookupState;
use lexi_db::{IN_MEMORY, WordStore};
use lexi_lookup::{DefinitionLookup, LookupError};
use lexi_search::{DEFAULT_QUIET_PERIOD, LookupSession, SavedSearch};
use pretty_assertions::assert_eq;

struct OneSense;

#[async_trait]
impl DefinitionLookup for OneSense {
    async fn fetch(&self, word: &str) -> Result<Vec<Definition>, LookupError> {
        Ok(vec![Definition {
            word: word.to_string(),
            meanings: vec![Meaning {
                part_of_speech: "noun".into(),
                definitions: vec![MeaningDefinition {
                    definition: format!("the meaning of {word}"),
                    example: None,
                }],
            }],
        }])
    }
}

fn names(words: &[SavedWord]) -> Vec<String> {
    words.iter().map(|w| w.word.clone()).collect()
}

async fn settle(search: &SavedSearch, expected: &[&str]) {
    let mut rx = search.results();
    tokio::time::timeout(
        Duration::from_secs(5),
        rx.wait_for(|words| names(words) == expected),
    )
    .await
    .expect("results did not settle")
    .unwrap();
}

#[tokio::test]
async fn saved_words_screen_walkthrough() {
    let store = Arc::new(WordStore::open_local(IN_MEMORY).await.unwrap());
    let search = SavedSearch::new(Arc::clone(&store));
    settle(&search, &[]).await;

    search.save(&SavedWord::bare("apple")).await.unwrap();
    settle(&search, &["apple"]).await;

    search.save(&SavedWord::bare("banana")).await.unwrap();
    settle(&search, &["banana", "apple"]).await;

    search.set_query("an");
    settle(&search, &["banana"]).await;

    search.clear_all().await.unwrap();
    settle(&search, &[]).await;

    search.set_query("");
    settle(&search, &[]).await;
}

#[tokio::test]
async fn looked_up_word_is_saved_and_found() {
    let store = Arc::new(WordStore::open_local(IN_MEMORY).await.unwrap());
    let search = SavedSearch::new(Arc::clone(&store));
    let session = LookupSession::new(Arc::new(OneSense), Duration::from_millis(20));
    let mut states = session.subscribe();

    session.submit("Serendipity");
    let state = tokio::time::timeout(
        Duration::from_secs(5),
        states.wait_for(LookupState::is_terminal),
    )
    .await
    .expect("lookup did not finish")
    .unwrap()
    .clone();

    let LookupState::Success(definitions) = state else {
        panic!("expected success, got {state:?}");
    };
    let saved = SavedWord::from_definitions("Serendipity", &definitions).unwrap();
    search.save(&saved).await.unwrap();

    search.set_query("DIP");
    settle(&search, &["Serendipity"]).await;

    let stored = store.get("Serendipity").await.unwrap().unwrap();
    assert_eq!(stored.parse_definitions().unwrap(), definitions);
}

#[tokio::test]
async fn search_results_follow_other_writers() {
    let store = Arc::new(WordStore::open_local(IN_MEMORY).await.unwrap());
    let search = SavedSearch::new(Arc::clone(&store));
    search.set_query("berry");
    settle(&search, &[]).await;

    let writer = Arc::clone(&store);
    tokio::spawn(async move {
        for word in ["strawberry", "kiwi", "blueberry"] {
            writer.save(&SavedWord::bare(word)).await.unwrap();
        }
    })
    .await
    .unwrap();

    settle(&search, &["blueberry", "strawberry"]).await;
}

#[tokio::test(start_paused = true)]
async fn default_quiet_period_is_three_hundred_millis() {
    let session = LookupSession::new(Arc::new(OneSense), DEFAULT_QUIET_PERIOD);
    let mut states = session.subscribe();

    session.submit("cat");
    tokio::time::advance(Duration::from_millis(250)).await;
    assert_eq!(session.state(), LookupState::Initial);

    states.wait_for(LookupState::is_terminal).await.unwrap();
    assert!(matches!(session.state(), LookupState::Success(ref d) if d[0].word == "cat"));
}
