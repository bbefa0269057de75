use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::words::WordListResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexi search`. A blank query lists every saved word.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&find(args, ctx).await?, flags.format)
}

async fn find(args: &SearchArgs, ctx: &AppContext) -> anyhow::Result<WordListResponse> {
    let words = ctx.store.search_once(&args.query).await?;
    let query = (!args.query.trim().is_empty()).then(|| args.query.clone());
    Ok(WordListResponse { query, words })
}

#[cfg(test)]
mod tests {
    use lexi_core::entities::SavedWord;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::{TextView, render};

    async fn ctx_with(words: &[&str]) -> AppContext {
        let ctx = AppContext::in_memory().await;
        for word in words {
            ctx.store.save(&SavedWord::bare(*word)).await.unwrap();
        }
        ctx
    }

    fn args(query: &str) -> SearchArgs {
        SearchArgs {
            query: query.to_string(),
        }
    }

    fn names(response: &WordListResponse) -> Vec<&str> {
        response.words.iter().map(|w| w.word.as_str()).collect()
    }

    #[tokio::test]
    async fn blank_query_lists_everything() {
        let ctx = ctx_with(&["apple", "Banana", "cherry"]).await;

        for query in ["", " ", "\t"] {
            let response = find(&args(query), &ctx).await.unwrap();
            assert_eq!(response.query, None);
            assert_eq!(names(&response), vec!["cherry", "Banana", "apple"]);
            assert_eq!(response.words, ctx.store.snapshot().await.unwrap());
        }
    }

    #[tokio::test]
    async fn query_matches_case_insensitively() {
        let ctx = ctx_with(&["apple", "Banana", "cherry"]).await;

        let response = find(&args("AN"), &ctx).await.unwrap();
        assert_eq!(response.query.as_deref(), Some("AN"));
        assert_eq!(names(&response), vec!["Banana"]);
        assert!(response.to_text().contains("Banana"));
        assert!(!response.to_text().contains("apple"));
    }

    #[tokio::test]
    async fn no_match_names_the_query() {
        let ctx = ctx_with(&["apple"]).await;

        let response = find(&args("zzz"), &ctx).await.unwrap();
        assert_eq!(
            render(&response, OutputFormat::Text).unwrap(),
            "(no saved words matching 'zzz')"
        );
    }

    #[tokio::test]
    async fn raw_output_is_json() {
        let ctx = ctx_with(&["apple", "Banana"]).await;

        let response = find(&args("an"), &ctx).await.unwrap();
        let raw = render(&response, OutputFormat::Raw).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["query"], "an");
        assert_eq!(json["words"][0]["word"], "Banana");
        assert_eq!(json["words"].as_array().map(Vec::len), Some(1));
    }
}
