use serde::Serialize;

use crate::cli::OutputFormat;

pub mod table;

/// Human-readable rendering used by `--format text`.
pub trait TextView {
    fn to_text(&self) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Text => Ok(value.to_text()),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{TextView, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        word: &'static str,
        count: u32,
    }

    impl TextView for Example {
        fn to_text(&self) -> String {
            format!("{} x{}", self.word, self.count)
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { word: "cat", count: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["word"], "cat");
        assert_eq!(parsed["count"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { word: "cat", count: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["word"], "cat");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn text_render_uses_text_view() {
        let value = Example { word: "cat", count: 7 };
        let out = render(&value, OutputFormat::Text).expect("text render should work");
        assert_eq!(out, "cat x7");
    }
}
