//! Context formatter: one pass over the ranked passages, two renderings.

use bedrock_client::RetrievedPassage;

/// The two representations of the retrieved context.
///
/// `display` is the annotated block shown to the user; `prompt_context` is
/// the raw material interpolated into the generation prompt. The latter is
/// the order-preserving concatenation of the passage texts with no
/// separator inserted.
#[derive(Clone, Debug)]
pub struct FormattedContext {
    pub display: String,
    pub prompt_context: String,
}

/// Renders both representations from the passages in ranking order.
///
/// Pure function of its inputs: no filtering, no deduplication, no
/// truncation regardless of passage count or length.
///
/// # Example
/// ```
/// # use expander::format_context;
/// let ctx = format_context("Add validation on nominee age", &[]);
/// assert!(ctx.display.starts_with("User query:"));
/// assert!(ctx.prompt_context.is_empty());
/// ```
pub fn format_context(query_text: &str, passages: &[RetrievedPassage]) -> FormattedContext {
    let mut display = format!("User query: {query_text}\n\nTop Retrieval Results:\n\n");
    let mut prompt_context = String::new();

    for (i, p) in passages.iter().enumerate() {
        display.push_str(&format!(
            "[{}] Score: {:.2}\n{}\nSource: {}\n\n",
            i + 1,
            p.score,
            p.text,
            p.source_uri
        ));
        prompt_context.push_str(&p.text);
    }

    FormattedContext {
        display,
        prompt_context,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(text: &str, uri: &str, score: f32) -> RetrievedPassage {
        RetrievedPassage {
            text: text.into(),
            source_uri: uri.into(),
            score,
        }
    }

    #[test]
    fn numbers_every_entry_in_order() {
        let passages = vec![
            passage("first", "s3://kb/a", 0.91),
            passage("second", "s3://kb/b", 0.77),
            passage("third", "s3://kb/c", 0.5),
        ];
        let ctx = format_context("q", &passages);
        for (i, p) in passages.iter().enumerate() {
            let entry = format!(
                "[{}] Score: {:.2}\n{}\nSource: {}\n\n",
                i + 1,
                p.score,
                p.text,
                p.source_uri
            );
            assert!(ctx.display.contains(&entry));
        }
        // Original order preserved in the display block.
        assert!(ctx.display.find("[1]").unwrap() < ctx.display.find("[2]").unwrap());
        assert!(ctx.display.find("[2]").unwrap() < ctx.display.find("[3]").unwrap());
    }

    #[test]
    fn prompt_context_is_unseparated_concatenation() {
        let passages = vec![
            passage("alpha.", "u1", 0.9),
            passage("beta.", "u2", 0.8),
        ];
        let ctx = format_context("q", &passages);
        assert_eq!(ctx.prompt_context, "alpha.beta.");
    }

    #[test]
    fn scores_render_with_two_decimals() {
        let ctx = format_context("q", &[passage("t", "u", 0.5)]);
        assert!(ctx.display.contains("Score: 0.50"));
    }

    #[test]
    fn empty_result_set_keeps_the_header_only() {
        let ctx = format_context("Add validation on nominee age", &[]);
        assert_eq!(
            ctx.display,
            "User query: Add validation on nominee age\n\nTop Retrieval Results:\n\n"
        );
        assert_eq!(ctx.prompt_context, "");
    }
}
