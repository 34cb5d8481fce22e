//! Prompt rendering for journal composition.

use crate::StyleConfig;
use chronicle_core::{DatedItem, ItemKind};
use std::fmt::Write;

/// Render the full generation prompt: the fixed instruction block followed
/// by the chronologically ordered item listing.
///
/// Items must already be sorted; the composer owns the ordering step.
pub(crate) fn render_prompt(style: &StyleConfig, items: &[&DatedItem]) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "{} I have prepared a draft of a journal from my photos and notes. \
         Please rewrite it following the rules below.",
        style.persona
    );
    prompt.push('\n');
    prompt.push_str("The journal:\n");
    prompt.push_str(
        "- answers questions like \"What happened?\", \"What did I experience?\", \
         \"What did I feel?\"\n",
    );
    prompt.push_str("- starts directly with the title; no introduction before it\n");
    prompt.push_str("- is formatted in markdown, and references every detail in the draft\n");
    prompt.push_str("- includes every image, in the form ![](url)\n");
    let _ = writeln!(
        prompt,
        "- connects all the entries coherently, in at most {} paragraphs",
        style.max_paragraphs
    );
    prompt.push_str("- is written in the first person, in a casual conversational register\n");
    let _ = writeln!(prompt, "- is at least {} words long", style.min_words);
    prompt.push_str("- may reference the timestamps but should not repeat them literally\n");
    prompt.push_str(
        "- may be creative in wording but must not change the meaning of the entries\n",
    );
    prompt.push_str("- may use emojis and other expressive elements if they fit\n");
    if style.require_title {
        prompt.push_str("- opens with a creative markdown title relevant to the content\n");
    }

    prompt.push_str("\nHere are the dated entries, oldest first:\n\n");
    for item in items {
        render_item(&mut prompt, item);
    }

    prompt
}

fn render_item(prompt: &mut String, item: &DatedItem) {
    let stamp = item.timestamp().to_rfc3339();
    match item.kind() {
        ItemKind::Text => {
            let _ = writeln!(prompt, "- [{}] text: {}", stamp, item.content());
        }
        ItemKind::Image => {
            let url = item.source_url().as_deref().unwrap_or_default();
            let _ = writeln!(prompt, "- [{}] image: {} ({})", stamp, item.content(), url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn prompt_lists_items_with_timestamps_and_urls() {
        let style = StyleConfig::default();
        let when = Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap();
        let text = DatedItem::text(when, "Dinner by the water");
        let photo = chronicle_core::CaptionedPhoto::new(
            uuid::Uuid::new_v4(),
            "https://static.example.com/a.jpg",
            "A sunny beach",
            when,
        )
        .unwrap();
        let image = DatedItem::image(photo);

        let rendered = render_prompt(&style, &[&text, &image]);
        assert!(rendered.contains("text: Dinner by the water"));
        assert!(rendered.contains("image: A sunny beach (https://static.example.com/a.jpg)"));
        assert!(rendered.contains("at most 3 paragraphs"));
        assert!(rendered.contains("at least 100 words"));
    }

    #[test]
    fn title_rule_follows_style() {
        let mut style = StyleConfig::default();
        style.require_title = false;
        let when = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let item = DatedItem::text(when, "note");
        let rendered = render_prompt(&style, &[&item]);
        assert!(!rendered.contains("creative markdown title"));
    }
}
