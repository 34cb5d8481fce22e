//! Title extraction from generated journal text.
//!
//! Models are instructed to start the journal with a markdown heading,
//! but in practice responses often open with stray preamble ("Here's your
//! journal:") or skip the heading entirely. Extraction degrades
//! gracefully instead of erroring: preamble before the first heading is
//! dropped, and a missing heading falls back to a placeholder title.

/// Split generated text into a title and a markdown body.
///
/// The first `#` in the text marks the start of the journal; anything
/// before it is discarded. The title is the first line of the remaining
/// text with leading/trailing `#` and whitespace stripped; the body keeps
/// the remaining text in full, heading line included. When the text
/// contains no `#` at all, the body is the input unchanged and the title
/// is `fallback`. Only the first heading matters; later `#` lines are
/// body content.
///
/// The returned title is never empty: a heading that strips down to
/// nothing also falls back.
///
/// # Examples
///
/// ```
/// use chronicle_composer::extract_title_and_body;
///
/// let (title, body) = extract_title_and_body(
///     "Here you go!\n# Tide Pools 🌊\nWe spent the morning...",
///     "Untitled Entry",
/// );
/// assert_eq!(title, "Tide Pools 🌊");
/// assert_eq!(body, "# Tide Pools 🌊\nWe spent the morning...");
/// ```
pub fn extract_title_and_body(raw: &str, fallback: &str) -> (String, String) {
    let Some(start) = raw.find('#') else {
        return (fallback.to_string(), raw.to_string());
    };

    let body = &raw[start..];
    let heading = body.lines().next().unwrap_or_default();
    let title = heading.trim_matches('#').trim();
    let title = if title.is_empty() { fallback } else { title };
    (title.to_string(), body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Untitled Entry";

    #[test]
    fn drops_preamble_before_first_heading() {
        let (title, body) = extract_title_and_body("intro junk\n# My Title\nBody text", FALLBACK);
        assert_eq!(title, "My Title");
        assert_eq!(body, "# My Title\nBody text");
    }

    #[test]
    fn no_heading_falls_back_and_keeps_body() {
        let raw = "Just a plain paragraph with no heading.";
        let (title, body) = extract_title_and_body(raw, FALLBACK);
        assert_eq!(title, FALLBACK);
        assert_eq!(body, raw);
    }

    #[test]
    fn extraction_is_idempotent() {
        let (title, body) = extract_title_and_body("noise\n# A Good Day\nDetails.", FALLBACK);
        let (title_again, body_again) = extract_title_and_body(&body, FALLBACK);
        assert_eq!(title, title_again);
        assert_eq!(body, body_again);
    }

    #[test]
    fn first_heading_wins_over_later_ones() {
        let (title, body) =
            extract_title_and_body("# First\ncontent\n# Second\nmore", FALLBACK);
        assert_eq!(title, "First");
        assert!(body.contains("# Second"));
    }

    #[test]
    fn bare_hashes_fall_back_to_placeholder() {
        let (title, body) = extract_title_and_body("###\nbody follows", FALLBACK);
        assert_eq!(title, FALLBACK);
        assert_eq!(body, "###\nbody follows");
    }

    #[test]
    fn deeper_headings_strip_cleanly() {
        let (title, _) = extract_title_and_body("## Morning Walk ##\ntext", FALLBACK);
        assert_eq!(title, "Morning Walk");
    }
}
