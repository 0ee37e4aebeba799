use flagpost_core::consts::TITLE_MATCH_THRESHOLD;
use flagpost_dom::{node, Document, Handle};

/// Lowercased word tokens, split on anything non-alphanumeric (underscore
/// counts as a word character), empties dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Re-finds the extracted article title among the live document's headings.
///
/// Extracted titles rarely equal heading text verbatim: sites append their
/// name, casing differs, markup nests. Token overlap with a 50% acceptance
/// threshold tolerates extra leading/trailing tokens while still rejecting
/// unrelated headings. Ties keep the first heading in document order.
pub fn locate_title(doc: &Document, candidate_tags: &[&str], title_text: &str) -> Option<Handle> {
    let title_tokens = tokenize(title_text);
    if title_tokens.is_empty() {
        return None;
    }

    let mut best: Option<Handle> = None;
    let mut best_score = 0.0_f64;

    // one document-order pass over all candidate tags, so strict `>`
    // keeps the first equally good heading on the page
    let candidates = doc.find_elements(|n| {
        node::tag_name(n)
            .map(|t| candidate_tags.contains(&t.as_str()))
            .unwrap_or(false)
    });
    for element in candidates {
        let element_tokens = tokenize(&node::text_content(&element));
        let matched = title_tokens
            .iter()
            .filter(|t| element_tokens.contains(t))
            .count();
        let score = matched as f64 / title_tokens.len() as f64;
        if score > best_score {
            best_score = score;
            best = Some(element);
        }
    }

    if best_score >= TITLE_MATCH_THRESHOLD {
        tracing::debug!(score = best_score, "title heading accepted");
        best
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagpost_core::consts::TITLE_CANDIDATE_TAGS;

    fn doc(html: &str) -> Document {
        Document::parse(html).unwrap()
    }

    #[test]
    fn tokenize_lowercases_and_drops_empties() {
        assert_eq!(
            tokenize("Breaking News – Example Site"),
            vec!["breaking", "news", "example", "site"]
        );
        assert!(tokenize(" –—!? ").is_empty());
    }

    #[test]
    fn partial_overlap_above_threshold_matches() {
        let d = doc("<html><body><h1>Breaking News</h1><h2>Sports Update</h2></body></html>");
        let hit = locate_title(&d, TITLE_CANDIDATE_TAGS, "Breaking News – Example Site").unwrap();
        assert_eq!(node::text_content(&hit), "Breaking News");
    }

    #[test]
    fn unrelated_headings_miss() {
        let d = doc("<html><body><h1>Sports Update</h1></body></html>");
        assert!(locate_title(&d, TITLE_CANDIDATE_TAGS, "Breaking News – Example Site").is_none());
    }

    #[test]
    fn below_threshold_is_rejected() {
        // one of four title tokens present: 0.25 < 0.5
        let d = doc("<html><body><h1>News</h1></body></html>");
        assert!(locate_title(&d, TITLE_CANDIDATE_TAGS, "Breaking News Example Site").is_none());
    }

    #[test]
    fn highest_overlap_wins() {
        let d = doc(
            "<html><body><h2>Breaking</h2><h1>Breaking News Today</h1></body></html>",
        );
        let hit = locate_title(&d, TITLE_CANDIDATE_TAGS, "Breaking News").unwrap();
        assert_eq!(node::text_content(&hit), "Breaking News Today");
    }

    #[test]
    fn ties_keep_first_in_document_order() {
        let d = doc("<html><body><h1 id=\"a\">Breaking News</h1><h1 id=\"b\">Breaking News</h1></body></html>");
        let hit = locate_title(&d, &["h1"], "Breaking News").unwrap();
        assert_eq!(node::get_attr(&hit, "id").as_deref(), Some("a"));
    }

    #[test]
    fn ties_across_tags_keep_first_in_document_order() {
        // the earlier h2 wins the tie even though h1 sorts first in the
        // candidate list
        let d = doc(
            "<html><body><h2 id=\"first\">Breaking News</h2><h1 id=\"second\">Breaking News</h1></body></html>",
        );
        let hit = locate_title(&d, TITLE_CANDIDATE_TAGS, "Breaking News").unwrap();
        assert_eq!(node::get_attr(&hit, "id").as_deref(), Some("first"));
    }

    #[test]
    fn empty_title_never_matches() {
        let d = doc("<html><body><h1>Anything</h1></body></html>");
        assert!(locate_title(&d, TITLE_CANDIDATE_TAGS, "").is_none());
        assert!(locate_title(&d, TITLE_CANDIDATE_TAGS, " — ").is_none());
    }

    #[test]
    fn no_candidate_elements_means_no_match() {
        let d = doc("<html><body><p>Breaking News</p></body></html>");
        assert!(locate_title(&d, TITLE_CANDIDATE_TAGS, "Breaking News").is_none());
    }

    #[test]
    fn token_membership_is_exact_not_fuzzy() {
        // "new" is not "news"
        let d = doc("<html><body><h1>Breaking New</h1></body></html>");
        assert!(locate_title(&d, TITLE_CANDIDATE_TAGS, "Breaking News Example Site").is_none());
    }
}
