use flagpost_core::consts::{
    CONTAINER_CANDIDATE_TAGS, CONTAINER_RATIO_MAX, CONTAINER_RATIO_MIN,
};
use flagpost_dom::{node, Document, Handle};

/// Re-finds the element wrapping the extracted article body.
///
/// A semantic landmark (`<main>`, or any element with `role="main"`) is the
/// cheap high-confidence path and is always preferred, regardless of its
/// text length. Without one, the element whose total text length falls
/// closest to the extracted body's length, within a tolerance band, is very
/// likely the true wrapper: extraction typically keeps 80-120% of the
/// rendered text once menus and ads are stripped.
pub fn locate_container(doc: &Document, body_text: &str) -> Option<Handle> {
    if let Some(landmark) = find_landmark(doc) {
        tracing::debug!("container found via landmark");
        return Some(landmark);
    }

    let extracted_len = body_text.chars().count();
    if extracted_len == 0 {
        return None;
    }

    let mut best: Option<Handle> = None;
    let mut best_score = 0.0_f64;

    // one document-order pass over all candidate tags; strict `>` keeps
    // the first equally good candidate on the page
    let candidates = doc.find_elements(|n| {
        node::tag_name(n)
            .map(|t| CONTAINER_CANDIDATE_TAGS.contains(&t.as_str()))
            .unwrap_or(false)
    });
    for element in candidates {
        let candidate_len = node::text_content(&element).chars().count();
        let ratio = candidate_len as f64 / extracted_len as f64;
        if !(CONTAINER_RATIO_MIN..=CONTAINER_RATIO_MAX).contains(&ratio) {
            continue;
        }
        // closeness to a perfect 1.0 ratio
        let score = 1.0 - (ratio - 1.0).abs();
        if score > best_score {
            best_score = score;
            best = Some(element);
        }
    }

    if best.is_some() {
        tracing::debug!(score = best_score, "container found via length ratio");
    }
    best
}

fn find_landmark(doc: &Document) -> Option<Handle> {
    if let Some(main) = doc.elements_by_tag("main").into_iter().next() {
        return Some(main);
    }
    doc.find_elements(|n| node::get_attr(n, "role").as_deref() == Some("main"))
        .into_iter()
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Document {
        Document::parse(html).unwrap()
    }

    fn filler(len: usize) -> String {
        "x".repeat(len)
    }

    #[test]
    fn landmark_beats_length_ratio() {
        let html = format!(
            "<html><body><main>tiny</main><article>{}</article></body></html>",
            filler(1000)
        );
        let d = doc(&html);
        let hit = locate_container(&d, &filler(1000)).unwrap();
        assert_eq!(node::tag_name(&hit).as_deref(), Some("main"));
    }

    #[test]
    fn role_main_counts_as_landmark() {
        let d = doc("<html><body><div role=\"main\">short</div></body></html>");
        let hit = locate_container(&d, &filler(500)).unwrap();
        assert_eq!(node::get_attr(&hit, "role").as_deref(), Some("main"));
    }

    #[test]
    fn out_of_band_candidates_never_returned() {
        let html = format!(
            "<html><body><article>{}</article><section>{}</section></body></html>",
            filler(750),
            filler(1300)
        );
        let d = doc(&html);
        assert!(locate_container(&d, &filler(1000)).is_none());
    }

    #[test]
    fn closest_ratio_in_band_wins() {
        // ratios 0.9 and 1.15 both qualify; 0.9 is closer to 1.0
        let html = format!(
            "<html><body><section id=\"late\">{}</section><article id=\"close\">{}</article></body></html>",
            filler(1150),
            filler(900)
        );
        let d = doc(&html);
        let hit = locate_container(&d, &filler(1000)).unwrap();
        assert_eq!(node::get_attr(&hit, "id").as_deref(), Some("close"));
    }

    #[test]
    fn equal_scores_keep_first_in_document_order() {
        let html = format!(
            "<html><body><article id=\"a\">{}</article><article id=\"b\">{}</article></body></html>",
            filler(900),
            filler(900)
        );
        let d = doc(&html);
        let hit = locate_container(&d, &filler(1000)).unwrap();
        assert_eq!(node::get_attr(&hit, "id").as_deref(), Some("a"));
    }

    #[test]
    fn ties_across_tags_keep_first_in_document_order() {
        // equal ratios in different tags: the earlier section wins even
        // though article sorts first in the candidate list
        let html = format!(
            "<html><body><section id=\"first\">{}</section><article id=\"second\">{}</article></body></html>",
            filler(900),
            filler(900)
        );
        let d = doc(&html);
        let hit = locate_container(&d, &filler(1000)).unwrap();
        assert_eq!(node::get_attr(&hit, "id").as_deref(), Some("first"));
    }

    #[test]
    fn empty_body_text_never_matches() {
        let d = doc("<html><body><article>content</article></body></html>");
        assert!(locate_container(&d, "").is_none());
    }
}
