use flagpost_core::{ArticleExtractor, ExtractedArticle, FlagpostResult};
use flagpost_dom::{node, Document};

/// Stand-in extractor for the demo binary. Real deployments plug in a
/// readability engine behind the same trait; this one takes the page
/// `<title>` (or first `<h1>`) and the landmark/body text as-is.
pub struct DemoExtractor;

impl ArticleExtractor for DemoExtractor {
    fn extract(&self, snapshot: &Document) -> FlagpostResult<Option<ExtractedArticle>> {
        let title = snapshot
            .elements_by_tag("title")
            .into_iter()
            .next()
            .or_else(|| snapshot.elements_by_tag("h1").into_iter().next())
            .map(|n| node::text_content(&n).trim().to_string())
            .unwrap_or_default();

        let body_node = snapshot
            .elements_by_tag("main")
            .into_iter()
            .next()
            .or_else(|| snapshot.body());
        let body_text = body_node
            .map(|n| node::text_content(&n).trim().to_string())
            .unwrap_or_default();

        if title.is_empty() && body_text.is_empty() {
            return Ok(None);
        }

        Ok(Some(ExtractedArticle { title, body_text }))
    }
}
