use std::cell::{Cell, RefCell};
use std::rc::Rc;

use flagpost_core::consts::{
    BADGE_MARKER_ATTR, COMMENT_CLASS, COMMENT_CLASS_SUFFIX, LANGUAGE_STORAGE_KEY,
    TITLE_CANDIDATE_TAGS,
};
use flagpost_core::{ArticleExtractor, FlagpostResult, PlacementReport, Storage};
use flagpost_dom::{node, style, Document, Handle};
use flagpost_i18n::{detect_language, HostEnv, LocaleState};
use flagpost_locate::locate_title;
use flagpost_ui::{badge, dialog};

pub struct WidgetConfig {
    /// Language code forced by the embedding site, if any.
    pub forced_language: Option<String>,
    pub comment_class: String,
    pub comment_class_suffix: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            forced_language: None,
            comment_class: COMMENT_CLASS.to_string(),
            comment_class_suffix: COMMENT_CLASS_SUFFIX.to_string(),
        }
    }
}

/// The widget runtime: owns the locale context and drives extraction →
/// locate → inject against one live document. All state is explicit; tests
/// construct a widget around a synthetic tree and call the same entry points
/// the host page would.
pub struct Widget {
    doc: Rc<Document>,
    extractor: Rc<dyn ArticleExtractor>,
    storage: Rc<dyn Storage>,
    env: HostEnv,
    config: WidgetConfig,
    locale: Rc<RefCell<LocaleState>>,
    badges_placed: Cell<bool>,
}

impl Widget {
    pub fn new(
        doc: Rc<Document>,
        extractor: Rc<dyn ArticleExtractor>,
        storage: Rc<dyn Storage>,
        env: HostEnv,
        config: WidgetConfig,
    ) -> Self {
        let locale = LocaleState::new(flagpost_i18n::DEFAULT_LANGUAGE);
        Self {
            doc,
            extractor,
            storage,
            env,
            config,
            locale: Rc::new(RefCell::new(locale)),
            badges_placed: Cell::new(false),
        }
    }

    /// Resolves the active language from the layered signals. Call once
    /// before placing badges.
    pub fn init(&self) {
        let code = detect_language(
            self.config.forced_language.as_deref(),
            &self.env,
            self.storage.as_ref(),
            &self.doc,
        );
        *self.locale.borrow_mut() = LocaleState::new(code);
        tracing::info!(language = code, "flagpost initialized");
    }

    pub fn language(&self) -> &'static str {
        self.locale.borrow().code
    }

    /// Re-resolves with `code` forced, persists the outcome, and refreshes
    /// already-rendered UI when the resolved code actually changed. Returns
    /// whether the resolved code matches the request.
    pub fn set_language(&self, code: &str) -> bool {
        let resolved = detect_language(Some(code), &self.env, self.storage.as_ref(), &self.doc);
        self.storage.set(LANGUAGE_STORAGE_KEY, resolved);

        let previous = self.language();
        if resolved != previous {
            *self.locale.borrow_mut() = LocaleState::new(resolved);
            let strings = self.locale.borrow().strings;
            badge::refresh_badge_tooltips(&self.doc, strings.badge_title);
            dialog::remove(&self.doc);
            tracing::info!(from = previous, to = resolved, "language changed");
        }

        resolved == code
    }

    /// Runs the placement strategies: title and comment placement
    /// concurrently, then the footer fallback only if neither produced a
    /// badge. Idempotent; the second call is a no-op. Never fails: every
    /// strategy error is logged and counted as zero badges.
    pub async fn init_badges(&self) -> PlacementReport {
        if self.badges_placed.replace(true) {
            tracing::debug!("badges already placed, skipping");
            return PlacementReport::default();
        }

        let (title_badges, comment_badges) =
            tokio::join!(self.place_title_badge(), self.place_comment_badges());

        let footer_badges = if title_badges + comment_badges == 0 {
            self.place_footer_badge()
        } else {
            0
        };

        let report = PlacementReport {
            title_badges,
            comment_badges,
            footer_badges,
        };
        tracing::info!(
            title = report.title_badges,
            comments = report.comment_badges,
            footer = report.footer_badges,
            "badge placement finished"
        );
        report
    }

    async fn place_title_badge(&self) -> usize {
        match self.try_place_title_badge() {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!("title placement failed: {}", e);
                0
            }
        }
    }

    fn try_place_title_badge(&self) -> FlagpostResult<usize> {
        let snapshot = self.doc.snapshot()?;
        let article = match self.extractor.extract(&snapshot)? {
            Some(article) => article,
            None => return Ok(0),
        };

        let heading = match locate_title(&self.doc, TITLE_CANDIDATE_TAGS, &article.title) {
            Some(heading) => heading,
            None => return Ok(0),
        };

        let badge = self.build_badge(&heading);
        node::append_child(&heading, &badge);
        Ok(1)
    }

    async fn place_comment_badges(&self) -> usize {
        let comments = self.doc.find_elements(|n| self.is_comment(n));
        for comment in &comments {
            // corner-positioned overlay needs a positioning context
            let position = style::style_property(comment, "position");
            if position.as_deref().map_or(true, |p| p == "static") {
                style::set_style_property(comment, "position", "relative");
            }

            let badge = self.build_badge(comment);
            style::set_style_property(&badge, "position", "absolute");
            style::set_style_property(&badge, "top", "0");
            style::set_style_property(&badge, "right", "0");
            style::set_style_property(&badge, "margin-left", "0");
            node::insert_first_child(comment, &badge);
        }
        comments.len()
    }

    fn place_footer_badge(&self) -> usize {
        let body = match self.doc.body() {
            Some(body) => body,
            None => {
                tracing::warn!("no body element, footer badge skipped");
                return 0;
            }
        };

        let badge = self.build_badge(&body);
        style::set_style_property(&badge, "position", "fixed");
        style::set_style_property(&badge, "bottom", "1rem");
        style::set_style_property(&badge, "right", "1rem");
        style::set_style_property(&badge, "z-index", "2147483647");
        node::append_child(&body, &badge);
        1
    }

    fn is_comment(&self, element: &Handle) -> bool {
        // never re-match our own injected badges
        if node::get_attr(element, BADGE_MARKER_ATTR).is_some() {
            return false;
        }
        node::classes(element).iter().any(|c| {
            c == &self.config.comment_class || c.ends_with(&self.config.comment_class_suffix)
        })
    }

    fn build_badge(&self, context: &Handle) -> Handle {
        let locale = self.locale.clone();
        let tooltip = self.locale.borrow().strings.badge_title;
        badge::create_badge(
            &self.doc,
            context,
            tooltip,
            Rc::new(move |doc| dialog::open(doc, locale.borrow().strings)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagpost_core::{ExtractedArticle, FlagpostError, MemoryStorage};

    struct NoArticle;

    impl ArticleExtractor for NoArticle {
        fn extract(&self, _: &Document) -> FlagpostResult<Option<ExtractedArticle>> {
            Ok(None)
        }
    }

    struct Failing;

    impl ArticleExtractor for Failing {
        fn extract(&self, _: &Document) -> FlagpostResult<Option<ExtractedArticle>> {
            Err(FlagpostError::Extraction("boom".into()))
        }
    }

    fn widget(html: &str, extractor: Rc<dyn ArticleExtractor>) -> Widget {
        let doc = Rc::new(Document::parse(html).unwrap());
        Widget::new(
            doc,
            extractor,
            Rc::new(MemoryStorage::new()),
            HostEnv::default(),
            WidgetConfig::default(),
        )
    }

    #[test]
    fn language_starts_at_default_and_init_resolves() {
        let w = widget(
            "<html lang=\"de\"><body></body></html>",
            Rc::new(NoArticle),
        );
        assert_eq!(w.language(), "pl");
        w.init();
        assert_eq!(w.language(), "de");
    }

    #[test]
    fn set_language_supported_persists_and_reports_match() {
        let w = widget("<html><body></body></html>", Rc::new(NoArticle));
        assert!(w.set_language("en"));
        assert_eq!(w.language(), "en");
        assert_eq!(
            w.storage.get(LANGUAGE_STORAGE_KEY).as_deref(),
            Some("en")
        );
    }

    #[test]
    fn set_language_unsupported_falls_back_and_reports_mismatch() {
        let w = widget("<html><body></body></html>", Rc::new(NoArticle));
        assert!(!w.set_language("xx"));
        assert_eq!(w.language(), "pl");
        assert_eq!(
            w.storage.get(LANGUAGE_STORAGE_KEY).as_deref(),
            Some("pl")
        );
    }

    #[tokio::test]
    async fn extractor_failure_still_yields_footer_badge() {
        let w = widget(
            "<html><body><h1>Title</h1><p>text</p></body></html>",
            Rc::new(Failing),
        );
        let report = w.init_badges().await;
        assert_eq!(report.title_badges, 0);
        assert_eq!(report.footer_badges, 1);
        assert_eq!(report.total(), 1);
    }

    #[tokio::test]
    async fn init_badges_is_idempotent() {
        let w = widget("<html><body></body></html>", Rc::new(NoArticle));
        let first = w.init_badges().await;
        assert_eq!(first.footer_badges, 1);
        let second = w.init_badges().await;
        assert_eq!(second.total(), 0);
        assert_eq!(
            w.doc
                .find_elements(|n| node::get_attr(n, BADGE_MARKER_ATTR).is_some())
                .len(),
            1
        );
    }

    #[test]
    fn comment_matching_rules() {
        let w = widget(
            "<html><body>\
             <div id=\"a\" class=\"comment\"></div>\
             <div id=\"b\" class=\"user-comment highlighted\"></div>\
             <div id=\"c\" class=\"comments\"></div>\
             <div id=\"d\" class=\"commentary\"></div>\
             </body></html>",
            Rc::new(NoArticle),
        );
        let matched: Vec<String> = w
            .doc
            .find_elements(|n| w.is_comment(n))
            .iter()
            .filter_map(|n| node::get_attr(n, "id"))
            .collect();
        assert_eq!(matched, vec!["a", "b"]);
    }
}
