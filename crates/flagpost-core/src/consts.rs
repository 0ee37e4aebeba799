//! Heuristic thresholds and fixed identifiers. The numeric values are
//! empirically chosen and tunable; they are not load-bearing invariants.

/// Minimum share of title tokens that must reappear in a heading's text
/// before the heading is accepted as the article title.
pub const TITLE_MATCH_THRESHOLD: f64 = 0.5;

/// Acceptance band for the container locator: candidate text length divided
/// by extracted body length must fall inside `[MIN, MAX]`.
pub const CONTAINER_RATIO_MIN: f64 = 0.8;
pub const CONTAINER_RATIO_MAX: f64 = 1.2;

/// Badge icon height as a fraction of the context element's font size.
pub const ICON_SCALE_FACTOR: f64 = 0.6;

/// Font size assumed when no element along the chain declares one.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Marker attribute stamped on every injected badge so it can be re-found
/// later (locale refresh).
pub const BADGE_MARKER_ATTR: &str = "data-flagpost-badge";

/// Element id of the singleton report dialog, and of its injected styles.
pub const DIALOG_ID: &str = "flagpost-report-dialog";
pub const DIALOG_STYLE_ID: &str = "flagpost-report-style";

/// Durable per-origin storage key for the chosen language code.
pub const LANGUAGE_STORAGE_KEY: &str = "flagpost-language";

/// Comment detection: exact class match, or any class with this suffix.
pub const COMMENT_CLASS: &str = "comment";
pub const COMMENT_CLASS_SUFFIX: &str = "-comment";

/// Heading-level tags considered by the title locator.
pub const TITLE_CANDIDATE_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Generic block containers scanned by the length-ratio fallback.
pub const CONTAINER_CANDIDATE_TAGS: &[&str] = &["article", "section", "div"];
