use std::rc::Rc;

use flagpost_core::consts::{BADGE_MARKER_ATTR, DEFAULT_FONT_SIZE, ICON_SCALE_FACTOR};
use flagpost_dom::{node, style, Document, Handle};

use crate::icon::ICON_SVG;

/// Builds a self-contained badge ready to be attached anywhere in the tree.
///
/// The icon is sized off the context element's font size so the badge reads
/// as part of the surrounding text. Clicks are swallowed (default prevented,
/// propagation stopped) before the callback runs, so a badge inside a link
/// or button never triggers the host page's own handler. The icon gets its
/// own handler too, covering clicks that land on it instead of the wrapper.
pub fn create_badge(
    doc: &Document,
    context: &Handle,
    tooltip: &str,
    on_click: Rc<dyn Fn(&Document)>,
) -> Handle {
    let badge = node::create_element("span");
    style::set_style_property(&badge, "display", "inline-block");
    style::set_style_property(&badge, "vertical-align", "super");
    style::set_style_property(&badge, "margin-left", "0.5em");
    style::set_style_property(&badge, "cursor", "pointer");
    node::set_attr(&badge, "title", tooltip);
    node::set_attr(&badge, BADGE_MARKER_ATTR, "true");

    let font_size = style::computed_font_size(context).unwrap_or(DEFAULT_FONT_SIZE);
    let icon_height = font_size * ICON_SCALE_FACTOR;

    let svg = build_icon(icon_height);
    if let Some(svg) = &svg {
        node::append_child(&badge, svg);
    }

    let callback = on_click.clone();
    doc.on_click(&badge, move |d, event| {
        event.prevent_default();
        event.stop_propagation();
        callback(d);
    });
    if let Some(svg) = &svg {
        let callback = on_click.clone();
        doc.on_click(svg, move |d, event| {
            event.prevent_default();
            event.stop_propagation();
            callback(d);
        });
    }

    badge
}

fn build_icon(height: f64) -> Option<Handle> {
    let fragment = match Document::parse_body_fragment(ICON_SVG) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("icon markup failed to parse: {}", e);
            return None;
        }
    };
    let svg = fragment
        .fragment_children()
        .into_iter()
        .find(|n| node::tag_name(n).as_deref() == Some("svg"))?;
    node::remove_node(&svg);
    node::remove_attr(&svg, "width");
    node::remove_attr(&svg, "height");
    node::set_attr(&svg, "preserveAspectRatio", "xMidYMid meet");
    style::set_style_property(&svg, "height", &format!("{}px", height));
    style::set_style_property(&svg, "width", "auto");
    style::set_style_property(&svg, "display", "inline-block");
    style::set_style_property(&svg, "vertical-align", "middle");
    Some(svg)
}

/// Rewrites the tooltip of every badge already in the tree. Run after a
/// locale change.
pub fn refresh_badge_tooltips(doc: &Document, tooltip: &str) -> usize {
    let badges = doc.find_elements(|n| node::get_attr(n, BADGE_MARKER_ATTR).is_some());
    for badge in &badges {
        node::set_attr(badge, "title", tooltip);
    }
    badges.len()
}
