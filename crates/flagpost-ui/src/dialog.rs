use flagpost_core::consts::{DIALOG_ID, DIALOG_STYLE_ID};
use flagpost_core::{FlagpostError, FlagpostResult};
use flagpost_dom::{node, Document, Handle};
use flagpost_i18n::StringTable;

use crate::icon::ICON_SVG;
use crate::template;

/// Singleton report dialog, keyed by a fixed element id in the tree itself:
/// absent → rendered-closed → open → closed (reusable). A locale change
/// removes it entirely; the next open re-renders with the new strings.
pub fn dialog_element(doc: &Document) -> Option<Handle> {
    doc.element_by_id(DIALOG_ID)
}

/// Opens the dialog, rendering it first if it does not exist yet. Opening a
/// modal resets the page's scroll position as a side effect, so the recorded
/// offsets are restored synchronously and again on the next two animation
/// frames to avoid a visible jump.
pub fn open(doc: &Document, strings: &StringTable) {
    let dialog = match dialog_element(doc) {
        Some(d) => d,
        None => match render(doc, strings) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("report dialog unavailable: {}", e);
                return;
            }
        },
    };

    let (x, y) = doc.scroll_offset();
    doc.show_modal(&dialog);
    doc.set_scroll_offset(x, y);
    doc.request_animation_frame(move |d| {
        d.set_scroll_offset(x, y);
        d.request_animation_frame(move |d2| d2.set_scroll_offset(x, y));
    });
}

pub fn close(doc: &Document) {
    doc.close_modal();
}

/// Tears the dialog (and its injected styles and handlers) out of the tree.
pub fn remove(doc: &Document) {
    if let Some(dialog) = dialog_element(doc) {
        if doc
            .open_modal()
            .is_some_and(|open| node::node_id(&open) == node::node_id(&dialog))
        {
            doc.close_modal();
        }
        doc.clear_handlers(&dialog);
        node::remove_node(&dialog);
    }
    if let Some(style) = doc.element_by_id(DIALOG_STYLE_ID) {
        node::remove_node(&style);
    }
}

fn render(doc: &Document, strings: &StringTable) -> FlagpostResult<Handle> {
    let options: String = strings
        .violations
        .iter()
        .map(|v| format!("<option>{}</option>", v))
        .collect();

    let markup = template::DIALOG_TEMPLATE
        .replace(template::TOKEN_TITLE, strings.title)
        .replace(template::TOKEN_VIOLATION_LABEL, strings.violation_label)
        .replace(template::TOKEN_VIOLATION_OPTIONS, &options)
        .replace(template::TOKEN_EMAIL_PLACEHOLDER, strings.email_placeholder)
        .replace(
            template::TOKEN_INFO_PLACEHOLDER,
            strings.additional_info_placeholder,
        )
        .replace(template::TOKEN_SUBMIT_LABEL, strings.submit_button)
        .replace(template::TOKEN_ABOUT, strings.about)
        .replace(template::TOKEN_ICON, ICON_SVG);

    let fragment = Document::parse_body_fragment(&markup)
        .map_err(|e| FlagpostError::Template(e.to_string()))?;

    // the template's top-level nodes are the style block and the dialog
    let top_level = fragment.fragment_children();
    let dialog = top_level
        .iter()
        .find(|n| node::tag_name(n).as_deref() == Some("dialog"))
        .cloned()
        .ok_or_else(|| FlagpostError::Template("no dialog element in template".into()))?;
    let style = top_level
        .iter()
        .find(|n| node::tag_name(n).as_deref() == Some("style"))
        .cloned()
        .ok_or_else(|| FlagpostError::Template("no style block in template".into()))?;

    let body = doc
        .body()
        .ok_or_else(|| FlagpostError::Dom("document has no body".into()))?;
    node::remove_node(&style);
    node::remove_node(&dialog);
    node::append_child(&body, &style);
    node::append_child(&body, &dialog);

    // one delegated handler on the dialog; bubbled clicks from the close
    // and submit controls are recognized by their marker attributes
    doc.on_click(&dialog, |d, event| {
        let target = event.target().clone();
        if node::get_attr(&target, "data-flagpost-close").is_some()
            || node::get_attr(&target, "data-flagpost-submit").is_some()
        {
            event.prevent_default();
            event.stop_propagation();
            close(d);
        }
    });

    Ok(dialog)
}
