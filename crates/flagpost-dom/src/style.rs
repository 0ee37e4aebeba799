use markup5ever_rcdom::Handle;

use crate::node;

/// Reads one property out of the node's inline `style` attribute.
pub fn style_property(node: &Handle, property: &str) -> Option<String> {
    let style = node::get_attr(node, "style")?;
    for declaration in style.split(';') {
        let mut parts = declaration.splitn(2, ':');
        let name = parts.next()?.trim();
        if name.eq_ignore_ascii_case(property) {
            return parts.next().map(|v| v.trim().to_string());
        }
    }
    None
}

/// Sets (or replaces) one property in the node's inline `style` attribute,
/// leaving the other declarations untouched.
pub fn set_style_property(node: &Handle, property: &str, value: &str) {
    let existing = node::get_attr(node, "style").unwrap_or_default();
    let mut declarations: Vec<String> = existing
        .split(';')
        .filter_map(|d| {
            let d = d.trim();
            if d.is_empty() {
                return None;
            }
            let name = d.splitn(2, ':').next().unwrap_or("").trim();
            if name.eq_ignore_ascii_case(property) {
                None
            } else {
                Some(d.to_string())
            }
        })
        .collect();
    declarations.push(format!("{}: {}", property, value));
    node::set_attr(node, "style", &declarations.join("; "));
}

/// Walks the node and its ancestors for an inline `font-size: <n>px`
/// declaration. `None` when nothing along the chain declares one; callers
/// substitute their own default.
pub fn computed_font_size(node: &Handle) -> Option<f64> {
    let mut current = Some(node.clone());
    while let Some(n) = current {
        if let Some(value) = style_property(&n, "font-size") {
            if let Some(px) = parse_px(&value) {
                return Some(px);
            }
        }
        current = node::parent(&n);
    }
    None
}

pub fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{append_child, create_element, get_attr, set_attr};

    #[test]
    fn set_style_property_preserves_other_declarations() {
        let el = create_element("div");
        set_attr(&el, "style", "color: red; font-size: 12px");
        set_style_property(&el, "position", "relative");
        assert_eq!(style_property(&el, "color").as_deref(), Some("red"));
        assert_eq!(style_property(&el, "position").as_deref(), Some("relative"));
        set_style_property(&el, "color", "blue");
        assert_eq!(style_property(&el, "color").as_deref(), Some("blue"));
        let style = get_attr(&el, "style").unwrap();
        assert_eq!(style.matches("color").count(), 1);
    }

    #[test]
    fn font_size_inherited_from_ancestor() {
        let outer = create_element("article");
        set_attr(&outer, "style", "font-size: 20px");
        let inner = create_element("h1");
        append_child(&outer, &inner);
        assert_eq!(computed_font_size(&inner), Some(20.0));
        set_attr(&inner, "style", "font-size: 32px");
        assert_eq!(computed_font_size(&inner), Some(32.0));
    }

    #[test]
    fn font_size_absent_yields_none() {
        let el = create_element("p");
        assert_eq!(computed_font_size(&el), None);
    }

    #[test]
    fn parse_px_tolerates_whitespace() {
        assert_eq!(parse_px(" 18px "), Some(18.0));
        assert_eq!(parse_px("1.5px"), Some(1.5));
        assert_eq!(parse_px("1.5em"), None);
    }
}
