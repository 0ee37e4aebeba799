//! Inline report icon. Kept as a markup string so the badge factory can
//! restyle it per injection site without shipping an asset pipeline.

pub const ICON_SVG: &str = concat!(
    "<svg viewBox=\"0 0 24 24\" fill=\"currentColor\" ",
    "xmlns=\"http://www.w3.org/2000/svg\" role=\"img\" aria-hidden=\"true\">",
    "<path d=\"M12 2 1 21h22L12 2zm0 4.6L19.5 19h-15L12 6.6z\"/>",
    "<path d=\"M11 10h2v5h-2zm0 6h2v2h-2z\"/>",
    "</svg>"
);
