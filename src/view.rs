//! Text rendering of the pinned panel

use std::fmt::Write;

use crate::model::TreeItem;

/// Nerd Font glyph drawn for the `pinned` theme icon
const PIN_GLYPH: &str = "\u{f435}";

/// Glyph for a theme icon id
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "pinned" => PIN_GLYPH,
        _ => " ",
    }
}

/// Render the panel header and one numbered row per item
pub fn render_panel(view_id: &str, items: &[TreeItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "PINNED ({})", view_id);

    if items.is_empty() {
        out.push_str("  (no pinned tabs)\n");
        return out;
    }

    let width = items.len().to_string().len();
    for (i, item) in items.iter().enumerate() {
        let _ = write!(
            out,
            "  {:>width$}. {} {}",
            i + 1,
            icon_glyph(item.icon),
            item.label,
            width = width
        );
        if !item.description.is_empty() {
            let _ = write!(out, "  {}", item.description);
        }
        out.push('\n');
    }
    out
}
