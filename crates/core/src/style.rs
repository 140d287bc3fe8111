//! Inline style composition.
//!
//! Every wrapper renders `merge(base, override)`: base declarations keep their
//! order, an override replaces a base value in place, and override-only
//! properties are appended.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter. Replaces an existing value for `prop`.
    pub fn set(mut self, prop: &'static str, value: impl Into<String>) -> Self {
        self.insert(prop, value.into());
        self
    }

    fn insert(&mut self, prop: &'static str, value: String) {
        match self.decls.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.decls.push((prop, value)),
        }
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.decls.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// `self` overlaid with `other`; `other` wins on conflicts.
    pub fn merge(&self, other: &Style) -> Style {
        let mut out = self.clone();
        for (p, v) in &other.decls {
            out.insert(*p, v.clone());
        }
        out
    }

    /// Serializes to a `style` attribute value.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, v)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}: {v};")?;
        }
        Ok(())
    }
}

pub fn merge(base: &Style, over: &Style) -> Style {
    base.merge(over)
}

/// The stateless wrappers every card is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Card,
    CardHeader,
    CardTitle,
    CardContent,
    Button,
}

impl Primitive {
    pub fn tag(self) -> &'static str {
        match self {
            Primitive::Card | Primitive::CardHeader | Primitive::CardContent => "div",
            Primitive::CardTitle => "h3",
            Primitive::Button => "button",
        }
    }

    pub fn base_style(self) -> Style {
        match self {
            Primitive::Card => Style::new()
                .set("background", "#fff")
                .set("border", format!("1px solid {BORDER}"))
                .set("border-radius", "16px")
                .set("box-shadow", "0 1px 3px rgba(0,0,0,.06)"),
            Primitive::CardHeader => Style::new().set("padding", "20px 24px"),
            Primitive::CardTitle => Style::new()
                .set("font-size", "20px")
                .set("font-weight", "600")
                .set("margin", "0"),
            Primitive::CardContent => Style::new().set("padding", "0 24px 24px"),
            Primitive::Button => Style::new()
                .set("display", "inline-flex")
                .set("align-items", "center")
                .set("gap", "8px")
                .set("border", format!("1px solid {BORDER}"))
                .set("border-radius", "999px")
                .set("padding", "6px 12px")
                .set("font-size", "14px")
                .set("background", "#fff")
                .set("cursor", "pointer"),
        }
    }

    pub fn style_with(self, over: Option<&Style>) -> Style {
        let base = self.base_style();
        match over {
            Some(o) => base.merge(o),
            None => base,
        }
    }
}

pub const BORDER: &str = "#e5e7eb";
pub const MUTED: &str = "#6b7280";

// Page-level layout.

pub fn container() -> Style {
    Style::new()
        .set("min-height", "100vh")
        .set("max-width", "900px")
        .set("margin", "0 auto")
        .set("background", "#fafafa")
        .set("color", "#0a0a0a")
        .set("justify-content", "center")
        .set("display", "flex")
        .set("flex-direction", "column")
}

pub fn sticky_header() -> Style {
    Style::new()
        .set("position", "sticky")
        .set("top", "0")
        .set("z-index", "10")
        .set("backdrop-filter", "saturate(180%) blur(6px)")
        .set("background", "rgba(255,255,255,0.85)")
        .set("border-bottom", format!("1px solid {BORDER}"))
}

pub fn nav_inner() -> Style {
    Style::new()
        .set("max-width", "928px")
        .set("margin", "0 auto")
        .set("padding", "12px 16px")
        .set("display", "flex")
        .set("align-items", "center")
        .set("gap", "12px")
        .set("overflow-x", "auto")
}

pub fn nav_links() -> Style {
    Style::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("gap", "8px")
}

pub fn main_stream() -> Style {
    Style::new()
        .set("max-width", "768px")
        .set("margin", "0 auto")
        .set("padding", "32px 16px")
        .set("display", "grid")
        .set("gap", "24px")
}

pub fn chip() -> Style {
    Style::new()
        .set("padding", "6px 12px")
        .set("border", format!("1px solid {BORDER}"))
        .set("border-radius", "999px")
        .set("font-size", "14px")
        .set("text-decoration", "none")
        .set("color", "inherit")
        .set("white-space", "nowrap")
}

pub fn footer() -> Style {
    Style::new()
        .set("max-width", "928px")
        .set("margin", "0 auto")
        .set("padding", "32px 16px")
        .set("font-size", "14px")
        .set("color", MUTED)
}

pub fn footer_name() -> Style {
    Style::new().set("margin", "0")
}

pub fn footer_lines() -> Style {
    Style::new()
        .set("margin-top", "8px")
        .set("padding-left", "18px")
}

pub fn action_row() -> Style {
    Style::new()
        .set("display", "flex")
        .set("gap", "12px")
        .set("margin-top", "8px")
}

pub fn back_to_top_row() -> Style {
    Style::new()
        .set("display", "flex")
        .set("justify-content", "flex-end")
        .set("padding-top", "4px")
}

// Card bodies.

pub fn stacked_list() -> Style {
    Style::new()
        .set("font-size", "16px")
        .set("line-height", "1.6")
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("margin-top", "8px")
}

/// One entry of a list body. All but the last entry get a divider; the last
/// gets extra bottom margin instead.
pub fn list_row(is_last: bool) -> Style {
    let s = Style::new();
    let s = if is_last {
        s
    } else {
        s.set("border-bottom", format!("1px solid {BORDER}"))
    };
    let s = s.set("padding", "8px 0").set("margin-top", "8px");
    if is_last {
        s.set("margin-bottom", "8px")
    } else {
        s
    }
}

pub fn contact_column() -> Style {
    Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("align-items", "center")
        .set("gap", "12px")
}

pub fn contact_location() -> Style {
    Style::new().set("font-size", "16px").set("font-weight", "500")
}

pub fn contact_email() -> Style {
    Style::new().set("font-size", "14px").set("color", MUTED)
}

pub fn profile_photo() -> Style {
    Style::new()
        .set("width", "120px")
        .set("height", "120px")
        .set("border-radius", "50%")
        .set("object-fit", "cover")
}

pub fn photo_placeholder() -> Style {
    Style::new()
        .set("width", "120px")
        .set("height", "120px")
        .set("border-radius", "50%")
        .set("background", BORDER)
        .set("display", "block")
}

pub fn summary_paragraph() -> Style {
    Style::new()
        .set("line-height", "1.6")
        .set("font-size", "16px")
        .set("margin", "0")
        .set("margin-top", "8px")
        .set("margin-bottom", "8px")
}

pub fn skills_grid(columns: u8) -> Style {
    let template = vec!["1fr"; usize::from(columns.max(1))].join(" ");
    Style::new()
        .set("display", "grid")
        .set("grid-template-columns", template)
        .set("column-gap", "24px")
        .set("row-gap", "0")
        .set("font-size", "16px")
        .set("line-height", "1.6")
        .set("align-items", "start")
        .set("margin-top", "8px")
}

pub fn nested_roles() -> Style {
    Style::new().set("margin-left", "20px").set("margin-top", "4px")
}

pub fn bullet_list() -> Style {
    Style::new()
        .set("margin-top", "4px")
        .set("margin-bottom", "8px")
        .set("padding-left", "20px")
        .set("list-style-type", "disc")
}

pub fn institution_logo() -> Style {
    Style::new()
        .set("width", "75px")
        .set("height", "75px")
        .set("margin-right", "16px")
        .set("border-radius", "8px")
        .set("object-fit", "contain")
        .set("background", "#f3f4f6")
}

pub fn skeleton_bar(width_pct: u8) -> Style {
    Style::new()
        .set("height", "12px")
        .set("width", format!("{width_pct}%"))
        .set("background", BORDER)
        .set("border-radius", "6px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_and_keeps_base_order() {
        let base = Style::new()
            .set("padding", "20px 24px")
            .set("color", "black");
        let over = Style::new().set("padding", "0").set("margin", "4px");

        let merged = merge(&base, &over);
        let props: Vec<&str> = merged.iter().map(|(p, _)| p).collect();
        assert_eq!(props, ["padding", "color", "margin"]);
        assert_eq!(merged.get("padding"), Some("0"));
        assert_eq!(merged.get("color"), Some("black"));
        assert_eq!(merged.get("margin"), Some("4px"));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let base = Primitive::Card.base_style();
        assert_eq!(base.merge(&Style::new()), base);
        assert_eq!(Style::new().merge(&base), base);
    }

    #[test]
    fn set_replaces_in_place() {
        let s = Style::new().set("a", "1").set("b", "2").set("a", "3");
        assert_eq!(s.len(), 2);
        assert_eq!(s.to_css(), "a: 3; b: 2;");
    }

    #[test]
    fn primitives_carry_their_base_styles() {
        assert_eq!(Primitive::CardTitle.tag(), "h3");
        assert_eq!(Primitive::Button.tag(), "button");
        assert_eq!(
            Primitive::CardHeader.style_with(None).to_css(),
            "padding: 20px 24px;"
        );

        let over = Style::new().set("border-radius", "4px");
        let card = Primitive::Card.style_with(Some(&over));
        assert_eq!(card.get("border-radius"), Some("4px"));
        assert_eq!(card.get("background"), Some("#fff"));
    }

    #[test]
    fn list_rows_divide_all_but_last() {
        assert!(list_row(false).get("border-bottom").is_some());
        assert!(list_row(false).get("margin-bottom").is_none());
        assert!(list_row(true).get("border-bottom").is_none());
        assert_eq!(list_row(true).get("margin-bottom"), Some("8px"));
    }

    #[test]
    fn skills_grid_template_matches_columns() {
        assert_eq!(
            skills_grid(2).get("grid-template-columns"),
            Some("1fr 1fr")
        );
        assert_eq!(skills_grid(0).get("grid-template-columns"), Some("1fr"));
    }

    #[test]
    fn contact_and_footer_text_styles() {
        assert_eq!(
            contact_location().to_css(),
            "font-size: 16px; font-weight: 500;"
        );
        assert_eq!(contact_email().get("color"), Some(MUTED));
        assert_eq!(footer_name().to_css(), "margin: 0;");
        assert_eq!(
            footer_lines().to_css(),
            "margin-top: 8px; padding-left: 18px;"
        );
    }
}
