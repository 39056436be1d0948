//! Printable A4 HTML page for a menu and its layout plan.

use crate::core::heatmap::{annotation_for, DESSERT_TINT};
use crate::core::layout::{LayoutPlan, Section};
use crate::domain::model::{Dish, MenuSet};
use std::fmt::Write;

const STYLE: &str = r#"
@page { size: A4; margin: 0; }
body { margin: 0; background: #e7e5e4; font-family: Georgia, 'Times New Roman', serif; color: #1f2937; }
.page { width: 210mm; min-height: 297mm; margin: 0 auto; background: #fff; padding: 18mm; box-sizing: border-box; display: flex; flex-direction: column; }
header { text-align: center; margin-bottom: 12mm; }
header h1 { display: inline-block; font-size: 36pt; text-transform: uppercase; letter-spacing: -0.02em; border-bottom: 3px double #1f2937; padding-bottom: 4pt; margin: 0 0 8pt; }
header p { color: #6b7280; font-style: italic; text-transform: uppercase; letter-spacing: 0.2em; margin: 0; }
.grid { flex: 1; display: grid; grid-template-columns: 5fr 1fr 6fr; }
.divider { border-right: 1px solid #e5e7eb; height: 90%; align-self: center; justify-self: center; }
.right { display: flex; flex-direction: column; }
h3 { font-size: 14pt; text-transform: uppercase; color: #9ca3af; letter-spacing: 0.2em; border-bottom: 1px solid #d1d5db; padding-bottom: 2pt; margin: 0 0 6pt; }
.anchor { background: #fafaf9; border: 1px solid #f5f5f4; padding: 16pt; margin: 0 -8pt 16pt; }
.anchor h3 { text-align: center; color: #b45309; border: none; font-size: 10pt; }
.magnet { flex-grow: 1; display: flex; flex-direction: column; justify-content: center; }
.sweets { margin-top: auto; text-align: right; }
.item { margin-bottom: 14pt; padding: 4pt; border-radius: 3pt; }
.item .head { display: flex; justify-content: space-between; align-items: baseline; }
.item h4 { margin: 0; font-size: 12pt; text-transform: uppercase; letter-spacing: 0.05em; }
.item .price { font-weight: bold; white-space: nowrap; margin-left: 12pt; }
.item p { margin: 2pt 0 0; color: #4b5563; font-size: 9.5pt; font-style: italic; }
.chef { color: #d97706; font-size: 8pt; font-weight: bold; text-transform: uppercase; letter-spacing: 0.1em; }
.zone-note { font-size: 7pt; color: #111827; font-family: sans-serif; }
footer { text-align: center; margin-top: 8mm; font-family: sans-serif; font-size: 7pt; color: #9ca3af; letter-spacing: 0.2em; text-transform: uppercase; }
@media print { body { background: #fff; } .page { margin: 0; } }
"#;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct HtmlRenderer {
    heatmap: bool,
}

impl HtmlRenderer {
    pub fn new(heatmap: bool) -> Self {
        Self { heatmap }
    }

    pub fn render(&self, menu: &MenuSet, plan: &LayoutPlan<'_>) -> String {
        let mut html = String::new();
        let name = escape_html(&menu.restaurant_name);

        html.push_str("<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", name);
        let _ = writeln!(html, "<style>{}</style>", STYLE);
        html.push_str("</head>\n<body>\n<div class=\"page\">\n");

        let _ = writeln!(
            html,
            "<header><h1>{}</h1><p>{}</p></header>",
            name,
            escape_html(&menu.tagline)
        );

        html.push_str("<div class=\"grid\">\n<div class=\"left\">\n");
        self.section(&mut html, "Starters", plan, Section::Lead);
        self.section(&mut html, "Entrées", plan, Section::Standard);
        html.push_str("</div>\n<div class=\"divider\"></div>\n<div class=\"right\">\n");

        html.push_str("<div class=\"anchor\">\n<h3>Recommendation</h3>\n");
        for dish in plan.section(Section::Anchor) {
            self.item(&mut html, dish, Section::Anchor);
        }
        html.push_str("</div>\n");

        html.push_str("<div class=\"magnet\">\n");
        self.section(&mut html, "Signatures", plan, Section::Magnet);
        html.push_str("</div>\n");

        html.push_str("<div class=\"sweets\">\n<h3>Sweets</h3>\n");
        for dish in plan.section(Section::Desserts) {
            self.dessert(&mut html, dish);
        }
        html.push_str("</div>\n</div>\n</div>\n");

        html.push_str(
            "<footer>Service included &bull; Please inform us of allergies</footer>\n</div>\n</body>\n</html>\n",
        );
        html
    }

    fn section(&self, html: &mut String, title: &str, plan: &LayoutPlan<'_>, section: Section) {
        let _ = writeln!(html, "<section class=\"{}\">", section_class(section));
        let _ = writeln!(html, "<h3>{}</h3>", escape_html(title));
        for dish in plan.section(section) {
            self.item(html, dish, section);
        }
        html.push_str("</section>\n");
    }

    fn item(&self, html: &mut String, dish: &Dish, section: Section) {
        if self.heatmap {
            let note = annotation_for(section.zone());
            let _ = writeln!(
                html,
                "<div class=\"item\" data-zone=\"{}\" title=\"{}\" style=\"background-color: {}\">",
                escape_html(note.label),
                escape_html(note.description),
                note.tint
            );
            let _ = writeln!(
                html,
                "<div class=\"zone-note\">{}</div>",
                escape_html(note.description)
            );
        } else {
            html.push_str("<div class=\"item\">\n");
        }

        let _ = writeln!(
            html,
            "<div class=\"head\"><h4>{}</h4><span class=\"price\">{}</span></div>",
            escape_html(&dish.name),
            escape_html(&dish.price)
        );
        let _ = writeln!(html, "<p>{}</p>", escape_html(&dish.description));
        if dish.is_highlighted() {
            html.push_str("<div class=\"chef\">&#10022; Chef's Choice</div>\n");
        }
        html.push_str("</div>\n");
    }

    fn dessert(&self, html: &mut String, dish: &Dish) {
        if self.heatmap {
            let _ = writeln!(
                html,
                "<div class=\"item dessert\" style=\"background-color: {}\">",
                DESSERT_TINT
            );
        } else {
            html.push_str("<div class=\"item dessert\">\n");
        }
        let _ = writeln!(
            html,
            "<h4>{} <span class=\"price\">{}</span></h4>",
            escape_html(&dish.name),
            escape_html(&dish.price)
        );
        let _ = writeln!(html, "<p>{}</p>", escape_html(&dish.description));
        html.push_str("</div>\n");
    }
}

fn section_class(section: Section) -> &'static str {
    match section {
        Section::Lead => "lead",
        Section::Standard => "standard",
        Section::Magnet => "signatures",
        Section::Anchor => "anchor",
        Section::Desserts => "sweets",
        Section::Dropped => "dropped",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::default_menu;
    use crate::core::layout::assign;
    use crate::domain::model::Category;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Fish & <Chips>"), "Fish &amp; &lt;Chips&gt;");
        assert_eq!(escape_html("\"it's\""), "&quot;it&#39;s&quot;");
    }

    #[test]
    fn test_render_default_menu() {
        let menu = default_menu();
        let plan = assign(&menu.dishes);
        let html = HtmlRenderer::new(false).render(&menu, &plan);

        assert!(html.contains("L&#39;Harmonie"));
        assert!(html.contains("Recommendation"));
        assert!(html.contains("Стейк Рибай Прайм"));
        assert!(html.contains("Chef's Choice"));
        assert!(!html.contains("data-zone"));

        let lead = html.find("Тартар из Мраморной Говядины").unwrap();
        let standard = html.find("Утиная Грудка Магре").unwrap();
        let magnet = html.find("Томленая Баранина").unwrap();
        let sweets = html.find("Лимонный Тарт").unwrap();
        assert!(lead < standard && standard < magnet && magnet < sweets);
    }

    #[test]
    fn test_heatmap_tints_items() {
        let menu = default_menu();
        let plan = assign(&menu.dishes);
        let html = HtmlRenderer::new(true).render(&menu, &plan);

        assert!(html.contains("data-zone=\"The Anchor\""));
        assert!(html.contains("data-zone=\"The Magnet\""));
        assert!(html.contains("data-zone=\"The Lead\""));
        assert!(html.contains(DESSERT_TINT));
    }

    #[test]
    fn test_empty_anchor_still_renders_box() {
        let menu = MenuSet {
            restaurant_name: "Empty".to_string(),
            tagline: String::new(),
            dishes: vec![Dish::new(1, "Soup", "", "300₽", Category::Starter)],
        };
        let plan = assign(&menu.dishes);
        let html = HtmlRenderer::new(false).render(&menu, &plan);

        assert!(html.contains("<div class=\"anchor\">\n<h3>Recommendation</h3>\n</div>"));
    }
}
