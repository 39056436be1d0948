use serde::{Deserialize, Serialize};
use std::fmt;

/// The four dish categories a provider is expected to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Starter,
    Main,
    Dessert,
    Special,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Starter,
        Category::Main,
        Category::Dessert,
        Category::Special,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Starter => "starter",
            Category::Main => "main",
            Category::Dessert => "dessert",
            Category::Special => "special",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single menu entry.
///
/// `category` keeps the raw value received from the provider so that values
/// outside [`Category`] reach the layout step, which drops them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
}

impl Dish {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price: price.into(),
            category: category.as_str().to_string(),
            highlight: None,
        }
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = Some(true);
        self
    }

    /// `None` when the raw category is not one of the known values.
    pub fn category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    /// Chef's Choice marker; independent of the dish's zone.
    pub fn is_highlighted(&self) -> bool {
        self.highlight.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSet {
    pub restaurant_name: String,
    pub tagline: String,
    pub dishes: Vec<Dish>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub starters: usize,
    pub mains: usize,
    pub desserts: usize,
    pub specials: usize,
    pub unrecognized: usize,
}

impl CategoryCounts {
    /// Distribution the provider is asked to produce.
    pub const EXPECTED: CategoryCounts = CategoryCounts {
        starters: 2,
        mains: 5,
        desserts: 2,
        specials: 1,
        unrecognized: 0,
    };

    pub fn matches_expected(&self) -> bool {
        *self == Self::EXPECTED
    }
}

impl MenuSet {
    pub fn category_counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for dish in &self.dishes {
            match dish.category() {
                Some(Category::Starter) => counts.starters += 1,
                Some(Category::Main) => counts.mains += 1,
                Some(Category::Dessert) => counts.desserts += 1,
                Some(Category::Special) => counts.specials += 1,
                None => counts.unrecognized += 1,
            }
        }
        counts
    }

    /// Ids that occur more than once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<i64> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for dish in &self.dishes {
            if !seen.insert(dish.id) && !duplicates.contains(&dish.id) {
                duplicates.push(dish.id);
            }
        }
        duplicates
    }
}

/// Named page regions of the golden-triangle layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutZone {
    TheAnchor,
    TheMagnet,
    TheLead,
    Standard,
}

impl LayoutZone {
    pub fn label(self) -> &'static str {
        match self {
            LayoutZone::TheAnchor => "The Anchor",
            LayoutZone::TheMagnet => "The Magnet",
            LayoutZone::TheLead => "The Lead",
            LayoutZone::Standard => "Standard Flow",
        }
    }
}

/// The fixed set of concepts a menu can be generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    ModernRussian,
    ItalianClassic,
    PanAsianFusion,
    FrenchBistro,
    ScandinavianMinimalism,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::ModernRussian,
        Theme::ItalianClassic,
        Theme::PanAsianFusion,
        Theme::FrenchBistro,
        Theme::ScandinavianMinimalism,
    ];

    /// Label sent to the content provider.
    pub fn label(self) -> &'static str {
        match self {
            Theme::ModernRussian => "Современная Русская",
            Theme::ItalianClassic => "Итальянская Классика",
            Theme::PanAsianFusion => "Паназиатский Фьюжн",
            Theme::FrenchBistro => "Французское Бистро",
            Theme::ScandinavianMinimalism => "Скандинавский Минимализм",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Theme::ModernRussian => "modern-russian",
            Theme::ItalianClassic => "italian-classic",
            Theme::PanAsianFusion => "pan-asian-fusion",
            Theme::FrenchBistro => "french-bistro",
            Theme::ScandinavianMinimalism => "scandinavian-minimalism",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("main"), Some(Category::Main));
        assert_eq!(Category::parse("special"), Some(Category::Special));
        assert_eq!(Category::parse("Main"), None);
        assert_eq!(Category::parse("unknown_value"), None);
    }

    #[test]
    fn test_dish_serializes_in_provider_schema() {
        let dish = Dish::new(7, "Tart", "Lemon", "550₽", Category::Dessert);
        let json = serde_json::to_value(&dish).unwrap();
        assert_eq!(json["category"], "dessert");
        assert!(json.get("highlight").is_none());

        let menu = MenuSet {
            restaurant_name: "Test".to_string(),
            tagline: "Line".to_string(),
            dishes: vec![dish.highlighted()],
        };
        let json = serde_json::to_value(&menu).unwrap();
        assert_eq!(json["restaurantName"], "Test");
        assert_eq!(json["dishes"][0]["highlight"], true);
    }

    #[test]
    fn test_category_counts_and_duplicates() {
        let mut dishes = vec![
            Dish::new(1, "a", "", "1", Category::Starter),
            Dish::new(2, "b", "", "1", Category::Main),
            Dish::new(2, "c", "", "1", Category::Main),
        ];
        dishes.push(Dish {
            category: "brunch".to_string(),
            ..Dish::new(4, "d", "", "1", Category::Main)
        });
        let menu = MenuSet {
            restaurant_name: String::new(),
            tagline: String::new(),
            dishes,
        };

        let counts = menu.category_counts();
        assert_eq!(counts.starters, 1);
        assert_eq!(counts.mains, 2);
        assert_eq!(counts.unrecognized, 1);
        assert!(!counts.matches_expected());
        assert_eq!(menu.duplicate_ids(), vec![2]);
    }

    #[test]
    fn test_theme_labels_are_distinct() {
        let labels: std::collections::HashSet<_> = Theme::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(Theme::default(), Theme::ModernRussian);
    }
}
