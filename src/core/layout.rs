//! Golden-triangle layout assignment.
//!
//! Dishes are placed purely by category and by their index among dishes of
//! the same category. The rule set lives in [`ZONE_RULES`].

use crate::domain::model::{Category, Dish, LayoutZone};
use serde::Serialize;

/// Page section a dish is placed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Lead,
    Standard,
    Magnet,
    Anchor,
    Desserts,
    Dropped,
}

impl Section {
    /// Sections in page render order. `Dropped` is never rendered.
    pub const RENDERED: [Section; 5] = [
        Section::Lead,
        Section::Standard,
        Section::Anchor,
        Section::Magnet,
        Section::Desserts,
    ];

    /// Desserts and dropped dishes have no zone.
    pub fn zone(self) -> Option<LayoutZone> {
        match self {
            Section::Lead => Some(LayoutZone::TheLead),
            Section::Standard => Some(LayoutZone::Standard),
            Section::Magnet => Some(LayoutZone::TheMagnet),
            Section::Anchor => Some(LayoutZone::TheAnchor),
            Section::Desserts | Section::Dropped => None,
        }
    }
}

/// How the dishes of one category group are spread over sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    All(Section),
    Split {
        at: usize,
        head: Section,
        tail: Section,
    },
    FirstOnly(Section),
}

impl Placement {
    /// Section for the dish at `index` within its category group.
    pub fn section_for(self, index: usize) -> Section {
        match self {
            Placement::All(section) => section,
            Placement::Split { at, head, tail } => {
                if index < at {
                    head
                } else {
                    tail
                }
            }
            Placement::FirstOnly(section) => {
                if index == 0 {
                    section
                } else {
                    Section::Dropped
                }
            }
        }
    }
}

pub const ZONE_RULES: [(Category, Placement); 4] = [
    (Category::Starter, Placement::All(Section::Lead)),
    (
        Category::Main,
        Placement::Split {
            at: 3,
            head: Section::Standard,
            tail: Section::Magnet,
        },
    ),
    (Category::Special, Placement::FirstOnly(Section::Anchor)),
    (Category::Dessert, Placement::All(Section::Desserts)),
];

/// Stable per-category groups of a dish sequence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryGroups<'a> {
    pub specials: Vec<&'a Dish>,
    pub starters: Vec<&'a Dish>,
    pub mains: Vec<&'a Dish>,
    pub desserts: Vec<&'a Dish>,
    /// Dishes whose category is none of the four known values.
    pub unrecognized: Vec<&'a Dish>,
}

impl<'a> CategoryGroups<'a> {
    pub fn group(&self, category: Category) -> &[&'a Dish] {
        match category {
            Category::Special => &self.specials,
            Category::Starter => &self.starters,
            Category::Main => &self.mains,
            Category::Dessert => &self.desserts,
        }
    }
}

pub fn partition(dishes: &[Dish]) -> CategoryGroups<'_> {
    let mut groups = CategoryGroups::default();
    for dish in dishes {
        match dish.category() {
            Some(Category::Special) => groups.specials.push(dish),
            Some(Category::Starter) => groups.starters.push(dish),
            Some(Category::Main) => groups.mains.push(dish),
            Some(Category::Dessert) => groups.desserts.push(dish),
            None => groups.unrecognized.push(dish),
        }
    }
    groups
}

/// Section-by-section placement of a dish sequence.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutPlan<'a> {
    pub lead: Vec<&'a Dish>,
    pub standard: Vec<&'a Dish>,
    pub magnet: Vec<&'a Dish>,
    pub anchor: Vec<&'a Dish>,
    pub desserts: Vec<&'a Dish>,
    pub dropped: Vec<&'a Dish>,
}

impl<'a> LayoutPlan<'a> {
    pub fn section(&self, section: Section) -> &[&'a Dish] {
        match section {
            Section::Lead => &self.lead,
            Section::Standard => &self.standard,
            Section::Magnet => &self.magnet,
            Section::Anchor => &self.anchor,
            Section::Desserts => &self.desserts,
            Section::Dropped => &self.dropped,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut Vec<&'a Dish> {
        match section {
            Section::Lead => &mut self.lead,
            Section::Standard => &mut self.standard,
            Section::Magnet => &mut self.magnet,
            Section::Anchor => &mut self.anchor,
            Section::Desserts => &mut self.desserts,
            Section::Dropped => &mut self.dropped,
        }
    }

    /// Rendered dishes with their section, in page order.
    pub fn rendered(&self) -> impl Iterator<Item = (Section, &'a Dish)> + '_ {
        Section::RENDERED
            .into_iter()
            .flat_map(move |section| self.section(section).iter().map(move |d| (section, *d)))
    }

    /// Section a dish instance was placed into.
    pub fn section_of(&self, dish: &Dish) -> Option<Section> {
        Section::RENDERED
            .into_iter()
            .chain(std::iter::once(Section::Dropped))
            .find(|s| self.section(*s).iter().any(|d| std::ptr::eq(*d, dish)))
    }
}

pub fn assign(dishes: &[Dish]) -> LayoutPlan<'_> {
    let groups = partition(dishes);
    let mut plan = LayoutPlan::default();

    for (category, placement) in ZONE_RULES {
        for (index, dish) in groups.group(category).iter().enumerate() {
            plan.section_mut(placement.section_for(index)).push(*dish);
        }
    }

    for dish in &groups.unrecognized {
        tracing::warn!(
            "Dropping dish {} '{}' with unrecognized category '{}'",
            dish.id,
            dish.name,
            dish.category
        );
    }
    if groups.specials.len() > 1 {
        tracing::warn!(
            "{} specials received, only the first is placed in the anchor",
            groups.specials.len()
        );
    }
    plan.dropped.extend(groups.unrecognized);

    tracing::debug!(
        lead = plan.lead.len(),
        standard = plan.standard.len(),
        magnet = plan.magnet.len(),
        anchor = plan.anchor.len(),
        desserts = plan.desserts.len(),
        dropped = plan.dropped.len(),
        "Layout assigned"
    );

    plan
}
