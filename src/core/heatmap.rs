//! Heatmap overlay: zone descriptions and tints layered over a [`LayoutPlan`].

use crate::core::layout::{LayoutPlan, Section};
use crate::domain::model::{Dish, LayoutZone};
use serde::Serialize;

/// Light tint for the dessert section; it never goes through [`annotation_for`].
pub const DESSERT_TINT: &str = "rgba(239, 246, 255, 0.5)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneAnnotation {
    pub label: &'static str,
    pub description: &'static str,
    pub tint: &'static str,
}

pub fn annotation_for(zone: Option<LayoutZone>) -> ZoneAnnotation {
    match zone {
        Some(LayoutZone::TheAnchor) => ZoneAnnotation {
            label: LayoutZone::TheAnchor.label(),
            description: "The Anchor: Top right is the second place eyes scan. Ideal for high-margin specials.",
            tint: "rgba(251, 191, 36, 0.2)",
        },
        Some(LayoutZone::TheMagnet) => ZoneAnnotation {
            label: LayoutZone::TheMagnet.label(),
            description: "Optical Center: The eye naturally settles here. Perfect for signature dishes.",
            tint: "rgba(248, 113, 113, 0.2)",
        },
        Some(LayoutZone::TheLead) => ZoneAnnotation {
            label: LayoutZone::TheLead.label(),
            description: "Primary Scan: Top left is read sequentially. Good for appetizers.",
            tint: "rgba(96, 165, 250, 0.2)",
        },
        Some(LayoutZone::Standard) | None => ZoneAnnotation {
            label: LayoutZone::Standard.label(),
            description: "Standard Flow: Used for listing core items.",
            tint: "rgba(229, 231, 235, 0.3)",
        },
    }
}

/// A rendered dish with its section and, in heatmap mode, its annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedDish<'a> {
    pub section: Section,
    pub zone: Option<LayoutZone>,
    pub dish: &'a Dish,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<ZoneAnnotation>,
}

pub fn placements<'a>(plan: &LayoutPlan<'a>, heatmap: bool) -> Vec<PlacedDish<'a>> {
    plan.rendered()
        .map(|(section, dish)| {
            let zone = section.zone();
            let annotation = match section {
                Section::Desserts => None,
                _ if heatmap => Some(annotation_for(zone)),
                _ => None,
            };
            PlacedDish {
                section,
                zone,
                dish,
                annotation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::assign;
    use crate::domain::model::Category;

    fn sample() -> Vec<Dish> {
        vec![
            Dish::new(1, "s", "", "1", Category::Starter),
            Dish::new(2, "m0", "", "1", Category::Main),
            Dish::new(3, "m1", "", "1", Category::Main),
            Dish::new(4, "m2", "", "1", Category::Main),
            Dish::new(5, "m3", "", "1", Category::Main),
            Dish::new(6, "sp", "", "1", Category::Special),
            Dish::new(7, "d", "", "1", Category::Dessert),
        ]
    }

    #[test]
    fn test_heatmap_does_not_change_assignment() {
        let dishes = sample();
        let plan = assign(&dishes);

        let plain: Vec<_> = placements(&plan, false)
            .into_iter()
            .map(|p| (p.section, p.dish.id))
            .collect();
        let heat: Vec<_> = placements(&plan, true)
            .into_iter()
            .map(|p| (p.section, p.dish.id))
            .collect();

        assert_eq!(plain, heat);
    }

    #[test]
    fn test_annotations_only_when_enabled() {
        let dishes = sample();
        let plan = assign(&dishes);

        assert!(placements(&plan, false).iter().all(|p| p.annotation.is_none()));

        for placed in placements(&plan, true) {
            match placed.section {
                Section::Desserts => assert!(placed.annotation.is_none()),
                _ => assert_eq!(placed.annotation, Some(annotation_for(placed.zone))),
            }
        }
    }

    #[test]
    fn test_zone_tints_are_distinct_for_hot_zones() {
        let anchor = annotation_for(Some(LayoutZone::TheAnchor));
        let magnet = annotation_for(Some(LayoutZone::TheMagnet));
        let lead = annotation_for(Some(LayoutZone::TheLead));
        let standard = annotation_for(Some(LayoutZone::Standard));

        assert_ne!(anchor.tint, magnet.tint);
        assert_ne!(magnet.tint, lead.tint);
        assert_ne!(lead.tint, standard.tint);
        assert_eq!(annotation_for(None), standard);
        assert!(anchor.description.starts_with("The Anchor"));
    }
}
