//! Structural check of provider payloads before they become a [`MenuSet`].

use crate::domain::model::{Category, Dish, MenuSet};
use crate::utils::error::{MenuError, Result};
use serde_json::{Map, Value};

/// Parses provider JSON text into a menu, rejecting anything missing or mistyped.
pub fn parse_menu_payload(text: &str) -> Result<MenuSet> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| MenuError::malformed("$", format!("response is not valid JSON: {}", e)))?;
    menu_from_value(&value)
}

pub fn menu_from_value(value: &Value) -> Result<MenuSet> {
    let root = value
        .as_object()
        .ok_or_else(|| MenuError::malformed("$", "expected an object"))?;

    let restaurant_name = required_str(root, "restaurantName", "restaurantName")?;
    let tagline = required_str(root, "tagline", "tagline")?;

    let items = root
        .get("dishes")
        .ok_or_else(|| MenuError::malformed("dishes", "missing required field"))?
        .as_array()
        .ok_or_else(|| MenuError::malformed("dishes", "expected an array"))?;

    let dishes = items
        .iter()
        .enumerate()
        .map(|(i, item)| dish_from_value(item, &format!("dishes[{}]", i)))
        .collect::<Result<Vec<_>>>()?;

    let menu = MenuSet {
        restaurant_name,
        tagline,
        dishes,
    };
    report_contract_deviations(&menu);
    Ok(menu)
}

fn dish_from_value(value: &Value, path: &str) -> Result<Dish> {
    let obj = value
        .as_object()
        .ok_or_else(|| MenuError::malformed(path, "expected an object"))?;

    let id = obj
        .get("id")
        .ok_or_else(|| MenuError::malformed(format!("{}.id", path), "missing required field"))?
        .as_i64()
        .ok_or_else(|| MenuError::malformed(format!("{}.id", path), "expected an integer"))?;

    let highlight = match obj.get("highlight") {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            return Err(MenuError::malformed(
                format!("{}.highlight", path),
                "expected a boolean",
            ))
        }
    };

    Ok(Dish {
        id,
        name: required_str(obj, "name", &format!("{}.name", path))?,
        description: required_str(obj, "description", &format!("{}.description", path))?,
        price: required_str(obj, "price", &format!("{}.price", path))?,
        category: required_str(obj, "category", &format!("{}.category", path))?,
        highlight,
    })
}

fn required_str(obj: &Map<String, Value>, key: &str, path: &str) -> Result<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(MenuError::malformed(path, "expected a string")),
        None => Err(MenuError::malformed(path, "missing required field")),
    }
}

/// Distribution and id uniqueness are provider promises; deviations are logged, not rejected.
fn report_contract_deviations(menu: &MenuSet) {
    let counts = menu.category_counts();
    if !counts.matches_expected() {
        tracing::warn!(
            "Menu category distribution deviates from 2/5/2/1: {} starters, {} mains, {} desserts, {} specials, {} unrecognized",
            counts.starters,
            counts.mains,
            counts.desserts,
            counts.specials,
            counts.unrecognized
        );
    }
    for dish in &menu.dishes {
        if dish.category().is_none() {
            tracing::warn!(
                "Dish {} has category '{}', expected one of {:?}",
                dish.id,
                dish.category,
                Category::ALL.map(Category::as_str)
            );
        }
    }
    let duplicates = menu.duplicate_ids();
    if !duplicates.is_empty() {
        tracing::warn!("Duplicate dish ids in menu: {:?}", duplicates);
    }
}
