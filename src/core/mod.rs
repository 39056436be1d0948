pub mod defaults;
pub mod engine;
pub mod heatmap;
pub mod layout;
pub mod render;
pub mod schema;
pub mod state;

pub use crate::domain::model::{Category, Dish, LayoutZone, MenuSet, Theme};
pub use crate::domain::ports::{ConfigProvider, ContentProvider, Storage};
pub use crate::utils::error::Result;
