use crate::core::defaults::default_menu;
use crate::domain::model::{MenuSet, Theme};
use crate::utils::error::MenuError;
use chrono::{DateTime, Utc};

/// Where the current menu came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOrigin {
    BuiltIn,
    Loaded,
    Generated(Theme),
}

/// Owner of the currently displayed menu.
///
/// Only a successful generation replaces the menu, and always as a whole.
/// A refresh holds `&mut MenuState` for its whole duration, so there is at
/// most one request in flight per state.
#[derive(Debug, Clone)]
pub struct MenuState {
    current: MenuSet,
    origin: MenuOrigin,
    updated_at: DateTime<Utc>,
    last_error: Option<String>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::with_menu(default_menu(), MenuOrigin::BuiltIn)
    }
}

impl MenuState {
    pub fn with_menu(menu: MenuSet, origin: MenuOrigin) -> Self {
        Self {
            current: menu,
            origin,
            updated_at: Utc::now(),
            last_error: None,
        }
    }

    pub fn current(&self) -> &MenuSet {
        &self.current
    }

    pub fn origin(&self) -> &MenuOrigin {
        &self.origin
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// User-facing message of the last failed refresh, cleared on success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn replace(&mut self, menu: MenuSet, theme: Theme) {
        self.current = menu;
        self.origin = MenuOrigin::Generated(theme);
        self.updated_at = Utc::now();
        self.last_error = None;
    }

    pub fn record_failure(&mut self, error: &MenuError) {
        self.last_error = Some(error.user_friendly_message());
    }
}
