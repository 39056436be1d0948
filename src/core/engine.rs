use crate::core::heatmap::{placements, PlacedDish};
use crate::core::layout::{assign, LayoutPlan};
use crate::core::render::HtmlRenderer;
use crate::core::schema::menu_from_value;
use crate::core::state::MenuState;
use crate::core::{ConfigProvider, ContentProvider, Storage};
use crate::domain::model::{MenuSet, Theme};
use crate::domain::ports::OutputFormat;
use crate::utils::error::{MenuError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MENU_FILE: &str = "menu.json";
pub const LAYOUT_FILE: &str = "layout.json";
pub const HTML_FILE: &str = "menu.html";

/// Serialized form of a layout plan, written next to the rendered page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument<'a> {
    pub restaurant_name: &'a str,
    pub tagline: &'a str,
    pub generated_at: DateTime<Utc>,
    pub heatmap: bool,
    pub placements: Vec<PlacedDish<'a>>,
    pub dropped: Vec<i64>,
}

impl<'a> LayoutDocument<'a> {
    pub fn new(menu: &'a MenuSet, plan: &LayoutPlan<'a>, heatmap: bool) -> Self {
        Self {
            restaurant_name: &menu.restaurant_name,
            tagline: &menu.tagline,
            generated_at: Utc::now(),
            heatmap,
            placements: placements(plan, heatmap),
            dropped: plan.dropped.iter().map(|d| d.id).collect(),
        }
    }
}

/// Result of one generate-and-publish run.
#[derive(Debug)]
pub struct RunOutcome {
    pub outputs: Vec<String>,
    /// Set when generation failed and the retained menu was published instead.
    pub generation_error: Option<MenuError>,
}

pub struct MenuEngine<P: ContentProvider, S: Storage, C: ConfigProvider> {
    provider: P,
    storage: S,
    config: C,
}

impl<P: ContentProvider, S: Storage, C: ConfigProvider> MenuEngine<P, S, C> {
    pub fn new(provider: P, storage: S, config: C) -> Self {
        Self {
            provider,
            storage,
            config,
        }
    }

    /// Asks the provider for a new menu. On failure the current menu is kept.
    pub async fn refresh(&self, state: &mut MenuState, theme: Theme) -> Result<()> {
        tracing::info!("🍽️ Generating menu for theme: {}", theme.label());

        match self.provider.generate(theme).await {
            Ok(menu) => {
                state.replace(menu, theme);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    "Generation failed ({:?}), keeping '{}'",
                    e.category(),
                    state.current().restaurant_name
                );
                state.record_failure(&e);
                Err(e)
            }
        }
    }

    /// Lays out the current menu and writes every configured output.
    pub async fn publish(&self, state: &MenuState) -> Result<Vec<String>> {
        let menu = state.current();
        let plan = assign(&menu.dishes);
        let heatmap = self.config.heatmap();
        let mut outputs = Vec::new();

        for format in self.config.output_formats() {
            match format {
                OutputFormat::Html => {
                    let html = HtmlRenderer::new(heatmap).render(menu, &plan);
                    outputs.push(self.write(HTML_FILE, html.as_bytes()).await?);
                }
                OutputFormat::Json => {
                    let menu_json = serde_json::to_vec_pretty(menu)?;
                    outputs.push(self.write(MENU_FILE, &menu_json).await?);

                    let layout_json =
                        serde_json::to_vec_pretty(&LayoutDocument::new(menu, &plan, heatmap))?;
                    outputs.push(self.write(LAYOUT_FILE, &layout_json).await?);
                }
            }
        }

        Ok(outputs)
    }

    /// Refresh, then publish whatever menu is current afterwards.
    pub async fn run(&self, state: &mut MenuState, theme: Theme) -> Result<RunOutcome> {
        let generation_error = self.refresh(state, theme).await.err();
        let outputs = self.publish(state).await?;
        Ok(RunOutcome {
            outputs,
            generation_error,
        })
    }

    /// Menu saved by a previous run, if any.
    pub async fn load_saved_menu(&self) -> Result<Option<MenuSet>> {
        match self.storage.read_file(MENU_FILE).await {
            Ok(bytes) => {
                let value: serde_json::Value = serde_json::from_slice(&bytes)?;
                Ok(Some(menu_from_value(&value)?))
            }
            Err(MenuError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn write(&self, name: &str, data: &[u8]) -> Result<String> {
        tracing::debug!("Writing {} ({} bytes)", name, data.len());
        self.storage.write_file(name, data).await?;
        Ok(format!(
            "{}/{}",
            self.config.output_path().trim_end_matches('/'),
            name
        ))
    }
}
