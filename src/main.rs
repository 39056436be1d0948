use clap::Parser;
use neuro_menu::config::{Command, LogFormat};
use neuro_menu::core::schema::parse_menu_payload;
use neuro_menu::core::state::MenuOrigin;
use neuro_menu::core::ConfigProvider;
use neuro_menu::domain::model::Theme;
use neuro_menu::utils::error::ErrorSeverity;
use neuro_menu::utils::{logger, validation::Validate};
use neuro_menu::{CliConfig, GeminiProvider, LocalStorage, MenuEngine, MenuError, MenuState};

fn exit_code(e: &MenuError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 可重試
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(context: &str, e: MenuError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting neuro-menu");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Command::Themes = cli.command {
        for theme in Theme::ALL {
            println!("{:<24} {}", theme.slug(), theme.label());
        }
        return Ok(());
    }

    let config = cli
        .resolve()
        .unwrap_or_else(|e| fail("Failed to load configuration", e));

    if let Err(e) = config.validate() {
        fail("Configuration validation failed", e);
    }

    let output_path = config.output_path().to_string();
    let provider = GeminiProvider::new(&config.provider)
        .unwrap_or_else(|e| fail("Failed to initialise provider", e));
    if !provider.has_credential() {
        tracing::warn!("No API key configured; generation is unavailable");
    }

    let storage = LocalStorage::new(output_path);
    let engine = MenuEngine::new(provider, storage, config);

    let mut state = match engine.load_saved_menu().await {
        Ok(Some(menu)) => {
            tracing::info!("Loaded saved menu '{}'", menu.restaurant_name);
            MenuState::with_menu(menu, MenuOrigin::Loaded)
        }
        Ok(None) => MenuState::default(),
        Err(e) => {
            tracing::warn!("Ignoring unreadable saved menu: {}", e);
            MenuState::default()
        }
    };

    match cli.command {
        Command::Generate { theme } => {
            let outcome = engine
                .run(&mut state, theme)
                .await
                .unwrap_or_else(|e| fail("Publishing failed", e));

            for path in &outcome.outputs {
                println!("📁 {}", path);
            }

            if let Some(e) = outcome.generation_error {
                tracing::info!(
                    "Rendered retained menu '{}' instead",
                    state.current().restaurant_name
                );
                fail("Menu generation failed", e);
            }
            println!("✅ Generated '{}'", state.current().restaurant_name);
        }
        Command::Render { input } => {
            if let Some(path) = input {
                let text = std::fs::read_to_string(&path)
                    .unwrap_or_else(|e| fail("Failed to read menu file", MenuError::IoError(e)));
                let menu = parse_menu_payload(&text).unwrap_or_else(|e| {
                    fail(
                        "Menu file is invalid",
                        MenuError::ConfigValidationError {
                            field: path.clone(),
                            message: e.to_string(),
                        },
                    )
                });
                state = MenuState::with_menu(menu, MenuOrigin::Loaded);
            }

            let outputs = engine
                .publish(&state)
                .await
                .unwrap_or_else(|e| fail("Publishing failed", e));
            for path in &outputs {
                println!("📁 {}", path);
            }
            println!("✅ Rendered '{}'", state.current().restaurant_name);
        }
        Command::Themes => {}
    }

    Ok(())
}
