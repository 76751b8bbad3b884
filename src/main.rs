use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use leadwizard::config::AppConfig;
use leadwizard::core::drafts::DraftStore;
use leadwizard::core::lead_intake::lead_intake_definition;
use leadwizard::core::logging;
use leadwizard::core::wizard::{Wizard, WizardDefinition, WizardOptions};
use leadwizard::tui::app::{AppPaths, AppState};
use leadwizard::tui::events::{AppEvent, Notification, NotificationLevel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();

    // Initialize logging (file only, the TUI owns stdout)
    let _log_guard = logging::init_tui(&config.data_dir().join("logs"));
    log::info!("{} v{} starting", leadwizard::NAME, leadwizard::VERSION);

    let definition = match &config.wizard.definition_path {
        Some(path) => match WizardDefinition::from_path(path) {
            Ok(definition) => definition,
            Err(e) => {
                eprintln!("Failed to load wizard from {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => lead_intake_definition(),
    };

    let drafts = match DraftStore::open(config.drafts_dir()) {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("Drafts disabled: {e}");
            None
        }
    };

    let (wizard, resumed) = match build_wizard(definition, drafts.as_ref()) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    let mut app = AppState::new(
        wizard,
        drafts,
        AppPaths {
            leads_dir: config.leads_dir(),
        },
        Duration::from_millis(config.wizard.autosave_debounce_ms),
    );
    if resumed {
        let _ = app.sender().send(AppEvent::Notification(Notification::new(
            "Resumed your last draft",
            NotificationLevel::Info,
        )));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app
        .run(
            &mut terminal,
            Duration::from_millis(config.tui.tick_rate_ms),
            Duration::from_millis(config.wizard.elapsed_tick_ms),
        )
        .await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("TUI exited with error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("{} exiting", leadwizard::NAME);
    Ok(())
}

/// Resume the most recent draft for `definition`, or start a fresh session.
fn build_wizard(
    definition: WizardDefinition,
    drafts: Option<&DraftStore>,
) -> Result<(Wizard, bool), leadwizard::core::wizard::ConfigError> {
    let latest = drafts.and_then(|store| match store.latest_for(&definition.id) {
        Ok(latest) => latest,
        Err(e) => {
            log::warn!("Failed to scan drafts: {e}");
            None
        }
    });

    if let Some(snapshot) = latest {
        let draft_id = snapshot.id;
        match Wizard::restore(definition.clone(), WizardOptions::default(), snapshot) {
            Ok(wizard) => {
                log::info!("Resumed draft {draft_id}");
                return Ok((wizard, true));
            }
            Err(e) => log::warn!("Ignoring draft {draft_id}: {e}"),
        }
    }

    Ok((Wizard::new(definition, WizardOptions::default())?, false))
}
