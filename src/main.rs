//! contacts-tui - A terminal contact manager
//!
//! This is the main entry point for the contacts-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod controller;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::controller::ContactScreen;
use crate::model::Selection;
use crate::services::{ContactStore, DirectoryStore, Locale, Notifier, Translator};
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "contacts-tui", version, about = "Manage your contacts from the terminal")]
struct Cli {
    /// Config file (default: ~/.contacts-tui/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the contact files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Interface language (en, fr)
    #[arg(long)]
    locale: Option<Locale>,

    /// Log file (default: ~/.contacts-tui/contacts-tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .or_else(Config::config_path)
        .context("Could not determine config path, set HOME or pass --config")?;
    let config = Config::load_or_init(&config_path)?.with_overrides(cli.data_dir, cli.locale);

    let log_path = cli
        .log_file
        .or_else(Config::log_path)
        .unwrap_or_else(|| PathBuf::from("contacts-tui.log"));
    logging::init(&log_path)?;
    tracing::info!(
        config = %config_path.display(),
        data_dir = %config.data_dir.display(),
        locale = %config.locale,
        "Starting contacts-tui"
    );

    let store: Arc<dyn ContactStore> = Arc::new(DirectoryStore::open(&config.data_dir)?);
    let translator = Translator::new(config.locale);
    let notifier = Notifier::new(translator, config.alert_duration());
    let screen = ContactScreen::new(store, Selection::new(), notifier);
    let mut app = App::new(screen, translator);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "Application error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("Exiting contacts-tui");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "Draw error");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for background work and alert expiry
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
