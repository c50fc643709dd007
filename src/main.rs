//! heart-risk-tui - A terminal client for a heart-disease prediction server
//!
//! This is the main entry point for the heart-risk-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod launch;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::launch::LaunchParams;
use crate::services::HttpPredictionClient;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = Config::resolve();

    // Keep the guard alive so buffered log lines are flushed on exit
    let log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Logging disabled: {:#}", err);
            None
        }
    };

    if !Config::exists() {
        if let Err(err) = config.save() {
            warn!(error = %err, "could not write default config");
        }
    }

    let launch = LaunchParams::from_args(std::env::args().skip(1));
    info!(base_url = %config.base_url, demo = launch.demo, "starting");

    let transport = Arc::new(HttpPredictionClient::new(&config)?);

    // Create app state
    let mut app = App::new(config, launch, transport);
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "fatal error");
        // exit() skips destructors; flush the log writer first
        drop(log_guard);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("exiting");
    drop(log_guard);
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "draw failed");
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

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
