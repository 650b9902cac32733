//! folio - terminal viewer for a personal portfolio
//!
//! Binary entry point for the TUI application.

use std::fs::{self, OpenOptions};
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use folio::app::App;
use folio::config::Config;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::parse();
    init_logging(&config);

    let terminal = ratatui::init();
    // restore even if the loop unwinds
    let _restore = scopeguard::guard((), |_| ratatui::restore());
    run(terminal, config)
}

/// Send log output to a file; the terminal belongs to the UI.
fn init_logging(config: &Config) {
    let Some(path) = config.log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("folio: cannot open log file {}: {}", path.display(), e);
            return;
        }
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", config.log_filter());
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("folio {} starting", env!("CARGO_PKG_VERSION"));
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    let mut app = App::new(config);

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a timeout so expired notifications disappear without input.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(250))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}
