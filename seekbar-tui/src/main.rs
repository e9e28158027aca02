//! SeekBar TUI — host screen for the seek bar widget.
//!
//! Layout:
//! 1. Value text field and Set button
//! 2. The seek bar, driven by mouse drag or Left/Right
//! 3. Key hints
//! 4. Status bar with the last value reported by the seek bar

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::{info, warn};

use seekbar_tui::app::AppState;
use seekbar_tui::cli::Cli;
use seekbar_tui::config::AppConfig;
use seekbar_tui::{input, logging, persistence, ui};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    for warning in config.seek_bar.validate() {
        warn!(%warning, "seek bar config");
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_path = match (&cli.state_file, cli.no_persist) {
        (_, true) => None,
        (Some(path), false) => Some(path.clone()),
        (None, false) => Some(persistence::default_path()),
    };

    // Measure before restoring so the restored value reports against the real width.
    let mut app = AppState::new(config);
    let (columns, rows) = crossterm::terminal::size()?;
    app.apply_layout(Rect::new(0, 0, columns, rows));
    if let Some(path) = &state_path {
        persistence::apply(&mut app, persistence::load(path));
    }
    info!(?state_path, "seekbar starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Some(path) = &state_path {
        if let Err(err) = persistence::save(path, &persistence::extract(&app)) {
            warn!(%err, "failed to save state");
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(value = app.seek_bar.value(), "seekbar exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let mut last_frame = Instant::now();
    loop {
        // 1. Layout and measure for the current terminal size
        let size = terminal.size()?;
        app.apply_layout(Rect::new(0, 0, size.width, size.height));

        // 2. Collect seek reports, step feedback
        let now = Instant::now();
        app.tick(now - last_frame);
        last_frame = now;

        // 3. Render only when something changed
        if app.take_redraw() {
            terminal.draw(|f| ui::draw(f, app))?;
        }

        // 4. Poll for input events (16ms timeout for ~60 FPS feedback animation)
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Resize(_, _) => app.mark_dirty(),
                _ => {}
            }
        }

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
