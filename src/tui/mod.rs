//! Terminal frontend: welcome screen, game screen, event loop.
//!
//! The loop is the single writer of game state. Bot replies are computed
//! when the human move lands, then delivered back through a channel after
//! a short thinking delay; each reply carries the ticket it was scheduled
//! under so replies that outlive a restart are discarded.

mod app;
mod ui;

pub use app::{Action, App, AppEvent, Screen};

use crate::session::GameMode;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Cosmetic pacing for the bot's reply; not a correctness requirement.
const BOT_DELAY: Duration = Duration::from_millis(600);

/// Runs the terminal frontend until the user quits.
pub async fn run(mode: Option<GameMode>, seed: Option<u64>) -> Result<()> {
    info!("starting terminal frontend");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(mode, seed);
    let res = event_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "event loop error");
    }
    res
}

async fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Delayed bot replies, re-validated against their ticket
        while let Ok(AppEvent::BotReply { ticket, position }) = event_rx.try_recv() {
            app.bot_reply(ticket, position);
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match app.on_key(key.code) {
                Action::Quit => {
                    info!("user quit");
                    return Ok(());
                }
                Action::ScheduleBot { ticket, position } => {
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(BOT_DELAY).await;
                        let _ = tx.send(AppEvent::BotReply { ticket, position });
                    });
                }
                Action::None => {}
            }
        }
    }
}
