//! Terminal session wiring: raw mode in, alternate screen, the controller
//! task on one side and the event/render loop on the other.

use std::io::{stderr, Stderr};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{mpsc, watch};
use tokio::time::interval;

use crate::controller::{Command, GameController};
use crate::game::GameConfig;
use crate::{input, render};

const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct App {
    config: GameConfig,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut out = stderr();
        execute!(out, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.session(&mut terminal).await;

        restore_terminal(&mut terminal)?;
        result
    }

    async fn session(self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let controller = GameController::new(self.config);
        let (commands, command_rx) = mpsc::channel(32);
        let (frame_tx, frame_rx) = watch::channel(controller.snapshot());
        let mut game = tokio::spawn(controller.run(command_rx, frame_tx));

        let mut events = EventStream::new();
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        if let Some(command) = input::map_key(key) {
                            let quitting = command == Command::Shutdown;
                            let _ = commands.send(command).await;
                            if quitting {
                                break;
                            }
                        }
                    }
                }

                _ = render_timer.tick() => {
                    let snapshot = frame_rx.borrow().clone();
                    terminal
                        .draw(|frame| render::draw(frame, &snapshot))
                        .context("failed to draw frame")?;
                }

                result = &mut game => {
                    return result.context("game task panicked")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    let _ = commands.send(Command::Shutdown).await;
                    break;
                }
            }
        }

        drop(commands);
        game.await.context("game task panicked")?
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}
