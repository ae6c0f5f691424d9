use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState};
use crate::input::{Command, InputHandler};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Interactive play: a tokio loop multiplexing key events, the simulation
/// tick, and the render timer over one terminal.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input: InputHandler,
    pending_direction: Option<Direction>,
    paused: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };
        let state = engine
            .reset()
            .context("grid too small to fit the snake and its food")?;

        Ok(Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            pending_direction: None,
            paused: false,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.restore_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(Duration::from_millis(self.engine.config().tick_ms));

        // Render at ~30 FPS, independent of the simulation cadence
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                _ = tick_timer.tick() => {
                    if !self.paused && !self.state.is_game_over() {
                        self.update_game();
                    }
                }

                _ = render_timer.tick() => {
                    self.stats.tick();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats, self.paused);
                    }).context("failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // key repeats and releases are noise here
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input.translate(key) {
                Some(Command::Steer(direction)) => {
                    // latest press before the tick wins
                    self.pending_direction = Some(direction);
                }
                Some(Command::TogglePause) => {
                    if !self.state.is_game_over() {
                        self.paused = !self.paused;
                    }
                }
                Some(Command::Restart) => {
                    self.restart()?;
                }
                Some(Command::Quit) => {
                    self.should_quit = true;
                }
                None => {}
            }
        }

        Ok(())
    }

    fn update_game(&mut self) {
        let action = self
            .pending_direction
            .take()
            .map(Action::Steer)
            .unwrap_or(Action::Coast);

        let result = self.engine.step(&mut self.state, action);

        if result.terminated() {
            self.stats.end_round(self.state.score);
        }
    }

    fn restart(&mut self) -> Result<()> {
        self.state = self
            .engine
            .reset()
            .context("grid too small to fit the snake and its food")?;
        self.stats.begin_round();
        self.pending_direction = None;
        self.paused = false;
        Ok(())
    }

    fn restore_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}
