//! Session controller
//!
//! Owns one run of the simulation plus everything that outlives a run (the
//! leaderboard and input edge state). Drives the PLAYING / GAME_OVER cycle:
//! sample input, apply toggles and restart, tick, then react to events.

use crate::consts::{MAX_FRAME_DT, MISSED_ASTEROID_LIMIT};
use crate::highscores::Leaderboard;
use crate::platform::{InputSampler, InputSource};
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// What happened during one [`Session::frame`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// The run ended this frame
    pub game_over: bool,
    /// Leaderboard rank reached by the run that just ended
    pub rank: Option<usize>,
    /// A new run started this frame
    pub restarted: bool,
    /// Quit was requested
    pub quit: bool,
}

/// One playing session: a game state and the leaderboard it reports to
#[derive(Debug)]
pub struct Session {
    state: GameState,
    leaderboard: Leaderboard,
    sampler: InputSampler,
    quit_requested: bool,
}

impl Session {
    pub fn new(seed: u64, leaderboard: Leaderboard) -> Self {
        log::info!("Session started with seed: {seed}");
        Self {
            state: GameState::new(seed),
            leaderboard,
            sampler: InputSampler::new(),
            quit_requested: false,
        }
    }

    /// Set whether missing too many asteroids ends the run
    pub fn with_missed_rule(mut self, enabled: bool) -> Self {
        self.state.missed_rule_enabled = enabled;
        self
    }

    /// Advance one frame
    ///
    /// `dt` is wall time since the last frame and is clamped so a stall
    /// doesn't teleport everything on screen. A non-finite step counts as 0.
    pub fn frame<S: InputSource + ?Sized>(&mut self, source: &S, dt: f32) -> FrameOutcome {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        let input = self.sampler.sample(source);
        let mut outcome = FrameOutcome::default();

        if input.toggle_missed_rule {
            self.state.missed_rule_enabled = !self.state.missed_rule_enabled;
            log::info!(
                "Missed-asteroid rule: {}",
                on_off(self.state.missed_rule_enabled)
            );
        }

        if input.quit && !self.quit_requested {
            log::info!("Quit requested");
        }
        self.quit_requested |= input.quit;
        outcome.quit = self.quit_requested;

        if input.restart && self.state.phase == GamePhase::GameOver {
            self.state.restart();
            outcome.restarted = true;
            log::info!("Game restarted");
        }

        tick(&mut self.state, &input.tick, dt);

        for event in self.state.drain_events() {
            match event {
                GameEvent::GameOver { score } => {
                    outcome.game_over = true;
                    outcome.rank = self.leaderboard.record(score);
                }
                GameEvent::AsteroidDestroyed { slot } => {
                    log::trace!("Asteroid in slot {slot} destroyed");
                }
                GameEvent::AsteroidMissed { slot } => {
                    log::trace!("Asteroid in slot {slot} missed");
                }
            }
        }

        self.state.advance_game_over_anim(dt);
        outcome
    }

    /// Text for the window title bar
    pub fn window_title(&self) -> String {
        match self.state.phase {
            GamePhase::Playing => format!(
                "Space Fugitive | Score: {} | Missed: {}/{} | Rule [M]: {}",
                self.state.score,
                self.state.missed,
                MISSED_ASTEROID_LIMIT,
                on_off(self.state.missed_rule_enabled)
            ),
            GamePhase::GameOver => format!(
                "GAME OVER! | Final score: {} | Press 'R' to play again",
                self.state.score
            ),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Tear the session down, handing back the leaderboard
    pub fn into_leaderboard(self) -> Leaderboard {
        self.leaderboard
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}
