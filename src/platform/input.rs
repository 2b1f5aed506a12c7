//! Input sampling
//!
//! A backend exposes "is this action held right now" through [`InputSource`].
//! [`InputSampler`] remembers last frame's state so toggles and restart fire
//! once per press instead of every frame the key is held.

use crate::sim::{GameState, TickInput};

/// Everything the game can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Shoot,
    ToggleMissedRule,
    Restart,
    Quit,
}

impl Action {
    pub const COUNT: usize = 6;

    pub const ALL: [Action; Self::COUNT] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Shoot,
        Action::ToggleMissedRule,
        Action::Restart,
        Action::Quit,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Level-triggered "is pressed" queries
pub trait InputSource {
    fn is_pressed(&self, action: Action) -> bool;
}

/// Snapshot of which actions are held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    held: [bool; Action::COUNT],
}

impl HeldKeys {
    pub fn press(&mut self, action: Action) {
        self.held[action.index()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.held[action.index()] = false;
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        self.held[action.index()] = pressed;
    }

    pub fn release_all(&mut self) {
        self.held = [false; Action::COUNT];
    }
}

impl InputSource for HeldKeys {
    fn is_pressed(&self, action: Action) -> bool {
        self.held[action.index()]
    }
}

/// One frame of sampled input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Held movement and fire controls
    pub tick: TickInput,
    /// Missed-rule toggle pressed this frame but not last
    pub toggle_missed_rule: bool,
    /// Restart pressed this frame but not last
    pub restart: bool,
    /// Quit held
    pub quit: bool,
}

/// Turns level-triggered queries into per-frame input with edges
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    previous: HeldKeys,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample every action once and compare against the previous frame
    pub fn sample<S: InputSource + ?Sized>(&mut self, source: &S) -> FrameInput {
        let mut now = HeldKeys::default();
        for action in Action::ALL {
            now.set(action, source.is_pressed(action));
        }

        let pressed_now = |a: Action| now.is_pressed(a) && !self.previous.is_pressed(a);
        let frame = FrameInput {
            tick: TickInput {
                move_left: now.is_pressed(Action::MoveLeft),
                move_right: now.is_pressed(Action::MoveRight),
                shoot: now.is_pressed(Action::Shoot),
            },
            toggle_missed_rule: pressed_now(Action::ToggleMissedRule),
            restart: pressed_now(Action::Restart),
            quit: now.is_pressed(Action::Quit),
        };

        self.previous = now;
        frame
    }
}

/// Demo player: chases the most urgent asteroid and keeps firing
///
/// Call [`Autopilot::observe`] once per frame before sampling.
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    keys: HeldKeys,
    game_over_frames: u32,
    /// Frames to linger on the game-over screen before pressing restart (0 = never)
    pub restart_after: u32,
}

impl Autopilot {
    /// Horizontal slack before the ship bothers to move
    const DEADZONE: f32 = 0.02;

    pub fn new(restart_after: u32) -> Self {
        Self {
            restart_after,
            ..Default::default()
        }
    }

    /// Decide which keys to hold this frame
    pub fn observe(&mut self, state: &GameState) {
        self.keys.release_all();

        if state.is_game_over() {
            self.game_over_frames += 1;
            if self.restart_after > 0 && self.game_over_frames == self.restart_after {
                self.keys.press(Action::Restart);
            }
            return;
        }
        self.game_over_frames = 0;

        // Lowest asteroid still above the ship is the one to deal with
        let ship = state.player.pos;
        let target = state
            .asteroids
            .iter_active()
            .filter(|a| a.body.pos.y > ship.y)
            .min_by(|a, b| {
                a.body
                    .pos
                    .y
                    .partial_cmp(&b.body.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        if let Some(asteroid) = target {
            let dx = asteroid.body.pos.x - ship.x;
            if dx < -Self::DEADZONE {
                self.keys.press(Action::MoveLeft);
            } else if dx > Self::DEADZONE {
                self.keys.press(Action::MoveRight);
            }
            self.keys.press(Action::Shoot);
        }
    }
}

impl InputSource for Autopilot {
    fn is_pressed(&self, action: Action) -> bool {
        self.keys.is_pressed(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use glam::Vec2;

    #[test]
    fn test_held_controls_pass_through() {
        let mut keys = HeldKeys::default();
        keys.press(Action::MoveLeft);
        keys.press(Action::Shoot);

        let mut sampler = InputSampler::new();
        for _ in 0..3 {
            let frame = sampler.sample(&keys);
            assert!(frame.tick.move_left);
            assert!(!frame.tick.move_right);
            assert!(frame.tick.shoot);
        }
    }

    #[test]
    fn test_toggle_fires_once_per_press() {
        let mut keys = HeldKeys::default();
        let mut sampler = InputSampler::new();

        keys.press(Action::ToggleMissedRule);
        assert!(sampler.sample(&keys).toggle_missed_rule);
        assert!(!sampler.sample(&keys).toggle_missed_rule);
        assert!(!sampler.sample(&keys).toggle_missed_rule);

        keys.release(Action::ToggleMissedRule);
        assert!(!sampler.sample(&keys).toggle_missed_rule);
        keys.press(Action::ToggleMissedRule);
        assert!(sampler.sample(&keys).toggle_missed_rule);
    }

    #[test]
    fn test_restart_is_edge_and_quit_is_level() {
        let mut keys = HeldKeys::default();
        let mut sampler = InputSampler::new();
        keys.press(Action::Restart);
        keys.press(Action::Quit);

        let first = sampler.sample(&keys);
        let second = sampler.sample(&keys);
        assert!(first.restart && !second.restart);
        assert!(first.quit && second.quit);
    }

    #[test]
    fn test_autopilot_steers_and_fires() {
        let mut state = GameState::new(1);
        {
            let a = state.asteroids.first_free().unwrap();
            a.body.active = true;
            a.body.pos = Vec2::new(0.6, 0.5);
        }

        let mut pilot = Autopilot::new(0);
        pilot.observe(&state);
        assert!(pilot.is_pressed(Action::MoveRight));
        assert!(!pilot.is_pressed(Action::MoveLeft));
        assert!(pilot.is_pressed(Action::Shoot));
    }

    #[test]
    fn test_autopilot_restarts_after_delay() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;

        let mut pilot = Autopilot::new(3);
        let mut presses = 0;
        for _ in 0..10 {
            pilot.observe(&state);
            if pilot.is_pressed(Action::Restart) {
                presses += 1;
            }
        }
        assert_eq!(presses, 1);
    }
}
