//! Frame assembly
//!
//! Draw order, back to front: stars, asteroids, projectiles, ship, overlay.
//! Asteroids and projectiles are hidden once the run is over so the overlay
//! reads cleanly.

use glam::Vec2;

use super::glyphs::draw_score;
use super::instance::{InstanceData, Scene, Topology, colors};
use crate::color::Color3;
use crate::highscores::Leaderboard;
use crate::sim::{GamePhase, GameState, Star};

/// Leaderboard rows shown under the final score
const OVERLAY_ROWS: usize = 4;

/// One stroke of the "GAME OVER" block lettering: centre and size in units
struct Stroke {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

const fn s(x: f32, y: f32, w: f32, h: f32) -> Stroke {
    Stroke { x, y, w, h }
}

/// Stroke unit before animation scaling
const STROKE_UNIT: f32 = 0.05;

#[rustfmt::skip]
const GAME_OVER_STROKES: [Stroke; 34] = [
    // G
    s(-0.8, 0.4, 3.0, 1.0), s(-0.9, 0.3, 1.0, 3.0), s(-0.8, 0.2, 3.0, 1.0), s(-0.7, 0.25, 1.0, 1.0),
    // A
    s(-0.5, 0.4, 3.0, 1.0), s(-0.6, 0.3, 1.0, 3.0), s(-0.4, 0.3, 1.0, 3.0), s(-0.5, 0.3, 3.0, 1.0),
    // M
    s(-0.15, 0.3, 1.0, 5.0), s(0.15, 0.3, 1.0, 5.0), s(-0.075, 0.4, 1.0, 1.0), s(0.0, 0.3, 1.0, 1.0),
    s(0.075, 0.4, 1.0, 1.0),
    // E
    s(0.35, 0.3, 1.0, 5.0), s(0.45, 0.4, 2.0, 1.0), s(0.45, 0.3, 2.0, 1.0), s(0.45, 0.2, 2.0, 1.0),
    // O
    s(-0.6, -0.1, 3.0, 1.0), s(-0.7, -0.2, 1.0, 3.0), s(-0.5, -0.2, 1.0, 3.0), s(-0.6, -0.3, 3.0, 1.0),
    // V
    s(-0.3, -0.15, 1.0, 4.0), s(-0.1, -0.15, 1.0, 4.0), s(-0.25, -0.3, 1.0, 1.0), s(-0.2, -0.35, 1.0, 1.0),
    // E
    s(0.1, -0.2, 1.0, 5.0), s(0.2, 0.0, 2.0, 1.0), s(0.2, -0.2, 2.0, 1.0), s(0.2, -0.4, 2.0, 1.0),
    // R
    s(0.5, -0.2, 1.0, 5.0), s(0.6, 0.0, 2.0, 1.0), s(0.7, -0.1, 1.0, 1.0), s(0.6, -0.2, 2.0, 1.0),
    s(0.65, -0.35, 1.0, 2.0),
];

/// Build the full draw list for the current frame
pub fn build_scene(state: &GameState, leaderboard: &Leaderboard) -> Scene {
    let mut scene = Scene::new();

    for star in &state.parallax.stars {
        scene.quad(star_instance(star));
    }

    if state.phase == GamePhase::Playing {
        for asteroid in state.asteroids.iter_active() {
            let body = &asteroid.body;
            scene.quad(InstanceData::new(body.pos, body.size, body.rotation, body.color));
        }
        for shot in state.projectiles.iter_active() {
            scene.quad(InstanceData::new(shot.pos, shot.size, shot.rotation, shot.color));
        }
    }

    let ship = &state.player;
    if ship.active {
        scene.push(
            Topology::Triangle,
            InstanceData::new(ship.pos, ship.size, ship.rotation, ship.color),
        );
    }

    if state.phase == GamePhase::GameOver {
        game_over_overlay(&mut scene, state.score, state.game_over_progress(), leaderboard);
    }

    scene
}

fn star_instance(star: &Star) -> InstanceData {
    let size = Star::layer_size(star.layer);
    let brightness = Star::layer_brightness(star.layer);
    InstanceData::rect(star.pos, Vec2::splat(size), Color3::gray(brightness))
}

/// "GAME OVER" grows and drops into place; the numbers appear once it lands
fn game_over_overlay(scene: &mut Scene, score: u32, progress: f32, leaderboard: &Leaderboard) {
    let unit = STROKE_UNIT * progress;
    let y_base = (1.0 - progress) * 1.8 + 0.35;

    for stroke in &GAME_OVER_STROKES {
        scene.quad(InstanceData::rect(
            Vec2::new(stroke.x, stroke.y + y_base),
            Vec2::new(unit * stroke.w, unit * stroke.h),
            colors::GAME_OVER_TEXT,
        ));
    }

    if progress < 1.0 {
        return;
    }

    draw_score(scene, score, Vec2::new(0.0, -0.3), 0.02, colors::FINAL_SCORE);
    for (i, entry) in leaderboard.top(OVERLAY_ROWS).iter().enumerate() {
        let anchor = Vec2::new(0.0, -0.5 - i as f32 * 0.12);
        draw_score(scene, entry.score, anchor, 0.015, colors::rank_color(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_STARS;

    fn game_over(state: &mut GameState, progress: f32) {
        state.phase = GamePhase::GameOver;
        state.game_over_anim_elapsed = progress;
    }

    fn add_asteroid(state: &mut GameState) {
        let a = state.asteroids.first_free().unwrap();
        a.body.active = true;
        a.body.pos = Vec2::new(0.2, 0.5);
    }

    #[test]
    fn test_playing_scene_contents() {
        let mut state = GameState::new(3);
        add_asteroid(&mut state);
        assert!(state.spawn_projectile(Vec2::ZERO));

        let scene = build_scene(&state, &Leaderboard::in_memory());
        assert_eq!(scene.instances(Topology::Quad).len(), MAX_STARS + 2);

        let ship = scene.instances(Topology::Triangle);
        assert_eq!(ship.len(), 1);
        assert_eq!(ship[0].color, crate::consts::PLAYER_COLOR);
    }

    #[test]
    fn test_star_layers_set_size_and_brightness() {
        let state = GameState::new(3);
        let scene = build_scene(&state, &Leaderboard::in_memory());
        for (star, cmd) in state.parallax.stars.iter().zip(&scene.commands) {
            assert_eq!(cmd.instance.scale[0], Star::layer_size(star.layer));
            assert_eq!(cmd.instance.color[0], Star::layer_brightness(star.layer));
        }
    }

    #[test]
    fn test_game_over_hides_field_and_animates_title() {
        let mut state = GameState::new(3);
        add_asteroid(&mut state);
        game_over(&mut state, 0.5);

        let scene = build_scene(&state, &Leaderboard::in_memory());
        let quads = scene.instances(Topology::Quad);
        assert_eq!(quads.len(), MAX_STARS + GAME_OVER_STROKES.len());

        // First stroke of the G, half grown and still above its resting place
        let g = quads[MAX_STARS];
        assert!((g.scale[0] - 0.075).abs() < 1e-6);
        assert!((g.translate[1] - (0.4 + 0.9 + 0.35)).abs() < 1e-5);
    }

    #[test]
    fn test_finished_overlay_lists_top_four() {
        let mut board = Leaderboard::in_memory();
        for score in [7, 1, 1, 1, 1] {
            board.record_at(score, "2024-01-01 00:00:00");
        }

        let mut state = GameState::new(3);
        state.score = 7;
        game_over(&mut state, 1.0);

        let scene = build_scene(&state, &board);
        let quads = scene.instances(Topology::Quad);
        // "7" for the final score, then 7,1,1,1 from the board
        let digits = 7 + 7 + 3 * 5;
        assert_eq!(quads.len(), MAX_STARS + GAME_OVER_STROKES.len() + digits);

        let tail = &quads[MAX_STARS + GAME_OVER_STROKES.len()..];
        assert_eq!(tail[0].color, colors::FINAL_SCORE.to_array());
        assert_eq!(tail[7].color, colors::GOLD.to_array());
        assert_eq!(tail[14].color, colors::SILVER.to_array());
        assert_eq!(tail[19].color, colors::BRONZE.to_array());
        assert_eq!(tail[24].color, colors::RUNNER_UP.to_array());
    }
}
