//! Space Fugitive - headless runner
//!
//! Runs the game loop without a window: an autopilot plays, each frame's scene
//! is assembled exactly as a graphics backend would receive it, and the title
//! bar text goes to the log. The leaderboard is printed on exit.

use std::path::PathBuf;

use space_fugitive::platform::Autopilot;
use space_fugitive::render::{Topology, build_scene};
use space_fugitive::settings::DEFAULT_SETTINGS_PATH;
use space_fugitive::{Leaderboard, Session, Settings};

fn main() {
    env_logger::init();
    log::info!("Space Fugitive starting...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = Settings::load(&settings_path);

    let leaderboard = Leaderboard::load(settings.leaderboard_path.clone());
    let seed = settings.effective_seed();
    let mut session =
        Session::new(seed, leaderboard).with_missed_rule(settings.missed_rule_enabled);
    let mut pilot = Autopilot::new(settings.auto_restart_frames);

    let mut runs = 0u32;
    let mut frame = 0u32;
    while frame < settings.max_frames {
        pilot.observe(session.state());
        let outcome = session.frame(&pilot, settings.frame_dt);
        if outcome.quit {
            break;
        }
        if outcome.game_over {
            runs += 1;
            match outcome.rank {
                Some(rank) => log::info!("Run {runs} placed #{rank}"),
                None => log::info!("Run {runs} did not place"),
            }
        }

        let scene = build_scene(session.state(), session.leaderboard());
        log::trace!(
            "Frame {frame}: {} quads, {} triangles",
            scene.instances(Topology::Quad).len(),
            scene.instances(Topology::Triangle).len()
        );

        if settings.title_log_interval > 0 && frame % settings.title_log_interval == 0 {
            log::info!("{}", session.window_title());
        }
        frame += 1;
    }

    log::info!("Stopped after {frame} frames, {runs} finished runs");
    let leaderboard = session.into_leaderboard();
    if let Err(e) = leaderboard.dump_all(std::io::stdout().lock()) {
        log::error!("Failed to print leaderboard: {e}");
    }
}
