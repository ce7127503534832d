//! Headless native driver
//!
//! Runs the navigator at a fixed 60 Hz with two scripted players: start from
//! the menu, brawl until someone drops, restart, and finally print the last
//! finished match as JSON. Pass a tuning file path to override the balance.

use glam::Vec2;

use duel_arena::audio::LogSink;
use duel_arena::screens::Screen;
use duel_arena::sim::{Arena, MatchState, Side};
use duel_arena::{AudioManager, ControlScheme, Key, KeyboardState, Navigator, ScreenId, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;
/// Matches played before quitting
const ROUNDS: u32 = 2;
/// Hard stop in case the script stalls
const MAX_FRAMES: u32 = 60 * 60 * 5;

/// Walk toward the opponent and swing on a fixed cadence once in reach
fn autopilot(kb: &mut KeyboardState, state: &MatchState, side: Side, frame: u32, cadence: u32) {
    let scheme = ControlScheme::PAIR[side.index()];
    let me = state.actor(side);
    let them = state.actor(side.opponent());

    for key in [scheme.left, scheme.right, scheme.jump, scheme.attack] {
        kb.release(key);
    }

    if me.hitbox.overlaps(&them.hitbox) {
        if frame % cadence == 0 {
            kb.press(scheme.attack);
        }
    } else if them.pos.x < me.pos.x {
        kb.press(scheme.left);
    } else {
        kb.press(scheme.right);
    }

    // Hop now and then to keep things lively
    if frame % (cadence * 11) == 0 {
        kb.press(scheme.jump);
    }
}

fn run(tuning: Tuning) -> duel_arena::Result<Option<MatchState>> {
    let mut nav = Navigator::new(Arena::default(), tuning)?;
    let mut audio = AudioManager::new(LogSink);
    let mut kb = KeyboardState::new();
    let mut finished: Option<MatchState> = None;
    let mut rounds = 0;

    for frame_no in 0..MAX_FRAMES {
        kb.release(Key::Enter);
        kb.set_pointer(Vec2::ZERO);

        match nav.screen() {
            Some(Screen::MainMenu(_)) => kb.press(Key::Enter),
            Some(Screen::Match(game)) => {
                let state = game.state();
                autopilot(&mut kb, state, Side::PlayerOne, frame_no, 9);
                autopilot(&mut kb, state, Side::PlayerTwo, frame_no, 13);
            }
            Some(Screen::MatchOver { banner, game }) => {
                // Enter restarts on this very frame, so each banner is seen once
                rounds += 1;
                log::info!("Round {}: {}", rounds, banner.message());
                finished = Some(game.state().clone());
                if rounds >= ROUNDS {
                    break;
                }
                kb.press(Key::Enter);
            }
            Some(other) => log::warn!("Script has no plan for {:?}", other.id()),
            None => break,
        }

        let frame = nav.advance(FRAME_DT, &kb);
        kb.end_frame();

        audio.set_sfx_volume(nav.settings().sound_volume);
        audio.play_all(&frame.cues);
        for change in &frame.lifecycle {
            log::debug!("{:?}", change);
        }
        if frame.exit {
            break;
        }
    }

    let settings = nav.settings();
    log::info!(
        "Settings: volume {}%, quality {}",
        settings.volume_percent(),
        settings.quality.as_str()
    );
    if nav.active() != Some(ScreenId::MatchOver) {
        log::warn!("Stopped before the last round finished");
    }
    for change in nav.shutdown().lifecycle {
        log::debug!("{:?}", change);
    }
    Ok(finished)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> duel_arena::Result<()> {
    env_logger::init();
    log::info!("Duel Arena (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(&path)?,
        None => Tuning::default(),
    };

    match run(tuning)? {
        Some(state) => println!("{}", serde_json::to_string_pretty(&state)?),
        None => log::warn!("No match finished"),
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser front end drives `Navigator` directly
}
