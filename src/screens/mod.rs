//! Screen navigator
//!
//! Exactly one screen is active at a time. Paused and MatchOver are overlays
//! that carry the live [`MatchScreen`] with them, so a match survives a
//! pause/resume round trip untouched and a restart reuses it in place.
//!
//! Every call returns a [`Frame`] listing the sound cues, match events and
//! lifecycle changes it produced; the presentation layer acquires a screen's
//! assets on [`Lifecycle::Enter`] and releases them on [`Lifecycle::Leave`].

pub mod arena;
pub mod match_over;
pub mod menu;
pub mod options;
pub mod pause;

pub use arena::MatchScreen;
pub use match_over::MatchOverBanner;
pub use menu::MainMenu;
pub use options::OptionsMenu;
pub use pause::PauseMenu;

use crate::audio::SoundCue;
use crate::error::Result;
use crate::input::InputSource;
use crate::settings::Settings;
use crate::sim::{Arena, MatchEvent, MatchState};
use crate::tuning::Tuning;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    MainMenu,
    Options,
    Match,
    Paused,
    MatchOver,
}

/// User-triggered navigation requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Main menu: begin a match
    Start,
    /// Main menu: open options
    Options,
    /// Main menu: leave the game
    Exit,
    /// Options: return to the main menu
    Back,
    /// Match: open the pause overlay
    Pause,
    /// Paused: return to the match
    Resume,
    /// Paused: leave the game
    Quit,
    /// Match over: play again
    Restart,
}

/// Resource lifecycle notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Enter(ScreenId),
    Leave(ScreenId),
}

/// Everything one navigator call produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub cues: Vec<SoundCue>,
    pub events: Vec<MatchEvent>,
    pub lifecycle: Vec<Lifecycle>,
    /// The game asked to terminate
    pub exit: bool,
}

impl Frame {
    fn enter(&mut self, id: ScreenId) {
        self.lifecycle.push(Lifecycle::Enter(id));
    }

    fn leave(&mut self, id: ScreenId) {
        self.lifecycle.push(Lifecycle::Leave(id));
    }
}

/// The active screen and the state it owns
#[derive(Debug, Clone)]
pub enum Screen {
    MainMenu(MainMenu),
    Options(OptionsMenu),
    Match(MatchScreen),
    Paused { menu: PauseMenu, game: MatchScreen },
    MatchOver { banner: MatchOverBanner, game: MatchScreen },
}

impl Screen {
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::MainMenu(_) => ScreenId::MainMenu,
            Screen::Options(_) => ScreenId::Options,
            Screen::Match(_) => ScreenId::Match,
            Screen::Paused { .. } => ScreenId::Paused,
            Screen::MatchOver { .. } => ScreenId::MatchOver,
        }
    }

    /// The match behind this screen, if any
    pub fn game(&self) -> Option<&MatchScreen> {
        match self {
            Screen::Match(game)
            | Screen::Paused { game, .. }
            | Screen::MatchOver { game, .. } => Some(game),
            Screen::MainMenu(_) | Screen::Options(_) => None,
        }
    }
}

pub struct Navigator {
    arena: Arena,
    tuning: Tuning,
    settings: Settings,
    active: Option<Screen>,
    /// Lifecycle changes not yet reported (the initial menu entry)
    pending: Vec<Lifecycle>,
}

impl Navigator {
    /// Validate the arena/tuning pair and open the main menu.
    pub fn new(arena: Arena, tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        arena.check_fits(&tuning)?;
        log::info!(
            "Navigator ready: arena {}x{}, floor {}",
            arena.width,
            arena.height,
            arena.floor_height
        );
        Ok(Self {
            arena,
            tuning,
            settings: Settings::default(),
            active: Some(Screen::MainMenu(MainMenu::new(&arena))),
            pending: vec![Lifecycle::Enter(ScreenId::MainMenu)],
        })
    }

    pub fn active(&self) -> Option<ScreenId> {
        self.active.as_ref().map(Screen::id)
    }

    pub fn screen(&self) -> Option<&Screen> {
        self.active.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Match state while a match is live, paused or just finished
    pub fn match_state(&self) -> Option<&MatchState> {
        self.active.as_ref()?.game().map(MatchScreen::state)
    }

    /// Run one frame on the active screen.
    pub fn advance(&mut self, dt: f32, input: &dyn InputSource) -> Frame {
        let mut frame = self.begin_frame();
        let dt = self.clamp_dt(dt);

        let mut finished = false;
        let action = match self.active.as_mut() {
            None => return frame,
            Some(Screen::MainMenu(menu)) => menu.update(dt, input, &mut frame.cues),
            Some(Screen::Options(options)) => {
                options.update(dt, input, &mut self.settings, &mut frame.cues)
            }
            Some(Screen::Match(game)) => {
                let action = game.update(dt, input, &mut frame);
                finished = game.state().is_over();
                action
            }
            Some(Screen::Paused { menu, .. }) => menu.update(input, &mut frame.cues),
            Some(Screen::MatchOver { banner, .. }) => banner.update(input),
        };

        if finished {
            self.finish_match(&mut frame);
        } else if let Some(action) = action {
            self.apply(action, &mut frame);
        }
        frame
    }

    /// Trigger a navigation action directly. Actions that don't apply to
    /// the active screen are ignored.
    pub fn dispatch(&mut self, action: Action) -> Frame {
        let mut frame = self.begin_frame();
        self.apply(action, &mut frame);
        frame
    }

    /// Release whatever is still active. Safe to call more than once.
    pub fn shutdown(&mut self) -> Frame {
        let mut frame = self.begin_frame();
        let Some(current) = self.active.take() else {
            return frame;
        };
        frame.leave(current.id());
        if matches!(current, Screen::Paused { .. } | Screen::MatchOver { .. }) {
            frame.leave(ScreenId::Match);
        }
        log::info!("Navigator shut down from {:?}", current.id());
        frame
    }

    fn begin_frame(&mut self) -> Frame {
        Frame {
            lifecycle: std::mem::take(&mut self.pending),
            ..Default::default()
        }
    }

    fn clamp_dt(&self, dt: f32) -> f32 {
        crate::sanitize_dt(dt).min(self.tuning.max_frame_dt)
    }

    fn finish_match(&mut self, frame: &mut Frame) {
        self.active = match self.active.take() {
            Some(Screen::Match(game)) => match game.state().outcome() {
                Some(outcome) => {
                    frame.enter(ScreenId::MatchOver);
                    log::info!("Match -> MatchOver ({})", outcome.message());
                    Some(Screen::MatchOver {
                        banner: MatchOverBanner::new(outcome),
                        game,
                    })
                }
                None => Some(Screen::Match(game)),
            },
            other => other,
        };
    }

    fn apply(&mut self, action: Action, frame: &mut Frame) {
        let Some(current) = self.active.take() else {
            log::debug!("Ignoring {:?}: navigator has terminated", action);
            return;
        };
        let from = current.id();

        let next = match (current, action) {
            (Screen::MainMenu(_), Action::Start) => {
                frame.leave(ScreenId::MainMenu);
                frame.enter(ScreenId::Match);
                Some(Screen::Match(MatchScreen::new(self.arena, self.tuning)))
            }
            (Screen::MainMenu(_), Action::Options) => {
                frame.leave(ScreenId::MainMenu);
                frame.enter(ScreenId::Options);
                Some(Screen::Options(OptionsMenu::new(&self.arena)))
            }
            (Screen::MainMenu(_), Action::Exit) => {
                frame.leave(ScreenId::MainMenu);
                None
            }
            (Screen::Options(_), Action::Back) => {
                frame.leave(ScreenId::Options);
                frame.enter(ScreenId::MainMenu);
                Some(Screen::MainMenu(MainMenu::new(&self.arena)))
            }
            (Screen::Match(game), Action::Pause) => {
                frame.enter(ScreenId::Paused);
                Some(Screen::Paused {
                    menu: PauseMenu::new(&self.arena),
                    game,
                })
            }
            (Screen::Paused { game, .. }, Action::Resume) => {
                frame.leave(ScreenId::Paused);
                Some(Screen::Match(game))
            }
            (Screen::Paused { .. }, Action::Quit) => {
                frame.leave(ScreenId::Paused);
                frame.leave(ScreenId::Match);
                None
            }
            (Screen::MatchOver { mut game, .. }, Action::Restart) => {
                game.restart();
                frame.leave(ScreenId::MatchOver);
                Some(Screen::Match(game))
            }
            (current, action) => {
                log::debug!("Ignoring {:?} on {:?}", action, from);
                self.active = Some(current);
                return;
            }
        };

        match &next {
            Some(screen) => log::info!("{:?} -> {:?}", from, screen.id()),
            None => {
                log::info!("{:?} -> exit", from);
                frame.exit = true;
            }
        }
        self.active = next;
    }
}
