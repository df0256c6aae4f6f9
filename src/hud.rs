//! HUD text derivation
//!
//! Read-only formatting of game state for the DOM text nodes. The shell
//! refreshes all of it every frame; formatting short strings at 60 Hz is
//! well below noise.

use crate::consts::BANNER_FADE_SECS;
use crate::sim::{GamePhase, GameState};

pub fn score_text(state: &GameState) -> String {
    state.score.to_string()
}

pub fn lives_text(state: &GameState) -> String {
    state.lives.to_string()
}

pub fn level_text(state: &GameState) -> String {
    state.level.to_string()
}

/// Elapsed play time as mm:ss
pub fn timer_text(state: &GameState) -> String {
    let total = state.elapsed_secs as u32;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Level-up banner text while the banner is live
pub fn banner_text(state: &GameState) -> Option<String> {
    (state.banner_secs > 0.0).then(|| format!("Level {}!", state.level))
}

/// Banner opacity: solid through most of its life, then a linear fade-out
pub fn banner_opacity(state: &GameState) -> f32 {
    if state.banner_secs <= 0.0 {
        0.0
    } else if state.banner_secs >= BANNER_FADE_SECS {
        1.0
    } else {
        state.banner_secs / BANNER_FADE_SECS
    }
}

/// Overlay visibility derived from the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlays {
    pub start: bool,
    pub game_over: bool,
}

pub fn overlays(phase: GamePhase) -> Overlays {
    Overlays {
        start: phase == GamePhase::NotStarted,
        game_over: phase == GamePhase::GameOver,
    }
}

/// Today's date for the HUD corner
#[cfg(target_arch = "wasm32")]
pub fn date_text() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{}/{}/{}",
        date.get_month() + 1,
        date.get_date(),
        date.get_full_year()
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub fn date_text() -> String {
    String::new()
}
