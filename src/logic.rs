//! State transitions: the tick, clicks, purchases, prestige and offline
//! catch-up.
//!
//! Each transition takes the published snapshot by reference, works on a
//! clone and returns the successor. A rejected transaction returns a
//! [`Rejection`] and the caller keeps the snapshot it already had.

use crate::achievements;
use crate::catalog::{ProducerId, ResearchId, UpgradeId};
use crate::constants::{OFFLINE_WINDOW_SECS, PRESTIGE_THRESHOLD_GROWTH};
use crate::economy;
use crate::error::EngineError;
use crate::notice::Notice;
use crate::state::{GameState, Prestige};
use crate::unlocks;

/// Why a transaction left the state untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum Rejection {
    Locked,
    InsufficientCells { cost: f64, held: f64 },
    AlreadyPurchased,
    MaxLevel,
    BelowPrestigeThreshold { required: f64 },
    NotConfirmed,
}

/// Result of an accepted transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: GameState,
    pub notices: Vec<Notice>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    pub state: GameState,
    pub notices: Vec<Notice>,
    /// The state was stamped as saved and should be persisted.
    pub autosave_due: bool,
}

/// What a prestige would grant right now.
#[derive(Clone, Debug, PartialEq)]
pub struct PrestigePreview {
    pub level: u32,
    pub multiplier: f64,
    pub next_threshold: f64,
}

/// Clone `prev` with unlock flags and derived values brought up to date, so
/// validation sees the same numbers the player does.
fn prepare(prev: &GameState) -> GameState {
    let mut state = prev.clone();
    unlocks::evaluate(&mut state);
    economy::refresh(&mut state);
    state
}

/// Run both evaluators, then rebuild derived values so new rewards apply.
fn settle(state: &mut GameState, notices: &mut Vec<Notice>) {
    unlocks::evaluate(state);
    notices.extend(
        achievements::evaluate(state)
            .into_iter()
            .map(Notice::AchievementUnlocked),
    );
    economy::refresh(state);
}

fn earn(state: &mut GameState, cells: f64) {
    state.cells += cells;
    state.total_cells += cells;
}

/// Advance the simulation to `now_ms`.
///
/// `autosave_interval_ms` is `None` when autosave is off. A backwards clock
/// advances nothing and re-anchors `last_tick_at`. A result that is not
/// finite is refused and the caller keeps `prev`.
pub fn tick(
    prev: &GameState,
    now_ms: u64,
    autosave_interval_ms: Option<u64>,
) -> Result<TickOutcome, EngineError> {
    let delta = now_ms.saturating_sub(prev.last_tick_at) as f64 / 1000.0;
    let mut state = prev.clone();
    let mut notices = Vec::new();

    economy::refresh(&mut state);
    let produced = state.cells_per_second * delta;
    earn(&mut state, produced);

    let auto_clicks = economy::auto_clicks_per_second(&state) * delta;
    if auto_clicks > 0.0 {
        let clicked = auto_clicks * state.click_yield();
        earn(&mut state, clicked);
    }

    settle(&mut state, &mut notices);
    state.stats.total_time_played += delta;

    let autosave_due = autosave_interval_ms
        .is_some_and(|interval| now_ms.saturating_sub(state.last_saved_at) > interval);
    if autosave_due {
        state.last_saved_at = now_ms;
    }
    state.last_tick_at = now_ms;

    state.check_finite()?;
    Ok(TickOutcome {
        state,
        notices,
        autosave_due,
    })
}

/// One manual click. Never rejected.
pub fn click(prev: &GameState) -> Step {
    let mut state = prev.clone();
    let mut notices = Vec::new();
    economy::refresh(&mut state);
    let gained = state.click_yield();
    earn(&mut state, gained);
    state.stats.total_clicks += 1;
    settle(&mut state, &mut notices);
    Step { state, notices }
}

pub fn buy_producer(prev: &GameState, id: ProducerId) -> Result<Step, Rejection> {
    let mut state = prepare(prev);
    let producer = state.producer(id);
    if !producer.unlocked {
        return Err(Rejection::Locked);
    }
    let cost = producer.current_cost;
    if state.cells < cost {
        return Err(Rejection::InsufficientCells {
            cost,
            held: state.cells,
        });
    }

    state.cells -= cost;
    state.producer_mut(id).count += 1;

    let mut notices = Vec::new();
    settle(&mut state, &mut notices);
    Ok(Step { state, notices })
}

pub fn buy_upgrade(prev: &GameState, id: UpgradeId) -> Result<Step, Rejection> {
    let mut state = prepare(prev);
    let upgrade = state.upgrade(id);
    if upgrade.purchased {
        return Err(Rejection::AlreadyPurchased);
    }
    if !upgrade.unlocked {
        return Err(Rejection::Locked);
    }
    let cost = id.def().cost;
    if state.cells < cost {
        return Err(Rejection::InsufficientCells {
            cost,
            held: state.cells,
        });
    }

    state.cells -= cost;
    state.upgrade_mut(id).purchased = true;

    let mut notices = vec![Notice::UpgradePurchased(id)];
    settle(&mut state, &mut notices);
    Ok(Step { state, notices })
}

pub fn buy_research(prev: &GameState, id: ResearchId) -> Result<Step, Rejection> {
    let mut state = prepare(prev);
    let line = state.research_line(id);
    if !line.unlocked {
        return Err(Rejection::Locked);
    }
    if line.is_maxed() {
        return Err(Rejection::MaxLevel);
    }
    let cost = line.cost;
    if state.cells < cost {
        return Err(Rejection::InsufficientCells {
            cost,
            held: state.cells,
        });
    }

    state.cells -= cost;
    let line = state.research_mut(id);
    line.level += 1;
    let level = line.level;

    let mut notices = vec![Notice::ResearchLeveled { id, level }];
    settle(&mut state, &mut notices);
    Ok(Step { state, notices })
}

pub fn prestige_preview(state: &GameState) -> Result<PrestigePreview, Rejection> {
    let required = state.prestige.cells_required;
    if state.cells < required {
        return Err(Rejection::BelowPrestigeThreshold { required });
    }
    let level = state.prestige.level + 1;
    Ok(PrestigePreview {
        level,
        multiplier: economy::prestige_multiplier(state, level),
        next_threshold: required * PRESTIGE_THRESHOLD_GROWTH,
    })
}

/// Reset the run for a permanent multiplier.
///
/// Achievements, stats, lifetime cells and timestamps carry over. Research
/// unlock flags carry over; research levels reset unless the line survives
/// prestige.
pub fn prestige(prev: &GameState) -> Result<Step, Rejection> {
    let preview = prestige_preview(prev)?;

    let mut state = GameState::new(prev.last_tick_at);
    state.last_saved_at = prev.last_saved_at;
    state.total_cells = prev.total_cells;
    state.stats = prev.stats.clone();
    state.stats.prestige_count += 1;
    state.prestige = Prestige {
        level: preview.level,
        multiplier: preview.multiplier,
        cells_required: preview.next_threshold,
    };
    for achievement in prev.achievements() {
        state.achievement_mut(achievement.id).unlocked = achievement.unlocked;
    }
    for line in prev.research() {
        let carried = state.research_mut(line.id);
        carried.unlocked |= line.unlocked;
        if line.def().survives_prestige() {
            carried.level = line.level;
        }
    }

    let mut notices = Vec::new();
    settle(&mut state, &mut notices);
    log::info!(
        "prestige to level {} ({:.2}x)",
        preview.level,
        preview.multiplier
    );
    notices.push(Notice::PrestigeCompleted {
        level: preview.level,
        multiplier: preview.multiplier,
    });
    Ok(Step { state, notices })
}

/// Credit time spent away since `last_tick_at`. Returns the new state and
/// the cells granted. Gaps outside the window grant nothing.
pub fn catch_up(prev: &GameState, now_ms: u64) -> (GameState, f64) {
    let mut state = prev.clone();
    economy::refresh(&mut state);
    let elapsed = (now_ms as f64 - prev.last_tick_at as f64) / 1000.0;
    let mut granted = 0.0;
    if elapsed > 0.0 && elapsed < OFFLINE_WINDOW_SECS {
        granted = state.cells_per_second * elapsed * economy::offline_multiplier(&state);
        earn(&mut state, granted);
    }
    state.last_tick_at = now_ms;
    (state, granted)
}
