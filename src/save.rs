//! Save codes: base64 over a versioned JSON document.
//!
//! ## Versioning
//!
//! - `SAVE_VERSION`: current document format. Bump it when fields are added.
//! - `MIN_COMPATIBLE_VERSION`: oldest format still accepted. Only bump it
//!   when a field changes meaning or is removed.
//!
//! Codes written before the `{"version", "game"}` envelope carry the game
//! fields at the top level and are read the same way. A document with no
//! game fields at all is refused rather than loaded as an empty game.
//!
//! Every field is optional. Decoding starts from a fresh game and overlays
//! whatever the document carries, field by field and entry by entry, so older
//! or hand-edited codes still load. Unknown ids and fields are ignored.
//! Names, tiers and base values always come from the catalog, and derived
//! rates are recomputed after the overlay.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::catalog::{AchievementId, ProducerId, ResearchId, UpgradeId};
use crate::economy;
use crate::error::SaveError;
use crate::state::GameState;

/// Save document format version.
pub const SAVE_VERSION: u32 = 1;

/// Oldest save version still accepted.
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

/// Documents written before versioning count as version 1.
const LEGACY_VERSION: u32 = 1;

/// Top-level keys of a game document. A document needs at least one.
const GAME_FIELDS: &[&str] = &[
    "cells",
    "totalCells",
    "cellsPerClick",
    "cellsPerSecond",
    "lastSaved",
    "lastTick",
    "producers",
    "upgrades",
    "achievements",
    "research",
    "prestige",
    "stats",
];

#[derive(Debug, Serialize)]
struct SaveData {
    version: u32,
    game: GameSave,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GameSave {
    cells: Option<f64>,
    total_cells: Option<f64>,
    cells_per_click: Option<f64>,
    cells_per_second: Option<f64>,
    last_saved: Option<u64>,
    last_tick: Option<u64>,
    /// Keyed by catalog key (e.g. "mitochondria").
    producers: BTreeMap<String, ProducerSave>,
    upgrades: BTreeMap<String, UpgradeSave>,
    achievements: BTreeMap<String, AchievementSave>,
    research: BTreeMap<String, ResearchSave>,
    prestige: Option<PrestigeSave>,
    stats: Option<StatsSave>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProducerSave {
    count: Option<u32>,
    current_cost: Option<f64>,
    current_production: Option<f64>,
    unlocked: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct UpgradeSave {
    purchased: Option<bool>,
    unlocked: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct AchievementSave {
    unlocked: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ResearchSave {
    level: Option<u32>,
    cost: Option<f64>,
    current_multiplier: Option<f64>,
    unlocked: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PrestigeSave {
    level: Option<u32>,
    multiplier: Option<f64>,
    cells_required: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StatsSave {
    total_clicks: Option<u64>,
    total_time_played: Option<f64>,
    prestige_count: Option<u32>,
}

fn extract_save(state: &GameState) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        game: GameSave {
            cells: Some(state.cells),
            total_cells: Some(state.total_cells),
            cells_per_click: Some(state.cells_per_click),
            cells_per_second: Some(state.cells_per_second),
            last_saved: Some(state.last_saved_at),
            last_tick: Some(state.last_tick_at),
            producers: state
                .producers()
                .iter()
                .map(|p| {
                    let save = ProducerSave {
                        count: Some(p.count),
                        current_cost: Some(p.current_cost),
                        current_production: Some(p.current_production),
                        unlocked: Some(p.unlocked),
                    };
                    (p.id.key().to_string(), save)
                })
                .collect(),
            upgrades: state
                .upgrades()
                .iter()
                .map(|u| {
                    let save = UpgradeSave {
                        purchased: Some(u.purchased),
                        unlocked: Some(u.unlocked),
                    };
                    (u.id.key().to_string(), save)
                })
                .collect(),
            achievements: state
                .achievements()
                .iter()
                .map(|a| {
                    let save = AchievementSave {
                        unlocked: Some(a.unlocked),
                    };
                    (a.id.key().to_string(), save)
                })
                .collect(),
            research: state
                .research()
                .iter()
                .map(|r| {
                    let save = ResearchSave {
                        level: Some(r.level),
                        cost: Some(r.cost),
                        current_multiplier: Some(r.current_multiplier),
                        unlocked: Some(r.unlocked),
                    };
                    (r.id.key().to_string(), save)
                })
                .collect(),
            prestige: Some(PrestigeSave {
                level: Some(state.prestige.level),
                multiplier: Some(state.prestige.multiplier),
                cells_required: Some(state.prestige.cells_required),
            }),
            stats: Some(StatsSave {
                total_clicks: Some(state.stats.total_clicks),
                total_time_played: Some(state.stats.total_time_played),
                prestige_count: Some(state.stats.prestige_count),
            }),
        },
    }
}

/// Overlay a decoded document onto `state`.
fn apply_save(state: &mut GameState, save: &GameSave) {
    fn set<T: Copy>(target: &mut T, value: Option<T>) {
        if let Some(v) = value {
            *target = v;
        }
    }

    set(&mut state.cells, save.cells);
    set(&mut state.total_cells, save.total_cells);
    set(&mut state.cells_per_click, save.cells_per_click);
    set(&mut state.cells_per_second, save.cells_per_second);
    set(&mut state.last_saved_at, save.last_saved);
    set(&mut state.last_tick_at, save.last_tick);

    for (key, saved) in &save.producers {
        let Some(id) = ProducerId::from_key(key) else {
            log::debug!("ignoring unknown producer `{key}` in save");
            continue;
        };
        let p = state.producer_mut(id);
        set(&mut p.count, saved.count);
        set(&mut p.current_cost, saved.current_cost);
        set(&mut p.current_production, saved.current_production);
        p.unlocked |= saved.unlocked.unwrap_or(false);
    }

    for (key, saved) in &save.upgrades {
        let Some(id) = UpgradeId::from_key(key) else {
            log::debug!("ignoring unknown upgrade `{key}` in save");
            continue;
        };
        let u = state.upgrade_mut(id);
        set(&mut u.purchased, saved.purchased);
        u.unlocked |= saved.unlocked.unwrap_or(false);
    }

    for (key, saved) in &save.achievements {
        let Some(id) = AchievementId::from_key(key) else {
            log::debug!("ignoring unknown achievement `{key}` in save");
            continue;
        };
        set(&mut state.achievement_mut(id).unlocked, saved.unlocked);
    }

    for (key, saved) in &save.research {
        let Some(id) = ResearchId::from_key(key) else {
            log::debug!("ignoring unknown research `{key}` in save");
            continue;
        };
        let r = state.research_mut(id);
        set(&mut r.level, saved.level);
        set(&mut r.cost, saved.cost);
        set(&mut r.current_multiplier, saved.current_multiplier);
        r.unlocked |= saved.unlocked.unwrap_or(false);
        r.level = r.level.min(id.def().max_level);
    }

    if let Some(prestige) = &save.prestige {
        set(&mut state.prestige.level, prestige.level);
        set(&mut state.prestige.multiplier, prestige.multiplier);
        set(&mut state.prestige.cells_required, prestige.cells_required);
        state.prestige.multiplier = state.prestige.multiplier.max(1.0);
    }

    if let Some(stats) = &save.stats {
        set(&mut state.stats.total_clicks, stats.total_clicks);
        set(&mut state.stats.total_time_played, stats.total_time_played);
        set(&mut state.stats.prestige_count, stats.prestige_count);
    }
}

/// Encode a snapshot as a save code.
pub fn encode(state: &GameState) -> Result<String, SaveError> {
    let json = serde_json::to_string(&extract_save(state))?;
    Ok(STANDARD.encode(json))
}

/// Decode a save code into a full snapshot.
///
/// Timestamps are taken from the code as-is. Offline catch-up is the
/// caller's decision.
pub fn decode(code: &str) -> Result<GameState, SaveError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(SaveError::Empty);
    }
    let json = String::from_utf8(STANDARD.decode(code)?)?;
    let document: serde_json::Value = serde_json::from_str(&json)?;
    let root = document.as_object().ok_or(SaveError::NotASave)?;

    let version = match root.get("version") {
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or(SaveError::NotASave)?,
        None => LEGACY_VERSION,
    };
    if version < MIN_COMPATIBLE_VERSION {
        return Err(SaveError::Incompatible {
            found: version,
            min: MIN_COMPATIBLE_VERSION,
        });
    }
    if version > SAVE_VERSION {
        log::warn!(
            "save version {} is newer than {}; loading known fields only",
            version,
            SAVE_VERSION
        );
    }

    // Unversioned documents keep the game fields at the top level.
    let game = root.get("game").unwrap_or(&document);
    let has_game_fields = game
        .as_object()
        .is_some_and(|fields| GAME_FIELDS.iter().any(|key| fields.contains_key(*key)));
    if !has_game_fields {
        return Err(SaveError::NotASave);
    }
    let game = GameSave::deserialize(game)?;

    let mut state = GameState::new(0);
    apply_save(&mut state, &game);
    economy::refresh(&mut state);
    Ok(state)
}
