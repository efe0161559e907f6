//! Cell Evolution game state definitions.
//!
//! Entities are kept in catalog order, so a producer's slot is
//! `ProducerId::index()`. The vectors are private to keep them that shape;
//! they are built once from the catalog and never resized.

use crate::catalog::{
    self, AchievementDef, AchievementId, ProducerDef, ProducerId, ResearchDef, ResearchId,
    UpgradeDef, UpgradeId,
};
use crate::constants::{BASE_CLICK_VALUE, INITIAL_PRESTIGE_THRESHOLD};
use crate::economy;
use crate::error::EngineError;

/// One producer line: how many are owned and what the next one costs.
#[derive(Clone, Debug, PartialEq)]
pub struct ProducerState {
    pub id: ProducerId,
    pub count: u32,
    /// Price of the next unit.
    pub current_cost: f64,
    /// Cells per second per unit after multipliers (prestige excluded).
    pub current_production: f64,
    pub unlocked: bool,
}

impl ProducerState {
    pub fn new(def: &ProducerDef) -> Self {
        Self {
            id: def.id,
            count: 0,
            current_cost: def.base_cost,
            current_production: def.base_production,
            unlocked: def.unlock.starts_unlocked(),
        }
    }

    pub fn def(&self) -> &'static ProducerDef {
        self.id.def()
    }

    /// Cells per second from every owned unit (prestige excluded).
    pub fn output(&self) -> f64 {
        self.count as f64 * self.current_production
    }

    /// Payback time in seconds: how long until the next unit pays for itself.
    pub fn payback_seconds(&self) -> Option<f64> {
        if self.current_production > 0.0 {
            Some(self.current_cost / self.current_production)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeState {
    pub id: UpgradeId,
    pub purchased: bool,
    pub unlocked: bool,
}

impl UpgradeState {
    pub fn new(def: &UpgradeDef) -> Self {
        Self {
            id: def.id,
            purchased: false,
            unlocked: def.unlock.starts_unlocked(),
        }
    }

    pub fn def(&self) -> &'static UpgradeDef {
        self.id.def()
    }

    /// Unlocked and not yet bought.
    pub fn is_available(&self) -> bool {
        self.unlocked && !self.purchased
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AchievementState {
    pub id: AchievementId,
    pub unlocked: bool,
}

impl AchievementState {
    pub fn new(def: &AchievementDef) -> Self {
        Self {
            id: def.id,
            unlocked: false,
        }
    }

    pub fn def(&self) -> &'static AchievementDef {
        self.id.def()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResearchState {
    pub id: ResearchId,
    pub level: u32,
    /// Price of the next level.
    pub cost: f64,
    /// Total effect of the bought levels (`per_level * level`).
    pub current_multiplier: f64,
    pub unlocked: bool,
}

impl ResearchState {
    pub fn new(def: &ResearchDef) -> Self {
        Self {
            id: def.id,
            level: 0,
            cost: def.base_cost,
            current_multiplier: 0.0,
            unlocked: def.unlock.starts_unlocked(),
        }
    }

    pub fn def(&self) -> &'static ResearchDef {
        self.id.def()
    }

    pub fn is_maxed(&self) -> bool {
        self.level >= self.def().max_level
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Prestige {
    pub level: u32,
    /// Applied to all production and every click. Never below 1.
    pub multiplier: f64,
    /// Held cells needed for the next prestige.
    pub cells_required: f64,
}

impl Default for Prestige {
    fn default() -> Self {
        Self {
            level: 0,
            multiplier: 1.0,
            cells_required: INITIAL_PRESTIGE_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    /// Manual clicks only.
    pub total_clicks: u64,
    /// Seconds of simulated play.
    pub total_time_played: f64,
    pub prestige_count: u32,
}

/// Full state of a Cell Evolution game. Transitions never edit a published
/// value; they clone it and return the successor.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Cells currently held.
    pub cells: f64,
    /// Cells earned all-time. Spending and prestige never lower it.
    pub total_cells: f64,
    pub cells_per_click: f64,
    /// Includes the prestige multiplier.
    pub cells_per_second: f64,
    /// Epoch milliseconds.
    pub last_saved_at: u64,
    /// Epoch milliseconds.
    pub last_tick_at: u64,
    producers: Vec<ProducerState>,
    upgrades: Vec<UpgradeState>,
    achievements: Vec<AchievementState>,
    research: Vec<ResearchState>,
    pub prestige: Prestige,
    pub stats: Stats,
}

impl GameState {
    /// A fresh game stamped at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        let mut state = Self {
            cells: 0.0,
            total_cells: 0.0,
            cells_per_click: BASE_CLICK_VALUE,
            cells_per_second: 0.0,
            last_saved_at: now_ms,
            last_tick_at: now_ms,
            producers: catalog::producers().iter().map(ProducerState::new).collect(),
            upgrades: catalog::upgrades().iter().map(UpgradeState::new).collect(),
            achievements: catalog::achievements()
                .iter()
                .map(AchievementState::new)
                .collect(),
            research: catalog::research().iter().map(ResearchState::new).collect(),
            prestige: Prestige::default(),
            stats: Stats::default(),
        };
        economy::refresh(&mut state);
        state
    }

    pub fn producers(&self) -> &[ProducerState] {
        &self.producers
    }

    pub fn producer(&self, id: ProducerId) -> &ProducerState {
        &self.producers[id.index()]
    }

    pub fn producer_mut(&mut self, id: ProducerId) -> &mut ProducerState {
        &mut self.producers[id.index()]
    }

    pub fn upgrades(&self) -> &[UpgradeState] {
        &self.upgrades
    }

    pub fn upgrade(&self, id: UpgradeId) -> &UpgradeState {
        &self.upgrades[id.index()]
    }

    pub fn upgrade_mut(&mut self, id: UpgradeId) -> &mut UpgradeState {
        &mut self.upgrades[id.index()]
    }

    pub fn achievements(&self) -> &[AchievementState] {
        &self.achievements
    }

    pub fn achievement(&self, id: AchievementId) -> &AchievementState {
        &self.achievements[id.index()]
    }

    pub fn achievement_mut(&mut self, id: AchievementId) -> &mut AchievementState {
        &mut self.achievements[id.index()]
    }

    pub fn research(&self) -> &[ResearchState] {
        &self.research
    }

    pub fn research_line(&self, id: ResearchId) -> &ResearchState {
        &self.research[id.index()]
    }

    pub fn research_mut(&mut self, id: ResearchId) -> &mut ResearchState {
        &mut self.research[id.index()]
    }

    pub(crate) fn producers_mut(&mut self) -> impl Iterator<Item = &mut ProducerState> {
        self.producers.iter_mut()
    }

    pub(crate) fn research_iter_mut(&mut self) -> impl Iterator<Item = &mut ResearchState> {
        self.research.iter_mut()
    }

    /// Cells one click yields right now.
    pub fn click_yield(&self) -> f64 {
        self.cells_per_click * self.prestige.multiplier
    }

    /// Unlocked producers of one tier, in catalog order.
    pub fn visible_producers(&self, tier: u8) -> impl Iterator<Item = &ProducerState> {
        self.producers
            .iter()
            .filter(move |p| p.unlocked && p.def().tier == tier)
    }

    /// Unlocked, unpurchased upgrades of one tier.
    pub fn available_upgrades(&self, tier: u8) -> impl Iterator<Item = &UpgradeState> {
        self.upgrades
            .iter()
            .filter(move |u| u.is_available() && u.def().tier == tier)
    }

    pub fn unlocked_achievement_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Progress toward the next prestige, clamped to 0..=1.
    pub fn prestige_progress(&self) -> f64 {
        if self.prestige.cells_required <= 0.0 {
            return 1.0;
        }
        (self.cells / self.prestige.cells_required).clamp(0.0, 1.0)
    }

    /// Rejects states whose accumulators stopped being real numbers.
    pub fn check_finite(&self) -> Result<(), EngineError> {
        let fields = [
            ("cells", self.cells),
            ("total_cells", self.total_cells),
            ("cells_per_click", self.cells_per_click),
            ("cells_per_second", self.cells_per_second),
            ("total_time_played", self.stats.total_time_played),
            ("prestige.multiplier", self.prestige.multiplier),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((field, _)) => Err(EngineError::NonFinite { field }),
            None => Ok(()),
        }
    }
}
