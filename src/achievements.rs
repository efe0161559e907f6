//! Achievement evaluation.
//!
//! Rewards are not applied here. They are part of the multiplier
//! composition in [`crate::economy`], keyed on the `unlocked` flag, so
//! callers run [`crate::economy::refresh`] afterwards.

use crate::catalog::{AchievementCondition, AchievementId};
use crate::state::GameState;

pub fn is_satisfied(condition: &AchievementCondition, state: &GameState) -> bool {
    match *condition {
        AchievementCondition::TotalCells(cells) => state.total_cells >= cells,
        AchievementCondition::ProducerCount { producer, count } => {
            state.producer(producer).count >= count
        }
        AchievementCondition::TierComplete { tier, count } => {
            let mut tier_producers = state
                .producers()
                .iter()
                .filter(|p| p.unlocked && p.def().tier == tier)
                .peekable();
            // An empty tier never counts as complete.
            tier_producers.peek().is_some() && tier_producers.all(|p| p.count >= count)
        }
        AchievementCondition::PrestigeCount(count) => state.stats.prestige_count >= count,
    }
}

/// Unlock every achievement whose condition now holds. Returns the newly
/// unlocked ids in catalog order.
pub fn evaluate(state: &mut GameState) -> Vec<AchievementId> {
    let mut unlocked = Vec::new();
    for id in AchievementId::ALL {
        if !state.achievement(*id).unlocked && is_satisfied(&id.def().condition, state) {
            state.achievement_mut(*id).unlocked = true;
            log::info!("achievement unlocked: {}", id.def().name);
            unlocked.push(*id);
        }
    }
    unlocked
}
