//! Cost curves, production rates and multiplier composition.
//!
//! Every derived number in [`GameState`] is rebuilt from catalog base values
//! by [`refresh`]. Nothing here adjusts a value incrementally, so the order in
//! which upgrades, research and achievements were acquired never matters.

use crate::catalog::{
    AchievementCondition, ProducerDef, ProducerId, ResearchDef, ResearchEffect, Reward,
    UpgradeEffect,
};
use crate::constants::{
    BASE_CLICK_VALUE, MIN_PRODUCER_COST_GROWTH, OFFLINE_EFFICIENCY, PRESTIGE_LEVEL_BONUS,
    PRODUCER_COST_GROWTH,
};
use crate::state::GameState;

/// Summed `level * per_level` of every research line with this effect.
pub fn research_bonus(state: &GameState, effect: ResearchEffect) -> f64 {
    state
        .research()
        .iter()
        .filter(|r| r.def().effect == effect)
        .map(|r| r.level as f64 * r.def().per_level)
        .sum()
}

pub fn cost_reduction(state: &GameState) -> f64 {
    research_bonus(state, ResearchEffect::CostReduction)
}

/// Per-unit price growth after cost reduction, never below the floor.
pub fn cost_growth(cost_reduction: f64) -> f64 {
    (PRODUCER_COST_GROWTH * (1.0 - cost_reduction)).max(MIN_PRODUCER_COST_GROWTH)
}

/// Price of the next unit when `count` are owned.
///
/// The geometric curve alone can stall for cheap producers (a 10-cell item
/// at growth 1.01 floors to 10 for several units), so the price is also held
/// at least one cell above the previous unit's.
pub fn producer_cost(def: &ProducerDef, count: u32, cost_reduction: f64) -> f64 {
    let exponent = i32::try_from(count).unwrap_or(i32::MAX);
    let curve = (def.base_cost * cost_growth(cost_reduction).powi(exponent)).floor();
    curve.max(def.base_cost.floor() + count as f64)
}

/// Price of the next research level when `level` are owned.
pub fn research_cost(def: &ResearchDef, level: u32) -> f64 {
    let exponent = i32::try_from(level).unwrap_or(i32::MAX);
    (def.base_cost * def.cost_multiplier.powi(exponent)).floor()
}

/// Product of every multiplier that applies to one producer.
pub fn producer_multiplier(state: &GameState, id: ProducerId) -> f64 {
    let tier = id.def().tier;
    let mut multiplier = 1.0;

    for upgrade in state.upgrades().iter().filter(|u| u.purchased) {
        match upgrade.def().effect {
            UpgradeEffect::Producer { target, multiplier: m } if target == id => multiplier *= m,
            UpgradeEffect::Global { multiplier: m } => multiplier *= m,
            _ => {}
        }
    }

    for achievement in state.achievements().iter().filter(|a| a.unlocked) {
        let def = achievement.def();
        match (def.reward, def.condition) {
            (Some(Reward::GlobalMultiplier(m)), _) => multiplier *= m,
            (
                Some(Reward::ProducerMultiplier(m)),
                AchievementCondition::ProducerCount { producer, .. },
            ) if producer == id => multiplier *= m,
            (Some(Reward::TierMultiplier(m)), AchievementCondition::TierComplete { tier: t, .. })
                if t == tier =>
            {
                multiplier *= m
            }
            _ => {}
        }
    }

    multiplier * (1.0 + research_bonus(state, ResearchEffect::ProducerMultiplier))
}

/// Cells per click before the prestige multiplier.
pub fn click_value(state: &GameState) -> f64 {
    let upgrades: f64 = state
        .upgrades()
        .iter()
        .filter(|u| u.purchased)
        .filter_map(|u| match u.def().effect {
            UpgradeEffect::Click { multiplier } => Some(multiplier),
            _ => None,
        })
        .product();
    let rewards: f64 = state
        .achievements()
        .iter()
        .filter(|a| a.unlocked)
        .filter_map(|a| match a.def().reward {
            Some(Reward::CellsPerClick(m)) => Some(m),
            _ => None,
        })
        .product();
    BASE_CLICK_VALUE
        * (1.0 + research_bonus(state, ResearchEffect::ClickMultiplier))
        * upgrades
        * rewards
}

/// Sum of every producer's output, prestige excluded.
pub fn raw_production(state: &GameState) -> f64 {
    state.producers().iter().map(|p| p.output()).sum()
}

/// Automatic clicks per second granted by research.
pub fn auto_clicks_per_second(state: &GameState) -> f64 {
    research_bonus(state, ResearchEffect::AutoClick)
}

/// Share of the live rate granted for time spent away.
pub fn offline_multiplier(state: &GameState) -> f64 {
    OFFLINE_EFFICIENCY * (1.0 + research_bonus(state, ResearchEffect::OfflineProduction))
}

/// Multiplier a prestige to `level` would grant, given the research and
/// achievements currently held.
pub fn prestige_multiplier(state: &GameState, level: u32) -> f64 {
    let rewards: f64 = state
        .achievements()
        .iter()
        .filter(|a| a.unlocked)
        .filter_map(|a| match a.def().reward {
            Some(Reward::PrestigeBonus(m)) => Some(m),
            _ => None,
        })
        .product();
    (1.0 + level as f64 * PRESTIGE_LEVEL_BONUS)
        * (1.0 + research_bonus(state, ResearchEffect::PrestigeBonus))
        * rewards
}

/// Recompute every derived value from base values, flags and levels.
pub fn refresh(state: &mut GameState) {
    let reduction = cost_reduction(state);
    let productions: Vec<f64> = ProducerId::ALL
        .iter()
        .map(|id| id.def().base_production * producer_multiplier(state, *id))
        .collect();

    for (producer, production) in state.producers_mut().zip(productions) {
        producer.current_production = production;
        producer.current_cost = producer_cost(producer.def(), producer.count, reduction);
    }

    for line in state.research_iter_mut() {
        let def = line.def();
        line.cost = research_cost(def, line.level);
        line.current_multiplier = def.per_level * line.level as f64;
    }

    state.cells_per_click = click_value(state);
    state.cells_per_second = raw_production(state) * state.prestige.multiplier;
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_producer() -> impl Strategy<Value = ProducerId> {
        proptest::sample::select(ProducerId::ALL)
    }

    proptest! {
        #[test]
        fn prop_cost_strictly_increasing(
            id in arb_producer(),
            count in 0u32..300,
            reduction in 0.0f64..=0.15,
        ) {
            let def = id.def();
            let now = producer_cost(def, count, reduction);
            let next = producer_cost(def, count + 1, reduction);
            prop_assert!(next > now, "{:?} at {}: {} -> {}", id, count, now, next);
        }

        #[test]
        fn prop_cost_never_below_base(
            id in arb_producer(),
            count in 0u32..300,
            reduction in 0.0f64..=1.0,
        ) {
            let def = id.def();
            prop_assert!(producer_cost(def, count, reduction) >= def.base_cost.floor());
        }

        #[test]
        fn prop_multiplier_at_least_one(
            id in arb_producer(),
            purchased in proptest::collection::vec(any::<bool>(), 33),
            level in 0u32..=20,
        ) {
            let mut state = GameState::new(0);
            for (u, flag) in crate::catalog::UpgradeId::ALL.iter().zip(purchased) {
                state.upgrade_mut(*u).purchased = flag;
            }
            state.research_mut(crate::catalog::ResearchId::ProducerEfficiency).level = level;
            prop_assert!(producer_multiplier(&state, id) >= 1.0);
        }
    }
}
