//! Visibility ladder for producers, upgrades and research.
//!
//! Cell thresholds are checked against held cells, so a player who spends
//! down below a threshold before reaching it does not see the next entry yet.
//! Every check only ever flips `false -> true`, which makes the evaluator
//! idempotent and independent of the order ids are visited in.

use crate::catalog::{ProducerId, ResearchId, UnlockRule, UpgradeId};
use crate::state::GameState;

pub fn is_met(rule: &UnlockRule, state: &GameState) -> bool {
    match *rule {
        UnlockRule::Initially => true,
        UnlockRule::CellsAtLeast(threshold) => state.cells >= threshold,
        UnlockRule::ProducerCount { producer, count } => state.producer(producer).count >= count,
        UnlockRule::PrestigeLevel(level) => state.prestige.level >= level,
    }
}

/// Flip every entry whose rule is now satisfied. Returns whether anything
/// became visible.
pub fn evaluate(state: &mut GameState) -> bool {
    let mut producers = 0;
    for id in ProducerId::ALL {
        if !state.producer(*id).unlocked && is_met(&id.def().unlock, state) {
            state.producer_mut(*id).unlocked = true;
            producers += 1;
        }
    }
    let mut upgrades = 0;
    for id in UpgradeId::ALL {
        if !state.upgrade(*id).unlocked && is_met(&id.def().unlock, state) {
            state.upgrade_mut(*id).unlocked = true;
            upgrades += 1;
        }
    }
    let mut research = 0;
    for id in ResearchId::ALL {
        if !state.research_line(*id).unlocked && is_met(&id.def().unlock, state) {
            state.research_mut(*id).unlocked = true;
            research += 1;
        }
    }

    let changed = producers + upgrades + research > 0;
    if changed {
        log::debug!("unlocked {producers} producers, {upgrades} upgrades, {research} research lines");
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_nothing_new() {
        let mut state = GameState::new(0);
        assert!(!evaluate(&mut state));
    }

    #[test]
    fn cells_unlock_next_rung() {
        let mut state = GameState::new(0);
        state.cells = 10.0;
        assert!(evaluate(&mut state));
        assert!(state.producer(ProducerId::Ribosome).unlocked);
        assert!(!state.producer(ProducerId::Nucleus).unlocked);
    }

    #[test]
    fn big_jump_unlocks_several_rungs() {
        let mut state = GameState::new(0);
        state.cells = 1e3;
        assert!(evaluate(&mut state));
        let visible: Vec<ProducerId> = state
            .producers()
            .iter()
            .filter(|p| p.unlocked)
            .map(|p| p.id)
            .collect();
        assert_eq!(
            visible,
            vec![
                ProducerId::Mitochondria,
                ProducerId::Ribosome,
                ProducerId::Nucleus,
                ProducerId::GolgiApparatus
            ]
        );
        assert!(state.upgrade(UpgradeId::EvenBetterClicking).unlocked);
        assert!(state.upgrade(UpgradeId::SuperClicking).unlocked);
    }

    #[test]
    fn producer_upgrade_needs_ten_owned() {
        let mut state = GameState::new(0);
        state.producer_mut(ProducerId::Mitochondria).count = 9;
        evaluate(&mut state);
        assert!(!state.upgrade(UpgradeId::EfficientMitochondria).unlocked);
        state.producer_mut(ProducerId::Mitochondria).count = 10;
        assert!(evaluate(&mut state));
        assert!(state.upgrade(UpgradeId::EfficientMitochondria).unlocked);
    }

    #[test]
    fn prestige_research_waits_for_first_prestige() {
        let mut state = GameState::new(0);
        state.cells = 1e15;
        evaluate(&mut state);
        assert!(!state.research_line(ResearchId::PrestigeBonus).unlocked);
        state.prestige.level = 1;
        assert!(evaluate(&mut state));
        assert!(state.research_line(ResearchId::PrestigeBonus).unlocked);
    }

    #[test]
    fn spending_below_threshold_keeps_unlock() {
        let mut state = GameState::new(0);
        state.cells = 100.0;
        evaluate(&mut state);
        state.cells = 0.0;
        evaluate(&mut state);
        assert!(state.producer(ProducerId::Nucleus).unlocked);
    }

    #[test]
    fn second_pass_is_noop() {
        let mut state = GameState::new(0);
        state.cells = 1e9;
        state.producer_mut(ProducerId::Ribosome).count = 12;
        evaluate(&mut state);
        let once = state.clone();
        assert!(!evaluate(&mut state));
        assert_eq!(state, once);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_evaluate_idempotent(
            exponent in 0i32..25,
            counts in proptest::collection::vec(0u32..60, 20),
            level in 0u32..3,
        ) {
            let mut state = GameState::new(0);
            state.cells = 10f64.powi(exponent);
            for (id, count) in ProducerId::ALL.iter().zip(counts) {
                state.producer_mut(*id).count = count;
            }
            state.prestige.level = level;
            evaluate(&mut state);
            let once = state.clone();
            prop_assert!(!evaluate(&mut state));
            prop_assert_eq!(state, once);
        }

        #[test]
        fn prop_unlocks_never_revert(
            first in 0i32..20,
            second in 0i32..20,
        ) {
            let mut state = GameState::new(0);
            state.cells = 10f64.powi(first);
            evaluate(&mut state);
            let before: Vec<bool> = state.producers().iter().map(|p| p.unlocked).collect();
            state.cells = 10f64.powi(second);
            evaluate(&mut state);
            for (was, p) in before.iter().zip(state.producers()) {
                prop_assert!(!*was || p.unlocked);
            }
        }
    }
}
