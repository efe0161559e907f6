//! End-to-end scenarios through the public API.

use cell_evolution::logic::{self, Rejection};
use cell_evolution::save;
use cell_evolution::{
    AchievementId, GameState, ManualClock, MemoryStorage, Notice, ProducerId, ResearchId,
    Session, UpgradeId,
};
use proptest::prelude::*;

// ── Concrete scenarios ───────────────────────────────────

#[test]
fn first_click() {
    let state = GameState::new(0);
    let next = logic::click(&state).state;
    assert_eq!(next.cells, 1.0);
    assert_eq!(next.total_cells, 1.0);
    assert_eq!(next.stats.total_clicks, 1);
}

#[test]
fn first_mitochondria() {
    let mut state = GameState::new(0);
    state.cells = 10.0;
    let next = logic::buy_producer(&state, ProducerId::Mitochondria)
        .unwrap()
        .state;
    assert_eq!(next.cells, 0.0);
    assert_eq!(next.producer(ProducerId::Mitochondria).count, 1);
    assert!(next.producer(ProducerId::Mitochondria).current_cost > 10.0);
}

#[test]
fn efficient_mitochondria_doubles_output() {
    // Reach ten mitochondria by buying them, milestones included.
    let mut state = GameState::new(0);
    state.cells = 1_000.0;
    for _ in 0..10 {
        state = logic::buy_producer(&state, ProducerId::Mitochondria)
            .unwrap()
            .state;
    }
    assert!(state.achievement(AchievementId::TenMitochondria).unlocked);
    state.cells = 150.0;
    let before = state.producer(ProducerId::Mitochondria).current_production;

    let next = logic::buy_upgrade(&state, UpgradeId::EfficientMitochondria)
        .unwrap()
        .state;
    let after = next.producer(ProducerId::Mitochondria).current_production;
    assert!((after / before - 2.0).abs() < 1e-12);
    assert_eq!(next.cells, 50.0);
}

#[test]
fn prestige_threshold_is_inclusive() {
    let mut state = GameState::new(0);
    state.cells = state.prestige.cells_required;
    assert_eq!(state.cells, 1e12);
    assert!(logic::prestige(&state).is_ok());

    let mut short = GameState::new(0);
    short.cells = short.prestige.cells_required - 1.0;
    let before = short.clone();
    assert_eq!(
        logic::prestige(&short),
        Err(Rejection::BelowPrestigeThreshold { required: 1e12 })
    );
    assert_eq!(short, before);
}

#[test]
fn ten_second_tick_at_five_per_second() {
    for multiplier in [1.0, 2.0, 4.0] {
        let mut state = GameState::new(20_000);
        state.producer_mut(ProducerId::Ribosome).count = 5;
        state.prestige.multiplier = multiplier;
        let next = logic::tick(&state, 30_000, None).unwrap().state;
        assert_eq!(next.cells, 50.0 * multiplier, "multiplier {multiplier}");
    }
}

// ── Session flow ─────────────────────────────────────────

#[test]
fn session_plays_saves_and_reloads() {
    let clock = ManualClock::new(1_000);
    let mut session = Session::load(MemoryStorage::new(), &clock);
    session.start();

    for _ in 0..10 {
        session.click();
    }
    session.buy_producer(ProducerId::Mitochondria).unwrap();
    for _ in 0..20 {
        clock.advance(100);
        assert!(session.pump());
    }
    let code = session.save().unwrap();
    let saved = session.snapshot().clone();

    let notices = session.drain_notices();
    assert!(notices.contains(&Notice::AchievementUnlocked(AchievementId::FirstCell)));
    assert!(notices.contains(&Notice::AchievementUnlocked(
        AchievementId::FirstMitochondria
    )));
    assert_eq!(notices.last(), Some(&Notice::Saved { auto: false }));

    // Reopen the same storage 10 seconds later.
    let storage = MemoryStorage::new().with_entry(cell_evolution::constants::SAVE_KEY, &code);
    clock.advance(10_000);
    let reloaded = Session::load(storage, &clock);
    let state = reloaded.snapshot();
    assert_eq!(state.producer(ProducerId::Mitochondria).count, 1);
    assert_eq!(state.stats.total_clicks, saved.stats.total_clicks);
    let expected = saved.cells_per_second * 10.0 * 0.8;
    assert!((state.cells - saved.cells - expected).abs() < 1e-9);
}

#[test]
fn prestige_cycle_through_session() {
    let clock = ManualClock::new(0);
    let mut session = Session::load(MemoryStorage::new(), &clock);
    let code = {
        let mut rich = GameState::new(0);
        rich.cells = 1e12;
        rich.total_cells = 1e12;
        save::encode(&rich).unwrap()
    };
    session.import(&code).unwrap();

    let preview = session.prestige_preview().unwrap();
    assert_eq!(preview.level, 1);
    let state = session.prestige(|p| p.multiplier > 1.0).unwrap();
    assert_eq!(state.prestige.level, 1);
    assert_eq!(state.cells, 0.0);
    assert_eq!(state.total_cells, 1e12);
    assert!(state.research_line(ResearchId::PrestigeBonus).unlocked);

    let notices = session.drain_notices();
    assert!(notices.contains(&Notice::Imported));
    assert!(notices
        .iter()
        .any(|n| matches!(n, Notice::PrestigeCompleted { level: 1, .. })));
}

#[test]
fn research_auto_clicker_earns_during_ticks() {
    let mut state = GameState::new(0);
    state.cells = 5_000.0;
    let state = logic::buy_research(&state, ResearchId::AutoClicker)
        .unwrap()
        .state;
    assert_eq!(state.cells, 0.0);
    let next = logic::tick(&state, 3_000, None).unwrap().state;
    assert!((next.cells - 3.0).abs() < 1e-9);
    assert_eq!(next.stats.total_clicks, 0);
}

// ── Properties ───────────────────────────────────────────

#[derive(Clone, Debug)]
enum Op {
    Click,
    Tick(u64),
    BuyProducer(ProducerId),
    BuyUpgrade(UpgradeId),
    BuyResearch(ResearchId),
    Prestige,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Click),
        3 => (1u64..600_000).prop_map(Op::Tick),
        3 => proptest::sample::select(ProducerId::ALL).prop_map(Op::BuyProducer),
        2 => proptest::sample::select(UpgradeId::ALL).prop_map(Op::BuyUpgrade),
        1 => proptest::sample::select(ResearchId::ALL).prop_map(Op::BuyResearch),
        1 => Just(Op::Prestige),
    ]
}

/// Apply one op, returning the successor (or the same state when rejected).
fn apply(state: &GameState, op: &Op) -> GameState {
    let step = match op {
        Op::Click => Ok(logic::click(state)),
        Op::Tick(ms) => {
            let now = state.last_tick_at + ms;
            return logic::tick(state, now, None)
                .map(|o| o.state)
                .unwrap_or_else(|_| state.clone());
        }
        Op::BuyProducer(id) => logic::buy_producer(state, *id),
        Op::BuyUpgrade(id) => logic::buy_upgrade(state, *id),
        Op::BuyResearch(id) => logic::buy_research(state, *id),
        Op::Prestige => logic::prestige(state),
    };
    step.map(|s| s.state).unwrap_or_else(|_| state.clone())
}

fn seeded(cells: f64) -> GameState {
    let mut state = GameState::new(0);
    state.cells = cells;
    state.total_cells = cells;
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_lifetime_never_decreases(
        start in 0.0f64..1e13,
        ops in proptest::collection::vec(arb_op(), 1..40),
    ) {
        let mut state = seeded(start);
        for op in &ops {
            let next = apply(&state, op);
            prop_assert!(next.total_cells >= state.total_cells, "{:?}", op);
            state = next;
        }
    }

    #[test]
    fn prop_flags_monotone_within_a_run(
        start in 0.0f64..1e9,
        ops in proptest::collection::vec(arb_op(), 1..40),
    ) {
        let mut state = seeded(start);
        for op in ops.iter().filter(|op| !matches!(op, Op::Prestige)) {
            let next = apply(&state, op);
            for (a, b) in state.producers().iter().zip(next.producers()) {
                prop_assert!(!a.unlocked || b.unlocked);
                prop_assert!(b.count >= a.count);
            }
            for (a, b) in state.upgrades().iter().zip(next.upgrades()) {
                prop_assert!(!a.unlocked || b.unlocked);
                prop_assert!(!a.purchased || b.purchased);
            }
            for (a, b) in state.achievements().iter().zip(next.achievements()) {
                prop_assert!(!a.unlocked || b.unlocked);
            }
            for (a, b) in state.research().iter().zip(next.research()) {
                prop_assert!(!a.unlocked || b.unlocked);
                prop_assert!(b.level >= a.level);
            }
            state = next;
        }
    }

    #[test]
    fn prop_achievements_survive_prestige(
        start in 0.0f64..1e12,
        ops in proptest::collection::vec(arb_op(), 1..30),
    ) {
        let mut state = seeded(start);
        for op in &ops {
            state = apply(&state, op);
        }
        state.cells = state.prestige.cells_required;
        let next = logic::prestige(&state).unwrap().state;
        for (a, b) in state.achievements().iter().zip(next.achievements()) {
            prop_assert!(!a.unlocked || b.unlocked);
        }
        prop_assert_eq!(next.prestige.level, state.prestige.level + 1);
        prop_assert!(next.prestige.multiplier > state.prestige.multiplier);
        prop_assert_eq!(next.prestige.cells_required, state.prestige.cells_required * 10.0);
        prop_assert_eq!(next.cells, 0.0);
        prop_assert_eq!(next.stats.prestige_count, state.stats.prestige_count + 1);
    }

    #[test]
    fn prop_buy_producer_charges_old_cost(
        id in proptest::sample::select(ProducerId::ALL),
        cells in 0.0f64..1e25,
    ) {
        let state = seeded(cells);
        let old_cost = state.producer(id).current_cost;
        if let Ok(step) = logic::buy_producer(&state, id) {
            prop_assert_eq!(step.state.cells, cells - old_cost);
            prop_assert!(step.state.producer(id).current_cost > old_cost);
            prop_assert_eq!(step.state.total_cells, state.total_cells);
        }
    }

    #[test]
    fn prop_save_round_trip(
        start in 0.0f64..1e13,
        ops in proptest::collection::vec(arb_op(), 0..30),
    ) {
        let mut state = seeded(start);
        for op in &ops {
            state = apply(&state, op);
        }
        cell_evolution::economy::refresh(&mut state);
        let restored = save::decode(&save::encode(&state).unwrap()).unwrap();
        prop_assert_eq!(restored, state);
    }
}
