//! Balance simulator for Cell Evolution.
//! Run with: cargo test simulate_greedy -- --nocapture
