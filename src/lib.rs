//! Simulation core of Cell Evolution, an incremental game about growing from
//! a single organelle to a biosphere.
//!
//! The crate owns the rules and the state. A front end (wasm or native)
//! drives a [`Session`], renders its [`GameState`] snapshot and shows the
//! [`Notice`]s it emits.

pub mod achievements;
pub mod catalog;
pub mod constants;
pub mod economy;
pub mod error;
pub mod format;
pub mod logic;
pub mod notice;
pub mod save;
pub mod session;
pub mod state;
pub mod storage;
pub mod time;
pub mod unlocks;

mod simulator;

pub use catalog::{AchievementId, ProducerId, ResearchId, UpgradeId};
pub use error::{EngineError, PersistError, SaveError, StorageError};
pub use logic::{PrestigePreview, Rejection};
pub use notice::Notice;
pub use session::{Session, SessionConfig};
pub use state::GameState;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{MemoryStorage, Storage};
pub use time::{Clock, ManualClock, Scheduler, SystemClock};
