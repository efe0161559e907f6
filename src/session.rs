//! One running game: the current snapshot plus everything that drives it.
//!
//! The presentation layer reads [`Session::snapshot`], calls the operations
//! on user input, calls [`Session::pump`] from its frame or timer callback,
//! and shows whatever [`Session::drain_notices`] returns.

use serde::Deserialize;

use crate::catalog::{ProducerId, ResearchId, UpgradeId};
use crate::constants::{AUTOSAVE_INTERVAL_MS, AUTOSAVE_KEY, SAVE_KEY, TICK_INTERVAL_MS};
use crate::error::{PersistError, SaveError};
use crate::logic::{self, PrestigePreview, Rejection, Step};
use crate::notice::Notice;
use crate::save;
use crate::state::GameState;
use crate::storage::Storage;
use crate::time::{Clock, Scheduler};

/// Queued notices beyond this drop the oldest.
const MAX_NOTICES: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub tick_interval_ms: u64,
    pub autosave_interval_ms: u64,
    pub save_key: String,
    pub autosave_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            autosave_interval_ms: AUTOSAVE_INTERVAL_MS,
            save_key: SAVE_KEY.to_string(),
            autosave_key: AUTOSAVE_KEY.to_string(),
        }
    }
}

pub struct Session<S: Storage, C: Clock> {
    state: GameState,
    storage: S,
    clock: C,
    scheduler: Scheduler,
    config: SessionConfig,
    auto_save: bool,
    notices: Vec<Notice>,
}

impl<S: Storage, C: Clock> Session<S, C> {
    pub fn load(storage: S, clock: C) -> Self {
        Self::load_with(storage, clock, SessionConfig::default())
    }

    /// Restore the stored game (or start fresh) and credit offline time.
    /// Unreadable saves fall back to a new game without a notice.
    pub fn load_with(storage: S, clock: C, config: SessionConfig) -> Self {
        let now = clock.now_ms();
        let auto_save = match storage.get(&config.autosave_key) {
            Ok(Some(value)) => value != "false",
            Ok(None) => true,
            Err(e) => {
                log::warn!("could not read autosave preference: {e}");
                true
            }
        };

        let mut notices = Vec::new();
        let stored = match storage.get(&config.save_key) {
            Ok(code) => code,
            Err(e) => {
                log::warn!("could not read saved game: {e}");
                None
            }
        };
        let state = match stored.map(|code| save::decode(&code)) {
            Some(Ok(saved)) => {
                let (state, granted) = logic::catch_up(&saved, now);
                if granted > 0.0 {
                    let seconds = now.saturating_sub(saved.last_tick_at) as f64 / 1000.0;
                    log::info!("offline progress: {granted} cells over {seconds}s");
                    notices.push(Notice::OfflineProgress {
                        cells: granted,
                        seconds,
                    });
                }
                state
            }
            Some(Err(e)) => {
                log::warn!("discarding unreadable save: {e}");
                GameState::new(now)
            }
            None => GameState::new(now),
        };

        Self {
            state,
            storage,
            clock,
            scheduler: Scheduler::new(config.tick_interval_ms),
            config,
            auto_save,
            notices,
        }
    }

    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    pub fn auto_save_enabled(&self) -> bool {
        self.auto_save
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
        if self.notices.len() > MAX_NOTICES {
            let excess = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..excess);
        }
    }

    fn commit(&mut self, step: Step) -> &GameState {
        for notice in step.notices {
            self.notify(notice);
        }
        self.state = step.state;
        &self.state
    }

    // ── Transactions ──────────────────────────────────────

    pub fn click(&mut self) -> &GameState {
        let step = logic::click(&self.state);
        self.commit(step)
    }

    pub fn buy_producer(&mut self, id: ProducerId) -> Result<&GameState, Rejection> {
        let step = logic::buy_producer(&self.state, id)?;
        Ok(self.commit(step))
    }

    pub fn buy_upgrade(&mut self, id: UpgradeId) -> Result<&GameState, Rejection> {
        let step = logic::buy_upgrade(&self.state, id)?;
        Ok(self.commit(step))
    }

    pub fn buy_research(&mut self, id: ResearchId) -> Result<&GameState, Rejection> {
        let step = logic::buy_research(&self.state, id)?;
        Ok(self.commit(step))
    }

    pub fn prestige_preview(&self) -> Result<PrestigePreview, Rejection> {
        logic::prestige_preview(&self.state)
    }

    /// Prestige after `confirm` approves the preview. `confirm` is only
    /// asked once the threshold is met.
    pub fn prestige(
        &mut self,
        confirm: impl FnOnce(&PrestigePreview) -> bool,
    ) -> Result<&GameState, Rejection> {
        let preview = match logic::prestige_preview(&self.state) {
            Ok(preview) => preview,
            Err(rejection) => {
                if let Rejection::BelowPrestigeThreshold { required } = rejection {
                    self.notify(Notice::PrestigeUnavailable { required });
                }
                return Err(rejection);
            }
        };
        if !confirm(&preview) {
            return Err(Rejection::NotConfirmed);
        }
        let step = logic::prestige(&self.state)?;
        Ok(self.commit(step))
    }

    /// Start over from a fresh game and forget the stored save. Returns
    /// false when `confirm` declines.
    pub fn reset(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            return false;
        }
        self.state = GameState::new(self.clock.now_ms());
        if let Err(e) = self.storage.remove(&self.config.save_key) {
            log::warn!("could not remove saved game: {e}");
        }
        log::info!("game reset");
        self.notify(Notice::GameReset);
        true
    }

    // ── Persistence ───────────────────────────────────────

    fn persist(&mut self, state: &GameState) -> Result<String, PersistError> {
        let code = save::encode(state)?;
        self.storage.set(&self.config.save_key, &code)?;
        Ok(code)
    }

    /// Save now. Returns the stored code.
    pub fn save(&mut self) -> Result<String, PersistError> {
        let mut stamped = self.state.clone();
        stamped.last_saved_at = self.clock.now_ms();
        match self.persist(&stamped) {
            Ok(code) => {
                self.state = stamped;
                self.notify(Notice::Saved { auto: false });
                Ok(code)
            }
            Err(e) => {
                log::warn!("save failed: {e}");
                self.notify(Notice::SaveFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Save code for the clipboard. Storage is not touched.
    pub fn export(&mut self) -> Result<String, SaveError> {
        match save::encode(&self.state) {
            Ok(code) => {
                self.notify(Notice::Exported);
                Ok(code)
            }
            Err(e) => {
                log::warn!("export failed: {e}");
                self.notify(Notice::ExportFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Replace the game with a pasted save code. A bad code leaves the
    /// current game untouched. Imported codes earn no offline progress.
    pub fn import(&mut self, code: &str) -> Result<&GameState, SaveError> {
        let mut imported = match save::decode(code) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("import rejected: {e}");
                self.notify(Notice::ImportFailed(e.to_string()));
                return Err(e);
            }
        };
        imported.last_tick_at = self.clock.now_ms();
        if let Err(e) = self.persist(&imported) {
            log::warn!("imported game could not be stored: {e}");
            self.notify(Notice::SaveFailed(e.to_string()));
        }
        self.state = imported;
        self.notify(Notice::Imported);
        Ok(&self.state)
    }

    pub fn set_auto_save(&mut self, enabled: bool) {
        self.auto_save = enabled;
        let value = if enabled { "true" } else { "false" };
        if let Err(e) = self.storage.set(&self.config.autosave_key, value) {
            log::warn!("could not store autosave preference: {e}");
            self.notify(Notice::SaveFailed(e.to_string()));
        }
        self.notify(Notice::AutoSaveChanged(enabled));
    }

    // ── Ticking ───────────────────────────────────────────

    pub fn start(&mut self) {
        self.scheduler.start(self.clock.now_ms());
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Tick if the scheduler says one is due. Returns whether it ticked.
    pub fn pump(&mut self) -> bool {
        let now = self.clock.now_ms();
        if !self.scheduler.poll(now) {
            return false;
        }
        self.tick_at(now);
        true
    }

    /// Advance the game to `now_ms` regardless of the scheduler.
    pub fn tick_at(&mut self, now_ms: u64) -> &GameState {
        let autosave = self.auto_save.then_some(self.config.autosave_interval_ms);
        match logic::tick(&self.state, now_ms, autosave) {
            Ok(outcome) => {
                if outcome.autosave_due {
                    match self.persist(&outcome.state) {
                        Ok(_) => {
                            log::debug!("autosaved at {now_ms}");
                            self.notify(Notice::Saved { auto: true });
                        }
                        Err(e) => {
                            log::warn!("autosave failed: {e}");
                            self.notify(Notice::SaveFailed(e.to_string()));
                        }
                    }
                }
                for notice in outcome.notices {
                    self.notify(notice);
                }
                self.state = outcome.state;
            }
            Err(e) => log::warn!("tick discarded: {e}"),
        }
        &self.state
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
