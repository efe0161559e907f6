//! Discrete events the presentation layer may show as toasts.

use crate::catalog::{AchievementId, ResearchId, UpgradeId};
use crate::format::{format_number, format_time};

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    AchievementUnlocked(AchievementId),
    UpgradePurchased(UpgradeId),
    ResearchLeveled { id: ResearchId, level: u32 },
    PrestigeCompleted { level: u32, multiplier: f64 },
    PrestigeUnavailable { required: f64 },
    OfflineProgress { cells: f64, seconds: f64 },
    Saved { auto: bool },
    SaveFailed(String),
    Exported,
    ExportFailed(String),
    Imported,
    ImportFailed(String),
    AutoSaveChanged(bool),
    GameReset,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::AchievementUnlocked(_) => "Achievement Unlocked!",
            Notice::UpgradePurchased(_) => "Upgrade Purchased",
            Notice::ResearchLeveled { .. } => "Research Completed",
            Notice::PrestigeCompleted { .. } => "Prestige Complete!",
            Notice::PrestigeUnavailable { .. } => "Cannot Prestige",
            Notice::OfflineProgress { .. } => "Welcome Back!",
            Notice::Saved { .. } => "Game Saved",
            Notice::SaveFailed(_) => "Save Failed",
            Notice::Exported => "Save Exported",
            Notice::ExportFailed(_) => "Export Failed",
            Notice::Imported => "Save Imported",
            Notice::ImportFailed(_) => "Import Failed",
            Notice::AutoSaveChanged(true) => "Auto-save Enabled",
            Notice::AutoSaveChanged(false) => "Auto-save Disabled",
            Notice::GameReset => "Game Reset",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::AchievementUnlocked(id) => {
                let def = id.def();
                format!("{}: {}", def.name, def.description)
            }
            Notice::UpgradePurchased(id) => format!("You purchased {}", id.def().name),
            Notice::ResearchLeveled { id, level } => {
                format!("{} upgraded to level {}", id.def().name, level)
            }
            Notice::PrestigeCompleted { level, multiplier } => format!(
                "You are now prestige level {level} with a {multiplier:.2}x multiplier"
            ),
            Notice::PrestigeUnavailable { required } => {
                format!("You need {} cells to prestige", format_number(*required))
            }
            Notice::OfflineProgress { cells, seconds } => format!(
                "You earned {} cells while away for {}",
                format_number(*cells),
                format_time(*seconds)
            ),
            Notice::Saved { .. } => "Your progress has been saved".to_string(),
            Notice::SaveFailed(reason) => format!("There was an error saving your game: {reason}"),
            Notice::Exported => "Save code is ready to copy".to_string(),
            Notice::ExportFailed(reason) => format!("Could not create a save code: {reason}"),
            Notice::Imported => "Your save has been imported successfully".to_string(),
            Notice::ImportFailed(reason) => format!("Invalid save data: {reason}"),
            Notice::AutoSaveChanged(true) => "Your game will be saved every minute".to_string(),
            Notice::AutoSaveChanged(false) => {
                "Your game will not be saved automatically".to_string()
            }
            Notice::GameReset => "Your game has been reset".to_string(),
        }
    }
}
