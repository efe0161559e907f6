//! Static game data: every producer, upgrade, achievement and research line.
//!
//! Runtime state only stores ids plus mutable progress; names, tiers and
//! base values are always looked up here. Each table is ordered exactly like
//! its id enum so `id.def()` is an index.

/// Declares a closed id enum with its stable save-code key.
macro_rules! catalog_ids {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All ids in catalog order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable key used in save codes.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn index(self) -> usize {
                self as usize
            }
        }
    };
}

catalog_ids! {
    /// Passive cell producers.
    ProducerId {
        Mitochondria => "mitochondria",
        Ribosome => "ribosome",
        Nucleus => "nucleus",
        GolgiApparatus => "golgiApparatus",
        Chloroplast => "chloroplast",
        CellMembrane => "cellMembrane",
        Lysosome => "lysosome",
        EndoplasmicReticulum => "endoplasmicReticulum",
        Cytoskeleton => "cytoskeleton",
        Peroxisome => "peroxisome",
        Centriole => "centriole",
        Vacuole => "vacuole",
        CellCluster => "cellCluster",
        Tissue => "tissue",
        Organ => "organ",
        OrganSystem => "organSystem",
        Organism => "organism",
        Population => "population",
        Ecosystem => "ecosystem",
        Biosphere => "biosphere",
    }
}

catalog_ids! {
    /// One-time upgrades.
    UpgradeId {
        EfficientMitochondria => "efficientMitochondria",
        ImprovedRibosomes => "improvedRibosomes",
        EnhancedNucleus => "enhancedNucleus",
        EfficientGolgi => "efficientGolgi",
        SuperChloroplasts => "superChloroplasts",
        ReinforcedMembrane => "reinforcedMembrane",
        EfficientLysosomes => "efficientLysosomes",
        SmoothEr => "smoothER",
        DynamicCytoskeleton => "dynamicCytoskeleton",
        CatalaseBoost => "catalaseBoost",
        RapidDivision => "rapidDivision",
        ExpandedVacuole => "expandedVacuole",
        SpecializedClusters => "specializedClusters",
        OrganizedTissue => "organizedTissue",
        EfficientOrgans => "efficientOrgans",
        IntegratedSystems => "integratedSystems",
        AdaptiveOrganism => "adaptiveOrganism",
        ThrivePopulation => "thrivePopulation",
        BalancedEcosystem => "balancedEcosystem",
        GlobalBiosphere => "globalBiosphere",
        BetterClicking => "betterClicking",
        EvenBetterClicking => "evenBetterClicking",
        SuperClicking => "superClicking",
        UltraClicking => "ultraClicking",
        MegaClicking => "megaClicking",
        GigaClicking => "gigaClicking",
        TeraClicking => "teraClicking",
        PetaClicking => "petaClicking",
        GlobalBoost1 => "globalBoost1",
        GlobalBoost2 => "globalBoost2",
        GlobalBoost3 => "globalBoost3",
        GlobalBoost4 => "globalBoost4",
        GlobalBoost5 => "globalBoost5",
    }
}

catalog_ids! {
    /// Milestone flags.
    AchievementId {
        FirstCell => "firstCell",
        HundredCells => "hundredCells",
        ThousandCells => "thousandCells",
        MillionCells => "millionCells",
        BillionCells => "billionCells",
        TrillionCells => "trillionCells",
        QuadrillionCells => "quadrillionCells",
        QuintillionCells => "quintillionCells",
        FirstMitochondria => "firstMitochondria",
        TenMitochondria => "tenMitochondria",
        HundredMitochondria => "hundredMitochondria",
        FirstRibosome => "firstRibosome",
        TenRibosomes => "tenRibosomes",
        HundredRibosomes => "hundredRibosomes",
        Tier1Complete => "tier1Complete",
        Tier2Complete => "tier2Complete",
        Tier3Complete => "tier3Complete",
        Tier4Complete => "tier4Complete",
        FirstPrestige => "firstPrestige",
        FivePrestige => "fivePrestige",
        TenPrestige => "tenPrestige",
    }
}

catalog_ids! {
    /// Leveled research lines.
    ResearchId {
        ClickEfficiency => "clickEfficiency",
        AutoClicker => "autoClicker",
        ProducerEfficiency => "producerEfficiency",
        CostReduction => "costReduction",
        OfflineProduction => "offlineProduction",
        PrestigeBonus => "prestigeBonus",
    }
}

/// When a catalog entry becomes visible and purchasable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnlockRule {
    /// Available from a fresh start.
    Initially,
    /// Held cells reach the threshold.
    CellsAtLeast(f64),
    /// The player owns at least `count` of `producer`.
    ProducerCount { producer: ProducerId, count: u32 },
    /// Prestige level reaches the value.
    PrestigeLevel(u32),
}

impl UnlockRule {
    pub fn starts_unlocked(&self) -> bool {
        matches!(self, UnlockRule::Initially)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProducerDef {
    pub id: ProducerId,
    pub name: &'static str,
    pub description: &'static str,
    pub tier: u8,
    pub base_cost: f64,
    /// Cells per second per unit before multipliers.
    pub base_production: f64,
    pub unlock: UnlockRule,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpgradeEffect {
    /// Scales cells per click.
    Click { multiplier: f64 },
    /// Scales one producer.
    Producer { target: ProducerId, multiplier: f64 },
    /// Scales every producer.
    Global { multiplier: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeDef {
    pub id: UpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: f64,
    pub tier: u8,
    pub effect: UpgradeEffect,
    pub unlock: UnlockRule,
}

/// Progress metric an achievement watches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AchievementCondition {
    /// Lifetime cells earned.
    TotalCells(f64),
    ProducerCount { producer: ProducerId, count: u32 },
    /// Every unlocked producer of the tier owned at least `count` times.
    TierComplete { tier: u8, count: u32 },
    PrestigeCount(u32),
}

impl AchievementCondition {
    /// Threshold value, for display.
    pub fn requirement(&self) -> f64 {
        match *self {
            AchievementCondition::TotalCells(cells) => cells,
            AchievementCondition::ProducerCount { count, .. } => count as f64,
            AchievementCondition::TierComplete { count, .. } => count as f64,
            AchievementCondition::PrestigeCount(count) => count as f64,
        }
    }
}

/// Permanent bonus granted while an achievement is unlocked.
///
/// Producer and tier rewards apply to the producer or tier named by the
/// achievement's own condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reward {
    CellsPerClick(f64),
    GlobalMultiplier(f64),
    ProducerMultiplier(f64),
    TierMultiplier(f64),
    /// Folded into the multiplier of every later prestige.
    PrestigeBonus(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub condition: AchievementCondition,
    pub reward: Option<Reward>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResearchEffect {
    ClickMultiplier,
    AutoClick,
    ProducerMultiplier,
    CostReduction,
    OfflineProduction,
    PrestigeBonus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResearchDef {
    pub id: ResearchId,
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: f64,
    /// Price growth per level.
    pub cost_multiplier: f64,
    pub max_level: u32,
    /// Effect strength contributed by each level.
    pub per_level: f64,
    pub effect: ResearchEffect,
    pub unlock: UnlockRule,
}

impl ResearchDef {
    /// Levels of this line carry over a prestige instead of resetting.
    /// Keeping the prestige bonus makes each prestige multiplier strictly
    /// larger than the last.
    pub fn survives_prestige(&self) -> bool {
        self.effect == ResearchEffect::PrestigeBonus
    }
}

impl ProducerId {
    pub fn def(self) -> &'static ProducerDef {
        &PRODUCERS[self.index()]
    }
}

impl UpgradeId {
    pub fn def(self) -> &'static UpgradeDef {
        &UPGRADES[self.index()]
    }
}

impl AchievementId {
    pub fn def(self) -> &'static AchievementDef {
        &ACHIEVEMENTS[self.index()]
    }
}

impl ResearchId {
    pub fn def(self) -> &'static ResearchDef {
        &RESEARCH[self.index()]
    }
}

pub fn producers() -> &'static [ProducerDef] {
    &PRODUCERS
}

pub fn upgrades() -> &'static [UpgradeDef] {
    &UPGRADES
}

pub fn achievements() -> &'static [AchievementDef] {
    &ACHIEVEMENTS
}

pub fn research() -> &'static [ResearchDef] {
    &RESEARCH
}

/// Highest producer tier in the catalog.
pub const MAX_TIER: u8 = 4;

// ── Constructors (keep the tables one line per entry) ─────────────

const fn producer(
    id: ProducerId,
    name: &'static str,
    description: &'static str,
    tier: u8,
    base_cost: f64,
    base_production: f64,
    unlock: UnlockRule,
) -> ProducerDef {
    ProducerDef { id, name, description, tier, base_cost, base_production, unlock }
}

const fn upgrade(
    id: UpgradeId,
    name: &'static str,
    description: &'static str,
    cost: f64,
    tier: u8,
    effect: UpgradeEffect,
    unlock: UnlockRule,
) -> UpgradeDef {
    UpgradeDef { id, name, description, cost, tier, effect, unlock }
}

const fn producer_upgrade(
    id: UpgradeId,
    name: &'static str,
    description: &'static str,
    cost: f64,
    tier: u8,
    target: ProducerId,
) -> UpgradeDef {
    upgrade(
        id,
        name,
        description,
        cost,
        tier,
        UpgradeEffect::Producer { target, multiplier: 2.0 },
        UnlockRule::ProducerCount {
            producer: target,
            count: crate::constants::PRODUCER_UPGRADE_UNLOCK_COUNT,
        },
    )
}

const fn achievement(
    id: AchievementId,
    name: &'static str,
    description: &'static str,
    condition: AchievementCondition,
    reward: Reward,
) -> AchievementDef {
    AchievementDef { id, name, description, condition, reward: Some(reward) }
}

#[allow(clippy::too_many_arguments)]
const fn research_line(
    id: ResearchId,
    name: &'static str,
    description: &'static str,
    base_cost: f64,
    cost_multiplier: f64,
    max_level: u32,
    per_level: f64,
    effect: ResearchEffect,
    unlock: UnlockRule,
) -> ResearchDef {
    ResearchDef {
        id,
        name,
        description,
        base_cost,
        cost_multiplier,
        max_level,
        per_level,
        effect,
        unlock,
    }
}

// ── Tables ────────────────────────────────────────────────────────

use AchievementCondition as Cond;
use UnlockRule::{CellsAtLeast, Initially};

static PRODUCERS: [ProducerDef; 20] = {
    use ProducerId::*;
    [
        producer(Mitochondria, "Mitochondria", "The powerhouse of the cell", 1, 10.0, 0.1, Initially),
        producer(Ribosome, "Ribosome", "Protein factories", 1, 100.0, 1.0, CellsAtLeast(10.0)),
        producer(Nucleus, "Nucleus", "Control center of the cell", 1, 1_100.0, 8.0, CellsAtLeast(100.0)),
        producer(GolgiApparatus, "Golgi Apparatus", "Processes and packages proteins", 1, 12_000.0, 47.0, CellsAtLeast(1e3)),
        producer(Chloroplast, "Chloroplast", "Converts light into energy", 1, 130_000.0, 260.0, CellsAtLeast(1e4)),
        producer(CellMembrane, "Cell Membrane", "Protects and regulates cell contents", 1, 1.4e6, 1_400.0, CellsAtLeast(1e5)),
        producer(Lysosome, "Lysosome", "Digests waste materials", 1, 2e7, 7_800.0, CellsAtLeast(1e6)),
        producer(EndoplasmicReticulum, "Endoplasmic Reticulum", "Manufactures and transports proteins", 1, 3.3e8, 44_000.0, CellsAtLeast(1e7)),
        producer(Cytoskeleton, "Cytoskeleton", "Provides structural support and transport", 2, 5e9, 2.6e5, CellsAtLeast(1e8)),
        producer(Peroxisome, "Peroxisome", "Breaks down toxic materials", 2, 7.5e10, 1.6e6, CellsAtLeast(1e9)),
        producer(Centriole, "Centriole", "Assists in cell division", 2, 1e12, 1e7, CellsAtLeast(1e10)),
        producer(Vacuole, "Vacuole", "Stores water, nutrients, and waste", 2, 1.4e13, 6.5e7, CellsAtLeast(1e11)),
        producer(CellCluster, "Cell Cluster", "A small group of specialized cells", 3, 2e14, 4.3e8, CellsAtLeast(1e12)),
        producer(Tissue, "Tissue", "Organized cells working together", 3, 3e15, 2.9e9, CellsAtLeast(1e13)),
        producer(Organ, "Organ", "Complex structure of multiple tissues", 3, 4e16, 2.1e10, CellsAtLeast(1e14)),
        producer(OrganSystem, "Organ System", "Multiple organs working together", 3, 5e17, 1.5e11, CellsAtLeast(1e15)),
        producer(Organism, "Organism", "A complete living entity", 4, 1e19, 1.1e12, CellsAtLeast(1e16)),
        producer(Population, "Population", "A group of organisms of the same species", 4, 1.5e20, 8.4e12, CellsAtLeast(1e17)),
        producer(Ecosystem, "Ecosystem", "A community of living organisms", 4, 2e21, 6.5e13, CellsAtLeast(1e18)),
        producer(Biosphere, "Biosphere", "All ecosystems on Earth", 4, 3e22, 5.1e14, CellsAtLeast(1e19)),
    ]
};

static UPGRADES: [UpgradeDef; 33] = {
    use ProducerId as P;
    use UpgradeEffect::{Click, Global};
    use UpgradeId::*;
    [
        producer_upgrade(EfficientMitochondria, "Efficient Mitochondria", "Mitochondria produce twice as many cells", 100.0, 1, P::Mitochondria),
        producer_upgrade(ImprovedRibosomes, "Improved Ribosomes", "Ribosomes produce twice as many cells", 1_000.0, 1, P::Ribosome),
        producer_upgrade(EnhancedNucleus, "Enhanced Nucleus", "Nucleus produces twice as many cells", 11_000.0, 1, P::Nucleus),
        producer_upgrade(EfficientGolgi, "Efficient Golgi", "Golgi Apparatus produces twice as many cells", 120_000.0, 1, P::GolgiApparatus),
        producer_upgrade(SuperChloroplasts, "Super Chloroplasts", "Chloroplasts produce twice as many cells", 1.3e6, 1, P::Chloroplast),
        producer_upgrade(ReinforcedMembrane, "Reinforced Membrane", "Cell Membranes produce twice as many cells", 1.4e7, 1, P::CellMembrane),
        producer_upgrade(EfficientLysosomes, "Efficient Lysosomes", "Lysosomes produce twice as many cells", 2e8, 1, P::Lysosome),
        producer_upgrade(SmoothEr, "Smooth ER", "Endoplasmic Reticulum produces twice as many cells", 3.3e9, 1, P::EndoplasmicReticulum),
        producer_upgrade(DynamicCytoskeleton, "Dynamic Cytoskeleton", "Cytoskeleton produces twice as many cells", 5e10, 2, P::Cytoskeleton),
        producer_upgrade(CatalaseBoost, "Catalase Boost", "Peroxisomes produce twice as many cells", 7.5e11, 2, P::Peroxisome),
        producer_upgrade(RapidDivision, "Rapid Division", "Centrioles produce twice as many cells", 1e13, 2, P::Centriole),
        producer_upgrade(ExpandedVacuole, "Expanded Vacuole", "Vacuoles produce twice as many cells", 1.4e14, 2, P::Vacuole),
        producer_upgrade(SpecializedClusters, "Specialized Clusters", "Cell Clusters produce twice as many cells", 2e15, 3, P::CellCluster),
        producer_upgrade(OrganizedTissue, "Organized Tissue", "Tissues produce twice as many cells", 3e16, 3, P::Tissue),
        producer_upgrade(EfficientOrgans, "Efficient Organs", "Organs produce twice as many cells", 4e17, 3, P::Organ),
        producer_upgrade(IntegratedSystems, "Integrated Systems", "Organ Systems produce twice as many cells", 5e18, 3, P::OrganSystem),
        producer_upgrade(AdaptiveOrganism, "Adaptive Organism", "Organisms produce twice as many cells", 1e20, 4, P::Organism),
        producer_upgrade(ThrivePopulation, "Thriving Population", "Populations produce twice as many cells", 1.5e21, 4, P::Population),
        producer_upgrade(BalancedEcosystem, "Balanced Ecosystem", "Ecosystems produce twice as many cells", 2e22, 4, P::Ecosystem),
        producer_upgrade(GlobalBiosphere, "Global Biosphere", "Biospheres produce twice as many cells", 3e23, 4, P::Biosphere),
        upgrade(BetterClicking, "Better Clicking", "Double cells per click", 50.0, 1, Click { multiplier: 2.0 }, Initially),
        upgrade(EvenBetterClicking, "Even Better Clicking", "Triple cells per click", 500.0, 1, Click { multiplier: 3.0 }, CellsAtLeast(100.0)),
        upgrade(SuperClicking, "Super Clicking", "Quadruple cells per click", 5_000.0, 1, Click { multiplier: 4.0 }, CellsAtLeast(1e3)),
        upgrade(UltraClicking, "Ultra Clicking", "5x cells per click", 50_000.0, 2, Click { multiplier: 5.0 }, CellsAtLeast(1e4)),
        upgrade(MegaClicking, "Mega Clicking", "10x cells per click", 500_000.0, 2, Click { multiplier: 10.0 }, CellsAtLeast(1e5)),
        upgrade(GigaClicking, "Giga Clicking", "25x cells per click", 5e6, 3, Click { multiplier: 25.0 }, CellsAtLeast(1e6)),
        upgrade(TeraClicking, "Tera Clicking", "100x cells per click", 5e7, 3, Click { multiplier: 100.0 }, CellsAtLeast(1e7)),
        upgrade(PetaClicking, "Peta Clicking", "1000x cells per click", 5e8, 4, Click { multiplier: 1_000.0 }, CellsAtLeast(1e8)),
        upgrade(GlobalBoost1, "Global Efficiency I", "All producers are 50% more efficient", 1e6, 1, Global { multiplier: 1.5 }, CellsAtLeast(5e5)),
        upgrade(GlobalBoost2, "Global Efficiency II", "All producers are 2x more efficient", 1e8, 2, Global { multiplier: 2.0 }, CellsAtLeast(5e7)),
        upgrade(GlobalBoost3, "Global Efficiency III", "All producers are 3x more efficient", 1e10, 3, Global { multiplier: 3.0 }, CellsAtLeast(5e9)),
        upgrade(GlobalBoost4, "Global Efficiency IV", "All producers are 5x more efficient", 1e12, 4, Global { multiplier: 5.0 }, CellsAtLeast(5e11)),
        upgrade(GlobalBoost5, "Global Efficiency V", "All producers are 10x more efficient", 1e14, 4, Global { multiplier: 10.0 }, CellsAtLeast(5e13)),
    ]
};

static ACHIEVEMENTS: [AchievementDef; 21] = {
    use AchievementId::*;
    use ProducerId as P;
    use Reward::*;
    [
        achievement(FirstCell, "First Cell", "Generate your first cell", Cond::TotalCells(1.0), CellsPerClick(1.1)),
        achievement(HundredCells, "Cell Colony", "Generate 100 cells", Cond::TotalCells(100.0), CellsPerClick(1.2)),
        achievement(ThousandCells, "Cell Community", "Generate 1,000 cells", Cond::TotalCells(1e3), CellsPerClick(1.3)),
        achievement(MillionCells, "Cell Empire", "Generate 1,000,000 cells", Cond::TotalCells(1e6), GlobalMultiplier(1.1)),
        achievement(BillionCells, "Cell Nation", "Generate 1,000,000,000 cells", Cond::TotalCells(1e9), GlobalMultiplier(1.2)),
        achievement(TrillionCells, "Cell Planet", "Generate 1,000,000,000,000 cells", Cond::TotalCells(1e12), GlobalMultiplier(1.3)),
        achievement(QuadrillionCells, "Cell Galaxy", "Generate 1,000,000,000,000,000 cells", Cond::TotalCells(1e15), GlobalMultiplier(1.4)),
        achievement(QuintillionCells, "Cell Universe", "Generate 1,000,000,000,000,000,000 cells", Cond::TotalCells(1e18), GlobalMultiplier(1.5)),
        achievement(FirstMitochondria, "Powerhouse", "Buy your first Mitochondria", Cond::ProducerCount { producer: P::Mitochondria, count: 1 }, ProducerMultiplier(1.1)),
        achievement(TenMitochondria, "Energy Factory", "Own 10 Mitochondria", Cond::ProducerCount { producer: P::Mitochondria, count: 10 }, ProducerMultiplier(1.2)),
        achievement(HundredMitochondria, "Energy Empire", "Own 100 Mitochondria", Cond::ProducerCount { producer: P::Mitochondria, count: 100 }, ProducerMultiplier(1.5)),
        achievement(FirstRibosome, "Protein Synthesis", "Buy your first Ribosome", Cond::ProducerCount { producer: P::Ribosome, count: 1 }, ProducerMultiplier(1.1)),
        achievement(TenRibosomes, "Protein Factory", "Own 10 Ribosomes", Cond::ProducerCount { producer: P::Ribosome, count: 10 }, ProducerMultiplier(1.2)),
        achievement(HundredRibosomes, "Protein Empire", "Own 100 Ribosomes", Cond::ProducerCount { producer: P::Ribosome, count: 100 }, ProducerMultiplier(1.5)),
        achievement(Tier1Complete, "Cellular Mastery", "Own at least 50 of each Tier 1 producer", Cond::TierComplete { tier: 1, count: 50 }, TierMultiplier(1.5)),
        achievement(Tier2Complete, "Subcellular Mastery", "Own at least 50 of each Tier 2 producer", Cond::TierComplete { tier: 2, count: 50 }, TierMultiplier(1.5)),
        achievement(Tier3Complete, "Multicellular Mastery", "Own at least 50 of each Tier 3 producer", Cond::TierComplete { tier: 3, count: 50 }, TierMultiplier(1.5)),
        achievement(Tier4Complete, "Ecological Mastery", "Own at least 50 of each Tier 4 producer", Cond::TierComplete { tier: 4, count: 50 }, TierMultiplier(1.5)),
        achievement(FirstPrestige, "Cellular Rebirth", "Perform your first prestige", Cond::PrestigeCount(1), PrestigeBonus(1.1)),
        achievement(FivePrestige, "Cycle of Life", "Perform 5 prestiges", Cond::PrestigeCount(5), PrestigeBonus(1.2)),
        achievement(TenPrestige, "Master of Rebirth", "Perform 10 prestiges", Cond::PrestigeCount(10), PrestigeBonus(1.5)),
    ]
};

static RESEARCH: [ResearchDef; 6] = {
    use ResearchEffect as E;
    use ResearchId::*;
    [
        research_line(ClickEfficiency, "Click Efficiency", "Increase cells per click by 10% per level", 1_000.0, 1.5, 20, 0.1, E::ClickMultiplier, Initially),
        research_line(AutoClicker, "Auto Clicker", "Automatically clicks once per second per level", 5_000.0, 2.0, 10, 1.0, E::AutoClick, Initially),
        research_line(ProducerEfficiency, "Producer Efficiency", "Increase all producer output by 5% per level", 10_000.0, 1.7, 20, 0.05, E::ProducerMultiplier, Initially),
        research_line(CostReduction, "Cost Reduction", "Reduce producer costs by 1% per level", 25_000.0, 1.8, 15, 0.01, E::CostReduction, Initially),
        research_line(OfflineProduction, "Offline Production", "Increase offline production by 5% per level", 50_000.0, 1.6, 20, 0.05, E::OfflineProduction, Initially),
        research_line(PrestigeBonus, "Prestige Bonus", "Increase prestige multiplier by 5% per level", 100_000.0, 2.0, 10, 0.05, E::PrestigeBonus, UnlockRule::PrestigeLevel(1)),
    ]
};
