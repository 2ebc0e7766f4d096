//! Biological category classification
//!
//! Assigns every node id to exactly one category by testing a fixed-priority
//! list of string predicates; the first match wins and `Other` is the
//! catch-all. Predicates look at the id only, never at graph structure, so
//! classification is total and deterministic.
//!
//! The declared order is load-bearing: the Receptors suffix rule claims ids
//! like "EGFR" and "IL7R" before the Cancer and Immune rules are consulted.
//! That shadowing is preserved as declared.

use serde::{Deserialize, Serialize};

/// Display colors per category (RGBA, normalized 0.0-1.0)
pub mod colors {
    /// Signaling: Blue (#4A90D9)
    pub const SIGNALING: [f32; 4] = [0.290, 0.565, 0.851, 1.0];

    /// Transcription factors: Purple (#9B59B6)
    pub const TRANSCRIPTION_FACTORS: [f32; 4] = [0.608, 0.349, 0.714, 1.0];

    /// Receptors: Orange (#E67E22)
    pub const RECEPTORS: [f32; 4] = [0.902, 0.494, 0.133, 1.0];

    /// Immune: Green (#50C878)
    pub const IMMUNE: [f32; 4] = [0.314, 0.784, 0.471, 1.0];

    /// Cancer: Red (#E74C3C)
    pub const CANCER: [f32; 4] = [0.906, 0.298, 0.235, 1.0];

    /// Ribosomal: Teal (#16A085)
    pub const RIBOSOMAL: [f32; 4] = [0.086, 0.627, 0.522, 1.0];

    /// Cell cycle: Yellow (#F1C40F)
    pub const CELL_CYCLE: [f32; 4] = [0.945, 0.769, 0.059, 1.0];

    /// Other: Gray (#95A5A6)
    pub const OTHER: [f32; 4] = [0.584, 0.647, 0.651, 1.0];

    /// Neutral color for nodes outside the highlighted category (#2F3542)
    pub const DIMMED: [f32; 4] = [0.184, 0.208, 0.259, 1.0];
}

/// Explicitly listed cancer genes
const CANCER_GENES: &[&str] = &[
    "TP53", "BRCA1", "BRCA2", "EGFR", "KRAS", "HRAS", "NRAS", "MYC", "PTEN", "RB1", "APC", "VHL",
    "ALK", "BRAF", "ERBB2",
];

/// Signaling pathway prefixes (kinases and second messengers)
const SIGNALING_PREFIXES: &[&str] = &[
    "MAPK", "MAP2K", "MAP3K", "JAK", "STAT", "AKT", "PIK3", "RAF", "WNT", "NFKB",
];

/// Transcription factor family prefixes
const TF_PREFIXES: &[&str] = &["TF", "FOX", "SOX", "GATA", "HOX"];

/// Transcription factors matched by exact symbol
const TF_GENES: &[&str] = &["FOS", "JUN", "MYB"];

/// Immune marker prefixes (CD antigens are matched separately as "CD" plus
/// a digit, so cell cycle symbols like CDK1 and CDC42 are not claimed here)
const IMMUNE_PREFIXES: &[&str] = &["IL", "HLA", "TNF", "IFN"];

/// Ribosomal protein prefixes
const RIBOSOMAL_PREFIXES: &[&str] = &["RPS", "RPL", "MRPS", "MRPL"];

/// Cell cycle machinery prefixes
const CELL_CYCLE_PREFIXES: &[&str] = &["CDK", "CCN", "CDC"];

/// Cell cycle regulators matched by exact symbol
const CELL_CYCLE_GENES: &[&str] = &["PLK1", "AURKA", "AURKB", "BUB1"];

/// Biological category of a node, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Signaling,
    TranscriptionFactors,
    Receptors,
    Immune,
    Cancer,
    Ribosomal,
    CellCycle,
    Other,
}

impl Category {
    /// All categories in classification priority order, `Other` last
    pub const ALL: [Category; 8] = [
        Category::Signaling,
        Category::TranscriptionFactors,
        Category::Receptors,
        Category::Immune,
        Category::Cancer,
        Category::Ribosomal,
        Category::CellCycle,
        Category::Other,
    ];

    /// Display name for legends and the stats table
    pub fn name(&self) -> &'static str {
        match self {
            Category::Signaling => "Signaling",
            Category::TranscriptionFactors => "Transcription factors",
            Category::Receptors => "Receptors",
            Category::Immune => "Immune",
            Category::Cancer => "Cancer",
            Category::Ribosomal => "Ribosomal",
            Category::CellCycle => "Cell cycle",
            Category::Other => "Other",
        }
    }

    /// Get the display color for this category
    pub fn color(&self) -> [f32; 4] {
        match self {
            Category::Signaling => colors::SIGNALING,
            Category::TranscriptionFactors => colors::TRANSCRIPTION_FACTORS,
            Category::Receptors => colors::RECEPTORS,
            Category::Immune => colors::IMMUNE,
            Category::Cancer => colors::CANCER,
            Category::Ribosomal => colors::RIBOSOMAL,
            Category::CellCycle => colors::CELL_CYCLE,
            Category::Other => colors::OTHER,
        }
    }

    /// Membership predicate over a node id; pure string matching
    fn matches(&self, id: &str) -> bool {
        match self {
            Category::Signaling => has_prefix(id, SIGNALING_PREFIXES),
            Category::TranscriptionFactors => {
                has_prefix(id, TF_PREFIXES) || TF_GENES.contains(&id)
            }
            Category::Receptors => id.ends_with('R'),
            Category::Immune => has_prefix(id, IMMUNE_PREFIXES) || is_cd_antigen(id),
            Category::Cancer => CANCER_GENES.contains(&id),
            Category::Ribosomal => has_prefix(id, RIBOSOMAL_PREFIXES),
            Category::CellCycle => {
                has_prefix(id, CELL_CYCLE_PREFIXES) || CELL_CYCLE_GENES.contains(&id)
            }
            Category::Other => true,
        }
    }
}

fn has_prefix(id: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| id.starts_with(p))
}

/// CD antigen symbols: "CD" followed by a digit (CD4, CD19, CD274)
fn is_cd_antigen(id: &str) -> bool {
    id.strip_prefix("CD")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}

/// Classify a node id into its category.
///
/// Evaluates the fixed-priority list and returns the first match; `Other`
/// when nothing matches. Total and deterministic for any input string.
pub fn classify(id: &str) -> Category {
    Category::ALL
        .into_iter()
        .find(|c| c.matches(id))
        .unwrap_or(Category::Other)
}

/// Which category is highlighted in the display
///
/// Highlighting dims everything else to a neutral color; it never changes
/// classification, only presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// No dimming, every category in its own color
    #[default]
    All,
    /// Only the given category keeps its color
    Only(Category),
}

impl Highlight {
    /// Toggle the highlight from a legend click: selecting the active
    /// category again returns to `All`.
    pub fn toggled(self, category: Category) -> Self {
        match self {
            Highlight::Only(current) if current == category => Highlight::All,
            _ => Highlight::Only(category),
        }
    }
}

/// Display color for a node of `category` under the current highlight
pub fn display_color(category: Category, highlight: Highlight) -> [f32; 4] {
    match highlight {
        Highlight::All => category.color(),
        Highlight::Only(active) if active == category => category.color(),
        Highlight::Only(_) => colors::DIMMED,
    }
}
