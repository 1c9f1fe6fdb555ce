use serde::Serialize;

use crate::parser::StatBlock;

/// Derived power-score record for a single house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    /// House name.
    pub hero: String,
    /// Combined house + race stats, in Str/Dex/Con/Gra order.
    pub stats: StatBlock,
    /// Sum of the four combined stats.
    pub stats_total: i32,
    /// Affinity flags minus penalty flags over house and race.
    pub affinities: i32,
    /// Unique-trait score plus FREE flag bonus.
    pub unique: i32,
    /// Half a point per ability pair.
    pub abilities: f64,
    /// Grand total of the four components above.
    pub total: f64,
    /// Red then green indicator glyphs.
    pub dots: String,
    /// Green minus red dot count. Sort tie-breaker only, never displayed.
    #[serde(skip)]
    pub net_dots: i32,
}
