//! Power-score computation and rendering for house records.


mod scorer;
mod table;
mod types;

pub use scorer::{compute_scores, race_by_member};
pub use table::{render_table, write_json_report};
pub use types::ScoreRow;
