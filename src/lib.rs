pub mod annotate;
pub mod parser;
pub mod rating;
pub mod tileset;

pub use parser::{
    AbilityDef,
    House,
    Race,
    StatBlock,
    parse_ability_defs,
    parse_houses,
    parse_races,
};

pub use rating::{
    ScoreRow,
    compute_scores,
    render_table,
    write_json_report,
};

pub use annotate::{
    collect_ability_users,
    write_annotated,
};

pub use tileset::{
    TerrainRect,
    TransparentSpec,
    convert_tileset,
};
