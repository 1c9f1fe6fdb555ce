/// Four stat values in file order: Str, Dex, Con, Gra.
pub type StatBlock = [i32; 4];

/// A single house record from a house file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    /// Numeric identifier from the `N:` line. Id 0 is a placeholder and
    /// never survives parsing.
    pub num: i32,
    /// Display name from the `N:` line.
    pub name: String,
    /// Stat block from the `S:` line, zero when absent.
    pub stats: StatBlock,
    /// Affinity / penalty flag tokens from `F:` lines.
    pub flags: Vec<String>,
    /// Unique-trait tokens from `U:` lines.
    pub uniques: Vec<String>,
    /// `(code, value)` pairs accumulated from `C:` lines.
    pub abilities: Vec<(String, String)>,
}

impl House {
    pub fn new(num: i32, name: String) -> Self {
        Self {
            num,
            name,
            stats: [0; 4],
            flags: Vec::new(),
            uniques: Vec::new(),
            abilities: Vec::new(),
        }
    }
}

/// A single race record from a race file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Race {
    /// Numeric identifier from the `N:` line.
    pub num: i32,
    /// Display name from the `N:` line.
    pub name: String,
    /// Stat block from the `S:` line, zero when absent.
    pub stats: StatBlock,
    /// Affinity / penalty flag tokens from `F:` lines.
    pub flags: Vec<String>,
    /// Member house identifiers extracted from `C:` lines.
    pub members: Vec<i32>,
}

impl Race {
    pub fn new(num: i32, name: String) -> Self {
        Self {
            num,
            name,
            stats: [0; 4],
            flags: Vec::new(),
            members: Vec::new(),
        }
    }
}

/// One entry from the ability-definitions file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityDef {
    /// Display name taken from the trailing `#` comment.
    pub name: String,
    /// Canonical code string, `C:<row>:<col>`.
    pub code: String,
}
