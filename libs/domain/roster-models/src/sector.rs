// [libs/domain/roster-models/src/sector.rs]
//! Sector-position encoding and interning (§3 SectorPosition, §9 design
//! notes on replacing string-keyed access with interned small integers).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The reserved sentinel string meaning "break" in the source tabular
/// contract (§3). Never a valid sector base.
pub const BREAK_SENTINEL: &str = "111";

/// Executive or planner position within a sector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    Executive,
    Planner,
}

impl Position {
    fn letter(self) -> char {
        match self {
            Position::Executive => 'E',
            Position::Planner => 'P',
        }
    }

    fn parse(letter: char) -> Option<Self> {
        match letter {
            'E' | 'e' => Some(Position::Executive),
            'P' | 'p' => Some(Position::Planner),
            _ => None,
        }
    }
}

/// Interned handle for a sector base (e.g. the `"7"` in `"7E"`). Equality
/// and cloning are `u16` comparisons rather than string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectorBaseId(pub u16);

/// A concrete `<sector-base><position>` requirement or assignment target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SectorPosition {
    pub base: SectorBaseId,
    pub position: Position,
}

/// Interns sector base strings to small integers. Shared read-only once
/// `DomainModel` construction finishes.
#[derive(Debug, Clone, Default)]
pub struct SectorInterner {
    by_name: HashMap<String, SectorBaseId>,
    names: Vec<String>,
}

impl SectorInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, base: &str) -> SectorBaseId {
        if let Some(&id) = self.by_name.get(base) {
            return id;
        }
        let id = SectorBaseId(self.names.len() as u16);
        self.names.push(base.to_string());
        self.by_name.insert(base.to_string(), id);
        id
    }

    pub fn name(&self, id: SectorBaseId) -> &str {
        &self.names[id.0 as usize]
    }

    /// Parses `"<base><E|P>"` into an interned `SectorPosition`, or `None`
    /// for the break sentinel / a malformed token.
    pub fn parse_sector_position(&mut self, token: &str) -> Option<SectorPosition> {
        let token = token.trim();
        if token == BREAK_SENTINEL || token.is_empty() {
            return None;
        }
        let mut chars = token.chars();
        let letter = chars.next_back()?;
        let position = Position::parse(letter)?;
        let base_str: String = chars.collect();
        if base_str.is_empty() {
            return None;
        }
        let base = self.intern(&base_str);
        Some(SectorPosition { base, position })
    }

    pub fn format_sector_position(&self, sector_position: SectorPosition) -> String {
        format!(
            "{}{}",
            self.name(sector_position.base),
            sector_position.position.letter()
        )
    }
}
