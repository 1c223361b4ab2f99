//! Collaborator traits at the engine boundary.

use crate::level::LevelDef;

/// Supplier of the ordered list of levels.
///
/// Level content is static data loaded once; the engine only reads it.
/// Implemented for `Vec<LevelDef>` so tests and simple hosts can hand in
/// a literal table.
pub trait LevelSource {
    /// Number of defined levels.
    fn level_count(&self) -> usize;

    /// The level at `index`, or `None` past the end.
    fn level(&self, index: usize) -> Option<&LevelDef>;
}

impl LevelSource for Vec<LevelDef> {
    fn level_count(&self) -> usize {
        self.len()
    }

    fn level(&self, index: usize) -> Option<&LevelDef> {
        self.get(index)
    }
}

impl LevelSource for [LevelDef] {
    fn level_count(&self) -> usize {
        self.len()
    }

    fn level(&self, index: usize) -> Option<&LevelDef> {
        self.get(index)
    }
}
