//! Core value types shared across the workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A namespaced identifier in `namespace:path` form.
///
/// Identifiers name blocks, materials, noises and density functions in
/// configuration. Parsing is infallible: a bare `path` gets the `minecraft`
/// namespace, matching vanilla's resource-location shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Identifier(Box<str>);

impl Identifier {
    /// Parse an identifier, defaulting the namespace to `minecraft`.
    #[must_use]
    pub fn of(id: &str) -> Self {
        if id.contains(':') {
            Self(id.into())
        } else {
            Self(format!("minecraft:{id}").into_boxed_str())
        }
    }

    /// Build an identifier from an explicit namespace and path.
    #[must_use]
    pub fn new(namespace: &str, path: &str) -> Self {
        Self(format!("{namespace}:{path}").into_boxed_str())
    }

    /// The namespace part.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.0.split_once(':').map_or("minecraft", |(ns, _)| ns)
    }

    /// The path part.
    #[must_use]
    pub fn path(&self) -> &str {
        self.0.split_once(':').map_or(&self.0, |(_, path)| path)
    }

    /// The full `namespace:path` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::of(&value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0.into_string()
    }
}

/// A registered block state.
///
/// State 0 is always air; registries uphold this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockStateId(pub u16);

impl BlockStateId {
    /// The air state.
    pub const AIR: Self = Self(0);

    /// Whether this is the air state.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }
}

/// An absolute block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    /// Block X.
    pub x: i32,
    /// Block Y.
    pub y: i32,
    /// Block Z.
    pub z: i32,
}

impl BlockPos {
    /// Create a block position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// This position offset by the given deltas.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

/// A 16x16x16 section position (block coordinates shifted right by 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionPos {
    /// Section X.
    pub x: i32,
    /// Section Y.
    pub y: i32,
    /// Section Z.
    pub z: i32,
}

impl SectionPos {
    /// The section containing the given block position.
    #[inline]
    #[must_use]
    pub const fn containing(pos: BlockPos) -> Self {
        Self {
            x: pos.x >> 4,
            y: pos.y >> 4,
            z: pos.z >> 4,
        }
    }

    /// The section-local coordinate of a block coordinate.
    #[inline]
    #[must_use]
    pub const fn section_relative(coord: i32) -> usize {
        (coord & 15) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_default_namespace() {
        let id = Identifier::of("stone");
        assert_eq!(id.namespace(), "minecraft");
        assert_eq!(id.path(), "stone");
        assert_eq!(id.as_str(), "minecraft:stone");
    }

    #[test]
    fn identifier_explicit_namespace() {
        let id = Identifier::of("lode:ore_vein_a");
        assert_eq!(id.namespace(), "lode");
        assert_eq!(id.path(), "ore_vein_a");
        assert_eq!(id, Identifier::new("lode", "ore_vein_a"));
    }

    #[test]
    fn identifier_serde_round_trip() {
        let id: Identifier = serde_json::from_str("\"lode:tin\"").unwrap();
        assert_eq!(id, Identifier::new("lode", "tin"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"lode:tin\"");
    }

    #[test]
    fn section_containing_negative_coords() {
        let section = SectionPos::containing(BlockPos::new(-1, -16, 17));
        assert_eq!(section, SectionPos { x: -1, y: -1, z: 1 });
    }

    #[test]
    fn section_relative_wraps() {
        assert_eq!(SectionPos::section_relative(0), 0);
        assert_eq!(SectionPos::section_relative(17), 1);
        assert_eq!(SectionPos::section_relative(-1), 15);
        assert_eq!(SectionPos::section_relative(-16), 0);
    }

    #[test]
    fn air_state() {
        assert!(BlockStateId::AIR.is_air());
        assert!(!BlockStateId(3).is_air());
    }
}
