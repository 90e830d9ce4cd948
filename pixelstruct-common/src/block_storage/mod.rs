//! Types for storing minecraft-format blocks and the palettes that index them.

mod serialization;

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::vec::Vec;

pub const AIR_BLOCK_NAME: &str = "minecraft:air";

/// A placeable block identifier: a namespaced name plus optional block state
/// properties.
///
/// An empty property map is stored as `None` so two blocks compare equal
/// exactly when their names and full property sets match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    name: String,
    properties: Option<BTreeMap<String, String>>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: None,
        }
    }

    pub fn with_properties<K, V>(
        name: impl Into<String>,
        properties: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let properties: BTreeMap<String, String> = properties
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self {
            name: name.into(),
            properties: if properties.is_empty() {
                None
            } else {
                Some(properties)
            },
        }
    }

    pub fn air() -> Self {
        Self::new(AIR_BLOCK_NAME)
    }

    pub fn is_air(&self) -> bool {
        self.name == AIR_BLOCK_NAME && self.properties.is_none()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> Option<&BTreeMap<String, String>> {
        self.properties.as_ref()
    }

    /// Check the name has the `namespace:path` shape with neither part empty.
    pub fn has_namespaced_name(&self) -> bool {
        match self.name.split_once(':') {
            Some((namespace, path)) => !namespace.is_empty() && !path.is_empty(),
            None => false,
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        if let Some(ref props) = self.properties {
            f.write_str("[")?;
            for (i, (k, v)) in props.iter().enumerate() {
                if i != 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}={}", k, v)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Position {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn in_bounding_box(&self, min: &Self, max: &Self) -> bool {
        let x = min.x <= self.x && self.x < max.x;
        let y = min.y <= self.y && self.y < max.y;
        let z = min.z <= self.z && self.z < max.z;

        x && y && z
    }
}

/// Represents a type index into a palette.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BlockTypeIndex(u32);

impl BlockTypeIndex {
    pub const AIR: BlockTypeIndex = BlockTypeIndex(0);

    pub fn get(self) -> u32 {
        self.0
    }

    /// The index the next entry of a palette holding `len` entries would get.
    fn from_len(len: usize) -> Option<Self> {
        u32::try_from(len).ok().map(BlockTypeIndex)
    }
}

/// Ordered set of unique blocks. Index 0 is always air, whether or not any
/// air is placed.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<Block>,
    lookup: HashMap<Block, BlockTypeIndex>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub fn new() -> Self {
        let air = Block::air();
        let mut lookup = HashMap::new();
        lookup.insert(air.clone(), BlockTypeIndex::AIR);

        Self {
            entries: vec![air],
            lookup,
        }
    }

    /// Return the index for `b`, appending it if this is its first occurrence.
    /// Returns `None` once the palette has no u32 index left to hand out.
    pub fn add_new_block_type(&mut self, b: &Block) -> Option<BlockTypeIndex> {
        if let Some(idx) = self.lookup.get(b) {
            return Some(*idx);
        }
        let idx = BlockTypeIndex::from_len(self.entries.len())?;
        self.entries.push(b.clone());
        self.lookup.insert(b.clone(), idx);
        Some(idx)
    }

    #[cfg(test)]
    pub fn index_of(&self, b: &Block) -> Option<BlockTypeIndex> {
        self.lookup.get(b).copied()
    }

    pub fn info_for_index(&self, index: BlockTypeIndex) -> Option<&Block> {
        self.entries.get(index.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false, air is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.entries.iter()
    }
}
