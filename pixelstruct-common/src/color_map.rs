//! Lookup table from `#RRGGBB` colour tokens to blocks.
//!
//! Tables are validated when they are loaded, so lookups never fail: a token
//! that is not a well-formed colour, or that has no entry, simply misses.

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::io::Read;

use crate::block_storage::Block;

/// A validated `#RRGGBB` colour, stored in upper case.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorKey(String);

impl ColorKey {
    /// Parse a `#` followed by exactly six hex digits, in either case.
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ColorKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error generated when loading a colour table fails
#[derive(Debug)]
pub enum ColorMapError {
    Parse(serde_json::Error),
    InvalidColorKey(String),
    InvalidBlockName { key: String, name: String },
    DuplicateColor(String),
}

impl Display for ColorMapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Parse(e) => write!(f, "failed to parse colour map: {}", e),
            Self::InvalidColorKey(key) => {
                write!(f, "colour key {:?} is not of the form #RRGGBB", key)
            }
            Self::InvalidBlockName { key, name } => write!(
                f,
                "block name {:?} for colour {} is not a namespaced identifier",
                name, key
            ),
            Self::DuplicateColor(key) => write!(f, "colour {} is mapped more than once", key),
        }
    }
}

impl std::error::Error for ColorMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ColorMapError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// On-disk shape of one table entry
#[derive(Deserialize)]
struct ColorMapping {
    #[serde(rename = "blockState")]
    block_state: Block,
}

#[derive(Clone, Debug, Default)]
pub struct ColorMap {
    entries: HashMap<ColorKey, Block>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the tool: black and white concrete.
    pub fn builtin() -> Self {
        let mut map = Self::new();
        for (color, name) in [
            ("#000000", "minecraft:black_concrete"),
            ("#FFFFFF", "minecraft:white_concrete"),
        ] {
            if let Some(key) = ColorKey::parse(color) {
                map.insert(key, Block::new(name));
            }
        }
        map
    }

    pub fn from_json_str(s: &str) -> Result<Self, ColorMapError> {
        let raw: Vec<(String, ColorMapping)> = serde_json::from_str::<RawTable>(s)?.0;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ColorMapError> {
        let raw: Vec<(String, ColorMapping)> = serde_json::from_reader::<_, RawTable>(reader)?.0;
        Self::from_raw(raw)
    }

    fn from_raw(raw: Vec<(String, ColorMapping)>) -> Result<Self, ColorMapError> {
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, mapping) in raw {
            let color = ColorKey::parse(&key)
                .ok_or_else(|| ColorMapError::InvalidColorKey(key.clone()))?;
            if !mapping.block_state.has_namespaced_name() {
                return Err(ColorMapError::InvalidBlockName {
                    key,
                    name: mapping.block_state.name().to_owned(),
                });
            }
            if entries.contains_key(&color) {
                return Err(ColorMapError::DuplicateColor(color.to_string()));
            }
            entries.insert(color, mapping.block_state);
        }
        debug!("Loaded colour map with {} entries", entries.len());

        Ok(Self { entries })
    }

    pub fn insert(&mut self, key: ColorKey, block: Block) -> Option<Block> {
        self.entries.insert(key, block)
    }

    /// Look up a raw token. Tokens that are not `#RRGGBB` colours never match.
    pub fn get(&self, token: &str) -> Option<&Block> {
        ColorKey::parse(token).and_then(|key| self.entries.get(&key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// JSON object kept as the ordered list of its raw key/value pairs.
struct RawTable(Vec<(String, ColorMapping)>);

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> serde::de::Visitor<'de> for TableVisitor {
            type Value = RawTable;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of colour keys to block mappings")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, ColorMapping>()? {
                    entries.push(entry);
                }
                Ok(RawTable(entries))
            }
        }

        d.deserialize_map(TableVisitor)
    }
}
