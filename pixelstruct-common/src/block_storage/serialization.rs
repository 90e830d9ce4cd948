use quartz_nbt::{NbtCompound, NbtTag};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

use super::Block;
use crate::structure::nbt::{check_string_len, nbt_string};
use crate::structure::EncodingError;

/// Mirrors the palette entry layout used by structure files, so block states
/// in JSON tables are written the same way they appear in the NBT.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawBlockState {
    name: String,
    #[serde(default)]
    properties: Option<BTreeMap<String, String>>,
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawBlockState::deserialize(d)?;
        Ok(Block::with_properties(
            raw.name,
            raw.properties.unwrap_or_default(),
        ))
    }
}

impl Block {
    /// Build the palette entry compound for this block. `Properties` is only
    /// emitted when the block has any.
    pub fn to_nbt(&self) -> Result<NbtCompound, EncodingError> {
        let mut compound = NbtCompound::new();
        compound.insert("Name", nbt_string("block name", &self.name)?);
        if let Some(ref props) = self.properties {
            let mut properties = NbtCompound::new();
            for (k, v) in props.iter() {
                check_string_len("property name", k)?;
                properties.insert(k.clone(), nbt_string("property value", v)?);
            }
            compound.insert("Properties", NbtTag::Compound(properties));
        }

        Ok(compound)
    }
}
