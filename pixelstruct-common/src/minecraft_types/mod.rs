//! Read-side mirror of the structure file layout, used by tests to check what
//! the serializer wrote.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::block_storage::Block;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaletteBlock {
    pub name: String,
    pub properties: Option<BTreeMap<String, String>>,
}

impl PaletteBlock {
    pub fn to_block(&self) -> Block {
        Block::with_properties(
            self.name.clone(),
            self.properties.clone().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct StructureBlock {
    pub state: i32,
    pub pos: [i32; 3],
}

#[derive(Debug, Deserialize)]
pub struct Structure {
    #[serde(rename = "DataVersion")]
    pub data_version: i32,
    pub size: [i32; 3],
    pub palette: Vec<PaletteBlock>,
    pub blocks: Vec<StructureBlock>,
}

impl Structure {
    pub fn read_gzipped(bytes: &[u8]) -> Result<Self, quartz_nbt::io::NbtIoError> {
        let mut reader = bytes;
        let (structure, _) =
            quartz_nbt::serde::deserialize_from(&mut reader, quartz_nbt::io::Flavor::GzCompressed)?;
        Ok(structure)
    }

    /// Expand back into a row-major grid, filling unplaced positions with air.
    pub fn to_grid(&self) -> Vec<Vec<Block>> {
        let palette: Vec<Block> = self.palette.iter().map(PaletteBlock::to_block).collect();
        let [width, _, length] = self.size;
        let mut grid = vec![vec![Block::air(); width as usize]; length as usize];
        for block in self.blocks.iter() {
            let [x, _, z] = block.pos;
            grid[z as usize][x as usize] = palette[block.state as usize].clone();
        }
        grid
    }
}
