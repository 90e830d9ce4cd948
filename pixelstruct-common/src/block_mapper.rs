//! Maps a grid of colour tokens onto a grid of blocks.

use crate::block_storage::Block;
use crate::color_map::ColorMap;
use crate::grid::{check_rectangular, GridShapeError};

/// Block used for tokens missing from the colour map. A visible solid block,
/// so holes in the table show up in the built structure.
pub const DEFAULT_FILLER_BLOCK: &str = "minecraft:stone";

#[derive(Clone, Debug)]
pub struct BlockMapper {
    color_map: ColorMap,
    filler: Block,
}

impl BlockMapper {
    pub fn new(color_map: ColorMap) -> Self {
        Self::with_filler(color_map, Block::new(DEFAULT_FILLER_BLOCK))
    }

    pub fn with_filler(color_map: ColorMap, filler: Block) -> Self {
        Self { color_map, filler }
    }

    pub fn filler(&self) -> &Block {
        &self.filler
    }

    /// Map every token through the colour map, substituting the filler block
    /// for unknown tokens. The grid must be a non-empty rectangle.
    pub fn map<T: AsRef<str>>(&self, grid: &[Vec<T>]) -> Result<Vec<Vec<Block>>, GridShapeError> {
        check_rectangular(grid)?;

        Ok(grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|token| self.lookup(token.as_ref()).clone())
                    .collect()
            })
            .collect())
    }

    fn lookup(&self, token: &str) -> &Block {
        self.color_map.get(token).unwrap_or(&self.filler)
    }
}
