//! Conversion of a flat block grid into a gzip-compressed structure file.
//!
//! The pipeline is: palette and document construction, NBT encoding, then
//! gzip framing. Each call builds its own palette, so concurrent calls share
//! nothing.

pub mod compression;
pub mod nbt;

use log::debug;
use quartz_nbt::io::NbtIoError;
use std::fmt::{Display, Formatter};

use crate::block_storage::{Block, BlockTypeIndex, Palette, Position};
use crate::grid::iter::iter_cell_coords;
use crate::grid::{check_rectangular, GridShapeError};

/// Data version of Minecraft 1.21.
pub const DEFAULT_DATA_VERSION: i32 = 3953;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureOptions {
    /// Stamped into the `DataVersion` tag. Must match the game version the
    /// structure is meant to be loaded into.
    pub data_version: i32,
}

impl Default for StructureOptions {
    fn default() -> Self {
        Self {
            data_version: DEFAULT_DATA_VERSION,
        }
    }
}

/// Failure while turning a document into NBT
#[derive(Debug)]
pub enum EncodingError {
    /// A size, coordinate or palette index does not fit in an NBT int
    OutOfRange { what: &'static str, value: usize },
    /// A string longer than 65535 bytes once encoded as modified UTF-8
    StringTooLong { what: &'static str, len: usize },
    Nbt(NbtIoError),
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::OutOfRange { what, value } => {
                write!(f, "{} {} does not fit in a 32-bit NBT int", what, value)
            }
            Self::StringTooLong { what, len } => write!(
                f,
                "{} is {} bytes long, NBT strings are limited to {}",
                what,
                len,
                u16::MAX
            ),
            Self::Nbt(e) => write!(f, "NBT writer failed: {}", e),
        }
    }
}

impl std::error::Error for EncodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Nbt(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum StructureError {
    InvalidGridShape(GridShapeError),
    Encoding(EncodingError),
    Compression(std::io::Error),
}

impl Display for StructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::InvalidGridShape(e) => write!(f, "invalid grid shape: {}", e),
            Self::Encoding(e) => write!(f, "failed to encode structure: {}", e),
            Self::Compression(e) => write!(f, "failed to compress structure: {}", e),
        }
    }
}

impl std::error::Error for StructureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGridShape(e) => Some(e),
            Self::Encoding(e) => Some(e),
            Self::Compression(e) => Some(e),
        }
    }
}

impl From<GridShapeError> for StructureError {
    fn from(e: GridShapeError) -> Self {
        Self::InvalidGridShape(e)
    }
}

impl From<EncodingError> for StructureError {
    fn from(e: EncodingError) -> Self {
        Self::Encoding(e)
    }
}

/// One non-air block of the structure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedBlock {
    pub pos: Position,
    pub state: BlockTypeIndex,
}

/// In-memory form of a structure file, prior to encoding.
#[derive(Clone, Debug)]
pub struct StructureDocument {
    data_version: i32,
    /// (width, height, length) along (x, y, z)
    size: [i32; 3],
    palette: Palette,
    blocks: Vec<PlacedBlock>,
}

impl StructureDocument {
    /// Build a single-layer structure from a grid whose rows run along Z and
    /// columns along X. Air cells are left out of the block list.
    pub fn from_grid(
        grid: &[Vec<Block>],
        options: &StructureOptions,
    ) -> Result<Self, StructureError> {
        let (width, length) = check_rectangular(grid)?;
        let size = [
            to_nbt_int("width", width)?,
            1,
            to_nbt_int("length", length)?,
        ];

        let origin = Position::new(0, 0, 0);
        let extent = Position::new(size[0], size[1], size[2]);

        let mut palette = Palette::new();
        let mut blocks = Vec::new();
        for ((x, z), block) in iter_cell_coords(grid) {
            if block.is_air() {
                continue;
            }
            let state = palette
                .add_new_block_type(block)
                .ok_or_else(|| EncodingError::OutOfRange {
                    what: "palette size",
                    value: palette.len(),
                })?;
            // x < width and z < length, both checked to fit above
            let pos = Position::new(x as i32, 0, z as i32);
            debug_assert!(pos.in_bounding_box(&origin, &extent));
            blocks.push(PlacedBlock { pos, state });
        }

        debug!(
            "Built structure document {}x{}x{} with {} palette entries and {} blocks",
            size[0],
            size[1],
            size[2],
            palette.len(),
            blocks.len()
        );

        Ok(Self {
            data_version: options.data_version,
            size,
            palette,
            blocks,
        })
    }

    pub fn data_version(&self) -> i32 {
        self.data_version
    }

    pub fn size(&self) -> &[i32; 3] {
        &self.size
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn blocks(&self) -> &[PlacedBlock] {
        &self.blocks
    }
}

fn to_nbt_int(what: &'static str, value: usize) -> Result<i32, EncodingError> {
    i32::try_from(value).map_err(|_| EncodingError::OutOfRange { what, value })
}

/// Serialize a block grid into a gzip-compressed structure file using the
/// default options.
pub fn serialize(grid: &[Vec<Block>]) -> Result<Vec<u8>, StructureError> {
    serialize_with(grid, &StructureOptions::default())
}

pub fn serialize_with(
    grid: &[Vec<Block>],
    options: &StructureOptions,
) -> Result<Vec<u8>, StructureError> {
    let document = StructureDocument::from_grid(grid, options)?;
    let encoded = nbt::encode(&document)?;
    let compressed = compression::gzip(&encoded).map_err(StructureError::Compression)?;

    debug!(
        "Encoded structure to {} bytes, {} after compression",
        encoded.len(),
        compressed.len()
    );

    Ok(compressed)
}
