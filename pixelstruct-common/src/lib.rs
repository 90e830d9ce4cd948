pub mod block_mapper;
pub mod block_storage;
pub mod color_map;
pub mod grid;
pub mod structure;

#[cfg(test)]
mod minecraft_types;

pub use block_mapper::BlockMapper;
pub use block_storage::{Block, Palette};
pub use color_map::ColorMap;
pub use structure::{serialize, serialize_with, StructureError, StructureOptions};
