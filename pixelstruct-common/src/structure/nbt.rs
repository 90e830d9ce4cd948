//! NBT layout of a structure file.
//!
//! The root compound is unnamed and holds `DataVersion`, `size`, `entities`,
//! `palette` and `blocks`, in that order. Compounds keep insertion order
//! (`preserve_order`), so equal documents encode to equal bytes.

use quartz_nbt::io::{write_nbt, Flavor};
use quartz_nbt::{NbtCompound, NbtList, NbtTag};

use super::{EncodingError, PlacedBlock, StructureDocument};

/// Reject strings whose modified UTF-8 form does not fit the u16 length
/// prefix NBT uses.
pub(crate) fn check_string_len(what: &'static str, s: &str) -> Result<(), EncodingError> {
    let len = cesu8::to_java_cesu8(s).len();
    if len > u16::MAX as usize {
        return Err(EncodingError::StringTooLong { what, len });
    }
    Ok(())
}

pub(crate) fn nbt_string(what: &'static str, s: &str) -> Result<NbtTag, EncodingError> {
    check_string_len(what, s)?;
    Ok(NbtTag::String(s.to_owned()))
}

fn int_list(values: &[i32]) -> NbtList {
    let mut list = NbtList::new();
    for v in values {
        list.push(NbtTag::Int(*v));
    }
    list
}

fn block_to_nbt(block: &PlacedBlock) -> Result<NbtCompound, EncodingError> {
    let state = i32::try_from(block.state.get()).map_err(|_| EncodingError::OutOfRange {
        what: "palette index",
        value: block.state.get() as usize,
    })?;

    let mut compound = NbtCompound::new();
    compound.insert(
        "pos",
        NbtTag::List(int_list(&[block.pos.x, block.pos.y, block.pos.z])),
    );
    compound.insert("state", NbtTag::Int(state));
    Ok(compound)
}

/// Build the tag tree for `document`.
pub fn to_nbt(document: &StructureDocument) -> Result<NbtCompound, EncodingError> {
    let mut palette = NbtList::new();
    for block in document.palette().iter() {
        palette.push(NbtTag::Compound(block.to_nbt()?));
    }

    let mut blocks = NbtList::new();
    for block in document.blocks() {
        blocks.push(NbtTag::Compound(block_to_nbt(block)?));
    }

    let mut root = NbtCompound::new();
    root.insert("DataVersion", NbtTag::Int(document.data_version()));
    root.insert("size", NbtTag::List(int_list(document.size())));
    root.insert("entities", NbtTag::List(NbtList::new()));
    root.insert("palette", NbtTag::List(palette));
    root.insert("blocks", NbtTag::List(blocks));

    Ok(root)
}

/// Encode `document` as uncompressed big-endian NBT with an empty root name.
pub fn encode(document: &StructureDocument) -> Result<Vec<u8>, EncodingError> {
    let root = to_nbt(document)?;
    let mut bytes = Vec::new();
    write_nbt(&mut bytes, None, &root, Flavor::Uncompressed).map_err(EncodingError::Nbt)?;
    Ok(bytes)
}
