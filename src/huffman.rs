//! Huffman compression targeting the GBA BIOS decompression routine.
//!
//! This module implements the full offline pipeline:
//! - Frequency analysis over 4- or 8-bit units
//! - Deterministic tree construction through a balanced min-priority queue
//! - Code assignment and sorted codebook lookup
//! - MSB-first bitstream packing into 32-bit words
//! - Serialization of the tree into the BIOS node-table format, plus the
//!   fixed header record
//!
//! Compression is single-shot and synchronous: [`compress`] either returns a
//! fully owned [`CompressedData`] or fails with an [`Error`] and no partial
//! output. Decompression is left to the console; the tests carry a reference
//! decoder to close the loop.
//!
//! # Examples
//!
//! ```rust
//! use gba_huffman::{compress, UnitWidth};
//!
//! let data = b"at least eight words of input is required here..".to_vec();
//! let out = compress(&data, UnitWidth::Eight).unwrap();
//! assert_eq!(out.header.decompressed_len() as usize, data.len());
//! ```

use crate::error::{Error, Result};

pub mod bitstream;
pub mod codebook;
pub mod frequency;
pub mod gba;
pub mod tree;

pub use bitstream::pack;
pub use codebook::{CodeEntry, Codebook};
pub use frequency::FrequencyTable;
pub use gba::{serialize_tree, Header};
pub use tree::{HuffmanNode, HuffmanTree};

/// Smallest accepted input, in 32-bit words.
pub const MIN_WORD_COUNT: usize = 8;

/// Smallest accepted input, in bytes.
pub const MIN_INPUT_BYTES: usize = MIN_WORD_COUNT * 4;

/// Width of the unit alphabet the compressor operates on.
///
/// The decompression routine understands 4-bit and 8-bit symbol streams;
/// nothing else is representable here. Converting from a raw bit count goes
/// through [`TryFrom`], which rejects unsupported widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitWidth {
    Four,
    Eight,
}

impl UnitWidth {
    /// Unit size in bits.
    pub fn bits(self) -> u32 {
        match self {
            UnitWidth::Four => 4,
            UnitWidth::Eight => 8,
        }
    }

    /// Mask covering one unit's value range.
    pub fn mask(self) -> u8 {
        match self {
            UnitWidth::Four => 0x0f,
            UnitWidth::Eight => 0xff,
        }
    }

    /// Units carried by each input byte.
    pub fn units_per_byte(self) -> usize {
        match self {
            UnitWidth::Four => 2,
            UnitWidth::Eight => 1,
        }
    }
}

impl TryFrom<u8> for UnitWidth {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self> {
        match bits {
            4 => Ok(UnitWidth::Four),
            8 => Ok(UnitWidth::Eight),
            _ => Err(Error::UnsupportedFeature),
        }
    }
}

/// Iterator over the unit stream of a byte buffer.
///
/// 8-bit units pass bytes through unchanged; 4-bit units split each byte
/// into its low nibble followed by its high nibble. The frequency analyzer
/// and the bitstream packer both walk the input through this iterator, so
/// they always agree on the stream.
pub struct Units<'a> {
    data: &'a [u8],
    pos: usize,
    unit: UnitWidth,
    pending_high: Option<u8>,
}

impl Iterator for Units<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if let Some(high) = self.pending_high.take() {
            return Some(high);
        }
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        match self.unit {
            UnitWidth::Eight => Some(byte),
            UnitWidth::Four => {
                self.pending_high = Some(byte >> 4);
                Some(byte & 0x0f)
            }
        }
    }
}

/// Walks `data` as a sequence of units of the given width.
pub fn units(data: &[u8], unit: UnitWidth) -> Units<'_> {
    Units {
        data,
        pos: 0,
        unit,
        pending_high: None,
    }
}

/// Output of a compression run, fully owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedData {
    /// Fixed four-byte header record.
    pub header: Header,
    /// Serialized node table, padded to a multiple of 4 bytes.
    pub table: Vec<u8>,
    /// Packed bitstream words, sized exactly to the bits produced.
    pub words: Vec<u32>,
}

impl CompressedData {
    /// Assembles the image the BIOS routine consumes: header, node table,
    /// then the bitstream words in little-endian byte order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.table.len() + self.words.len() * 4);
        out.extend_from_slice(&self.header.to_bytes());
        out.extend_from_slice(&self.table);
        for word in &self.words {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Total size of the assembled image in bytes.
    pub fn byte_len(&self) -> usize {
        4 + self.table.len() + self.words.len() * 4
    }
}

/// Compresses `data` as a stream of `unit`-wide symbols.
///
/// The input length must be a multiple of 4 bytes (the console decompresses
/// whole words) and at least [`MIN_INPUT_BYTES`]. The returned buffers are
/// independent of any internal scratch state, which is torn down before
/// returning.
pub fn compress(data: &[u8], unit: UnitWidth) -> Result<CompressedData> {
    let header = Header::new(data.len(), unit)?;
    let tree = HuffmanTree::build(data, unit)?;
    let codebook = Codebook::from_tree(&tree)?;
    let words = pack(data, unit, &codebook)?;
    let table = serialize_tree(&tree)?;
    log::debug!(
        "compressed {} bytes into {} table bytes and {} bitstream words",
        data.len(),
        table.len(),
        words.len()
    );
    Ok(CompressedData {
        header,
        table,
        words,
    })
}
