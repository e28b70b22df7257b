//! Packing the unit stream into fixed-width words.

use bitvec::prelude::*;

use crate::error::{Error, Result};
use crate::huffman::{units, Codebook, UnitWidth};

/// Encodes `data` against `codebook` into 32-bit words.
///
/// Each unit's code is appended most-significant-bit first; a code that does
/// not fit the current word is split across the boundary, high bits first.
/// Unused low bits of the final word are zero-filled. The returned buffer is
/// sized exactly to the words produced.
///
/// A unit with no codebook entry means the codebook was built from a
/// different input; that inconsistency is fatal
/// ([`Error::CodebookMissingEntry`]).
pub fn pack(data: &[u8], unit: UnitWidth, codebook: &Codebook) -> Result<Vec<u32>> {
    let mut bits: BitVec<u32, Msb0> = BitVec::new();
    for value in units(data, unit) {
        let entry = codebook.get(value).ok_or(Error::CodebookMissingEntry)?;
        for i in (0..entry.len).rev() {
            bits.push(entry.code >> i & 1 == 1);
        }
    }
    let padded = bits.len().div_ceil(32) * 32;
    bits.resize(padded, false);
    log::trace!("packed {} bits into {} words", padded, padded / 32);
    Ok(bits.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::HuffmanTree;

    fn codebook_for(data: &[u8]) -> Codebook {
        let tree = HuffmanTree::build(data, UnitWidth::Eight).unwrap();
        Codebook::from_tree(&tree).unwrap()
    }

    #[test]
    fn test_pack_known_codes_exact_words() {
        // A=20 ('1'), B=8 ('01'), C=4 ('00'): 44 bits total.
        let mut data = vec![b'A'; 20];
        data.extend_from_slice(&[b'B'; 8]);
        data.extend_from_slice(&[b'C'; 4]);
        let book = codebook_for(&data);

        let words = pack(&data, UnitWidth::Eight, &book).unwrap();
        // Twenty 1-bits, then six of the eight '01' pairs fill word 0; the
        // last two pairs and four '00' pairs start word 1, zero-padded.
        assert_eq!(words, vec![0xffff_f555, 0x5000_0000]);
    }

    #[test]
    fn test_pack_splits_code_across_word_boundary() {
        // Frequencies A=16, B=8, C=4, D=2, E=2 give codes A=0, B=10, C=110,
        // D=1110, E=1111. Leading with one C makes the seventh B straddle
        // the word boundary.
        let mut data = vec![b'C'];
        data.extend_from_slice(&[b'A'; 16]);
        data.extend_from_slice(&[b'B'; 8]);
        data.extend_from_slice(&[b'C'; 3]);
        data.extend_from_slice(&[b'D'; 2]);
        data.extend_from_slice(&[b'E'; 2]);
        assert_eq!(data.len(), 32);
        let book = codebook_for(&data);
        assert_eq!(book.get(b'A').map(|e| (e.code, e.len)), Some((0b0, 1)));
        assert_eq!(book.get(b'B').map(|e| (e.code, e.len)), Some((0b10, 2)));
        assert_eq!(book.get(b'C').map(|e| (e.code, e.len)), Some((0b110, 3)));
        assert_eq!(book.get(b'D').map(|e| (e.code, e.len)), Some((0b1110, 4)));
        assert_eq!(book.get(b'E').map(|e| (e.code, e.len)), Some((0b1111, 4)));

        let words = pack(&data, UnitWidth::Eight, &book).unwrap();
        assert_eq!(words, vec![0xc000_1555, 0x5b6e_eff0]);
    }

    #[test]
    fn test_pack_missing_entry_is_fatal() {
        let mut data = vec![b'A'; 20];
        data.extend_from_slice(&[b'B'; 8]);
        data.extend_from_slice(&[b'C'; 4]);
        let book = codebook_for(&data);
        assert_eq!(
            pack(&[b'D'; 4], UnitWidth::Eight, &book),
            Err(Error::CodebookMissingEntry)
        );
    }

    #[test]
    fn test_pack_4bit_uses_nibble_stream() {
        // 0x21 splits into nibbles 1 then 2, equally frequent; value 1 sorts
        // first and takes code 0, value 2 takes code 1.
        let data = [0x21u8; 32];
        let tree = HuffmanTree::build(&data, UnitWidth::Four).unwrap();
        let book = Codebook::from_tree(&tree).unwrap();
        let words = pack(&data, UnitWidth::Four, &book).unwrap();
        // The stream alternates 0,1 for 64 units: both words are 0x55555555.
        assert_eq!(words, vec![0x5555_5555, 0x5555_5555]);
    }
}
