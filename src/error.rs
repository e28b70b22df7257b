//! Error types for the compression pipeline.
//!
//! Every fallible operation in this crate returns [`Result`]; there is no
//! process-wide error state to query after the fact. All errors are fatal to
//! the call that produced them: nothing is retried internally, and no
//! partially built output is handed to the caller on failure.

use thiserror::Error;

/// Errors reported by the compression pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The input buffer is shorter than the eight-word minimum.
    #[error("input is shorter than the 8-word (32-byte) minimum")]
    InputTooShort,

    /// Fewer than two distinct unit values were observed; a binary tree
    /// cannot be formed from a single symbol.
    #[error("input needs at least two distinct unit values")]
    InputTooUniform,

    /// The decompressed byte length must be a multiple of 4.
    #[error("decompressed length is not a multiple of 4")]
    DataNotWordAlignable,

    /// A merge step ran out of nodes before producing a subroot.
    #[error("merge step is missing a descendant node")]
    SubrootMissingDescendant,

    /// The frequency queue lost nodes during tree construction.
    #[error("frequency queue does not hold the expected nodes")]
    FreqTreeMissingNodes,

    /// The incrementally tracked node count disagrees with a full traversal.
    #[error("tree node count does not match traversal count")]
    UnexpectedNodeCount,

    /// The tree has no internal nodes, so no binary codes can be assigned.
    #[error("tree has no internal nodes to assign codes from")]
    BadTreeGiven,

    /// Codes for this tree would exceed 64 bits.
    #[error("tree height exceeds the 64-bit code limit")]
    MaxCodeLengthReached,

    /// The requested unit width or data size is not supported.
    #[error("unsupported unit width or data size")]
    UnsupportedFeature,

    /// A node-table descendant offset does not fit in its 6-bit field.
    #[error("node table offset does not fit in 6 bits")]
    TableOffsetOverflow,

    /// The codebook has no entry for a unit present in the input stream.
    #[error("codebook is missing an entry for an input unit")]
    CodebookMissingEntry,
}

/// Result type for compression operations.
pub type Result<T> = std::result::Result<T, Error>;
