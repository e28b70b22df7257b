pub mod avl;
pub mod error;
pub mod huffman;

pub use avl::AvlTree;
pub use error::{Error, Result};
pub use huffman::{compress, CompressedData, Header, UnitWidth};
