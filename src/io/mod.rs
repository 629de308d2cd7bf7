//! I/O layer: byte-level image reading/decoding and JPEG encoding/writing.
pub mod codec;
pub use codec::{encode_jpeg, read_image, write_image};
