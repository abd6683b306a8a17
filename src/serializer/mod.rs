//! Hand-written decoders for responses serde cannot derive

pub mod path;

pub use path::{decode_path, decode_paths};
