//! Writing artifacts to the output directory.

pub mod writer;

pub use writer::{copy_file, ensure_output_dir, output_path, write_atomic};
