//! Embedding of binary font files into C++ source headers.
//!
//! This crate turns the raw bytes of a font file into a single
//! `constexpr unsigned char font_data[]` declaration, so the font can be
//! compiled into an executable instead of being loaded at runtime.

mod embedder;
mod error;
mod literal;

pub use embedder::*;
pub use error::*;
pub use literal::*;
