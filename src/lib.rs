//! Folder Structure - Render a directory tree as ASCII-art text
//!
//! This crate provides functionality for:
//! - Walking a directory tree depth-first with folder exclusions
//! - Rendering it as indented `├── ` / `└── ` branch lines
//! - Writing the rendering to a file or any other sink

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, StructureError};
pub use tree::{Exclusions, GlyphPolicy, RenderOptions, TreeRenderer};
