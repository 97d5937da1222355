//! # PDB Parser Core Library
//!
//! A strict, synchronous reader for Protein Data Bank (PDB) fixed-column files. A parse
//! turns one file into an immutable [`Structure`]: ordered chains, each holding ordered
//! residues, each holding ordered atoms.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Owned data models (`Structure`, `Chain`, `Residue`,
//!   `Atom`), the fixed-column record tokenizer, the incremental builders, the JSON
//!   serializer and the parse configuration.
//!
//! - **[`workflows`]: The Public API.** Instrumented entry points that take a path and
//!   a configuration and hand back a finished `Structure`. Every consumer (CLI, Python
//!   bindings) goes through this layer.
//!
//! ```ignore
//! use pdb_parser::Structure;
//!
//! let structure = Structure::from_path("7v39.pdb")?;
//! println!("{}", structure);
//! let chain_a = &structure.chains()[0];
//! println!("{}", chain_a.get_sequence());
//! let json = structure.dump_to_json()?;
//! ```

pub mod core;
pub mod workflows;

pub use crate::core::config::{ModelSelection, ParseConfig, ParseConfigBuilder, ResidueNamePolicy};
pub use crate::core::io::error::{ParseErrorKind, PdbError};
pub use crate::core::models::{atom::Atom, chain::Chain, residue::Residue, structure::Structure};
