//! # Core Module
//!
//! The fundamental building blocks of the parser: the owned structure model, the PDB
//! record reader that feeds it, the JSON serializer that reads it back out, and the
//! static lookup tables both sides share.
//!
//! ## Architecture
//!
//! - **Structure Representation** ([`models`]) - Atoms, residues, chains, structures and the
//!   builders that assemble them in file order
//! - **File I/O** ([`io`]) - Fixed-column record classification, the PDB reader and the JSON writer
//! - **Parse Options** ([`config`]) - Model selection and residue naming policy
//! - **Lookup Tables** ([`utils`]) - Residue one-letter codes and marker atom names
//!
//! Data moves one way: file bytes → records → residues → chains → structure → JSON.

pub mod config;
pub mod io;
pub mod models;
pub mod utils;
