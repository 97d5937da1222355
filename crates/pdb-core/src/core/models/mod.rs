//! # Core Models Module
//!
//! The owned, strictly hierarchical representation of a parsed PDB file.
//!
//! ## Key Components
//!
//! - [`atom`] - One atom record with coordinates and identifying residue fields
//! - [`residue`] - Atoms sharing a chain id, sequence number and insertion code
//! - [`chain`] - Residues sharing a chain id, in file order, plus sequence derivation
//! - [`structure`] - The finished, immutable parse result
//! - [`builder`] - Incremental residue, chain and structure builders fed by the reader
//!
//! Ownership forms a tree: `Structure` → `Chain` → `Residue` → `Atom`. There are no
//! back-references; a residue or atom carries its parent's identifiers as plain values.

pub mod atom;
pub mod builder;
pub mod chain;
pub mod residue;
pub mod structure;
