//! Provides input/output functionality for the PDB format.
//!
//! Reading goes through [`record`] (one line → one classified record) and [`pdb`]
//! (records → structure). Writing is limited to the JSON document produced by [`json`].

pub mod error;
pub mod json;
pub mod pdb;
pub mod record;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod traits;
