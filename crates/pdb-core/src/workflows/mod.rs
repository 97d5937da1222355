//! # Workflows Module
//!
//! High-level entry points that take a path and hand back a finished [`Structure`].
//!
//! Every consumer of the library (the `pdbp` command-line tool, the Python bindings
//! and [`Structure::from_path`]) goes through these functions so that file opening,
//! logging spans and error mapping behave the same everywhere.
//!
//! - **Load Workflow** ([`load`]) - Parse one PDB file under a [`ParseConfig`].
//!
//! [`Structure`]: crate::core::models::structure::Structure
//! [`Structure::from_path`]: crate::core::models::structure::Structure::from_path
//! [`ParseConfig`]: crate::core::config::ParseConfig

pub mod load;
