//! High-level operations.
//!
//! Each operation wires the core components together for one CLI command and
//! prints its result. The components themselves stay I/O-agnostic; everything
//! user-facing lives here.

pub mod draft;
pub mod export;
pub mod inspire;
pub mod purge;
pub mod remind;
pub mod settings;
pub mod view;
pub mod write;
