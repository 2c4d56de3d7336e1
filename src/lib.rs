//! Sternwheeler engine library.
//!
//! A deterministic rules engine for the Mississippi Queen river race:
//! hex geometry, action semantics, move execution, and legal-move
//! generation, for use by protocol adapters and search layers.

pub mod actions;
pub mod board;
pub mod game;
pub mod movegen;
