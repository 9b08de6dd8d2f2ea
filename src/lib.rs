//! Folio Library
//!
//! Core library for the Folio portfolio and art gallery desktop application.

pub mod app;
pub mod storage;
pub mod types;
pub mod ui;
