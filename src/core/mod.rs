//! # Core Application Logic
//!
//! Business state and transitions for the listings screen. This module
//! knows nothing about the terminal, ratatui, or HTTP — it holds the data
//! (`state`), describes everything that can happen (`action`), and owns the
//! record collection plus its row projection (`adapter`).
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! I/O (the fetch, photo loads, drawing) happens in the shells around it.

pub mod action;
pub mod adapter;
pub mod config;
pub mod state;
