//! Keepsake CLI - terminal shell for client albums
//!
//! Loads a client's gallery from the album backend, prints it, and drives a
//! headless playlist preview through [`preview::ClockDevice`].

pub mod commands;
pub mod config;
pub mod error;
pub mod preview;
