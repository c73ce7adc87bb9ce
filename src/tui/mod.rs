//! The dashboard — ratatui presentation layer.
//!
//! Renders the parameter table and the progress bar in an inline terminal
//! viewport. A tick clock advances the bar; the keyboard moves the table
//! cursor, toggles its focus, and quits.
//!
//! ## Architecture (TEA)
//!
//! Model (`PomoApp`) + Update (message handler returning a `Command`) +
//! View (`layout::draw`). The runner owns the terminal and the clock and
//! carries out each command; the model owns no I/O.

pub mod app;
pub mod clock;
pub mod event;
pub mod layout;
pub mod progress;
pub mod runner;
pub mod table;
pub mod theme;
