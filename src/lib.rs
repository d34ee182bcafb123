//! Crossy Road Library
//!
//! A lane-crossing arcade game whose simulation runs independently or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
