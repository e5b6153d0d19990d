//! Charybdis Nano keymap on top of a per-key state machine engine
#![no_std]

#[macro_use]
mod fmt;

pub mod caps_word;
pub mod charybdis;
pub mod config;
pub mod keyboard;
pub mod keycode;
pub mod keystate;
pub mod layer_state;
pub mod pointer;
pub mod report;

pub use keyboard::{Charybdis, Config, Error, Event, Output};
