//! TERMTRIS - falling blocks in the terminal
//!
//! The game engine ([`game::Game`]) and everything it is built from, plus
//! the pieces the binary uses to drive it: a gravity [`clock`], key
//! [`input`] mapping, text [`render`]ing and the [`terminal`] sink.

pub mod app;
pub mod bag;
pub mod board;
pub mod clock;
pub mod game;
pub mod geometry;
pub mod input;
pub mod piece;
pub mod queue;
pub mod render;
pub mod score;
pub mod settings;
pub mod terminal;
pub mod tetromino;
