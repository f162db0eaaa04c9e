//! Playable games built on the core engine.

pub mod blacksin;
