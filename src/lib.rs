pub mod cell;
pub mod config;
pub mod pattern;
pub mod world;
