pub mod camera;
pub mod config;
pub mod engine;
pub mod events;
pub mod grid;
pub mod rule_set;
pub mod seed;
pub mod terminal;

pub use engine::LifeEngine;
pub use grid::BoundedGrid;
pub use grid::GridError;
