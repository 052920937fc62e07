// src/core/mod.rs
pub mod arbiter;
pub mod collaborators;
pub mod compound;
pub mod engine;
pub mod mapping;
pub mod stress;
pub mod text;
pub mod types;
