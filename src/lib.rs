// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod lexicon;
pub mod persistence;
pub mod stats;

pub use crate::core::engine::{Collaborators, Phonemiser};
pub use crate::core::stress::correct_stress_markers;
pub use crate::core::text::spell_out;
pub use crate::core::types::{Language, Provenance, Pronunciation};
pub use crate::error::{LoadError, Result};
