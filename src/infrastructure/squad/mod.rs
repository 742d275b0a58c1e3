//! Squad generation infrastructure

mod generator;

pub use generator::{generate_squad, SQUAD_COMPOSITION};
