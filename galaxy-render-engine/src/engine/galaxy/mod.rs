//! Procedural galaxy generation.
//!
//! Parameter definitions, validation, and the deterministic generator that
//! produces flat position/colour buffers for the spiral-arm distribution.

/// Galaxy parameter set, domain validation and the generation error taxonomy.
pub mod parameters;

/// Point-buffer generator over an injected uniform random source.
pub mod generator;
