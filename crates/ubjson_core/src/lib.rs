//! Public library API for reading and writing universal binary JSON (draft 9).

/// Marker table, byte sources, value model, decoder and encoder.
pub mod codec;
