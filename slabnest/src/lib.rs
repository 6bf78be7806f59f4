//! Cutting-stock optimizer for stone slabs.
//!
//! Rectangular pieces are expanded into unit pieces, slabs (rectangular or L-shaped remnants) are
//! decomposed into rectangular zones, and pieces are shelf-packed zone by zone, slab by slab.
//! Every run is a pure function of its inputs.
//!
//! ## Features
#![doc = document_features::document_features!()]

/// Pieces, slabs, zones, placements and layouts
pub mod entities;

/// Geometric primitives and slab decomposition
pub mod geometry;

/// Conversion between external (serde) representations and internal entities
pub mod io;

/// Shelf packing, slab sequencing and utilization reporting
pub mod opt;

/// Configuration, float helpers and correctness checks
pub mod util;
