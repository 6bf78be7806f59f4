/// Set of functions used throughout to assure the correctness of packing runs.
pub mod assertions;

mod config;

#[doc(inline)]
pub use config::PackingConfig;
