mod decomposition;

pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;

#[doc(inline)]
pub use decomposition::decompose_polygon;
