mod catalog;
mod layout;
mod piece;
mod placement;
mod slab;
mod zone;

#[doc(inline)]
pub use catalog::SlabCatalog;

#[doc(inline)]
pub use layout::SlabLayout;

#[doc(inline)]
pub use piece::Piece;

#[doc(inline)]
pub use piece::UnitPiece;

#[doc(inline)]
pub use piece::UnplacedPiece;

#[doc(inline)]
pub use piece::UnplacedReason;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use slab::Slab;

#[doc(inline)]
pub use slab::SlabStatus;

#[doc(inline)]
pub use zone::Zone;

#[doc(inline)]
pub use zone::ZoneId;
