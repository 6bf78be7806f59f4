/// External (serializable) representations of orders, slabs and packing reports
pub mod ext_repr;

/// All logic for converting external representations into normalized internal ones
pub mod import;

/// All logic for exporting packing runs into external reports
pub mod export;
