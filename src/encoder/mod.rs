//! MSI barcode rendering modules

/// Width-table pattern renderer
pub mod msi_encoder;

pub use msi_encoder::MsiEncoder;
