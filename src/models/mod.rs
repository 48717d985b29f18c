pub mod bit_row;
pub mod msi_code;
pub mod point;

pub use bit_row::BitRow;
pub use msi_code::MsiCode;
pub use point::Point;
