pub mod angles;
pub mod geodesy;
pub mod precision;
pub mod vec;

pub use angles::*;
pub use geodesy::*;
pub use precision::*;
pub use vec::*;
