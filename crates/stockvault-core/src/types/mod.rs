//! 기본 타입 정의.

pub mod chunk;
pub mod group;
pub mod params;
pub mod series;
pub mod symbol;

pub use chunk::*;
pub use group::*;
pub use params::*;
pub use series::*;
pub use symbol::*;
