//! Chart aggregate: instance ownership, staleness guard and visual style.
//!
//! Free of `web_sys` so the lifecycle and overlap properties test natively.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
