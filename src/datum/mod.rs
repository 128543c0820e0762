pub mod datum;
pub use datum::*;

pub mod tuple;
pub use tuple::*;
