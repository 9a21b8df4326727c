mod cmp;
mod eq;

pub use cmp::compare;
pub use eq::equivalent;
