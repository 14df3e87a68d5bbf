mod office;

pub use office::*;
