pub mod constants;
mod core;
mod enumerator;
mod state;

pub use self::core::Assignment;
pub use enumerator::{Assignments, permutation_count};

#[cfg(test)]
mod tests;
