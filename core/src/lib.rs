pub mod error;
pub mod input;
pub mod solver;

pub use input::TestCase;
pub use solver::{find_secret, Point};
