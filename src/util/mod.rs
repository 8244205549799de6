pub mod random;

pub use random::{Entropy, Random, Record, Replay};
