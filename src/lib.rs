pub mod baseline;
pub mod cache;
pub mod eval;
pub mod map;
pub mod skiplist;
pub mod tree;
pub mod util;
