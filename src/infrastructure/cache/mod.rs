mod noop;
mod redis;

pub use noop::*;
pub use redis::*;
