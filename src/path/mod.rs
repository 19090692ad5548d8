mod buffer;
mod join;
mod split;

pub use buffer::{MAX_PATH_LEN, PathBuffer};
pub use join::join;
pub use split::{SEP, basename, dirname};

#[cfg(all(test, not(windows)))]
mod split_test;
