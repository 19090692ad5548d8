mod absolute;
mod derived;
mod executable;
mod locator;

pub use absolute::to_absolute;
pub use derived::{archive_path, home_path};
pub use executable::executable_path;
pub use locator::{Locator, native_locator};

#[cfg(all(test, unix))]
mod absolute_test;
#[cfg(all(test, not(windows)))]
mod derived_test;
