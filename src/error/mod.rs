mod error;

pub use error::{CapacityError, PathError};
