pub mod error;
pub mod path;
pub mod resolve;
pub mod util;
