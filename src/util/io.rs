use std::fs::File;
use std::io;

use tracing::debug;

/// Open a resolved path for reading. The returned handle is owned by the
/// caller and released when dropped.
pub fn open_file(path: &str) -> io::Result<File> {
    debug!("opening {}", path);
    File::open(path)
}
