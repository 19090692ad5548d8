mod io;

pub use io::open_file;
