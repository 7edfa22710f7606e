pub mod io;

pub use io::{is_gzip_path, open_input, OutputSink};
