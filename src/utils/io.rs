/// File plumbing with transparent gzip support
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const BUFFER_SIZE: usize = 1 << 20;

pub fn is_gzip_path(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Open a dump for buffered reading, decompressing `.gz` files
pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if is_gzip_path(path) {
        let decoder = MultiGzDecoder::new(BufReader::new(file));
        Ok(Box::new(BufReader::with_capacity(BUFFER_SIZE, decoder)))
    } else {
        Ok(Box::new(BufReader::with_capacity(BUFFER_SIZE, file)))
    }
}

/// Buffered output file, optionally gzip-encoded.
///
/// Call [`OutputSink::finish`] once writing is done; it flushes the buffer
/// and, for gzip, writes the stream trailer.
pub enum OutputSink {
    Plain(BufWriter<File>),
    Gzip(BufWriter<GzEncoder<File>>),
}

impl OutputSink {
    pub fn create(path: &Path, compress: bool) -> io::Result<Self> {
        let file = File::create(path)?;
        if compress {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(Self::Gzip(BufWriter::with_capacity(BUFFER_SIZE, encoder)))
        } else {
            Ok(Self::Plain(BufWriter::with_capacity(BUFFER_SIZE, file)))
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Plain(mut writer) => writer.flush(),
            Self::Gzip(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?.flush()
            }
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(writer) => writer.write(buf),
            Self::Gzip(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(writer) => writer.flush(),
            Self::Gzip(writer) => writer.flush(),
        }
    }
}
