//! Bounded-buffer byte streaming shared by `save` and `copy_file`.

use std::io::{self, Read, Write};

/// Which side of a copy failed.
#[derive(Debug)]
pub(crate) enum StreamError {
    Read(io::Error),
    Write(io::Error),
}

/// Streams `reader` into `writer` through a buffer of `buffer_size` bytes, then flushes.
///
/// Returns the number of bytes copied. Bytes already written before a failure stay written.
pub(crate) fn copy_stream<R, W>(
    reader: &mut R,
    writer: &mut W,
    buffer_size: usize,
) -> Result<u64, StreamError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut total: u64 = 0;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(StreamError::Read(e)),
        };

        writer
            .write_all(&buffer[..read])
            .map_err(StreamError::Write)?;
        total += read as u64;
    }

    writer.flush().map_err(StreamError::Write)?;
    Ok(total)
}
