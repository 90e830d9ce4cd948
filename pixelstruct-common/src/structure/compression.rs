use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Wrap `bytes` in a gzip (RFC 1952) stream at the default compression level.
pub fn gzip(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(bytes.len() / 2), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}
