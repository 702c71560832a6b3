//! Line framing for JSON-RPC over stdio.
//!
//! Malformed lines (not UTF-8, or longer than the limit) come out as frames
//! rather than stream errors, so one bad line never ends the stream. Only
//! I/O errors are errors.

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;

/// Longest accepted message, excluding the newline.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Line(String),
    NotUtf8,
    TooLong,
}

#[derive(Debug)]
pub struct JsonLineCodec {
    max_length: usize,
    // Set after an oversized partial line; bytes are dropped up to the next newline.
    discarding: bool,
}

impl JsonLineCodec {
    pub fn new() -> Self {
        Self::with_max_length(DEFAULT_MAX_LINE_LENGTH)
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length,
            discarding: false,
        }
    }
}

impl Default for JsonLineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for JsonLineCodec {
    type Item = Frame;
    type Error = std::io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Frame>, Self::Error> {
        loop {
            let newline = buf.iter().position(|b| *b == b'\n');

            if self.discarding {
                match newline {
                    Some(index) => {
                        buf.advance(index + 1);
                        self.discarding = false;
                        continue;
                    }
                    None => {
                        buf.clear();
                        return Ok(None);
                    }
                }
            }

            return Ok(match newline {
                Some(index) if index > self.max_length => {
                    buf.advance(index + 1);
                    Some(Frame::TooLong)
                }
                Some(index) => {
                    let line = buf.split_to(index + 1);
                    Some(to_frame(&line[..index]))
                }
                None if buf.len() > self.max_length => {
                    buf.clear();
                    self.discarding = true;
                    Some(Frame::TooLong)
                }
                None => None,
            });
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Frame>, Self::Error> {
        if let Some(frame) = self.decode(buf)? {
            return Ok(Some(frame));
        }
        if self.discarding || buf.is_empty() {
            buf.clear();
            return Ok(None);
        }
        let rest = buf.split_to(buf.len());
        Ok(Some(to_frame(&rest)))
    }
}

fn to_frame(bytes: &[u8]) -> Frame {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(line) => Frame::Line(line.to_string()),
        Err(_) => Frame::NotUtf8,
    }
}
