//! Copy a byte stream up to a terminator sequence.

use std::io::{ErrorKind, Read, Write};

use crate::error::{ToolboxError, ToolboxResult};

/// How a [`copy_until`] call came to a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The terminator was matched; its bytes are the tail of what was written.
    TerminatorFound,
    /// The source ran out before the terminator appeared; every byte read was
    /// still written to the sink.
    SourceExhausted,
}

/// Copy `source` into `sink` one byte at a time, stopping once a contiguous
/// run of bytes case-sensitively matching `terminator`'s UTF-8 form has been
/// written.
///
/// Matching tracks a single position into the terminator and resets it to
/// zero on any mismatch, without retrying the mismatched byte as a fresh
/// start. Terminators with repeated internal structure can therefore be
/// passed over when a partial match overlaps a real one.
pub fn copy_until<R, W>(
    source: &mut R,
    sink: &mut W,
    terminator: &str,
) -> ToolboxResult<CopyOutcome>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    if terminator.is_empty() {
        return Err(ToolboxError::EmptyTerminator);
    }
    let end = terminator.as_bytes();
    let mut matched = 0usize;
    let mut copied = 0u64;
    let mut byte = [0u8; 1];
    loop {
        let read = match source.read(&mut byte) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if read == 0 {
            log::trace!("source exhausted after {copied} bytes without the terminator");
            return Ok(CopyOutcome::SourceExhausted);
        }
        sink.write_all(&byte)?;
        copied += 1;
        matched = if byte[0] == end[matched] { matched + 1 } else { 0 };
        if matched == end.len() {
            log::trace!("terminator matched after {copied} bytes");
            return Ok(CopyOutcome::TerminatorFound);
        }
    }
}
