use std::io;
use std::io::Read;

use crate::err::{Error, Position, Result};
use crate::trace::{NoTrace, Trace, TraceEvent};

/// Byte-at-a-time reader over the input which keeps track of where it is
/// for error messages.
pub struct Cursor<R, T = NoTrace> {
    bytes: io::Bytes<R>,
    pos: Position,
    prev: Option<u8>,
    trace: T,
}

impl<R: Read> Cursor<R, NoTrace> {
    pub fn new(r: R) -> Self {
        Cursor::with_trace(r, NoTrace)
    }
}

impl<R: Read, T: Trace> Cursor<R, T> {
    pub fn with_trace(r: R, trace: T) -> Self {
        Cursor {
            bytes: r.bytes(),
            pos: Position::default(),
            // Pretend a newline came before the input so the first byte
            // lands on line 1.
            prev: Some(b'\n'),
            trace,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    pub fn into_trace(self) -> T {
        self.trace
    }

    /// Next byte, or `None` at end of input.
    pub fn next_byte(&mut self) -> Result<Option<u8>> {
        let b = match self.bytes.next() {
            Some(Ok(b)) => Some(b),
            Some(Err(e)) => return Err(Error::Io(e)),
            None => None,
        };
        if b.is_some() {
            self.pos.column += 1;
            if self.prev == Some(b'\n') {
                self.pos.line += 1;
            }
        }
        self.prev = b;
        self.trace.event(TraceEvent::Byte {
            pos: self.pos,
            byte: b,
        });
        Ok(b)
    }

    /// Like [`Cursor::next_byte`], but running out of input is an error.
    pub fn safe_get(&mut self) -> Result<u8> {
        match self.next_byte()? {
            Some(b) => Ok(b),
            None => Err(Error::UnexpectedEndOfInput(self.pos)),
        }
    }
}
