//! Diagnostic trace of a conversion.
//!
//! The converter reports every byte it consumes and every AND gate it
//! reconstructs to a [`Trace`] sink. Tracing is advisory: sinks can not fail
//! and never see the DIMACS output.

use crate::aig::AndGate;
use crate::err::Position;

/// `log` targets used by this crate, so output can be narrowed with
/// e.g. `RUST_LOG=gate=trace`.
pub mod targets {
    pub const CURSOR: &str = "cursor";
    pub const GATE: &str = "gate";
    pub const EMIT: &str = "emit";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// A read from the input. `byte` is `None` at end of input.
    Byte { pos: Position, byte: Option<u8> },
    Gate(AndGate),
}

pub trait Trace {
    fn event(&mut self, event: TraceEvent);
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn event(&mut self, _event: TraceEvent) {}
}

/// Forwards events to `log::trace!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn event(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::Byte { pos, byte } => {
                // -1 marks end of input.
                let value = byte.map_or(-1, i32::from);
                log::trace!(target: targets::CURSOR, "next:{}:{}: {}", pos.line, pos.column, value);
            }
            TraceEvent::Gate(g) => {
                log::trace!(target: targets::GATE, "and: {} {} {}", g.lhs, g.rhs0, g.rhs1);
            }
        }
    }
}

impl Trace for Vec<TraceEvent> {
    fn event(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn event(&mut self, event: TraceEvent) {
        (**self).event(event);
    }
}
