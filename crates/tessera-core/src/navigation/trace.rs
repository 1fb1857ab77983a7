//! Navigation tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! navigation results.

///
/// NavigationTraceSink
///

pub trait NavigationTraceSink: Send + Sync {
    fn on_event(&self, event: NavigationTraceEvent);
}

///
/// NavigationDirection
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavigationDirection {
    Forward,
    Backward,
}

///
/// NavigationTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavigationTraceEvent {
    /// A forward lookup resolved its target, or a backward iterator was
    /// dropped. Backward scans report on every drop, so `rows` may be zero
    /// for a null key or an iterator that was never polled.
    Scanned {
        direction: NavigationDirection,
        column: &'static str,
        rows: u64,
        matched: u64,
    },

    /// A forward lookup found no target.
    Miss {
        direction: NavigationDirection,
        column: &'static str,
        rows: u64,
    },
}

pub(crate) fn emit(sink: Option<&'static dyn NavigationTraceSink>, event: NavigationTraceEvent) {
    if let Some(sink) = sink {
        sink.on_event(event);
    }
}
