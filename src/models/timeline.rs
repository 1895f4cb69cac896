//! Execution timeline (Gantt chart) model and recorder.
//!
//! A timeline is an ordered sequence of half-open `[start, end)` segments,
//! each naming the process that held the processor or marking it idle.
//!
//! # Invariant
//! Segments are contiguous and non-overlapping and cover `[0, makespan)`.
//! Any gap between dispatches is represented by an explicit idle segment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What occupied the processor during a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// A process, by ID.
    Process(String),
    /// No process was ready.
    Idle,
}

impl Slot {
    /// Process ID, or `None` for idle.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Slot::Process(id) => Some(id),
            Slot::Idle => None,
        }
    }

    /// Whether this is an idle slot.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Slot::Idle)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Process(id) => f.write_str(id),
            Slot::Idle => f.write_str("Idle"),
        }
    }
}

/// A contiguous interval during which one process (or idle) held the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Occupant of the processor.
    pub slot: Slot,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl GanttSegment {
    /// Creates a process segment.
    pub fn process(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            slot: Slot::Process(id.into()),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            slot: Slot::Idle,
            start,
            end,
        }
    }

    /// Segment length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// A complete execution timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in time order.
    pub segments: Vec<GanttSegment>,
}

impl Timeline {
    /// End of the last segment (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total non-idle time.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.slot.is_idle())
            .map(GanttSegment::duration)
            .sum()
    }

    /// Total idle time.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.slot.is_idle())
            .map(GanttSegment::duration)
            .sum()
    }

    /// All segments run by the given process, in time order.
    pub fn segments_for(&self, process_id: &str) -> Vec<&GanttSegment> {
        self.segments
            .iter()
            .filter(|s| s.slot.process_id() == Some(process_id))
            .collect()
    }

    /// Whether segments start at 0, are non-empty, and abut one another.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = 0;
        for seg in &self.segments {
            if seg.start != expected || seg.end <= seg.start {
                return false;
            }
            expected = seg.end;
        }
        true
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Timeline {
    /// Renders as `P1 [0-5] Idle [5-6] P2 [6-9]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{} [{}-{}]", seg.slot, seg.start, seg.end)?;
        }
        Ok(())
    }
}

/// Accumulates dispatch events into a contiguous [`Timeline`].
///
/// Gaps between the recorded end and a new event's start are filled with
/// idle. Adjacent idle spans always coalesce; adjacent spans of the same
/// process coalesce only when the event asks for it.
#[derive(Debug, Clone, Default)]
pub struct TimelineRecorder {
    segments: Vec<GanttSegment>,
}

impl TimelineRecorder {
    /// Creates an empty recorder starting at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// End of the recorded span.
    pub fn end(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Records `[start, end)` as its own segment.
    pub fn record(&mut self, process_id: &str, start: i64, end: i64) {
        self.push(Slot::Process(process_id.to_string()), start, end, false);
    }

    /// Records `[start, end)`, extending the previous segment if it is the
    /// same process and ends exactly at `start`.
    pub fn extend(&mut self, process_id: &str, start: i64, end: i64) {
        self.push(Slot::Process(process_id.to_string()), start, end, true);
    }

    /// Records idle time `[start, end)`.
    pub fn idle(&mut self, start: i64, end: i64) {
        self.push(Slot::Idle, start, end, true);
    }

    /// Consumes the recorder.
    pub fn finish(self) -> Timeline {
        Timeline {
            segments: self.segments,
        }
    }

    fn push(&mut self, slot: Slot, start: i64, end: i64, merge: bool) {
        if end <= start {
            return;
        }
        let recorded_end = self.end();
        if start > recorded_end {
            self.push(Slot::Idle, recorded_end, start, true);
        }
        if merge {
            if let Some(last) = self.segments.last_mut() {
                if last.slot == slot && last.end == start {
                    last.end = end;
                    return;
                }
            }
        }
        self.segments.push(GanttSegment { slot, start, end });
    }
}
