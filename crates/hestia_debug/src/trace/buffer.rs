//! Ring buffer for trace records.
//!
//! Provides a fixed-size buffer that stores the most recent trace records,
//! indexed by inference pass for queries.

use std::collections::{HashMap, VecDeque};

use super::record::{TraceEvent, TraceRecord};

/// Default buffer capacity in records.
pub const DEFAULT_BUFFER_SIZE: usize = 10_000;

// =============================================================================
// Trace Buffer
// =============================================================================

/// A ring buffer for storing trace records.
///
/// Maintains a fixed maximum size, discarding oldest records when full.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    /// The records, oldest first.
    records: VecDeque<TraceRecord>,
    /// Maximum number of records to store.
    max_size: usize,
    /// Next record ID to assign.
    next_id: u64,
    /// Pass index: maps pass number to the number of records it holds.
    pass_index: Vec<(u64, usize)>,
}

impl TraceBuffer {
    /// Creates a new trace buffer with the given maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
            pass_index: Vec::new(),
        }
    }

    /// Pushes a new event to the buffer.
    ///
    /// Returns the assigned record ID.
    pub fn push(&mut self, pass: u64, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        match self.pass_index.last_mut() {
            Some((p, count)) if *p == pass => *count += 1,
            _ => self.pass_index.push((pass, 1)),
        }

        self.records
            .push_back(TraceRecord::new(id, pass, timestamp_ns, event));

        while self.records.len() > self.max_size {
            self.records.pop_front();
            if let Some((_, count)) = self.pass_index.first_mut() {
                *count -= 1;
                if *count == 0 {
                    self.pass_index.remove(0);
                }
            }
        }

        id
    }

    /// Returns the number of records in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clears all records from the buffer.
    pub fn clear(&mut self) {
        self.records.clear();
        self.pass_index.clear();
        // next_id stays monotonic across clears
    }

    /// Returns an iterator over all records.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns the most recently pushed record.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// Returns records for a specific pass.
    #[must_use]
    pub fn records_for_pass(&self, pass: u64) -> Vec<&TraceRecord> {
        self.records.iter().filter(|r| r.pass == pass).collect()
    }

    /// Returns the most recent N records.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Returns records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<&TraceRecord>
    where
        F: Fn(&TraceRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Returns records of a specific event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.filter(|r| r.event_type() == event_type)
    }

    /// Returns all distinct pass numbers in the buffer, oldest first.
    #[must_use]
    pub fn passes(&self) -> Vec<u64> {
        self.pass_index.iter().map(|(p, _)| *p).collect()
    }

    /// Returns statistics about the buffer.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let mut event_counts = HashMap::new();
        for record in &self.records {
            *event_counts.entry(record.event_type()).or_insert(0) += 1;
        }

        TraceBufferStats {
            record_count: self.records.len(),
            max_size: self.max_size,
            oldest_pass: self.records.front().map(|r| r.pass),
            newest_pass: self.records.back().map(|r| r.pass),
            pass_count: self.pass_index.len(),
            event_counts,
        }
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

// =============================================================================
// Buffer Statistics
// =============================================================================

/// Statistics about a trace buffer.
#[derive(Clone, Debug)]
pub struct TraceBufferStats {
    /// Number of records currently in buffer.
    pub record_count: usize,
    /// Maximum buffer size.
    pub max_size: usize,
    /// Oldest pass in buffer.
    pub oldest_pass: Option<u64>,
    /// Newest pass in buffer.
    pub newest_pass: Option<u64>,
    /// Number of distinct passes.
    pub pass_count: usize,
    /// Count of each event type.
    pub event_counts: HashMap<&'static str, usize>,
}

// =============================================================================
// Tests
// =============================================================================
