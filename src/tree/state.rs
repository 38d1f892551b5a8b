//! Truncation bookkeeping for a single scan

use serde::Serialize;

use super::config::ScanLimits;
use super::node::NodeKind;

/// Which cap stopped the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationCause {
    /// The admitted-entry cap was reached
    EntryLimit,
    /// Too many entries were examined, admitted or not
    ScanBudget,
}

impl TruncationCause {
    /// Human-readable notice shown after the summary.
    pub fn notice(self, limits: &ScanLimits) -> String {
        match self {
            TruncationCause::EntryLimit => format!(
                "Output truncated: reached the limit of {} entries",
                limits.max_entries
            ),
            TruncationCause::ScanBudget => format!(
                "Output truncated: scan budget of {} examined entries exhausted",
                limits.scan_budget
            ),
        }
    }
}

/// Counters and truncation flag shared by one traversal.
///
/// Once truncated, the state refuses every further examination and
/// admission, and the recorded cause never changes.
#[derive(Debug, Clone)]
pub struct ScanState {
    limits: ScanLimits,
    examined: usize,
    dir_count: usize,
    file_count: usize,
    truncated: Option<TruncationCause>,
}

impl ScanState {
    pub fn new(limits: ScanLimits) -> Self {
        Self {
            limits,
            examined: 0,
            dir_count: 0,
            file_count: 0,
            truncated: None,
        }
    }

    /// Count one candidate about to be examined.
    /// Returns false when the scan budget is already spent.
    pub fn examine(&mut self) -> bool {
        if self.is_truncated() {
            return false;
        }
        if self.examined >= self.limits.scan_budget {
            self.trip(TruncationCause::ScanBudget);
            return false;
        }
        self.examined += 1;
        true
    }

    /// Reserve a slot for an entry that passed every filter.
    /// Returns false when the entry cap is already full.
    pub fn admit(&mut self, kind: NodeKind) -> bool {
        if self.is_truncated() {
            return false;
        }
        if self.admitted() >= self.limits.max_entries {
            self.trip(TruncationCause::EntryLimit);
            return false;
        }
        match kind {
            NodeKind::Directory => self.dir_count += 1,
            NodeKind::File => self.file_count += 1,
            NodeKind::Root => {}
        }
        true
    }

    fn trip(&mut self, cause: TruncationCause) {
        if self.truncated.is_none() {
            tracing::debug!(
                ?cause,
                examined = self.examined,
                admitted = self.admitted(),
                "scan truncated"
            );
            self.truncated = Some(cause);
        }
    }

    pub fn limits(&self) -> &ScanLimits {
        &self.limits
    }

    pub fn examined(&self) -> usize {
        self.examined
    }

    pub fn admitted(&self) -> usize {
        self.dir_count + self.file_count
    }

    pub fn dir_count(&self) -> usize {
        self.dir_count
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated.is_some()
    }

    pub fn truncation(&self) -> Option<TruncationCause> {
        self.truncated
    }

    /// Notice for the cause that stopped the scan, if any.
    pub fn notice(&self) -> Option<String> {
        self.truncated.map(|cause| cause.notice(&self.limits))
    }
}
