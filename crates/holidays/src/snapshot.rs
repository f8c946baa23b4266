//! Immutable, ordered holiday set with logarithmic range queries.

use chrono::NaiveDate;

/// An immutable, sorted, deduplicated set of holiday dates.
///
/// Built once from whatever source the caller chooses (see the workcal-ical
/// crate for the RFC 5545 loader) and never mutated afterwards: refreshing a
/// calendar means building a new snapshot and swapping the reference. Frozen
/// construction is what lets any number of threads query a shared snapshot
/// without synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySnapshot {
    dates: Vec<NaiveDate>,
}

impl HolidaySnapshot {
    /// Builds a snapshot from any collection of dates, sorting and
    /// deduplicating on the way in.
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
        dates.sort_unstable();
        dates.dedup();
        Self { dates }
    }

    /// A snapshot with no holidays at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of holidays in the snapshot.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the snapshot holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Checks whether `date` is a holiday. O(log n).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Counts the holidays in the half-open interval `[start, end)`.
    ///
    /// Returns 0 when `end <= start`. Two binary boundary searches, never a
    /// scan.
    pub fn count_between(&self, start: NaiveDate, end: NaiveDate) -> usize {
        self.between(start, end).len()
    }

    /// Returns the sorted slice of holidays in `[start, end)`; empty when
    /// `end <= start`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> &[NaiveDate] {
        if end <= start {
            return &[];
        }
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d < end);
        &self.dates[lo..hi]
    }

    /// Iterates over all holidays in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Returns the earliest holiday, if any.
    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Returns the latest holiday, if any.
    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

impl FromIterator<NaiveDate> for HolidaySnapshot {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::new(iter)
    }
}
