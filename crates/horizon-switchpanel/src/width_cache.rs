//! Measure-once cache for header label widths.

use crate::measure::MeasurementSource;

/// Caches the header label widths from the first complete measurement.
///
/// Label widths are taken from the measurement source exactly once and reused
/// for every later partition; only the container width is re-queried live.
/// The trade-off is deliberate: one layout read per panel lifetime, at the
/// cost of stale widths when labels change after the fact. Hosts that
/// restyle or relabel can call [`invalidate`](Self::invalidate) to force a
/// fresh measurement on the next layout event.
///
/// The cache is never partially filled: it populates only when the source
/// answers for **both** the container and the header labels, because label
/// widths measured outside a laid-out container are meaningless.
#[derive(Debug, Default)]
pub struct HeaderWidthCache {
    /// Cached widths in item order; `None` until the first complete measurement.
    widths: Option<Vec<f32>>,
}

impl HeaderWidthCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a measurement has been captured.
    pub fn is_populated(&self) -> bool {
        self.widths.is_some()
    }

    /// Get the cached widths, empty while unpopulated.
    pub fn widths(&self) -> &[f32] {
        self.widths.as_deref().unwrap_or(&[])
    }

    /// Return the cached widths, measuring first if the cache is empty.
    ///
    /// An empty cache populates only when the source answers both queries;
    /// otherwise this returns the empty slice and the cache stays empty so a
    /// later event can try again.
    pub fn ensure_measured(&mut self, source: &dyn MeasurementSource) -> &[f32] {
        if self.widths.is_none()
            && source.container_width().is_some()
            && let Some(widths) = source.header_widths()
        {
            tracing::debug!(
                target: "horizon_switchpanel::width_cache",
                count = widths.len(),
                "header widths measured"
            );
            self.widths = Some(widths);
        }
        self.widths.as_deref().unwrap_or(&[])
    }

    /// Drop the cached widths so the next layout event re-measures.
    pub fn invalidate(&mut self) {
        if self.widths.take().is_some() {
            tracing::debug!(
                target: "horizon_switchpanel::width_cache",
                "header width cache invalidated"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{StaticMeasurements, Unmeasured};

    #[test]
    fn test_populates_when_both_handles_answer() {
        let source = StaticMeasurements::new();
        source.set_container_width(Some(300.0));
        source.set_header_widths(Some(vec![100.0, 120.0, 90.0]));

        let mut cache = HeaderWidthCache::new();
        assert_eq!(cache.ensure_measured(&source), &[100.0, 120.0, 90.0]);
        assert!(cache.is_populated());
    }

    #[test]
    fn test_stays_empty_without_container() {
        let source = StaticMeasurements::new();
        source.set_header_widths(Some(vec![100.0, 120.0]));

        let mut cache = HeaderWidthCache::new();
        assert!(cache.ensure_measured(&source).is_empty());
        assert!(!cache.is_populated());
    }

    #[test]
    fn test_stays_empty_without_headers() {
        let source = StaticMeasurements::new();
        source.set_container_width(Some(300.0));

        let mut cache = HeaderWidthCache::new();
        assert!(cache.ensure_measured(&source).is_empty());
        assert!(!cache.is_populated());
    }

    #[test]
    fn test_stays_empty_when_source_never_answers() {
        let mut cache = HeaderWidthCache::new();
        assert!(cache.ensure_measured(&Unmeasured).is_empty());
        assert!(!cache.is_populated());
    }

    #[test]
    fn test_measures_only_once() {
        let source = StaticMeasurements::new();
        source.set_container_width(Some(300.0));
        source.set_header_widths(Some(vec![100.0]));

        let mut cache = HeaderWidthCache::new();
        cache.ensure_measured(&source);

        // Later host changes are ignored while the cache is populated
        source.set_header_widths(Some(vec![999.0]));
        assert_eq!(cache.ensure_measured(&source), &[100.0]);
    }

    #[test]
    fn test_invalidate_allows_remeasure() {
        let source = StaticMeasurements::new();
        source.set_container_width(Some(300.0));
        source.set_header_widths(Some(vec![100.0]));

        let mut cache = HeaderWidthCache::new();
        cache.ensure_measured(&source);

        source.set_header_widths(Some(vec![80.0, 90.0]));
        cache.invalidate();
        assert!(!cache.is_populated());
        assert_eq!(cache.ensure_measured(&source), &[80.0, 90.0]);
    }

    #[test]
    fn test_widths_empty_until_populated() {
        let cache = HeaderWidthCache::new();
        assert!(cache.widths().is_empty());
    }
}
