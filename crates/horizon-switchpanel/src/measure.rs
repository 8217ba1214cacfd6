//! Measurement seam between a panel and its host layout.
//!
//! The panel never reads host geometry directly. It owns a
//! [`MeasurementSource`] capability and queries it at well-defined points:
//! the container width on every horizontal recompute, the header label
//! widths once (see [`crate::HeaderWidthCache`]).

use parking_lot::Mutex;

/// Capability for querying host layout measurements.
///
/// Both queries answer `None` until the host has realized the corresponding
/// nodes; a panel facing an unready source simply keeps every selector
/// visible and tries again on the next layout event.
pub trait MeasurementSource: Send + Sync {
    /// Current inner width of the selector container, if laid out.
    ///
    /// Queried live on every horizontal recompute, so container resizes are
    /// picked up without re-measuring labels.
    fn container_width(&self) -> Option<f32>;

    /// Widths of the rendered header labels, in item order, if laid out.
    ///
    /// Queried until the first complete answer, which is then cached for the
    /// panel's lifetime (or until explicitly invalidated).
    fn header_widths(&self) -> Option<Vec<f32>>;
}

/// A measurement source that never answers.
///
/// Suitable for vertical panels and hosts that do not measure; a panel fed
/// from this source keeps all selectors visible forever.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unmeasured;

impl MeasurementSource for Unmeasured {
    fn container_width(&self) -> Option<f32> {
        None
    }

    fn header_widths(&self) -> Option<Vec<f32>> {
        None
    }
}

/// Shared, settable measurements for hosts that compute widths themselves.
///
/// The host keeps a clone of the `Arc` it hands to the panel and writes fresh
/// values whenever its layout changes; the panel reads them on its next
/// transition. Passing `None` models nodes that are not laid out (yet, or
/// anymore).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use horizon_switchpanel::{MeasurementSource, StaticMeasurements};
///
/// let measurements = Arc::new(StaticMeasurements::new());
/// measurements.set_container_width(Some(300.0));
/// measurements.set_header_widths(Some(vec![100.0, 120.0]));
///
/// assert_eq!(measurements.container_width(), Some(300.0));
/// assert_eq!(measurements.header_widths(), Some(vec![100.0, 120.0]));
/// ```
#[derive(Debug, Default)]
pub struct StaticMeasurements {
    state: Mutex<MeasurementState>,
}

#[derive(Debug, Default)]
struct MeasurementState {
    container_width: Option<f32>,
    header_widths: Option<Vec<f32>>,
}

impl StaticMeasurements {
    /// Create a source with no measurements available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the container width, or `None` while the container is not laid out.
    pub fn set_container_width(&self, width: Option<f32>) {
        self.state.lock().container_width = width;
    }

    /// Publish the header label widths, or `None` while the labels are not laid out.
    pub fn set_header_widths(&self, widths: Option<Vec<f32>>) {
        self.state.lock().header_widths = widths;
    }
}

impl MeasurementSource for StaticMeasurements {
    fn container_width(&self) -> Option<f32> {
        self.state.lock().container_width
    }

    fn header_widths(&self) -> Option<Vec<f32>> {
        self.state.lock().header_widths.clone()
    }
}

// Ensure the provided sources satisfy the capability bounds
static_assertions::assert_impl_all!(Unmeasured: Send, Sync);
static_assertions::assert_impl_all!(StaticMeasurements: Send, Sync);
