//! Responsive switch-panel implementation.
//!
//! [`SwitchPanel`] is the coordinating type of this crate: it owns the item
//! collection, drives header measurement through a [`MeasurementSource`],
//! and keeps the visible/overflow partition current across layout events.

use std::sync::Arc;

use horizon_switchpanel_core::Signal;

use crate::item::SwitchItem;
use crate::measure::MeasurementSource;
use crate::orientation::Orientation;
use crate::overflow::{DEFAULT_TRIGGER_RESERVE, partition};
use crate::surface::{OverflowGroup, OverflowSelector, Pane, Selector};
use crate::width_cache::HeaderWidthCache;

/// A headless responsive content-switch panel.
///
/// SwitchPanel owns an ordered collection of items and decides which of their
/// selectors fit the measured container and which relocate to an overflow
/// group. It renders nothing itself: a host embeds the panel, answers its
/// measurement queries through a [`MeasurementSource`], forwards layout
/// events, and draws whatever the view methods describe. It supports:
/// - Horizontal strips with measured selector overflow
/// - Vertical strips, which never overflow
/// - Headerless items that keep their pane but are skipped in the strip
/// - Wholesale item replacement driven by the owning host
///
/// Items are identified by position. Replacing the collection via
/// [`SwitchPanel::on_items_changed`] carries no identity across the swap:
/// active flags, selection handlers, and cached header widths all line up
/// by index.
///
/// # Signals
///
/// - `partition_changed()`: Emitted when the visible/overflow split changes
pub struct SwitchPanel<C, H> {
    /// Ordered item collection, replaced wholesale by the host.
    items: Vec<SwitchItem<C, H>>,

    /// Strip direction (vertical strips never overflow).
    orientation: Orientation,

    /// Width reserved for the overflow trigger control.
    trigger_reserve: f32,

    /// Measure-once header width cache.
    cache: HeaderWidthCache,

    /// Indices of items whose selectors fit the strip, in item order.
    visible: Vec<usize>,

    /// Indices of items relocated to the overflow group, in item order.
    overflow: Vec<usize>,

    /// Host-provided measurement handles.
    source: Arc<dyn MeasurementSource>,

    /// Signal emitted when the visible/overflow split changes.
    pub partition_changed: Signal<()>,
}

impl<C, H> SwitchPanel<C, H> {
    /// Create a panel over `items`, measuring through `source`.
    ///
    /// Every item starts visible; the partition is first computed when the
    /// host reports attachment via [`SwitchPanel::on_attached_to_layout`].
    pub fn new(items: Vec<SwitchItem<C, H>>, source: Arc<dyn MeasurementSource>) -> Self {
        let visible = (0..items.len()).collect();
        Self {
            items,
            orientation: Orientation::default(),
            trigger_reserve: DEFAULT_TRIGGER_RESERVE,
            cache: HeaderWidthCache::new(),
            visible,
            overflow: Vec::new(),
            source,
            partition_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Item Access
    // =========================================================================

    /// Get the item collection in order.
    pub fn items(&self) -> &[SwitchItem<C, H>] {
        &self.items
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the panel has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // Panel Properties
    // =========================================================================

    /// Get the strip orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the strip orientation.
    ///
    /// Switching to vertical releases every selector back into the strip;
    /// switching back to horizontal repartitions against the cached widths.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.repartition();
        }
    }

    /// Set the strip orientation using builder pattern.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Get the width reserved for the overflow trigger control.
    pub fn trigger_reserve(&self) -> f32 {
        self.trigger_reserve
    }

    /// Set the width reserved for the overflow trigger control.
    ///
    /// Negative values are clamped to zero.
    pub fn set_trigger_reserve(&mut self, reserve: f32) {
        let reserve = reserve.max(0.0);
        if self.trigger_reserve != reserve {
            self.trigger_reserve = reserve;
            self.repartition();
        }
    }

    /// Set the trigger reserve using builder pattern.
    pub fn with_trigger_reserve(mut self, reserve: f32) -> Self {
        self.trigger_reserve = reserve.max(0.0);
        self
    }

    /// Check whether header widths have been captured.
    pub fn is_measured(&self) -> bool {
        self.cache.is_populated()
    }

    /// Discard cached header widths so the next recompute measures afresh.
    ///
    /// Call this when the host knows selector extents changed, e.g. after a
    /// font swap. Container width is never cached, so plain resizes only
    /// need [`SwitchPanel::refresh`].
    pub fn invalidate_measurements(&mut self) {
        self.cache.invalidate();
    }

    // =========================================================================
    // Layout Events
    // =========================================================================

    /// Notify the panel that the host attached it to a live layout.
    ///
    /// Horizontal panels measure and partition immediately; when the host
    /// cannot answer the container query yet, the all-visible seed stays in
    /// place until the next event. Vertical panels skip measurement
    /// entirely.
    pub fn on_attached_to_layout(&mut self) {
        tracing::trace!(target: "horizon_switchpanel::panel", "attached to layout");
        if self.orientation.is_horizontal() {
            self.recompute();
        }
    }

    /// Replace the item collection and orientation wholesale.
    ///
    /// The previous items are dropped along with their connections; cached
    /// header widths are kept and line up with the new items by position.
    /// When the counts differ, the shorter run bounds the partition, so new
    /// items beyond the cached widths stay out of the strip until the host
    /// calls [`SwitchPanel::invalidate_measurements`].
    ///
    /// A fresh partition is always committed, so a collection that now fits
    /// releases any previously overflowed selectors.
    pub fn on_items_changed(&mut self, items: Vec<SwitchItem<C, H>>, orientation: Orientation) {
        tracing::trace!(
            target: "horizon_switchpanel::panel",
            count = items.len(),
            ?orientation,
            "items changed"
        );
        self.items = items;
        self.orientation = orientation;
        self.repartition();
    }

    /// Recompute the partition against current measurements.
    ///
    /// Container width is re-read from the host on every recompute, so this
    /// is the hook for container resizes; header widths come from the
    /// measure-once cache.
    pub fn refresh(&mut self) {
        self.repartition();
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Request activation of the item at `index`.
    ///
    /// Emits the item's `select_requested` signal. Out-of-range indices are
    /// ignored; the panel itself never mutates active flags, the owning host
    /// rebuilds the collection with the new active item instead.
    pub fn activate(&self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.items[index].select_requested.emit(());
    }

    // =========================================================================
    // Partition State
    // =========================================================================

    /// Indices of items whose selectors fit the strip, in item order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Indices of items relocated to the overflow group, in item order.
    pub fn overflow_indices(&self) -> &[usize] {
        &self.overflow
    }

    /// Number of selectors currently in the strip.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Number of selectors currently in the overflow group.
    pub fn overflow_len(&self) -> usize {
        self.overflow.len()
    }

    /// Check whether any selector is currently overflowed.
    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    // =========================================================================
    // Render Surface
    // =========================================================================

    /// Describe the selectors that fit the strip, in item order.
    ///
    /// Headerless items are skipped: they keep their pane and their
    /// position, but there is nothing to label a selector with.
    pub fn visible_selectors(&self) -> Vec<Selector<'_, H>> {
        self.visible
            .iter()
            .filter_map(|&index| {
                let item = &self.items[index];
                item.header().map(|label| Selector {
                    index,
                    label,
                    active: item.is_active(),
                })
            })
            .collect()
    }

    /// Describe the overflow group, or `None` when every selector fits.
    ///
    /// Overflowed headerless items keep an unlabeled entry, so hosts can
    /// still offer them for activation.
    pub fn overflow_group(&self) -> Option<OverflowGroup<'_, H>> {
        if self.overflow.is_empty() {
            return None;
        }

        let entries = self
            .overflow
            .iter()
            .map(|&index| OverflowSelector {
                index,
                label: self.items[index].header(),
            })
            .collect();
        Some(OverflowGroup { entries })
    }

    /// Describe every pane in item order, regardless of the partition.
    ///
    /// Selector overflow never hides content: an overflowed item's pane is
    /// still presented when that item is active.
    pub fn panes(&self) -> Vec<Pane<'_, C>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| Pane {
                index,
                content: item.content(),
                active: item.is_active(),
            })
            .collect()
    }

    // =========================================================================
    // Recompute Internals
    // =========================================================================

    /// Recompute if the strip is horizontal and measurable, otherwise fall
    /// back to every selector visible.
    fn repartition(&mut self) {
        if self.orientation.is_horizontal() && self.recompute() {
            return;
        }
        self.reset_to_all_visible();
    }

    /// Measure and partition. Returns false when the host cannot answer the
    /// container query, leaving the current partition untouched.
    fn recompute(&mut self) -> bool {
        let Some(container_width) = self.source.container_width() else {
            return false;
        };

        let widths = self.cache.ensure_measured(self.source.as_ref());
        if widths.is_empty() {
            // An unmeasured strip never overflows
            let count = self.items.len();
            self.commit((0..count).collect(), Vec::new());
            return true;
        }

        // Cached widths line up with items by position; the shorter run
        // bounds the partition after a wholesale replacement
        let count = self.items.len().min(widths.len());
        let split = partition(
            (0..count).collect(),
            &widths[..count],
            container_width,
            self.trigger_reserve,
        );
        self.commit(split.visible, split.overflow);
        true
    }

    /// Commit a partition, emitting `partition_changed` only on change.
    fn commit(&mut self, visible: Vec<usize>, overflow: Vec<usize>) {
        if self.visible == visible && self.overflow == overflow {
            return;
        }

        tracing::trace!(
            target: "horizon_switchpanel::panel",
            visible = visible.len(),
            overflow = overflow.len(),
            "partition committed"
        );
        self.visible = visible;
        self.overflow = overflow;
        self.partition_changed.emit(());
    }

    /// Release every selector back into the strip.
    fn reset_to_all_visible(&mut self) {
        let all = (0..self.items.len()).collect();
        self.commit(all, Vec::new());
    }
}

// Ensure SwitchPanel is Send + Sync
static_assertions::assert_impl_all!(SwitchPanel<String, String>: Send, Sync);
