//! Prelude module for Horizon SwitchPanel.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_switchpanel::prelude::*;
//! ```
//!
//! This provides access to:
//! - Panel and items (`SwitchPanel`, `SwitchItem`, `Orientation`)
//! - Measurement plumbing (`MeasurementSource`, `StaticMeasurements`, `Unmeasured`)
//! - Partition primitives (`Partition`, `partition`, `DEFAULT_TRIGGER_RESERVE`)
//! - Render-surface views (`Selector`, `OverflowGroup`, `Pane`)
//! - Signal/slot system (`Signal`, `ConnectionId`, `ConnectionGuard`)

// ============================================================================
// Panel and Items
// ============================================================================

pub use crate::item::SwitchItem;
pub use crate::orientation::Orientation;
pub use crate::panel::SwitchPanel;

// ============================================================================
// Measurement
// ============================================================================

pub use crate::measure::{MeasurementSource, StaticMeasurements, Unmeasured};
pub use crate::width_cache::HeaderWidthCache;

// ============================================================================
// Overflow Partitioning
// ============================================================================

pub use crate::overflow::{DEFAULT_TRIGGER_RESERVE, Partition, partition};

// ============================================================================
// Render Surface
// ============================================================================

pub use crate::surface::{OverflowGroup, OverflowSelector, Pane, Selector};

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use horizon_switchpanel_core::{ConnectionGuard, ConnectionId, Signal};
