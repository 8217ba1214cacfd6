//! Horizon SwitchPanel - a responsive content-switch panel.
//!
//! A switch panel pairs an ordered set of content panes with a strip of
//! clickable selectors. In horizontal orientation the strip is width-aware:
//! selectors that do not fit the measured container are relocated into an
//! overflow group, with room reserved for the overflow trigger control. In
//! vertical orientation the strip never overflows.
//!
//! The library is headless. Painting, hit testing, and layout belong to the
//! host; the panel consumes measurements through an injected
//! [`MeasurementSource`] and publishes its decisions as plain view data
//! ([`SwitchPanel::visible_selectors`], [`SwitchPanel::overflow_group`],
//! [`SwitchPanel::panes`]) after every transition.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use horizon_switchpanel::{Orientation, StaticMeasurements, SwitchItem, SwitchPanel};
//!
//! // The host publishes layout measurements through a shared source.
//! let measurements = Arc::new(StaticMeasurements::new());
//! measurements.set_container_width(Some(300.0));
//! measurements.set_header_widths(Some(vec![150.0, 150.0, 150.0]));
//!
//! let items = vec![
//!     SwitchItem::new("overview pane").with_header("Overview").with_active(true),
//!     SwitchItem::new("traffic pane").with_header("Traffic"),
//!     SwitchItem::new("audience pane").with_header("Audience"),
//! ];
//!
//! let mut panel = SwitchPanel::new(items, measurements.clone())
//!     .with_orientation(Orientation::Horizontal);
//!
//! // First layout pass: measure once, then partition.
//! panel.on_attached_to_layout();
//!
//! assert_eq!(panel.visible_indices(), &[0]);
//! assert_eq!(panel.overflow_indices(), &[1, 2]);
//! ```

pub mod item;
pub mod measure;
pub mod orientation;
pub mod overflow;
pub mod panel;
pub mod prelude;
pub mod surface;
pub mod width_cache;

pub use item::SwitchItem;
pub use measure::{MeasurementSource, StaticMeasurements, Unmeasured};
pub use orientation::Orientation;
pub use overflow::{DEFAULT_TRIGGER_RESERVE, Partition, partition};
pub use panel::SwitchPanel;
pub use surface::{OverflowGroup, OverflowSelector, Pane, Selector};
pub use width_cache::HeaderWidthCache;

// Re-export core types that users need for signal handling
pub use horizon_switchpanel_core::{ConnectionGuard, ConnectionId, Signal};
