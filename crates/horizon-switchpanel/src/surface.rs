//! Render-surface views over a [`SwitchPanel`](crate::panel::SwitchPanel).
//!
//! The panel is headless: these types describe what a host should draw
//! without prescribing how. Each view borrows from the panel and is rebuilt
//! on demand, so none of them hold state of their own.

/// A selector rendered directly in the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<'a, H> {
    /// Position of the backing item in the collection.
    pub index: usize,
    /// Header label to draw.
    pub label: &'a H,
    /// Whether the backing item is the active one.
    pub active: bool,
}

/// An entry in the overflow group.
///
/// Unlike strip selectors, overflow entries exist even for headerless items,
/// so hosts can still offer those items for activation. Such entries carry
/// no label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowSelector<'a, H> {
    /// Position of the backing item in the collection.
    pub index: usize,
    /// Header label to draw, if the item has one.
    pub label: Option<&'a H>,
}

/// The overflow group behind the trigger control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowGroup<'a, H> {
    /// Overflowed entries in item order.
    pub entries: Vec<OverflowSelector<'a, H>>,
}

/// A content pane.
///
/// Panes exist for every item regardless of the selector partition; hosts
/// typically draw only the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pane<'a, C> {
    /// Position of the backing item in the collection.
    pub index: usize,
    /// Content to present.
    pub content: &'a C,
    /// Whether this pane belongs to the active item.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::SwitchItem;
    use crate::measure::StaticMeasurements;
    use crate::panel::SwitchPanel;
    use std::sync::Arc;

    fn measured(container: f32, widths: &[f32]) -> Arc<StaticMeasurements> {
        let source = Arc::new(StaticMeasurements::new());
        source.set_container_width(Some(container));
        source.set_header_widths(Some(widths.to_vec()));
        source
    }

    fn labeled(label: &str, active: bool) -> SwitchItem<String, String> {
        SwitchItem::new(format!("{label} pane"))
            .with_header(label.to_string())
            .with_active(active)
    }

    #[test]
    fn test_visible_selectors_in_item_order() {
        let source = measured(400.0, &[100.0, 100.0, 100.0]);
        let items = vec![
            labeled("Overview", true),
            labeled("Traffic", false),
            labeled("Audience", false),
        ];
        let mut panel = SwitchPanel::new(items, source);
        panel.on_attached_to_layout();

        let selectors = panel.visible_selectors();
        assert_eq!(selectors.len(), 3);
        assert_eq!(selectors[0].index, 0);
        assert_eq!(selectors[0].label, "Overview");
        assert!(selectors[0].active);
        assert_eq!(selectors[2].index, 2);
        assert_eq!(selectors[2].label, "Audience");
        assert!(!selectors[2].active);
    }

    #[test]
    fn test_visible_selectors_skip_headerless() {
        let source = measured(400.0, &[100.0, 100.0, 100.0]);
        let items = vec![
            labeled("Overview", true),
            SwitchItem::new("interstitial pane".to_string()),
            labeled("Audience", false),
        ];
        let mut panel = SwitchPanel::new(items, source);
        panel.on_attached_to_layout();

        // All three fit, but only two can be labeled
        assert_eq!(panel.visible_indices(), &[0, 1, 2]);
        let selectors = panel.visible_selectors();
        assert_eq!(selectors.len(), 2);
        assert_eq!(selectors[0].index, 0);
        assert_eq!(selectors[1].index, 2);
    }

    #[test]
    fn test_headerless_item_keeps_pane() {
        let source = measured(400.0, &[100.0, 100.0, 100.0]);
        let items = vec![
            labeled("Overview", false),
            SwitchItem::new("interstitial pane".to_string()).with_active(true),
            labeled("Audience", false),
        ];
        let mut panel = SwitchPanel::new(items, source);
        panel.on_attached_to_layout();

        let panes = panel.panes();
        assert_eq!(panes.len(), 3);
        assert_eq!(panes[1].content, "interstitial pane");
        assert!(panes[1].active);
    }

    #[test]
    fn test_overflow_group_none_when_fits() {
        let source = measured(400.0, &[100.0, 100.0, 100.0]);
        let items = vec![labeled("Overview", true), labeled("Traffic", false)];
        let mut panel = SwitchPanel::new(items, source);
        panel.on_attached_to_layout();

        assert!(panel.overflow_group().is_none());
    }

    #[test]
    fn test_overflow_group_entries() {
        let source = measured(300.0, &[150.0, 150.0, 150.0]);
        let items = vec![
            labeled("Overview", true),
            labeled("Traffic", false),
            labeled("Audience", false),
        ];
        let mut panel = SwitchPanel::new(items, source);
        panel.on_attached_to_layout();

        let group = panel.overflow_group().unwrap();
        assert_eq!(group.entries.len(), 2);
        assert_eq!(group.entries[0].index, 1);
        assert_eq!(group.entries[0].label, Some(&"Traffic".to_string()));
        assert_eq!(group.entries[1].index, 2);
        assert_eq!(group.entries[1].label, Some(&"Audience".to_string()));
    }

    #[test]
    fn test_overflow_keeps_headerless_entries() {
        let source = measured(300.0, &[150.0, 150.0, 150.0]);
        let items = vec![
            labeled("Overview", true),
            labeled("Traffic", false),
            SwitchItem::new("interstitial pane".to_string()),
        ];
        let mut panel = SwitchPanel::new(items, source);
        panel.on_attached_to_layout();

        let group = panel.overflow_group().unwrap();
        assert_eq!(group.entries.len(), 2);
        assert_eq!(group.entries[1].index, 2);
        assert_eq!(group.entries[1].label, None); // Offered without a label
    }

    #[test]
    fn test_panes_independent_of_partition() {
        let source = measured(300.0, &[150.0, 150.0, 150.0]);
        let items = vec![
            labeled("Overview", false),
            labeled("Traffic", false),
            labeled("Audience", true),
        ];
        let mut panel = SwitchPanel::new(items, source);
        panel.on_attached_to_layout();

        // The active item overflowed, but its pane is still described
        assert_eq!(panel.overflow_indices(), &[1, 2]);
        let panes = panel.panes();
        assert_eq!(panes.len(), 3);
        assert_eq!(panes[2].content, "Audience pane");
        assert!(panes[2].active);
    }
}
