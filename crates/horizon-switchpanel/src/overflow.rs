//! Overflow partitioning for the selector strip.
//!
//! The partition decision is a pure function over measured widths; the
//! surrounding panel decides *when* to run it and with which inputs. See
//! [`partition`] for the packing rule.

/// Width reserved for the overflow trigger control when packing selectors.
///
/// When selectors overflow, the strip ends in a trigger control that opens
/// the overflow group; its footprint is charged up front so the last visible
/// selector never collides with it.
pub const DEFAULT_TRIGGER_RESERVE: f32 = 80.0;

/// Result of partitioning items into directly-visible and overflowed runs.
///
/// Both runs preserve the input order. With one width per item, every input
/// item lands in exactly one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// Items rendered directly in the strip.
    pub visible: Vec<T>,
    /// Items relocated to the overflow group.
    pub overflow: Vec<T>,
}

impl<T> Partition<T> {
    /// Partition with every item visible and nothing overflowed.
    pub fn all_visible(items: Vec<T>) -> Self {
        Self {
            visible: items,
            overflow: Vec::new(),
        }
    }

    /// True when at least one item overflowed.
    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self::all_visible(Vec::new())
    }
}

/// Split `items` into visible and overflowed runs by accumulated width.
///
/// `widths` holds one measured width per item, in item order. When the summed
/// widths fit within `container_width`, every item stays visible and no
/// reserve is charged. Otherwise the scan seeds an accumulator with
/// `trigger_reserve` and walks the items in order, adding each width; an item
/// stays visible only while the accumulated width is still strictly below
/// `container_width`.
///
/// The accumulator keeps growing past the first overflowed item rather than
/// restarting, so overflow is monotonic: once one item moves to the overflow
/// run, every later item follows, even one narrow enough to fit the remaining
/// gap. That keeps the scan single-pass and the visible run a prefix; this is
/// not a best-fit packing.
///
/// With no measured widths the total is zero, which always fits: an
/// unmeasured strip never overflows.
///
/// # Example
///
/// ```
/// use horizon_switchpanel::partition;
///
/// // 450 points of selectors against a 300-point container, 80 reserved
/// // for the trigger: 80+150 = 230 fits, 380 and 530 do not.
/// let split = partition(vec!["a", "b", "c"], &[150.0, 150.0, 150.0], 300.0, 80.0);
/// assert_eq!(split.visible, vec!["a"]);
/// assert_eq!(split.overflow, vec!["b", "c"]);
/// ```
pub fn partition<T>(
    items: Vec<T>,
    widths: &[f32],
    container_width: f32,
    trigger_reserve: f32,
) -> Partition<T> {
    debug_assert_eq!(items.len(), widths.len(), "one width per item");

    let total: f32 = widths.iter().sum();
    if total <= container_width {
        return Partition::all_visible(items);
    }

    let mut visible = Vec::new();
    let mut overflow = Vec::new();
    let mut accumulated = trigger_reserve;

    for (item, &width) in items.into_iter().zip(widths) {
        accumulated += width;
        if accumulated < container_width {
            visible.push(item);
        } else {
            overflow.push(item);
        }
    }

    Partition { visible, overflow }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fit_within_container() {
        let split = partition(vec![0, 1, 2], &[80.0, 90.0, 70.0], 300.0, 80.0);
        assert_eq!(split.visible, vec![0, 1, 2]);
        assert!(split.overflow.is_empty());
        assert!(!split.has_overflow());
    }

    #[test]
    fn test_exact_total_still_fits() {
        // total == container counts as fitting
        let split = partition(vec![0, 1, 2], &[100.0, 100.0, 100.0], 300.0, 80.0);
        assert_eq!(split.visible, vec![0, 1, 2]);
        assert!(split.overflow.is_empty());
    }

    #[test]
    fn test_overflow_split() {
        // accumulated: 80+150 = 230 < 300, then 380 and 530
        let split = partition(vec![0, 1, 2], &[150.0, 150.0, 150.0], 300.0, 80.0);
        assert_eq!(split.visible, vec![0]);
        assert_eq!(split.overflow, vec![1, 2]);
        assert!(split.has_overflow());
    }

    #[test]
    fn test_no_reserve_charged_when_fitting() {
        // 250 fits 300 outright even though 80+250 would not
        let split = partition(vec![0], &[250.0], 300.0, 80.0);
        assert_eq!(split.visible, vec![0]);
        assert!(split.overflow.is_empty());
    }

    #[test]
    fn test_accumulator_at_container_width_overflows() {
        // total 320 forces the scan; 80+220 == 300 is not strictly below
        let split = partition(vec![0, 1], &[220.0, 100.0], 300.0, 80.0);
        assert!(split.visible.is_empty());
        assert_eq!(split.overflow, vec![0, 1]);
    }

    #[test]
    fn test_overflow_is_monotonic() {
        // The 60-point item would fit the remaining gap, but the accumulator
        // never resets once items start overflowing
        let split = partition(vec![0, 1, 2], &[100.0, 150.0, 60.0], 300.0, 80.0);
        assert_eq!(split.visible, vec![0]);
        assert_eq!(split.overflow, vec![1, 2]);
    }

    #[test]
    fn test_empty_inputs() {
        let split = partition(Vec::<usize>::new(), &[], 300.0, 80.0);
        assert!(split.visible.is_empty());
        assert!(split.overflow.is_empty());
    }

    #[test]
    fn test_no_widths_never_overflows() {
        // Zero total fits any container, including a zero-width one
        let split = partition(Vec::<usize>::new(), &[], 0.0, 80.0);
        assert!(split.visible.is_empty());
        assert!(split.overflow.is_empty());
    }

    #[test]
    fn test_zero_container_overflows_everything() {
        let split = partition(vec![0, 1], &[10.0, 10.0], 0.0, 80.0);
        assert!(split.visible.is_empty());
        assert_eq!(split.overflow, vec![0, 1]);
    }

    #[test]
    fn test_zero_reserve() {
        // 120+120 = 240 < 250, third crosses at 360
        let split = partition(vec![0, 1, 2], &[120.0, 120.0, 120.0], 250.0, 0.0);
        assert_eq!(split.visible, vec![0, 1]);
        assert_eq!(split.overflow, vec![2]);
    }

    #[test]
    fn test_every_item_lands_exactly_once() {
        let items = vec!["a", "b", "c", "d", "e"];
        let widths = [90.0, 110.0, 70.0, 130.0, 60.0];
        let split = partition(items.clone(), &widths, 310.0, 80.0);

        let mut recombined = split.visible.clone();
        recombined.extend(split.overflow.iter().copied());
        assert_eq!(recombined, items);
    }

    #[test]
    fn test_same_inputs_same_partition() {
        let widths = [150.0, 150.0, 150.0];
        let first = partition(vec![0, 1, 2], &widths, 300.0, 80.0);
        let second = partition(vec![0, 1, 2], &widths, 300.0, 80.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_wider_container_keeps_more_visible() {
        let widths = [150.0, 150.0, 150.0];
        // 80+150 = 230, 380, 530 against a 400-point container
        let split = partition(vec![0, 1, 2], &widths, 400.0, 80.0);
        assert_eq!(split.visible, vec![0, 1]);
        assert_eq!(split.overflow, vec![2]);
    }
}
