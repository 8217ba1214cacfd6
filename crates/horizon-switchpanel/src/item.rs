//! Switch panel items.

use horizon_switchpanel_core::Signal;

/// A single entry of a switch panel: one content pane paired with one selector.
///
/// The payload types are opaque to the panel. `C` is whatever the host renders
/// into the content region; `H` is whatever it renders as the selector label.
/// Neither is inspected or measured here; selector widths come from the host
/// through the panel's measurement source.
///
/// Item identity is positional: an item is "index *i* of the current set",
/// and the set is replaced wholesale on every update rather than merged.
///
/// An item without a header label gets no selector in the visible strip but
/// keeps its content pane slot.
///
/// # Signals
///
/// - `select_requested(())`: Emitted when the item's selector is activated
///
/// # Example
///
/// ```
/// use horizon_switchpanel::SwitchItem;
///
/// let item = SwitchItem::new("report body")
///     .with_header("Reports")
///     .with_active(true)
///     .with_select_handler(|| println!("Reports selected"));
///
/// assert_eq!(item.header(), Some(&"Reports"));
/// assert!(item.is_active());
/// ```
pub struct SwitchItem<C, H> {
    /// Content pane payload.
    content: C,
    /// Selector label payload; `None` renders no selector.
    header: Option<H>,
    /// Whether this item is the active one.
    active: bool,
    /// Signal emitted when this item's selector is activated.
    pub select_requested: Signal<()>,
}

impl<C, H> SwitchItem<C, H> {
    /// Create an inactive item with no header label.
    pub fn new(content: C) -> Self {
        Self {
            content,
            header: None,
            active: false,
            select_requested: Signal::new(),
        }
    }

    /// Set the header label using builder pattern.
    pub fn with_header(mut self, header: H) -> Self {
        self.header = Some(header);
        self
    }

    /// Set the active flag using builder pattern.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Connect a selection handler using builder pattern.
    ///
    /// Shorthand for connecting to [`select_requested`](Self::select_requested).
    pub fn with_select_handler<F>(self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.select_requested.connect(move |_| handler());
        self
    }

    /// Get the content pane payload.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Get the header label payload, if the item has one.
    pub fn header(&self) -> Option<&H> {
        self.header.as_ref()
    }

    /// Set or clear the header label.
    pub fn set_header(&mut self, header: Option<H>) {
        self.header = header;
    }

    /// Check whether this item is the active one.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set the active flag.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

// Ensure items are Send + Sync when their payloads are
static_assertions::assert_impl_all!(SwitchItem<String, String>: Send, Sync);
