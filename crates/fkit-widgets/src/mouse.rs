#![forbid(unsafe_code)]

//! Mouse routing results shared by selectable widgets.

/// What a widget did with a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// The event was not for this widget.
    Ignored,
    /// An entry became the selection.
    Selected(usize),
    /// The already-selected entry was clicked again.
    Activated(usize),
    /// The widget's open/expanded state flipped.
    Toggled,
    /// The pointer moved over the widget without clicking.
    HoverChanged,
}

impl MouseResult {
    /// Whether the widget reacted to the event.
    #[must_use]
    pub const fn consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
