#![forbid(unsafe_code)]

//! Term/description list.

use crate::{Widget, draw_text_span};
use fkit_core::geometry::Rect;
use fkit_core::text_width::display_width;
use fkit_render::frame::Frame;
use fkit_style::{Style, Theme};

/// One row of a [`DataList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataListItem {
    pub term: String,
    pub description: String,
}

impl DataListItem {
    #[must_use]
    pub fn new(term: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            description: description.into(),
        }
    }
}

/// Two-column list: terms on the left, aligned descriptions on the right.
///
/// The term column is as wide as the widest term, clamped to the area;
/// descriptions are clipped at the right edge.
#[derive(Debug, Clone, Default)]
pub struct DataList {
    items: Vec<DataListItem>,
    term_style: Style,
    description_style: Style,
    gap: u16,
}

impl DataList {
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = DataListItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            term_style: Style::new().bold(),
            description_style: Style::default(),
            gap: 2,
        }
    }

    #[must_use]
    pub fn term_style(mut self, style: Style) -> Self {
        self.term_style = style;
        self
    }

    #[must_use]
    pub fn description_style(mut self, style: Style) -> Self {
        self.description_style = style;
        self
    }

    /// Columns between the term and description columns.
    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn theme(self, theme: &Theme) -> Self {
        self.term_style(theme.muted_style().bold())
            .description_style(theme.text_style())
    }

    #[must_use]
    pub fn items(&self) -> &[DataListItem] {
        &self.items
    }

    /// Width of the term column for an area `available` columns wide.
    #[must_use]
    pub fn term_width(&self, available: u16) -> u16 {
        let widest = self
            .items
            .iter()
            .map(|item| display_width(&item.term))
            .max()
            .unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX).min(available)
    }
}

impl Widget for DataList {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let term_w = self.term_width(area.width);
        let (terms, rest) = area.split_left(term_w);
        let (_, descriptions) = rest.split_left(self.gap);
        for (row, item) in (0..area.height).zip(&self.items) {
            let term_line = terms.row(row);
            draw_text_span(
                frame,
                term_line.x,
                term_line.y,
                &item.term,
                self.term_style,
                term_line.right(),
            );
            let line = descriptions.row(row);
            if !line.is_empty() {
                draw_text_span(
                    frame,
                    line.x,
                    line.y,
                    &item.description,
                    self.description_style,
                    line.right(),
                );
            }
        }
    }
}
