use std::ops::Range;

use crate::widget::{Widget, WidgetSize};

/// Column budget of a single row.
pub const ROW_BUDGET: u8 = 3;

/// A packed row: a contiguous run of the zone's widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    widgets: &'a [Widget],
}

impl<'a> Row<'a> {
    pub(crate) fn new(widgets: &'a [Widget]) -> Self {
        Self { widgets }
    }

    pub fn widgets(&self) -> &'a [Widget] {
        self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Total columns consumed by the row.
    pub fn span(&self) -> u8 {
        self.widgets.iter().map(Widget::span).sum()
    }

    /// `(widget, first column, span)` for each cell, left to right.
    pub fn cells(self) -> impl Iterator<Item = (&'a Widget, u8, u8)> + 'a {
        let mut column = 0u8;
        self.widgets.iter().map(move |widget| {
            let start = column;
            column += widget.span();
            (widget, start, widget.span())
        })
    }
}

/// Greedy left-to-right packing into row ranges.
///
/// A row is closed before a widget that would overflow the budget or that is
/// `Large`, and right after it reaches the budget. The result is not an
/// optimal bin packing: `[Medium, Medium, Small]` yields `[[M], [M, S]]`.
pub fn pack_ranges(widgets: &[Widget]) -> Vec<Range<usize>> {
    let mut rows = Vec::new();
    let mut start = 0usize;
    let mut current_span = 0u8;

    for (idx, widget) in widgets.iter().enumerate() {
        let span = widget.span();
        let overflows = current_span + span > ROW_BUDGET || widget.size() == WidgetSize::Large;
        if overflows && idx > start {
            rows.push(start..idx);
            start = idx;
            current_span = 0;
        }

        current_span += span;

        if current_span >= ROW_BUDGET {
            rows.push(start..idx + 1);
            start = idx + 1;
            current_span = 0;
        }
    }

    if start < widgets.len() {
        rows.push(start..widgets.len());
    }

    rows
}

pub fn pack_rows(widgets: &[Widget]) -> Vec<Row<'_>> {
    pack_ranges(widgets)
        .into_iter()
        .map(|range| Row::new(&widgets[range]))
        .collect()
}
