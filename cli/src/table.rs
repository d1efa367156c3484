// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// A plain text table with a bold header, columns padded to their widest cell.
#[derive(Debug)]
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub const fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
        }
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<_> = self.columns.iter().map(|col| col.name()).collect();
        let rows: Vec<Vec<_>> = self
            .data
            .iter()
            .map(|data| self.columns.iter().map(|col| col.format(data)).collect())
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|name| name.width()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let last = self.columns.len().saturating_sub(1);
        let cells = header.iter().zip(&widths).zip(self.columns).enumerate();
        for (i, ((name, &width), col)) in cells {
            let cell = pad(name, width, col.padding_direction(), i == last);
            write!(f, "{}", cell.bold())?;
            write_separator(f, self.separator, i == last)?;
        }

        for (row, data) in rows.iter().zip(self.data) {
            let cells = row.iter().zip(&widths).zip(self.columns).enumerate();
            for (i, ((cell, &width), col)) in cells {
                let cell = pad(cell, width, col.padding_direction(), i == last);
                match col.color(data) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
                write_separator(f, self.separator, i == last)?;
            }
        }
        Ok(())
    }
}

fn write_separator(f: &mut fmt::Formatter<'_>, separator: &str, last: bool) -> fmt::Result {
    if last {
        writeln!(f)
    } else {
        write!(f, "{separator}")
    }
}

/// Pads `cell` to `width` terminal columns. A left-aligned last column is left as is.
fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}
