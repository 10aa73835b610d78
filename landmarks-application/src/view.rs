// Callbacks into the presentation layer.
//
// Renderers only receive view models and never a reference
// into the working list of the store.

use landmarks_core::projection::{Marker, Row, Viewport};
use std::fmt;

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn error(msg: impl fmt::Display) -> Self {
        Self::Error(msg.to_string())
    }
}

pub trait MapRenderer {
    /// Replaces all previously shown markers.
    fn show_markers(&self, markers: &[Marker]);
    fn center_on(&self, viewport: &Viewport);
    fn notice(&self, notice: &Notice);
}

pub trait ListRenderer {
    /// Replaces all previously shown rows.
    fn show_rows(&self, rows: &[Row]);
    fn remove_row(&self, position: usize);
    fn restore_row(&self, position: usize, row: &Row);
    fn notice(&self, notice: &Notice);
}

impl<T: MapRenderer + ?Sized> MapRenderer for &T {
    fn show_markers(&self, markers: &[Marker]) {
        (**self).show_markers(markers)
    }
    fn center_on(&self, viewport: &Viewport) {
        (**self).center_on(viewport)
    }
    fn notice(&self, notice: &Notice) {
        (**self).notice(notice)
    }
}

impl<T: ListRenderer + ?Sized> ListRenderer for &T {
    fn show_rows(&self, rows: &[Row]) {
        (**self).show_rows(rows)
    }
    fn remove_row(&self, position: usize) {
        (**self).remove_row(position)
    }
    fn restore_row(&self, position: usize, row: &Row) {
        (**self).restore_row(position, row)
    }
    fn notice(&self, notice: &Notice) {
        (**self).notice(notice)
    }
}
