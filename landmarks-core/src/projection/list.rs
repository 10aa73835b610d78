use crate::{entities::*, store::Snapshot};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: Id,
    pub title: String,
    pub caption: String,
    pub image_url: Option<Url>,
}

struct Coord(Option<f64>);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(deg) => write!(f, "{deg}"),
            None => f.write_str("n/a"),
        }
    }
}

pub fn caption(landmark: &Landmark) -> String {
    format!("Lat: {}, Lon: {}", Coord(landmark.lat), Coord(landmark.lng))
}

/// An entry that has been removed from a [`ListProjection`].
///
/// Pass it back to [`ListProjection::restore`] if the removal
/// could not be confirmed.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct RemovedRow {
    position: usize,
    landmark: Landmark,
}

impl RemovedRow {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn landmark(&self) -> &Landmark {
        &self.landmark
    }

    pub fn into_landmark(self) -> Landmark {
        self.landmark
    }
}

/// All landmarks in snapshot order.
///
/// The projection owns its entries so that rows can be removed
/// before the removal has been confirmed.
#[derive(Debug, Clone, Default)]
pub struct ListProjection {
    entries: Vec<Landmark>,
    image_base_url: Option<Url>,
}

impl ListProjection {
    pub fn project(snapshot: &Snapshot, image_base_url: Option<Url>) -> Self {
        Self {
            entries: snapshot.to_vec(),
            image_base_url,
        }
    }

    pub fn rows(&self) -> Vec<Row> {
        self.entries.iter().map(|lm| self.to_row(lm)).collect()
    }

    pub fn row(&self, position: usize) -> Option<Row> {
        self.entries.get(position).map(|lm| self.to_row(lm))
    }

    pub fn get(&self, position: usize) -> Option<&Landmark> {
        self.entries.get(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn edit_record_at(&self, position: usize) -> Option<EditRecord> {
        self.entries.get(position).map(EditRecord::from)
    }

    /// Returns `None` if `position` is out of range.
    pub fn remove_at(&mut self, position: usize) -> Option<RemovedRow> {
        if position >= self.entries.len() {
            log::debug!(
                "Ignoring removal at position {position} of {} rows",
                self.entries.len()
            );
            return None;
        }
        let landmark = self.entries.remove(position);
        Some(RemovedRow { position, landmark })
    }

    /// Re-insert a removed entry and return its actual position.
    pub fn restore(&mut self, removed: RemovedRow) -> usize {
        let RemovedRow { position, landmark } = removed;
        let position = position.min(self.entries.len());
        self.entries.insert(position, landmark);
        position
    }

    fn to_row(&self, landmark: &Landmark) -> Row {
        Row {
            id: landmark.id,
            title: landmark.title.clone(),
            caption: caption(landmark),
            image_url: self
                .image_base_url
                .as_ref()
                .and_then(|base| landmark.image.to_url(base)),
        }
    }
}
