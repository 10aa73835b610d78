use crate::{entities::*, store::Snapshot};

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: Id,
    pub pos: MapPoint,
    pub title: String,
    pub thumbnail_url: Option<Url>,
}

/// The markers of all displayable landmarks that match a search query.
#[derive(Debug, Clone, Default)]
pub struct MarkerProjection {
    snapshot: Snapshot,
    markers: Vec<Marker>,
    // Position of the projected landmark in the snapshot for each marker
    indices: Vec<usize>,
}

impl MarkerProjection {
    /// Derive the markers from the full snapshot.
    ///
    /// An empty `query` matches all landmarks. Otherwise titles are
    /// matched by a case-insensitive substring search.
    pub fn project(snapshot: &Snapshot, query: &str, image_base_url: Option<&Url>) -> Self {
        let needle = query.to_lowercase();
        let mut markers = Vec::with_capacity(snapshot.len());
        let mut indices = Vec::with_capacity(snapshot.len());
        for (index, landmark) in snapshot.iter().enumerate() {
            let Some(pos) = landmark.pos() else {
                continue;
            };
            if landmark.title.trim().is_empty() {
                continue;
            }
            if !needle.is_empty() && !landmark.title.to_lowercase().contains(&needle) {
                continue;
            }
            markers.push(Marker {
                id: landmark.id,
                pos,
                title: landmark.title.clone(),
                thumbnail_url: image_base_url.and_then(|base| landmark.image.to_url(base)),
            });
            indices.push(index);
        }
        debug_assert_eq!(markers.len(), indices.len());
        Self {
            snapshot: snapshot.clone(),
            markers,
            indices,
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Resolve a tapped marker into the landmark it was projected from.
    pub fn resolve(&self, id: Id) -> Option<&Landmark> {
        self.markers
            .iter()
            .position(|m| m.id == id)
            .map(|i| &self.snapshot[self.indices[i]])
    }

    /// The position to center a map on after loading, if any.
    pub fn center(&self) -> Option<MapPoint> {
        self.markers.first().map(|m| m.pos)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}
