use crate::{
    view::{MapRenderer, Notice},
    *,
};
use landmarks_core::gateways::landmark_service::LandmarkService;
use std::rc::Rc;
use tokio::sync::watch;

use super::coordinator::MutationCoordinator;

/// The map with all landmarks that match the search query.
pub struct OverviewScreen<S: ?Sized, R> {
    coordinator: Rc<MutationCoordinator<S>>,
    renderer: R,
    image_base_url: Option<Url>,
    subscription: Option<watch::Receiver<Snapshot>>,
    query: String,
    projection: MarkerProjection,
    viewport: Viewport,
}

impl<S, R> OverviewScreen<S, R>
where
    S: LandmarkService + ?Sized,
    R: MapRenderer,
{
    pub fn new(
        coordinator: Rc<MutationCoordinator<S>>,
        renderer: R,
        image_base_url: Option<Url>,
        viewport: Viewport,
    ) -> Self {
        Self {
            coordinator,
            renderer,
            image_base_url,
            subscription: None,
            query: String::new(),
            projection: MarkerProjection::default(),
            viewport,
        }
    }

    /// Start with a search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn markers(&self) -> &[Marker] {
        self.projection.markers()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribe to the store and fetch all landmarks.
    ///
    /// The map is centered on the first marker. A failed fetch is
    /// reported and the previously known landmarks are shown.
    pub async fn load(&mut self) -> Result<()> {
        if self.subscription.is_none() {
            self.subscription = Some(self.coordinator.store().subscribe());
        }
        let result = self.coordinator.store().refresh().await;
        if let Some(subscription) = &mut self.subscription {
            subscription.mark_unchanged();
        }
        match result {
            Ok(snapshot) => {
                self.render(&snapshot, true);
                Ok(())
            }
            Err(err) => {
                self.renderer
                    .notice(&Notice::error(format!("Failed to load landmarks: {err}")));
                let snapshot = self.coordinator.store().current();
                self.render(&snapshot, false);
                Err(err.into())
            }
        }
    }

    /// Re-render if the store has published a new snapshot.
    pub fn sync(&mut self) -> bool {
        let Some(subscription) = &mut self.subscription else {
            return false;
        };
        if !subscription.has_changed().unwrap_or(false) {
            return false;
        }
        let snapshot = subscription.borrow_and_update().clone();
        self.render(&snapshot, false);
        true
    }

    /// Wait for the next snapshot and render it.
    ///
    /// Returns `false` if the screen is detached.
    pub async fn changed(&mut self) -> bool {
        let Some(subscription) = &mut self.subscription else {
            return false;
        };
        if subscription.changed().await.is_err() {
            return false;
        }
        self.sync();
        true
    }

    /// Filter the markers by title.
    pub fn search(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        let snapshot = match &mut self.subscription {
            Some(subscription) => subscription.borrow_and_update().clone(),
            None => self.projection.snapshot().clone(),
        };
        self.render(&snapshot, false);
    }

    /// Resolve a tapped marker.
    pub fn tap(&self, id: Id) -> Option<&Landmark> {
        self.projection.resolve(id)
    }

    pub fn edit(&self, id: Id) -> Option<EditRecord> {
        self.tap(id).map(EditRecord::from)
    }

    pub async fn delete(&mut self, id: Id) -> Result<bool> {
        let Some(landmark) = self.tap(id).cloned() else {
            return Ok(false);
        };
        match self.coordinator.delete(&landmark).await {
            Ok(()) => {
                self.renderer
                    .notice(&Notice::info(format!("Deleted '{}'", landmark.title)));
                self.sync();
                Ok(true)
            }
            Err(err) => {
                self.renderer.notice(&Notice::error(&err));
                self.sync();
                Err(err)
            }
        }
    }

    /// Leave the screen.
    pub fn detach(&mut self) {
        self.subscription = None;
        self.coordinator.cancel_pending_work();
    }

    fn render(&mut self, snapshot: &Snapshot, recenter: bool) {
        self.projection =
            MarkerProjection::project(snapshot, &self.query, self.image_base_url.as_ref());
        self.renderer.show_markers(self.projection.markers());
        if recenter && self.viewport.follow(&self.projection) {
            self.renderer.center_on(&self.viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{prelude::*, prelude::MapEvent as E};
    use landmarks_core::gateways::landmark_service::Error as ServiceError;

    fn screen(fixture: &Fixture) -> OverviewScreen<MockLandmarkService, RecordingMapRenderer> {
        OverviewScreen::new(
            Rc::clone(&fixture.coordinator),
            RecordingMapRenderer::default(),
            Some("https://example.com/".parse().unwrap()),
            Viewport::default(),
        )
    }

    fn remote() -> Vec<Landmark> {
        vec![
            Landmark::build().id(1).title("No position").finish(),
            Landmark::build()
                .id(2)
                .title("Lalbagh Fort")
                .pos(23.7188, 90.3883)
                .finish(),
            Landmark::build()
                .id(3)
                .title("Ahsan Manzil")
                .pos(23.7086, 90.406)
                .finish(),
        ]
    }

    #[tokio::test]
    async fn load_renders_markers_and_centers_on_first() {
        let fixture = Fixture::new(remote());
        let mut screen = screen(&fixture);
        screen.load().await.unwrap();
        let center = MapPoint::from_lat_lng_deg(23.7188, 90.3883);
        assert_eq!(
            screen.renderer().events(),
            vec![
                E::Markers(vec![2, 3]),
                E::Center(Viewport::new(center, Viewport::DEFAULT_ZOOM)),
            ]
        );
        assert_eq!(screen.viewport().center, center);
    }

    #[tokio::test]
    async fn empty_load_keeps_center() {
        let fixture = Fixture::new(vec![]);
        let mut screen = screen(&fixture);
        screen.load().await.unwrap();
        assert_eq!(screen.renderer().events(), vec![E::Markers(vec![])]);
        assert_eq!(*screen.viewport(), Viewport::default());
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_markers() {
        let fixture = Fixture::new(remote());
        let mut screen = screen(&fixture);
        screen.load().await.unwrap();
        screen.renderer().clear();
        fixture
            .service
            .fail_next(ServiceError::Transport("offline".into()));
        assert!(screen.load().await.is_err());
        let events = screen.renderer().events();
        assert!(matches!(events[0], E::Notice(Notice::Error(_))));
        assert_eq!(events[1], E::Markers(vec![2, 3]));
    }

    #[tokio::test]
    async fn search_rederives_from_full_snapshot() {
        let fixture = Fixture::new(remote());
        let mut screen = screen(&fixture);
        screen.load().await.unwrap();
        screen.search("fort");
        assert_eq!(screen.markers().len(), 1);
        screen.search("manzil");
        assert_eq!(screen.markers()[0].id, Id::new(3));
        screen.search("");
        assert_eq!(screen.markers().len(), 2);
        assert_eq!(
            screen.markers()[0].thumbnail_url,
            None,
            "landmarks without image have no thumbnail"
        );
    }

    #[tokio::test]
    async fn tap_edit_and_delete() {
        let fixture = Fixture::new(remote());
        let mut screen = screen(&fixture);
        screen.load().await.unwrap();
        assert_eq!(screen.tap(Id::new(3)).unwrap().title, "Ahsan Manzil");
        assert!(screen.tap(Id::new(1)).is_none());
        let record = screen.edit(Id::new(2)).unwrap();
        assert_eq!((record.lat, record.lng), (Some(23.7188), Some(90.3883)));

        assert!(screen.delete(Id::new(2)).await.unwrap());
        let markers: Vec<_> = screen.markers().iter().map(|m| m.id).collect();
        assert_eq!(markers, vec![Id::new(3)]);
        assert!(!screen.delete(Id::new(2)).await.unwrap());
    }

    #[tokio::test]
    async fn store_changes_are_rendered() {
        let fixture = Fixture::new(remote());
        let mut screen = screen(&fixture);
        screen.load().await.unwrap();
        assert!(!screen.sync());
        screen.renderer().clear();
        fixture
            .store
            .apply(landmark(7, "Sixty Dome Mosque"), Mutation::Insert);
        assert!(screen.changed().await);
        assert_eq!(screen.renderer().events(), vec![E::Markers(vec![2, 3, 7])]);
    }

    #[tokio::test]
    async fn detached_screens_ignore_changes() {
        let fixture = Fixture::new(remote());
        let mut screen = screen(&fixture);
        screen.load().await.unwrap();
        screen.detach();
        assert!(!screen.is_attached());
        screen.renderer().clear();
        fixture.store.apply(landmark(7, "x"), Mutation::Insert);
        assert!(!screen.sync());
        assert!(!screen.changed().await);
        assert!(screen.renderer().events().is_empty());
    }

    #[tokio::test]
    async fn initial_query_filters_first_render() {
        let fixture = Fixture::new(remote());
        let mut screen = screen(&fixture).with_query("AHSAN");
        screen.load().await.unwrap();
        assert_eq!(screen.renderer().events()[0], E::Markers(vec![3]));
        assert_eq!(screen.viewport().center, MapPoint::from_lat_lng_deg(23.7086, 90.406));
    }

    #[tokio::test]
    async fn search_includes_changes_that_were_not_rendered_yet() {
        let fixture = Fixture::new(remote());
        let mut screen = screen(&fixture);
        screen.load().await.unwrap();
        fixture.store.apply(landmark(7, "New Fort"), Mutation::Insert);
        screen.search("fort");
        let ids: Vec<_> = screen.markers().iter().map(|m| m.id.to_raw()).collect();
        assert_eq!(ids, vec![2, 7]);
        assert!(!screen.sync());
    }
}
