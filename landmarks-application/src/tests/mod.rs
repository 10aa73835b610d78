pub mod prelude {
    pub use crate::{
        error::AppError,
        prelude::*,
        view::{ListRenderer, MapRenderer, Notice},
        *,
    };
    pub use landmarks_core::{mock::MockLandmarkService, usecases::LandmarkInput};
    pub use landmarks_entities::builders::*;
    pub use std::{cell::RefCell, rc::Rc};

    use async_trait::async_trait;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use landmarks_core::{
        gateways::{image_source, location},
        util::image::UploadPolicy,
    };
    use std::io;

    pub struct Fixture {
        pub service: Rc<MockLandmarkService>,
        pub store: Rc<LandmarkStore<MockLandmarkService>>,
        pub coordinator: Rc<MutationCoordinator<MockLandmarkService>>,
    }

    impl Fixture {
        pub fn new(remote: Vec<Landmark>) -> Self {
            let service = Rc::new(MockLandmarkService::with_landmarks(remote));
            let store = Rc::new(LandmarkStore::new(Rc::clone(&service)));
            let coordinator = Rc::new(MutationCoordinator::new(
                Rc::clone(&store),
                UploadPolicy::default(),
            ));
            Self {
                service,
                store,
                coordinator,
            }
        }

        pub async fn loaded(remote: Vec<Landmark>) -> Self {
            let fixture = Self::new(remote);
            fixture.store.refresh().await.unwrap();
            fixture
        }
    }

    pub fn landmark(id: u64, title: &str) -> Landmark {
        Landmark::build()
            .id(id)
            .title(title)
            .pos(23.0 + id as f64 / 10.0, 90.0)
            .image(&format!("images/{id}.jpg"))
            .finish()
    }

    pub fn ids(landmarks: &[Landmark]) -> Vec<u64> {
        landmarks.iter().map(|lm| lm.id.to_raw()).collect()
    }

    pub fn png(width: u32, height: u32) -> RawImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 7 % 256) as u8, (y * 3 % 256) as u8, 64])
        });
        let mut data = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut io::Cursor::new(&mut data), ImageFormat::Png)
            .unwrap();
        data.into()
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum MapEvent {
        Markers(Vec<u64>),
        Center(Viewport),
        Notice(Notice),
    }

    #[derive(Default)]
    pub struct RecordingMapRenderer {
        events: RefCell<Vec<MapEvent>>,
    }

    impl RecordingMapRenderer {
        pub fn events(&self) -> Vec<MapEvent> {
            self.events.borrow().clone()
        }

        pub fn clear(&self) {
            self.events.borrow_mut().clear();
        }
    }

    impl MapRenderer for RecordingMapRenderer {
        fn show_markers(&self, markers: &[Marker]) {
            let ids = markers.iter().map(|m| m.id.to_raw()).collect();
            self.events.borrow_mut().push(MapEvent::Markers(ids));
        }
        fn center_on(&self, viewport: &Viewport) {
            self.events.borrow_mut().push(MapEvent::Center(*viewport));
        }
        fn notice(&self, notice: &Notice) {
            self.events.borrow_mut().push(MapEvent::Notice(notice.clone()));
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum ListEvent {
        Rows(Vec<u64>),
        Removed(usize),
        Restored(usize, Row),
        Notice(Notice),
    }

    #[derive(Default)]
    pub struct RecordingListRenderer {
        events: RefCell<Vec<ListEvent>>,
    }

    impl RecordingListRenderer {
        pub fn events(&self) -> Vec<ListEvent> {
            self.events.borrow().clone()
        }

        pub fn clear(&self) {
            self.events.borrow_mut().clear();
        }
    }

    impl ListRenderer for RecordingListRenderer {
        fn show_rows(&self, rows: &[Row]) {
            let ids = rows.iter().map(|r| r.id.to_raw()).collect();
            self.events.borrow_mut().push(ListEvent::Rows(ids));
        }
        fn remove_row(&self, position: usize) {
            self.events.borrow_mut().push(ListEvent::Removed(position));
        }
        fn restore_row(&self, position: usize, row: &Row) {
            self.events
                .borrow_mut()
                .push(ListEvent::Restored(position, row.clone()));
        }
        fn notice(&self, notice: &Notice) {
            self.events.borrow_mut().push(ListEvent::Notice(notice.clone()));
        }
    }

    pub struct FixedLocation(pub Option<MapPoint>);

    #[async_trait(?Send)]
    impl location::LocationProvider for FixedLocation {
        async fn last(&self) -> Option<MapPoint> {
            self.0
        }
    }

    pub struct StaticImageSource(pub Option<RawImage>);

    #[async_trait(?Send)]
    impl image_source::ImageSource for StaticImageSource {
        async fn capture(&self) -> io::Result<Option<RawImage>> {
            Ok(self.0.clone())
        }
    }

    pub struct BrokenImageSource;

    #[async_trait(?Send)]
    impl image_source::ImageSource for BrokenImageSource {
        async fn capture(&self) -> io::Result<Option<RawImage>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "camera"))
        }
    }
}
