pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::landmark_builder::*;

pub mod landmark_builder {

    use super::*;
    use crate::{id::*, landmark::*};

    #[derive(Debug)]
    pub struct LandmarkBuild {
        landmark: Landmark,
    }

    impl LandmarkBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.landmark.id = Id::new(id);
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.landmark.title = title.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.landmark.lat = Some(lat);
            self.landmark.lng = Some(lng);
            self
        }
        pub fn lat(mut self, lat: Option<f64>) -> Self {
            self.landmark.lat = lat;
            self
        }
        pub fn lng(mut self, lng: Option<f64>) -> Self {
            self.landmark.lng = lng;
            self
        }
        pub fn image(mut self, image: &str) -> Self {
            self.landmark.image = image.into();
            self
        }
        pub fn finish(self) -> Landmark {
            self.landmark
        }
    }

    impl Builder for Landmark {
        type Build = LandmarkBuild;
        fn build() -> LandmarkBuild {
            LandmarkBuild {
                landmark: Landmark {
                    id: Id::new(0),
                    title: String::new(),
                    lat: None,
                    lng: None,
                    image: ImagePath::default(),
                },
            }
        }
    }
}
