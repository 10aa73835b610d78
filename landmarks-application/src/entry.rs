use crate::{coordinator::MutationCoordinator, *};
use landmarks_core::{
    gateways::{
        image_source::ImageSource, landmark_service::LandmarkService, location::LocationProvider,
    },
    usecases::LandmarkInput,
};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum EntryMode {
    Create,
    Edit(EditRecord),
}

/// Form to create a new or edit an existing landmark.
///
/// The input and the picked image are kept after a failed
/// submission so that it can be retried.
pub struct EntryForm<S: ?Sized> {
    coordinator: Rc<MutationCoordinator<S>>,
    mode: EntryMode,
    pub input: LandmarkInput,
    image: Option<RawImage>,
}

impl<S> EntryForm<S>
where
    S: LandmarkService + ?Sized,
{
    pub fn create(coordinator: Rc<MutationCoordinator<S>>) -> Self {
        Self {
            coordinator,
            mode: EntryMode::Create,
            input: LandmarkInput::default(),
            image: None,
        }
    }

    pub fn edit(coordinator: Rc<MutationCoordinator<S>>, record: EditRecord) -> Self {
        Self {
            coordinator,
            input: LandmarkInput::from(&record),
            mode: EntryMode::Edit(record),
            image: None,
        }
    }

    pub fn mode(&self) -> &EntryMode {
        &self.mode
    }

    /// Fill empty coordinates of a new landmark with the
    /// current location.
    pub async fn prefill_location(&mut self, location: &dyn LocationProvider) -> bool {
        if self.mode != EntryMode::Create {
            return false;
        }
        let Some(pos) = location.last().await else {
            debug!("No location available");
            return false;
        };
        let (lat, lng) = pos.to_lat_lng_deg();
        if self.input.lat.trim().is_empty() {
            self.input.lat = lat.to_string();
        }
        if self.input.lng.trim().is_empty() {
            self.input.lng = lng.to_string();
        }
        true
    }

    pub async fn use_current_lat(&mut self, location: &dyn LocationProvider) -> bool {
        match location.last().await {
            Some(pos) => {
                self.input.lat = pos.lat().to_string();
                true
            }
            None => false,
        }
    }

    pub async fn use_current_lng(&mut self, location: &dyn LocationProvider) -> bool {
        match location.last().await {
            Some(pos) => {
                self.input.lng = pos.lng().to_string();
                true
            }
            None => false,
        }
    }

    /// Returns `false` if the user did not pick an image.
    pub async fn pick_image(&mut self, source: &dyn ImageSource) -> Result<bool> {
        match source.capture().await? {
            Some(image) if !image.is_empty() => {
                self.image = Some(image);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn set_image(&mut self, image: RawImage) {
        self.image = Some(image);
    }

    pub fn image(&self) -> Option<&RawImage> {
        self.image.as_ref()
    }

    /// The remote image of the edited landmark.
    pub fn existing_image(&self) -> Option<&ImagePath> {
        match &self.mode {
            EntryMode::Edit(record) if !record.image.is_empty() => Some(&record.image),
            _ => None,
        }
    }

    pub async fn submit(&self) -> Result<Landmark> {
        match &self.mode {
            EntryMode::Create => {
                self.coordinator
                    .create(&self.input, self.image.as_ref())
                    .await
            }
            EntryMode::Edit(record) => {
                self.coordinator
                    .update(Some(record.id), &self.input, self.image.as_ref())
                    .await
            }
        }
    }

    /// Leave the form.
    pub fn detach(&self) {
        self.coordinator.cancel_pending_work();
    }
}
