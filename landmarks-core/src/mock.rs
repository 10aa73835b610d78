// In-memory remote store for tests.

use crate::{
    entities::*,
    gateways::landmark_service::{Error, LandmarkService, Result},
    util::form::{self, Payload},
};
use async_trait::async_trait;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List,
    Create(form::Fields),
    Update { fields: form::Fields, image: bool },
    Delete(Id),
}

#[derive(Default)]
pub struct MockLandmarkService {
    landmarks: RefCell<Vec<Landmark>>,
    next_id: Cell<u64>,
    fail_next: RefCell<Option<Error>>,
    uploads: RefCell<Vec<EncodedImage>>,
    requests: RefCell<Vec<Request>>,
    hold_list: RefCell<Option<Rc<Notify>>>,
}

impl MockLandmarkService {
    pub fn new() -> Self {
        Self::with_landmarks(vec![])
    }

    pub fn with_landmarks(landmarks: Vec<Landmark>) -> Self {
        let next_id = landmarks.iter().map(|lm| lm.id.to_raw()).max().unwrap_or(0) + 1;
        Self {
            landmarks: RefCell::new(landmarks),
            next_id: Cell::new(next_id),
            ..Default::default()
        }
    }

    /// Let the next request fail with `err`.
    pub fn fail_next(&self, err: Error) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    /// Suspend the next `list` request after it has read the
    /// remote list until the returned handle is notified.
    pub fn hold_list(&self) -> Rc<Notify> {
        let notify = Rc::new(Notify::new());
        *self.hold_list.borrow_mut() = Some(Rc::clone(&notify));
        notify
    }

    pub fn remote(&self) -> Vec<Landmark> {
        self.landmarks.borrow().clone()
    }

    /// Modify the remote list behind the back of the client.
    pub fn remove_remote(&self, id: Id) {
        self.landmarks.borrow_mut().retain(|lm| lm.id != id);
    }

    pub fn uploads(&self) -> Vec<EncodedImage> {
        self.uploads.borrow().clone()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    fn check_failure(&self) -> Result<()> {
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record(&self, request: Request) {
        self.requests.borrow_mut().push(request);
    }

    fn upload(&self, id: Id, image: &EncodedImage) -> ImagePath {
        let mut uploads = self.uploads.borrow_mut();
        uploads.push(image.clone());
        format!("images/{id}-{}.jpg", uploads.len()).into()
    }
}

// Parses the submitted text fields like the remote store does.
fn parse_fields(payload: &Payload) -> Result<(String, Option<f64>, Option<f64>)> {
    let title = payload
        .field(form::TITLE_FIELD)
        .ok_or_else(|| Error::Status {
            status: 400,
            message: "missing title".into(),
        })?
        .to_owned();
    let coord = |name: &str| payload.field(name).and_then(|s| s.parse::<f64>().ok());
    Ok((title, coord(form::LAT_FIELD), coord(form::LNG_FIELD)))
}

#[async_trait(?Send)]
impl LandmarkService for MockLandmarkService {
    async fn list(&self) -> Result<Vec<Landmark>> {
        self.record(Request::List);
        self.check_failure()?;
        let landmarks = self.remote();
        let hold = self.hold_list.borrow_mut().take();
        if let Some(notify) = hold {
            notify.notified().await;
        }
        Ok(landmarks)
    }

    async fn create(&self, new_landmark: &NewLandmark, image: &EncodedImage) -> Result<Landmark> {
        let payload = form::create_payload(new_landmark, image);
        self.record(Request::Create(payload.fields().clone()));
        self.check_failure()?;
        let (title, lat, lng) = parse_fields(&payload)?;
        let id = Id::new(self.next_id.get().max(1));
        self.next_id.set(id.to_raw() + 1);
        let landmark = Landmark {
            id,
            title,
            lat,
            lng,
            image: self.upload(id, image),
        };
        self.landmarks.borrow_mut().push(landmark.clone());
        Ok(landmark)
    }

    async fn update(
        &self,
        changes: &LandmarkChanges,
        image: Option<&EncodedImage>,
    ) -> Result<Landmark> {
        let payload = form::update_payload(changes, image);
        self.record(Request::Update {
            fields: payload.fields().clone(),
            image: image.is_some(),
        });
        self.check_failure()?;
        let (title, lat, lng) = parse_fields(&payload)?;
        if !self.landmarks.borrow().iter().any(|lm| lm.id == changes.id) {
            return Err(Error::NotFound);
        }
        let new_image = image.map(|image| self.upload(changes.id, image));
        let mut landmarks = self.landmarks.borrow_mut();
        let landmark = landmarks
            .iter_mut()
            .find(|lm| lm.id == changes.id)
            .ok_or(Error::NotFound)?;
        landmark.title = title;
        landmark.lat = lat;
        landmark.lng = lng;
        if let Some(new_image) = new_image {
            landmark.image = new_image;
        }
        Ok(landmark.clone())
    }

    async fn delete(&self, id: Id) -> Result<()> {
        self.record(Request::Delete(id));
        self.check_failure()?;
        let mut landmarks = self.landmarks.borrow_mut();
        let pos = landmarks
            .iter()
            .position(|lm| lm.id == id)
            .ok_or(Error::NotFound)?;
        landmarks.remove(pos);
        Ok(())
    }
}
