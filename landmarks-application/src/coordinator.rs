use crate::{
    error::AppError,
    view::{ListRenderer, Notice},
    *,
};
use landmarks_core::{
    gateways::landmark_service::{self, LandmarkService},
    usecases::LandmarkInput,
    util::image::{encode_for_upload, UploadPolicy},
};
use std::{cell::RefCell, rc::Rc};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// State of the most recent mutation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationStatus {
    Idle,
    Submitting(MutationKind),
    Confirmed(MutationKind, Id),
    Failed(MutationKind, String),
}

/// The only writer of the [`LandmarkStore`].
///
/// Every mutation is sent to the remote store first and only
/// the confirmed result is applied locally.
pub struct MutationCoordinator<S: ?Sized> {
    store: Rc<LandmarkStore<S>>,
    upload_policy: UploadPolicy,
    status: watch::Sender<MutationStatus>,
    cancel: RefCell<CancellationToken>,
}

impl<S> MutationCoordinator<S>
where
    S: LandmarkService + ?Sized,
{
    pub fn new(store: Rc<LandmarkStore<S>>, upload_policy: UploadPolicy) -> Self {
        let (status, _) = watch::channel(MutationStatus::Idle);
        Self {
            store,
            upload_policy,
            status,
            cancel: RefCell::new(CancellationToken::new()),
        }
    }

    pub fn store(&self) -> &Rc<LandmarkStore<S>> {
        &self.store
    }

    pub fn subscribe(&self) -> watch::Receiver<MutationStatus> {
        self.status.subscribe()
    }

    pub fn status(&self) -> MutationStatus {
        self.status.borrow().clone()
    }

    /// Create a new landmark from the form input and a captured image.
    ///
    /// Nothing is applied to the store on failure and the caller
    /// keeps the draft for a retry.
    pub async fn create(&self, input: &LandmarkInput, image: Option<&RawImage>) -> Result<Landmark> {
        let kind = MutationKind::Create;
        let new_landmark = usecases::prepare_new_landmark(input, image)
            .map_err(|err| self.reject(kind, err.into()))?;
        let Some(raw) = image else {
            return Err(self.reject(kind, usecases::Error::MissingImage.into()));
        };
        let encoded = self
            .encode(raw.clone())
            .await
            .map_err(|err| self.reject(kind, err))?;
        self.transition(MutationStatus::Submitting(kind));
        match self.store.service().create(&new_landmark, &encoded).await {
            Ok(landmark) => {
                info!("Created landmark {} '{}'", landmark.id, landmark.title);
                self.confirm(kind, landmark, Mutation::Insert)
            }
            Err(err) => Err(self.fail(kind, err).await),
        }
    }

    /// Update an existing landmark.
    ///
    /// Without a new image the existing remote image is retained.
    pub async fn update(
        &self,
        id: Option<Id>,
        input: &LandmarkInput,
        image: Option<&RawImage>,
    ) -> Result<Landmark> {
        let kind = MutationKind::Update;
        let changes = usecases::prepare_landmark_changes(id, input)
            .map_err(|err| self.reject(kind, err.into()))?;
        let encoded = match image {
            Some(raw) => Some(
                self.encode(raw.clone())
                    .await
                    .map_err(|err| self.reject(kind, err))?,
            ),
            None => None,
        };
        self.transition(MutationStatus::Submitting(kind));
        match self
            .store
            .service()
            .update(&changes, encoded.as_ref())
            .await
        {
            Ok(landmark) => {
                info!("Updated landmark {} '{}'", landmark.id, landmark.title);
                self.confirm(kind, landmark, Mutation::Replace)
            }
            Err(err) => Err(self.fail(kind, err).await),
        }
    }

    pub async fn delete(&self, landmark: &Landmark) -> Result<()> {
        let kind = MutationKind::Delete;
        self.transition(MutationStatus::Submitting(kind));
        match self.store.service().delete(landmark.id).await {
            Ok(()) => {
                info!("Deleted landmark {}", landmark.id);
                self.confirm(kind, landmark.clone(), Mutation::Remove)?;
                Ok(())
            }
            Err(err) => Err(self.fail(kind, err).await),
        }
    }

    /// Delete the landmark of a list row.
    ///
    /// The row is removed from `rows` immediately and restored if
    /// the remote store does not confirm the removal. Returns `None`
    /// if `position` is out of range.
    pub async fn delete_row<R>(
        &self,
        rows: &RefCell<ListProjection>,
        position: usize,
        view: &R,
    ) -> Result<Option<Landmark>>
    where
        R: ListRenderer + ?Sized,
    {
        let Some(removed) = rows.borrow_mut().remove_at(position) else {
            return Ok(None);
        };
        view.remove_row(position);
        match self.delete(removed.landmark()).await {
            Ok(()) => Ok(Some(removed.into_landmark())),
            Err(err) => {
                let mut rows = rows.borrow_mut();
                let position = rows.restore(removed);
                debug!("Restored row at position {position}");
                if let Some(row) = rows.row(position) {
                    view.restore_row(position, &row);
                }
                view.notice(&Notice::error(&err));
                Err(err)
            }
        }
    }

    /// Cancel all image encoding that is still in progress.
    ///
    /// Requests that have already been sent are not affected.
    pub fn cancel_pending_work(&self) {
        let token = self.cancel.replace(CancellationToken::new());
        token.cancel();
    }

    async fn encode(&self, raw: RawImage) -> Result<EncodedImage> {
        let token = self.cancel.borrow().clone();
        let policy = self.upload_policy;
        let task = tokio::task::spawn_blocking(move || encode_for_upload(&raw, &policy));
        tokio::select! {
            biased;
            () = token.cancelled() => {
                debug!("Image encoding cancelled");
                Err(AppError::Cancelled)
            }
            joined = task => match joined {
                Ok(encoded) => Ok(encoded?),
                Err(err) if err.is_cancelled() => Err(AppError::Cancelled),
                Err(err) => std::panic::resume_unwind(err.into_panic()),
            }
        }
    }

    fn confirm(&self, kind: MutationKind, landmark: Landmark, mutation: Mutation) -> Result<Landmark> {
        let id = landmark.id;
        self.store.apply(landmark.clone(), mutation);
        self.transition(MutationStatus::Confirmed(kind, id));
        Ok(landmark)
    }

    // Failures before anything has been sent.
    fn reject(&self, kind: MutationKind, err: AppError) -> AppError {
        debug!("Rejected {kind:?} request: {err}");
        self.transition(MutationStatus::Failed(kind, err.to_string()));
        err
    }

    async fn fail(&self, kind: MutationKind, err: landmark_service::Error) -> AppError {
        warn!("{kind:?} request failed: {err}");
        if err == landmark_service::Error::NotFound {
            // The refresh logs its own failures
            let _ = self.store.refresh().await;
        }
        self.transition(MutationStatus::Failed(kind, err.to_string()));
        err.into()
    }

    fn transition(&self, status: MutationStatus) {
        debug!("Mutation status: {status:?}");
        self.status.send_replace(status);
    }
}
