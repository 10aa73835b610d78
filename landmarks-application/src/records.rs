use crate::{
    coordinator::MutationCoordinator,
    view::{ListRenderer, Notice},
    *,
};
use landmarks_core::gateways::landmark_service::LandmarkService;
use std::{cell::RefCell, rc::Rc};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwipeAction {
    /// Navigate to the entry form.
    Edit(EditRecord),
    Deleted(Landmark),
    Ignored,
}

/// All landmarks as a list.
pub struct RecordsScreen<S: ?Sized, R> {
    coordinator: Rc<MutationCoordinator<S>>,
    renderer: R,
    image_base_url: Option<Url>,
    subscription: Option<watch::Receiver<Snapshot>>,
    rows: RefCell<ListProjection>,
}

impl<S, R> RecordsScreen<S, R>
where
    S: LandmarkService + ?Sized,
    R: ListRenderer,
{
    pub fn new(
        coordinator: Rc<MutationCoordinator<S>>,
        renderer: R,
        image_base_url: Option<Url>,
    ) -> Self {
        Self {
            coordinator,
            renderer,
            image_base_url,
            subscription: None,
            rows: RefCell::default(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn rows(&self) -> Vec<Row> {
        self.rows.borrow().rows()
    }

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
                self.render(&snapshot);
                Ok(())
            }
            Err(err) => {
                self.renderer
                    .notice(&Notice::error(format!("Failed to load landmarks: {err}")));
                self.render(&self.coordinator.store().current());
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
        self.render(&snapshot);
        true
    }

    pub async fn swipe(&mut self, position: usize, swipe: Swipe) -> Result<SwipeAction> {
        match swipe {
            Swipe::Right => Ok(self
                .rows
                .borrow()
                .edit_record_at(position)
                .map_or(SwipeAction::Ignored, SwipeAction::Edit)),
            Swipe::Left => {
                let result = self
                    .coordinator
                    .delete_row(&self.rows, position, &self.renderer)
                    .await;
                let deleted = match result {
                    Ok(deleted) => deleted,
                    Err(err) => {
                        // The store might have been refreshed meanwhile
                        self.sync();
                        return Err(err);
                    }
                };
                let Some(landmark) = deleted else {
                    return Ok(SwipeAction::Ignored);
                };
                self.renderer
                    .notice(&Notice::info(format!("Deleted '{}'", landmark.title)));
                self.sync();
                Ok(SwipeAction::Deleted(landmark))
            }
        }
    }

    pub fn detach(&mut self) {
        self.subscription = None;
        self.coordinator.cancel_pending_work();
    }

    fn render(&self, snapshot: &Snapshot) {
        let rows = ListProjection::project(snapshot, self.image_base_url.clone());
        self.renderer.show_rows(&rows.rows());
        *self.rows.borrow_mut() = rows;
    }
}
