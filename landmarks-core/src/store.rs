// The working list of landmarks.
//
// The store is the only owner of the list. Views receive immutable
// snapshots through a watch channel and never a reference into the
// list itself. Mutations are only applied after the remote store has
// confirmed them.

use crate::{
    entities::*,
    gateways::landmark_service::{self, LandmarkService},
};
use std::{cell::RefCell, collections::HashMap, ops::Deref, rc::Rc, sync::Arc};
use tokio::sync::watch;

/// Immutable, ordered view of the working list.
#[derive(Debug, Clone, Default)]
pub struct Snapshot(Arc<[Landmark]>);

impl Snapshot {
    pub fn find(&self, id: Id) -> Option<&Landmark> {
        self.0.iter().find(|lm| lm.id == id)
    }

    pub fn position(&self, id: Id) -> Option<usize> {
        self.0.iter().position(|lm| lm.id == id)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Snapshot {
    type Target = [Landmark];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Landmark>> for Snapshot {
    fn from(from: Vec<Landmark>) -> Self {
        Self(from.into())
    }
}

/// A confirmed change of a single landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Insert,
    Replace,
    Remove,
}

pub struct LandmarkStore<S: ?Sized> {
    service: Rc<S>,
    current: RefCell<Snapshot>,
    changes: watch::Sender<Snapshot>,
}

impl<S> LandmarkStore<S>
where
    S: LandmarkService + ?Sized,
{
    pub fn new(service: Rc<S>) -> Self {
        let (changes, _) = watch::channel(Snapshot::default());
        Self {
            service,
            current: RefCell::new(Snapshot::default()),
            changes,
        }
    }

    pub fn service(&self) -> &Rc<S> {
        &self.service
    }

    /// Replace the working list with the remote list.
    ///
    /// On failure the previous list is retained.
    pub async fn refresh(&self) -> landmark_service::Result<Snapshot> {
        let landmarks = self.service.list().await.map_err(|err| {
            log::warn!("Failed to refresh landmarks: {err}");
            err
        })?;
        log::debug!("Fetched {} landmarks", landmarks.len());
        Ok(self.publish(dedup_by_id(landmarks).into()))
    }

    pub fn apply(&self, landmark: Landmark, mutation: Mutation) -> Snapshot {
        let mut landmarks = self.current().to_vec();
        let pos = landmarks.iter().position(|lm| lm.id == landmark.id);
        match (mutation, pos) {
            (Mutation::Insert | Mutation::Replace, Some(pos)) => {
                if mutation == Mutation::Insert {
                    log::warn!("Landmark {} already exists and is replaced", landmark.id);
                }
                landmarks[pos] = landmark;
            }
            (Mutation::Insert | Mutation::Replace, None) => {
                if mutation == Mutation::Replace {
                    log::warn!("Landmark {} is missing and gets appended", landmark.id);
                }
                landmarks.push(landmark);
            }
            (Mutation::Remove, Some(pos)) => {
                landmarks.remove(pos);
            }
            (Mutation::Remove, None) => {
                log::debug!("Landmark {} has already been removed", landmark.id);
                return self.current();
            }
        }
        self.publish(landmarks.into())
    }

    pub fn current(&self) -> Snapshot {
        self.current.borrow().clone()
    }

    pub fn get(&self, id: Id) -> Option<Landmark> {
        self.current.borrow().find(id).cloned()
    }

    /// Subscribe to all future snapshots.
    ///
    /// Dropping the receiver detaches the subscriber.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.changes.subscribe()
    }

    fn publish(&self, snapshot: Snapshot) -> Snapshot {
        *self.current.borrow_mut() = snapshot.clone();
        // Never fails, even without any subscribers.
        self.changes.send_replace(snapshot.clone());
        snapshot
    }
}

// Keeps the position of the first occurrence and the content of the last one.
fn dedup_by_id(landmarks: Vec<Landmark>) -> Vec<Landmark> {
    let mut positions = HashMap::with_capacity(landmarks.len());
    let mut unique: Vec<Landmark> = Vec::with_capacity(landmarks.len());
    for landmark in landmarks {
        match positions.get(&landmark.id) {
            Some(&pos) => {
                log::warn!("Received landmark {} more than once", landmark.id);
                unique[pos] = landmark;
            }
            None => {
                positions.insert(landmark.id, unique.len());
                unique.push(landmark);
            }
        }
    }
    unique
}
