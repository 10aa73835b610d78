use super::{prelude::*, LandmarkInput};
use crate::util::validate::{is_valid_title, AutoCorrect, Validate};

/// Check the edited fields of an existing landmark.
///
/// A new image is optional and not checked here.
pub fn prepare_landmark_changes(id: Option<Id>, input: &LandmarkInput) -> Result<LandmarkChanges> {
    let id = id.ok_or(Error::MissingId)?;
    if !is_valid_title(&input.title) {
        return Err(Error::Title);
    }
    let pos = input.pos()?;
    let changes = LandmarkChanges {
        id,
        title: input.title.clone(),
        pos,
    }
    .auto_correct();
    changes.validate()?;
    Ok(changes)
}
