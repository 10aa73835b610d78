use crate::entities::*;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandmarkInvalidation {
    #[error("Empty title")]
    Title,
    #[error("Invalid position")]
    Position,
}

fn validate_landmark(title: &str, pos: MapPoint) -> Result<(), LandmarkInvalidation> {
    if !is_valid_title(title) {
        return Err(LandmarkInvalidation::Title);
    }
    if !pos.is_valid() {
        return Err(LandmarkInvalidation::Position);
    }
    Ok(())
}

impl Validate for NewLandmark {
    type Error = LandmarkInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        validate_landmark(&self.title, self.pos)
    }
}

impl Validate for LandmarkChanges {
    type Error = LandmarkInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        validate_landmark(&self.title, self.pos)
    }
}

impl AutoCorrect for NewLandmark {
    fn auto_correct(mut self) -> Self {
        self.title = self.title.trim().to_owned();
        self
    }
}

impl AutoCorrect for LandmarkChanges {
    fn auto_correct(mut self) -> Self {
        self.title = self.title.trim().to_owned();
        self
    }
}
