use super::{prelude::*, LandmarkInput};
use crate::util::validate::{is_valid_title, AutoCorrect, Validate};

/// Check the input of a new landmark.
///
/// The title is checked first, then the coordinates and
/// finally the presence of an image.
pub fn prepare_new_landmark(input: &LandmarkInput, image: Option<&RawImage>) -> Result<NewLandmark> {
    if !is_valid_title(&input.title) {
        return Err(Error::Title);
    }
    let pos = input.pos()?;
    if image.map_or(true, RawImage::is_empty) {
        return Err(Error::MissingImage);
    }
    let new_landmark = NewLandmark {
        title: input.title.clone(),
        pos,
    }
    .auto_correct();
    new_landmark.validate()?;
    Ok(new_landmark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> RawImage {
        vec![1, 2, 3].into()
    }

    #[test]
    fn valid_input() {
        let input = LandmarkInput::new(" Park ", "23.685", " 90.3563");
        let new_landmark = prepare_new_landmark(&input, Some(&image())).unwrap();
        assert_eq!(new_landmark.title, "Park");
        assert_eq!(new_landmark.pos.to_lat_lng_deg(), (23.685, 90.3563));
    }

    #[test]
    fn empty_title() {
        let input = LandmarkInput::new("  ", "23.685", "90.3563");
        assert_eq!(
            prepare_new_landmark(&input, Some(&image())),
            Err(Error::Title)
        );
    }

    #[test]
    fn invalid_coordinates() {
        let input = LandmarkInput::new("Park", "abc", "90.3563");
        assert_eq!(
            prepare_new_landmark(&input, Some(&image())),
            Err(Error::Position(MapPointParseError::LatitudeFormat(
                "abc".into()
            )))
        );
        let input = LandmarkInput::new("Park", "23.685", "180.5");
        assert_eq!(
            prepare_new_landmark(&input, Some(&image())),
            Err(Error::Position(MapPointParseError::LongitudeRange(180.5)))
        );
        let input = LandmarkInput::new("Park", "NaN", "1");
        assert!(matches!(
            prepare_new_landmark(&input, Some(&image())),
            Err(Error::Position(MapPointParseError::LatitudeRange(_)))
        ));
    }

    #[test]
    fn image_is_required() {
        let input = LandmarkInput::new("Park", "23.685", "90.3563");
        assert_eq!(prepare_new_landmark(&input, None), Err(Error::MissingImage));
        assert_eq!(
            prepare_new_landmark(&input, Some(&Vec::new().into())),
            Err(Error::MissingImage)
        );
    }
}
