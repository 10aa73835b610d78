// Request payloads of landmark mutations.
//
// Coordinates are always submitted as decimal text in their shortest
// representation that parses back into the same `f64`.

use crate::entities::*;

pub const TITLE_FIELD: &str = "title";
pub const LAT_FIELD: &str = "lat";
pub const LNG_FIELD: &str = "lon";
pub const ID_FIELD: &str = "id";
pub const IMAGE_FIELD: &str = "image";

/// Tunnels an update through a `POST` request.
pub const METHOD_OVERRIDE_FIELD: &str = "_method";
pub const UPDATE_METHOD: &str = "PUT";

/// Query parameter that marks a `DELETE` request.
pub const DELETE_METHOD_PARAM: &str = "method";
pub const DELETE_METHOD: &str = "DELETE";

pub type Fields = Vec<(&'static str, String)>;

#[derive(Debug, Clone, PartialEq)]
pub enum Payload<'a> {
    /// Text fields plus the image as a binary attachment
    Multipart {
        fields: Fields,
        image: &'a EncodedImage,
    },
    /// Url-encoded text fields only
    FieldsOnly(Fields),
}

impl Payload<'_> {
    pub fn fields(&self) -> &Fields {
        match self {
            Self::Multipart { fields, .. } | Self::FieldsOnly(fields) => fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields()
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn image(&self) -> Option<&EncodedImage> {
        match self {
            Self::Multipart { image, .. } => Some(image),
            Self::FieldsOnly(_) => None,
        }
    }
}

pub fn format_coord(deg: f64) -> String {
    deg.to_string()
}

fn landmark_fields(fields: &mut Fields, title: &str, pos: MapPoint) {
    let (lat, lng) = pos.to_lat_lng_deg();
    fields.push((TITLE_FIELD, title.to_owned()));
    fields.push((LAT_FIELD, format_coord(lat)));
    fields.push((LNG_FIELD, format_coord(lng)));
}

pub fn create_payload<'a>(new_landmark: &NewLandmark, image: &'a EncodedImage) -> Payload<'a> {
    let mut fields = Vec::with_capacity(3);
    landmark_fields(&mut fields, &new_landmark.title, new_landmark.pos);
    Payload::Multipart { fields, image }
}

pub fn update_payload<'a>(
    changes: &LandmarkChanges,
    image: Option<&'a EncodedImage>,
) -> Payload<'a> {
    let mut fields = Vec::with_capacity(5);
    fields.push((METHOD_OVERRIDE_FIELD, UPDATE_METHOD.to_owned()));
    fields.push((ID_FIELD, changes.id.to_string()));
    landmark_fields(&mut fields, &changes.title, changes.pos);
    match image {
        Some(image) => Payload::Multipart { fields, image },
        None => Payload::FieldsOnly(fields),
    }
}

pub fn delete_query(id: Id) -> Fields {
    vec![
        (ID_FIELD, id.to_string()),
        (DELETE_METHOD_PARAM, DELETE_METHOD.to_owned()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> EncodedImage {
        EncodedImage {
            data: vec![0xFF, 0xD8, 0xFF],
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn shortest_round_trip_coordinates() {
        for deg in [23.685, 90.3563, -0.1, 1e-7, 179.999_999_999, 0.0] {
            let text = format_coord(deg);
            assert_eq!(text.parse::<f64>().unwrap(), deg);
        }
        assert_eq!(format_coord(23.685), "23.685");
        assert_eq!(format_coord(90.0), "90");
    }

    #[test]
    fn create_is_multipart() {
        let image = image();
        let new_landmark = NewLandmark {
            title: "Park".into(),
            pos: MapPoint::from_lat_lng_deg(23.685, 90.3563),
        };
        let payload = create_payload(&new_landmark, &image);
        assert_eq!(
            payload.fields(),
            &vec![
                ("title", "Park".to_owned()),
                ("lat", "23.685".to_owned()),
                ("lon", "90.3563".to_owned()),
            ]
        );
        assert_eq!(payload.image(), Some(&image));
    }

    #[test]
    fn update_with_and_without_image() {
        let image = image();
        let changes = LandmarkChanges {
            id: Id::new(17),
            title: "Park".into(),
            pos: MapPoint::from_lat_lng_deg(-1.5, 2.25),
        };
        let with_image = update_payload(&changes, Some(&image));
        assert!(matches!(with_image, Payload::Multipart { .. }));
        assert_eq!(with_image.field("_method"), Some("PUT"));
        assert_eq!(with_image.field("id"), Some("17"));

        let without_image = update_payload(&changes, None);
        assert_eq!(
            without_image,
            Payload::FieldsOnly(vec![
                ("_method", "PUT".to_owned()),
                ("id", "17".to_owned()),
                ("title", "Park".to_owned()),
                ("lat", "-1.5".to_owned()),
                ("lon", "2.25".to_owned()),
            ])
        );
        assert!(without_image.image().is_none());
    }

    #[test]
    fn delete_marks_method() {
        assert_eq!(
            delete_query(Id::new(3)),
            vec![("id", "3".to_owned()), ("method", "DELETE".to_owned())]
        );
    }
}
