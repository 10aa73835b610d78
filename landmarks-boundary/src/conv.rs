use super::*;
use landmarks_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid landmark id: {0}")]
    InvalidId(String),
}

impl TryFrom<Landmark> for e::landmark::Landmark {
    type Error = ConversionError;
    fn try_from(from: Landmark) -> Result<Self, Self::Error> {
        let Landmark {
            id,
            title,
            lat,
            lon,
            image,
        } = from;
        let id = id
            .to_u64()
            .map(e::id::Id::new)
            .ok_or_else(|| ConversionError::InvalidId(id.to_string()))?;
        Ok(Self {
            id,
            title: title.unwrap_or_default(),
            lat: lat.as_ref().and_then(Scalar::to_f64),
            lng: lon.as_ref().and_then(Scalar::to_f64),
            image: image.unwrap_or_default().into(),
        })
    }
}

impl From<e::landmark::Landmark> for Landmark {
    fn from(from: e::landmark::Landmark) -> Self {
        let e::landmark::Landmark {
            id,
            title,
            lat,
            lng,
            image,
        } = from;
        let id = i64::try_from(id.to_raw())
            .map(Scalar::Int)
            .unwrap_or_else(|_| Scalar::Text(id.to_string()));
        let image: String = image.into();
        Self {
            id,
            title: Some(title),
            lat: lat.map(Scalar::Float),
            lon: lng.map(Scalar::Float),
            image: (!image.is_empty()).then_some(image),
        }
    }
}

impl TryFrom<Created> for e::id::Id {
    type Error = ConversionError;
    fn try_from(from: Created) -> Result<Self, Self::Error> {
        from.id
            .to_u64()
            .map(Self::new)
            .ok_or_else(|| ConversionError::InvalidId(from.id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_into_entity() {
        let lm = Landmark {
            id: Scalar::Text("5".into()),
            title: Some("Park".into()),
            lat: Some(Scalar::Text("23.685".into())),
            lon: Some(Scalar::Text("not a number".into())),
            image: Some("images/5.jpg".into()),
        };
        let lm = e::landmark::Landmark::try_from(lm).unwrap();
        assert_eq!(lm.id, e::id::Id::new(5));
        assert_eq!(lm.title, "Park");
        assert_eq!(lm.lat, Some(23.685));
        assert_eq!(lm.lng, None);
        assert_eq!(lm.image.as_str(), "images/5.jpg");
        assert!(!lm.is_displayable());
    }

    #[test]
    fn reject_invalid_id() {
        let lm = Landmark {
            id: Scalar::Float(-3.0),
            title: None,
            lat: None,
            lon: None,
            image: None,
        };
        assert!(e::landmark::Landmark::try_from(lm).is_err());
    }

    #[test]
    fn convert_from_entity() {
        let lm = e::landmark::Landmark {
            id: e::id::Id::new(9),
            title: "Lake".into(),
            lat: Some(1.5),
            lng: Some(-2.25),
            image: e::landmark::ImagePath::default(),
        };
        let lm = Landmark::from(lm);
        assert_eq!(lm.id, Scalar::Int(9));
        assert_eq!(lm.lat, Some(Scalar::Float(1.5)));
        assert_eq!(lm.lon, Some(Scalar::Float(-2.25)));
        assert!(lm.image.is_none());
    }
}
