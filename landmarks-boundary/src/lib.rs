use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use self::conv::*;

/// A JSON value the remote store uses interchangeably
/// for numbers, i.e. `12`, `12.5` or `"12.5"`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Int(v) => u64::try_from(*v).ok(),
            Self::Float(v) => (v.fract() == 0.0 && *v >= 0.0 && *v <= u64::MAX as f64)
                .then_some(*v as u64),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Landmark {
    pub id    : Scalar,
    pub title : Option<String>,
    pub lat   : Option<Scalar>,
    pub lon   : Option<Scalar>,
    pub image : Option<String>,
}

/// Response of a mutation that only reports the affected id.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Created {
    pub id: Scalar,
}

/// Error body of a failed request.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ErrorMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorMessage {
    pub fn into_text(self) -> Option<String> {
        self.message.or(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_landmark_with_textual_coordinates() {
        let json = r#"{"id":3,"title":"Park","lat":"23.685","lon":"90.3563","image":"images/3.jpg"}"#;
        let lm: Landmark = serde_json::from_str(json).unwrap();
        assert_eq!(lm.id.to_u64(), Some(3));
        assert_eq!(lm.lat.unwrap().to_f64(), Some(23.685));
        assert_eq!(lm.lon.unwrap().to_f64(), Some(90.3563));
    }

    #[test]
    fn deserialize_landmark_with_numeric_coordinates_and_textual_id() {
        let json = r#"{"id":"12","title":"Lake","lat":23,"lon":90.5,"image":null}"#;
        let lm: Landmark = serde_json::from_str(json).unwrap();
        assert_eq!(lm.id.to_u64(), Some(12));
        assert_eq!(lm.lat.unwrap().to_f64(), Some(23.0));
        assert_eq!(lm.lon.unwrap().to_f64(), Some(90.5));
        assert!(lm.image.is_none());
    }

    #[test]
    fn deserialize_landmark_with_missing_fields() {
        let lm: Landmark = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert!(lm.title.is_none());
        assert!(lm.lat.is_none());
        assert!(lm.lon.is_none());
        assert!(lm.image.is_none());
    }

    #[test]
    fn scalar_to_u64() {
        assert_eq!(Scalar::Int(-1).to_u64(), None);
        assert_eq!(Scalar::Float(2.0).to_u64(), Some(2));
        assert_eq!(Scalar::Float(2.5).to_u64(), None);
        assert_eq!(Scalar::Text(" 42 ".into()).to_u64(), Some(42));
        assert_eq!(Scalar::Text("x".into()).to_u64(), None);
    }

    #[test]
    fn error_message_text() {
        let msg: ErrorMessage = serde_json::from_str(r#"{"error":"Not found"}"#).unwrap();
        assert_eq!(msg.into_text().as_deref(), Some("Not found"));
    }
}
