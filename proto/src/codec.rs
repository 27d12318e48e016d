use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::OpCode;

/// Payload encoding negotiated per match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// `{"y": 120.0}` style bodies
    #[default]
    Json,
    /// Compact postcard bodies
    Postcard,
}

impl Encoding {
    pub fn encode<T: Serialize>(self, value: &T) -> Result<Vec<u8>, EncodeError> {
        Ok(match self {
            Encoding::Json => serde_json::to_vec(value)?,
            Encoding::Postcard => postcard::to_allocvec(value)?,
        })
    }

    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, DecodeError> {
        Ok(match self {
            Encoding::Json => serde_json::from_slice(bytes)?,
            Encoding::Postcard => postcard::from_bytes(bytes)?,
        })
    }
}

/// Why an inbound payload could not be turned into a message
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unknown opcode {0}")]
    UnknownOpCode(i64),

    #[error("opcode {0:?} is not accepted in this direction")]
    WrongDirection(OpCode),

    #[error("malformed json payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed binary payload: {0}")]
    Postcard(#[from] postcard::Error),

    #[error("field `{0}` is not a number")]
    NotANumber(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding failed: {0}")]
    Postcard(#[from] postcard::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        y: f32,
    }

    #[test]
    fn test_json_field_names() {
        let bytes = Encoding::Json.encode(&Probe { y: 12.5 }).unwrap();
        assert_eq!(bytes, br#"{"y":12.5}"#.to_vec());
    }

    #[test]
    fn test_postcard_is_compact() {
        let bytes = Encoding::Postcard.encode(&Probe { y: 12.5 }).unwrap();
        assert_eq!(bytes.len(), 4, "f32 is written as four raw bytes");
        let back: Probe = Encoding::Postcard.decode(&bytes).unwrap();
        assert_eq!(back, Probe { y: 12.5 });
    }

    #[test]
    fn test_decode_garbage_is_an_error() {
        assert!(matches!(
            Encoding::Json.decode::<Probe>(b"{not json"),
            Err(DecodeError::Json(_))
        ));
        assert!(matches!(
            Encoding::Postcard.decode::<Probe>(&[1, 2]),
            Err(DecodeError::Postcard(_))
        ));
    }

    #[test]
    fn test_encoding_names() {
        let parsed: Encoding = serde_json::from_str(r#""postcard""#).unwrap();
        assert_eq!(parsed, Encoding::Postcard);
        assert_eq!(Encoding::default(), Encoding::Json);
    }
}
