use serde::{
    Deserialize,
    Serialize,
};

use arbor_merkle::common::Bytes32;

use crate::data::TestError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Base64,
    Hex,
    #[serde(rename = "utf-8")]
    Utf8,
}

/// A byte string stored in a fixture together with the text encoding it was
/// written in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EncodedValue {
    value: String,
    encoding: Encoding,
}

impl EncodedValue {
    pub fn new(value: String, encoding: Encoding) -> Self {
        Self { value, encoding }
    }

    pub fn from_raw<T: AsRef<[u8]>>(value: T, encoding: Encoding) -> Self {
        let encoded_value = match encoding {
            Encoding::Base64 => base64::encode(value),
            Encoding::Hex => hex::encode(value),
            Encoding::Utf8 => String::from_utf8_lossy(value.as_ref()).to_string(),
        };
        Self {
            value: encoded_value,
            encoding,
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, TestError> {
        match self.encoding {
            Encoding::Base64 => {
                base64::decode(self.value).map_err(|_| TestError::DecodingError)
            }
            Encoding::Hex => {
                hex::decode(self.value).map_err(|_| TestError::DecodingError)
            }
            Encoding::Utf8 => Ok(self.value.into_bytes()),
        }
    }

    /// Decodes the value as a 32-byte digest.
    pub fn into_digest(self) -> Result<Bytes32, TestError> {
        let bytes = self.into_bytes()?;
        Bytes32::try_from(bytes.as_slice()).map_err(|_| TestError::DigestLength {
            expected: 32,
            actual: bytes.len(),
        })
    }
}
