use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::errors::HmsIapError;

/// JSON codec shared by every HMS IAP server model.
///
/// Unknown keys in the payload are ignored, and optional fields that are
/// `None` are left out of the encoded output.
pub trait HmsModel: Serialize + DeserializeOwned {
    /// Name of the provider-side data structure, used in errors and logs.
    const MODEL_NAME: &'static str;

    fn from_json(data: &str) -> Result<Self, HmsIapError> {
        decode(Self::MODEL_NAME, data.as_bytes())
    }

    fn from_slice(data: &[u8]) -> Result<Self, HmsIapError> {
        decode(Self::MODEL_NAME, data)
    }

    fn to_json(&self) -> Result<String, HmsIapError> {
        serde_json::to_string(self).map_err(|e| HmsIapError::Serialize {
            model: Self::MODEL_NAME,
            source: e,
        })
    }

    fn to_vec(&self) -> Result<Vec<u8>, HmsIapError> {
        serde_json::to_vec(self).map_err(|e| HmsIapError::Serialize {
            model: Self::MODEL_NAME,
            source: e,
        })
    }
}

pub(crate) fn decode<T: DeserializeOwned>(
    model: &'static str,
    data: &[u8],
) -> Result<T, HmsIapError> {
    serde_json::from_slice(data).map_err(|e| {
        debug!(
            model,
            line = e.line(),
            column = e.column(),
            "failed to parse HMS IAP payload: {e}"
        );
        HmsIapError::Parse { model, source: e }
    })
}

/// Converts provider milliseconds since the Unix epoch to a UTC time. `None`
/// if the value is outside the range `chrono` can represent.
pub(crate) fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
