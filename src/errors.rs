use thiserror::Error;

#[derive(Debug, Error)]
pub enum HmsIapError {
    /// The payload was not well-formed JSON, or a required field was missing
    /// or had the wrong type.
    #[error("failed to parse {model}: {source}")]
    Parse {
        model: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {model}: {source}")]
    Serialize {
        model: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl HmsIapError {
    /// One-based line of the payload where decoding stopped, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            HmsIapError::Parse { source, .. } if source.line() > 0 => Some(source.line()),
            _ => None,
        }
    }

    /// One-based column of the payload where decoding stopped, if known.
    pub fn column(&self) -> Option<usize> {
        match self {
            HmsIapError::Parse { source, .. } if source.line() > 0 => Some(source.column()),
            _ => None,
        }
    }

    /// Name of the provider data structure being decoded or encoded.
    pub fn model(&self) -> &'static str {
        match self {
            HmsIapError::Parse { model, .. } | HmsIapError::Serialize { model, .. } => *model,
        }
    }
}
