use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("upstream returned HTTP {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed record: field `{field}`: {reason}")]
    MalformedRecord { field: String, reason: String },

    #[error("incomplete source data: missing {missing}")]
    IncompleteSource { missing: String },

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("no results for this query")]
    NotFound,

    #[error("table render failed: expected columns [{expected}], got [{got}]")]
    Render { expected: String, got: String },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl BotError {
    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        BotError::MalformedRecord {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// One user-facing line per error; the detailed variant goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            BotError::UpstreamStatus { .. } | BotError::Transport(_) => {
                "Failed to fetch data from the API.".to_string()
            }
            BotError::MalformedRecord { field, .. } => {
                format!("The API returned unexpected data (field `{field}`).")
            }
            BotError::IncompleteSource { missing } => {
                format!("Could not assemble the report: missing {missing}.")
            }
            BotError::InvalidQuery(reason) => format!("Invalid query: {reason}"),
            BotError::NotFound => "No information found for this query.".to_string(),
            BotError::Render { .. } | BotError::Json(_) => {
                "Could not format the reply.".to_string()
            }
            BotError::Io(_) | BotError::InvalidConfigValue { .. } => {
                format!("Configuration problem: {self}")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
