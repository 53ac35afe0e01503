use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing query parameter 'q'")]
    MissingQuery,

    #[error("No data to add")]
    MissingParameters,

    #[error("Missing key parameter")]
    MissingKey,

    #[error("Could not read sheet: {reason}")]
    SourceUnavailable { reason: String },

    #[error("Write endpoint failed: {reason}")]
    UpstreamWriteFailure { reason: String },

    #[error("Language model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    #[error("Unknown column: {column}")]
    UnknownColumn { column: String },

    #[error("Field '{field}' cannot be compared numerically")]
    FieldTypeError { field: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GatewayError {
    /// 機器可讀的錯誤代碼,作為回應 JSON 的 `error` 欄位
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingQuery => "missing_query",
            Self::MissingParameters => "missing_parameters",
            Self::MissingKey => "missing_key",
            Self::SourceUnavailable { .. } => "source_unavailable",
            Self::UpstreamWriteFailure { .. } => "upstream_write_failure",
            Self::ModelUnavailable { .. } => "model_unavailable",
            Self::UnknownColumn { .. } => "unknown_column",
            Self::FieldTypeError { .. } => "field_type_error",
            Self::CsvError(_) => "csv_error",
            Self::ApiError(_) => "api_error",
            Self::IoError(_) => "io_error",
            Self::SerializationError(_) => "serialization_error",
            Self::InvalidConfigValueError { .. } => "config_error",
        }
    }

    /// 呼叫端自己能修正的錯誤回 4xx,其餘一律 5xx
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingQuery | Self::MissingParameters | Self::MissingKey
        )
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
