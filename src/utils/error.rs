use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Empty table: {source_name} has no header row")]
    EmptyTable { source_name: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Process '{command}' failed: {message}")]
    ProcessError { command: String, message: String },

    #[error("Process '{command}' timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Process,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl GeneError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GeneError::IoError(_) => ErrorCategory::Io,
            GeneError::CsvError(_)
            | GeneError::EmptyTable { .. }
            | GeneError::SerializationError(_) => ErrorCategory::Data,
            GeneError::YamlError(_)
            | GeneError::ConfigValidationError { .. }
            | GeneError::MissingConfigError { .. }
            | GeneError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GeneError::ProcessError { .. } | GeneError::Timeout { .. } => ErrorCategory::Process,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GeneError::Timeout { .. } => ErrorSeverity::Medium,
            GeneError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, GeneError::Timeout { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GeneError::IoError(e) => format!("檔案操作失敗: {}", e),
            GeneError::CsvError(e) => format!("CSV 資料格式錯誤: {}", e),
            GeneError::YamlError(e) => format!("YAML 設定檔格式錯誤: {}", e),
            GeneError::Timeout { command, timeout } => {
                format!("執行 '{}' 超過 {:?} 未完成", command, timeout)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "檢查輸出目錄是否存在且具有寫入權限",
            ErrorCategory::Data => "確認 CSV 檔案包含 sparrow,butterfly,identity,category 標題列",
            ErrorCategory::Configuration => "檢查設定檔內容與欄位名稱",
            ErrorCategory::Process => "確認分析程式可以單獨執行，或調高 --timeout-secs",
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_distinct_process_error() {
        let err = GeneError::Timeout {
            command: "flight-genes".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert!(err.is_timeout());
        assert_eq!(err.category(), ErrorCategory::Process);
        assert_eq!(err.to_string(), "Process 'flight-genes' timed out after 5s");

        let failed = GeneError::ProcessError {
            command: "flight-genes".to_string(),
            message: "exit status 1".to_string(),
        };
        assert!(!failed.is_timeout());
        assert_eq!(failed.category(), ErrorCategory::Process);
    }

    #[test]
    fn test_empty_table_is_data_error() {
        let err = GeneError::EmptyTable {
            source_name: "orthologs.csv".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Empty table: orthologs.csv has no header row");
    }

    #[test]
    fn test_json_error_converts_to_serialization_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GeneError::from(json_err);
        assert!(matches!(err, GeneError::SerializationError(_)));
        assert_eq!(err.category(), ErrorCategory::Data);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = GeneError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
