use std::fmt;

use actix_web::http::StatusCode;

use crate::utils::url_validator::UrlValidationError;

/// 对外暴露的固定错误文案
///
/// 两种文案大小写不同，客户端按原文匹配。
pub const INVALID_URL_MESSAGE: &str = "Invalid URL";
pub const UNRESOLVABLE_URL_MESSAGE: &str = "invalid url";
pub const NOT_FOUND_MESSAGE: &str = "No short URL found for the given input";

#[derive(Debug, Clone)]
pub enum ShortUrlError {
    InvalidUrl(String),
    UnresolvableHost(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    NotFound(String),
    Serialization(String),
}

impl ShortUrlError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortUrlError::InvalidUrl(_) => "E001",
            ShortUrlError::UnresolvableHost(_) => "E002",
            ShortUrlError::DatabaseConfig(_) => "E003",
            ShortUrlError::DatabaseConnection(_) => "E004",
            ShortUrlError::DatabaseOperation(_) => "E005",
            ShortUrlError::NotFound(_) => "E006",
            ShortUrlError::Serialization(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortUrlError::InvalidUrl(_) => "Invalid URL",
            ShortUrlError::UnresolvableHost(_) => "Unresolvable Host",
            ShortUrlError::DatabaseConfig(_) => "Database Configuration Error",
            ShortUrlError::DatabaseConnection(_) => "Database Connection Error",
            ShortUrlError::DatabaseOperation(_) => "Database Operation Error",
            ShortUrlError::NotFound(_) => "Resource Not Found",
            ShortUrlError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortUrlError::InvalidUrl(msg)
            | ShortUrlError::UnresolvableHost(msg)
            | ShortUrlError::DatabaseConfig(msg)
            | ShortUrlError::DatabaseConnection(msg)
            | ShortUrlError::DatabaseOperation(msg)
            | ShortUrlError::NotFound(msg)
            | ShortUrlError::Serialization(msg) => msg,
        }
    }

    /// Whether this error is a fault of the service rather than of the input.
    pub fn is_internal(&self) -> bool {
        !matches!(
            self,
            ShortUrlError::InvalidUrl(_)
                | ShortUrlError::UnresolvableHost(_)
                | ShortUrlError::NotFound(_)
        )
    }

    /// Message placed in the `{ "error": ... }` body returned to clients.
    ///
    /// Internal failures share the resolution failure text.
    pub fn client_message(&self) -> &'static str {
        match self {
            ShortUrlError::InvalidUrl(_) => INVALID_URL_MESSAGE,
            ShortUrlError::NotFound(_) => NOT_FOUND_MESSAGE,
            _ => UNRESOLVABLE_URL_MESSAGE,
        }
    }

    /// HTTP status paired with [`client_message`](Self::client_message).
    ///
    /// Validation and resolution rejections are normal outcomes and answer 200.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShortUrlError::InvalidUrl(_) | ShortUrlError::UnresolvableHost(_) => StatusCode::OK,
            ShortUrlError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortUrlError {}

// 便捷的构造函数
impl ShortUrlError {
    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        ShortUrlError::InvalidUrl(msg.into())
    }

    pub fn unresolvable_host<T: Into<String>>(msg: T) -> Self {
        ShortUrlError::UnresolvableHost(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ShortUrlError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ShortUrlError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ShortUrlError::DatabaseOperation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortUrlError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortUrlError::Serialization(msg.into())
    }
}

impl From<sea_orm::DbErr> for ShortUrlError {
    fn from(err: sea_orm::DbErr) -> Self {
        ShortUrlError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ShortUrlError {
    fn from(err: serde_json::Error) -> Self {
        ShortUrlError::Serialization(err.to_string())
    }
}

impl From<UrlValidationError> for ShortUrlError {
    fn from(err: UrlValidationError) -> Self {
        ShortUrlError::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortUrlError>;
