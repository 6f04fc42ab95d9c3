//! URL 验证模块
//!
//! 把输入解析为绝对 URL 并提取主机名。不做协议白名单：
//! 任何能解析出非空主机的 URL 都会进入后续的域名解析阶段。

use url::{Host, Url};

/// URL 验证错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    InvalidFormat(String),
    MissingHost,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
            Self::MissingHost => write!(f, "URL has no host"),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证 URL 并返回主机名
///
/// 检查项目：
/// 1. 能按标准 URL 语法解析为绝对 URL
/// 2. 包含非空主机
///
/// 输入原样解析，不做 trim 或其他规范化。IPv6 地址返回时不带方括号，
/// 可以直接交给解析器。
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let parsed = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => Ok(domain.to_string()),
        Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
        Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
