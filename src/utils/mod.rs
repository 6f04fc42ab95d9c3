pub mod url_validator;

pub use url_validator::{UrlValidationError, validate_url};

/// 将路径参数解析为短链接 ID
///
/// 只接受十进制正整数，前后空白会被忽略；十六进制、科学计数法、小数等其余输入一律视为不存在。
pub fn parse_short_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
