//! `/api/shorturl` handlers
//!
//! The wire contract is fixed: successes and expected rejections answer 200
//! with a JSON body, internal failures answer 500 with the same error shape,
//! and unknown ids answer 404.

use std::sync::Arc;

use actix_web::error::{InternalError, JsonPayloadError, UrlencodedError};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{Either, HttpRequest, HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};
use url::Url;

use crate::errors::ShortUrlError;
use crate::services::ShortUrlService;
use crate::utils::parse_short_id;

/// Submission body, accepted as JSON or as an urlencoded form
#[derive(Debug, Clone, Deserialize)]
pub struct ShortUrlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortUrlCreated {
    pub original_url: String,
    pub short_url: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

pub struct ShortUrlApi;

impl ShortUrlApi {
    pub async fn create(
        service: web::Data<Arc<ShortUrlService>>,
        body: Either<web::Json<ShortUrlRequest>, web::Form<ShortUrlRequest>>,
    ) -> impl Responder {
        let request = match body {
            Either::Left(json) => json.into_inner(),
            Either::Right(form) => form.into_inner(),
        };

        // 缺少 url 字段与无法解析的 URL 同样处理
        let Some(url) = request.url else {
            debug!("Submission without url field");
            return Self::error_response(&ShortUrlError::invalid_url("missing url field"));
        };

        match service.submit(&url).await {
            Ok(record) => HttpResponse::Ok().json(ShortUrlCreated {
                original_url: record.original_url,
                short_url: record.id,
            }),
            Err(e) => Self::error_response(&e),
        }
    }

    pub async fn redirect(
        service: web::Data<Arc<ShortUrlService>>,
        path: web::Path<String>,
    ) -> impl Responder {
        let raw = path.into_inner();

        let Some(id) = parse_short_id(&raw) else {
            trace!("Non-numeric short url rejected: {}", raw);
            return Self::error_response(&ShortUrlError::not_found(raw));
        };

        match service.lookup(id).await {
            Ok(Some(record)) => match location_header(&record.original_url) {
                Some(location) => {
                    debug!("Redirecting {} -> {}", id, record.original_url);
                    HttpResponse::Found()
                        .insert_header((header::LOCATION, location))
                        .finish()
                }
                None => Self::error_response(&ShortUrlError::serialization(format!(
                    "stored URL for {} is not a valid Location header",
                    id
                ))),
            },
            Ok(None) => {
                debug!("Short url not found: {}", id);
                Self::error_response(&ShortUrlError::not_found(id.to_string()))
            }
            Err(e) => Self::error_response(&e),
        }
    }

    fn error_response(err: &ShortUrlError) -> HttpResponse {
        if err.is_internal() {
            error!(
                code = err.code(),
                "Error processing request: {}",
                err.format_simple()
            );
        }

        HttpResponse::build(err.status_code()).json(ErrorBody {
            error: err.client_message().to_string(),
        })
    }
}

/// Location header for a stored URL
///
/// The stored string is used as is whenever it is a legal header value; URLs
/// carrying raw non-ASCII characters fall back to their percent-encoded form.
fn location_header(original_url: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(original_url).ok().or_else(|| {
        Url::parse(original_url)
            .ok()
            .and_then(|u| HeaderValue::from_str(u.as_str()).ok())
    })
}

/// 无法解码的提交体（缺少或未知的 Content-Type、格式错误、`url` 非字符串）按 Invalid URL 应答
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Undecodable JSON submission: {}", err);
    let response = ShortUrlApi::error_response(&ShortUrlError::invalid_url(err.to_string()));
    InternalError::from_response(err, response).into()
}

fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Undecodable form submission: {}", err);
    let response = ShortUrlApi::error_response(&ShortUrlError::invalid_url(err.to_string()));
    InternalError::from_response(err, response).into()
}

pub fn shorturl_routes() -> actix_web::Scope {
    web::scope("/api/shorturl")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .route("", web::post().to(ShortUrlApi::create))
        .route("/{short_url}", web::get().to(ShortUrlApi::redirect))
}
