use actix_web::{HttpRequest, HttpResponse, Result, web};
use rust_embed::Embed;
use tracing::{debug, trace};

// 使用 RustEmbed 嵌入首页与静态资源
#[derive(Embed)]
#[folder = "frontend/"]
struct FrontendAssets;

pub struct FrontendService;

impl FrontendService {
    /// 首页：提交表单
    pub async fn handle_index(_req: HttpRequest) -> Result<HttpResponse> {
        trace!("Serving index page");

        match FrontendAssets::get("index.html") {
            Some(content) => {
                let html = String::from_utf8_lossy(&content.data)
                    .replace("%SHORTURL_VERSION%", env!("CARGO_PKG_VERSION"));
                Ok(HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(html))
            }
            None => Ok(HttpResponse::NotFound().body("Not Found")),
        }
    }

    /// 处理 /public 下的静态资源
    pub async fn handle_static(req: HttpRequest) -> Result<HttpResponse> {
        let path = req.match_info().query("path");
        trace!("Serving static file: {}", path);

        match FrontendAssets::get(&format!("public/{}", path)) {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type(Self::get_content_type(path))
                .body(content.data.into_owned())),
            None => {
                debug!("Static file not found: {}", path);
                Ok(HttpResponse::NotFound().body("File not found"))
            }
        }
    }

    /// 根据文件扩展名确定 Content-Type
    fn get_content_type(path: &str) -> &'static str {
        match path.rsplit('.').next() {
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("png") => "image/png",
            Some("svg") => "image/svg+xml",
            Some("ico") => "image/x-icon",
            Some("html") => "text/html; charset=utf-8",
            _ => "application/octet-stream",
        }
    }
}

pub fn frontend_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(FrontendService::handle_index))
        .route("/public/{path:.*}", web::get().to(FrontendService::handle_static))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!(FrontendService::get_content_type("style.css"), "text/css");
        assert_eq!(FrontendService::get_content_type("a/b/app.js"), "application/javascript");
        assert_eq!(FrontendService::get_content_type("blob"), "application/octet-stream");
    }

    #[test]
    fn test_assets_are_embedded() {
        assert!(FrontendAssets::get("index.html").is_some());
        assert!(FrontendAssets::get("public/style.css").is_some());
    }
}
