//! Serves the embedded single-page app.
//!
//! Any path that is not an embedded file gets `index.html`, so `/campaign-info`,
//! `/ad-entries` and `/results` can be opened or refreshed directly and the
//! client-side router picks the step.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";
const INDEX_MIME: &str = "text/html; charset=utf-8";

/// A file picked from an embedded directory.
#[derive(Debug)]
pub struct Asset<'a> {
    pub content_type: String,
    pub contents: &'a [u8],
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve(&STATIC_DIR, req.path()) {
        Some(asset) => HttpResponse::Ok()
            .content_type(asset.content_type)
            .body(asset.contents.to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

/// Looks `request_path` up in `dir`, falling back to the SPA entry point.
/// Returns `None` only when `dir` has no `index.html` either.
pub fn resolve<'a>(dir: &'a Dir<'a>, request_path: &str) -> Option<Asset<'a>> {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = dir.get_file(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        return Some(Asset {
            content_type: mime.as_ref().to_string(),
            contents: file.contents(),
        });
    }

    debug!("No embedded file for {}, serving {}", request_path, INDEX);
    dir.get_file(INDEX).map(|index| Asset {
        content_type: INDEX_MIME.to_string(),
        contents: index.contents(),
    })
}
