/// Test data factories
///
/// Canned responses shaped like the real sources, with sensible defaults
use serde_json::{json, Value};

use taskhive_import::infrastructure::http::FetchedResponse;

pub fn response(body: &str, status: u16, content_type: &str) -> FetchedResponse {
    FetchedResponse {
        status,
        content_type: Some(content_type.to_string()),
        body: body.to_string(),
    }
}

pub fn csv_response(body: &str) -> FetchedResponse {
    response(body, 200, "text/plain")
}

pub fn json_response(body: Value) -> FetchedResponse {
    response(&body.to_string(), 200, "application/json")
}

/// A photo entry shaped the way the photoset listing endpoint returns them.
pub fn flickr_photo() -> Value {
    json!({
        "isfamily": 0,
        "title": "Inflating the balloon",
        "farm": 6,
        "ispublic": 1,
        "server": "5441",
        "isfriend": 0,
        "secret": "00e2301a0d",
        "isprimary": "0",
        "id": "8947115130"
    })
}

/// One page of a photoset listing response carrying `photos_on_page` copies
/// of the canonical photo.
pub fn flickr_album_page(
    page: u32,
    pages: u32,
    total: usize,
    photos_on_page: usize,
) -> FetchedResponse {
    let photos: Vec<Value> = (0..photos_on_page).map(|_| flickr_photo()).collect();
    json_response(json!({
        "stat": "ok",
        "photoset": {
            "perpage": 500,
            "per_page": 500,
            "title": "Science Hack Day Balloon Mapping Workshop",
            "photo": photos,
            "pages": pages,
            "page": page,
            "total": total.to_string(),
            "primary": "8947113500",
            "id": "72157633923521788",
            "ownername": "Teleyinex",
            "owner": "32985084@N00"
        }
    }))
}

/// The upstream's own failure signal, delivered inside a 200 response.
pub fn flickr_failure() -> FetchedResponse {
    json_response(json!({
        "stat": "fail",
        "code": 1,
        "message": "Photoset not found"
    }))
}
