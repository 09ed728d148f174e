use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::{TaskImporter, TaskStream};
use crate::domain::{ImportRequest, ImportSource, TaskRecord};
use crate::infrastructure::http::Transport;
use crate::shared::errors::{BulkImportError, ImportResult};

const REST_ENDPOINT: &str = "https://api.flickr.com/services/rest/";
const MSG_ALBUM_FETCH_FAILED: &str = "an error occurred fetching the album";

/// Imports one task per photo of a public Flickr photoset.
///
/// Holds the platform's API key baked in at registration time. Outbound
/// requests carry no user credential, so only public photos are reachable.
pub struct FlickrImporter {
    transport: Arc<dyn Transport>,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct RestResponse {
    stat: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    photoset: Option<Photoset>,
}

#[derive(Debug, Deserialize)]
struct Photoset {
    photo: Vec<Photo>,
    pages: u32,
    /// The API reports the total as a string.
    total: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Photo {
    id: String,
    secret: String,
    server: String,
    farm: u64,
    title: String,
}

impl FlickrImporter {
    pub fn new(transport: Arc<dyn Transport>, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
        }
    }

    /// Query for the photoset listing call. No user credential is ever
    /// included: only public photos must be reachable.
    fn query(&self, album_id: &str, page: Option<u32>) -> Vec<(String, String)> {
        let mut query = vec![
            (
                "method".to_string(),
                "flickr.photosets.getPhotos".to_string(),
            ),
            ("api_key".to_string(), self.api_key.clone()),
            ("photoset_id".to_string(), album_id.to_string()),
            ("format".to_string(), "json".to_string()),
            ("nojsoncallback".to_string(), "1".to_string()),
        ];
        if let Some(page) = page {
            query.push(("page".to_string(), page.to_string()));
        }
        query
    }

    async fn get_album_page(&self, album_id: &str, page: Option<u32>) -> ImportResult<Photoset> {
        let response = self
            .transport
            .get(REST_ENDPOINT, &self.query(album_id, page))
            .await?;

        if response.status != 200 {
            return Err(BulkImportError::SourceFailure(
                MSG_ALBUM_FETCH_FAILED.to_string(),
            ));
        }

        let rest: RestResponse = serde_json::from_str(&response.body)?;
        if rest.stat != "ok" {
            // The source reports its own failures inside a 200 response.
            return Err(BulkImportError::SourceFailure(
                rest.message
                    .unwrap_or_else(|| MSG_ALBUM_FETCH_FAILED.to_string()),
            ));
        }

        rest.photoset.ok_or_else(|| {
            BulkImportError::MalformedSource("Album response carried no photoset".to_string())
        })
    }

    /// Fetch every page of the album, in page order, before yielding
    /// anything. The API caps pages at 500 photos; remaining pages vary
    /// only the page number parameter.
    async fn get_all_photos(&self, album_id: &str) -> ImportResult<Vec<Photo>> {
        let first = self.get_album_page(album_id, None).await?;
        let pages = first.pages;
        let mut photos = first.photo;

        for page in 2..=pages {
            let next = self.get_album_page(album_id, Some(page)).await?;
            photos.extend(next.photo);
        }

        debug!(
            "Fetched {} photo(s) across {} page(s) of album {}",
            photos.len(),
            pages.max(1),
            album_id
        );
        Ok(photos)
    }
}

fn photo_record(photo: Photo) -> TaskRecord {
    let base = format!(
        "https://farm{}.staticflickr.com/{}/{}_{}",
        photo.farm, photo.server, photo.id, photo.secret
    );

    let mut info = Map::new();
    info.insert("title".to_string(), Value::String(photo.title));
    info.insert("url".to_string(), Value::String(format!("{}.jpg", base)));
    info.insert(
        "url_m".to_string(),
        Value::String(format!("{}_m.jpg", base)),
    );
    info.insert(
        "url_b".to_string(),
        Value::String(format!("{}_b.jpg", base)),
    );
    TaskRecord::new(info)
}

#[async_trait]
impl TaskImporter for FlickrImporter {
    fn source(&self) -> ImportSource {
        ImportSource::Flickr
    }

    /// The reported album total is trusted; no page beyond the first is
    /// fetched to answer a count.
    async fn count_tasks(&self, request: &ImportRequest) -> ImportResult<usize> {
        let album_id = request.require("album_id")?;
        let photoset = self.get_album_page(album_id, None).await?;

        photoset.total.parse().map_err(|_| {
            BulkImportError::MalformedSource(format!(
                "Album reported a non-numeric total: {}",
                photoset.total
            ))
        })
    }

    async fn tasks(&self, request: &ImportRequest) -> ImportResult<TaskStream> {
        let album_id = request.require("album_id")?;
        let photos = self.get_all_photos(album_id).await?;

        let records = photos
            .into_iter()
            .map(|photo| -> ImportResult<TaskRecord> { Ok(photo_record(photo)) });
        Ok(Box::new(records))
    }
}
