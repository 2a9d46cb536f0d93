use crate::error::{Error, Result};
use serde::Deserialize;

pub const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

/// Image asset reference as stored on documents: either an unresolved
/// `_ref` or an already-dereferenced `url`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetId<'a> {
    pub id: &'a str,
    pub width: u32,
    pub height: u32,
    pub format: &'a str,
}

/// Split `image-<id>-<w>x<h>-<ext>` into its parts.
pub fn parse_asset_ref(reference: &str) -> Result<AssetId<'_>> {
    let invalid = || Error::InvalidImageRef(reference.to_string());
    let rest = reference.strip_prefix("image-").ok_or_else(invalid)?;
    let (rest, format) = rest.rsplit_once('-').ok_or_else(invalid)?;
    let (id, dims) = rest.rsplit_once('-').ok_or_else(invalid)?;
    let (w, h) = dims.split_once('x').ok_or_else(invalid)?;
    let width = w.parse::<u32>().map_err(|_| invalid())?;
    let height = h.parse::<u32>().map_err(|_| invalid())?;
    if id.is_empty() || format.is_empty() {
        return Err(invalid());
    }
    Ok(AssetId {
        id,
        width,
        height,
        format,
    })
}

/// Resolves asset references into CDN URLs for one project/dataset.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUrlBuilder {
    pub project_id: String,
    #[serde(default = "default_dataset")]
    pub dataset: String,
}

fn default_dataset() -> String {
    "production".to_string()
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn url_for_ref(&self, reference: &str, width: Option<u32>) -> Result<String> {
        let asset = parse_asset_ref(reference)?;
        let mut url = format!(
            "{}/{}/{}/{}-{}x{}.{}?auto=format",
            IMAGE_CDN,
            self.project_id,
            self.dataset,
            asset.id,
            asset.width,
            asset.height,
            asset.format
        );
        if let Some(w) = width {
            url.push_str(&format!("&w={}", w.min(asset.width)));
        }
        Ok(url)
    }

    pub fn url(&self, asset: &AssetRef, width: Option<u32>) -> Result<String> {
        if let Some(url) = asset.url.as_deref().filter(|u| !u.is_empty()) {
            return Ok(url.to_string());
        }
        let reference = asset
            .reference
            .as_deref()
            .ok_or_else(|| Error::InvalidImageRef(String::new()))?;
        self.url_for_ref(reference, width)
    }
}
