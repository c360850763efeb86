use core_config::uploads::UploadsConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A collectable waste category (e.g. batteries, cooking oil)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Catalog identifier
    pub id: i32,
    /// Display title
    pub title: String,
    /// Stored icon filename (e.g. "oleo.svg")
    pub image: String,
}

/// Item as returned over the API, with the icon resolved to an absolute URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: i32,
    pub title: String,
    /// Absolute URL of the item icon
    pub image_url: String,
}

impl ItemResponse {
    pub fn from_item(item: Item, uploads: &UploadsConfig) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: uploads.image_url(&item.image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_response_resolves_image_url() {
        let item = Item {
            id: 1,
            title: "Lâmpadas".to_string(),
            image: "lampadas.svg".to_string(),
        };
        let uploads = UploadsConfig::new("uploads", "http://localhost:8080/uploads");

        let response = ItemResponse::from_item(item, &uploads);
        assert_eq!(response.image_url, "http://localhost:8080/uploads/lampadas.svg");
    }
}
