use chrono::{DateTime, Utc};
use core_config::uploads::UploadsConfig;
use domain_items::models::{Item, ItemResponse};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Brazilian state codes are two uppercase letters (e.g. SP, RJ)
static UF_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());

fn validate_uf(uf: &str) -> Result<(), validator::ValidationError> {
    if !UF_PATTERN.is_match(uf) {
        return Err(validator::ValidationError::new("invalid_uf"));
    }
    Ok(())
}

/// A registered waste-collection point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Point {
    /// Unique identifier
    pub id: Uuid,
    /// Name of the collecting entity
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact WhatsApp number
    pub whatsapp: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// City name
    pub city: String,
    /// Two-letter state code
    pub uf: String,
    /// Stored photo filename, if any
    pub image: Option<String>,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

/// A point together with its resolved items
#[derive(Debug, Clone, PartialEq)]
pub struct PointWithItems {
    pub point: Point,
    pub items: Vec<Item>,
}

/// DTO for registering a new collection point
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePoint {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 20))]
    pub whatsapp: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(custom(function = "validate_uf"))]
    pub uf: String,
    /// Ids of the collectable items accepted at this point (non-empty)
    #[validate(length(min = 1))]
    pub items: Vec<i32>,
    /// Stored photo filename
    pub image: Option<String>,
}

/// Query parameters for listing points
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct PointFilter {
    /// Two-letter state code
    pub uf: Option<String>,
    /// City name (exact match)
    pub city: Option<String>,
    /// Comma-separated item ids; points collecting any of them match
    pub items: Option<String>,
}

/// Parsed filter as consumed by the repository
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointListFilter {
    pub uf: Option<String>,
    pub city: Option<String>,
    pub items: Vec<i32>,
}

/// Point as returned over the API, with the photo resolved to an absolute URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PointResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    /// Absolute URL of the point photo, if one was uploaded
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PointResponse {
    pub fn from_point(point: Point, uploads: &UploadsConfig) -> Self {
        Self {
            id: point.id,
            name: point.name,
            email: point.email,
            whatsapp: point.whatsapp,
            latitude: point.latitude,
            longitude: point.longitude,
            city: point.city,
            uf: point.uf,
            image_url: point.image.as_deref().map(|f| uploads.image_url(f)),
            created_at: point.created_at,
        }
    }
}

/// Point detail: the point plus its full list of associated items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PointDetailResponse {
    pub point: PointResponse,
    pub items: Vec<ItemResponse>,
}

impl PointDetailResponse {
    pub fn from_point_with_items(detail: PointWithItems, uploads: &UploadsConfig) -> Self {
        Self {
            point: PointResponse::from_point(detail.point, uploads),
            items: detail
                .items
                .into_iter()
                .map(|item| ItemResponse::from_item(item, uploads))
                .collect(),
        }
    }
}

impl Point {
    /// Create a new point from the CreatePoint DTO
    pub fn new(input: &CreatePoint) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name.clone(),
            email: input.email.clone(),
            whatsapp: input.whatsapp.clone(),
            latitude: input.latitude,
            longitude: input.longitude,
            city: input.city.clone(),
            uf: input.uf.clone(),
            image: input.image.clone(),
            created_at: Utc::now(),
        }
    }
}
