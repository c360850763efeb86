use core_config::uploads::UploadsConfig;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{PointError, PointResult};
use crate::models::{
    CreatePoint, PointDetailResponse, PointFilter, PointListFilter, PointResponse,
};
use crate::repository::PointRepository;

/// Service layer for collection point business logic
#[derive(Clone)]
pub struct PointService<R: PointRepository> {
    repository: Arc<R>,
    uploads: UploadsConfig,
}

impl<R: PointRepository> PointService<R> {
    pub fn new(repository: R, uploads: UploadsConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            uploads,
        }
    }

    /// Register a new collection point
    ///
    /// Duplicate item ids in the request are collapsed, keeping first
    /// occurrence order.
    pub async fn create_point(&self, mut input: CreatePoint) -> PointResult<PointDetailResponse> {
        input
            .validate()
            .map_err(|e| PointError::Validation(e.to_string()))?;

        let mut seen = Vec::with_capacity(input.items.len());
        for id in input.items {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        input.items = seen;

        let created = self.repository.create(input).await?;
        Ok(PointDetailResponse::from_point_with_items(
            created,
            &self.uploads,
        ))
    }

    /// Get a point and its items by ID
    pub async fn get_point(&self, id: Uuid) -> PointResult<PointDetailResponse> {
        let detail = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(PointError::NotFound(id))?;

        Ok(PointDetailResponse::from_point_with_items(
            detail,
            &self.uploads,
        ))
    }

    /// List points matching the query filters
    pub async fn list_points(&self, filter: PointFilter) -> PointResult<Vec<PointResponse>> {
        let parsed = parse_filter(filter)?;
        let points = self.repository.list(parsed).await?;

        Ok(points
            .into_iter()
            .map(|point| PointResponse::from_point(point, &self.uploads))
            .collect())
    }
}

/// Parse the raw query filter into the repository form
///
/// The `items` parameter arrives as a comma-separated string
/// (e.g. `items=1,2,6`); blank segments are ignored.
fn parse_filter(filter: PointFilter) -> PointResult<PointListFilter> {
    let items = match filter.items {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i32>()
                    .map_err(|_| PointError::Validation(format!("Invalid item id: '{}'", s)))
            })
            .collect::<PointResult<Vec<i32>>>()?,
        None => Vec::new(),
    };

    Ok(PointListFilter {
        uf: filter.uf,
        city: filter.city,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, PointWithItems};
    use crate::repository::MockPointRepository;
    use chrono::Utc;

    fn valid_input() -> CreatePoint {
        CreatePoint {
            name: "Mercado Verde".to_string(),
            email: "contato@mercadoverde.com.br".to_string(),
            whatsapp: "+5511999990000".to_string(),
            latitude: -23.55,
            longitude: -46.63,
            city: "São Paulo".to_string(),
            uf: "SP".to_string(),
            items: vec![1, 2],
            image: None,
        }
    }

    fn sample_point() -> Point {
        Point {
            id: Uuid::now_v7(),
            name: "Mercado Verde".to_string(),
            email: "contato@mercadoverde.com.br".to_string(),
            whatsapp: "+5511999990000".to_string(),
            latitude: -23.55,
            longitude: -46.63,
            city: "São Paulo".to_string(),
            uf: "SP".to_string(),
            image: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_parse_filter_splits_csv() {
        let parsed = parse_filter(PointFilter {
            uf: Some("SP".to_string()),
            city: None,
            items: Some("1, 2,6".to_string()),
        })
        .unwrap();

        assert_eq!(parsed.items, vec![1, 2, 6]);
        assert_eq!(parsed.uf.as_deref(), Some("SP"));
    }

    #[test]
    fn test_parse_filter_rejects_non_numeric_items() {
        let result = parse_filter(PointFilter {
            uf: None,
            city: None,
            items: Some("1,abc".to_string()),
        });

        assert!(matches!(result, Err(PointError::Validation(_))));
    }

    #[test]
    fn test_parse_filter_ignores_blank_segments() {
        let parsed = parse_filter(PointFilter {
            uf: None,
            city: None,
            items: Some("1,,2,".to_string()),
        })
        .unwrap();

        assert_eq!(parsed.items, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_create_point_rejects_invalid_input() {
        let mock_repo = MockPointRepository::new();
        let service = PointService::new(mock_repo, UploadsConfig::default());

        let mut input = valid_input();
        input.items = vec![];

        let result = service.create_point(input).await;
        assert!(matches!(result, Err(PointError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_point_dedupes_items() {
        let mut mock_repo = MockPointRepository::new();
        mock_repo
            .expect_create()
            .withf(|input: &CreatePoint| input.items == vec![1, 2])
            .returning(|input| {
                Ok(PointWithItems {
                    point: Point::new(&input),
                    items: vec![],
                })
            });

        let service = PointService::new(mock_repo, UploadsConfig::default());

        let mut input = valid_input();
        input.items = vec![1, 2, 1, 2, 2];

        service.create_point(input).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_point_maps_missing_to_not_found() {
        let mut mock_repo = MockPointRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = PointService::new(mock_repo, UploadsConfig::default());

        let result = service.get_point(Uuid::now_v7()).await;
        assert!(matches!(result, Err(PointError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_points_resolves_image_urls() {
        let mut mock_repo = MockPointRepository::new();
        mock_repo.expect_list().returning(|_| {
            let mut point = sample_point();
            point.image = Some("ponto.jpg".to_string());
            Ok(vec![point])
        });

        let uploads = UploadsConfig::new("uploads", "http://localhost:8080/uploads");
        let service = PointService::new(mock_repo, uploads);

        let points = service.list_points(PointFilter::default()).await.unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(
            points[0].image_url.as_deref(),
            Some("http://localhost:8080/uploads/ponto.jpg")
        );
    }
}
