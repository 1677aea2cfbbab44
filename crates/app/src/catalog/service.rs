//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::{
    catalog::{FetchError, MenuItem, MenuResponse, Restaurant, RestaurantSummary},
    config::ApiConfig,
};

/// Catalog endpoints served by the backend.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    config: ApiConfig,
    http: Client,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(config: ApiConfig, http: Client) -> Self {
        Self { config, http }
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.http.get(self.config.endpoint(path)).send().await
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    #[instrument(skip(self))]
    async fn list_restaurants(&self) -> Result<Vec<RestaurantSummary>, FetchError> {
        let response = self.get("/api/restaurants").await?;
        let status = response.status();

        if !status.is_success() {
            warn!(%status, "restaurant listing unavailable");

            return Err(FetchError::UnexpectedStatus {
                resource: "restaurants",
                status,
            });
        }

        let restaurants: Vec<RestaurantSummary> = response.json().await?;

        debug!(count = restaurants.len(), "restaurants loaded");

        Ok(restaurants)
    }

    #[instrument(skip(self))]
    async fn get_restaurant(&self, id: &str) -> Result<Restaurant, FetchError> {
        let response = self.get(&format!("/api/restaurants/{id}")).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            warn!("restaurant not found");

            return Err(FetchError::NotFound(id.to_string()));
        }

        if !status.is_success() {
            warn!(%status, "restaurant unavailable");

            return Err(FetchError::UnexpectedStatus {
                resource: "restaurant",
                status,
            });
        }

        Ok(response.json().await?)
    }

    #[instrument(skip(self))]
    async fn list_menu(&self) -> Result<Vec<MenuItem>, FetchError> {
        let response = self.get("/api/menu").await?;
        let status = response.status();

        if !status.is_success() {
            warn!(%status, "menu unavailable");

            return Err(FetchError::UnexpectedStatus {
                resource: "menu",
                status,
            });
        }

        let menu: MenuResponse = response.json().await?;

        debug!(count = menu.items.len(), "menu loaded");

        Ok(menu.items)
    }
}

/// Read access to restaurants and dishes.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// `GET /api/restaurants`
    async fn list_restaurants(&self) -> Result<Vec<RestaurantSummary>, FetchError>;

    /// `GET /api/restaurants/:id`
    async fn get_restaurant(&self, id: &str) -> Result<Restaurant, FetchError>;

    /// `GET /api/menu`
    async fn list_menu(&self) -> Result<Vec<MenuItem>, FetchError>;
}
