//! Stadium Repository

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::Stadium;
use shared::{AppError, AppResult};

/// Persistence seam for the Stadium aggregate.
///
/// Real persistence is an external collaborator; this trait is the
/// boundary the handlers talk to. The in-memory implementation below is
/// what the edge ships with and what tests run against.
#[async_trait]
pub trait StadiumRepository: Send + Sync {
    /// All stadiums, ordered by name
    async fn find_all(&self) -> AppResult<Vec<Stadium>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Stadium>>;

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Stadium>>;

    /// Store a new stadium; the id must already be assigned
    async fn create(&self, stadium: Stadium) -> AppResult<Stadium>;

    /// Replace the stored aggregate (the nested structure is edited as a
    /// whole, never piecewise)
    async fn update(&self, id: &str, stadium: Stadium) -> AppResult<Stadium>;

    /// Remove the whole nested structure; returns whether it existed
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Lock-free in-memory repository keyed by stadium id
#[derive(Debug, Default)]
pub struct MemoryStadiumRepository {
    stadiums: DashMap<String, Stadium>,
}

impl MemoryStadiumRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StadiumRepository for MemoryStadiumRepository {
    async fn find_all(&self) -> AppResult<Vec<Stadium>> {
        let mut all: Vec<Stadium> = self.stadiums.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Stadium>> {
        Ok(self.stadiums.get(id).map(|e| e.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Stadium>> {
        Ok(self
            .stadiums
            .iter()
            .find(|e| e.value().name == name)
            .map(|e| e.value().clone()))
    }

    async fn create(&self, stadium: Stadium) -> AppResult<Stadium> {
        let id = stadium
            .id
            .clone()
            .ok_or_else(|| AppError::storage("cannot store a stadium without an id"))?;
        self.stadiums.insert(id, stadium.clone());
        Ok(stadium)
    }

    async fn update(&self, id: &str, stadium: Stadium) -> AppResult<Stadium> {
        if !self.stadiums.contains_key(id) {
            return Err(AppError::with_message(
                shared::ErrorCode::StadiumNotFound,
                format!("Stadium {} not found", id),
            ));
        }
        self.stadiums.insert(id.to_string(), stadium.clone());
        Ok(stadium)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.stadiums.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SegmentationType;

    fn stadium(id: &str, name: &str) -> Stadium {
        Stadium {
            id: Some(id.to_string()),
            name: name.to_string(),
            segmentation: SegmentationType::Sectorized,
            image: Some("/maps/x.png".to_string()),
            stands: None,
            sectors: Some(vec![]),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[tokio::test]
    async fn test_create_find_delete() {
        let repo = MemoryStadiumRepository::new();
        repo.create(stadium("a", "Beta")).await.unwrap();
        repo.create(stadium("b", "Alfa")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        // Ordered by name
        assert_eq!(all[0].name, "Alfa");

        assert!(repo.find_by_id("a").await.unwrap().is_some());
        assert!(repo.find_by_name("Beta").await.unwrap().is_some());

        assert!(repo.delete("a").await.unwrap());
        assert!(!repo.delete("a").await.unwrap());
        assert!(repo.find_by_id("a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = MemoryStadiumRepository::new();
        let err = repo.update("nope", stadium("nope", "X")).await.unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::StadiumNotFound);
    }
}
