//! In-memory `CityApi` for tests

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::models::{City, CityId, NewCity};
use crate::network::{ApiError, CityApi};

pub struct MemoryCityApi {
    cities: Mutex<Vec<City>>,
    next_id: AtomicU64,
    failing: AtomicBool,
    held: AtomicBool,
    gate: Notify,
    pub fetch_all_calls: AtomicUsize,
}

impl MemoryCityApi {
    pub fn new(cities: Vec<City>) -> Self {
        MemoryCityApi {
            cities: Mutex::new(cities),
            next_id: AtomicU64::new(1000),
            failing: AtomicBool::new(false),
            held: AtomicBool::new(false),
            gate: Notify::new(),
            fetch_all_calls: AtomicUsize::new(0),
        }
    }

    /// Make every following call fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Park every following call until `release`
    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.gate.notify_one();
    }

    pub fn stored(&self) -> Vec<City> {
        self.cities.lock().unwrap().clone()
    }

    async fn check(&self, url: &str) -> Result<(), ApiError> {
        if self.held.load(Ordering::SeqCst) {
            self.gate.notified().await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CityApi for MemoryCityApi {
    async fn fetch_cities(&self) -> Result<Vec<City>, ApiError> {
        self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check("/cities").await?;
        Ok(self.stored())
    }

    async fn fetch_city(&self, id: &CityId) -> Result<City, ApiError> {
        self.check("/cities/{id}").await?;
        self.stored()
            .into_iter()
            .find(|city| &city.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                url: format!("/cities/{}", id),
            })
    }

    async fn create_city(&self, city: &NewCity) -> Result<City, ApiError> {
        self.check("/cities").await?;
        let created = City {
            id: CityId::Number(self.next_id.fetch_add(1, Ordering::SeqCst)),
            city_name: city.city_name.clone(),
            country: city.country.clone(),
            emoji: city.emoji.clone(),
            date: city.date,
            notes: city.notes.clone(),
            position: city.position,
        };
        self.cities.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_city(&self, id: &CityId) -> Result<(), ApiError> {
        self.check("/cities/{id}").await?;
        self.cities.lock().unwrap().retain(|city| &city.id != id);
        Ok(())
    }
}
