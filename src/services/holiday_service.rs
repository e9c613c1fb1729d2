use crate::database::Database;
use crate::error::{BookingError, BookingResult};
use crate::models::{Holiday, ProviderHoliday};
use chrono::Datelike;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, warn};

/// Resolves whether a date is a public holiday.
///
/// Owns the cache against the external holiday provider. Provider
/// failures are soft: they are logged and absorbed so the booking path
/// degrades to whatever holidays are already known locally instead of
/// failing every check while the remote service is down.
#[derive(Clone)]
pub struct HolidayService {
    db: Database,
    http_client: Client,
    provider_base_url: String,
}

impl HolidayService {
    pub fn new(db: Database, provider_base_url: String, timeout_secs: u64) -> Self {
        // A hanging provider call must not stall the booking path.
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            db,
            http_client,
            provider_base_url,
        }
    }

    /// Check whether `date` (YYYY-MM-DD) is an active holiday.
    pub async fn is_holiday(&self, date: &str) -> BookingResult<bool> {
        let settings = self.db.load_booking_settings().await?;

        if settings.use_holiday_api {
            let parsed = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| BookingError::InvalidDateFormat)?;
            self.ensure_year_cached(parsed.year()).await?;
        }

        self.db.is_holiday(date).await
    }

    /// All active holidays in a year, refreshing the provider cache
    /// first when the API is enabled.
    pub async fn holidays_for_year(&self, year: i32) -> BookingResult<Vec<Holiday>> {
        let settings = self.db.load_booking_settings().await?;

        if settings.use_holiday_api {
            self.ensure_year_cached(year).await?;
        }

        self.db.holidays_by_year(year).await
    }

    /// Make sure the holidays table is populated for one year.
    ///
    /// A valid cache row is parsed and upserted without any network
    /// call. On a miss, one outbound request is made and its raw body
    /// cached. Provider errors never propagate: the caller continues
    /// with locally known holidays.
    pub async fn ensure_year_cached(&self, year: i32) -> BookingResult<()> {
        let settings = self.db.load_booking_settings().await?;
        let state = settings.state.as_str();

        if let Some(payload) = self.db.get_cached_holiday_payload(year, state).await? {
            return self.populate_from_payload(&payload).await;
        }

        let payload = match self.fetch_from_provider(year, state).await {
            Ok(body) => body,
            Err(e) => {
                warn!(year, state, error = %e, "holiday provider fetch failed, using local data");
                return Ok(());
            }
        };

        if let Err(e) = self
            .db
            .set_cached_holiday_payload(year, state, &payload, settings.cache_days)
            .await
        {
            warn!(year, state, error = %e, "failed to cache holiday payload");
        }

        self.populate_from_payload(&payload).await
    }

    /// One outbound GET to the provider for a year and region.
    async fn fetch_from_provider(&self, year: i32, state: &str) -> BookingResult<String> {
        let url = format!(
            "{}/?jahr={}&nur_land={}",
            self.provider_base_url, year, state
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| BookingError::ExternalProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BookingError::ExternalProviderUnavailable(format!(
                "provider returned status {}",
                response.status().as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BookingError::ExternalProviderUnavailable(e.to_string()))?;

        // Reject malformed bodies before they reach the cache.
        serde_json::from_str::<HashMap<String, ProviderHoliday>>(&body)
            .map_err(|e| BookingError::ExternalProviderUnavailable(format!("bad payload: {}", e)))?;

        info!(year, state, "fetched holidays from provider");
        Ok(body)
    }

    /// Upsert every holiday named in a raw provider payload. Two
    /// holidays on the same date are both inserted; existence is all
    /// `is_holiday` needs, so duplicates are harmless.
    async fn populate_from_payload(&self, payload: &str) -> BookingResult<()> {
        let holidays: HashMap<String, ProviderHoliday> = match serde_json::from_str(payload) {
            Ok(map) => map,
            Err(e) => {
                warn!(error = %e, "cached holiday payload is malformed, skipping");
                return Ok(());
            }
        };

        for (name, entry) in &holidays {
            self.db.upsert_api_holiday(&entry.datum, name).await?;
        }

        Ok(())
    }
}
