//! Personal data retention for soft-deleted customers.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{error, info};

use orderhub_core::config::GdprConfig;
use orderhub_core::config::gdpr::MAX_SWEEP_INTERVAL_HOURS;
use orderhub_core::error::AppError;
use orderhub_database::CustomerStore;

use crate::context::SYSTEM_USER;

/// Anonymizes customers once their retention period has passed.
#[derive(Clone)]
pub struct RetentionService {
    customers: Arc<dyn CustomerStore>,
    config: GdprConfig,
}

impl RetentionService {
    /// Creates a new retention service.
    pub fn new(customers: Arc<dyn CustomerStore>, config: GdprConfig) -> Self {
        Self { customers, config }
    }

    /// Deletion time before which customers are anonymized.
    ///
    /// A period reaching past the earliest representable instant matches nobody.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        chrono::Duration::try_days(i64::from(self.config.data_retention_days))
            .and_then(|period| now.checked_sub_signed(period))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Anonymize every eligible customer. Returns how many were changed.
    pub async fn run_once(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        if !self.config.enable_anonymization {
            return Ok(0);
        }

        let cutoff = self.cutoff(now);
        let mut anonymized = 0;
        for mut customer in self.customers.find_deleted_before(cutoff).await? {
            if customer.is_anonymized() {
                continue;
            }
            customer.anonymize(now);
            customer.updated_by = Some(SYSTEM_USER.to_string());
            if self.customers.update(&customer).await? {
                anonymized += 1;
            }
        }

        if anonymized > 0 {
            info!(count = anonymized, cutoff = %cutoff, "Anonymized expired customers");
        }
        Ok(anonymized)
    }

    /// Run sweeps on the configured interval until `shutdown` flips to true.
    pub async fn run_until_shutdown(self, mut shutdown: watch::Receiver<bool>) {
        if !self.config.enable_anonymization {
            info!("Customer anonymization disabled");
            return;
        }

        let hours = self
            .config
            .sweep_interval_hours
            .clamp(1, MAX_SWEEP_INTERVAL_HOURS);
        let period = Duration::from_secs(hours * 3600);
        let mut ticker = tokio::time::interval(period);
        info!(
            interval_hours = self.config.sweep_interval_hours,
            retention_days = self.config.data_retention_days,
            "Retention sweep started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.run_once(Utc::now()).await {
                        error!(error = %e, "Retention sweep failed");
                    }
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("Retention sweep stopping");
                        break;
                    }
                }
            }
        }
    }
}
