//! Site configuration load and save.

use std::sync::Arc;

use crate::{
  error::StoreError,
  site::SiteConfig,
  store::{BlobStore, SITE_CONFIG_KEY},
};

/// Read/overwrite access to the singleton [`SiteConfig`].
pub struct SiteSettings<S> {
  store: Arc<S>,
}

impl<S> Clone for SiteSettings<S> {
  fn clone(&self) -> Self {
    SiteSettings { store: Arc::clone(&self.store) }
  }
}

impl<S: BlobStore> SiteSettings<S> {
  pub fn new(store: Arc<S>) -> Self {
    SiteSettings { store }
  }

  /// Current configuration, or the documented defaults if never saved.
  pub async fn get(&self) -> Result<SiteConfig, StoreError> {
    match self
      .store
      .read(SITE_CONFIG_KEY)
      .await
      .map_err(StoreError::unavailable)?
    {
      Some(json) => serde_json::from_str(&json)
        .map_err(|source| StoreError::Corrupt { key: SITE_CONFIG_KEY, source }),
      None => Ok(SiteConfig::default()),
    }
  }

  /// Full overwrite of the singleton. No URL validation happens here.
  pub async fn save(&self, config: &SiteConfig) -> Result<(), StoreError> {
    let json = serde_json::to_string(config).map_err(StoreError::Serialization)?;
    self
      .store
      .write(SITE_CONFIG_KEY, json)
      .await
      .map_err(StoreError::unavailable)
  }
}
