//! The singleton site configuration: presentation overrides editable from
//! the admin surface.

use serde::{Deserialize, Serialize};

/// Fleet photo URLs, one per vehicle class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetImages {
  pub electric: String,
  pub sedan:    String,
  pub hatch:    String,
}

/// Presentation overrides for the public site. One instance per deployment,
/// fully overwritten on every save — no versioning, no partial update.
///
/// URLs are not validated here; a malformed entry surfaces later as a broken
/// image load, not as a save-time error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
  pub hero_image_url:   String,
  pub fleet_image_urls: FleetImages,
}

impl Default for SiteConfig {
  /// The stock imagery the site ships with before any admin override.
  fn default() -> Self {
    SiteConfig {
      hero_image_url:
        "https://images.unsplash.com/photo-1449965408869-eaa3f722e40d?q=80&w=2070&auto=format&fit=crop"
          .to_string(),
      fleet_image_urls: FleetImages {
        electric:
          "https://images.unsplash.com/photo-1593941707882-a5bba14938c7?q=80&w=1744&auto=format&fit=crop"
            .to_string(),
        sedan:
          "https://images.unsplash.com/photo-1550355291-bbee04a92027?q=80&w=1936&auto=format&fit=crop"
            .to_string(),
        hatch:
          "https://images.unsplash.com/photo-1583121274602-3e2820c69888?q=80&w=1740&auto=format&fit=crop"
            .to_string(),
      },
    }
  }
}
