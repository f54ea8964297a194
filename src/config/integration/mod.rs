mod enrichment;

pub use enrichment::Enrichment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Integration {
    pub enrichment: Enrichment,
}
