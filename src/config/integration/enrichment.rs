use std::time::Duration;

use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Educe)]
#[educe(Default)]
pub struct Enrichment {
    #[educe(Default(expression = "http://localhost:8081".to_owned()))]
    pub url: String,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[educe(Default(expression = Duration::from_secs(10)))]
    pub timeout: Duration,
}
