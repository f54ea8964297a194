use concat_string::concat_string;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, config, date};

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    info_url: String,
}

#[derive(Debug, Serialize)]
struct Request<'a> {
    group: &'a str,
    song: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Response {
    release_date: String,
    text: String,
    link: String,
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Enrichment {
    pub release_date: Date,
    pub text: String,
    pub link: String,
}

impl Client {
    const INFO_PATH: &'static str = "/info?";

    pub fn new(config: &config::integration::Enrichment) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Could not build enrichment http client");
        Self { http, info_url: concat_string!(config.url.trim_end_matches('/'), Self::INFO_PATH) }
    }

    fn build_url(&self, request: &Request<'_>) -> Result<String, Error> {
        serde_html_form::to_string(request)
            .map(|form| concat_string!(self.info_url, form))
            .map_err(|error| Error::Internal(error.into()))
    }

    #[tracing::instrument(skip(self), err)]
    pub async fn fetch(&self, group: &str, song: &str) -> Result<Enrichment, Error> {
        let url = self.build_url(&Request { group, song })?;
        let response = self.http.get(url).send().await.map_err(Error::UpstreamUnavailable)?;

        let status = response.status();
        tracing::debug!(%status, "enrichment service responded");
        if status != StatusCode::OK {
            return Err(Error::UpstreamStatus(status));
        }

        let Response { release_date, text, link } =
            response.json().await.map_err(Error::UpstreamDecode)?;
        Ok(Enrichment { release_date: date::parse(&release_date)?, text, link })
    }
}
