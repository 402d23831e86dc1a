use std::fmt::Display;

use anyhow::Result;
use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

#[derive(Debug)]
pub enum Fetched {
    Found(Response),
    Missing(StatusCode),
}

#[derive(Clone, Debug)]
pub struct Repository {
    client: Client,
    base: String,
    web: String,
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.web)
    }
}

impl Repository {
    const RAW_HOST: &'static str = "raw.githubusercontent.com";
    const WEB_HOST: &'static str = "github.com";
    const DEFAULT_BRANCH: &'static str = "main";

    pub fn new(mut reference: &str) -> Result<Self> {
        let client = Client::builder().build()?;

        // A full URL is taken verbatim as the fetch root.
        if reference.contains("://") {
            let base = reference.trim_end_matches('/').to_string();
            return Ok(Self {
                client,
                web: base.clone(),
                base,
            });
        }

        // Split off any branch suffix
        let mut branch = Self::DEFAULT_BRANCH;
        if let Some(n) = reference.rfind('@') {
            let (lhs, rhs) = reference.split_at(n);
            reference = lhs;
            branch = &rhs[1..];
        }

        Ok(Self {
            client,
            base: format!("https://{}/{}/{}", Self::RAW_HOST, reference, branch),
            web: format!("https://{}/{}", Self::WEB_HOST, reference),
        })
    }

    pub fn get(&self, name: &str) -> Result<Fetched> {
        let url = format!("{}/{}", self.base, name);
        debug!("GET {}", url);

        let rep = self.client.get(url).send()?;

        Ok(match rep.status() {
            StatusCode::OK => Fetched::Found(rep),
            code => {
                debug!("{}: received status {}", name, code);
                Fetched::Missing(code)
            }
        })
    }
}
