// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::api::{Fetched, Repository};
use crate::formats::{AddonConfig, RepositoryManifest};

use super::Command;

use anyhow::{anyhow, Result};
use structopt::StructOpt;

/// The repository under validation (format: owner/repo[@branch])
const REPOSITORY: &str = "shaike1/haos-mcp";

/// The directory holding the add-on inside the repository
const ADDON_SLUG: &str = "ha-mcp-bridge";

/// Validate the add-on repository layout
#[derive(StructOpt, Debug)]
pub struct Check {}

impl Check {
    fn repository_manifest(&self, repo: &Repository) -> Result<Option<RepositoryManifest>> {
        let rep = match repo.get("repository.yaml")? {
            Fetched::Found(rep) => rep,
            Fetched::Missing(..) => {
                println!("❌ repository.yaml not found");
                return Ok(None);
            }
        };

        let manifest: RepositoryManifest = match serde_yaml::from_str(&rep.text()?) {
            Ok(manifest) => manifest,
            Err(e) => {
                println!("❌ Error parsing repository.yaml: {}", e);
                return Ok(None);
            }
        };

        println!("✅ repository.yaml found and valid");
        println!("{}", manifest);
        Ok(Some(manifest))
    }

    fn addon_config(&self, repo: &Repository) -> Result<Option<AddonConfig>> {
        let path = format!("{}/config.yaml", ADDON_SLUG);

        let rep = match repo.get(&path)? {
            Fetched::Found(rep) => rep,
            Fetched::Missing(..) => {
                println!("❌ {} not found", path);
                return Ok(None);
            }
        };

        let config: AddonConfig = match serde_yaml::from_str(&rep.text()?) {
            Ok(config) => config,
            Err(e) => {
                println!("❌ Error parsing {}: {}", path, e);
                return Ok(None);
            }
        };

        println!("✅ {} found and valid", path);
        println!("{}", config);

        let missing = config.missing_fields();
        if !missing.is_empty() {
            println!("❌ Missing required fields: {:?}", missing);
            return Ok(None);
        }

        println!("✅ All required fields present");
        Ok(Some(config))
    }

    fn asset(&self, repo: &Repository, name: &str) -> Result<bool> {
        Ok(match repo.get(&format!("{}/{}", ADDON_SLUG, name))? {
            Fetched::Found(..) => {
                println!("✅ {} found", name);
                true
            }
            Fetched::Missing(..) => {
                println!("⚠️  {} not found (optional but recommended)", name);
                false
            }
        })
    }

    // Four checks, in order. The first two are fatal when they fail; the
    // asset checks only warn. The success banner reads the parsed add-on
    // configuration, so it is only reachable once that parse succeeded.
    fn validate(&self, repo: &Repository) -> Result<bool> {
        println!("🔍 Validating Home Assistant Add-on Repository...");
        println!("{}", "=".repeat(50));

        if self.repository_manifest(repo)?.is_none() {
            return Ok(false);
        }

        let config = match self.addon_config(repo)? {
            Some(config) => config,
            None => return Ok(false),
        };

        self.asset(repo, "Dockerfile")?;
        self.asset(repo, "icon.png")?;

        println!("{}", "=".repeat(50));
        println!("🎯 VALIDATION RESULT: Repository structure is VALID for Home Assistant!");
        println!();
        println!("📝 Repository URL to use in HA: {}", repo);
        println!(
            "🔍 Add-on should appear as: {}",
            config.name.as_deref().unwrap_or("(unset)")
        );
        Ok(true)
    }
}

impl Command for Check {
    fn execute(self) -> anyhow::Result<()> {
        let repo = Repository::new(REPOSITORY)?;

        if !self.validate(&repo)? {
            return Err(anyhow!("repository failed validation"));
        }

        Ok(())
    }
}
