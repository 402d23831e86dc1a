// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use std::fmt::Display;

use serde::Deserialize;

/// The add-on `config.yaml` manifest
///
/// Every field is optional at parse time; `missing_fields()` reports which
/// of the fields the supervisor insists on are absent or empty.
#[derive(Clone, Debug, Deserialize)]
pub struct AddonConfig {
    pub name: Option<String>,

    pub version: Option<String>,

    pub slug: Option<String>,

    pub description: Option<String>,

    #[allow(dead_code)]
    pub url: Option<String>,

    #[allow(dead_code)]
    pub image: Option<String>,

    #[serde(default)]
    pub arch: Vec<String>,
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |s| !s.is_empty())
}

impl AddonConfig {
    /// Reports missing required fields in their declared order.
    ///
    /// A field present with an empty value counts as missing, matching how
    /// the supervisor rejects such manifests.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if !filled(&self.name) {
            missing.push("name");
        }
        if !filled(&self.version) {
            missing.push("version");
        }
        if !filled(&self.slug) {
            missing.push("slug");
        }
        if !filled(&self.description) {
            missing.push("description");
        }
        if self.arch.is_empty() {
            missing.push("arch");
        }

        missing
    }
}

impl Display for AddonConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "   Add-on Name: {}",
            self.name.as_deref().unwrap_or("(unset)")
        )?;
        writeln!(
            f,
            "   Version: {}",
            self.version.as_deref().unwrap_or("(unset)")
        )?;
        writeln!(f, "   Slug: {}", self.slug.as_deref().unwrap_or("(unset)"))?;
        write!(f, "   Architectures: {:?}", self.arch)
    }
}

#[cfg(test)]
mod test {
    use super::AddonConfig;

    const FULL: &str = r#"
name: HA MCP Bridge
version: "1.0.0"
slug: ha-mcp-bridge
description: Bridge Home Assistant to MCP clients
url: https://github.com/shaike1/haos-mcp
arch:
  - aarch64
  - amd64
  - armv7
"#;

    #[test]
    fn complete() {
        let config: AddonConfig = serde_yaml::from_str(FULL).unwrap();
        assert!(config.missing_fields().is_empty());
        assert_eq!(config.slug.as_deref(), Some("ha-mcp-bridge"));
        assert_eq!(config.arch, ["aarch64", "amd64", "armv7"]);
    }

    #[test]
    fn absent_fields() {
        let config: AddonConfig =
            serde_yaml::from_str("name: HA MCP Bridge\nslug: ha-mcp-bridge\ndescription: x\n")
                .unwrap();
        assert_eq!(config.missing_fields(), ["version", "arch"]);
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let config: AddonConfig = serde_yaml::from_str(
            "name: \"\"\nversion: \"1.0.0\"\nslug: s\ndescription: d\narch: [amd64]\n",
        )
        .unwrap();
        assert_eq!(config.missing_fields(), ["name"]);
    }

    #[test]
    fn empty_arch_counts_as_missing() {
        let config: AddonConfig =
            serde_yaml::from_str("name: n\nversion: \"1.0.0\"\nslug: s\ndescription: d\narch: []\n")
                .unwrap();
        assert_eq!(config.missing_fields(), ["arch"]);
    }

    #[test]
    fn declared_order() {
        let config: AddonConfig = serde_yaml::from_str("url: https://example.com\n").unwrap();
        assert_eq!(
            config.missing_fields(),
            ["name", "version", "slug", "description", "arch"]
        );
    }
}
