use std::fmt::Display;

use serde::Deserialize;

/// The top-level `repository.yaml` manifest
///
/// Home Assistant does not require any of these fields to install the
/// repository, so all of them are optional here.
#[derive(Clone, Debug, Deserialize)]
pub struct RepositoryManifest {
    pub name: Option<String>,

    #[allow(dead_code)]
    pub url: Option<String>,

    pub maintainer: Option<String>,
}

impl Display for RepositoryManifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "   Name: {}", self.name.as_deref().unwrap_or("(unset)"))?;
        write!(
            f,
            "   Maintainer: {}",
            self.maintainer.as_deref().unwrap_or("(unset)")
        )
    }
}

#[cfg(test)]
mod test {
    use super::RepositoryManifest;

    #[test]
    fn full() {
        let manifest: RepositoryManifest =
            serde_yaml::from_str("name: haos-mcp\nmaintainer: shaike1\n").unwrap();
        assert_eq!(manifest.name.as_deref(), Some("haos-mcp"));
        assert_eq!(manifest.maintainer.as_deref(), Some("shaike1"));
    }

    #[test]
    fn sparse() {
        let manifest: RepositoryManifest = serde_yaml::from_str("name: haos-mcp\n").unwrap();
        assert!(manifest.maintainer.is_none());
        assert!(manifest.to_string().contains("Maintainer: (unset)"));
    }
}
