//! Runtime detection for Node.js and the package managers

use crate::config::PackageManager;
use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release the generated projects support
pub const MIN_NODE_VERSION: &str = "16.0.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if the chosen package manager is on the PATH
pub fn check_package_manager(package_manager: PackageManager) -> RuntimeInfo {
    probe(package_manager.command(), package_manager.command())
}

/// Parse version string, handling the leading `v` node prints
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Whether `version` satisfies [`MIN_NODE_VERSION`]
pub fn meets_node_minimum(version: &Version) -> bool {
    match Version::parse(MIN_NODE_VERSION) {
        Ok(minimum) => *version >= minimum,
        Err(_) => true,
    }
}

/// Fail unless a recent enough Node.js is installed
pub fn ensure_node() -> Result<RuntimeInfo> {
    let node = check_node();
    let Some(raw) = node.version.as_deref() else {
        anyhow::bail!(
            "Node.js is required but was not found.\n  - install Node.js {} or newer from https://nodejs.org",
            MIN_NODE_VERSION
        );
    };

    let version = parse_version(raw)?;
    if !meets_node_minimum(&version) {
        anyhow::bail!(
            "Node.js {} or newer is required, found {}.\n  - upgrade from https://nodejs.org",
            MIN_NODE_VERSION,
            version
        );
    }

    Ok(node)
}
