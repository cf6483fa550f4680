//! Queries the VM manager for a named VM's network address.
//!
//! The manager is the external `multipass` tool. `multipass info <name>`
//! prints a key/value block that includes an `IPv4:` line for a running
//! instance; a stopped instance shows `--` there instead. We take the
//! first token in the output that parses as an IPv4 address.

use std::net::Ipv4Addr;

use ask_core::{AppError, AppResult};
use tokio::process::Command;

/// Name of the VM manager binary.
const MANAGER_BIN: &str = "multipass";

/// Handle on the external VM manager.
#[derive(Debug, Clone)]
pub struct VmManager {
    command: String,
}

impl VmManager {
    /// Create a manager handle using the standard `multipass` binary.
    pub fn new() -> Self {
        Self {
            command: MANAGER_BIN.to_string(),
        }
    }

    /// Resolve a VM name to its primary IPv4 address.
    ///
    /// Fails with `VmResolution` when the manager binary is missing,
    /// when the lookup itself fails (unknown VM, daemon unreachable),
    /// or when the VM exposes no address (typically: not running).
    pub async fn resolve_address(&self, vm_name: &str) -> AppResult<Ipv4Addr> {
        tracing::debug!("Querying {} for VM '{}'", self.command, vm_name);

        let output = Command::new(&self.command)
            .args(["info", vm_name])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AppError::VmResolution(format!(
                        "VM manager '{}' is not installed or not on PATH",
                        self.command
                    ))
                } else {
                    AppError::VmResolution(format!("Failed to run {}: {}", self.command, e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VmResolution(format!(
                "{} info {} failed: {}",
                self.command,
                vm_name,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_address(&stdout).ok_or_else(|| {
            AppError::VmResolution(format!(
                "VM '{}' exposes no IPv4 address (is it running?)",
                vm_name
            ))
        })
    }
}

impl Default for VmManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the first IPv4 address token from the manager's info output.
fn parse_address(info: &str) -> Option<Ipv4Addr> {
    info.split_whitespace()
        .find_map(|token| token.parse::<Ipv4Addr>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNNING_INFO: &str = "\
Name:           primary
State:          Running
Snapshots:      0
IPv4:           192.168.64.2
Release:        Ubuntu 24.04 LTS
Image hash:     1d24e397489d (Ubuntu 24.04 LTS)
Memory usage:   1.2GiB out of 3.8GiB
";

    const STOPPED_INFO: &str = "\
Name:           primary
State:          Stopped
Snapshots:      0
IPv4:           --
Release:        --
";

    #[test]
    fn test_parse_address_running_vm() {
        let addr = parse_address(RUNNING_INFO);
        assert_eq!(addr, Some(Ipv4Addr::new(192, 168, 64, 2)));
    }

    #[test]
    fn test_parse_address_stopped_vm() {
        assert_eq!(parse_address(STOPPED_INFO), None);
    }

    #[test]
    fn test_parse_address_empty_output() {
        assert_eq!(parse_address(""), None);
    }

    #[test]
    fn test_parse_address_skips_non_address_tokens() {
        // Dotted version strings have three octets and must not match.
        let info = "Release: 24.04.1\nIPv4: 10.0.0.7";
        assert_eq!(parse_address(info), Some(Ipv4Addr::new(10, 0, 0, 7)));
    }

    #[tokio::test]
    async fn test_resolve_address_missing_manager() {
        let manager = VmManager {
            command: "definitely-not-a-real-vm-manager".to_string(),
        };
        let err = manager.resolve_address("primary").await.unwrap_err();
        match err {
            AppError::VmResolution(msg) => assert!(msg.contains("not installed")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
