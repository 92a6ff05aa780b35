//! Compile-time build information.

/// Build information captured when the binary was compiled.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// `rustc --version` output, recorded by the build script
    pub rustc_version: Option<&'static str>,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            rustc_version: option_env!("PIPELINE_DEMO_RUSTC_VERSION"),
        }
    }
}

impl BuildInfo {
    /// Get the full target string (arch-os).
    pub fn target() -> String {
        format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS)
    }

    /// The toolchain string, or `rust <target>` when the build script
    /// could not query the compiler.
    pub fn runtime_version(&self) -> String {
        match self.rustc_version {
            Some(rustc) => rustc.to_string(),
            None => format!("rust {}", Self::target()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_version_prefers_rustc() {
        let info = BuildInfo {
            rustc_version: Some("rustc 1.80.0 (051478957 2024-07-21)"),
        };
        assert_eq!(info.runtime_version(), "rustc 1.80.0 (051478957 2024-07-21)");
    }

    #[test]
    fn test_runtime_version_falls_back_to_target() {
        let info = BuildInfo {
            rustc_version: None,
        };
        assert_eq!(info.runtime_version(), format!("rust {}", BuildInfo::target()));
    }

    #[test]
    fn test_target_format() {
        let target = BuildInfo::target();
        assert!(target.starts_with(std::env::consts::ARCH));
        assert!(target.ends_with(std::env::consts::OS));
    }
}
