use derive_builder::Builder;

/// Immutable session configuration, built once at startup and passed by
/// reference from there on. No ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct CullConfig {
    /// Executable name to match against running processes
    pub target: String,

    /// Rehearse the full scan/select/kill flow without terminating anything
    #[builder(default)]
    pub dry_run: bool,
}

impl CullConfig {
    pub fn builder() -> CullConfigBuilder {
        CullConfigBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_live_mode() {
        let config = CullConfig::builder().target("demo").build().unwrap();
        assert_eq!(config.target, "demo");
        assert!(!config.dry_run);
    }

    #[test]
    fn test_builder_dry_run() {
        let config = CullConfig::builder()
            .target("demo")
            .dry_run(true)
            .build()
            .unwrap();
        assert!(config.dry_run);
    }

    #[test]
    fn test_builder_requires_target() {
        assert!(CullConfig::builder().build().is_err());
    }
}
