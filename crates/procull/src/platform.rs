use procull_core::ProviderFactory;

/// Platform-independent factory that selects the appropriate provider at
/// compile time
pub struct PlatformProviderFactory;

impl ProviderFactory for PlatformProviderFactory {
    #[cfg(unix)]
    type Provider = procull_unix::UnixProcessProvider;

    #[cfg(windows)]
    type Provider = procull_windows::WindowsProcessProvider;

    fn create_provider() -> Self::Provider {
        #[cfg(unix)]
        return procull_unix::UnixProcessProvider::new();

        #[cfg(windows)]
        return procull_windows::WindowsProcessProvider::new();
    }

    fn platform_name() -> &'static str {
        #[cfg(unix)]
        return "unix";

        #[cfg(windows)]
        return "windows";
    }
}
