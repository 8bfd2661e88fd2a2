//! Unix process provider: snapshots via sysinfo, kills via signals.

mod provider;

pub use provider::UnixProcessProvider;
