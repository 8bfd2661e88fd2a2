//! Windows process provider: sysinfo drives enumeration and termination.

mod provider;

pub use provider::WindowsProcessProvider;
