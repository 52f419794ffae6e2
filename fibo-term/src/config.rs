//! Build configuration, resolved once at compile time.
//!
//! The options mirror how the crate was packaged: the `shared` and
//! `export-symbols` Cargo features. Nothing in the arithmetic reads them.

use core::fmt;

/// Packaging options this crate was compiled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildConfig {
    /// Built for use as a shared library (`shared` feature).
    pub shared: bool,
    /// Public symbols are exported from the built artifact (`export-symbols` feature).
    pub export_symbols: bool,
}

impl BuildConfig {
    /// The configuration selected by this build's Cargo features.
    pub const fn from_features() -> Self {
        Self {
            shared: cfg!(feature = "shared"),
            export_symbols: cfg!(feature = "export-symbols"),
        }
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shared={} export_symbols={}",
            self.shared, self.export_symbols
        )
    }
}

/// Configuration this crate was built with.
pub const BUILD_CONFIG: BuildConfig = BuildConfig::from_features();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_features() {
        assert_eq!(BUILD_CONFIG.shared, cfg!(feature = "shared"));
        assert_eq!(BUILD_CONFIG.export_symbols, cfg!(feature = "export-symbols"));
    }

    #[test]
    fn test_display() {
        let config = BuildConfig {
            shared: true,
            export_symbols: false,
        };
        assert_eq!(config.to_string(), "shared=true export_symbols=false");
        assert_eq!(
            BuildConfig::default().to_string(),
            "shared=false export_symbols=false"
        );
    }
}
