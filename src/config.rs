// src/config.rs

/// Limits applied when reading framed type lists off the wire.
/// Build with `WireConfig::builder().foo(...).build()`.
#[derive(Clone, Debug)]
pub struct WireConfig {
    /// Largest entry count a `TypeList` frame may announce. Guards the allocation
    /// made from an untrusted length prefix.
    pub max_entries: usize,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WireConfig {
    /// Start building a config with sane defaults.
    ///
    /// Defaults:
    /// - max_entries = 1024
    pub fn builder() -> WireConfigBuilder {
        WireConfigBuilder { max_entries: 1024 }
    }
}

/// Fluent builder for `WireConfig`.
#[derive(Clone, Debug)]
pub struct WireConfigBuilder {
    max_entries: usize,
}

impl WireConfigBuilder {
    pub fn max_entries(mut self, n: usize) -> Self {
        self.max_entries = n;
        self
    }

    pub fn build(self) -> WireConfig {
        WireConfig {
            max_entries: self.max_entries,
        }
    }
}
