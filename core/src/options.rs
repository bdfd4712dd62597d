//! Scan configuration.
//!
//! [`ScanOptions`] is the full configuration a [`MultiViewScanner`] runs with.
//! [`ScanOptionsOverride`] carries only the fields a caller wants to change and
//! is layered onto a base with [`ScanOptions::override_with`].
//!
//! [`MultiViewScanner`]: crate::MultiViewScanner

/// How far past the caller-declared count the scan probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Bound {
    /// Probe indices `0..=count`, one past the declared count.
    #[default]
    Inclusive,
    /// Probe indices `0..count`.
    Exclusive,
}

/// What to do when a probe falls at or past a view's true length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Overrun {
    /// Fail the scan with [`ScanError::OutOfBounds`](crate::ScanError::OutOfBounds).
    #[default]
    Strict,
    /// Treat the missing element as a non-match and keep scanning.
    Skip,
}

/// Configuration for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScanOptions {
    pub bound: Bound,
    pub overrun: Overrun,
}

impl ScanOptions {
    /// Return a copy of `self` with every field set in `overrides` replaced.
    pub fn override_with(&self, overrides: &ScanOptionsOverride) -> Self {
        Self {
            bound: overrides.bound.unwrap_or(self.bound),
            overrun: overrides.overrun.unwrap_or(self.overrun),
        }
    }
}

/// Partial [`ScanOptions`]. Unset fields keep the base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanOptionsOverride {
    #[cfg_attr(feature = "serde", serde(default))]
    pub bound: Option<Bound>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overrun: Option<Overrun>,
}
