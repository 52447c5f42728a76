//! Selection between the scalar and block scanning paths.
//!
//! The choice is made once per process and cached. It only affects speed:
//! both paths produce the same cursor positions for every input.
//!
//! # Configuration
//!
//! `TABULA_SCAN_PATH` overrides automatic selection:
//!
//! | value | effect |
//! |---|---|
//! | `auto` (or unset) | block path when the target supports it |
//! | `scalar` | always the byte-at-a-time loop |
//! | `vectorized` | block path; degrades to scalar if unavailable |
//!
//! Unrecognized values are logged and treated as `auto`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Environment variable consulted by [`ScanPath::detect`].
pub const SCAN_PATH_ENV: &str = "TABULA_SCAN_PATH";

/// Which implementation the cursor's skip operations run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanPath {
    /// Byte-at-a-time reference loops.
    Scalar,
    /// Block-at-a-time kernels (SSE2/AVX2 on `x86_64`, SWAR elsewhere).
    Vectorized,
}

/// Requested scan path, before capability is taken into account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScanPreference {
    #[default]
    Auto,
    Scalar,
    Vectorized,
}

/// Error for an unrecognized [`ScanPreference`] spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownScanPreference(pub String);

impl fmt::Display for UnknownScanPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scan path `{}` (expected auto, scalar or vectorized)",
            self.0
        )
    }
}

impl std::error::Error for UnknownScanPreference {}

impl FromStr for ScanPreference {
    type Err = UnknownScanPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(ScanPreference::Auto),
            "scalar" => Ok(ScanPreference::Scalar),
            "vectorized" | "simd" => Ok(ScanPreference::Vectorized),
            _ => Err(UnknownScanPreference(s.to_owned())),
        }
    }
}

impl ScanPreference {
    /// Resolve against a capability flag.
    pub fn resolve(self, vectorized_available: bool) -> ScanPath {
        match self {
            ScanPreference::Scalar => ScanPath::Scalar,
            ScanPreference::Auto | ScanPreference::Vectorized if vectorized_available => {
                ScanPath::Vectorized
            }
            ScanPreference::Vectorized => {
                tracing::warn!("vectorized scan path requested but unavailable; using scalar");
                ScanPath::Scalar
            }
            ScanPreference::Auto => ScanPath::Scalar,
        }
    }
}

impl ScanPath {
    /// The process-wide scan path, resolved on first use.
    pub fn detect() -> ScanPath {
        static DETECTED: OnceLock<ScanPath> = OnceLock::new();
        *DETECTED.get_or_init(|| {
            let preference = match std::env::var(SCAN_PATH_ENV) {
                Ok(value) => value.parse().unwrap_or_else(|err| {
                    tracing::warn!(%err, "ignoring {SCAN_PATH_ENV}");
                    ScanPreference::Auto
                }),
                Err(_) => ScanPreference::Auto,
            };
            let path = preference.resolve(vectorized_available());
            tracing::debug!(
                ?preference,
                ?path,
                avx2 = avx2_available(),
                "scan path selected"
            );
            path
        })
    }
}

/// Whether this build has a block path at all.
///
/// `x86_64` always has SSE2; other 64-bit targets use SWAR. 32-bit targets
/// other than `x86_64` only have the scalar loops.
pub const fn vectorized_available() -> bool {
    cfg!(any(target_arch = "x86_64", target_pointer_width = "64"))
}

/// Whether the running CPU supports the AVX2 space/control kernel.
pub fn avx2_available() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        static AVX2: OnceLock<bool> = OnceLock::new();
        *AVX2.get_or_init(|| std::arch::is_x86_feature_detected!("avx2"))
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        false
    }
}
