//! Best-effort OS color-scheme detection.
//!
//! The signal is consumed exactly once, during [`crate::ThemeStore`]
//! reconciliation; it is never watched and never persisted. Detection failures
//! collapse to [`SystemScheme::NoPreference`], which reconciliation resolves
//! to dark.

use tracing::debug;

/// OS-level color scheme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemScheme {
    Light,
    Dark,
    /// Unknown platform, detection failure, or an explicit "no preference".
    NoPreference,
}

/// Probe the current platform for its color scheme preference.
pub fn detect_system_scheme() -> SystemScheme {
    let scheme = imp::detect();
    debug!("system color scheme: {scheme:?}");
    scheme
}

#[cfg(target_os = "macos")]
mod imp {
    use super::SystemScheme;

    // `AppleInterfaceStyle` is only set while dark mode is active; reading it
    // in light mode fails.
    pub(super) fn detect() -> SystemScheme {
        let out = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output();
        match out {
            Ok(o) if o.status.success() => {
                if String::from_utf8_lossy(&o.stdout).trim() == "Dark" {
                    SystemScheme::Dark
                } else {
                    SystemScheme::NoPreference
                }
            }
            Ok(_) => SystemScheme::Light,
            Err(_) => SystemScheme::NoPreference,
        }
    }
}

#[cfg(target_os = "linux")]
mod imp {
    use super::SystemScheme;

    pub(super) fn detect() -> SystemScheme {
        let out = std::process::Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output();
        let Ok(o) = out else {
            return SystemScheme::NoPreference;
        };
        if !o.status.success() {
            return SystemScheme::NoPreference;
        }
        match String::from_utf8_lossy(&o.stdout).trim().trim_matches('\'') {
            "prefer-dark" => SystemScheme::Dark,
            "prefer-light" => SystemScheme::Light,
            _ => SystemScheme::NoPreference,
        }
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
mod imp {
    use super::SystemScheme;

    pub(super) fn detect() -> SystemScheme {
        SystemScheme::NoPreference
    }
}
