//! Screen resolution sources.
//!
//! The generator only needs "the size of the main display, or a failure".
//! [`SystemScreen`] answers that from the platform; tests and embedders can
//! pass any closure instead.

#[cfg(target_os = "linux")]
mod drm;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "linux")]
mod x11;

use crate::error::SolidColorError;

/// Something that can report the current display size in pixels.
pub trait ScreenSource {
    fn detect(&self) -> Result<(u32, u32), SolidColorError>;
}

impl<F> ScreenSource for F
where
    F: Fn() -> Result<(u32, u32), SolidColorError>,
{
    fn detect(&self) -> Result<(u32, u32), SolidColorError> {
        self()
    }
}

/// The platform's primary display.
///
/// | Platform | Source |
/// |---|---|
/// | Windows | `GetSystemMetrics(SM_CXSCREEN / SM_CYSCREEN)`, the primary monitor |
/// | macOS | `CGDisplayPixelsWide/High` of the main display |
/// | Linux | the X11 root window of `$DISPLAY`, then DRM connectors |
///
/// The DRM fallback reads the first line of `/sys/class/drm/*/modes` of the
/// first connected connector. That is the monitor's *preferred* mode, usually
/// its native panel size, not necessarily the size the desktop is running
/// at. It needs no display server, but sysfs is often hidden inside
/// containers and VMs, in which case detection fails.
///
/// Other platforms always report [`SolidColorError::DetectionFailed`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemScreen;

impl ScreenSource for SystemScreen {
    fn detect(&self) -> Result<(u32, u32), SolidColorError> {
        platform_size().map_err(SolidColorError::DetectionFailed)
    }
}

#[cfg(target_os = "linux")]
fn platform_size() -> Result<(u32, u32), String> {
    x11::detect(None).or_else(|x11_err| {
        log::debug!("{x11_err}; falling back to DRM connectors");
        drm::detect(std::path::Path::new(drm::SYSFS_DRM))
            .map_err(|drm_err| format!("{x11_err}; {drm_err}"))
    })
}

#[cfg(target_os = "windows")]
fn platform_size() -> Result<(u32, u32), String> {
    windows::detect()
}

#[cfg(target_os = "macos")]
fn platform_size() -> Result<(u32, u32), String> {
    macos::detect()
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
fn platform_size() -> Result<(u32, u32), String> {
    Err("screen detection is not supported on this platform".into())
}

/// Accept a size reported by a platform API only if both sides are positive
/// and fit in `u32`.
#[cfg_attr(
    not(any(target_os = "linux", target_os = "windows", target_os = "macos")),
    allow(dead_code)
)]
fn positive_size<T>(source: &str, width: T, height: T) -> Result<(u32, u32), String>
where
    T: TryInto<u32> + Copy + std::fmt::Display,
{
    match (width.try_into(), height.try_into()) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(format!("{source} reported unusable size {width}x{height}")),
    }
}
