//! Primary monitor size from `GetSystemMetrics`.

#![allow(unsafe_code)]

use windows_sys::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

pub(super) fn detect() -> Result<(u32, u32), String> {
    // SAFETY: takes an index by value, touches no caller memory, and returns
    // 0 on failure.
    let (width, height) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
    super::positive_size("GetSystemMetrics", width, height)
}
