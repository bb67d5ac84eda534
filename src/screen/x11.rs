//! Root window size of an X11 screen, over the pure-Rust `x11rb` connection.

use x11rb::connection::Connection;

/// Size of the default screen of `display`, or of `$DISPLAY` when `None`.
pub(super) fn detect(display: Option<&str>) -> Result<(u32, u32), String> {
    let (conn, screen_num) =
        x11rb::connect(display).map_err(|e| format!("no X11 display: {e}"))?;
    let screen = conn
        .setup()
        .roots
        .get(screen_num)
        .ok_or_else(|| format!("X11 screen {screen_num} does not exist"))?;
    super::positive_size("X11 root window", screen.width_in_pixels, screen.height_in_pixels)
}
