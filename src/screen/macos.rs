//! Main display size from Core Graphics.

use core_graphics::display::CGDisplay;

pub(super) fn detect() -> Result<(u32, u32), String> {
    let main = CGDisplay::main();
    super::positive_size("CGMainDisplayID", main.pixels_wide(), main.pixels_high())
}
