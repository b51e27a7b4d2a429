use anyhow::Result;
use winit::dpi::PhysicalSize;

use super::ctx::{FrameCtx, WindowCtx};
use crate::device::Gpu;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by the runtime.
pub trait App {
    /// Called once, after the window and GPU exist and before the first frame.
    fn on_start(&mut self, window: WindowCtx<'_>, gpu: &Gpu<'_>) -> Result<()>;

    /// Called after the surface has been resized or the scale factor changed.
    fn on_resize(&mut self, size: PhysicalSize<u32>, scale_factor: f64) {
        let _ = (size, scale_factor);
    }

    /// Called for every redraw the app requested.
    ///
    /// The app is expected to request the following redraw itself; the runtime
    /// only requests the first one. An `Err` ends the session.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;
}
