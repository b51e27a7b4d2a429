/// Damped camera rig stepped once per frame, with or without fresh input.
pub trait CameraControl {
    type Camera;

    /// Moves the camera toward its latest target. No-op once settled.
    fn step(&mut self);

    fn camera(&self) -> &Self::Camera;
}

/// Result of one render call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderOutcome {
    /// A frame reached the display.
    Presented,
    /// This frame was dropped (timeout, reconfigured surface); the next one may
    /// present normally.
    Skipped,
    /// Nothing can be drawn until the host resizes the surface (minimized
    /// window). The loop must not re-arm itself in this state.
    Suspended,
}

impl RenderOutcome {
    /// Whether the scheduler should request another frame after this one.
    #[inline]
    pub fn rearms(self) -> bool {
        !matches!(self, RenderOutcome::Suspended)
    }
}

/// Draws one frame of the scene through `camera`.
///
/// Transient presentation failures (a lost or outdated surface, a timeout) are
/// handled inside the renderer. An `Err` means the session cannot continue.
pub trait FrameRenderer<C> {
    fn render(&mut self, camera: &C) -> anyhow::Result<RenderOutcome>;
}

/// Host primitive that schedules the next `tick()` on the next display refresh.
pub trait FrameRequester {
    fn request_next_frame(&self);
}

impl FrameRequester for winit::window::Window {
    #[inline]
    fn request_next_frame(&self) {
        self.request_redraw();
    }
}
