use anyhow::Result;

use crate::animation::AnimationSlot;
use crate::time::{ElapsedClock, FirstFrameDelta, FrameState, FrameTime, MonotonicClock};
use crate::uniform::TimeUniform;

use super::contract::{CameraControl, FrameRenderer, FrameRequester};

/// Scheduler configuration.
#[derive(Debug, Clone, Default)]
pub struct SchedulerConfig {
    /// Policy for the first frame's delta. The default keeps the full elapsed
    /// time since clock creation.
    pub first_frame: FirstFrameDelta,
}

/// Per-tick collaborators borrowed from the host.
pub struct FrameContext<'a, K, R> {
    pub controls: &'a mut K,
    pub renderer: &'a mut R,
    pub next_frame: &'a dyn FrameRequester,
}

/// Owns the session clock and all time state of the update/render loop.
///
/// Single-threaded: `tick` takes `&mut self`, so two frames can never overlap.
pub struct FrameScheduler<C = MonotonicClock> {
    clock: C,
    state: FrameState,
    animation: AnimationSlot,
    time_uniforms: Vec<TimeUniform>,
    suspended: bool,
}

impl FrameScheduler<MonotonicClock> {
    /// Creates a scheduler with a clock starting now.
    pub fn new(config: SchedulerConfig) -> Self {
        Self::with_clock(MonotonicClock::new(), config)
    }
}

impl<C: ElapsedClock> FrameScheduler<C> {
    pub fn with_clock(clock: C, config: SchedulerConfig) -> Self {
        Self {
            clock,
            state: FrameState::new(config.first_frame),
            animation: AnimationSlot::detached(),
            time_uniforms: Vec::new(),
            suspended: false,
        }
    }

    /// Installs the consumer side of an animation handoff.
    pub fn with_animation(mut self, slot: AnimationSlot) -> Self {
        self.animation = slot;
        self
    }

    /// Registers a uniform that receives the elapsed time every frame.
    pub fn bind_time_uniform(&mut self, uniform: TimeUniform) {
        self.time_uniforms.push(uniform);
    }

    /// Elapsed time recorded by the last completed tick.
    pub fn previous_time(&self) -> f64 {
        self.state.previous_time()
    }

    pub fn frames(&self) -> u64 {
        self.state.frames()
    }

    pub fn animation_bound(&self) -> bool {
        self.animation.is_bound()
    }

    /// True when the last tick could not draw and did not request another
    /// frame. The host must call `tick` again once the surface is drawable.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Runs one update/render cycle and re-arms itself.
    ///
    /// A render error is returned as-is; the next frame is only requested
    /// after a successful render that did not suspend.
    pub fn tick<K, R>(&mut self, ctx: FrameContext<'_, K, R>) -> Result<FrameTime>
    where
        K: CameraControl,
        R: FrameRenderer<K::Camera>,
    {
        let ft = self.state.advance(self.clock.elapsed());

        if let Some(binding) = self.animation.poll() {
            binding.advance(ft.delta);
        }

        for uniform in &self.time_uniforms {
            uniform.set(ft.elapsed);
        }

        ctx.controls.step();

        let outcome = ctx.renderer.render(ctx.controls.camera())?;

        self.suspended = !outcome.rearms();
        if self.suspended {
            log::debug!("surface not drawable; frame loop paused");
        } else {
            ctx.next_frame.request_next_frame();
        }

        Ok(ft)
    }
}
