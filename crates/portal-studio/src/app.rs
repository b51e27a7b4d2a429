use std::thread::JoinHandle;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use winit::dpi::PhysicalSize;

use portal_engine::animation::{animation_handoff, AnimationBinder, ClipLoader, Pose, SharedPose};
use portal_engine::camera::OrbitControls;
use portal_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use portal_engine::device::Gpu;
use portal_engine::render::{RenderCtx, ScenePasses, ScenePresenter};
use portal_engine::scene::{pixel_ratio, Fireflies, SceneConfig};
use portal_engine::schedule::{FrameContext, FrameScheduler, SchedulerConfig};
use portal_engine::uniform::TimeUniform;

use crate::panel::{DebugPanel, PanelAction};

/// The portal scene wired to the frame scheduler.
pub struct PortalApp {
    config: SceneConfig,
    scheduler: FrameScheduler,
    controls: OrbitControls,
    panel: DebugPanel,

    fox_pose: SharedPose,
    portal_time: TimeUniform,
    fireflies_time: TimeUniform,

    // Taken by `on_start` when the loader thread is spawned.
    binder: Option<AnimationBinder>,
    loader: Option<JoinHandle<()>>,

    passes: Option<ScenePasses>,
}

impl PortalApp {
    pub fn new(config: SceneConfig, scheduler_config: SchedulerConfig) -> Result<Self> {
        let panel = DebugPanel::new(config.debug_params().context("invalid debug color in scene config")?);

        let (binder, slot) = animation_handoff();

        let portal_time = TimeUniform::new();
        let fireflies_time = TimeUniform::new();

        let mut scheduler = FrameScheduler::new(scheduler_config).with_animation(slot);
        scheduler.bind_time_uniform(portal_time.clone());
        scheduler.bind_time_uniform(fireflies_time.clone());

        let controls = OrbitControls::new(config.camera(16.0 / 9.0), config.orbit);

        Ok(Self {
            fox_pose: fox_base(&config).shared(),
            config,
            scheduler,
            controls,
            panel,
            portal_time,
            fireflies_time,
            binder: Some(binder),
            loader: None,
            passes: None,
        })
    }

    fn fireflies(&self) -> Fireflies {
        let count = self.config.fireflies_count;
        match self.config.fireflies_seed {
            Some(seed) => Fireflies::generate(count, &mut StdRng::seed_from_u64(seed)),
            None => Fireflies::generate(count, &mut rand::rng()),
        }
    }
}

fn fox_base(config: &SceneConfig) -> Pose {
    Pose::new(config.fox.position, config.fox.yaw, config.fox.scale)
}

impl App for PortalApp {
    fn on_start(&mut self, window: WindowCtx<'_>, gpu: &Gpu<'_>) -> Result<()> {
        let size = gpu.size();
        let scale_factor = window.scale_factor();
        self.controls.set_viewport(size.width, size.height, scale_factor);

        let ctx = RenderCtx::new(
            gpu.device(),
            gpu.queue(),
            gpu.surface_format(),
            [size.width as f32, size.height as f32],
        );
        self.passes = Some(ScenePasses::new(
            &ctx,
            &self.config,
            &self.fireflies(),
            self.portal_time.clone(),
            self.fireflies_time.clone(),
            self.fox_pose.clone(),
            pixel_ratio(scale_factor, self.config.max_pixel_ratio),
        ));

        if let Some(binder) = self.binder.take() {
            let handle = ClipLoader::spawn(
                self.config.fox_clip.clone(),
                fox_base(&self.config),
                self.fox_pose.clone(),
                binder,
            )?;
            self.loader = Some(handle);
        }

        Ok(())
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>, scale_factor: f64) {
        self.controls.set_viewport(size.width, size.height, scale_factor);
        if let Some(passes) = self.passes.as_mut() {
            passes
                .fireflies
                .set_pixel_ratio(pixel_ratio(scale_factor, self.config.max_pixel_ratio));
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        if self.panel.handle_input(ctx.input_frame, ctx.input.modifiers.shift) == PanelAction::Exit {
            return Ok(AppControl::Exit);
        }
        self.controls.handle_input(ctx.input, ctx.input_frame);

        let passes = self.passes.as_mut().context("frame requested before start")?;
        let mut presenter = ScenePresenter {
            gpu: &mut *ctx.gpu,
            passes,
            params: self.panel.params(),
        };

        let ft = self.scheduler.tick(FrameContext {
            controls: &mut self.controls,
            renderer: &mut presenter,
            next_frame: ctx.window.window,
        })?;

        if ft.frame_index == 0 {
            log::debug!("first frame after {:.3}s", ft.elapsed);
        }
        if self.loader.as_ref().is_some_and(|h| h.is_finished()) {
            self.loader = None;
            if !self.scheduler.animation_bound() {
                log::debug!("clip loader finished without binding");
            }
        }

        Ok(AppControl::Continue)
    }
}
