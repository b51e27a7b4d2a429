mod app;
mod panel;

use anyhow::Result;

use portal_engine::device::GpuInit;
use portal_engine::logging::{init_logging, LoggingConfig};
use portal_engine::scene::SceneConfig;
use portal_engine::schedule::SchedulerConfig;
use portal_engine::window::{Runtime, RuntimeConfig};

use app::PortalApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let scene = SceneConfig::default().with_env();
    log::info!("fox clip: {}", scene.fox_clip.display());

    let app = PortalApp::new(scene, SchedulerConfig::default())?;

    Runtime::run(
        RuntimeConfig {
            title: "Portal".to_string(),
            ..RuntimeConfig::default()
        },
        GpuInit::default(),
        app,
    )
}
