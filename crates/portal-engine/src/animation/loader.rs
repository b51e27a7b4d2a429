use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use anyhow::Context;
use thiserror::Error;

use super::binding::AnimationBinder;
use super::clip::{AnimationClip, ClipLibrary};
use super::mixer::{AnimationMixer, Pose, SharedPose};

#[derive(Debug, Error)]
pub enum ClipLoadError {
    #[error("failed to read clip file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse clip file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("clip file contains no animations")]
    Empty,

    #[error("clip `{0}` has keyframes out of order")]
    Unsorted(String),
}

/// Loads a clip file off the frame thread and binds a playing mixer.
///
/// On failure the binder is dropped without binding, so the scheduler's slot
/// stays unbound and the rest of the scene keeps running.
pub struct ClipLoader;

impl ClipLoader {
    /// Reads and validates a clip file. The first clip is the one played.
    pub fn load(path: &Path) -> Result<AnimationClip, ClipLoadError> {
        let bytes = std::fs::read(path).map_err(|source| ClipLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&bytes)
    }

    pub fn parse(bytes: &[u8]) -> Result<AnimationClip, ClipLoadError> {
        let library: ClipLibrary = serde_json::from_slice(bytes)?;
        let clip = library
            .animations
            .into_iter()
            .next()
            .ok_or(ClipLoadError::Empty)?;

        if !clip.tracks_sorted() {
            return Err(ClipLoadError::Unsorted(clip.name));
        }
        Ok(clip)
    }

    /// Builds a mixer for `clip` with the action already playing.
    pub fn build_mixer(clip: AnimationClip, base: Pose, target: SharedPose) -> AnimationMixer {
        let mut mixer = AnimationMixer::new(base, target);
        mixer.clip_action(clip).play();
        mixer
    }

    /// Spawns the loader thread.
    pub fn spawn(
        path: PathBuf,
        base: Pose,
        target: SharedPose,
        binder: AnimationBinder,
    ) -> anyhow::Result<JoinHandle<()>> {
        std::thread::Builder::new()
            .name("portal-clip-loader".into())
            .spawn(move || {
                log::info!("loading animation clip from {}", path.display());
                match Self::load(&path) {
                    Ok(clip) => {
                        log::info!(
                            "animation clip `{}` loaded ({:.2}s)",
                            clip.name,
                            clip.duration()
                        );
                        let mixer = Self::build_mixer(clip, base, target);
                        if !binder.bind(mixer) {
                            log::debug!("scheduler gone before the animation could be bound");
                        }
                    }
                    Err(e) => log::error!("animation clip load failed: {e}"),
                }
            })
            .context("failed to spawn clip loader thread")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::animation_handoff;
    use parking_lot::Mutex;
    use std::sync::Arc;

    const CLIP: &str = r#"{
        "animations": [
            { "name": "Survey", "yaw": [ { "time": 0.0, "value": 0.0 }, { "time": 1.0, "value": 1.0 } ] },
            { "name": "Unused" }
        ]
    }"#;

    #[test]
    fn parse_takes_first_clip() {
        let clip = ClipLoader::parse(CLIP.as_bytes()).unwrap();
        assert_eq!(clip.name, "Survey");
        assert_eq!(clip.duration(), 1.0);
    }

    #[test]
    fn parse_rejects_empty_library() {
        let err = ClipLoader::parse(br#"{ "animations": [] }"#).unwrap_err();
        assert!(matches!(err, ClipLoadError::Empty));
    }

    #[test]
    fn parse_rejects_unsorted_keys() {
        let json = br#"{ "animations": [ { "name": "bad",
            "scale": [ { "time": 1.0, "value": 1.0 }, { "time": 0.5, "value": 2.0 } ] } ] }"#;
        let err = ClipLoader::parse(json).unwrap_err();
        assert!(matches!(err, ClipLoadError::Unsorted(name) if name == "bad"));
    }

    #[test]
    fn parse_reports_malformed_json() {
        assert!(matches!(
            ClipLoader::parse(b"{ not json"),
            Err(ClipLoadError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_never_binds() {
        let (binder, mut slot) = animation_handoff();
        let pose = Arc::new(Mutex::new(Pose::default()));
        let handle = ClipLoader::spawn(
            PathBuf::from("/definitely/not/here/fox.json"),
            Pose::default(),
            pose,
            binder,
        )
        .unwrap();
        handle.join().unwrap();

        assert!(slot.poll().is_none());
        assert!(!slot.is_bound());
    }

    #[test]
    fn built_mixer_is_playing() {
        let clip = ClipLoader::parse(CLIP.as_bytes()).unwrap();
        let pose = Arc::new(Mutex::new(Pose::default()));
        let mut mixer = ClipLoader::build_mixer(clip, Pose::default(), pose.clone());
        mixer.update(0.5);
        assert!(pose.lock().visible);
        assert_eq!(pose.lock().yaw, 0.5);
    }
}
