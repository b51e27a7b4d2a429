use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};
use parking_lot::Mutex;

use super::binding::AnimationBinding;
use super::clip::AnimationClip;

/// Transform of an animated object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    /// Rotation around +Y, in radians.
    pub yaw: f32,
    pub scale: f32,
    /// False until a mixer has written a pose.
    pub visible: bool,
}

impl Pose {
    pub fn new(translation: Vec3, yaw: f32, scale: f32) -> Self {
        Self {
            translation,
            yaw,
            scale,
            visible: false,
        }
    }

    /// Wraps the pose for sharing between a mixer and a pass.
    pub fn shared(self) -> SharedPose {
        Arc::new(Mutex::new(self))
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw),
            self.translation,
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0, 1.0)
    }
}

/// Pose shared between the mixer and the pass that draws it.
pub type SharedPose = Arc<Mutex<Pose>>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopMode {
    /// Wrap back to the start at the end of the clip.
    Repeat,
    /// Stop on the last frame.
    Once,
}

/// Playback state of one clip inside a mixer.
#[derive(Debug, Clone)]
pub struct ClipAction {
    clip: AnimationClip,
    time: f64,
    playing: bool,
    pub loop_mode: LoopMode,
    pub time_scale: f64,
}

impl ClipAction {
    fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            time: 0.0,
            playing: false,
            loop_mode: LoopMode::Repeat,
            time_scale: 1.0,
        }
    }

    pub fn play(&mut self) -> &mut Self {
        self.playing = true;
        self
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Local clip time in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    fn step(&mut self, delta: f64) {
        if !self.playing {
            return;
        }

        let duration = self.clip.duration();
        self.time += delta * self.time_scale;

        if duration <= 0.0 {
            self.time = 0.0;
            return;
        }

        match self.loop_mode {
            LoopMode::Repeat => self.time = self.time.rem_euclid(duration),
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.playing = false;
                }
            }
        }
    }
}

/// Advances clip actions and writes the sampled pose into its target.
///
/// The first playing action drives the pose; there is no cross-fading.
/// Sampled values are relative to the base pose: translation is added, yaw is
/// added, scale is multiplied.
pub struct AnimationMixer {
    actions: Vec<ClipAction>,
    base: Pose,
    target: SharedPose,
    time: f64,
}

impl AnimationMixer {
    pub fn new(base: Pose, target: SharedPose) -> Self {
        Self {
            actions: Vec::new(),
            base,
            target,
            time: 0.0,
        }
    }

    /// Registers a clip and returns its action (initially stopped).
    pub fn clip_action(&mut self, clip: AnimationClip) -> &mut ClipAction {
        self.actions.push(ClipAction::new(clip));
        let last = self.actions.len() - 1;
        &mut self.actions[last]
    }

    pub fn actions(&self) -> &[ClipAction] {
        &self.actions
    }

    /// Total time the mixer has been advanced by.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn update(&mut self, delta: f64) {
        self.time += delta;
        for action in &mut self.actions {
            action.step(delta);
        }

        let Some(action) = self.actions.iter().find(|a| a.playing || a.time > 0.0) else {
            return;
        };

        let clip = &action.clip;
        let t = action.time;
        let mut pose = self.base;
        if let Some(v) = clip.translation.sample(t) {
            pose.translation += Vec3::from_array(v);
        }
        if let Some(v) = clip.yaw.sample(t) {
            pose.yaw += v;
        }
        if let Some(v) = clip.scale.sample(t) {
            pose.scale *= v;
        }
        pose.visible = true;

        *self.target.lock() = pose;
    }
}

impl AnimationBinding for AnimationMixer {
    fn advance(&mut self, delta_secs: f64) {
        self.update(delta_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::clip::{Keyframe, Track};

    fn bob_clip() -> AnimationClip {
        AnimationClip {
            name: "bob".into(),
            duration: Some(2.0),
            translation: Track {
                keys: vec![
                    Keyframe { time: 0.0, value: [0.0, 0.0, 0.0] },
                    Keyframe { time: 1.0, value: [0.0, 1.0, 0.0] },
                    Keyframe { time: 2.0, value: [0.0, 0.0, 0.0] },
                ],
            },
            yaw: Track::default(),
            scale: Track::default(),
        }
    }

    fn mixer() -> (AnimationMixer, SharedPose) {
        let pose: SharedPose = Arc::new(Mutex::new(Pose::default()));
        let base = Pose::new(Vec3::new(2.0, 0.0, 0.0), 0.5, 2.0);
        (AnimationMixer::new(base, pose.clone()), pose)
    }

    #[test]
    fn stopped_action_leaves_target_untouched() {
        let (mut m, pose) = mixer();
        m.clip_action(bob_clip());
        m.update(0.5);
        assert!(!pose.lock().visible);
    }

    #[test]
    fn playing_action_writes_pose_relative_to_base() {
        let (mut m, pose) = mixer();
        m.clip_action(bob_clip()).play();
        m.update(0.5);

        let p = *pose.lock();
        assert!(p.visible);
        assert_eq!(p.translation, Vec3::new(2.0, 0.5, 0.0));
        assert_eq!(p.yaw, 0.5);
        assert_eq!(p.scale, 2.0);
    }

    #[test]
    fn repeat_wraps_around_duration() {
        let (mut m, _pose) = mixer();
        m.clip_action(bob_clip()).play();
        m.update(2.5);
        assert!((m.actions()[0].time() - 0.5).abs() < 1e-9);
        assert!(m.actions()[0].is_playing());
        assert_eq!(m.time(), 2.5);
    }

    #[test]
    fn once_clamps_and_stops() {
        let (mut m, pose) = mixer();
        let action = m.clip_action(bob_clip());
        action.loop_mode = LoopMode::Once;
        action.play();
        m.update(3.0);

        assert!(!m.actions()[0].is_playing());
        assert_eq!(m.actions()[0].time(), 2.0);
        assert_eq!(pose.lock().translation, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn advance_is_update() {
        let (mut m, pose) = mixer();
        m.clip_action(bob_clip()).play();
        AnimationBinding::advance(&mut m, 1.0);
        assert_eq!(pose.lock().translation, Vec3::new(2.0, 1.0, 0.0));
    }
}
