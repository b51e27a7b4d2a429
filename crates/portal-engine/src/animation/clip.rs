use serde::Deserialize;

/// One keyframe of a track.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Keyframe<T> {
    /// Seconds from the start of the clip.
    pub time: f64,
    pub value: T,
}

/// Keyframes sampled with linear interpolation.
///
/// Keyframe times must be ascending; `ClipLoader::parse` rejects tracks
/// that are not.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Track<T> {
    pub keys: Vec<Keyframe<T>>,
}

impl<T> Default for Track<T> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

/// Values a track can interpolate.
pub trait Lerp: Copy {
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for [f32; 3] {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        [
            self[0].lerp(other[0], t),
            self[1].lerp(other[1], t),
            self[2].lerp(other[2], t),
        ]
    }
}

impl<T: Lerp> Track<T> {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.keys.windows(2).all(|w| w[0].time <= w[1].time)
    }

    /// Time of the last keyframe, 0 for an empty track.
    pub fn end_time(&self) -> f64 {
        self.keys.last().map_or(0.0, |k| k.time)
    }

    /// Samples the track at `time`, holding the first/last value outside the
    /// keyed range. Returns `None` for an empty track.
    pub fn sample(&self, time: f64) -> Option<T> {
        let first = self.keys.first()?;
        if time <= first.time {
            return Some(first.value);
        }

        // First key strictly after `time`.
        let next = self.keys.partition_point(|k| k.time <= time);
        if next >= self.keys.len() {
            return self.keys.last().map(|k| k.value);
        }

        let a = self.keys[next - 1];
        let b = self.keys[next];
        let span = b.time - a.time;
        if span <= 0.0 {
            return Some(b.value);
        }
        let t = ((time - a.time) / span) as f32;
        Some(a.value.lerp(b.value, t))
    }
}

/// A named keyframe clip animating translation, yaw and uniform scale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimationClip {
    pub name: String,

    /// Clip length in seconds. Derived from the tracks when omitted.
    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub translation: Track<[f32; 3]>,

    /// Rotation around +Y, in radians.
    #[serde(default)]
    pub yaw: Track<f32>,

    #[serde(default)]
    pub scale: Track<f32>,
}

impl AnimationClip {
    pub fn duration(&self) -> f64 {
        self.duration.unwrap_or_else(|| {
            self.translation
                .end_time()
                .max(self.yaw.end_time())
                .max(self.scale.end_time())
        })
    }

    pub(crate) fn tracks_sorted(&self) -> bool {
        self.translation.is_sorted() && self.yaw.is_sorted() && self.scale.is_sorted()
    }
}

/// Contents of a clip file: `{ "animations": [ ... ] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipLibrary {
    pub animations: Vec<AnimationClip>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(keys: &[(f64, f32)]) -> Track<f32> {
        Track {
            keys: keys.iter().map(|&(time, value)| Keyframe { time, value }).collect(),
        }
    }

    #[test]
    fn sample_interpolates_between_keys() {
        let t = track(&[(0.0, 0.0), (1.0, 10.0), (2.0, 0.0)]);
        assert_eq!(t.sample(0.5), Some(5.0));
        assert_eq!(t.sample(1.0), Some(10.0));
        assert_eq!(t.sample(1.5), Some(5.0));
    }

    #[test]
    fn sample_holds_outside_range() {
        let t = track(&[(0.5, 1.0), (1.0, 2.0)]);
        assert_eq!(t.sample(0.0), Some(1.0));
        assert_eq!(t.sample(5.0), Some(2.0));
    }

    #[test]
    fn empty_track_samples_none() {
        assert_eq!(Track::<f32>::default().sample(0.3), None);
    }

    #[test]
    fn duration_falls_back_to_longest_track() {
        let clip = AnimationClip {
            name: "walk".into(),
            duration: None,
            translation: Track::default(),
            yaw: track(&[(0.0, 0.0), (3.0, 1.0)]),
            scale: track(&[(0.0, 1.0), (1.5, 1.0)]),
        };
        assert_eq!(clip.duration(), 3.0);
    }

    #[test]
    fn parses_clip_library_json() {
        let json = r#"{
            "animations": [{
                "name": "Survey",
                "duration": 2.0,
                "translation": [
                    { "time": 0.0, "value": [0.0, 0.0, 0.0] },
                    { "time": 1.0, "value": [0.0, 0.1, 0.0] }
                ],
                "yaw": [ { "time": 0.0, "value": 0.0 } ]
            }]
        }"#;
        let lib: ClipLibrary = serde_json::from_str(json).unwrap();
        let clip = &lib.animations[0];
        assert_eq!(clip.name, "Survey");
        assert_eq!(clip.duration(), 2.0);
        assert_eq!(clip.translation.sample(0.5), Some([0.0, 0.05, 0.0]));
        assert!(clip.scale.is_empty());
        assert!(clip.tracks_sorted());
    }
}
