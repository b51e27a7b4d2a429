use std::cell::Cell;
use std::rc::Rc;

/// Scalar time slot shared between the scheduler and a shader pass.
///
/// Clones alias the same value. Frame-thread only.
#[derive(Debug, Clone, Default)]
pub struct TimeUniform {
    seconds: Rc<Cell<f64>>,
}

impl TimeUniform {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set(&self, seconds: f64) {
        self.seconds.set(seconds);
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.seconds.get()
    }

    /// Value as uploaded to the GPU.
    #[inline]
    pub fn get_f32(&self) -> f32 {
        self.seconds.get() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_slot() {
        let a = TimeUniform::new();
        let b = a.clone();
        assert_eq!(b.get(), 0.0);
        a.set(1.25);
        assert_eq!(b.get(), 1.25);
        assert_eq!(b.get_f32(), 1.25f32);
    }
}
