use bytemuck::{Pod, Zeroable};
use rand::Rng;

/// One firefly instance as uploaded to the GPU (16 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Firefly {
    pub position: [f32; 3],
    /// Per-instance size multiplier in [0, 1).
    pub scale: f32,
}

/// Static fireflies layout.
#[derive(Debug, Clone, Default)]
pub struct Fireflies {
    pub instances: Vec<Firefly>,
}

impl Fireflies {
    /// Scatters `count` fireflies over the scene floor area.
    ///
    /// x in [-2, 3), y in [0, 1.5), z in [-2, 2).
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let instances = (0..count)
            .map(|_| Firefly {
                position: [
                    (rng.random::<f32>() - 0.4) * 5.0,
                    rng.random::<f32>() * 1.5,
                    (rng.random::<f32>() - 0.5) * 4.0,
                ],
                scale: rng.random::<f32>(),
            })
            .collect();
        Self { instances }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn layout_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let ff = Fireflies::generate(500, &mut rng);
        assert_eq!(ff.len(), 500);
        for f in &ff.instances {
            let [x, y, z] = f.position;
            assert!((-2.0..3.0).contains(&x), "x = {x}");
            assert!((0.0..1.5).contains(&y), "y = {y}");
            assert!((-2.0..2.0).contains(&z), "z = {z}");
            assert!((0.0..1.0).contains(&f.scale));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = Fireflies::generate(50, &mut StdRng::seed_from_u64(42));
        let b = Fireflies::generate(50, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.instances, b.instances);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(Fireflies::generate(0, &mut StdRng::seed_from_u64(1)).is_empty());
    }
}
