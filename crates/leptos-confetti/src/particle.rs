//! Confetti particles
//!
//! Pure particle math, kept apart from the canvas so it runs on the host.

/// A single round confetti piece, in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Radius
    pub r: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Particle {
    /// Spawn a particle somewhere inside `width` x `height`.
    ///
    /// `rand` must yield values in `[0, 1)`, like `Math.random`.
    pub fn random(width: f64, height: f64, rand: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: rand() * width,
            y: rand() * height,
            r: rand() * 6.0 + 4.0,
            dx: rand() * 4.0 - 2.0,
            dy: rand() * 5.0 + 2.0,
        }
    }

    /// Advance one frame
    pub fn step(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }
}

pub fn spawn_particles(
    count: usize,
    width: f64,
    height: f64,
    mut rand: impl FnMut() -> f64,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle::random(width, height, &mut rand))
        .collect()
}

/// Fill style for a hue in degrees
pub fn hue_color(hue: f64) -> String {
    format!("hsl({:.0}, 100%, 70%)", hue)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for Math.random cycling through fixed values
    fn cycle(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_random_low_bounds() {
        let p = Particle::random(800.0, 600.0, &mut cycle(&[0.0]));
        assert_eq!(p, Particle { x: 0.0, y: 0.0, r: 4.0, dx: -2.0, dy: 2.0 });
    }

    #[test]
    fn test_random_midpoint() {
        let p = Particle::random(800.0, 600.0, &mut cycle(&[0.5]));
        assert_eq!(p.x, 400.0);
        assert_eq!(p.y, 300.0);
        assert_eq!(p.r, 7.0);
        assert_eq!(p.dx, 0.0);
        assert_eq!(p.dy, 4.5);
    }

    #[test]
    fn test_spawn_stays_in_ranges() {
        let particles = spawn_particles(
            140,
            1024.0,
            768.0,
            cycle(&[0.0, 0.13, 0.37, 0.5, 0.71, 0.99]),
        );
        assert_eq!(particles.len(), 140);
        for p in &particles {
            assert!((0.0..1024.0).contains(&p.x));
            assert!((0.0..768.0).contains(&p.y));
            assert!((4.0..10.0).contains(&p.r));
            assert!((-2.0..2.0).contains(&p.dx));
            assert!((2.0..7.0).contains(&p.dy));
        }
    }

    #[test]
    fn test_step_moves_by_velocity() {
        let mut p = Particle { x: 10.0, y: 20.0, r: 5.0, dx: -1.5, dy: 3.0 };
        p.step();
        p.step();
        assert_eq!((p.x, p.y), (7.0, 26.0));
        assert_eq!(p.r, 5.0);
    }

    #[test]
    fn test_zero_count() {
        assert!(spawn_particles(0, 100.0, 100.0, || 0.5).is_empty());
    }

    #[test]
    fn test_hue_color() {
        assert_eq!(hue_color(200.4), "hsl(200, 100%, 70%)");
    }
}
