use rand::Rng;

pub const CELEBRATION_DURATION_MS: u32 = 3000;
pub const PARTICLES_PER_BURST: u32 = 5;
pub const SPREAD_DEGREES: f64 = 55.0;

// canvas-confetti default colours
pub const CONFETTI_COLORS: [&str; 7] = [
    "#26ccff", "#a25afd", "#ff5e7e", "#88ff5a", "#fcff42", "#ffa62d", "#ff36ff",
];

// Physics in viewport units (1.0 = full width/height) per millisecond
const START_VELOCITY: f64 = 0.0016;
const GRAVITY: f64 = 0.000_002;
const DRAG_PER_FRAME: f64 = 0.985;
const FRAME_MS: f64 = 1000.0 / 60.0;
const PARTICLE_LIFETIME_MS: f64 = 1800.0;
const MAX_FRAME_GAP_MS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationConfig {
    pub duration_ms: u32,
    pub particle_count: u32,
    pub spread_degrees: f64,
    pub colors: Vec<String>,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            duration_ms: CELEBRATION_DURATION_MS,
            particle_count: PARTICLES_PER_BURST,
            spread_degrees: SPREAD_DEGREES,
            colors: CONFETTI_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// A fixed point on the screen edge that sprays particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emitter {
    /// 0.0 is the left edge, 1.0 the right.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Degrees, 90 is straight up.
    pub angle_degrees: f64,
}

/// Launch angle for the left emitter, sweeping between 25 and 60 degrees.
pub fn emitter_angle(now_ms: f64) -> f64 {
    42.5 + 17.5 * (now_ms * 0.005).sin()
}

/// The two mirrored emitters for a given instant.
pub fn emitters_at(now_ms: f64) -> [Emitter; 2] {
    let angle = emitter_angle(now_ms);
    [
        Emitter { origin_x: 0.0, origin_y: 0.5, angle_degrees: angle },
        Emitter { origin_x: 1.0, origin_y: 0.5, angle_degrees: 180.0 - angle },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: usize,
    pub tilt: f64,
    pub age_ms: f64,
}

impl Particle {
    pub fn opacity(&self) -> f64 {
        (1.0 - self.age_ms / PARTICLE_LIFETIME_MS).clamp(0.0, 1.0)
    }

    fn is_alive(&self) -> bool {
        self.age_ms < PARTICLE_LIFETIME_MS && self.y < 1.2
    }

    fn step(&mut self, dt_ms: f64) {
        let drag = DRAG_PER_FRAME.powf(dt_ms / FRAME_MS);
        self.vx *= drag;
        self.vy = self.vy * drag + GRAVITY * dt_ms;
        self.x += self.vx * dt_ms;
        self.y += self.vy * dt_ms;
        self.tilt += dt_ms * 0.01;
        self.age_ms += dt_ms;
    }
}

/// Confetti run with a hard deadline. Drive it with `tick` once per frame
/// until it returns false.
#[derive(Debug, Clone)]
pub struct Celebration {
    config: CelebrationConfig,
    started_at_ms: f64,
    last_tick_ms: f64,
    particles: Vec<Particle>,
}

impl Celebration {
    pub fn start(now_ms: f64, config: CelebrationConfig) -> Self {
        Self {
            config,
            started_at_ms: now_ms,
            last_tick_ms: now_ms,
            particles: Vec::new(),
        }
    }

    pub fn deadline_ms(&self) -> f64 {
        self.started_at_ms + self.config.duration_ms as f64
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        now_ms < self.deadline_ms()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn color(&self, particle: &Particle) -> &str {
        self.config
            .colors
            .get(particle.color)
            .map(String::as_str)
            .unwrap_or(CONFETTI_COLORS[0])
    }

    /// Advances one frame. Returns whether another frame should be scheduled.
    pub fn tick<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        if !self.is_active(now_ms) {
            self.particles.clear();
            return false;
        }

        let dt = (now_ms - self.last_tick_ms).clamp(0.0, MAX_FRAME_GAP_MS);
        self.last_tick_ms = now_ms;

        for particle in &mut self.particles {
            particle.step(dt);
        }
        self.particles.retain(Particle::is_alive);

        for emitter in emitters_at(now_ms) {
            self.emit(&emitter, rng);
        }
        true
    }

    pub fn stop(&mut self) {
        self.particles.clear();
        self.started_at_ms = f64::NEG_INFINITY;
    }

    fn emit<R: Rng + ?Sized>(&mut self, emitter: &Emitter, rng: &mut R) {
        let half_spread = self.config.spread_degrees / 2.0;
        let color_count = self.config.colors.len().max(1);

        for _ in 0..self.config.particle_count {
            let angle = (emitter.angle_degrees + rng.gen_range(-half_spread..=half_spread)).to_radians();
            let speed = START_VELOCITY * rng.gen_range(0.6..1.2);
            self.particles.push(Particle {
                x: emitter.origin_x,
                y: emitter.origin_y,
                vx: angle.cos() * speed,
                vy: -angle.sin() * speed,
                color: rng.gen_range(0..color_count),
                tilt: rng.gen_range(0.0..std::f64::consts::PI),
                age_ms: 0.0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_emitters_are_mirrored() {
        for t in [0.0, 120.0, 314.0, 2999.0] {
            let [left, right] = emitters_at(t);
            assert_eq!(left.origin_x, 0.0);
            assert_eq!(right.origin_x, 1.0);
            assert!((left.angle_degrees + right.angle_degrees - 180.0).abs() < 1e-9);
            assert!(left.angle_degrees >= 25.0 && left.angle_degrees <= 60.0);
        }
    }

    #[test]
    fn test_runs_for_fixed_duration() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut celebration = Celebration::start(10_000.0, CelebrationConfig::default());

        assert!(celebration.tick(10_000.0, &mut rng));
        assert_eq!(celebration.particles().len(), 10);

        let mut now = 10_000.0;
        while now < 12_990.0 {
            now += 16.0;
            assert_eq!(celebration.tick(now, &mut rng), now < 13_000.0);
        }
        assert!(!celebration.tick(13_000.0, &mut rng));
        assert!(celebration.particles().is_empty());
    }

    #[test]
    fn test_stop_clears_everything() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut celebration = Celebration::start(0.0, CelebrationConfig::default());
        celebration.tick(16.0, &mut rng);
        celebration.stop();
        assert!(celebration.particles().is_empty());
        assert!(!celebration.tick(32.0, &mut rng));
    }

    #[test]
    fn test_particles_rise_then_fall() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut celebration = Celebration::start(0.0, CelebrationConfig { particle_count: 1, ..Default::default() });
        celebration.tick(0.0, &mut rng);
        let mut particle = celebration.particles()[0].clone();
        assert!(particle.vy < 0.0);
        for _ in 0..200 {
            particle.step(FRAME_MS);
        }
        assert!(particle.vy > 0.0);
        assert!(particle.opacity() < 1.0);
    }
}
