//! Gold smoke trail for the not-found page.

pub const SPAWN_PER_FRAME: usize = 2;
const GROWTH_PER_FRAME: f64 = 0.1;
const MAX_OPACITY: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puff {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    vx: f64,
    vy: f64,
    life: f64,
    max_life: f64,
}

impl Puff {
    /// `rng` yields uniform values in `[0, 1)`.
    pub fn new(x: f64, y: f64, rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            x,
            y,
            size: rng() * 5.0 + 2.0,
            vx: rng() - 0.5,
            vy: -rng() - 0.5,
            life: 0.0,
            max_life: rng() * 50.0 + 50.0,
        }
    }

    fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.life += 1.0;
        self.size += GROWTH_PER_FRAME;
    }

    pub fn opacity(&self) -> f64 {
        (1.0 - self.life / self.max_life).max(0.0)
    }

    pub fn is_alive(&self) -> bool {
        self.life < self.max_life
    }

    pub fn fill_style(&self) -> String {
        format!("rgba(180, 151, 90, {:.3})", self.opacity() * MAX_OPACITY)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmokeField {
    puffs: Vec<Puff>,
}

impl SmokeField {
    /// One animation frame. `emitter` is the pointer position while it is
    /// moving; new puffs are born there before everything advances.
    pub fn step(&mut self, emitter: Option<(f64, f64)>, rng: &mut impl FnMut() -> f64) {
        if let Some((x, y)) = emitter {
            for _ in 0..SPAWN_PER_FRAME {
                self.puffs.push(Puff::new(x, y, rng));
            }
        }
        for puff in &mut self.puffs {
            puff.update();
        }
    }

    /// Puffs to draw this frame. Call [`SmokeField::prune`] after drawing.
    pub fn puffs(&self) -> impl Iterator<Item = &Puff> {
        self.puffs.iter().filter(|puff| puff.opacity() > 0.0)
    }

    pub fn prune(&mut self) {
        self.puffs.retain(Puff::is_alive);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.puffs.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.puffs.is_empty()
    }
}

/// The pointer counts as moving for `idle_ms` after its last event.
pub fn is_moving(now_ms: f64, moved_at_ms: Option<f64>, idle_ms: f64) -> bool {
    moved_at_ms.map_or(false, |moved_at| now_ms - moved_at < idle_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn puffs_drift_up_and_grow() {
        let mut rng = fixed(0.5);
        let mut field = SmokeField::default();
        field.step(Some((100.0, 100.0)), &mut rng);

        assert_eq!(field.len(), SPAWN_PER_FRAME);
        let puff = field.puffs().next().copied();
        let puff = puff.filter(|puff| puff.y < 100.0 && puff.x == 100.0);
        assert!(puff.is_some());
        assert!(puff.map_or(false, |puff| (puff.size - 4.6).abs() < 1e-9));
    }

    #[test]
    fn velocity_ranges_follow_the_random_source() {
        let low = Puff::new(0.0, 0.0, &mut fixed(0.0));
        assert_eq!((low.vx, low.vy, low.max_life), (-0.5, -0.5, 50.0));

        let high = Puff::new(0.0, 0.0, &mut fixed(0.999));
        assert!(high.vx < 0.5 && high.vy > -1.5 && high.max_life < 100.0);
    }

    #[test]
    fn puffs_fade_and_die_at_max_life() {
        let mut rng = fixed(0.0);
        let mut field = SmokeField::default();
        field.step(Some((0.0, 0.0)), &mut rng);
        assert_eq!(field.puffs().next().map(Puff::fill_style).as_deref(), Some("rgba(180, 151, 90, 0.392)"));

        for _ in 0..48 {
            field.step(None, &mut rng);
            field.prune();
        }
        assert_eq!(field.len(), 2);

        field.step(None, &mut rng);
        assert_eq!(field.puffs().count(), 0);
        field.prune();
        assert!(field.is_empty());
    }

    #[test]
    fn pointer_is_moving_only_shortly_after_an_event() {
        assert!(!is_moving(1_000.0, None, 100.0));
        assert!(is_moving(1_050.0, Some(1_000.0), 100.0));
        assert!(!is_moving(1_100.0, Some(1_000.0), 100.0));
    }
}
