//! Deterministic particle placement.

use crate::render_policy::{ParticleBudget, ParticleKind};

/// Base seconds for one drift cycle at speed `1.0`.
const BASE_CYCLE_S: f64 = 12.0;

#[derive(Debug, Clone, PartialEq)]
/// One positioned particle.
pub struct ParticleSprite {
    /// Particle family.
    pub kind: ParticleKind,
    /// Horizontal position in percent of the field.
    pub x_pct: f64,
    /// Vertical position in percent of the field.
    pub y_pct: f64,
    /// Size in rem.
    pub size_rem: f64,
    /// Animation start delay in seconds.
    pub delay_s: f64,
    /// Animation cycle length in seconds.
    pub duration_s: f64,
    /// CSS colour.
    pub color: &'static str,
}

impl ParticleSprite {
    /// Inline style declaring the sprite's CSS custom properties.
    pub fn style(&self) -> String {
        format!(
            "--x:{:.2}%;--y:{:.2}%;--size:{:.3}rem;--delay:{:.2}s;--duration:{:.2}s;--color:{}",
            self.x_pct, self.y_pct, self.size_rem, self.delay_s, self.duration_s, self.color
        )
    }
}

/// Places `budget.count` particles. The same budget and seed always produce the same layout.
pub fn particle_layout(budget: &ParticleBudget, seed: u64) -> Vec<ParticleSprite> {
    if !budget.enabled || budget.count == 0 || budget.palette.is_empty() {
        return Vec::new();
    }

    let mut rng = fastrand::Rng::with_seed(seed);
    let size_span = (budget.size_max - budget.size_min).max(0.0);
    let cycle_s = BASE_CYCLE_S / budget.speed.max(0.05);

    (0..budget.count)
        .map(|_| ParticleSprite {
            kind: budget.kind,
            x_pct: rng.f64() * 100.0,
            y_pct: rng.f64() * 100.0,
            size_rem: budget.size_min + rng.f64() * size_span,
            delay_s: rng.f64() * cycle_s,
            duration_s: cycle_s * (0.75 + rng.f64() * 0.5),
            color: budget.palette[rng.usize(..budget.palette.len())],
        })
        .collect()
}
