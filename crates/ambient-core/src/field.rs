//! Free-drifting particles on a torus, linked by proximity.

use crate::config::{FieldConfig, Viewport};
use crate::paint::Painter;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Logical px per frame; fixed for the particle's lifetime.
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(viewport: Viewport, config: &FieldConfig, rng: &mut R) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * config.speed,
            (rng.gen::<f32>() - 0.5) * config.speed,
        );
        Self {
            // gen() may round up to width/height; keep inside the half-open box
            position: wrap(position, viewport),
            velocity,
            radius: rng.gen::<f32>() * config.max_radius,
        }
    }

    #[inline]
    pub fn advance(&mut self, viewport: Viewport) {
        self.position = wrap(self.position + self.velocity, viewport);
    }
}

/// A connection between particles `a` and `b` (indices, `a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
}

/// Opacity for an edge of length `distance`: `max_alpha` at 0, fading
/// linearly to exactly 0 at `threshold`.
#[inline]
pub fn edge_opacity(distance: f32, threshold: f32, max_alpha: f32) -> f32 {
    if distance >= threshold {
        return 0.0;
    }
    (1.0 - distance / threshold) * max_alpha
}

/// Toroidal wrap of one coordinate into `[0, extent)`.
#[inline]
pub fn wrap_axis(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let mut w = if v < 0.0 {
        v + extent
    } else if v >= extent {
        v - extent
    } else {
        return v;
    };
    // a step larger than the extent, or float rounding at the seam
    if !(0.0..extent).contains(&w) {
        w = w.rem_euclid(extent);
        if w >= extent {
            w = 0.0;
        }
    }
    w
}

#[inline]
pub fn wrap(p: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(wrap_axis(p.x, viewport.width), wrap_axis(p.y, viewport.height))
}

/// Simulation state for one engine instance.
///
/// Count and connection distance come from `config` and never change; a new
/// viewport or mode means a new population via [`ParticleField::reseed`].
#[derive(Clone, Debug)]
pub struct ParticleField {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, viewport: Viewport, rng: &mut R) -> Self {
        let mut field = Self {
            config,
            viewport,
            particles: Vec::new(),
        };
        field.populate(rng);
        field
    }

    /// Build from explicit particles, wrapping any that start outside the
    /// viewport.
    pub fn from_particles(config: FieldConfig, viewport: Viewport, particles: Vec<Particle>) -> Self {
        let particles = particles
            .into_iter()
            .map(|mut p| {
                p.position = wrap(p.position, viewport);
                p
            })
            .collect();
        Self {
            config,
            viewport,
            particles,
        }
    }

    pub fn reseed<R: Rng + ?Sized>(&mut self, config: FieldConfig, viewport: Viewport, rng: &mut R) {
        self.config = config;
        self.viewport = viewport;
        self.populate(rng);
    }

    fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (viewport, config) = (self.viewport, &self.config);
        self.particles = (0..config.count)
            .map(|_| Particle::random(viewport, config, rng))
            .collect();
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn step(&mut self) {
        let viewport = self.viewport;
        for p in &mut self.particles {
            p.advance(viewport);
        }
    }

    /// Visit every unordered pair closer than the connection distance.
    pub fn for_each_edge(&self, mut f: impl FnMut(Edge)) {
        let threshold = self.config.connection_distance;
        let ps = &self.particles;
        for i in 0..ps.len() {
            for j in (i + 1)..ps.len() {
                let d = ps[i].position - ps[j].position;
                // box test first; most pairs never reach the sqrt
                if d.x.abs() > threshold || d.y.abs() > threshold {
                    continue;
                }
                let distance = d.length();
                if distance < threshold {
                    f(Edge {
                        a: i,
                        b: j,
                        distance,
                        opacity: edge_opacity(distance, threshold, self.config.edge_max_alpha),
                    });
                }
            }
        }
    }

    pub fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::new();
        self.for_each_edge(|e| out.push(e));
        out
    }

    /// Advance one frame and draw it.
    pub fn frame<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        let Viewport { width, height } = self.viewport;
        painter.clear(width, height);

        let fill = self.config.accent.with_alpha(self.config.particle_alpha);
        for p in &mut self.particles {
            p.advance(self.viewport);
            painter.fill_disc(p.position, p.radius, fill);
        }

        let accent = self.config.accent;
        let line_width = self.config.line_width;
        let ps = &self.particles;
        self.for_each_edge(|e| {
            painter.stroke_line(
                ps[e.a].position,
                ps[e.b].position,
                line_width,
                accent.with_alpha(e.opacity),
            );
        });
    }
}
