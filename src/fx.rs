//! Decorative collaborators: the particle background, the card tilt glare,
//! and the reveal-on-scroll treatment. Each is driven by a fixed
//! configuration map and is non-critical; a failed background init is
//! ignored, and none of this touches the fetch pipeline.

use crate::layout;
use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct BackgroundConfig {
    pub points: u16,
    pub mobile_points: u16,
    pub max_distance: u16,
    pub spacing: u16,
    pub show_dots: bool,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        BackgroundConfig {
            points: 10,
            mobile_points: 5,
            max_distance: 22,
            spacing: 18,
            show_dots: true,
        }
    }
}

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
}

/// Slowly drifting dot field behind the page. Deterministically seeded from
/// the configuration so it needs no randomness source.
#[derive(Debug, Clone)]
pub struct BackgroundFx {
    show_dots: bool,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl BackgroundFx {
    /// Returns None when the viewport cannot host the effect; callers treat
    /// that the same as any other background failure and move on.
    pub fn new(config: &BackgroundConfig, width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let count = if layout::is_compact(width) {
            config.mobile_points
        } else {
            config.points
        };
        let speed = config.max_distance as f32 / 44.0;

        let particles = (0..count)
            .map(|i| {
                let n = i as f32;
                Particle {
                    x: (n * config.spacing as f32 * 1.7) % width as f32,
                    y: (n * 5.3) % height as f32,
                    dx: if i % 2 == 0 { speed } else { -speed * 0.7 },
                    dy: if i % 3 == 0 { speed * 0.3 } else { -speed * 0.2 },
                }
            })
            .collect();

        Some(BackgroundFx {
            show_dots: config.show_dots,
            width: width as f32,
            height: height as f32,
            particles,
        })
    }

    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.x += p.dx;
            p.y += p.dy;
            if p.x < 0.0 {
                p.x += self.width;
            } else if p.x >= self.width {
                p.x -= self.width;
            }
            if p.y < 0.0 {
                p.y += self.height;
            } else if p.y >= self.height {
                p.y -= self.height;
            }
        }
    }

    pub fn point_count(&self) -> usize {
        self.particles.len()
    }

    pub fn show_dots(&self) -> bool {
        self.show_dots
    }

    pub fn positions(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.particles.iter().map(|p| (p.x as u16, p.y as u16))
    }
}

#[derive(Debug, Clone)]
pub struct TiltConfig {
    pub max: u16,
    pub speed_ms: u64,
    pub glare: bool,
    pub max_glare: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        TiltConfig {
            max: 10,
            speed_ms: 400,
            glare: true,
            max_glare: 0.1,
        }
    }
}

/// Focus accent on project cards. Skipped entirely on compact viewports to
/// avoid per-frame work where it would not be seen.
#[derive(Debug, Clone)]
pub struct TiltFx {
    config: TiltConfig,
    intensity: f32,
}

impl TiltFx {
    pub fn init(config: TiltConfig, width: u16) -> Option<Self> {
        if layout::is_compact(width) {
            return None;
        }
        Some(TiltFx {
            config,
            intensity: 0.0,
        })
    }

    /// Restart the glare ease-in when card focus moves.
    pub fn on_focus_change(&mut self) {
        self.intensity = 0.0;
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if !self.config.glare || self.config.speed_ms == 0 {
            return;
        }
        let step = elapsed.as_millis() as f32 / self.config.speed_ms as f32;
        self.intensity = (self.intensity + step).min(1.0);
    }

    /// Style layered onto the focused card.
    pub fn focus_style(&self) -> Style {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if self.config.glare {
            let lift = self.config.max_glare * self.intensity * (self.config.max as f32 / 10.0);
            let boost = (lift * 255.0) as u8;
            style = style.bg(Color::Rgb(
                20u8.saturating_add(boost),
                20u8.saturating_add(boost),
                30u8.saturating_add(boost),
            ));
        }
        style
    }
}

#[derive(Debug, Clone)]
pub struct RevealConfig {
    pub once: bool,
    pub offset_ms: u64,
    pub duration_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            once: true,
            offset_ms: 100,
            duration_ms: 800,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Settling,
    Shown,
}

/// Cards fade in once when first scrolled into view.
#[derive(Debug, Clone)]
pub struct RevealState {
    config: RevealConfig,
    pending: HashMap<usize, Instant>,
    revealed: HashMap<usize, Instant>,
}

impl RevealState {
    pub fn new(config: RevealConfig) -> Self {
        RevealState {
            config,
            pending: HashMap::new(),
            revealed: HashMap::new(),
        }
    }

    /// Feed the currently visible card indices.
    pub fn observe(&mut self, visible: &[usize], now: Instant) {
        for &index in visible {
            if self.revealed.contains_key(&index) {
                continue;
            }
            let due = *self
                .pending
                .entry(index)
                .or_insert_with(|| now + Duration::from_millis(self.config.offset_ms));
            if now >= due {
                self.pending.remove(&index);
                self.revealed.insert(index, now);
            }
        }
    }

    pub fn phase(&self, index: usize, now: Instant) -> RevealPhase {
        match self.revealed.get(&index) {
            Some(at) => {
                if now.duration_since(*at) < Duration::from_millis(self.config.duration_ms) {
                    RevealPhase::Settling
                } else {
                    RevealPhase::Shown
                }
            }
            None => RevealPhase::Hidden,
        }
    }

    /// Cards are destroyed and rebuilt on every fetch cycle; reveal state
    /// resets with them.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.revealed.clear();
    }
}

impl Default for RevealState {
    fn default() -> Self {
        RevealState::new(RevealConfig::default())
    }
}
