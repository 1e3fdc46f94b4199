use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::{Interval, Timeout};
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

pub const PARTICLES_PER_BURST: usize = 150;
pub const FRAME_MS: u32 = 16;
/// Frames a particle lives at most.
pub const PARTICLE_TTL: u32 = 240;

const GRAVITY: f64 = 0.35;
const DRAG: f64 = 0.985;

pub const PALETTE: [&str; 7] = [
    "#fcf403", "#62fc03", "#03e7fc", "#03fca5", "#a503fc", "#fc03ad", "#1E90FF",
];

const CANVAS_STYLE: &str =
    "position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 1000;";

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub rotation: f64,
    pub spin: f64,
    pub size: f64,
    pub color: &'static str,
    pub ttl: u32,
}

impl Particle {
    /// Launches a particle from `(origin_x, floor)` leaning towards `direction`
    /// (`1.0` to the right, `-1.0` to the left).
    fn launch<R: Rng>(rng: &mut R, origin_x: f64, floor: f64, direction: f64) -> Self {
        let angle = rng.gen_range(50.0f64..80.0).to_radians();
        let speed = rng.gen_range(12.0..24.0);
        Particle {
            x: origin_x,
            y: floor,
            vx: direction * speed * angle.cos(),
            vy: -speed * angle.sin(),
            rotation: rng.gen_range(0.0..TAU),
            spin: rng.gen_range(-0.2..0.2),
            size: rng.gen_range(6.0..12.0),
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            ttl: PARTICLE_TTL,
        }
    }

    fn advance(&mut self, dt: f64) {
        let drag = DRAG.powf(dt);
        self.vx *= drag;
        self.vy = self.vy * drag + GRAVITY * dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.rotation += self.spin * dt;
        self.ttl = self.ttl.saturating_sub(1);
    }
}

/// Particles in flight, independent of any drawing surface.
#[derive(Clone, Debug, Default)]
pub struct Burst {
    particles: Vec<Particle>,
    height: f64,
}

impl Burst {
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64, count: usize) -> Self {
        let mut burst = Burst::default();
        burst.extend(rng, width, height, count);
        burst
    }

    /// Adds `count` particles, half from each bottom corner.
    pub fn extend<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64, count: usize) {
        self.height = height;
        self.particles.reserve(count);
        for i in 0..count {
            let particle = if i % 2 == 0 {
                Particle::launch(rng, 0.0, height, 1.0)
            } else {
                Particle::launch(rng, width, height, -1.0)
            };
            self.particles.push(particle);
        }
    }

    pub fn step(&mut self, dt: f64) {
        for particle in &mut self.particles {
            particle.advance(dt);
        }
        let floor = self.height + 20.0;
        self.particles
            .retain(|p| p.ttl > 0 && !(p.vy > 0.0 && p.y > floor));
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("no window available")]
    NoWindow,
    #[error("document has no body")]
    NoBody,
    #[error("could not set up confetti canvas: {0}")]
    Canvas(String),
}

impl EffectError {
    fn dom(err: JsValue) -> Self {
        EffectError::Canvas(format!("{:?}", err))
    }
}

/// Remembers whether a recurring failure has been reported yet.
#[derive(Debug, Default)]
struct WarnOnce(bool);

impl WarnOnce {
    /// True the first time it is called, false afterwards.
    fn first(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }
}

/// The overlay canvas plus whatever is currently flying across it.
struct Stage {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    burst: Burst,
    rng: SmallRng,
    ticker: Option<Interval>,
    draw_warning: WarnOnce,
}

impl Stage {
    fn mount() -> Result<Self, EffectError> {
        let document = window()
            .ok_or(EffectError::NoWindow)?
            .document()
            .ok_or(EffectError::NoBody)?;
        let body = document.body().ok_or(EffectError::NoBody)?;

        let canvas = document
            .create_element("canvas")
            .map_err(EffectError::dom)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EffectError::Canvas("element is not a canvas".to_string()))?;
        canvas.set_attribute("style", CANVAS_STYLE).map_err(EffectError::dom)?;

        // Attach only once the canvas is usable, so a failed setup leaves
        // nothing behind in the page.
        let context = canvas
            .get_context("2d")
            .map_err(EffectError::dom)?
            .ok_or_else(|| EffectError::Canvas("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EffectError::Canvas("unexpected context type".to_string()))?;
        body.append_child(&canvas).map_err(EffectError::dom)?;

        let seed = Utc::now().timestamp_millis() as u64;
        Ok(Stage {
            canvas,
            context,
            burst: Burst::default(),
            rng: SmallRng::seed_from_u64(seed),
            ticker: None,
            draw_warning: WarnOnce::default(),
        })
    }

    /// Matches the canvas to the viewport and returns its size.
    fn fit_to_window(&self) -> (f64, f64) {
        let viewport = window().and_then(|w| {
            let width = w.inner_width().ok()?.as_f64()?;
            let height = w.inner_height().ok()?.as_f64()?;
            Some((width, height))
        });
        if let Some((width, height)) = viewport {
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
        }
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&self) {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn draw(&self) -> Result<(), JsValue> {
        self.clear();
        for p in self.burst.particles() {
            self.context.save();
            let placed = self
                .context
                .translate(p.x, p.y)
                .and_then(|_| self.context.rotate(p.rotation));
            if placed.is_ok() {
                self.context.set_fill_style(&JsValue::from_str(p.color));
                self.context
                    .fill_rect(-p.size / 2.0, -p.size / 4.0, p.size, p.size / 2.0);
            }
            self.context.restore();
            placed?;
        }
        Ok(())
    }
}

/// Handle to the page's confetti overlay.
///
/// Clones share one overlay, which is only created on the first [`fire`].
///
/// [`fire`]: ConfettiHandle::fire
#[derive(Clone, Default)]
pub struct ConfettiHandle {
    stage: Rc<RefCell<Option<Stage>>>,
}

impl PartialEq for ConfettiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stage, &other.stage)
    }
}

impl ConfettiHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Throws a burst of confetti. Never fails; problems are only logged.
    pub fn fire(&self) {
        if let Err(e) = self.try_fire() {
            warn!("Confetti unavailable: {}", e);
        }
    }

    fn try_fire(&self) -> Result<(), EffectError> {
        let mut slot = self.stage.borrow_mut();
        if slot.is_none() {
            debug!("Mounting confetti canvas");
            *slot = Some(Stage::mount()?);
        }
        let Some(stage) = slot.as_mut() else {
            return Ok(());
        };

        let (width, height) = stage.fit_to_window();
        if stage.burst.is_finished() {
            stage.burst = Burst::spawn(&mut stage.rng, width, height, PARTICLES_PER_BURST);
        } else {
            stage.burst.extend(&mut stage.rng, width, height, PARTICLES_PER_BURST);
        }

        if stage.ticker.is_none() {
            let shared = Rc::clone(&self.stage);
            stage.ticker = Some(Interval::new(FRAME_MS, move || tick(&shared)));
        }
        Ok(())
    }
}

fn tick(shared: &Rc<RefCell<Option<Stage>>>) {
    let mut slot = shared.borrow_mut();
    let Some(stage) = slot.as_mut() else {
        return;
    };

    stage.burst.step(1.0);
    if let Err(e) = stage.draw() {
        if stage.draw_warning.first() {
            warn!("Could not draw confetti: {:?}", e);
        }
    }

    if stage.burst.is_finished() {
        stage.clear();
        // The interval can't be dropped from inside its own callback.
        if let Some(ticker) = stage.ticker.take() {
            Timeout::new(0, move || drop(ticker)).forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn spawns_from_both_bottom_corners() {
        let burst = Burst::spawn(&mut rng(), 800.0, 600.0, 10);
        assert_eq!(burst.particles().len(), 10);
        for (i, p) in burst.particles().iter().enumerate() {
            assert_eq!(p.y, 600.0);
            assert!(p.vy < 0.0);
            if i % 2 == 0 {
                assert_eq!(p.x, 0.0);
                assert!(p.vx > 0.0);
            } else {
                assert_eq!(p.x, 800.0);
                assert!(p.vx < 0.0);
            }
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn gravity_pulls_particles_back_down() {
        let mut burst = Burst::spawn(&mut rng(), 800.0, 600.0, 4);
        let start: Vec<f64> = burst.particles().iter().map(|p| p.vy).collect();
        burst.step(1.0);
        for (p, vy) in burst.particles().iter().zip(start) {
            assert!(p.vy > vy);
            assert!(p.y < 600.0);
        }
    }

    #[test]
    fn burst_finishes_within_ttl() {
        let mut burst = Burst::spawn(&mut rng(), 1024.0, 768.0, PARTICLES_PER_BURST);
        for _ in 0..PARTICLE_TTL {
            burst.step(1.0);
        }
        assert!(burst.is_finished());
    }

    #[test]
    fn extending_adds_to_running_burst() {
        let mut rng = rng();
        let mut burst = Burst::spawn(&mut rng, 800.0, 600.0, 6);
        burst.step(1.0);
        burst.extend(&mut rng, 800.0, 600.0, 6);
        assert_eq!(burst.particles().len(), 12);
        assert_eq!(burst.particles()[6].ttl, PARTICLE_TTL);
        assert_eq!(burst.particles()[0].ttl, PARTICLE_TTL - 1);
    }

    #[test]
    fn empty_burst_is_finished() {
        let mut burst = Burst::default();
        assert!(burst.is_finished());
        burst.step(1.0);
        assert!(burst.is_finished());
    }

    #[test]
    fn draw_failures_are_reported_once() {
        let mut warning = WarnOnce::default();
        assert!(warning.first());
        assert!(!warning.first());
        assert!(!warning.first());
    }

    #[test]
    fn clones_share_one_handle() {
        let handle = ConfettiHandle::new();
        assert!(handle == handle.clone());
        assert!(handle != ConfettiHandle::new());
    }
}
