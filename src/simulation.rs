//! The frame-driven simulation loop.
//!
//! [`SimulationLoop`] owns the [`BodyRegistry`] and is the single entry point
//! for both kinds of host callbacks:
//! - [`SimulationLoop::on_frame`] advances every body by the time since the
//!   previous frame, then hands the registry to the [`RenderTarget`];
//! - [`SimulationLoop::on_pointer_down`] picks the body under the pointer and
//!   activates it.
//!
//! Both are expected on one thread, never re-entered. The host decides when
//! frames happen; the loop only reports through [`FrameStatus`] whether it
//! wants another one. A [`StopHandle`] ends the loop from outside.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use bevy::prelude::*;

use crate::body::OrbitingBody;
use crate::picking::{pick, BoundingSphere, Unproject, Viewport};
use crate::types::{BodyId, MAX_TIME_SCALE, MIN_TIME_SCALE};

/// Monotonic time source, in simulation time units (seconds).
pub trait Clock: Send + Sync {
    fn now(&self) -> f64;
}

/// Wall clock measured from construction.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock driven by hand, for replays and tests.
///
/// Clones share the same time value.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(start.to_bits())),
        }
    }

    pub fn set(&self, now: f64) {
        self.bits.store(now.to_bits(), Ordering::SeqCst);
    }

    pub fn advance(&self, dt: f64) {
        self.set(self.now() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::SeqCst))
    }
}

/// Receives the registry once per frame after every body has been updated.
pub trait RenderTarget {
    fn render(&mut self, registry: &BodyRegistry);
}

impl<F> RenderTarget for F
where
    F: FnMut(&BodyRegistry),
{
    fn render(&mut self, registry: &BodyRegistry) {
        self(registry)
    }
}

/// Host frame source used by [`SimulationLoop::run`].
pub trait FrameScheduler {
    /// Wait for the next frame. `false` means the host will deliver no more.
    fn next_frame(&mut self) -> bool;
}

/// Shared flag that tells a loop to stop requesting frames.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Lifecycle of a [`SimulationLoop`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    /// No frame processed yet.
    #[default]
    Idle,
    /// Processing frames and asking for more.
    Running,
    /// Stopped; frames and pointer events are ignored.
    Stopped,
}

/// What the loop wants after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Schedule another frame.
    Continue,
    /// Do not schedule any further frames.
    Stopped,
}

/// A pointer-down event in window coordinates, with the viewport it landed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDown {
    pub position: Vec2,
    pub viewport: Viewport,
}

/// Pause and speed-up applied to the raw frame time.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeControl {
    /// Simulation time units per unit of clock time.
    pub scale: f64,
    /// While paused bodies are still updated, with zero elapsed.
    pub paused: bool,
}

impl Default for TimeControl {
    fn default() -> Self {
        Self {
            scale: 1.0,
            paused: false,
        }
    }
}

impl TimeControl {
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Elapsed simulation time for `raw` clock time.
    pub fn effective(&self, raw: f64) -> f64 {
        if self.paused { 0.0 } else { raw * self.scale }
    }
}

/// Fixed, ordered set of bodies. Insertion order is iteration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyRegistry {
    bodies: Vec<OrbitingBody>,
}

impl BodyRegistry {
    pub fn new(bodies: Vec<OrbitingBody>) -> Self {
        Self { bodies }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&OrbitingBody> {
        self.bodies.get(id.index())
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &OrbitingBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (BodyId(index), body))
    }

    /// Picking spheres at the bodies' current positions, in registry order.
    pub fn candidates(&self) -> impl Iterator<Item = (BodyId, BoundingSphere)> {
        self.iter().map(|(id, body)| {
            (
                id,
                BoundingSphere::new(body.translation(), body.radius() as f32),
            )
        })
    }

    fn get_mut(&mut self, id: BodyId) -> Option<&mut OrbitingBody> {
        self.bodies.get_mut(id.index())
    }
}

impl FromIterator<OrbitingBody> for BodyRegistry {
    fn from_iter<T: IntoIterator<Item = OrbitingBody>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Owns the bodies and steps them once per frame.
#[derive(Resource)]
pub struct SimulationLoop {
    registry: BodyRegistry,
    clock: Box<dyn Clock>,
    last_frame_time: Option<f64>,
    state: LoopState,
    stop: StopHandle,
    time: TimeControl,
    frame_count: u64,
    simulated_time: f64,
    last_activated: Option<BodyId>,
}

impl SimulationLoop {
    /// Loop driven by the wall clock.
    pub fn new(registry: BodyRegistry) -> Self {
        Self::with_clock(registry, SystemClock::default())
    }

    pub fn with_clock(registry: BodyRegistry, clock: impl Clock + 'static) -> Self {
        Self {
            registry,
            clock: Box::new(clock),
            last_frame_time: None,
            state: LoopState::Idle,
            stop: StopHandle::default(),
            time: TimeControl::default(),
            frame_count: 0,
            simulated_time: 0.0,
            last_activated: None,
        }
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Handle that stops this loop when signalled, from anywhere.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn time_control(&self) -> &TimeControl {
        &self.time
    }

    pub fn time_control_mut(&mut self) -> &mut TimeControl {
        &mut self.time
    }

    /// Number of frames processed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total simulation time applied to bodies so far.
    pub fn simulated_time(&self) -> f64 {
        self.simulated_time
    }

    /// Body most recently activated by a pointer pick.
    pub fn last_activated(&self) -> Option<BodyId> {
        self.last_activated
    }

    /// Process one frame at the injected clock's current time.
    pub fn on_frame(&mut self, render: &mut impl RenderTarget) -> FrameStatus {
        let now = self.clock.now();
        self.on_frame_at(now, render)
    }

    /// Process one frame at time `now`.
    ///
    /// The first frame applies zero elapsed time. Bodies whose update fails are
    /// skipped for this frame only; the frame still renders.
    pub fn on_frame_at(&mut self, now: f64, render: &mut impl RenderTarget) -> FrameStatus {
        if self.is_stopped() {
            self.enter_stopped();
            return FrameStatus::Stopped;
        }

        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            info!("Simulation running with {} bodies", self.registry.len());
        }

        let raw = self.last_frame_time.map_or(0.0, |last| now - last);
        // A non-finite timestamp must not poison every later delta
        if now.is_finite() {
            self.last_frame_time = Some(now);
        }
        let elapsed = self.time.effective(raw);

        for (index, body) in self.registry.bodies.iter_mut().enumerate() {
            if let Err(err) = body.update(elapsed) {
                warn!("Skipping {} this frame: {}", BodyId(index), err);
            }
        }
        if elapsed.is_finite() && elapsed > 0.0 {
            self.simulated_time += elapsed;
        }

        render.render(&self.registry);
        self.frame_count += 1;

        if self.stop.is_stopped() {
            self.enter_stopped();
            FrameStatus::Stopped
        } else {
            FrameStatus::Continue
        }
    }

    /// Activate the body under the pointer, if any.
    pub fn on_pointer_down(
        &mut self,
        event: PointerDown,
        camera: &impl Unproject,
    ) -> Option<BodyId> {
        if self.is_stopped() {
            return None;
        }

        let ndc = event.viewport.pointer_to_ndc(event.position)?;
        let hit = pick(ndc, camera, self.registry.candidates())?;
        let body = self.registry.get_mut(hit.key)?;
        body.activate();

        info!(
            "Activated {} at distance {:.1} (spin {:.3} rad)",
            hit.key,
            hit.distance,
            body.spin()
        );
        self.last_activated = Some(hit.key);
        Some(hit.key)
    }

    /// Drive frames from `scheduler` until it runs dry or the loop is stopped.
    ///
    /// Returns the number of frames processed.
    pub fn run(
        &mut self,
        scheduler: &mut impl FrameScheduler,
        render: &mut impl RenderTarget,
    ) -> u64 {
        let start = self.frame_count;
        while !self.is_stopped() && scheduler.next_frame() {
            if self.on_frame(render) == FrameStatus::Stopped {
                break;
            }
        }
        self.frame_count - start
    }

    fn is_stopped(&self) -> bool {
        self.state == LoopState::Stopped || self.stop.is_stopped()
    }

    fn enter_stopped(&mut self) {
        if self.state != LoopState::Stopped {
            self.state = LoopState::Stopped;
            info!("Simulation stopped after {} frames", self.frame_count);
        }
    }
}
