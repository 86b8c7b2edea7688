//! Auto-rotate / drag / tap state machine for one globe view.
//!
//! Time only moves when the host calls [`GlobeController::tick`]; resume timers
//! are deadlines on that clock and fire inside `tick`. Wall-clock time is read
//! only to render the tooltip's local time.

use catalog::{builtin_catalog, nearest_location, Location};
use chrono::{DateTime, Utc};
use clock::format_local_time;
use foundation::math::{point_to_lat_lng, LatLng, SpherePoint, Vec2};
use foundation::time::Time;
use runtime::{EventBus, Frame, TimerId, TimerQueue};
use serde::Serialize;

use crate::config::InteractionConfig;
use crate::pointer::{GlobeHit, PointerSample, PointerUp};
use crate::rotation::{RotationState, FALLBACK_FACING};
use crate::tooltip::TooltipResult;

/// Source of wall-clock time for tooltips.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WallClock {
    #[default]
    System,
    /// Always report this instant; keeps replays and tests reproducible.
    Fixed(DateTime<Utc>),
}

impl WallClock {
    pub fn now(self) -> DateTime<Utc> {
        match self {
            WallClock::System => Utc::now(),
            WallClock::Fixed(at) => at,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Phase {
    AutoRotating,
    Dragging,
    PausedIdle,
    PausedWithTooltip,
}

/// What a pointer event did, so hosts can react without polling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum PointerOutcome {
    Ignored,
    DragStarted,
    Dragged,
    DragEnded,
    TapMatched,
    TapMissed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ResumeReason {
    TooltipDismissed,
    Idle,
    Manual,
}

#[derive(Debug, Copy, Clone)]
struct DragTrack {
    anchor: Vec2,
    last: Vec2,
    /// Sticky once the pointer strays past the tap threshold.
    moved: bool,
}

#[derive(Debug, Clone)]
enum Mode {
    AutoRotating,
    Dragging(DragTrack),
    Paused(Option<TooltipResult>),
}

/// Interaction state for one globe view.
///
/// Holds at most one pending resume timer; scheduling a new one always
/// cancels the old one first.
#[derive(Debug)]
pub struct GlobeController<'c> {
    config: InteractionConfig,
    catalog: &'c [Location],
    mode: Mode,
    /// Orientation including pointer moves not yet drawn.
    rotation: RotationState,
    /// Orientation as of the last tick.
    displayed: RotationState,
    frame: Frame,
    timers: TimerQueue<ResumeReason>,
    resume: Option<TimerId>,
    trace: EventBus,
    wall_clock: WallClock,
}

impl GlobeController<'static> {
    pub fn with_builtin_catalog(config: InteractionConfig) -> Self {
        GlobeController::new(config, builtin_catalog().entries())
    }
}

impl<'c> GlobeController<'c> {
    pub fn new(config: InteractionConfig, catalog: &'c [Location]) -> Self {
        let rotation = RotationState::facing(FALLBACK_FACING, config.meridian);
        Self {
            config,
            catalog,
            mode: Mode::AutoRotating,
            rotation,
            displayed: rotation,
            frame: Frame::start(),
            timers: TimerQueue::new(),
            resume: None,
            trace: EventBus::new(),
            wall_clock: WallClock::System,
        }
    }

    pub fn with_wall_clock(mut self, wall_clock: WallClock) -> Self {
        self.wall_clock = wall_clock;
        self
    }

    /// Turn the globe so `target` faces the viewer, e.g. the user's location.
    pub fn face(&mut self, target: LatLng) {
        self.rotation = RotationState::facing(target, self.config.meridian);
        self.displayed = self.rotation;
        tracing::debug!(%target, "globe facing location");
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'c [Location] {
        self.catalog
    }

    pub fn phase(&self) -> Phase {
        match &self.mode {
            Mode::AutoRotating => Phase::AutoRotating,
            Mode::Dragging(_) => Phase::Dragging,
            Mode::Paused(None) => Phase::PausedIdle,
            Mode::Paused(Some(_)) => Phase::PausedWithTooltip,
        }
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Orientation the renderer should draw; only changes on ticks.
    pub fn displayed_rotation(&self) -> RotationState {
        self.displayed
    }

    pub fn active_tooltip(&self) -> Option<&TooltipResult> {
        match &self.mode {
            Mode::Paused(tooltip) => tooltip.as_ref(),
            _ => None,
        }
    }

    /// Engine time at which rotation will resume, if a resume is pending.
    pub fn pending_resume_at(&self) -> Option<Time> {
        self.resume.and_then(|id| self.timers.deadline(id))
    }

    /// Engine time as of the last tick.
    pub fn now(&self) -> Time {
        self.frame.time
    }

    pub fn trace(&self) -> &EventBus {
        &self.trace
    }

    pub fn trace_mut(&mut self) -> &mut EventBus {
        &mut self.trace
    }

    pub fn pointer_down(&mut self, sample: PointerSample) -> PointerOutcome {
        if !sample.is_finite() {
            tracing::warn!(?sample, "ignoring non-finite pointer down");
            self.trace.emit(self.frame, "pointer_rejected", "non-finite pointer down");
            return PointerOutcome::Ignored;
        }

        self.cancel_resume();
        let from = self.phase();
        let at = sample.as_vec();
        self.mode = Mode::Dragging(DragTrack {
            anchor: at,
            last: at,
            moved: false,
        });
        tracing::debug!(?from, "pointer down");
        self.trace.emit(self.frame, "pointer_down", format!("from {from:?}"));
        PointerOutcome::DragStarted
    }

    pub fn pointer_move(&mut self, sample: PointerSample) -> PointerOutcome {
        let threshold = self.config.tap_threshold;
        let sensitivity = self.config.drag_sensitivity;
        let Mode::Dragging(track) = &mut self.mode else {
            return PointerOutcome::Ignored;
        };
        if !sample.is_finite() {
            tracing::warn!(?sample, "ignoring non-finite pointer move");
            self.trace.emit(self.frame, "pointer_rejected", "non-finite pointer move");
            return PointerOutcome::Ignored;
        }

        let at = sample.as_vec();
        let delta = at - track.last;
        track.last = at;
        if !track.moved && (at - track.anchor).manhattan() >= threshold {
            track.moved = true;
            tracing::trace!("press became a drag");
        }

        if let Err(err) = self.rotation.apply_drag(delta, sensitivity) {
            tracing::warn!(%err, ?delta, "drag rejected");
            self.trace.emit(self.frame, "rotation_rejected", err.to_string());
        }
        PointerOutcome::Dragged
    }

    pub fn pointer_up(&mut self, up: PointerUp) -> PointerOutcome {
        if let Some(sample) = up.sample {
            self.pointer_move(sample);
        }
        let track = match &self.mode {
            Mode::Dragging(track) => *track,
            _ => return PointerOutcome::Ignored,
        };

        if track.moved {
            self.mode = Mode::Paused(None);
            self.trace.emit(self.frame, "drag_end", "");
            tracing::debug!(yaw = self.rotation.yaw(), pitch = self.rotation.pitch(), "drag ended");
            self.arm_resume(self.config.idle_resume_delay_s, ResumeReason::Idle);
            return PointerOutcome::DragEnded;
        }

        match self.lookup(up.hit, up.screen_px) {
            Some(tooltip) => {
                tracing::debug!(
                    city = %tooltip.location.city,
                    zone = %tooltip.location.name,
                    distance_km = tooltip.distance_km,
                    "tap matched"
                );
                self.trace.emit(self.frame, "tap_match", tooltip.location.city.clone());
                self.mode = Mode::Paused(Some(tooltip));
                self.arm_resume(self.config.tap_dismiss_delay_s, ResumeReason::TooltipDismissed);
                PointerOutcome::TapMatched
            }
            None => {
                tracing::debug!(hit = ?up.hit, "tap matched nothing");
                self.trace.emit(self.frame, "tap_miss", "");
                self.mode = Mode::Paused(None);
                self.arm_resume(self.config.idle_resume_delay_s, ResumeReason::Idle);
                PointerOutcome::TapMissed
            }
        }
    }

    /// Resume auto-rotation `delay_s` seconds from now, replacing any pending
    /// resume. Only meaningful while paused; returns the deadline.
    pub fn schedule_resume(&mut self, delay_s: f64) -> Option<Time> {
        if !matches!(self.mode, Mode::Paused(_)) {
            tracing::debug!(phase = ?self.phase(), "resume requested while not paused");
            return None;
        }
        Some(self.arm_resume(delay_s, ResumeReason::Manual))
    }

    /// Advance engine time by `dt_s` seconds: fire due resumes, then spin.
    pub fn tick(&mut self, dt_s: f64) {
        let previous = self.frame;
        self.frame = previous.advance(dt_s);
        let now = self.frame.time;

        let mut spin_from = previous.time;
        for (id, deadline, reason) in self.timers.poll_expired(now) {
            if self.resume != Some(id) {
                continue;
            }
            self.resume = None;
            if matches!(self.mode, Mode::Paused(_)) {
                self.mode = Mode::AutoRotating;
                spin_from = spin_from.max(deadline);
                tracing::debug!(?reason, at = deadline.seconds(), "auto-rotation resumed");
                self.trace.emit(self.frame, "resumed", format!("{reason:?}"));
            }
        }

        if matches!(self.mode, Mode::AutoRotating) {
            let elapsed = now.since(spin_from).min(self.config.max_tick_s);
            if let Err(err) = self.rotation.advance_yaw(elapsed * self.config.auto_rotate_speed) {
                tracing::warn!(%err, elapsed, "auto-rotation step rejected");
                self.trace.emit(self.frame, "rotation_rejected", err.to_string());
            }
        }
        self.displayed = self.rotation;
    }

    /// Stop all interaction: cancel any pending resume and drop the tooltip.
    pub fn unmount(&mut self) {
        self.cancel_resume();
        self.mode = Mode::Paused(None);
        tracing::debug!("globe controller unmounted");
    }

    /// Latitude/longitude under a pointer hit, undoing the displayed rotation
    /// for world-space hits.
    pub fn resolve_hit(&self, hit: GlobeHit) -> Option<LatLng> {
        let radius = self.config.globe_radius;
        let point = match hit {
            GlobeHit::Local(point) => SpherePoint::Cartesian { point, radius },
            GlobeHit::World(world) => SpherePoint::Cartesian {
                point: self.displayed.to_local(world),
                radius,
            },
            GlobeHit::Uv { u, v } => SpherePoint::Uv { u, v },
        };
        point_to_lat_lng(point, self.config.meridian)
    }

    fn lookup(&self, hit: Option<GlobeHit>, screen_px: Option<[f64; 2]>) -> Option<TooltipResult> {
        let ll = self.resolve_hit(hit?)?;
        let found = nearest_location(ll.lat, ll.lng, self.catalog, self.config.max_distance_km)?;
        let local_time = format_local_time(&found.location.name, self.wall_clock.now());
        let [display_x, display_y] = self.config.tooltip.place(screen_px);
        Some(TooltipResult {
            location: found.location.clone(),
            distance_km: found.distance_km,
            local_time,
            display_x,
            display_y,
        })
    }

    fn arm_resume(&mut self, delay_s: f64, reason: ResumeReason) -> Time {
        self.cancel_resume();
        let delay_s = if delay_s.is_finite() { delay_s.max(0.0) } else { 0.0 };
        let deadline = self.frame.time.after(delay_s);
        self.resume = Some(self.timers.schedule(deadline, reason));
        tracing::trace!(?reason, deadline = deadline.seconds(), "resume scheduled");
        self.trace.emit(self.frame, "resume_scheduled", format!("{reason:?} at {:.3}s", deadline.seconds()));
        deadline
    }

    fn cancel_resume(&mut self) {
        if let Some(id) = self.resume.take() {
            if let Some(reason) = self.timers.cancel(id) {
                self.trace.emit(self.frame, "resume_cancelled", format!("{reason:?}"));
            }
        }
    }
}

impl Drop for GlobeController<'_> {
    fn drop(&mut self) {
        if self.resume.is_some() {
            self.unmount();
        }
    }
}
