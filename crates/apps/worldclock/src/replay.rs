use std::path::Path;

use catalog::Location;
use chrono::{DateTime, Utc};
use foundation::math::{LatLng, Vec3};
use globe::{
    GlobeController, GlobeHit, InteractionConfig, Phase, PointerOutcome, PointerSample, PointerUp,
    WallClock,
};
use serde::{Deserialize, Serialize};

/// A recorded interaction session: pointer events in NDC plus frame ticks.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Instant used for tooltip times; the system clock when absent.
    #[serde(default)]
    pub wall_clock: Option<DateTime<Utc>>,
    /// Location the globe faces before the first step.
    #[serde(default)]
    pub face: Option<LatLng>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Step {
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
        #[serde(default)]
        hit: Option<ScriptHit>,
        #[serde(default)]
        screen: Option<[f64; 2]>,
    },
    Tick {
        dt: f64,
        #[serde(default = "one")]
        repeat: u32,
    },
    Resume {
        delay: f64,
    },
}

fn one() -> u32 {
    1
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptHit {
    Local { x: f64, y: f64, z: f64 },
    World { x: f64, y: f64, z: f64 },
    Uv { u: f64, v: f64 },
}

impl From<ScriptHit> for GlobeHit {
    fn from(hit: ScriptHit) -> Self {
        match hit {
            ScriptHit::Local { x, y, z } => GlobeHit::Local(Vec3::new(x, y, z)),
            ScriptHit::World { x, y, z } => GlobeHit::World(Vec3::new(x, y, z)),
            ScriptHit::Uv { u, v } => GlobeHit::Uv { u, v },
        }
    }
}

impl Script {
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid replay script: {e}"))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path).map_err(|e| format!("read {path:?}: {e}"))?;
        Self::from_json_str(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipSummary {
    pub city: String,
    pub zone: String,
    pub local_time: String,
    pub display: [f64; 2],
}

/// Controller state observed after one script step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<PointerOutcome>,
    pub phase: Phase,
    pub time_s: f64,
    pub yaw: f64,
    pub pitch: f64,
    pub resume_at_s: Option<f64>,
    pub tooltip: Option<TooltipSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRecord {
    pub frame: u64,
    pub time_s: f64,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepRecord>,
    pub trace: Vec<TraceRecord>,
}

/// Drive a fresh controller through `script`.
pub fn run(script: &Script, config: InteractionConfig, catalog: &[Location]) -> ReplayReport {
    let wall_clock = script.wall_clock.map_or(WallClock::System, WallClock::Fixed);
    let mut controller = GlobeController::new(config, catalog).with_wall_clock(wall_clock);
    if let Some(target) = script.face {
        controller.face(target);
    }

    let mut steps = Vec::with_capacity(script.steps.len());
    for (index, step) in script.steps.iter().enumerate() {
        let (event, outcome) = apply(&mut controller, step);
        steps.push(observe(&controller, index, event, outcome));
    }
    tracing::debug!(steps = steps.len(), phase = ?controller.phase(), "replay finished");

    let trace = controller
        .trace_mut()
        .drain()
        .into_iter()
        .map(|e| TraceRecord {
            frame: e.frame_index,
            time_s: e.time.seconds(),
            kind: e.kind,
            message: e.message,
        })
        .collect();

    ReplayReport { steps, trace }
}

fn apply(controller: &mut GlobeController<'_>, step: &Step) -> (&'static str, Option<PointerOutcome>) {
    match *step {
        Step::Down { x, y } => ("down", Some(controller.pointer_down(PointerSample::new(x, y)))),
        Step::Move { x, y } => ("move", Some(controller.pointer_move(PointerSample::new(x, y)))),
        Step::Up { x, y, hit, screen } => {
            let up = PointerUp {
                sample: x.zip(y).map(|(x, y)| PointerSample::new(x, y)),
                hit: hit.map(GlobeHit::from),
                screen_px: screen,
            };
            ("up", Some(controller.pointer_up(up)))
        }
        Step::Tick { dt, repeat } => {
            for _ in 0..repeat {
                controller.tick(dt);
            }
            ("tick", None)
        }
        Step::Resume { delay } => {
            if controller.schedule_resume(delay).is_none() {
                tracing::warn!(delay, "resume step ignored outside a pause");
            }
            ("resume", None)
        }
    }
}

fn observe(
    controller: &GlobeController<'_>,
    step: usize,
    event: &'static str,
    outcome: Option<PointerOutcome>,
) -> StepRecord {
    let rotation = controller.displayed_rotation();
    StepRecord {
        step,
        event,
        outcome,
        phase: controller.phase(),
        time_s: controller.now().seconds(),
        yaw: rotation.yaw(),
        pitch: rotation.pitch(),
        resume_at_s: controller.pending_resume_at().map(|t| t.seconds()),
        tooltip: controller.active_tooltip().map(|t| TooltipSummary {
            city: t.location.city.clone(),
            zone: t.location.name.clone(),
            local_time: t.current_local_time().to_string(),
            display: [t.display_x, t.display_y],
        }),
    }
}
