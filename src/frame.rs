//! Per-frame driver
//!
//! A frame runs a fixed list of stages in order. Each stage sees the writes
//! of the stages before it, so the order below is part of the game's
//! behavior: input mapping, queued fire events, simulation, terrain, then the
//! purely cosmetic stages.

use serde::Serialize;

use crate::scenery::{Reticle, Starfield, Terrain};
use crate::sim::{self, GameEvent, GameState, Pointer, TickReport};
use crate::tuning::Tuning;

/// Input sampled by the host for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub pointer: Pointer,
    /// Fire clicks received since the previous frame
    pub fire: u32,
}

/// Summary of one frame
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    /// Lasers spawned from the fire queue this frame
    pub fired: u32,
    pub tick: TickReport,
    /// Game events raised since the previous frame, oldest first
    pub events: Vec<GameEvent>,
}

/// A frame stage: reads the frame input, mutates the world
pub type Stage = fn(&mut World, &FrameInput, &mut FrameReport);

/// Stages in execution order
const STAGES: &[(&str, Stage)] = &[
    ("map_input", map_input),
    ("drain_fire", drain_fire),
    ("simulate", simulate),
    ("scroll_terrain", scroll_terrain),
    ("spin_starfield", spin_starfield),
    ("follow_reticle", follow_reticle),
];

/// Everything that changes from frame to frame
#[derive(Debug, Clone)]
pub struct World {
    pub tuning: Tuning,
    pub game: GameState,
    pub terrain: Terrain,
    pub starfield: Starfield,
    pub reticle: Reticle,
    /// Fire events waiting for the next frame
    pending_fire: u32,
    frame: u64,
}

impl World {
    pub fn new(tuning: Tuning) -> Self {
        let game = GameState::new(&tuning);
        Self {
            tuning,
            game,
            terrain: Terrain::new(),
            starfield: Starfield::default(),
            reticle: Reticle::default(),
            pending_fire: 0,
            frame: 0,
        }
    }

    /// Names of the frame stages, in the order they run
    pub fn stage_names() -> impl Iterator<Item = &'static str> {
        STAGES.iter().map(|(name, _)| *name)
    }

    /// Queue a fire event to be handled at the start of the next frame
    pub fn queue_fire(&mut self) {
        self.pending_fire += 1;
    }

    /// Fire immediately with the current ship pose, outside the frame loop
    pub fn fire_now(&mut self) -> u32 {
        sim::fire(&mut self.game, &self.tuning)
    }

    pub fn pending_fire(&self) -> u32 {
        self.pending_fire
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn score(&self) -> u64 {
        self.game.score
    }

    /// Take the game events raised since the last frame, e.g. by `fire_now`.
    /// `frame` drains the rest into its report.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.game.drain_events()
    }

    /// Run every stage once
    pub fn frame(&mut self, input: &FrameInput) -> FrameReport {
        self.frame += 1;
        let mut report = FrameReport {
            frame: self.frame,
            ..Default::default()
        };
        for (_, stage) in STAGES {
            stage(self, input, &mut report);
        }
        report.events = self.game.drain_events();
        report
    }

    /// Start a new run, keeping the tuning
    pub fn reset(&mut self) {
        *self = Self::new(self.tuning.clone());
    }
}

fn map_input(world: &mut World, input: &FrameInput, _report: &mut FrameReport) {
    sim::apply_pointer(&mut world.game, input.pointer);
}

fn drain_fire(world: &mut World, input: &FrameInput, report: &mut FrameReport) {
    let shots = std::mem::take(&mut world.pending_fire) + input.fire;
    for _ in 0..shots {
        sim::fire(&mut world.game, &world.tuning);
    }
    report.fired = shots;
}

fn simulate(world: &mut World, _input: &FrameInput, report: &mut FrameReport) {
    report.tick = sim::tick(&mut world.game, &world.tuning);
}

fn scroll_terrain(world: &mut World, _input: &FrameInput, _report: &mut FrameReport) {
    world.terrain.scroll(&world.tuning);
}

fn spin_starfield(world: &mut World, _input: &FrameInput, _report: &mut FrameReport) {
    world.starfield.spin();
}

fn follow_reticle(world: &mut World, input: &FrameInput, _report: &mut FrameReport) {
    world.reticle.follow(input.pointer);
}
