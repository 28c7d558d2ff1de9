use std::time::Duration;

use tracing::{debug, info};

use crate::easing::Easing;
use crate::error::{Error, Result};
use crate::library::ShapeLibrary;
use crate::point_set::PointSet;
use crate::schedule::OneShot;
use crate::settings::Settings;
use crate::shape::ShapeKind;

/// Raw progress within this distance of 1.0 counts as finished.
const COMPLETION_EPSILON: f32 = 1e-6;

/// In-flight transition toward `target_shape`. The target positions live in
/// the controller's scratch buffer and are never written while morphing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphSession {
    pub target_shape: ShapeKind,
    pub progress: f32,
    steps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MorphState {
    Idle,
    Morphing(MorphSession),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MorphEvent {
    Started(ShapeKind),
    Completed { shape: ShapeKind, progress: f32 },
}

/// Cycles the displayed point set through the shape cycle.
///
/// Idle until the dwell timer fires, then steps the current buffer toward the
/// next shape once per tick. Only the current and target buffers are ever
/// written; both are allocated up front and swapped when a morph ends.
pub struct MorphController {
    library: ShapeLibrary,
    cycle: Vec<ShapeKind>,
    index: usize,
    current: PointSet,
    current_shape: ShapeKind,
    target: PointSet,
    state: MorphState,
    dwell: OneShot,
    step_size: f32,
    easing: Easing,
    shape_time: Duration,
}

impl MorphController {
    /// Shows the first cycle entry and arms the initial dwell timer at `now`.
    pub fn new(
        library: ShapeLibrary,
        cycle: &[ShapeKind],
        settings: &Settings,
        now: Duration,
    ) -> Result<Self> {
        let first = *cycle.first().ok_or(Error::EmptyShapeCycle)?;
        let current = library.get(first).clone();
        let target = current.clone();

        let mut dwell = OneShot::default();
        dwell.arm(now, settings.initial_shape_time());

        Ok(Self {
            library,
            cycle: cycle.to_vec(),
            index: 0,
            current,
            current_shape: first,
            target,
            state: MorphState::Idle,
            dwell,
            step_size: settings.morph_step_size,
            easing: settings.easing,
            shape_time: settings.shape_time(),
        })
    }

    pub fn current(&self) -> &PointSet {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut PointSet {
        &mut self.current
    }

    pub fn current_shape(&self) -> ShapeKind {
        self.current_shape
    }

    /// The buffer being morphed toward, while a morph is running.
    pub fn target(&self) -> Option<&PointSet> {
        self.is_morphing().then_some(&self.target)
    }

    pub fn state(&self) -> MorphState {
        self.state
    }

    pub fn is_morphing(&self) -> bool {
        matches!(self.state, MorphState::Morphing(_))
    }

    /// Raw (un-eased) progress of the running morph.
    pub fn progress(&self) -> Option<f32> {
        match self.state {
            MorphState::Morphing(session) => Some(session.progress),
            MorphState::Idle => None,
        }
    }

    pub fn cycle_index(&self) -> usize {
        self.index
    }

    pub fn dwell_deadline(&self) -> Option<Duration> {
        self.dwell.deadline()
    }

    /// One frame: fire the dwell timer if due, then advance any running morph.
    ///
    /// A morph triggered on this tick takes its first step on this tick too.
    pub fn tick(&mut self, now: Duration) -> Result<Option<MorphEvent>> {
        let mut event = None;

        if !self.is_morphing() && self.dwell.poll(now) {
            event = self.trigger()?;
        }

        if self.is_morphing() {
            if let Some(done) = self.step(now)? {
                event = Some(done);
            }
        }

        Ok(event)
    }

    /// Starts morphing to the next cycle entry. A no-op while already morphing.
    pub fn trigger(&mut self) -> Result<Option<MorphEvent>> {
        if self.is_morphing() {
            debug!("morph already running, ignoring trigger");
            return Ok(None);
        }

        let next_index = (self.index + 1) % self.cycle.len();
        let next_shape = self.cycle[next_index];

        self.target.copy_from(self.library.get(next_shape))?;
        self.index = next_index;
        self.state = MorphState::Morphing(MorphSession {
            target_shape: next_shape,
            progress: 0.0,
            steps: 0,
        });

        info!(
            from = self.current_shape.name(),
            to = next_shape.name(),
            "morph started"
        );

        Ok(Some(MorphEvent::Started(next_shape)))
    }

    fn step(&mut self, now: Duration) -> Result<Option<MorphEvent>> {
        let MorphState::Morphing(mut session) = self.state else {
            return Ok(None);
        };

        session.steps += 1;
        session.progress = session.steps as f32 * self.step_size;

        if session.progress >= 1.0 - COMPLETION_EPSILON {
            return Ok(Some(self.finish(session, now)));
        }

        let eased = self.easing.apply(session.progress);
        self.current.lerp_toward(&self.target, eased)?;
        self.state = MorphState::Morphing(session);

        Ok(None)
    }

    fn finish(&mut self, session: MorphSession, now: Duration) -> MorphEvent {
        // The old current buffer becomes scratch for the next morph.
        std::mem::swap(&mut self.current, &mut self.target);
        self.current_shape = session.target_shape;
        self.state = MorphState::Idle;
        self.dwell.arm(now, self.shape_time);

        info!(shape = self.current_shape.name(), "morph finished");

        MorphEvent::Completed {
            shape: session.target_shape,
            progress: session.progress.min(1.0),
        }
    }
}
