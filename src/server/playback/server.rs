use actix::prelude::*;
use actix::MessageResult;
use std::collections::HashMap;
use std::time::Duration;
use log::{debug, warn};
use uuid::Uuid;

use crate::config::playback::{
    COURSE_COMPLETE_DELAY_MS, FIRST_STEP_DELAY_MS, SETTLE_DELAY_MS, STEP_DELAY_MS,
};
use crate::game::level::Level;
use crate::game::playback::{Advance, Phase, Playback};
use crate::game::progress::Progress;
use crate::game::state::WorldState;
use crate::game::systems::outcome::{self, Outcome};
use crate::server::playback::session::PlaybackSocket;
use crate::server::playback::messages::{
    ClientAction, ProcessClientMessage, RegisterViewer, SessionEvent, UnregisterViewer,
};
use crate::translator::translate;

/// Guidance shown when a run is requested with nothing on the workspace.
pub const MSG_NO_BLOCKS: &str = "No blocks placed yet. Try dragging one in!";

/// One learner's playback session.
///
/// The actor owns the world state outright and processes one message at a
/// time, so commands are applied strictly in emission order and never in
/// parallel. All suspension happens through `ctx.run_later`; every handle
/// is kept for cancellation, and every scheduled callback carries the
/// attempt generation it was created under so a stale timer that already
/// fired becomes a no-op instead of corrupting the next attempt.
pub struct PlaybackSession {
    pub session_id: Uuid,
    levels: Vec<Level>,
    level_index: usize,
    code: String,
    world: WorldState,
    playback: Playback,
    progress: Progress,
    viewers: HashMap<Uuid, Addr<PlaybackSocket>>,
    pending_timers: Vec<SpawnHandle>,
    generation: u64,
}

impl PlaybackSession {
    pub fn new(session_id: Uuid) -> Self {
        let levels = Level::catalog();
        let world = WorldState::for_level(&levels[0]);
        PlaybackSession {
            session_id,
            levels,
            level_index: 0,
            code: String::new(),
            world,
            playback: Playback::idle(),
            progress: Progress::new(),
            viewers: HashMap::new(),
            pending_timers: Vec::new(),
            generation: 0,
        }
    }

    fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    /// Cancel every pending timer and rebuild the world at the level's
    /// start pose. Bumping the generation invalidates callbacks that were
    /// already dispatched before cancellation took effect.
    fn reset_attempt(&mut self, ctx: &mut Context<Self>) {
        for handle in self.pending_timers.drain(..) {
            ctx.cancel_future(handle);
        }
        self.generation += 1;
        self.world = WorldState::for_level(self.level());
        self.playback = Playback::idle();
    }

    /// Translate the current program into the playback queue.
    ///
    /// Returns false when the program produced no commands; the no-blocks
    /// guidance is left on the world state and playback must not start.
    fn prepare(&mut self) -> bool {
        let commands = translate(&self.code);
        if commands.is_empty() {
            self.world.message = Some(MSG_NO_BLOCKS.to_string());
            return false;
        }
        self.playback = Playback::load(commands);
        true
    }

    /// Schedule a callback for the current attempt.
    fn schedule<F>(&mut self, ctx: &mut Context<Self>, delay_ms: u64, callback: F)
    where
        F: FnOnce(&mut Self, &mut Context<Self>) + 'static,
    {
        let generation = self.generation;
        let handle = ctx.run_later(Duration::from_millis(delay_ms), move |act, ctx| {
            if act.generation != generation {
                debug!(
                    "[PlaybackSession] Dropping stale timer: session={} generation={}",
                    act.session_id, generation
                );
                return;
            }
            callback(act, ctx);
        });
        self.pending_timers.push(handle);
    }

    /// Start a continuous run. A request while a run is in progress is a
    /// no-op.
    fn run(&mut self, ctx: &mut Context<Self>) {
        if self.world.is_running {
            debug!(
                "[PlaybackSession] Run ignored, already running: session={}",
                self.session_id
            );
            return;
        }

        self.reset_attempt(ctx);
        if !self.prepare() {
            self.broadcast_snapshot();
            return;
        }

        self.playback.phase = Phase::Running;
        self.world.is_running = true;
        self.world.message = None;
        self.broadcast_snapshot();
        self.schedule(ctx, STEP_DELAY_MS, |act, ctx| act.tick(ctx));
    }

    /// One timer tick of a continuous run: apply the next command, then
    /// schedule either the following tick or the settle-and-evaluate.
    fn tick(&mut self, ctx: &mut Context<Self>) {
        match self.advance_once() {
            Advance::Applied => {
                self.broadcast_snapshot();
                if self.playback.remaining() == 0 {
                    self.schedule(ctx, SETTLE_DELAY_MS, |act, ctx| act.finish(ctx));
                } else {
                    self.schedule(ctx, STEP_DELAY_MS, |act, ctx| act.tick(ctx));
                }
            }
            Advance::Exhausted => self.finish(ctx),
        }
    }

    /// Apply a single manual step, starting a fresh attempt when none is
    /// active. A step past the last command triggers the outcome check.
    fn step(&mut self, ctx: &mut Context<Self>) {
        if self.playback.is_idle() {
            self.reset_attempt(ctx);
            if !self.prepare() {
                self.broadcast_snapshot();
                return;
            }
            self.playback.phase = Phase::Stepping;
            self.world.is_running = true;
            self.world.message = None;
            self.broadcast_snapshot();
            self.schedule(ctx, FIRST_STEP_DELAY_MS, |act, ctx| act.step_once(ctx));
        } else {
            self.step_once(ctx);
        }
    }

    fn step_once(&mut self, ctx: &mut Context<Self>) {
        match self.advance_once() {
            Advance::Applied => self.broadcast_snapshot(),
            Advance::Exhausted => self.finish(ctx),
        }
    }

    fn advance_once(&mut self) -> Advance {
        let level = &self.levels[self.level_index];
        self.playback.advance(&mut self.world, level)
    }

    /// Terminal check once the queue is exhausted.
    fn finish(&mut self, ctx: &mut Context<Self>) {
        let verdict = outcome::evaluate(
            self.world.character_pos,
            self.world.fuel_collected,
            self.level(),
        );
        let level_id = self.level().id;
        let final_id = self.levels.last().map(|l| l.id).unwrap_or(0);

        self.world.is_running = false;
        self.world.message = Some(verdict.message().to_string());

        match verdict {
            Outcome::GoalReached => {
                self.world.is_completed = true;
                if !self.progress.record(level_id) {
                    debug!(
                        "[PlaybackSession] Level {} already recorded: session={}",
                        level_id, self.session_id
                    );
                }
                self.broadcast_snapshot();
                self.broadcast(SessionEvent::LevelCompleted { level_id });
                if level_id == final_id {
                    self.schedule(ctx, COURSE_COMPLETE_DELAY_MS, |act, _ctx| {
                        act.broadcast(SessionEvent::CourseCompleted);
                    });
                }
            }
            Outcome::GoalReachedMissingFuel | Outcome::NotReached => {
                self.broadcast_snapshot();
            }
        }
    }

    fn snapshot(&self) -> SessionEvent {
        SessionEvent::Snapshot {
            level_id: self.level().id,
            step_index: self.playback.cursor(),
            state: self.world.clone(),
            completed_levels: self.progress.completed_ids(),
        }
    }

    fn broadcast_snapshot(&self) {
        debug!(
            "[PlaybackSession] Broadcast snapshot: session={} level={} step={}/{}",
            self.session_id,
            self.level().id,
            self.playback.cursor(),
            self.playback.len()
        );
        self.broadcast(self.snapshot());
    }

    fn broadcast(&self, event: SessionEvent) {
        for addr in self.viewers.values() {
            addr.do_send(event.clone());
        }
    }
}

impl Actor for PlaybackSession {
    type Context = Context<Self>;
}

impl Handler<RegisterViewer> for PlaybackSession {
    type Result = ();

    fn handle(&mut self, msg: RegisterViewer, _: &mut Context<Self>) -> Self::Result {
        msg.addr.do_send(self.snapshot());
        self.viewers.insert(msg.viewer_id, msg.addr);
    }
}

impl Handler<UnregisterViewer> for PlaybackSession {
    type Result = ();

    fn handle(&mut self, msg: UnregisterViewer, _: &mut Context<Self>) -> Self::Result {
        self.viewers.remove(&msg.viewer_id);
    }
}

impl Handler<ProcessClientMessage> for PlaybackSession {
    type Result = ();

    fn handle(&mut self, msg: ProcessClientMessage, ctx: &mut Context<Self>) -> Self::Result {
        debug!(
            "[PlaybackSession] Action from viewer {}: session={}",
            msg.viewer_id, self.session_id
        );
        match msg.action {
            ClientAction::SetProgram { code } => {
                self.code = code;
            }
            ClientAction::Run => self.run(ctx),
            ClientAction::Step => self.step(ctx),
            ClientAction::Reset => {
                self.reset_attempt(ctx);
                self.broadcast_snapshot();
            }
            ClientAction::SelectLevel { index } => {
                if index >= self.levels.len() {
                    warn!(
                        "[PlaybackSession] SelectLevel out of range: session={} index={}",
                        self.session_id, index
                    );
                    return;
                }
                self.level_index = index;
                self.reset_attempt(ctx);
                self.broadcast_snapshot();
            }
        }
    }
}

/// Creates playback sessions and hands out their addresses.
pub struct PlaybackManager {
    sessions: HashMap<Uuid, Addr<PlaybackSession>>,
}

impl PlaybackManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create_session(&mut self) -> Uuid {
        let session_id = Uuid::new_v4();
        let session = PlaybackSession::new(session_id).start();
        self.sessions.insert(session_id, session);
        session_id
    }
}

impl Actor for PlaybackManager {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "Uuid")]
pub struct CreateSession;

impl Handler<CreateSession> for PlaybackManager {
    type Result = MessageResult<CreateSession>;

    fn handle(&mut self, _: CreateSession, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.create_session())
    }
}

#[derive(Message)]
#[rtype(result = "Result<Addr<PlaybackSession>, String>")]
pub struct GetSession {
    pub session_id: Uuid,
}

impl Handler<GetSession> for PlaybackManager {
    type Result = Result<Addr<PlaybackSession>, String>;

    fn handle(&mut self, msg: GetSession, _: &mut Context<Self>) -> Self::Result {
        self.sessions
            .get(&msg.session_id)
            .cloned()
            .ok_or_else(|| "Playback session not found".to_string())
    }
}
