//! The `Sim` struct and its tick loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, info};

use ft_behavior::{ActionContext, Actionable, DirectNavigator};
use ft_core::{AgentRng, SimConfig, TargetId, TeamId, Tick, Vec3};
use ft_perception::{CoverBoard, Registry, SharedPos};
use ft_plan::{Goal, Plan};

use crate::soldier::Soldier;
use crate::{SimError, SimObserver, SimResult};

// ── SoldierSpec ───────────────────────────────────────────────────────────────

/// Everything needed to stand up one soldier.
#[derive(Clone, Debug)]
pub struct SoldierSpec {
    pub team: TeamId,
    pub position: Vec3,
    /// Teams whose members populate this soldier's perceived ally list.
    pub ally_teams: Vec<TeamId>,
    /// Teams whose members populate this soldier's perceived enemy list.
    pub enemy_teams: Vec<TeamId>,
    /// Initial targeting weight; negative spawns the soldier hidden from
    /// targeting queries.
    pub priority: f32,
    /// Movement speed in world units per tick.
    pub speed: f32,
}

// ── SimAgent ──────────────────────────────────────────────────────────────────

/// Driver-owned bundle for one live agent.
///
/// Fields are public for observers and output writers; the tick loop is the
/// only mutator.
pub struct SimAgent {
    pub id: TargetId,
    pub team: TeamId,
    pub soldier: Rc<RefCell<Soldier>>,
    pub position: SharedPos,
    pub nav: DirectNavigator,
    pub rng: AgentRng,
    pub plan: Plan,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation driver.
///
/// Owns the registry and every agent; advances all of them one plan cycle
/// per tick.  Construct with [`Sim::new`], populate with
/// [`spawn`][Self::spawn], then [`run`][Self::run].
pub struct Sim {
    /// Global configuration (total ticks, seed, cadences, combat knobs).
    pub config: SimConfig,

    /// The current tick, advanced once per loop iteration.
    pub tick: Tick,

    /// The shared perception & coordination registry.
    pub registry: Registry,

    /// All live agents, in spawn order.
    pub agents: Vec<SimAgent>,
}

impl Sim {
    /// Create a driver over a fixed cover inventory.
    pub fn new(config: SimConfig, cover: CoverBoard) -> Self {
        Self {
            config,
            tick: Tick::ZERO,
            registry: Registry::new(cover),
            agents: Vec::new(),
        }
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Stand up a soldier with a plan and register it.
    ///
    /// The registry assigns the identity; by the time this returns, every
    /// other agent's perceived lists already include the newcomer.
    pub fn spawn(
        &mut self,
        spec: SoldierSpec,
        goal: Option<Goal>,
        actions: Vec<Box<dyn Actionable>>,
    ) -> SimResult<TargetId> {
        let plan = Plan::new(goal, actions)?;

        let position: SharedPos = Rc::new(Cell::new(spec.position));
        let soldier = Rc::new(RefCell::new(Soldier::new(
            spec.ally_teams,
            spec.enemy_teams,
            spec.priority,
            self.config.sound_alert_ticks,
        )));

        let id = self
            .registry
            .add_target(spec.team, position.clone(), soldier.clone());
        soldier.borrow_mut().set_unique_id(id);

        debug!(agent = %id, team = %spec.team, pos = %spec.position, "spawned soldier");

        self.agents.push(SimAgent {
            id,
            team: spec.team,
            soldier,
            position: position.clone(),
            nav: DirectNavigator::new(position, spec.speed),
            rng: AgentRng::new(self.config.seed, id),
            plan,
        });
        Ok(id)
    }

    /// Remove a soldier at end-of-life.
    ///
    /// Ends the current action first (releasing any held cover spot), then
    /// deregisters — survivors' perceived lists are refreshed before this
    /// returns.
    pub fn remove(&mut self, id: TargetId) -> SimResult<()> {
        let idx = self
            .agents
            .iter()
            .position(|a| a.id == id)
            .ok_or(SimError::UnknownTarget(id))?;

        {
            let SimAgent { position, nav, rng, plan, .. } = &mut self.agents[idx];
            let mut ctx = ActionContext {
                tick: self.tick,
                agent: id,
                position: position.clone(),
                threat: None,
                registry: &mut self.registry,
                nav,
                rng,
            };
            plan.end_action(&mut ctx);
        }

        self.registry.remove_target(id);
        self.agents.remove(idx);
        debug!(agent = %id, "removed soldier");
        Ok(())
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Give an agent a new objective, unless its current plan already serves
    /// the requested goal.
    ///
    /// Returns `Ok(false)` (and drops `actions` unused) when the live plan
    /// satisfies `goal` — the re-planning short-circuit.  Otherwise the
    /// current action is ended, the new plan installed, and `Ok(true)`
    /// returned.
    pub fn assign_plan(
        &mut self,
        id: TargetId,
        goal: Option<Goal>,
        actions: Vec<Box<dyn Actionable>>,
    ) -> SimResult<bool> {
        let idx = self
            .agents
            .iter()
            .position(|a| a.id == id)
            .ok_or(SimError::UnknownTarget(id))?;

        if self.agents[idx].plan.satisfies(goal.as_ref()) && !self.agents[idx].plan.is_done() {
            debug!(agent = %id, "current plan already serves the goal");
            return Ok(false);
        }

        let new_plan = Plan::new(goal, actions)?;
        let SimAgent { position, nav, rng, plan, .. } = &mut self.agents[idx];
        let mut ctx = ActionContext {
            tick: self.tick,
            agent: id,
            position: position.clone(),
            threat: None,
            registry: &mut self.registry,
            nav,
            rng,
        };
        plan.end_action(&mut ctx);
        *plan = new_plan;
        debug!(agent = %id, plan = %self.agents[idx].plan, "installed new plan");
        Ok(true)
    }

    /// Look up a live agent by identity.
    pub fn agent(&self, id: TargetId) -> Option<&SimAgent> {
        self.agents.iter().find(|a| a.id == id)
    }

    // ── World events ──────────────────────────────────────────────────────

    /// A world sound (gunshot, explosion) everyone nearby hears.
    pub fn broadcast_sound(&self, position: Vec3, radius: f32) {
        self.registry.broadcast_sound(position, radius);
    }

    /// A world sound only the given teams hear.
    pub fn broadcast_sound_to_teams(&self, position: Vec3, radius: f32, teams: &[TeamId]) {
        self.registry.broadcast_sound_to_teams(position, radius, teams);
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            ticks = self.config.total_ticks,
            agents = self.agents.len(),
            "simulation start"
        );
        loop {
            let now = self.tick;
            if now >= self.config.end_tick() {
                break;
            }
            observer.on_tick_start(now);
            let active = self.process_tick(now)?;
            observer.on_tick_end(now, active);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.registry, &self.agents);
            }
            self.tick = now + 1;
        }
        observer.on_sim_end(self.tick);
        info!(final_tick = %self.tick, "simulation end");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            let active = self.process_tick(now)?;
            observer.on_tick_end(now, active);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.registry, &self.agents);
            }
            self.tick = now + 1;
        }
        Ok(())
    }

    /// One tick for every agent.  Returns how many agents still had an
    /// unfinished plan to cycle.
    fn process_tick(&mut self, now: Tick) -> SimResult<usize> {
        // ── Phase 1: cadence perception refresh ───────────────────────────
        //
        // Membership changes refresh inside the registry on their own; this
        // cadence exists for priority values that changed in between.
        let refresh = self.config.refresh_interval_ticks;
        if refresh > 0 && now.0.is_multiple_of(refresh) {
            self.registry.refresh_perceived_lists();
        }

        // ── Phase 2: per-agent plan cycle + movement ──────────────────────
        //
        // Strictly sequential: agent i sees the reservations and broadcasts
        // of agents 0..i from this same tick.
        let engagement_radius = self.config.engagement_radius;
        let mut active = 0;

        for agent in self.agents.iter_mut() {
            let SimAgent { id, soldier, position, nav, rng, plan, .. } = agent;

            let (in_combat, threat) = {
                let mut soldier = soldier.borrow_mut();
                soldier.decay_alert();
                soldier.assess(position.get(), engagement_radius)
            };

            if !plan.is_done() {
                active += 1;
                let mut ctx = ActionContext {
                    tick: now,
                    agent: *id,
                    position: position.clone(),
                    threat,
                    registry: &mut self.registry,
                    nav,
                    rng,
                };
                plan.next_cycle(in_combat, &mut ctx)?;
            }

            nav.advance();
        }

        Ok(active)
    }
}
