//! skirmish — smallest example for the rust_ft fireteam AI framework.
//!
//! Two fireteams of four soldiers wander their own side of a field until a
//! scripted gunshot rings out near the red team.  Whoever hears it breaks
//! for cover; once the alert fades, survivors drift back to wandering.  One
//! red soldier "dies" mid-run to show end-of-life cleanup (reservation
//! release + perception refresh).
//!
//! Set `RUST_LOG=debug` to watch every agent's decisions.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ft_actions::Wander;
use ft_behavior::Actionable;
use ft_core::{SimConfig, TeamId, Vec3};
use ft_output::{CsvWriter, SimOutputObserver};
use ft_perception::{CoverBoard, load_cover_nodes_reader};
use ft_plan::Goal;
use ft_sim::{Sim, SoldierSpec};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const TOTAL_TICKS: u64 = 240;
const SQUAD_SIZE: usize = 4;
const WANDER_DISTANCE: f32 = 12.0;
const GUNSHOT_TICK: u64 = 80;
const CASUALTY_TICK: u64 = 160;

const RED: TeamId = TeamId(1);
const BLUE: TeamId = TeamId(2);

/// Red cluster around x = -60, blue around x = +60.
const RED_ANCHOR: Vec3 = Vec3 { x: -60.0, y: 0.0, z: 0.0 };
const BLUE_ANCHOR: Vec3 = Vec3 { x: 60.0, y: 0.0, z: 0.0 };

// ── Cover inventory ───────────────────────────────────────────────────────────

// A handful of authored markers scattered over the red half of the field,
// exported the same way a scene scan would produce them.
const COVER_CSV: &str = "\
x,y,z,crouch\n\
-72.0,0.0,6.0,0\n\
-68.0,0.0,-9.0,1\n\
-55.0,0.0,14.0,0\n\
-48.0,0.0,-5.0,1\n\
-40.0,0.0,3.0,0\n\
";

// ── Setup helpers ─────────────────────────────────────────────────────────────

fn squad_spec(team: TeamId, enemy: TeamId, anchor: Vec3, slot: usize) -> SoldierSpec {
    // Fan the squad out in a line so nobody spawns on top of a teammate.
    let offset = Vec3::new(0.0, 0.0, (slot as f32 - 1.5) * 6.0);
    SoldierSpec {
        team,
        position: anchor + offset,
        ally_teams: vec![team],
        enemy_teams: vec![enemy],
        priority: 1.0,
        speed: 1.5,
    }
}

fn patrol_actions() -> Vec<Box<dyn Actionable>> {
    vec![Box::new(Wander::new(WANDER_DISTANCE))]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== skirmish — rust_ft fireteam AI ===");
    println!("Squads: 2 × {SQUAD_SIZE}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Cover inventory from the embedded marker export.
    let nodes = load_cover_nodes_reader(Cursor::new(COVER_CSV.as_bytes()))?;
    println!("Cover inventory: {} static nodes", nodes.len());
    let cover = CoverBoard::new(nodes, 3.0);

    // 2. Sim config.
    let config = SimConfig {
        total_ticks: TOTAL_TICKS,
        seed: SEED,
        refresh_interval_ticks: 10,
        snapshot_interval_ticks: 5,
        engagement_radius: 25.0,
        sound_alert_ticks: 12,
    };
    let mut sim = Sim::new(config, cover);

    // 3. Spawn both squads on patrol.
    let patrol = Goal::new("patrol the perimeter");
    for slot in 0..SQUAD_SIZE {
        sim.spawn(
            squad_spec(RED, BLUE, RED_ANCHOR, slot),
            Some(patrol.clone()),
            patrol_actions(),
        )?;
    }
    let mut blue_ids = Vec::new();
    for slot in 0..SQUAD_SIZE {
        blue_ids.push(sim.spawn(
            squad_spec(BLUE, RED, BLUE_ANCHOR, slot),
            Some(patrol.clone()),
            patrol_actions(),
        )?);
    }
    println!("Spawned {} soldiers", sim.agents.len());

    // A second "patrol" request against the same goal is recognized as
    // already served — no redundant re-planning.
    let replanned = sim.assign_plan(blue_ids[0], Some(patrol.clone()), patrol_actions())?;
    assert!(!replanned);

    // 4. Output.
    std::fs::create_dir_all("output/skirmish")?;
    let writer = CsvWriter::new(Path::new("output/skirmish"))?;
    let mut observer = SimOutputObserver::new(writer);

    // 5. Run in three scripted phases.
    let t0 = Instant::now();

    sim.run_ticks(GUNSHOT_TICK, &mut observer)?;

    println!("tick {GUNSHOT_TICK}: gunshot near the red squad");
    sim.broadcast_sound(RED_ANCHOR + Vec3::new(5.0, 0.0, 0.0), 45.0);

    sim.run_ticks(CASUALTY_TICK - GUNSHOT_TICK, &mut observer)?;

    let casualty = sim.agents[0].id;
    println!("tick {CASUALTY_TICK}: red soldier {casualty} is down");
    sim.remove(casualty)?;

    // Remainder of the run, through on_sim_end (flushes the writer).
    sim.run(&mut observer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = observer.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  {} soldiers alive, {} cover spots still claimed",
        sim.agents.len(),
        sim.registry.reserved_spot_count()
    );
    println!();
    println!("{:<14} {:<6} {:<22} {:<8} {:<8}", "Agent", "Team", "Position", "Combat", "Plan");
    println!("{}", "-".repeat(62));
    for agent in &sim.agents {
        println!(
            "{:<14} {:<6} {:<22} {:<8} {:<8}",
            agent.id.to_string(),
            agent.team.0,
            agent.position.get().to_string(),
            if agent.soldier.borrow().in_combat() { "yes" } else { "no" },
            agent.plan.current_action_name().unwrap_or("done"),
        );
    }

    Ok(())
}
