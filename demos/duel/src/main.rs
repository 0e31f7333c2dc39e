//! duel: a scripted two-unit fight for the tri_tactics combat core.
//!
//! A knight and a brute trade blows on the triangular grid.  The script
//! walks through every interaction the arbiter knows: an unopposed hit, a
//! parry, a clash, a dodge with slow motion, and a grouped retreat.  The run
//! is paced in real-time frames so slow motion is visible in the frame count.
//!
//! ```text
//! cargo run -p duel                      # default rules
//! cargo run -p duel -- rules.json        # CombatConfig override
//! RUST_LOG=debug cargo run -p duel       # arbitration trace
//! ```

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use tt_core::{CombatConfig, CombatObserver, Feedback, GridDirection, GridPoint, InteractionKind, Tick, UnitId};
use tt_grid::Shape;
use tt_intent::{ActionLibrary, CombatIntent, MoveStep};
use tt_output::{CombatLogObserver, CsvWriter, LogWriter};
use tt_timeline::{BattleTimeline, BattleTimelineBuilder, ScheduleOptions};
use tt_unit::{CombatUnitBuilder, World};

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAME_SECS: f32   = 1.0 / 60.0;
/// Hard stop for the frame loop (one real minute).
const MAX_FRAMES: u32   = 3_600;
const OUTPUT_DIR: &str  = "output/duel";

// ── Attack patterns ───────────────────────────────────────────────────────────

/// Hexagon around the vertex at `(x, y)`, relative to an east-facing owner.
fn hexagon_at(x: i32, y: i32) -> Vec<tt_core::TrianglePoint> {
    let offset = GridPoint::new(x, y);
    Shape::hexagon().even.into_iter().map(|c| c.translated(offset)).collect()
}

fn union(parts: &[(i32, i32)]) -> Shape {
    let mut cells: Vec<_> = parts.iter().flat_map(|&(x, y)| hexagon_at(x, y)).collect();
    cells.sort();
    cells.dedup();
    Shape::uniform(cells)
}

fn pattern_for(key: &str) -> Shape {
    match key {
        "Slash"     => union(&[(2, 0)]),
        "Smash"     => union(&[(4, 0)]),
        "Cleave"    => union(&[(2, 0), (3, 1), (3, -1)]),
        "Thrust"    => union(&[(4, 0), (6, 0)]),
        "Whirlwind" => union(&[(2, 0), (1, 1), (-1, 1), (-2, 0), (-1, -1), (1, -1)]),
        _ => Shape::default(),
    }
}

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Logs the headline events and forwards everything to the CSV log.
struct Narrator<W: LogWriter> {
    inner:        CombatLogObserver<W>,
    interactions: usize,
    hits:         usize,
}

impl<W: LogWriter> Narrator<W> {
    fn new(inner: CombatLogObserver<W>) -> Self {
        Self { inner, interactions: 0, hits: 0 }
    }
}

impl<W: LogWriter> CombatObserver for Narrator<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, executed: usize) {
        self.inner.on_tick_end(tick, executed);
    }

    fn on_interaction(&mut self, tick: Tick, kind: InteractionKind, first: UnitId, second: UnitId) {
        self.interactions += 1;
        info!(%tick, %kind, %first, %second, "interaction");
        self.inner.on_interaction(tick, kind, first, second);
    }

    fn on_feedback(&mut self, feedback: &Feedback) {
        if let Feedback::DamageNumber { amount, big, .. } = feedback {
            self.hits += 1;
            info!(amount, big, "hit");
        }
        self.inner.on_feedback(feedback);
    }

    fn on_counter_move_requested(&mut self, unit: UnitId) {
        info!(%unit, "counter move window");
        self.inner.on_counter_move_requested(unit);
    }

    fn on_time_scale_changed(&mut self, scale: f32) {
        info!(scale, "time scale");
        self.inner.on_time_scale_changed(scale);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<CombatConfig> {
    let Some(path) = path else {
        return Ok(CombatConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

/// Queue the whole fight.  Returns the group that gets called off.
fn script(
    timeline: &mut BattleTimeline,
    library:  &ActionLibrary,
    knight:   UnitId,
    brute:    UnitId,
) -> Result<tt_core::GroupId> {
    let action = |id: &str| library.get(id).with_context(|| format!("unknown action {id}"));

    // Unopposed hit.
    timeline.schedule_with(0.5, CombatIntent::attack(knight, action("QuickSlash")?), ScheduleOptions::described("opening slash"));
    // Parry.
    timeline.schedule_with(1.5, CombatIntent::attack(brute, action("HeavySmash")?), ScheduleOptions::described("smash"));
    timeline.schedule_with(1.5, CombatIntent::block(knight), ScheduleOptions::described("guard"));
    // Clash.
    timeline.schedule(3.0, CombatIntent::attack(knight, action("SpearThrust")?));
    timeline.schedule(3.0, CombatIntent::attack(brute, action("WideCleave")?));
    // Dodge, then slow motion.
    timeline.schedule(4.0, CombatIntent::attack(brute, action("QuickSlash")?));
    timeline.schedule(4.0, CombatIntent::dodge(knight));

    // Retreat two vertices west as one group.
    let retreat = timeline.reserve_group_id();
    let first = MoveStep::plan(&mut timeline.world, knight, GridPoint::new(-2, 0))
        .context("knight vanished")?;
    let unit = timeline.world.unit(knight).context("knight vanished")?;
    let (from_cells, to_cells) = (unit.footprint_at(GridPoint::new(-2, 0)), unit.footprint_at(GridPoint::new(-4, 0)));
    let second = MoveStep::reserve(
        &mut timeline.world.grid,
        knight,
        GridPoint::new(-2, 0),
        GridPoint::new(-4, 0),
        from_cells,
        to_cells,
    );
    let opts = ScheduleOptions::described("retreat").group(retreat);
    timeline.schedule_with(5.0, CombatIntent::move_step(knight, first), opts.clone());
    timeline.schedule_with(5.5, CombatIntent::move_step(knight, second), opts);

    // A finisher that never comes.
    let feint = timeline.reserve_group_id();
    timeline.schedule_with(
        6.0,
        CombatIntent::attack(brute, action("Whirlwind")?),
        ScheduleOptions::described("whirlwind").group(feint),
    );
    Ok(feint)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref())?;

    println!("=== duel: tri_tactics combat core ===");

    // 1. Units.
    let mut world = World::new();
    let knight = world.spawn(
        CombatUnitBuilder::new("Knight", GridPoint::ORIGIN)
            .facing(GridDirection::East)
            .mass(12.0)
            .armor(20.0)
            .build()?,
    );
    let brute = world.spawn(
        CombatUnitBuilder::new("Brute", GridPoint::new(4, 0))
            .facing(GridDirection::West)
            .mass(18.0)
            .swiftness(4.0)
            .build()?,
    );

    // 2. Timeline and script.
    let library = ActionLibrary::archetypes(pattern_for);
    let mut timeline = BattleTimelineBuilder::new(world).config(config).build()?;
    let feint = script(&mut timeline, &library, knight, brute)?;

    println!("Pending intents:");
    for info in timeline.snapshot() {
        println!(
            "  {:>6.2}s  {:<12} {:<7} {}",
            info.time,
            info.owner.to_string(),
            info.kind,
            info.description,
        );
    }
    let called_off = timeline.cancel_group(feint);
    println!("Called off {called_off} intent(s); {} pending", timeline.pending_len());
    println!();

    // 3. Log.
    fs::create_dir_all(OUTPUT_DIR)?;
    let mut obs = Narrator::new(CombatLogObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?));

    // 4. Run in real-time frames until the queue drains.
    let t0 = Instant::now();
    let mut frames = 0;
    let mut ticks = 0;
    while !timeline.is_empty() && frames < MAX_FRAMES {
        ticks += timeline.step_real_time(FRAME_SECS, &mut obs);
        frames += 1;
    }
    let elapsed = t0.elapsed();

    obs.inner.finish()?;
    if let Some(e) = obs.inner.take_error() {
        eprintln!("log error: {e}");
    }

    // 5. Summary.
    println!("Battle over in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  frames        : {frames}");
    println!("  ticks         : {ticks} (battle time {:.2} s)", timeline.current_time());
    println!("  interactions  : {}", obs.interactions);
    println!("  hits          : {}", obs.hits);
    println!("  reserved cells: {}", timeline.world.grid.reserved_cell_count());
    println!();

    println!("{:<8} {:<10} {:>7} {:>6} {:>6}", "Unit", "Position", "Health", "Focus", "Adren");
    println!("{}", "-".repeat(41));
    for (_, unit) in timeline.world.units.iter() {
        println!(
            "{:<8} {:<10} {:>7.1} {:>6} {:>6.1}",
            unit.name,
            unit.position.to_string(),
            unit.health,
            unit.focus,
            unit.adrenaline,
        );
    }

    let state = Path::new(OUTPUT_DIR).join("final_units.json");
    let units: Vec<_> = timeline.world.units.iter().map(|(_, unit)| unit).collect();
    fs::write(&state, serde_json::to_string_pretty(&units)?)?;
    println!();
    println!("Log written to {OUTPUT_DIR}/");

    Ok(())
}
