//! Unit tests for tt-timeline.

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use tt_core::{
        CombatObserver, Feedback, GridDirection, GridPoint, InteractionKind, Tick, TrianglePoint,
        UnitId,
    };
    use tt_grid::Shape;
    use tt_intent::{ActionDefinition, ActionType, CombatIntent, ImpactType};
    use tt_unit::{CombatUnitBuilder, World};

    use crate::{ExecContext, IntentExecutor, StandardExecutor};

    #[derive(Default)]
    pub struct Recorder {
        /// `(tick, executed)` for every tick that executed something.
        pub ticks:        Vec<(Tick, usize)>,
        pub interactions: Vec<(Tick, InteractionKind, UnitId, UnitId)>,
        pub feedback:     Vec<Feedback>,
        pub scales:       Vec<f32>,
    }

    impl CombatObserver for Recorder {
        fn on_tick_end(&mut self, tick: Tick, executed: usize) {
            if executed > 0 {
                self.ticks.push((tick, executed));
            }
        }

        fn on_interaction(&mut self, tick: Tick, kind: InteractionKind, a: UnitId, b: UnitId) {
            self.interactions.push((tick, kind, a, b));
        }

        fn on_feedback(&mut self, feedback: &Feedback) {
            self.feedback.push(feedback.clone());
        }

        fn on_time_scale_changed(&mut self, scale: f32) {
            self.scales.push(scale);
        }
    }

    /// Logs every executed intent, then runs the stock success path.
    /// With `react` set, every attack schedules a zero-delay block for its
    /// owner.
    #[derive(Default)]
    pub struct LoggingExecutor {
        pub log:   Vec<(Tick, UnitId, ActionType)>,
        pub react: bool,
    }

    impl IntentExecutor for LoggingExecutor {
        fn execute<O: CombatObserver + ?Sized>(
            &mut self,
            intent: CombatIntent,
            ctx:    &mut ExecContext<'_, O>,
        ) {
            self.log.push((ctx.tick, intent.owner, intent.action_type()));
            if self.react && intent.action_type() == ActionType::Attack {
                ctx.schedule(0.0, CombatIntent::block(intent.owner));
            }
            StandardExecutor.execute(intent, ctx);
        }
    }

    pub fn spawn(world: &mut World, name: &str, x: i32, facing: GridDirection) -> UnitId {
        world.spawn(
            CombatUnitBuilder::new(name, GridPoint::new(x, 0))
                .facing(facing)
                .build()
                .unwrap(),
        )
    }

    /// Blunt strike covering `cells`, given relative to an east-facing owner.
    pub fn strike(cells: Vec<TrianglePoint>) -> Arc<ActionDefinition> {
        Arc::new(ActionDefinition {
            id:               "Strike".into(),
            name:             "Strike".into(),
            kind:             ActionType::Attack,
            duration_secs:    0.5,
            base_damage:      10.0,
            impact:           ImpactType::Blunt,
            stamina_cost:     0.0,
            force_multiplier: 1.0,
            pattern:          Shape::uniform(cells),
        })
    }

    /// Strike covering the hexagon around the vertex `dist` steps ahead.
    pub fn reach(dist: i32) -> Arc<ActionDefinition> {
        let offset = GridPoint::new(2 * dist, 0);
        strike(Shape::hexagon().even.into_iter().map(|c| c.translated(offset)).collect())
    }

    /// A at the origin facing east, B two vertices away facing west.
    pub fn duel() -> (World, UnitId, UnitId) {
        let mut world = World::new();
        let a = spawn(&mut world, "a", 0, GridDirection::East);
        let b = spawn(&mut world, "b", 4, GridDirection::West);
        (world, a, b)
    }

    pub fn close(actual: f32, expected: f32) -> bool {
        (actual - expected).abs() < 1e-5
    }
}

#[cfg(test)]
mod ordering {
    use tt_core::{GridDirection, NoopObserver, Tick};
    use tt_intent::{ActionType, CombatIntent};
    use tt_unit::World;

    use super::support::{LoggingExecutor, reach, spawn};
    use crate::{BattleTimeline, BattleTimelineBuilder, ScheduleOptions};

    /// Three units far enough apart that nothing interacts.
    fn spread() -> (World, [tt_core::UnitId; 3]) {
        let mut world = World::new();
        let a = spawn(&mut world, "a", 0, GridDirection::East);
        let b = spawn(&mut world, "b", 20, GridDirection::East);
        let c = spawn(&mut world, "c", 40, GridDirection::East);
        (world, [a, b, c])
    }

    fn logged(world: World) -> BattleTimeline<LoggingExecutor> {
        BattleTimelineBuilder::new(world)
            .executor(LoggingExecutor::default())
            .build()
            .unwrap()
    }

    #[test]
    fn priority_then_submission_order() {
        let (world, [a, b, c]) = spread();
        let mut timeline = logged(world);
        timeline.schedule(0.1, CombatIntent::block(a));
        timeline.schedule_with(0.1, CombatIntent::block(b), ScheduleOptions::default().priority(5));
        timeline.schedule(0.1, CombatIntent::block(c));
        assert!(timeline.queue().is_sorted());

        timeline.advance_time(0.2, &mut NoopObserver);
        let owners: Vec<_> = timeline.executor_mut().log.iter().map(|&(_, owner, _)| owner).collect();
        assert_eq!(owners, vec![b, a, c]);
        assert!(timeline.executor_mut().log.iter().all(|&(tick, _, _)| tick == Tick(6)));
    }

    #[test]
    fn earlier_tick_fires_first() {
        let (world, [a, b, c]) = spread();
        let mut timeline = logged(world);
        timeline.schedule(0.5, CombatIntent::block(a));
        timeline.schedule(0.1, CombatIntent::block(b));
        timeline.schedule_with(0.3, CombatIntent::dodge(c), ScheduleOptions::default().priority(100));

        timeline.advance_time(1.0, &mut NoopObserver);
        assert_eq!(
            timeline.executor_mut().log,
            vec![
                (Tick(6), b, ActionType::Block),
                (Tick(18), c, ActionType::Dodge),
                (Tick(30), a, ActionType::Block),
            ]
        );
    }

    #[test]
    fn snapshot_lists_pending_in_firing_order() {
        let (world, [a, b, _]) = spread();
        let mut timeline = BattleTimeline::new(world);
        let group = timeline.reserve_group_id();
        let late = timeline.schedule_with(
            0.5,
            CombatIntent::attack(a, reach(2)),
            ScheduleOptions::described("swing").group(group),
        );
        let early = timeline.schedule(0.25, CombatIntent::block(b));

        let snapshot = timeline.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!((snapshot[0].id, snapshot[0].tick, snapshot[0].kind), (early, Tick(15), ActionType::Block));
        assert_eq!(snapshot[1].id, late);
        assert_eq!(snapshot[1].owner, a);
        assert_eq!(snapshot[1].group, group);
        assert_eq!(snapshot[1].description, "swing");
        assert_eq!(snapshot[0].description, format!("Block by {b}"));
        assert!((snapshot[1].time - 0.5).abs() < 1e-6);
    }

    #[test]
    fn delays_round_to_nearest_tick() {
        let (world, [a, ..]) = spread();
        let mut timeline = BattleTimeline::new(world);
        timeline.schedule(0.025, CombatIntent::block(a));
        timeline.schedule(0.007, CombatIntent::block(a));
        timeline.schedule(-1.0, CombatIntent::block(a));
        timeline.schedule(f32::NAN, CombatIntent::block(a));

        let ticks: Vec<_> = timeline.snapshot().iter().map(|info| info.tick).collect();
        assert_eq!(ticks, vec![Tick(0), Tick(0), Tick(0), Tick(2)]);
    }

    #[test]
    fn zero_delay_fires_on_next_processed_tick() {
        let (world, [a, ..]) = spread();
        let mut timeline = logged(world);
        timeline.schedule(0.0, CombatIntent::block(a));
        assert_eq!(timeline.advance_time(1.0 / 60.0, &mut NoopObserver), 1);
        assert_eq!(timeline.executor_mut().log, vec![(Tick(0), a, ActionType::Block)]);
        assert!(timeline.is_empty());
    }

    #[test]
    fn reactions_fire_on_the_following_tick() {
        let (world, [a, ..]) = spread();
        let mut timeline = BattleTimelineBuilder::new(world)
            .executor(LoggingExecutor { react: true, ..LoggingExecutor::default() })
            .build()
            .unwrap();
        timeline.schedule(5.0 / 60.0, CombatIntent::attack(a, reach(2)));

        timeline.advance_time(6.0 / 60.0, &mut NoopObserver);
        assert_eq!(timeline.current_tick(), Tick(6));
        // The reaction targets tick 5, already drained, so it is due now.
        assert_eq!(timeline.snapshot()[0].tick, Tick(5));

        timeline.advance_time(1.0 / 60.0, &mut NoopObserver);
        assert_eq!(
            timeline.executor_mut().log,
            vec![(Tick(5), a, ActionType::Attack), (Tick(6), a, ActionType::Block)]
        );
    }

    #[test]
    fn sequence_restarts_each_tick() {
        let (world, [a, b, c]) = spread();
        let mut timeline = logged(world);
        timeline.schedule(1.0, CombatIntent::block(a));
        timeline.schedule(1.0, CombatIntent::block(b));
        timeline.advance_time(1.0 / 60.0, &mut NoopObserver);
        // Same target tick as the others, with the counter back at zero.
        timeline.schedule(59.0 / 60.0, CombatIntent::block(c));
        assert!(timeline.queue().is_sorted());

        timeline.advance_time(1.0, &mut NoopObserver);
        let owners: Vec<_> = timeline.executor_mut().log.iter().map(|&(_, owner, _)| owner).collect();
        assert_eq!(owners, vec![a, c, b]);
    }
}

#[cfg(test)]
mod clock {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use tt_core::{CombatConfig, GridPoint, NoopObserver, SECONDS_PER_TICK, Tick};
    use tt_intent::{CombatIntent, MoveStep};

    use super::support::{Recorder, close, duel, reach};
    use crate::{BattleTimeline, BattleTimelineBuilder, TimelineError};

    #[test]
    fn whole_ticks_only() {
        let (world, ..) = duel();
        let mut timeline = BattleTimeline::new(world);
        assert_eq!(timeline.advance_time(0.5, &mut NoopObserver), 30);
        assert_eq!(timeline.current_tick(), Tick(30));
        assert!(close(timeline.current_time(), 0.5));
    }

    #[test]
    fn sixty_frames_make_one_second() {
        let (world, ..) = duel();
        let mut timeline = BattleTimeline::new(world);
        let ticks: u64 = (0..60).map(|_| timeline.advance_time(1.0 / 60.0, &mut NoopObserver)).sum();
        assert_eq!(ticks, 60);
        assert_eq!(timeline.current_tick(), Tick(60));
    }

    #[test]
    fn visual_time_includes_the_remainder() {
        let (world, ..) = duel();
        let mut timeline = BattleTimeline::new(world);
        assert_eq!(timeline.advance_time(1.0 / 128.0, &mut NoopObserver), 0);
        assert_eq!(timeline.current_time(), 0.0);
        assert!(close(timeline.visual_time(), 1.0 / 128.0));

        assert_eq!(timeline.advance_time(1.0 / 128.0, &mut NoopObserver), 0);
        assert_eq!(timeline.advance_time(1.0 / 128.0, &mut NoopObserver), 1);
        assert!(close(timeline.current_time(), SECONDS_PER_TICK));
        assert!(close(timeline.visual_time(), 3.0 / 128.0));
    }

    #[test]
    fn invalid_deltas_are_ignored() {
        let (world, ..) = duel();
        let mut timeline = BattleTimeline::new(world);
        assert_eq!(timeline.advance_time(0.0, &mut NoopObserver), 0);
        assert_eq!(timeline.advance_time(-1.0, &mut NoopObserver), 0);
        assert_eq!(timeline.advance_time(f32::NAN, &mut NoopObserver), 0);
        assert_eq!(timeline.visual_time(), 0.0);
    }

    #[test]
    fn paused_clock_holds() {
        let (world, a, _) = duel();
        let mut timeline = BattleTimelineBuilder::new(world).paused(true).build().unwrap();
        timeline.schedule(0.0, CombatIntent::block(a));

        assert_eq!(timeline.advance_time(1.0, &mut NoopObserver), 0);
        assert_eq!(timeline.current_tick(), Tick::ZERO);
        assert_eq!(timeline.visual_time(), 0.0);
        assert_eq!(timeline.pending_len(), 1);

        timeline.set_paused(false);
        assert!(!timeline.paused());
        assert_eq!(timeline.advance_time(1.0, &mut NoopObserver), 60);
        assert!(timeline.is_empty());
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let (world, ..) = duel();
        let config = CombatConfig { slash_transfer: -1.0, ..CombatConfig::default() };
        let result = BattleTimelineBuilder::new(world).config(config).build();
        assert!(matches!(result, Err(TimelineError::Config(_))));
    }

    #[test]
    fn group_ids_are_fresh() {
        let (world, ..) = duel();
        let mut timeline = BattleTimeline::new(world);
        let first = timeline.reserve_group_id();
        let second = timeline.reserve_group_id();
        assert!(!first.is_none() && !second.is_none());
        assert_ne!(first, second);
    }

    #[test]
    fn near_boundary_frames_match_one_long_frame() {
        // Every frame lands inside the comparison slack below one tick.
        for per_frame in [0.99995_f32, 0.99991] {
            let (world, ..) = duel();
            let mut framed = BattleTimeline::new(world);
            let ticks: u64 = (0..100)
                .map(|_| framed.advance_time(per_frame / 60.0, &mut NoopObserver))
                .sum();

            let (world, ..) = duel();
            let mut single = BattleTimeline::new(world);
            let once = single.advance_time(100.0 * per_frame / 60.0, &mut NoopObserver);

            assert_eq!(ticks, once, "per_frame = {per_frame}");
            assert_eq!(framed.current_tick(), single.current_tick());
            assert_eq!(framed.current_tick(), Tick(99));
            assert!(close(framed.visual_time(), single.visual_time()));
        }
    }

    /// A scripted exchange: hits, a parry, a clash and a step back.
    fn scripted() -> BattleTimeline {
        let (world, a, b) = duel();
        let mut timeline = BattleTimeline::new(world);
        timeline.schedule(0.5, CombatIntent::attack(a, reach(2)));
        timeline.schedule(1.5, CombatIntent::attack(a, reach(2)));
        timeline.schedule(1.5, CombatIntent::block(b));
        timeline.schedule(3.0, CombatIntent::attack(b, reach(2)));
        timeline.schedule(3.0, CombatIntent::attack(a, reach(2)));
        timeline.schedule(4.25, CombatIntent::attack(b, reach(1)));
        let step = MoveStep::plan(&mut timeline.world, a, GridPoint::new(-2, 0)).unwrap();
        timeline.schedule(6.0, CombatIntent::move_step(a, step));
        timeline.schedule(8.0, CombatIntent::attack(b, reach(3)));
        timeline
    }

    #[test]
    fn chunking_does_not_change_the_outcome() {
        let mut whole = scripted();
        let mut whole_log = Recorder::default();
        assert_eq!(whole.advance_time(10.0, &mut whole_log), 600);

        // Chunks are multiples of 1/64 s so their sum is exactly 10 s.
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut chunked = scripted();
        let mut chunked_log = Recorder::default();
        let mut remaining = 640u32;
        let mut ticks = 0;
        while remaining > 0 {
            let units = rng.gen_range(1..=20).min(remaining);
            remaining -= units;
            ticks += chunked.advance_time(units as f32 / 64.0, &mut chunked_log);
        }

        assert_eq!(ticks, 600);
        assert_eq!(chunked.current_tick(), whole.current_tick());
        assert_eq!(chunked_log.ticks, whole_log.ticks);
        assert_eq!(chunked_log.interactions, whole_log.interactions);
        assert_eq!(chunked_log.feedback, whole_log.feedback);
        for (id, unit) in whole.world.units.iter() {
            assert_eq!(chunked.world.unit(id), Some(unit));
        }
        assert!(!whole_log.interactions.is_empty());
        assert_eq!(whole.world.grid.reserved_cell_count(), 0);
    }
}

#[cfg(test)]
mod cancellation {
    use tt_core::{GridPoint, NoopObserver};
    use tt_intent::{CombatIntent, MoveStep};

    use super::support::{duel, reach};
    use crate::{BattleTimeline, ScheduleOptions};

    #[test]
    fn group_cancel_releases_reservations() {
        let (world, a, _) = duel();
        let mut timeline = BattleTimeline::new(world);
        let group = timeline.reserve_group_id();
        let opts = ScheduleOptions::default().group(group);

        let first = MoveStep::plan(&mut timeline.world, a, GridPoint::new(-2, 0)).unwrap();
        let second = MoveStep::plan(&mut timeline.world, a, GridPoint::new(-4, 0)).unwrap();
        timeline.schedule_with(0.2, CombatIntent::move_step(a, first), opts.clone());
        timeline.schedule_with(0.4, CombatIntent::move_step(a, second), opts.clone());
        timeline.schedule_with(0.6, CombatIntent::attack(a, reach(2)), opts);
        assert!(timeline.world.grid.reserved_cell_count() > 0);

        assert_eq!(timeline.cancel_group(group), 3);
        assert_eq!(timeline.world.grid.reserved_cell_count(), 0);
        assert!(timeline.is_empty());

        timeline.advance_time(1.0, &mut NoopObserver);
        assert_eq!(timeline.world.unit(a).unwrap().position, GridPoint::ORIGIN);
    }

    #[test]
    fn ungrouped_intents_survive_group_cancel() {
        let (world, a, b) = duel();
        let mut timeline = BattleTimeline::new(world);
        let group = timeline.reserve_group_id();
        timeline.schedule(0.2, CombatIntent::block(a));
        timeline.schedule_with(0.2, CombatIntent::block(b), ScheduleOptions::default().group(group));

        assert_eq!(timeline.cancel_group(tt_core::GroupId::NONE), 0);
        assert_eq!(timeline.cancel_group(group), 1);
        assert_eq!(timeline.snapshot()[0].owner, a);
    }

    #[test]
    fn cancel_events_targets_one_unit() {
        let (world, a, b) = duel();
        let mut timeline = BattleTimeline::new(world);
        let step = MoveStep::plan(&mut timeline.world, b, GridPoint::new(6, 0)).unwrap();
        timeline.schedule(0.2, CombatIntent::move_step(b, step));
        timeline.schedule(0.3, CombatIntent::attack(b, reach(2)));
        timeline.schedule(0.3, CombatIntent::block(a));

        assert_eq!(timeline.cancel_events(b), 2);
        assert_eq!(timeline.pending_len(), 1);
        assert_eq!(timeline.world.grid.reserved_cell_count(), 0);
    }

    #[test]
    fn despawned_owner_is_cancelled_at_fire_time() {
        let (world, a, b) = duel();
        let mut timeline = BattleTimeline::new(world);
        let step = MoveStep::plan(&mut timeline.world, b, GridPoint::new(6, 0)).unwrap();
        timeline.schedule(0.2, CombatIntent::move_step(b, step));
        timeline.schedule(0.2, CombatIntent::attack(b, reach(2)));

        // Removed behind the timeline's back: the intents stay queued.
        timeline.world.despawn(b);
        assert_eq!(timeline.pending_len(), 2);

        let mut recorder = super::support::Recorder::default();
        timeline.advance_time(0.5, &mut recorder);
        assert!(recorder.ticks.is_empty());
        assert_eq!(timeline.world.grid.reserved_cell_count(), 0);
        assert_eq!(timeline.world.unit(a).unwrap().health, 100.0);
    }

    #[test]
    fn clear_releases_everything() {
        let (world, a, b) = duel();
        let mut timeline = BattleTimeline::new(world);
        let step = MoveStep::plan(&mut timeline.world, a, GridPoint::new(-2, 0)).unwrap();
        timeline.schedule(0.2, CombatIntent::move_step(a, step));
        timeline.schedule(0.2, CombatIntent::block(b));

        assert_eq!(timeline.clear(), 2);
        assert!(timeline.is_empty());
        assert_eq!(timeline.world.grid.reserved_cell_count(), 0);
    }

    #[test]
    fn dropping_with_pending_steps_is_clean() {
        let (world, a, _) = duel();
        let mut timeline = BattleTimeline::new(world);
        let step = MoveStep::plan(&mut timeline.world, a, GridPoint::new(-2, 0)).unwrap();
        timeline.schedule(5.0, CombatIntent::move_step(a, step));
        drop(timeline);
    }

    #[test]
    fn timeline_despawn_drops_pending_intents() {
        let (world, _, b) = duel();
        let mut timeline = BattleTimeline::new(world);
        let step = MoveStep::plan(&mut timeline.world, b, GridPoint::new(6, 0)).unwrap();
        timeline.schedule(0.2, CombatIntent::move_step(b, step));

        assert!(timeline.despawn(b).is_some());
        assert!(timeline.is_empty());
        assert_eq!(timeline.world.grid.reserved_cell_count(), 0);
    }
}

#[cfg(test)]
mod battle {
    use tt_core::{Feedback, GridDirection, GridPoint, InteractionKind, Tick, TrianglePoint};
    use tt_intent::{CombatIntent, MoveStep};
    use tt_unit::World;

    use super::support::{Recorder, duel, reach, spawn, strike};
    use crate::BattleTimeline;

    #[test]
    fn attack_lands_on_its_tick() {
        let (world, a, b) = duel();
        let mut timeline = BattleTimeline::new(world);
        let mut recorder = Recorder::default();
        timeline.schedule(0.5, CombatIntent::attack(a, reach(2)));

        timeline.advance_time(0.5, &mut recorder);
        assert_eq!(timeline.world.unit(b).unwrap().health, 100.0);

        timeline.advance_time(1.0 / 60.0, &mut recorder);
        assert!(timeline.world.unit(b).unwrap().health < 100.0);
        assert_eq!(recorder.ticks, vec![(Tick(30), 1)]);
        assert!(recorder.feedback.iter().any(|f| matches!(f, Feedback::DamageNumber { .. })));
        assert!(recorder.feedback.iter().any(|f| matches!(f, Feedback::Bounce { unit, .. } if *unit == b)));
        // 50 momentum on a mass-10, swiftness-5 target: staggered, pushed one vertex.
        let target = timeline.world.unit(b).unwrap();
        assert!(target.staggered);
        assert_eq!(target.position, GridPoint::new(6, 0));
    }

    #[test]
    fn parry_stops_the_hit() {
        let (world, a, b) = duel();
        let mut timeline = BattleTimeline::new(world);
        let mut recorder = Recorder::default();
        timeline.schedule(0.5, CombatIntent::attack(a, reach(2)));
        timeline.schedule(0.5, CombatIntent::block(b));

        timeline.advance_time(1.0, &mut recorder);
        assert_eq!(recorder.interactions, vec![(Tick(30), InteractionKind::Parry, a, b)]);
        assert!(recorder.ticks.is_empty());
        assert_eq!(timeline.world.unit(b).unwrap().health, 100.0);
    }

    #[test]
    fn dodge_starts_slow_motion() {
        let (world, a, b) = duel();
        let mut timeline = BattleTimeline::new(world);
        let mut recorder = Recorder::default();
        timeline.schedule(0.0, CombatIntent::attack(a, reach(2)));
        timeline.schedule(0.0, CombatIntent::dodge(b));

        timeline.advance_time(1.0 / 60.0, &mut recorder);
        let scale = timeline.config().slow_motion_scale;
        assert_eq!(timeline.time_scale(), scale);
        assert_eq!(recorder.scales, vec![scale]);
        assert_eq!(timeline.world.unit(b).unwrap().health, 100.0);

        // One real second at 0.05 feeds three ticks of game time.
        assert_eq!(timeline.step_real_time(1.0, &mut recorder), 3);
        assert_eq!(timeline.time_scale(), scale);

        assert_eq!(timeline.update_real_time(1.0, &mut recorder), 1.0);
        assert_eq!(recorder.scales, vec![scale, 1.0]);
        assert!(timeline.slow_motion().is_none());
    }

    #[test]
    fn attack_on_destination_intercepts_the_step() {
        let mut world = World::new();
        let c = spawn(&mut world, "c", 0, GridDirection::East);
        let d = spawn(&mut world, "d", -6, GridDirection::East);
        let mut timeline = BattleTimeline::new(world);
        let mut recorder = Recorder::default();

        let step = MoveStep::plan(&mut timeline.world, c, GridPoint::new(2, 0)).unwrap();
        timeline.schedule(0.1, CombatIntent::move_step(c, step));
        // (3, 0, 1) once translated to d's anchor: destination only.
        timeline.schedule(0.1, CombatIntent::attack(d, strike(vec![TrianglePoint::new(9, 0, 1)])));

        timeline.advance_time(0.2, &mut recorder);
        assert_eq!(recorder.interactions, vec![(Tick(6), InteractionKind::Intercept, d, c)]);
        let unit = timeline.world.unit(c).unwrap();
        assert_eq!(unit.position, GridPoint::ORIGIN);
        assert!(unit.knocked_down);
        assert_eq!(timeline.world.unit(d).unwrap().focus, 1);
        assert_eq!(timeline.world.grid.reserved_cell_count(), 0);
    }

    #[test]
    fn free_step_moves_the_unit() {
        let (world, a, _) = duel();
        let mut timeline = BattleTimeline::new(world);
        let step = MoveStep::plan(&mut timeline.world, a, GridPoint::new(-2, 0)).unwrap();
        timeline.schedule(0.1, CombatIntent::move_step(a, step));

        timeline.advance_time(0.2, &mut Recorder::default());
        assert_eq!(timeline.world.unit(a).unwrap().position, GridPoint::new(-2, 0));
        assert_eq!(timeline.world.grid.occupant(TrianglePoint::new(-3, 0, 1)), Some(Some(a)));
        assert_eq!(timeline.world.grid.occupant(TrianglePoint::new(1, 0, 1)), None);
        assert_eq!(timeline.world.grid.reserved_cell_count(), 0);
    }

    #[test]
    fn blocked_step_stays_put() {
        let (world, a, _) = duel();
        let mut timeline = BattleTimeline::new(world);
        let step = MoveStep::plan(&mut timeline.world, a, GridPoint::new(-2, 0)).unwrap();
        timeline.schedule(0.1, CombatIntent::move_step(a, step));
        timeline.world.grid.register_obstacle(&[TrianglePoint::new(-3, 0, 1)]);

        timeline.advance_time(0.2, &mut Recorder::default());
        assert_eq!(timeline.world.unit(a).unwrap().position, GridPoint::ORIGIN);
        assert_eq!(timeline.world.grid.reserved_cell_count(), 0);
    }
}
