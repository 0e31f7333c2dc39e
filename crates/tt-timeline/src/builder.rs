//! Fluent builder for constructing a [`BattleTimeline`].

use tt_core::CombatConfig;
use tt_unit::World;

use crate::{BattleTimeline, IntentExecutor, StandardExecutor, TimelineResult};

/// Fluent builder for [`BattleTimeline<E>`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                    |
/// |------------------|----------------------------|
/// | `.config(c)`     | `CombatConfig::default()`  |
/// | `.executor(e)`   | `StandardExecutor`         |
/// | `.paused(b)`     | `false`                    |
///
/// # Example
///
/// ```rust,ignore
/// let mut timeline = BattleTimelineBuilder::new(world)
///     .config(config)
///     .build()?;
/// timeline.advance_time(1.0 / 60.0, &mut NoopObserver);
/// ```
pub struct BattleTimelineBuilder<E: IntentExecutor = StandardExecutor> {
    world:    World,
    config:   CombatConfig,
    executor: E,
    paused:   bool,
}

impl BattleTimelineBuilder<StandardExecutor> {
    pub fn new(world: World) -> Self {
        Self {
            world,
            config:   CombatConfig::default(),
            executor: StandardExecutor,
            paused:   false,
        }
    }
}

impl<E: IntentExecutor> BattleTimelineBuilder<E> {
    /// Override the combat rules.  Validated by [`build`](Self::build).
    pub fn config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the success-path executor.
    pub fn executor<F: IntentExecutor>(self, executor: F) -> BattleTimelineBuilder<F> {
        BattleTimelineBuilder {
            world:    self.world,
            config:   self.config,
            executor,
            paused:   self.paused,
        }
    }

    /// Start the clock paused.
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Validate the config and return a ready-to-run timeline at tick 0.
    pub fn build(self) -> TimelineResult<BattleTimeline<E>> {
        self.config.validate()?;
        let mut timeline = BattleTimeline::from_parts(self.world, self.config, self.executor);
        timeline.paused = self.paused;
        Ok(timeline)
    }
}
