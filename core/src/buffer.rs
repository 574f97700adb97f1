//! Per-category event buffers.
//!
//! RULE: Notification handlers only append. The aggregator drains every
//! category exactly once per tick, and a drain always leaves the buffers
//! empty. Nothing survives into the next tick.

use crate::{
    record::{AreaSoundRecord, GraphicRecord, GroundItem, ProjectileRecord, SoundRecord},
    snapshot::{GraphicsObjectView, ProjectileView},
    types::Cycle,
};

/// Default width of the projectile start-cycle window.
pub const PROJECTILE_WINDOW: Cycle = 15;

/// Projectiles launched this tick: start cycle strictly inside `(cycle, cycle + window)`.
pub fn projectile_in_window(start_cycle: Cycle, cycle: Cycle, window: Cycle) -> bool {
    start_cycle > cycle && start_cycle < cycle.saturating_add(window)
}

/// Graphics spawned this tick: start cycle strictly after the current cycle.
pub fn graphic_is_new(start_cycle: Cycle, cycle: Cycle) -> bool {
    start_cycle > cycle
}

/// Everything one drain produced, in arrival order per category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Drained {
    pub sounds:           Vec<SoundRecord>,
    pub area_sounds:      Vec<AreaSoundRecord>,
    pub ground_items:     Vec<GroundItem>,
    pub projectiles:      Vec<ProjectileRecord>,
    pub graphics_spawned: Vec<GraphicRecord>,
}

#[derive(Debug, Default)]
pub struct EventBuffers {
    sounds:       Vec<SoundRecord>,
    area_sounds:  Vec<AreaSoundRecord>,
    ground_items: Vec<GroundItem>,
    projectiles:  Vec<ProjectileView>,
    graphics:     Vec<GraphicsObjectView>,
}

impl EventBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_sound(&mut self, sound: SoundRecord) {
        self.sounds.push(sound);
    }

    pub fn push_area_sound(&mut self, sound: AreaSoundRecord) {
        self.area_sounds.push(sound);
    }

    pub fn push_ground_item(&mut self, item: GroundItem) {
        self.ground_items.push(item);
    }

    pub fn observe_projectiles(&mut self, projectiles: &[ProjectileView]) {
        self.projectiles.extend_from_slice(projectiles);
    }

    pub fn observe_graphics(&mut self, graphics: &[GraphicsObjectView]) {
        self.graphics.extend_from_slice(graphics);
    }

    /// Number of items currently buffered across all categories.
    pub fn len(&self) -> usize {
        self.sounds.len()
            + self.area_sounds.len()
            + self.ground_items.len()
            + self.projectiles.len()
            + self.graphics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty every category, applying the temporal filters to projectiles and
    /// graphics. Items outside their window are dropped, never carried over.
    pub fn drain(&mut self, cycle: Cycle, projectile_window: Cycle) -> Drained {
        let projectiles = std::mem::take(&mut self.projectiles)
            .into_iter()
            .filter(|p| projectile_in_window(p.start_cycle, cycle, projectile_window))
            .map(|p| ProjectileRecord {
                id:               p.id,
                start_height:     p.start_height,
                end_height:       p.end_height,
                slope:            p.slope,
                remaining_cycles: p.remaining_cycles,
                start_x:          p.start_x,
                start_y:          p.start_y,
            })
            .collect();

        let graphics_spawned = std::mem::take(&mut self.graphics)
            .into_iter()
            .filter(|g| graphic_is_new(g.start_cycle, cycle))
            .map(|g| GraphicRecord {
                id:          g.id,
                level:       g.level,
                start_cycle: g.start_cycle,
                x:           g.location.x,
                y:           g.location.y,
            })
            .collect();

        Drained {
            sounds:       std::mem::take(&mut self.sounds),
            area_sounds:  std::mem::take(&mut self.area_sounds),
            ground_items: std::mem::take(&mut self.ground_items),
            projectiles,
            graphics_spawned,
        }
    }

    /// Drop everything buffered. Returns how many items were discarded.
    pub fn discard(&mut self) -> usize {
        let dropped = self.len();
        self.sounds.clear();
        self.area_sounds.clear();
        self.ground_items.clear();
        self.projectiles.clear();
        self.graphics.clear();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocalPoint;

    fn projectile(id: i32, start_cycle: Cycle) -> ProjectileView {
        ProjectileView {
            id,
            start_height: 43,
            end_height: 31,
            slope: 16,
            remaining_cycles: 40,
            start_x: 6400,
            start_y: 6464,
            start_cycle,
        }
    }

    #[test]
    fn projectile_window_is_open_at_both_ends() {
        assert!(!projectile_in_window(100, 100, PROJECTILE_WINDOW));
        assert!(projectile_in_window(101, 100, PROJECTILE_WINDOW));
        assert!(projectile_in_window(114, 100, PROJECTILE_WINDOW));
        assert!(!projectile_in_window(115, 100, PROJECTILE_WINDOW));
        assert!(!projectile_in_window(99, 100, PROJECTILE_WINDOW));
    }

    #[test]
    fn window_near_cycle_limit_does_not_overflow() {
        let cycle = Cycle::MAX - 3;
        assert!(projectile_in_window(Cycle::MAX - 1, cycle, PROJECTILE_WINDOW));
        assert!(!projectile_in_window(Cycle::MAX, cycle, PROJECTILE_WINDOW));
        assert!(!projectile_in_window(cycle, cycle, PROJECTILE_WINDOW));
    }

    #[test]
    fn drain_filters_and_empties() {
        let mut buffers = EventBuffers::new();
        buffers.push_sound(SoundRecord { id: 1, delay: 0 });
        buffers.push_sound(SoundRecord { id: 2, delay: 5 });
        buffers.observe_projectiles(&[projectile(7, 100), projectile(8, 105), projectile(9, 115)]);
        buffers.observe_graphics(&[
            GraphicsObjectView { id: 3, level: 0, start_cycle: 100, location: LocalPoint { x: 1, y: 2 } },
            GraphicsObjectView { id: 4, level: 1, start_cycle: 130, location: LocalPoint { x: 3, y: 4 } },
        ]);

        let drained = buffers.drain(100, PROJECTILE_WINDOW);

        assert!(buffers.is_empty(), "buffers must be empty after a drain");
        assert_eq!(drained.sounds.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(drained.projectiles.iter().map(|p| p.id).collect::<Vec<_>>(), vec![8]);
        assert_eq!(drained.graphics_spawned.len(), 1);
        assert_eq!(drained.graphics_spawned[0].id, 4);
        assert_eq!((drained.graphics_spawned[0].x, drained.graphics_spawned[0].y), (3, 4));
    }

    #[test]
    fn filtered_items_do_not_reappear_next_tick() {
        let mut buffers = EventBuffers::new();
        buffers.observe_projectiles(&[projectile(7, 130)]);
        let first = buffers.drain(100, PROJECTILE_WINDOW);
        assert!(first.projectiles.is_empty());

        let second = buffers.drain(120, PROJECTILE_WINDOW);
        assert!(second.projectiles.is_empty(), "dropped projectile leaked into a later tick");
    }

    #[test]
    fn discard_reports_count() {
        let mut buffers = EventBuffers::new();
        buffers.push_sound(SoundRecord { id: 1, delay: 0 });
        buffers.push_ground_item(GroundItem { id: 995, quantity: 10, spawn_time: 0 });
        assert_eq!(buffers.discard(), 2);
        assert!(buffers.is_empty());
    }
}
