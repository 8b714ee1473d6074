// src/sync.rs
//
// Keeps the two catalog views (thumbnail grid, detail list) consistent.
//
// Both views render the same ordered record sequence, so one record
// identity usually has one "twin" instance per view. The registry maps
// identity → instances and is rebuilt every render pass by the views;
// the focus machine arbitrates between hover-driven scroll sync and the
// click-driven lock. No concurrency primitives: everything here runs on
// the UI thread and mutual exclusion is the state machine's guards.

use std::collections::HashMap;

use eframe::egui::{Pos2, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Grid,
    List,
}

/// One presentation-tree node depicting a record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub view: ViewKind,
    pub rect: Rect,
    /// Image region within `rect`, when the instance shows a photo.
    pub image_rect: Option<Rect>,
}

/// identity → all presentation instances currently depicting it.
/// Cleared and repopulated each render pass; never persisted.
#[derive(Clone, Debug, Default)]
pub struct InstanceRegistry {
    map: HashMap<String, Vec<Instance>>,
}

impl InstanceRegistry {
    pub fn begin_pass(&mut self) {
        self.map.clear();
    }

    pub fn register(&mut self, id: &str, instance: Instance) {
        self.map.entry(s!(id)).or_default().push(instance);
    }

    pub fn instances(&self, id: &str) -> &[Instance] {
        self.map.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Twin instances of `id` outside `from` — the ones hover-sync may
    /// scroll. Instances in the hovered view are excluded so the element
    /// under the pointer is never moved.
    pub fn twins_outside(&self, id: &str, from: ViewKind) -> Vec<Instance> {
        self.instances(id)
            .iter()
            .filter(|i| i.view != from)
            .copied()
            .collect()
    }
}

/* ---------------- Focus machine ---------------- */

/// Two-state click/hover arbiter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Unlocked,
    /// One identity's instances carry the "selected" emphasis and
    /// hover-sync is suppressed globally.
    Locked(String),
}

impl Focus {
    pub fn is_locked(&self) -> bool {
        matches!(self, Focus::Locked(_))
    }

    pub fn locked_id(&self) -> Option<&str> {
        match self { Focus::Locked(id) => Some(id), Focus::Unlocked => None }
    }

    /// Hover-sync is advisory and only permitted while unlocked.
    pub fn hover_allowed(&self) -> bool {
        !self.is_locked()
    }

    /// Feed one click through the machine. `target` is the identified
    /// instance under the pointer, if any.
    ///
    /// Unlocked + identified click → Locked. Locked + ANY click →
    /// Unlocked; that click is consumed and never re-locks, even when it
    /// lands on a different identified instance — re-entering focus takes
    /// a second click.
    pub fn click(&mut self, target: Option<&str>) {
        *self = match (&*self, target) {
            (Focus::Unlocked, Some(id)) => Focus::Locked(s!(id)),
            (Focus::Unlocked, None) => Focus::Unlocked,
            (Focus::Locked(_), _) => Focus::Unlocked,
        };
    }

    /// True while the magnifier may track the pointer: focus is locked on
    /// `id` and the pointer sits inside that instance's image region.
    pub fn magnifier_active(&self, id: &str, image_rect: Option<Rect>, pointer: Option<Pos2>) -> bool {
        self.locked_id() == Some(id)
            && match (image_rect, pointer) {
                (Some(rect), Some(pos)) => rect.contains(pos),
                _ => false,
            }
    }
}

/* ---------------- Magnifier ---------------- */

/// Map pointer position within an image rect to the UV sub-rect shown at
/// `zoom` magnification. The window is 1/zoom of the unit square, centered
/// on the pointer's proportional position and clamped inside [0,1]².
pub fn zoom_uv(pointer: Pos2, image_rect: Rect, zoom: f32) -> Rect {
    let zoom = zoom.max(1.0);
    let half = 0.5 / zoom;

    let fx = ((pointer.x - image_rect.min.x) / image_rect.width().max(1.0)).clamp(0.0, 1.0);
    let fy = ((pointer.y - image_rect.min.y) / image_rect.height().max(1.0)).clamp(0.0, 1.0);

    let cx = fx.clamp(half, 1.0 - half);
    let cy = fy.clamp(half, 1.0 - half);

    Rect::from_min_max(
        Pos2::new(cx - half, cy - half),
        Pos2::new(cx + half, cy + half),
    )
}

/* ---------------- Grid layout ---------------- */

/// Responsive column count: available width divided by the minimum
/// column width, bounded to 1..=max_cols.
pub fn column_count(avail_width: f32, min_col_width: f32, max_cols: usize) -> usize {
    let fit = (avail_width / min_col_width.max(1.0)).floor() as usize;
    fit.clamp(1, max_cols.max(1))
}

/// Bucket sizes for distributing `total` ordered items into `cols`
/// columns: ceil(total/cols) per column, the last column absorbing the
/// remainder. No empty buckets are emitted; 10 into 3 → [4, 4, 2].
pub fn distribute(total: usize, cols: usize) -> Vec<usize> {
    if total == 0 || cols == 0 {
        return Vec::new();
    }
    let per = total.div_ceil(cols);
    let mut sizes = Vec::with_capacity(cols);
    let mut remaining = total;
    while remaining > 0 {
        let take = per.min(remaining);
        sizes.push(take);
        remaining -= take;
    }
    sizes
}
