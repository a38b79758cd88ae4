//! Axis-aligned collision kernel
//!
//! One primitive (rectangle overlap, strict inequalities so edge-touching
//! does not count) plus axis-separated resolution: X first, then Y, pushing
//! the mover out along the axis of travel and zeroing that velocity
//! component. Resolution is discrete, not swept; entities moving faster than
//! a platform is thick can tunnel. Known gap, inherited by every mover.

use super::state::{Platform, PlatformKind, Rect};

/// True iff both axis intervals strictly overlap
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Resolve horizontal penetration against every solid platform.
///
/// Pushes `rect` out to the nearest free position on the side it came from
/// and zeroes `vx` on contact. Goal platforms are not solid on this axis so
/// the player can run into the exit. Returns the wall direction: 1 when
/// pressed against a wall to the right, -1 to the left, 0 for no contact.
pub fn resolve_horizontal(rect: &mut Rect, vx: &mut f32, platforms: &[Platform]) -> i8 {
    let mut wall_dir = 0i8;
    for plat in platforms {
        if plat.kind == PlatformKind::Goal {
            continue;
        }
        if overlaps(rect, &plat.rect) {
            if *vx > 0.0 {
                rect.x = plat.rect.x - rect.w;
                wall_dir = 1;
            } else if *vx < 0.0 {
                rect.x = plat.rect.right();
                wall_dir = -1;
            }
            *vx = 0.0;
        }
    }
    wall_dir
}

/// Outcome of the vertical resolution pass
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalHit {
    /// Set when the mover landed on top of a platform this tick
    pub landed_on: Option<PlatformKind>,
    /// Head bump against the underside of a platform
    pub hit_ceiling: bool,
    /// Overlapped the goal; resolution stops immediately when this is set
    pub touched_goal: bool,
}

/// Resolve vertical penetration against every platform.
///
/// Falling movers are snapped on top and `vy` zeroed; rising movers are
/// snapped below. Goal contact short-circuits: the caller transitions to
/// victory and the tick ends, so no positional correction is applied.
pub fn resolve_vertical(rect: &mut Rect, vy: &mut f32, platforms: &[Platform]) -> VerticalHit {
    let mut hit = VerticalHit::default();
    for plat in platforms {
        if overlaps(rect, &plat.rect) {
            if plat.kind == PlatformKind::Goal {
                hit.touched_goal = true;
                return hit;
            }
            if *vy > 0.0 {
                rect.y = plat.rect.y - rect.h;
                *vy = 0.0;
                hit.landed_on = Some(plat.kind);
            } else if *vy < 0.0 {
                rect.y = plat.rect.bottom();
                *vy = 0.0;
                hit.hit_ceiling = true;
            }
        }
    }
    hit
}
