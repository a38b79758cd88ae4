//! Zombie catalog and per-tick AI
//!
//! Each zombie runs the same pipeline every tick: flocking separation,
//! perception, type-specific behavior (Screamer summons and screams),
//! steering, environmental sensing with jump/reverse decisions, physics,
//! then combat resolution against projectiles and the player. Zombies
//! spawned mid-pass (summons, hordes) start acting the following tick.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision;
use super::events::GameEvent;
use super::state::{color, PlatformKind, Rect, WorldState, Zombie};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZombieKind {
    /// Baseline shambler
    Walker,
    /// Fast, fragile
    Runner,
    /// Slow, massive, never jumps, shrugs off knockback
    Tank,
    /// Leaps at any height advantage
    Jumper,
    /// Support caster: screams to aggro the pack, drops reinforcements
    Screamer,
}

impl ZombieKind {
    pub const ALL: [ZombieKind; 5] = [
        ZombieKind::Walker,
        ZombieKind::Runner,
        ZombieKind::Tank,
        ZombieKind::Jumper,
        ZombieKind::Screamer,
    ];

    pub fn spec(self) -> &'static ZombieSpec {
        match self {
            ZombieKind::Walker => &WALKER,
            ZombieKind::Runner => &RUNNER,
            ZombieKind::Tank => &TANK,
            ZombieKind::Jumper => &JUMPER,
            ZombieKind::Screamer => &SCREAMER,
        }
    }

    /// Extra score on top of the base kill reward
    pub fn score_bonus(self) -> u64 {
        match self {
            ZombieKind::Tank => SCORE_TANK_BONUS,
            ZombieKind::Screamer => SCORE_SCREAMER_BONUS,
            _ => 0,
        }
    }
}

/// Per-type stat block
#[derive(Debug, Clone)]
pub struct ZombieSpec {
    pub w: f32,
    pub h: f32,
    pub health: i32,
    /// Horizontal speed while aggroed; patrol moves at half this
    pub speed: f32,
    pub color: u32,
}

static WALKER: ZombieSpec = ZombieSpec { w: 40.0, h: 60.0, health: 30, speed: 2.0, color: 0x22c55e };
static RUNNER: ZombieSpec = ZombieSpec { w: 35.0, h: 55.0, health: 15, speed: 5.0, color: 0xf97316 };
static TANK: ZombieSpec = ZombieSpec { w: 60.0, h: 90.0, health: 100, speed: 1.0, color: 0x9333ea };
static JUMPER: ZombieSpec = ZombieSpec { w: 30.0, h: 50.0, health: 20, speed: 3.0, color: 0x06b6d4 };
static SCREAMER: ZombieSpec = ZombieSpec { w: 30.0, h: 55.0, health: 25, speed: 4.0, color: 0xdb2777 };

/// Run the full AI and combat pass.
///
/// Zombies killed last tick are dropped here, so a corpse stays visible in
/// the entity list for exactly one tick after death.
pub(crate) fn step_zombies(world: &mut WorldState) {
    world.zombies.retain(|z| !z.is_dead);
    let count = world.zombies.len();
    for i in 0..count {
        let sep_vx = separation_push(&world.zombies, i);
        let can_see = perceive(world, i);
        step_screamer(world, i);
        steer(world, i, sep_vx, can_see);
        step_physics(world, i, can_see);
        step_projectile_hits(world, i);
        step_player_contact(world, i);
    }
}

/// Airdrop a reinforcement near a point, pre-aggroed toward it.
/// 30% Runner, 70% Walker.
pub(crate) fn spawn_zombie_near(world: &mut WorldState, target_x: f32, target_y: f32) {
    let kind = if world.rng.random::<f32>() > 0.7 { ZombieKind::Runner } else { ZombieKind::Walker };
    let offset_x = if world.rng.random_bool(0.5) { 100.0 } else { -100.0 };
    let mut zombie = Zombie::spawned(kind, target_x + offset_x, target_y - 100.0, offset_x < 0.0, target_x);
    zombie.patrol_center = target_x;
    world.zombies.push(zombie);
    world.push_event(GameEvent::Summoned(kind));
}

/// Lateral push away from packed neighbours on roughly the same level
fn separation_push(zombies: &[Zombie], i: usize) -> f32 {
    let z = &zombies[i];
    let mut sep = 0.0;
    for (j, other) in zombies.iter().enumerate() {
        if j == i || (z.rect.y - other.rect.y).abs() > 50.0 {
            continue;
        }
        let dist = z.rect.x - other.rect.x;
        let min_dist = (z.rect.w + other.rect.w) / 2.0 * 0.9;
        if dist.abs() < min_dist {
            sep += if dist > 0.0 { 0.3 } else { -0.3 };
        }
    }
    sep
}

/// Line of sight is a radius with a vertical band, no occlusion. Losing
/// sight starts the search countdown toward the last known position.
fn perceive(world: &mut WorldState, i: usize) -> bool {
    let (px, py) = (world.player.rect.x, world.player.rect.y);
    let z = &mut world.zombies[i];
    let dx = px - z.rect.x;
    let dy = py - z.rect.y;
    let can_see = (dx * dx + dy * dy).sqrt() < SIGHT_RADIUS && dy.abs() < SIGHT_BAND;
    if can_see {
        z.aggro = true;
        z.search_timer = SEARCH_TICKS;
        z.last_known_x = px;
    } else if z.aggro {
        z.search_timer = z.search_timer.saturating_sub(1);
        if z.search_timer == 0 {
            z.aggro = false;
        }
    }
    can_see
}

fn step_screamer(world: &mut WorldState, i: usize) {
    if world.zombies[i].kind != ZombieKind::Screamer || !world.zombies[i].aggro {
        return;
    }

    let summon_now = {
        let z = &mut world.zombies[i];
        z.summon_timer = z.summon_timer.saturating_sub(1);
        z.summon_timer == 0
    };
    if summon_now {
        let (zx, zy, cx, ty) = {
            let z = &mut world.zombies[i];
            z.summon_timer = SUMMON_CADENCE;
            (z.rect.x, z.rect.y, z.rect.center_x(), z.rect.y)
        };
        spawn_zombie_near(world, zx, zy);
        world.spawn_particles(cx, ty, color::PINK, 5);
    }

    let scream_now = {
        let z = &mut world.zombies[i];
        if z.attack_timer > 0 {
            z.attack_timer -= 1;
            false
        } else {
            z.attack_timer = SCREAM_COOLDOWN;
            true
        }
    };
    if scream_now {
        let (sx, sy) = (world.zombies[i].rect.x, world.zombies[i].rect.y);
        let (cx, cy) = (world.zombies[i].rect.center_x(), world.zombies[i].rect.center_y());
        world.spawn_particles(cx, cy, color::PINK, 20);
        world.push_event(GameEvent::Scream);
        for j in 0..world.zombies.len() {
            if j == i {
                continue;
            }
            let other = &mut world.zombies[j];
            let dx = other.rect.x - sx;
            let dy = other.rect.y - sy;
            if (dx * dx + dy * dy).sqrt() < SCREAM_RADIUS {
                other.aggro = true;
                other.search_timer = SEARCH_TICKS;
                other.last_known_x = sx;
            }
        }
    }
}

/// Pick this tick's horizontal velocity: pursue while aggroed, otherwise
/// patrol around the anchor at half speed.
fn steer(world: &mut WorldState, i: usize, sep_vx: f32, can_see: bool) {
    let px = world.player.rect.x;
    let idle = {
        let z = &world.zombies[i];
        !z.aggro && z.vx.abs() < 0.1
    };
    // A stalled patroller gets kicked in a random direction
    let kick = if idle {
        Some(if world.rng.random_bool(0.5) { 1.0 } else { -1.0 })
    } else {
        None
    };

    let z = &mut world.zombies[i];
    let speed = z.kind.spec().speed;
    let target_vx;
    if z.aggro {
        let target_x = if can_see { px } else { z.last_known_x };
        let dir = if target_x > z.rect.x { 1.0 } else { -1.0 };
        if !can_see && (target_x - z.rect.x).abs() < 10.0 {
            // Arrived at the last known position; stand and search
            target_vx = 0.0;
        } else {
            target_vx = dir * speed;
            z.facing_right = dir > 0.0;
        }
    } else {
        if let Some(kick) = kick {
            z.vx = kick;
        }
        let mut patrol_vx = if z.vx > 0.0 { speed * 0.5 } else { -speed * 0.5 };
        if z.rect.x > z.patrol_center + z.patrol_range {
            patrol_vx = -patrol_vx.abs();
        }
        if z.rect.x < z.patrol_center - z.patrol_range {
            patrol_vx = patrol_vx.abs();
        }
        z.facing_right = patrol_vx > 0.0;
        target_vx = patrol_vx;
    }
    z.vx = target_vx + sep_vx;
}

/// Environmental sensing, jump/reverse decisions, then movement and
/// platform resolution. Zombies treat every platform as solid, goal
/// included; falling movers land, lateral penetration undoes the X move.
fn step_physics(world: &mut WorldState, i: usize, can_see: bool) {
    let (px, py) = (world.player.rect.x, world.player.rect.y);
    let z = &mut world.zombies[i];
    let platforms = &world.platforms;

    // Probe one step ahead of the feet and a slab ahead of the torso
    let look_x = z.rect.x + if z.facing_right { z.rect.w + 10.0 } else { -10.0 };
    let look_y = z.rect.bottom() + 2.0;
    let mut ground_ahead = false;
    let mut wall_ahead = false;
    for plat in platforms {
        if look_x >= plat.rect.x && look_x <= plat.rect.right() && (look_y - plat.rect.y).abs() < 20.0 {
            ground_ahead = true;
        }
        if matches!(plat.kind, PlatformKind::Obstacle | PlatformKind::Platform) {
            let probe = Rect::new(look_x, z.rect.y + 10.0, 5.0, z.rect.h - 20.0);
            if collision::overlaps(&probe, &plat.rect) {
                wall_ahead = true;
            }
        }
    }

    if z.is_grounded {
        if z.aggro {
            let mut should_jump = false;
            let is_tank = z.kind == ZombieKind::Tank;
            if wall_ahead && !is_tank {
                should_jump = true;
            }
            if !ground_ahead && !is_tank {
                // Lunge across the gap
                should_jump = true;
                z.vx *= 1.5;
            }
            if can_see && py < z.rect.y - 60.0 && (px - z.rect.x).abs() < 150.0 {
                should_jump = true;
            }
            if z.kind == ZombieKind::Jumper && py < z.rect.y - 50.0 {
                should_jump = true;
            }
            if should_jump {
                z.vy = AI_JUMP_FORCE;
                z.is_grounded = false;
            }
        } else if !ground_ahead || wall_ahead {
            // Patrol edge: turn around and step off the trigger
            z.vx = -z.vx;
            z.rect.x += z.vx * 2.0;
        }
    }

    z.vy += GRAVITY;
    z.rect.x += z.vx;
    z.rect.y += z.vy;

    let mut grounded = false;
    for plat in platforms {
        if collision::overlaps(&z.rect, &plat.rect) {
            if z.vy > 0.0 {
                z.rect.y = plat.rect.y - z.rect.h;
                z.vy = 0.0;
                grounded = true;
            } else if z.vx != 0.0 {
                z.rect.x -= z.vx;
                z.vx = 0.0;
            }
        }
    }
    z.is_grounded = grounded;
}

/// First live projectile overlapping the zombie hits; a hit always aggros
/// toward the shooter. Tanks take a tenth of the knockback.
fn step_projectile_hits(world: &mut WorldState, i: usize) {
    for pi in 0..world.projectiles.len() {
        if world.zombies[i].is_dead {
            return;
        }
        let hit = {
            let p = &world.projectiles[pi];
            p.life > 0 && collision::overlaps(&p.rect, &world.zombies[i].rect)
        };
        if !hit {
            continue;
        }
        let player_x = world.player.rect.x;
        let (damage, pvx) = {
            let p = &mut world.projectiles[pi];
            p.life = 0;
            (p.damage, p.vx)
        };
        let (died, kind, cx, cy) = {
            let z = &mut world.zombies[i];
            z.health -= damage;
            let mut knockback = if pvx > 0.0 { 5.0 } else { -5.0 };
            if z.kind == ZombieKind::Tank {
                knockback *= 0.1;
            }
            z.vx = knockback;
            z.vy = -2.0;
            z.aggro = true;
            z.search_timer = SEARCH_TICKS;
            z.last_known_x = player_x;
            let died = z.health <= 0;
            if died {
                z.health = 0;
                z.is_dead = true;
            }
            (died, z.kind, z.rect.center_x(), z.rect.center_y())
        };
        world.spawn_particles(cx, cy, kind.spec().color, 3);
        world.push_event(GameEvent::ZombieHit(kind));
        if died {
            world.add_score(SCORE_KILL + kind.score_bonus());
            world.spawn_particles(cx, cy, color::RED, 15);
            world.push_event(GameEvent::ZombieDied(kind));
        }
    }
}

/// Body contact: a dashing player bowls zombies over (Tanks reflect the
/// dash instead); otherwise the zombie bites, gated by invincibility.
fn step_player_contact(world: &mut WorldState, i: usize) {
    let touching = {
        let z = &world.zombies[i];
        !z.is_dead && collision::overlaps(&world.player.rect, &z.rect)
    };
    if !touching {
        return;
    }

    if world.player.is_dashing {
        let facing = world.player.facing_right;
        if world.zombies[i].kind == ZombieKind::Tank {
            {
                let p = &mut world.player;
                p.is_dashing = false;
                p.vx = if facing { -10.0 } else { 10.0 };
                p.vy = -5.0;
            }
            world.zombies[i].vx = if facing { 5.0 } else { -5.0 };
            let (cx, cy) = (world.player.rect.center_x(), world.player.rect.center_y());
            world.spawn_particles(cx, cy, color::WHITE, 10);
            world.push_event(GameEvent::DashReflected);
        } else {
            let (died, kind, cx, cy) = {
                let z = &mut world.zombies[i];
                z.health -= 50;
                z.vx = if facing { 15.0 } else { -15.0 };
                z.vy = -5.0;
                let died = z.health <= 0;
                if died {
                    z.health = 0;
                    z.is_dead = true;
                }
                (died, z.kind, z.rect.center_x(), z.rect.center_y())
            };
            world.spawn_particles(cx, cy, color::RED, 15);
            world.push_event(GameEvent::ZombieHit(kind));
            if died {
                let bonus = if kind == ZombieKind::Screamer { SCORE_SCREAMER_BONUS } else { 0 };
                world.add_score(SCORE_KILL + bonus);
                world.push_event(GameEvent::ZombieDied(kind));
            }
        }
        return;
    }

    // Shallow overlaps push the player out so bodies do not interpenetrate
    {
        let p = &mut world.player;
        let z = &mut world.zombies[i];
        let dx = p.rect.center_x() - z.rect.center_x();
        let overlap_x = (p.rect.w + z.rect.w) / 2.0 - dx.abs();
        if overlap_x > 0.0 && overlap_x < 30.0 {
            if dx > 0.0 {
                p.rect.x += overlap_x;
            } else {
                p.rect.x -= overlap_x;
            }
            p.vx = 0.0;
            z.vx = 0.0;
        }
    }

    if world.player.invincible_timer == 0 {
        let zombie_x = world.zombies[i].rect.x;
        let remaining = {
            let p = &mut world.player;
            p.health = (p.health - 1).max(0);
            p.invincible_timer = INVINCIBLE_TICKS;
            p.vy = -8.0;
            p.vx = if p.rect.x < zombie_x { -12.0 } else { 12.0 };
            p.health
        };
        let (cx, cy) = (world.player.rect.center_x(), world.player.rect.center_y());
        world.spawn_particles(cx, cy, color::RED, 10);
        world.push_event(GameEvent::PlayerDamaged { remaining });
    }
}
