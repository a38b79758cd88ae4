//! The fixed-timestep tick
//!
//! One call advances the world by exactly one logic step. Order matters and
//! is fixed: horde director, player, projectiles, collectibles, zombies,
//! death check, particles, camera. Two inputs, a world and a seed produce
//! bit-identical histories on every platform.

use rand::Rng;

use super::collision;
use super::events::{GameEvent, PickupKind};
use super::player;
use super::state::{CollectibleKind, GameStatus, InputFrame, WorldState, Zombie, color};
use super::zombies::{self, ZombieKind};
use crate::consts::*;

/// Advance the simulation by one tick.
///
/// No-op unless the world is Playing, except that the previous input frame
/// is always recorded so edge detection stays correct across a pause.
pub fn tick(world: &mut WorldState, input: &InputFrame) {
    let edges = input.edges_since(&world.prev_input);
    world.prev_input = *input;

    if world.status != GameStatus::Playing {
        return;
    }
    if edges.pause {
        world.pause();
        return;
    }
    world.time_ticks += 1;

    // Horde director
    if world.horde_timer > 0 {
        world.horde_timer -= 1;
        if world.horde_timer == 0 {
            spawn_horde(world, false);
            world.horde_timer = HORDE_INTERVAL;
        }
    }
    if world.horde_warning_timer > 0 {
        world.horde_warning_timer -= 1;
    }

    player::step_player(world, input, &edges);
    if world.status != GameStatus::Playing {
        // Goal contact ends the tick mid-flight
        return;
    }

    step_projectiles(world);
    step_collectibles(world);
    zombies::step_zombies(world);

    if world.player.health <= 0 && !world.player.is_dead {
        world.player.is_dead = true;
        world.set_status(GameStatus::GameOver);
    }

    step_particles(world);
    step_camera(world);
}

/// Spawn a wave just off both screen edges, pre-aggroed onto the player.
///
/// The periodic director calls this with `mini == false`; the mini variant
/// is a host hook (scripted encounters, difficulty mutators) and does not
/// touch the periodic timer.
pub fn spawn_horde(world: &mut WorldState, mini: bool) {
    world.horde_warning_timer = HORDE_WARNING_TICKS;
    let count = if mini { MINI_HORDE_SIZE } else { HORDE_SIZE };
    world.push_event(GameEvent::HordeIncoming { count });

    let player_x = world.player.rect.x;
    let spawn_points = [world.camera_x - 50.0, world.camera_x + VIEW_WIDTH + 50.0];
    for _ in 0..count {
        let base = spawn_points[world.rng.random_range(0..spawn_points.len())];
        let spawn_x = base + world.rng.random_range(-100.0..100.0);
        let kind = if world.rng.random::<f32>() > 0.7 { ZombieKind::Runner } else { ZombieKind::Walker };
        world
            .zombies
            .push(Zombie::spawned(kind, spawn_x, FLOOR_Y - 100.0, spawn_x < player_x, player_x));
    }
    log::debug!("horde spawned: count={count} mini={mini}");
}

fn step_projectiles(world: &mut WorldState) {
    for p in &mut world.projectiles {
        p.rect.x += p.vx;
        p.life = p.life.saturating_sub(1);
    }
    world
        .projectiles
        .retain(|p| p.life > 0 && p.rect.x > -100.0 && p.rect.x < WORLD_WIDTH + 100.0);
}

fn step_collectibles(world: &mut WorldState) {
    for ci in 0..world.collectibles.len() {
        let (kind, rect, collected) = {
            let c = &world.collectibles[ci];
            (c.kind, c.rect, c.collected)
        };
        if collected || !collision::overlaps(&world.player.rect, &rect) {
            continue;
        }
        let (px, py) = (world.player.rect.center_x(), world.player.rect.y);

        let consumed = match kind {
            CollectibleKind::Medkit => {
                if world.player.health < world.player.max_health {
                    world.player.health += 1;
                    world.spawn_particles(px, py, color::RED, 10);
                    world.push_event(GameEvent::PickupCollected(PickupKind::Medkit));
                    true
                } else if world.player.medkits < MAX_MEDKITS {
                    world.player.medkits += 1;
                    world.spawn_particles(px, py, color::BLUE, 10);
                    world.push_event(GameEvent::PickupCollected(PickupKind::Medkit));
                    true
                } else {
                    // Full health and full pouch: leave it on the ground
                    false
                }
            }
            CollectibleKind::Weapon(weapon) => {
                let spec = weapon.spec();
                let idx = weapon.index();
                let owned = world.player.weapons.contains(&weapon);
                {
                    let p = &mut world.player;
                    p.ammo_reserve[idx] = (p.ammo_reserve[idx] + spec.pickup_ammo).min(spec.max_ammo);
                }
                if owned {
                    world.add_score(SCORE_DUPLICATE_WEAPON);
                    world.push_event(GameEvent::PickupCollected(PickupKind::WeaponAmmo(weapon)));
                } else {
                    let p = &mut world.player;
                    p.ammo_clip[idx] = spec.clip_size;
                    if p.weapons.len() < MAX_WEAPONS {
                        p.weapons.push(weapon);
                        p.current_weapon_index = p.weapons.len() - 1;
                    } else {
                        // Replace the held weapon; any reload in flight dies
                        // with it
                        p.weapons[p.current_weapon_index] = weapon;
                        p.is_reloading = false;
                        p.reload_timer = 0;
                    }
                    world.spawn_particles(px, py, color::AMBER, 15);
                    world.add_score(SCORE_NEW_WEAPON);
                    world.push_event(GameEvent::PickupCollected(PickupKind::NewWeapon(weapon)));
                }
                true
            }
            CollectibleKind::Ammo(weapon) => {
                let spec = weapon.spec();
                {
                    let p = &mut world.player;
                    p.ammo_reserve[weapon.index()] =
                        (p.ammo_reserve[weapon.index()] + spec.pickup_ammo).min(spec.max_ammo);
                }
                world.spawn_particles(px, py, color::EMERALD, 8);
                world.push_event(GameEvent::PickupCollected(PickupKind::Ammo(weapon)));
                true
            }
        };
        if consumed {
            world.collectibles[ci].collected = true;
        }
    }
}

fn step_particles(world: &mut WorldState) {
    for p in &mut world.particles {
        p.pos += p.vel;
        p.life -= 0.05;
    }
    world.particles.retain(|p| p.life > 0.0);
}

/// Smooth follow keeping the player a third in from the left edge
fn step_camera(world: &mut WorldState) {
    let target = world.player.rect.x - VIEW_WIDTH / 3.0;
    world.camera_x += (target - world.camera_x) * CAMERA_LERP;
    world.camera_x = world.camera_x.clamp(0.0, WORLD_WIDTH - VIEW_WIDTH);
}
