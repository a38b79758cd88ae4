//! Player locomotion and combat controller
//!
//! Movement modes are evaluated in fixed priority order each tick:
//! dash > slide > normal, with wall-slide derived from contact state after
//! the horizontal collision pass. Weapon handling sits between input and
//! physics so a shot fired this tick flies from this tick's position.

use super::collision;
use super::events::GameEvent;
use super::state::{
    GameStatus, InputEdges, InputFrame, PlatformKind, Projectile, Rect, WorldState, color,
};
use crate::consts::*;

/// Advance the player by one tick. May transition status to Victory (goal
/// contact), in which case the caller must end the tick immediately.
pub(crate) fn step_player(world: &mut WorldState, input: &InputFrame, edges: &InputEdges) {
    // Captured once; a same-tick weapon switch takes effect next tick.
    let weapon = world.player.current_weapon();
    let spec = weapon.spec();

    // --- Dash ---
    if world.player.dash_cooldown > 0 {
        world.player.dash_cooldown -= 1;
    }
    if edges.dash && world.player.dash_cooldown == 0 && !world.player.is_dashing {
        let p = &mut world.player;
        p.is_dashing = true;
        p.is_sliding = false;
        p.dash_timer = DASH_DURATION;
        p.dash_cooldown = DASH_COOLDOWN;
        p.vx = if p.facing_right { DASH_SPEED } else { -DASH_SPEED };
        p.vy = 0.0;
        let (cx, cy) = (p.rect.center_x(), p.rect.center_y());
        world.spawn_particles(cx, cy, color::CYAN, 15);
        world.push_event(GameEvent::Dashed);
    }

    // --- Slide ---
    if edges.crouch
        && world.player.is_grounded
        && !world.player.is_sliding
        && !world.player.is_dashing
        && world.player.vx.abs() > 1.0
    {
        let p = &mut world.player;
        p.is_sliding = true;
        p.slide_timer = SLIDE_DURATION;
        p.vx = if p.facing_right { SLIDE_SPEED } else { -SLIDE_SPEED };
        let (cx, by) = (p.rect.center_x(), p.rect.bottom());
        world.spawn_particles(cx, by, color::WHITE, 5);
        world.push_event(GameEvent::SlideStarted);
    }

    if world.player.is_sliding {
        let p = &mut world.player;
        p.slide_timer = p.slide_timer.saturating_sub(1);
        p.vx *= 0.96;
        if p.slide_timer == 0 || p.vx.abs() < 1.0 {
            p.is_sliding = false;
        }
    }

    if world.player.is_dashing {
        let p = &mut world.player;
        p.dash_timer = p.dash_timer.saturating_sub(1);
        p.vy = 0.0;
        if p.dash_timer == 0 {
            p.is_dashing = false;
            p.vx *= 0.5;
        }
        let trail_x = if p.facing_right { p.rect.x } else { p.rect.right() };
        let trail_y = p.rect.center_y();
        world.spawn_particles(trail_x, trail_y, color::CYAN, 1);
    }

    // --- Normal movement ---
    if !world.player.is_sliding && !world.player.is_dashing {
        let p = &mut world.player;
        let dir = if input.left {
            -1.0
        } else if input.right {
            1.0
        } else {
            0.0
        };
        if dir != 0.0 {
            let accel = if p.is_grounded { ACCELERATION } else { AIR_ACCELERATION };
            p.vx += dir * accel;
            p.facing_right = dir > 0.0;
        } else {
            let friction = if p.is_grounded { FRICTION } else { AIR_FRICTION };
            p.vx *= friction;
            if p.vx.abs() < 0.1 {
                p.vx = 0.0;
            }
        }
        p.vx = p.vx.clamp(-MOVE_SPEED, MOVE_SPEED);
    }

    // --- Jumping ---
    if !world.player.is_dashing && edges.jump {
        if world.player.is_wall_sliding && !world.player.is_grounded {
            let p = &mut world.player;
            p.vy = WALL_JUMP_FORCE_Y;
            p.vx = -f32::from(p.wall_dir) * WALL_JUMP_FORCE_X;
            p.is_wall_sliding = false;
            p.facing_right = p.wall_dir < 0;
            let spark_x = if p.wall_dir == 1 { p.rect.right() } else { p.rect.x };
            let spark_y = p.rect.center_y();
            world.spawn_particles(spark_x, spark_y, color::WHITE, 8);
            world.push_event(GameEvent::WallJumped);
        } else if world.player.jumps_remaining > 0 {
            let p = &mut world.player;
            p.vy = JUMP_FORCE;
            p.jumps_remaining -= 1;
            p.is_grounded = false;
            p.is_sliding = false;
            let (cx, by) = (p.rect.center_x(), p.rect.bottom());
            world.spawn_particles(cx, by, color::WHITE, 5);
            world.push_event(GameEvent::Jumped);
        }
    }

    // --- Weapon switch (cyclic, blocked mid-reload) ---
    if edges.switch_weapon && world.player.weapons.len() > 1 && !world.player.is_reloading {
        let p = &mut world.player;
        p.current_weapon_index = (p.current_weapon_index + 1) % p.weapons.len();
        let switched_to = p.current_weapon();
        world.push_event(GameEvent::WeaponSwitched(switched_to));
    }

    // --- Medkit ---
    if edges.medkit && world.player.medkits > 0 && world.player.health < world.player.max_health {
        let p = &mut world.player;
        p.medkits -= 1;
        p.health += 1;
        let (cx, ty) = (p.rect.center_x(), p.rect.y);
        world.spawn_particles(cx, ty, color::RED, 10);
        world.push_event(GameEvent::MedkitUsed);
    }

    // --- Manual reload ---
    if edges.reload && !world.player.is_reloading && !weapon.is_infinite() {
        let can_reload = world.player.clip(weapon) < spec.clip_size && world.player.reserve(weapon) > 0;
        if can_reload {
            let p = &mut world.player;
            p.is_reloading = true;
            p.reload_timer = spec.reload_duration;
            world.push_event(GameEvent::ReloadStarted(weapon));
        }
    }

    if world.player.is_reloading {
        let p = &mut world.player;
        p.reload_timer = p.reload_timer.saturating_sub(1);
        if p.reload_timer == 0 {
            p.is_reloading = false;
            let idx = weapon.index();
            let transfer = (spec.clip_size - p.ammo_clip[idx]).min(p.ammo_reserve[idx]);
            p.ammo_clip[idx] += transfer;
            p.ammo_reserve[idx] -= transfer;
            world.push_event(GameEvent::ReloadFinished(weapon));
        }
    }

    // --- Fire (hold, gated by cooldown and movement state) ---
    if input.fire
        && world.player.attack_cooldown == 0
        && !world.player.is_wall_sliding
        && !world.player.is_sliding
        && !world.player.is_dashing
        && !world.player.is_reloading
    {
        let has_ammo = weapon.is_infinite() || world.player.clip(weapon) > 0;
        if has_ammo {
            let p = &mut world.player;
            p.attack_cooldown = spec.cooldown;
            if !weapon.is_infinite() {
                p.ammo_clip[weapon.index()] -= 1;
            }
            let muzzle_x = if p.facing_right { p.rect.right() } else { p.rect.x - 10.0 };
            let muzzle_y = p.rect.y + 35.0;
            let vx = if p.facing_right { spec.bullet_speed } else { -spec.bullet_speed };
            // Air recoil
            if !p.is_grounded {
                p.vx += if p.facing_right { -1.0 } else { 1.0 };
            }
            world.projectiles.push(Projectile {
                rect: Rect::new(muzzle_x, muzzle_y, spec.bullet_size * 2.0, spec.bullet_size),
                vx,
                damage: spec.damage,
                life: PROJECTILE_LIFE,
                color: color::AMBER,
            });
            world.push_event(GameEvent::WeaponFired(weapon));
        } else {
            world.player.attack_cooldown = DRY_FIRE_TICKS;
            world.push_event(GameEvent::DryFire);
            // Empty clip with rounds banked starts a reload automatically
            if world.player.reserve(weapon) > 0 {
                let p = &mut world.player;
                p.is_reloading = true;
                p.reload_timer = spec.reload_duration;
                world.push_event(GameEvent::ReloadStarted(weapon));
            }
        }
    }

    // --- Physics: X then Y ---
    {
        let p = &mut world.player;
        p.rect.x += p.vx;
        p.wall_dir = collision::resolve_horizontal(&mut p.rect, &mut p.vx, &world.platforms);
        if p.wall_dir != 0 {
            // Wall contact cancels a dash into a clinging stop
            p.is_dashing = false;
            p.is_sliding = false;
        }
    }

    if !world.player.is_dashing {
        world.player.vy += GRAVITY;
    }

    {
        let p = &mut world.player;
        p.is_wall_sliding = false;
        if p.wall_dir != 0 && !p.is_grounded && p.vy > 0.0 && !p.is_dashing {
            p.is_wall_sliding = true;
            if p.vy > WALL_SLIDE_SPEED {
                p.vy = WALL_SLIDE_SPEED;
            }
        }
        if p.vy > TERMINAL_VELOCITY {
            p.vy = TERMINAL_VELOCITY;
        }
    }

    let hit = {
        let p = &mut world.player;
        p.rect.y += p.vy;
        p.is_grounded = false;
        collision::resolve_vertical(&mut p.rect, &mut p.vy, &world.platforms)
    };

    if hit.touched_goal {
        world.set_status(GameStatus::Victory);
        return;
    }

    if let Some(kind) = hit.landed_on {
        let p = &mut world.player;
        p.is_grounded = true;
        p.jumps_remaining = MAX_JUMPS;
        p.is_wall_sliding = false;
        // Only honest ground counts as a checkpoint
        if matches!(kind, PlatformKind::Ground | PlatformKind::Platform) {
            p.last_safe_x = p.rect.x;
            p.last_safe_y = p.rect.y;
        }
    }

    // --- Void fall ---
    if world.player.rect.y > VOID_Y {
        world.push_event(GameEvent::VoidFall);
        if world.player.health > 1 {
            let p = &mut world.player;
            p.health -= 1;
            p.rect.x = p.last_safe_x;
            p.rect.y = p.last_safe_y - 50.0;
            p.vx = 0.0;
            p.vy = 0.0;
            p.invincible_timer = INVINCIBLE_TICKS;
            let remaining = p.health;
            let (cx, cy) = (p.rect.center_x(), p.rect.y);
            world.spawn_particles(cx, cy, color::RED, 50);
            world.push_event(GameEvent::PlayerDamaged { remaining });
        } else {
            // Lethal fall: no teleport, death handled by the terminal check
            world.player.health = 0;
        }
    }

    let p = &mut world.player;
    if p.attack_cooldown > 0 {
        p.attack_cooldown -= 1;
    }
    if p.invincible_timer > 0 {
        p.invincible_timer -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{LevelData, ZombieSpawn};
    use crate::sim::weapons::WeaponKind;

    /// Flat ground from x=0..2000 with a wall at x=1000
    fn test_level() -> LevelData {
        LevelData {
            player_start: (100.0, FLOOR_Y - 100.0),
            platforms: vec![
                crate::sim::Platform {
                    rect: Rect::new(0.0, FLOOR_Y, 2000.0, 200.0),
                    kind: PlatformKind::Ground,
                },
                crate::sim::Platform {
                    rect: Rect::new(1000.0, FLOOR_Y - 300.0, 20.0, 300.0),
                    kind: PlatformKind::Obstacle,
                },
            ],
            zombie_spawns: Vec::<ZombieSpawn>::new(),
            collectibles: Vec::new(),
        }
    }

    fn playing_world() -> WorldState {
        let mut world = WorldState::new(&test_level(), 7);
        world.start();
        world.drain_events();
        world
    }

    fn settle(world: &mut WorldState) {
        // Let the player land and come to rest
        for _ in 0..30 {
            step_player(world, &InputFrame::default(), &InputEdges::default());
        }
        assert!(world.player.is_grounded);
    }

    fn edge(f: impl Fn(&mut InputEdges)) -> InputEdges {
        let mut edges = InputEdges::default();
        f(&mut edges);
        edges
    }

    #[test]
    fn test_double_jump_budget() {
        let mut world = playing_world();
        settle(&mut world);

        let jump = edge(|e| e.jump = true);
        step_player(&mut world, &InputFrame::default(), &jump);
        assert!(world.player.vy < 0.0);
        assert_eq!(world.player.jumps_remaining, MAX_JUMPS - 1);

        step_player(&mut world, &InputFrame::default(), &jump);
        assert_eq!(world.player.jumps_remaining, 0);

        // Third press in the air is ignored
        let vy_before = world.player.vy;
        step_player(&mut world, &InputFrame::default(), &jump);
        assert!(world.player.vy >= vy_before, "no third jump impulse");
    }

    #[test]
    fn test_jump_budget_resets_on_landing() {
        let mut world = playing_world();
        settle(&mut world);
        let jump = edge(|e| e.jump = true);
        step_player(&mut world, &InputFrame::default(), &jump);
        for _ in 0..120 {
            step_player(&mut world, &InputFrame::default(), &InputEdges::default());
            if world.player.is_grounded {
                break;
            }
        }
        assert!(world.player.is_grounded);
        assert_eq!(world.player.jumps_remaining, MAX_JUMPS);
    }

    #[test]
    fn test_dash_suspends_gravity_and_cools_down() {
        let mut world = playing_world();
        settle(&mut world);

        let dash = edge(|e| e.dash = true);
        step_player(&mut world, &InputFrame::default(), &dash);
        assert!(world.player.is_dashing);
        assert_eq!(world.player.vy, 0.0);
        assert_eq!(world.player.dash_cooldown, DASH_COOLDOWN);

        // A second dash press mid-cooldown is ignored
        for _ in 0..DASH_DURATION {
            step_player(&mut world, &InputFrame::default(), &InputEdges::default());
        }
        assert!(!world.player.is_dashing);
        step_player(&mut world, &InputFrame::default(), &dash);
        assert!(!world.player.is_dashing);
    }

    #[test]
    fn test_dash_cancelled_by_wall() {
        let mut world = playing_world();
        settle(&mut world);
        world.player.rect.x = 950.0;
        world.player.facing_right = true;

        let dash = edge(|e| e.dash = true);
        step_player(&mut world, &InputFrame::default(), &dash);
        // 950 + 40 + 20 of travel reaches the wall at x=1000 within a tick
        assert!(!world.player.is_dashing, "wall contact cancels the dash");
        assert_eq!(world.player.vx, 0.0);
        assert_eq!(world.player.rect.x, 960.0);
    }

    #[test]
    fn test_slide_requires_speed() {
        let mut world = playing_world();
        settle(&mut world);
        world.player.vx = 0.0;

        let crouch = edge(|e| e.crouch = true);
        step_player(&mut world, &InputFrame::default(), &crouch);
        assert!(!world.player.is_sliding, "stationary crouch does not slide");

        world.player.vx = 5.0;
        step_player(&mut world, &InputFrame::default(), &crouch);
        assert!(world.player.is_sliding);
    }

    #[test]
    fn test_fire_decrements_clip_not_for_pistol() {
        let mut world = playing_world();
        settle(&mut world);
        let fire = InputFrame { fire: true, ..Default::default() };

        let clip_before = world.player.clip(WeaponKind::Pistol);
        step_player(&mut world, &fire, &InputEdges::default());
        assert_eq!(world.projectiles.len(), 1);
        assert_eq!(world.player.clip(WeaponKind::Pistol), clip_before);

        world.player.weapons.push(WeaponKind::Smg);
        world.player.current_weapon_index = 1;
        world.player.attack_cooldown = 0;
        step_player(&mut world, &fire, &InputEdges::default());
        assert_eq!(world.projectiles.len(), 2);
        assert_eq!(
            world.player.clip(WeaponKind::Smg),
            WeaponKind::Smg.spec().clip_size - 1
        );
    }

    #[test]
    fn test_smg_reload_conserves_ammo() {
        let mut world = playing_world();
        settle(&mut world);
        world.player.weapons.push(WeaponKind::Smg);
        world.player.current_weapon_index = 1;
        world.player.ammo_clip[WeaponKind::Smg.index()] = 0;
        assert_eq!(world.player.reserve(WeaponKind::Smg), 60);

        let reload = edge(|e| e.reload = true);
        step_player(&mut world, &InputFrame::default(), &reload);
        assert!(world.player.is_reloading);

        let duration = WeaponKind::Smg.spec().reload_duration;
        for i in 0..duration {
            // No ammo moves on any earlier tick
            if i < duration - 1 {
                assert_eq!(world.player.clip(WeaponKind::Smg), 0, "tick {i}");
            }
            step_player(&mut world, &InputFrame::default(), &InputEdges::default());
        }
        assert!(!world.player.is_reloading);
        assert_eq!(world.player.clip(WeaponKind::Smg), 30);
        assert_eq!(world.player.reserve(WeaponKind::Smg), 30);
    }

    #[test]
    fn test_reload_noop_with_full_clip() {
        let mut world = playing_world();
        settle(&mut world);
        world.player.weapons.push(WeaponKind::Shotgun);
        world.player.current_weapon_index = 1;

        let reload = edge(|e| e.reload = true);
        step_player(&mut world, &InputFrame::default(), &reload);
        assert!(!world.player.is_reloading);
    }

    #[test]
    fn test_empty_clip_dry_fires_and_auto_reloads() {
        let mut world = playing_world();
        settle(&mut world);
        world.player.weapons.push(WeaponKind::Shotgun);
        world.player.current_weapon_index = 1;
        world.player.ammo_clip[WeaponKind::Shotgun.index()] = 0;

        let fire = InputFrame { fire: true, ..Default::default() };
        step_player(&mut world, &fire, &InputEdges::default());
        assert!(world.projectiles.is_empty());
        assert_eq!(world.player.attack_cooldown, DRY_FIRE_TICKS - 1);
        assert!(world.player.is_reloading, "reserve ammo starts auto-reload");
    }

    #[test]
    fn test_fire_suppressed_while_reloading() {
        let mut world = playing_world();
        settle(&mut world);
        world.player.weapons.push(WeaponKind::Smg);
        world.player.current_weapon_index = 1;
        world.player.ammo_clip[WeaponKind::Smg.index()] = 10;
        world.player.is_reloading = true;
        world.player.reload_timer = 30;

        let fire = InputFrame { fire: true, ..Default::default() };
        step_player(&mut world, &fire, &InputEdges::default());
        assert!(world.projectiles.is_empty());
        assert_eq!(world.player.clip(WeaponKind::Smg), 10);
    }

    #[test]
    fn test_void_fall_teleports_to_checkpoint() {
        let mut world = playing_world();
        settle(&mut world);
        let (safe_x, safe_y) = (world.player.last_safe_x, world.player.last_safe_y);

        world.player.rect.y = VOID_Y + 10.0;
        world.player.rect.x = 500.0;
        step_player(&mut world, &InputFrame::default(), &InputEdges::default());
        assert_eq!(world.player.health, MAX_HEALTH - 1);
        assert_eq!(world.player.rect.x, safe_x);
        assert_eq!(world.player.rect.y, safe_y - 50.0);
        assert_eq!(world.player.invincible_timer, INVINCIBLE_TICKS - 1);
    }

    #[test]
    fn test_lethal_void_fall_does_not_teleport() {
        let mut world = playing_world();
        settle(&mut world);
        world.player.health = 1;
        world.player.rect.y = VOID_Y + 10.0;
        world.player.rect.x = 500.0;
        step_player(&mut world, &InputFrame::default(), &InputEdges::default());
        assert_eq!(world.player.health, 0);
        assert_eq!(world.player.rect.x, 500.0, "no teleport on lethal fall");
    }

    #[test]
    fn test_obstacle_landing_is_not_a_checkpoint() {
        let mut world = playing_world();
        settle(&mut world);
        let (safe_x, safe_y) = (world.player.last_safe_x, world.player.last_safe_y);

        // Drop onto the top of the obstacle wall
        world.player.rect.x = 990.0;
        world.player.rect.y = FLOOR_Y - 300.0 - world.player.rect.h - 5.0;
        world.player.vy = 0.0;
        world.player.is_grounded = false;
        for _ in 0..10 {
            step_player(&mut world, &InputFrame::default(), &InputEdges::default());
            if world.player.is_grounded {
                break;
            }
        }
        assert!(world.player.is_grounded);
        assert_eq!(world.player.last_safe_x, safe_x);
        assert_eq!(world.player.last_safe_y, safe_y);
    }

    #[test]
    fn test_switch_blocked_while_reloading() {
        let mut world = playing_world();
        settle(&mut world);
        world.player.weapons.push(WeaponKind::Smg);
        world.player.current_weapon_index = 1;
        world.player.is_reloading = true;
        world.player.reload_timer = 30;

        let switch = edge(|e| e.switch_weapon = true);
        step_player(&mut world, &InputFrame::default(), &switch);
        assert_eq!(world.player.current_weapon_index, 1);
    }

    #[test]
    fn test_medkit_heal_requires_damage_and_stock() {
        let mut world = playing_world();
        settle(&mut world);
        let heal = edge(|e| e.medkit = true);

        // Full health: no-op
        world.player.medkits = 1;
        step_player(&mut world, &InputFrame::default(), &heal);
        assert_eq!(world.player.medkits, 1);

        world.player.health = 1;
        step_player(&mut world, &InputFrame::default(), &heal);
        assert_eq!(world.player.health, 2);
        assert_eq!(world.player.medkits, 0);

        // Empty stock: no-op
        step_player(&mut world, &InputFrame::default(), &heal);
        assert_eq!(world.player.health, 2);
    }
}
