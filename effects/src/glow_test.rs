#![allow(clippy::float_cmp)]

use super::*;

// --- lerp / GlowFollower ---

#[test]
fn lerp_moves_by_factor() {
    assert_eq!(lerp(0.0, 100.0, 0.1), 10.0);
    assert_eq!(lerp(50.0, 50.0, 0.1), 50.0);
}

#[test]
fn follower_starts_at_origin() {
    let g = GlowFollower::new();
    assert_eq!(g.position(), (0.0, 0.0));
}

#[test]
fn follower_steps_towards_target() {
    let mut g = GlowFollower::new();
    g.set_target(100.0, 200.0);
    let (x, y) = g.step();
    assert!((x - 10.0).abs() < 1e-9);
    assert!((y - 20.0).abs() < 1e-9);
    let (x, _) = g.step();
    assert!((x - 19.0).abs() < 1e-9);
}

#[test]
fn follower_converges() {
    let mut g = GlowFollower::new();
    g.set_target(300.0, -40.0);
    for _ in 0..500 {
        g.step();
    }
    let (x, y) = g.position();
    assert!((x - 300.0).abs() < 1e-6);
    assert!((y + 40.0).abs() < 1e-6);
}

// --- FrameTask ---

#[test]
fn task_starts_idle_and_does_not_tick() {
    let mut t = FrameTask::new();
    assert_eq!(t.state(), TaskState::Idle);
    assert!(!t.tick());
    assert_eq!(t.frames(), 0);
}

#[test]
fn running_task_ticks() {
    let mut t = FrameTask::new();
    assert!(t.start());
    assert!(t.tick());
    assert!(t.tick());
    assert_eq!(t.frames(), 2);
}

#[test]
fn stop_ends_rescheduling() {
    let mut t = FrameTask::new();
    t.start();
    t.tick();
    assert!(t.stop());
    assert!(!t.tick());
    assert_eq!(t.state(), TaskState::Stopped);
    assert_eq!(t.frames(), 1);
}

#[test]
fn stop_is_idempotent() {
    let mut t = FrameTask::new();
    t.start();
    assert!(t.stop());
    assert!(!t.stop());
}

#[test]
fn start_twice_is_rejected_and_restart_works() {
    let mut t = FrameTask::new();
    assert!(t.start());
    assert!(!t.start());
    t.stop();
    assert!(t.start());
    assert!(t.is_running());
}
