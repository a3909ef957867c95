use arcade_shooter::entities::SessionId;
use arcade_shooter::spawn::{SpawnScheduler, SpawnTiming};

const S1: SessionId = SessionId(1);
const S2: SessionId = SessionId(2);

// ── delay ─────────────────────────────────────────────────────────────────────

#[test]
fn delay_shrinks_with_level() {
    let t = SpawnTiming::default();
    assert_eq!(t.delay_ms(1), 900);
    assert_eq!(t.delay_ms(2), 800);
    assert_eq!(t.delay_ms(6), 400);
}

#[test]
fn delay_never_below_floor() {
    let t = SpawnTiming::default();
    assert_eq!(t.delay_ms(7), 300);
    assert_eq!(t.delay_ms(50), 300);
    assert_eq!(t.delay_ms(u32::MAX), 300);
}

#[test]
fn zero_floor_allows_zero_delay() {
    let t = SpawnTiming { floor_ms: 0, ..SpawnTiming::default() };
    assert_eq!(t.delay_ms(10), 0);
    assert_eq!(t.delay_ms(20), 0);
}

// ── scheduling chain ──────────────────────────────────────────────────────────

#[test]
fn first_spawn_due_immediately() {
    let mut s = SpawnScheduler::new(SpawnTiming::default());
    s.start(S1, 100.0);
    assert!(s.poll(100.0, S1, 1));
}

#[test]
fn reschedules_from_live_level() {
    let mut s = SpawnScheduler::new(SpawnTiming::default());
    s.start(S1, 0.0);
    assert!(s.poll(0.0, S1, 1));
    assert_eq!(s.pending().unwrap().due_at_ms, 900.0);

    assert!(!s.poll(899.0, S1, 1));
    // Level went up before the ticket fired; next delay uses the new level
    assert!(s.poll(900.0, S1, 3));
    assert_eq!(s.pending().unwrap().due_at_ms, 900.0 + 700.0);
}

#[test]
fn fires_at_most_once_per_poll() {
    let mut s = SpawnScheduler::new(SpawnTiming { floor_ms: 0, ..SpawnTiming::default() });
    s.start(S1, 0.0);
    assert!(s.poll(10_000.0, S1, 20));
    // Zero delay: the next ticket is already due but needs another poll
    assert!(s.pending().is_some());
    assert!(s.poll(10_000.0, S1, 20));
}

#[test]
fn stale_session_ticket_is_discarded() {
    let mut s = SpawnScheduler::new(SpawnTiming::default());
    s.start(S1, 0.0);
    assert!(!s.poll(0.0, S2, 1));
    assert!(s.pending().is_none());
}

#[test]
fn restart_installs_fresh_chain() {
    let mut s = SpawnScheduler::new(SpawnTiming::default());
    s.start(S1, 0.0);
    s.start(S2, 500.0);
    let t = s.pending().unwrap();
    assert_eq!(t.session, S2);
    assert_eq!(t.due_at_ms, 500.0);
    assert!(s.poll(500.0, S2, 1));
}

#[test]
fn cancel_clears_pending() {
    let mut s = SpawnScheduler::new(SpawnTiming::default());
    s.start(S1, 0.0);
    s.cancel();
    assert!(!s.poll(1_000.0, S1, 1));
}
