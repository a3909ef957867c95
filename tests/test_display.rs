use arcade_shooter::display::{render, View, Viewport};
use arcade_shooter::entities::{Intents, Position};
use arcade_shooter::{GameConfig, Session};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn render_to_string(session: &Session) -> String {
    let snapshot = session.snapshot();
    let view = View {
        snapshot: &snapshot,
        config: session.config(),
        report: session.report(),
        best_score: 12,
        muted: false,
        width: 80,
        height: 24,
    };
    let mut buf: Vec<u8> = Vec::new();
    render(&mut buf, &view).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn viewport_maps_corners_inside_border() {
    let vp = Viewport::new(80, 24, &GameConfig::default());
    assert_eq!(vp.cell(Position { x: 0.0, y: 0.0 }), (1, 2));
    assert_eq!(vp.cell(Position { x: 1200.0, y: 700.0 }), (78, 21));
    assert_eq!(vp.cell(Position { x: -50.0, y: 9999.0 }), (1, 21));
}

#[test]
fn title_screen_when_idle() {
    let s = Session::new(GameConfig::default()).unwrap();
    let out = render_to_string(&s);
    assert!(out.contains("ARCADE  SHOOTER"));
    assert!(out.contains("Best Score: 12"));
}

#[test]
fn hud_when_running() {
    let mut s = Session::new(GameConfig::default()).unwrap();
    s.start();
    s.tick(Intents::default(), &mut StdRng::seed_from_u64(1));
    let out = render_to_string(&s);
    assert!(out.contains("Kills:"));
    assert!(out.contains("[ LEVEL 1 ]"));
    assert!(out.contains("♥♥♥"));
}

#[test]
fn game_over_overlay_shows_final_score() {
    let mut s = Session::new(GameConfig::default()).unwrap();
    s.start();
    let mut rng = StdRng::seed_from_u64(1);
    for dx in [0.0, 2.0, 4.0] {
        s.spawn_enemy_at(573.0 + dx, 570.0);
    }
    for _ in 0..5 {
        s.tick(Intents::default(), &mut rng);
    }
    let out = render_to_string(&s);
    assert!(out.contains("GAME  OVER"));
    assert!(out.contains("You scored 0 kills"));
}
