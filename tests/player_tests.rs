//! Player step animation tests

use crossy_road::simulation::{
    rest_position, Direction, GameConfig, Player, StepPhase, StepUpdate,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_new_player_rests_on_cell_centre() {
    let config = GameConfig::default();
    let player = Player::new(0, 8, &config);

    assert_eq!(player.phase(), StepPhase::Idle);
    assert!(!player.is_moving());
    assert_eq!(player.position().x, 0.0);
    assert_eq!(player.position().y, 0.0);
    assert_eq!(player.position().z, 0.0);
    assert_eq!(rest_position(2, 0, &config).x, -672.0);
    assert_eq!(rest_position(2, 0, &config).y, 168.0);
}

#[test]
fn test_rest_position_matches_column_centres() {
    let config = GameConfig::default();
    for column in 0..config.columns {
        let position = rest_position(4, column, &config);
        assert_eq!(position.x, config.column_center_x(column));
        assert_eq!(position.y, config.lane_y(4));
        assert_eq!(position.z, 0.0);
    }
    assert_eq!(config.column_center_x(8), 0.0);
    assert_eq!(config.column_center_x(16), 672.0);
}

#[test]
fn test_projected_cell_includes_queued_moves() {
    let config = GameConfig::default();
    let mut player = Player::new(0, 8, &config);

    player.enqueue(Direction::Forward);
    player.enqueue(Direction::Forward);
    player.enqueue(Direction::Left);

    assert_eq!(player.projected_cell(), (2, 7));
    assert_eq!(player.phase(), StepPhase::Pending);
    assert_eq!((player.lane, player.column), (0, 8));
}

#[test]
fn test_step_interpolates_and_hops() {
    let config = GameConfig::default();
    let mut player = Player::new(0, 8, &config);
    player.enqueue(Direction::Forward);

    assert_eq!(
        player.update(0.0, &config),
        StepUpdate::Animating {
            direction: Direction::Forward,
            progress: 0.0
        }
    );
    assert_eq!(player.step_started_at(), Some(0.0));

    let update = player.update(100.0, &config);
    assert_eq!(
        update,
        StepUpdate::Animating {
            direction: Direction::Forward,
            progress: 0.5
        }
    );
    let position = player.position();
    assert!(approx(position.x, 0.0));
    assert!(approx(position.y, 42.0));
    // Peak of the hop: hop height times zoom
    assert!(approx(position.z, 16.0));

    // The logical cell is unchanged mid-step
    assert_eq!(player.lane, 0);
}

#[test]
fn test_step_commits_at_step_time() {
    let config = GameConfig::default();
    let mut player = Player::new(3, 8, &config);
    player.enqueue(Direction::Right);

    player.update(1000.0, &config);
    assert!(matches!(
        player.update(1199.0, &config),
        StepUpdate::Animating { .. }
    ));

    assert_eq!(
        player.update(1200.0, &config),
        StepUpdate::Committed {
            direction: Direction::Right,
            lane: 3,
            column: 9
        }
    );
    assert_eq!(player.phase(), StepPhase::Idle);
    assert!(!player.is_moving());
    assert_eq!(player.position(), rest_position(3, 9, &config));
    assert_eq!(player.position().z, 0.0);
}

#[test]
fn test_left_then_right_returns_to_start() {
    let config = GameConfig::default();
    let mut player = Player::new(0, 8, &config);
    player.enqueue(Direction::Left);
    player.enqueue(Direction::Right);

    player.update(0.0, &config);
    assert_eq!(
        player.update(200.0, &config),
        StepUpdate::Committed {
            direction: Direction::Left,
            lane: 0,
            column: 7
        }
    );
    assert_eq!(
        player.update(400.0, &config),
        StepUpdate::Committed {
            direction: Direction::Right,
            lane: 0,
            column: 8
        }
    );
    assert_eq!(player.position(), rest_position(0, 8, &config));
}

#[test]
fn test_queued_moves_chain_without_gap() {
    let config = GameConfig::default();
    let mut player = Player::new(0, 8, &config);
    player.enqueue(Direction::Forward);
    player.enqueue(Direction::Forward);

    player.update(0.0, &config);
    assert!(matches!(
        player.update(250.0, &config),
        StepUpdate::Committed { lane: 1, .. }
    ));

    // The second step starts on the frame the first one committed
    assert_eq!(player.step_started_at(), Some(250.0));
    assert_eq!(
        player.update(350.0, &config),
        StepUpdate::Animating {
            direction: Direction::Forward,
            progress: 0.5
        }
    );
}

#[test]
fn test_idle_player_reports_idle() {
    let config = GameConfig::default();
    let mut player = Player::new(0, 8, &config);
    assert_eq!(player.update(500.0, &config), StepUpdate::Idle);
    assert_eq!(player.step_started_at(), None);
}
