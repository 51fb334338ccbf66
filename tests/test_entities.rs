use std::collections::HashSet;

use battlefield::entities::*;

#[test]
fn entity_enums_compare() {
    assert_eq!(MoveDir::default(), MoveDir::Idle);
    assert_ne!(ProjectileKind::PlayerMissile, ProjectileKind::EnemyBullet);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
}

#[test]
fn direction_signs() {
    assert_eq!(MoveDir::Left.sign(), -1.0);
    assert_eq!(MoveDir::Idle.sign(), 0.0);
    assert_eq!(MoveDir::Right.sign(), 1.0);
    assert_eq!(Facing::Left.sign(), -1.0);
    assert_eq!(Facing::Right.sign(), 1.0);
}

#[test]
fn lanes_face_inward() {
    assert_eq!(Side::Left.facing(), Facing::Right);
    assert_eq!(Side::Right.facing(), Facing::Left);
}

#[test]
fn score_display_and_increment() {
    let mut s = Score::default();
    assert_eq!(s.value(), 0);
    assert_eq!(s.to_string(), "Scores : 0");
    s.increment();
    s.increment();
    assert_eq!(s.value(), 2);
    assert_eq!(s.to_string(), "Scores : 2");
}

#[test]
fn every_sprite_has_its_own_asset() {
    let paths: HashSet<_> = SpriteId::ALL.iter().map(|s| s.asset_path()).collect();
    assert_eq!(paths.len(), SpriteId::ALL.len());
    assert_eq!(SpriteId::Barrier.asset_path(), "./images/barier.png");
}
