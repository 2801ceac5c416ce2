//! Walk fixtures.

use bishop_art::{Fingerprint, HEIGHT, Move, Moves, Palette, Position, Renderer, START, WIDTH, Walker};
use hex_literal::hex;

#[test]
fn empty_input() {
    let fingerprint = Fingerprint::new(b"");
    assert_eq!(fingerprint.to_string(), "d41d8cd98f00b204e9800998ecf8427e");

    let mut walker = Walker::new(fingerprint.moves());
    let path = [
        Position::new(7, 3),
        Position::new(8, 2),
        Position::new(9, 1),
        Position::new(10, 2),
    ];

    for &expected in &path {
        assert_eq!(walker.advance(), Some(expected));
    }

    for &pos in &path {
        assert_eq!(walker.field().count(pos), 1);
    }

    assert_eq!(walker.field().total(), 4);
}

#[test]
fn single_letter() {
    let fingerprint = Fingerprint::new(b"a");
    assert_eq!(
        fingerprint.as_bytes(),
        &hex!("0cc175b9c0f1b6a831c399e269772661")
    );

    let moves = fingerprint.moves();
    assert_eq!(
        &moves.as_slice()[..4],
        &[Move::UpLeft, Move::DownRight, Move::UpLeft, Move::UpLeft]
    );

    let mut walker = Walker::new(moves);
    for _ in 0..4 {
        walker.advance();
    }

    assert_eq!(walker.position(), Position::new(6, 2));
    assert_eq!(walker.field().count(Position::new(7, 3)), 2);
    assert_eq!(walker.field().count(START), 1);
    assert_eq!(walker.field().count(Position::new(6, 2)), 1);
}

#[test]
fn invariants_hold_for_every_byte() {
    for byte in 0..=u8::MAX {
        let moves = Fingerprint::new(&[byte]).moves();
        assert_eq!(moves.len(), 64);
        assert!(moves.iter().all(|mv| mv.bits() < 4));

        let mut walker = Walker::new(moves);
        while let Some(pos) = walker.advance() {
            assert!(pos.x < WIDTH && pos.y < HEIGHT, "{pos:?} out of bounds");
        }

        assert_eq!(walker.field().total(), 64);
    }
}

#[test]
fn walk_is_deterministic() {
    let first = Walker::run(Fingerprint::new(b"hello world").moves());
    let second = Walker::run(Fingerprint::new(b"hello world").moves());

    assert_eq!(first.field(), second.field());
    assert_eq!(first.position(), second.position());
}

#[test]
fn clamps_at_right_wall() {
    let walker = Walker::run(Moves::new([Move::DownRight; Moves::LEN]));
    assert_eq!(walker.position(), Position::new(WIDTH - 1, HEIGHT - 1));
    assert_eq!(walker.field().count(Position::new(WIDTH - 1, HEIGHT - 1)), 57);
}

#[test]
fn crowded_square_saturates() {
    let mut moves = [Move::DownLeft; Moves::LEN];
    for mv in &mut moves[60..] {
        *mv = Move::UpRight;
    }

    let walker = Walker::run(Moves::new(moves));
    let corner = Position::new(0, HEIGHT - 1);
    assert_eq!(walker.field().count(corner), 53);
    assert_eq!(walker.position(), Position::new(4, 4));

    let frame = Renderer::new(Palette::Ascii).frame(&walker).to_string();
    let rows = frame.lines().collect::<Vec<_>>();
    assert_eq!(rows[5], "|    E   S        |");
    assert_eq!(rows[9], "|^....            |");
}
