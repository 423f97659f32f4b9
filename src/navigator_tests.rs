use super::*;
use crate::buffer::LineBuffer;

#[test]
fn test_options_drive_motions_and_objects() {
    let buffer = LineBuffer::from_lines(["fooBar baz"]);
    let at = Position::new(1, 1);

    let nav = Navigator::new(&buffer);
    assert!(nav.options().subword);
    assert_eq!(
        nav.apply(Motion::WordStart, at).unwrap(),
        MotionTarget::Found(Position::new(1, 3))
    );
    assert_eq!(
        nav.inner_word(at).unwrap(),
        Some(TextRange::from_pairs((1, 0), (1, 2)))
    );

    let whole = Navigator::new(&buffer).with_options(MotionOptions {
        subword: false,
        ..MotionOptions::default()
    });
    assert_eq!(
        whole.apply(Motion::WordStart, at).unwrap(),
        MotionTarget::Found(Position::new(1, 7))
    );
    assert_eq!(
        whole.inner_word(at).unwrap(),
        Some(TextRange::from_pairs((1, 0), (1, 5)))
    );
    assert_eq!(
        whole.select(TextObject::AroundWord, at).unwrap(),
        Some(TextRange::from_pairs((1, 0), (1, 6)))
    );
}
