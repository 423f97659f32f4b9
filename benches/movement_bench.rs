use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use subword::{
    ByteEncoding, LineBuffer, Motion, MotionOptions, Navigator, Position, TextObject,
};

/// Identifier-heavy source: 10 paragraphs of 100 lines, blank line between
fn setup_buffer() -> LineBuffer {
    let line = "    let parsedHttpHeader = read_next_chunk(socket, MAX_BUF_SIZE2);";
    let mut lines = Vec::new();
    for _ in 0..10 {
        for _ in 0..100 {
            lines.push(line.to_string());
        }
        lines.push(String::new());
    }
    LineBuffer::from_lines(lines)
}

fn movement_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("movement_words");
    let buffer = setup_buffer();

    for motion in Motion::ALL {
        group.bench_function(format!("subword_{motion}"), |b| {
            let nav = Navigator::new(&buffer);
            let start = match motion {
                Motion::WordStart | Motion::WordEnd => Position::new(1, 0),
                _ => Position::new(buffer.lines().len(), 0),
            };
            b.iter(|| {
                // Move 1000 sub-words
                let mut pos = start;
                for _ in 0..1000 {
                    let target = nav.apply(motion, pos).unwrap();
                    pos = black_box(target.clamped());
                }
                pos
            })
        });
    }

    let whole = MotionOptions {
        subword: false,
        ..MotionOptions::default()
    };
    group.bench_function("word_w", |b| {
        let nav = Navigator::new(&buffer).with_options(whole.clone());
        b.iter(|| {
            let mut pos = Position::new(1, 0);
            for _ in 0..1000 {
                pos = black_box(nav.apply(Motion::WordStart, pos).unwrap().clamped());
            }
            pos
        })
    });

    group.bench_function("bytes_w", |b| {
        let nav = Navigator::with_encoding(&buffer, ByteEncoding);
        b.iter(|| {
            let mut pos = Position::new(1, 0);
            for _ in 0..1000 {
                pos = black_box(nav.apply(Motion::WordStart, pos).unwrap().clamped());
            }
            pos
        })
    });

    group.bench_function("count_100_w", |b| {
        let nav = Navigator::new(&buffer).with_options(MotionOptions::default().with_count(100));
        b.iter(|| black_box(nav.apply(Motion::WordStart, Position::new(1, 0))))
    });

    group.finish();
}

fn text_objects(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_objects");
    let buffer = setup_buffer();

    for object in TextObject::ALL {
        group.bench_function(format!("{object}_every_column"), |b| {
            let nav = Navigator::new(&buffer);
            let width = buffer.lines()[0].len();
            b.iter(|| {
                for col in 0..width {
                    black_box(nav.select(object, Position::new(1, col)).unwrap());
                }
            })
        });
    }

    group.bench_function("aw_across_blank_line", |b| {
        let nav = Navigator::new(&buffer);
        let last = buffer.lines()[99].len() - 1;
        b.iter(|| black_box(nav.around_word(Position::new(100, last)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, movement_words, text_objects);
criterion_main!(benches);
