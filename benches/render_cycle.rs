use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hangman_tty::core::Hangman;
use hangman_tty::term::{Color, Line, LineRenderer};

fn session_rows() -> LineRenderer<Vec<u8>> {
    let renderer = LineRenderer::new(Vec::with_capacity(4096));
    renderer.add_line(Line::from_generator(|| Some(b"r _ s t ".to_vec())));
    renderer.add_line(Line::animated(
        || Some(b"It's your turn".to_vec()),
        &[Color::Blue, Color::Green, Color::Red, Color::Orange],
    ));
    let over = renderer.add_line(Line::from_generator(|| Some(b"Game is over".to_vec())));
    let error = renderer.add_line(Line::from_generator(|| Some(Color::Red.paint("oops"))));
    renderer.add_line(renderer.create_input_line('>'));
    renderer.hide_line(over);
    renderer.hide_line(error);
    renderer
}

fn bench_draw(c: &mut Criterion) {
    let renderer = session_rows();

    c.bench_function("draw_session_rows", |b| {
        b.iter(|| {
            renderer.draw().unwrap();
            renderer.with_sink(|sink| sink.clear());
        })
    });
}

fn bench_draw_after_input(c: &mut Criterion) {
    let renderer = session_rows();

    c.bench_function("draw_after_input", |b| {
        b.iter(|| {
            renderer.had_input();
            renderer.draw().unwrap();
            renderer.with_sink(|sink| sink.clear());
        })
    });
}

fn bench_guess(c: &mut Criterion) {
    c.bench_function("guess_whole_word", |b| {
        b.iter(|| {
            let mut game = Hangman::new("iterator");
            for guess in *b"iteroa" {
                let _ = game.guess(black_box(guess));
            }
            game.is_over()
        })
    });
}

criterion_group!(benches, bench_draw, bench_draw_after_input, bench_guess);
criterion_main!(benches);
