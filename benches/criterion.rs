use criterion::{criterion_group, criterion_main, Criterion};
use sudoku_engine::{Difficulty, Sudoku};

fn solve_wikipedia(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_line(
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
    )
    .unwrap();
    c.bench_function("solve_wikipedia", |b| b.iter(|| sudoku.solve()));
}

fn count_solutions_of_unique_puzzle(c: &mut Criterion) {
    let puzzle = Sudoku::generate(Difficulty::Hard, 42).puzzle;
    c.bench_function("count_solutions_of_unique_puzzle", |b| {
        b.iter(|| puzzle.count_solutions(2))
    });
}

fn generate_easy(c: &mut Criterion) {
    let mut seed = 0;
    c.bench_function("generate_easy", |b| {
        b.iter(|| {
            seed += 1;
            Sudoku::generate(Difficulty::Easy, seed)
        })
    });
}

fn generate_hard(c: &mut Criterion) {
    let mut seed = 0;
    c.bench_function("generate_hard", |b| {
        b.iter(|| {
            seed += 1;
            Sudoku::generate(Difficulty::Hard, seed)
        })
    });
}

criterion_group!(
    benches,
    solve_wikipedia,
    count_solutions_of_unique_puzzle,
    generate_easy,
    generate_hard
);
criterion_main!(benches);
