use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solver::{Discipline, MapTrait, Maze, PathFinder, PathFinderState};

/// A serpentine maze: full-width corridors joined by a gap that alternates
/// between the right and left ends.
fn serpentine(corridors: usize, width: usize) -> Maze {
    let mut lines = Vec::new();
    for i in 0..corridors {
        let mut corridor = vec![' '; width];
        if i == 0 {
            corridor[0] = 'A';
        }
        if i == corridors - 1 {
            corridor[width - 1] = 'B';
        }
        lines.push(corridor.into_iter().collect::<String>());

        if i != corridors - 1 {
            let mut wall = vec!['#'; width];
            let gap = if i % 2 == 0 { width - 1 } else { 0 };
            wall[gap] = ' ';
            lines.push(wall.into_iter().collect());
        }
    }
    lines.join("\n").parse().unwrap()
}

fn bench_maze_scaled(c: &mut Criterion, factor: usize) {
    let map = serpentine(8 * factor, 16 * factor);

    for discipline in [Discipline::DepthFirst, Discipline::BreadthFirst] {
        c.bench_function(&format!("maze_scaled_{}_{}", factor, discipline), |b| {
            b.iter(|| {
                let outcome = PathFinder::new(
                    &map,
                    black_box(map.start()),
                    black_box(map.goal()),
                    discipline,
                )
                .finish(&map)
                .unwrap();
                assert!(matches!(outcome.state, PathFinderState::PathFound(_)));
            })
        });
    }

    c.bench_function(&format!("maze_storage_{}", factor), |b| {
        b.iter(|| black_box(map.create_storage::<bool>()))
    });
}

pub fn maze_small(c: &mut Criterion) {
    bench_maze_scaled(c, 1);
}

pub fn maze_medium(c: &mut Criterion) {
    bench_maze_scaled(c, 2);
}

pub fn maze_large(c: &mut Criterion) {
    bench_maze_scaled(c, 4);
}

criterion_group!(benches, maze_small, maze_medium, maze_large);
criterion_main!(benches);
