use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use ndlife_core::prelude::*;

criterion_group!(generations, generation_benchmark);
criterion_main!(generations);

fn generation_benchmark(c: &mut Criterion) {
    bench_generations(c, "2d_glider", &[64, 64], GLIDER_2D, 64, Some(5));
    bench_generations(c, "3d_random", &[16, 16, 16], &random_coords(&[16, 16, 16]), 8, None);
    bench_generations(c, "5d_random", &[6; 5], &random_coords(&[6; 5]), 4, None);
}

const GLIDER_2D: &[&[isize]] = &[&[1, 0], &[2, 1], &[0, 2], &[1, 2], &[2, 2]];

fn bench_generations(
    c: &mut Criterion,
    name: &str,
    dimension_sizes: &[usize],
    live: &[impl AsRef<[isize]>],
    gens: u32,
    expected_pop: Option<usize>,
) {
    let mut initial = build(dimension_sizes).expect("Failed to build grid");
    for coord in live {
        initial
            .set_cell(coord.as_ref(), true)
            .expect("Pattern does not fit in grid");
    }

    let mut group = c.benchmark_group(name);
    group.sample_size(10);
    group.bench_function(format!("{}_gens", gens), |b| {
        b.iter_batched(
            || initial.clone(),
            |mut grid| {
                grid.advance_generations(gens, &LIFE, false, |_, _| ());
                if let Some(expected) = expected_pop {
                    assert_eq!(expected, grid.population());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

/// Returns a deterministic scattering of about a third of the cells.
fn random_coords(dimension_sizes: &[usize]) -> Vec<Coordinate> {
    let mut state = 0x2545_f491_u32;
    let mut ret = vec![];
    let count: usize = dimension_sizes.iter().product();
    for _ in 0..count / 3 {
        let coord = dimension_sizes
            .iter()
            .map(|&size| {
                // xorshift
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state as usize % size) as isize
            })
            .collect();
        ret.push(coord);
    }
    ret
}
