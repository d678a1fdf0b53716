use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linear_quadtree::quadtree::QuadTree;
use linear_quadtree::shapes::{Point, Rect};
use rand::prelude::*;

fn random_rects(count: usize, bounds: Rect, max_size: Point) -> Vec<Rect> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..count)
        .map(|_| bounds.random_rect_inside(max_size, &mut rng))
        .collect()
}

fn populate_benchmark(c: &mut Criterion) {
    let bounds = Rect::new(0, 0, 4096, 4096);
    let rects = random_rects(10_000, bounds, Point::splat(32));
    let mut quadtree = QuadTree::with_depth(7, bounds).unwrap();

    c.bench_function("quadtree_populate", |b| {
        b.iter(|| {
            quadtree.populate(black_box(&rects));
        })
    });
}

fn locate_benchmark(c: &mut Criterion) {
    let bounds = Rect::new(0, 0, 4096, 4096);
    let rects = random_rects(1_000, bounds, Point::splat(64));
    let quadtree = QuadTree::with_depth(8, bounds).unwrap();

    c.bench_function("quadtree_locate", |b| {
        b.iter(|| {
            for rect in &rects {
                black_box(quadtree.locate(rect));
            }
        })
    });
}

fn collision_pairs_benchmark(c: &mut Criterion) {
    let bounds = Rect::new(0, 0, 4096, 4096);
    let rects = random_rects(10_000, bounds, Point::splat(32));
    let mut quadtree = QuadTree::with_depth(7, bounds).unwrap();

    c.bench_function("quadtree_collision_pairs", |b| {
        b.iter(|| {
            let accessor = quadtree.populate(&rects);
            let mut hits = 0u32;
            accessor.for_each_overlapping_pair(|_, _| hits += 1);
            black_box(hits);
        })
    });
}

criterion_group!(
    benches,
    populate_benchmark,
    locate_benchmark,
    collision_pairs_benchmark
);
criterion_main!(benches);
