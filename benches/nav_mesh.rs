use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polynav::*;

fn grid_mesh(width: usize, height: usize, cell: Scalar) -> NavMesh {
    let stride = width + 1;
    let mut vertices = Vec::with_capacity(stride * (height + 1));
    for y in 0..=height {
        for x in 0..=width {
            vertices.push(NavVec2::new(x as Scalar * cell, y as Scalar * cell));
        }
    }
    let mut triangles = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let base = (y * stride + x) as u32;
            let right = base + 1;
            let up = base + stride as u32;
            let diagonal = up + 1;
            triangles.push(NavTriangle::from((base, right, diagonal)));
            triangles.push(NavTriangle::from((base, diagonal, up)));
        }
    }
    let outer = vec![
        NavVec2::new(0.0, 0.0),
        NavVec2::new(width as Scalar * cell, 0.0),
        NavVec2::new(width as Scalar * cell, height as Scalar * cell),
        NavVec2::new(0.0, height as Scalar * cell),
    ];
    let polygon = NavPolygon::new(outer, vec![], vertices, triangles).unwrap();
    NavMesh::new(NavPolygonMap::new(vec![polygon]))
}

fn bench_nav_mesh(c: &mut Criterion) {
    let mesh = grid_mesh(32, 32, 1.0);
    let from = NavVec2::new(0.1, 0.1);
    let to = NavVec2::new(31.9, 31.9);

    let mut group = c.benchmark_group("polynav/nav-mesh");

    group.bench_function("find_path", |b| {
        b.iter(|| {
            let path = mesh.find_path(
                black_box(from),
                black_box(to),
                NavGoalProjection::ClosestBoundary,
            );
            black_box(path.len());
        })
    });

    let start = mesh.find_triangle_containing(from).expect("start triangle");
    let goal = mesh.find_triangle_containing(to).expect("goal triangle");
    group.bench_function("find_path_triangles", |b| {
        b.iter(|| {
            let corridor = mesh
                .find_path_triangles(black_box(start), black_box(goal))
                .expect("corridor");
            black_box(corridor.0.len());
        })
    });

    group.bench_function("find_triangle_containing", |b| {
        b.iter(|| black_box(mesh.find_triangle_containing(black_box(to))))
    });

    group.bench_function("closest_point", |b| {
        b.iter(|| black_box(mesh.closest_point(black_box(NavVec2::new(-3.0, 12.5)), NavQuery::Accuracy)))
    });

    group.finish();
}

criterion_group!(benches, bench_nav_mesh);
criterion_main!(benches);
