use campus_route_lib::{
    plan_route, resolve, sample_graph, shortest_path, CampusGraph, RouteRequest,
};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

static CAMPUS: Lazy<CampusGraph> = Lazy::new(|| sample_graph().expect("bundled dataset is valid"));
static LIBRARY_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::query("library").from_origin("main_gate"));
static DORM_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::node("dorm_a").from_origin("stadium"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let campus = &*CAMPUS;

    c.bench_function("dijkstra_main_gate_dorm_a", |b| {
        b.iter(|| {
            let path = shortest_path(campus, "main_gate", "dorm_a").expect("route exists");
            black_box(path.total_weight())
        });
    });

    c.bench_function("resolve_block", |b| {
        b.iter(|| black_box(resolve(campus, "block").len()));
    });

    c.bench_function("route_library_query", |b| {
        let request = &*LIBRARY_REQUEST;
        b.iter(|| {
            let result = plan_route(campus, request).expect("route exists");
            black_box(result.narration.len())
        });
    });

    c.bench_function("route_stadium_dorm_a", |b| {
        let request = &*DORM_REQUEST;
        b.iter(|| {
            let result = plan_route(campus, request).expect("route exists");
            black_box(result.total_weight)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
