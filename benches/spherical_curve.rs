use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::Point3;
use semivariogram::prelude::*;

fn create_point_set(domain: [[f64; 2]; 2], n_points: usize) -> PointSet {
    let mut points = vec![];
    let mut values = vec![];
    for _ in 0..n_points {
        let x = rand::random::<f64>() * (domain[1][0] - domain[0][0]) + domain[0][0];
        let y = rand::random::<f64>() * (domain[1][1] - domain[0][1]) + domain[0][1];
        let v = (x / 10.0).sin() + (y / 15.0).cos() + rand::random::<f64>();
        points.push(Point3::new(x, y, 0.0));
        values.push(v);
    }
    PointSet::new(points, values).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let params = VariogramParameters::new(15.0, 160.0, 30.0).unwrap();
    let sample = DistanceSample::linspace(0.0, 50.0, 100_000).unwrap();

    c.bench_function("spherical curve 100k", |b| {
        b.iter(|| SemivariogramCurve::spherical(black_box(&sample), black_box(&params)))
    });

    let data = create_point_set([[0.0, 0.0], [100.0, 100.0]], 5_000);
    let lag_params = LagParameters {
        n_lags: 20,
        lag_width: None,
        max_lag: Some(50.0),
    };
    let calculator = CPUCalculator::new(&data, &lag_params).unwrap();

    c.bench_function("experimental variogram 5k points", |b| {
        b.iter(|| black_box(&calculator).calculate())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
