use chart_core::{Axis, Chart, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(series: usize, points: usize) -> Chart {
    let mut ch = Chart::new();
    for s in 0..series {
        let data = (0..points)
            .map(|i| {
                let x = (i * 64) as f64;
                let y = (i as f64 * 0.05 + s as f64).sin().abs() * 10.0 + s as f64;
                (x, y)
            })
            .collect();
        ch.add_series(Series::with_data(format!("var{s}"), data));
    }
    ch.x_axis = Axis::new("Size (p=m0)", 0.0, ((points - 1) * 64) as f64);
    ch.y_axis = Axis::new("Performance (GFLOP/s)", 0.0, 1.5 * (series as f64 + 10.0));
    ch.autoscale_x(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &(series, points) in &[(4usize, 64usize), (16usize, 512usize)] {
        group.bench_function(format!("s{series}_p{points}"), |b| {
            let ch = build_chart(series, points);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| black_box(ch.render_to_png_bytes(&opts).expect("render")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
