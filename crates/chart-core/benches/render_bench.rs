use anyhow::Result;
use chart_core::{Axis, Chart, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_lines(series: usize, n: usize) -> Chart {
    let mut ch = Chart::new();
    let mut y_max: f64 = 0.0;
    for s in 0..series {
        let data: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let x = 5.0 + 2.0 * i as f64;
                (x, x * x * 1e-3 * (s + 1) as f64)
            })
            .collect();
        y_max = data.iter().map(|p| p.1).fold(y_max, f64::max);
        ch.add_series(Series::line(format!("s{s}"), data).with_markers());
    }
    ch.x_axis = Axis::new("X", 0.0, 5.0 + 2.0 * n as f64);
    ch.y_axis = Axis::new("Y", 0.0, y_max + 10.0);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[126usize, 2_000usize] {
        group.bench_function(format!("lines4_{n}"), |b| {
            let ch = build_chart_lines(4, n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
