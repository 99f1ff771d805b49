use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use libmon::prelude::*;
use libmon::{live_field_bool, live_field_f32, live_field_u8};

struct NullPlatform;

impl Platform for NullPlatform {
    fn write(&mut self, _text: &str) {}

    fn now_ms(&self) -> u64 {
        0
    }

    fn sleep_ms(&mut self, _duration_ms: u32) {}
}

struct Imu {
    accel_g: f32,
    calibrated: bool,
    rate_hz: u8,
}

const IMU_VIEWS: &[ViewEntry] = &[
    ViewEntry { name: "full", id: 0 },
    ViewEntry {
        name: "motion",
        id: 1,
    },
    ViewEntry {
        name: "config",
        id: 2,
    },
];

static IMU_FIELDS: &[LiveField<Imu>] = &[
    live_field_f32!(Imu, "accel_g", view_bit(1), |imu: &Imu| imu.accel_g),
    live_field_bool!(Imu, "calibrated", view_bit(2), |imu: &Imu| imu.calibrated),
    live_field_u8!(Imu, "rate_hz", view_bit(2), |imu: &Imu| imu.rate_hz),
];

fn imu_provider() -> LiveProvider<'static, Imu> {
    LiveProvider {
        module_name: "imu",
        view_help: "full|motion|config",
        view_table: IMU_VIEWS,
        fields: IMU_FIELDS,
        lock: None,
        unlock: None,
    }
}

fn bench_parse_view(c: &mut Criterion) {
    c.bench_function("parse_view_name_last_entry", |b| {
        b.iter(|| parse_view_name(black_box("config"), black_box(IMU_VIEWS)))
    });
}

fn bench_run_once(c: &mut Criterion) {
    let imu = Imu {
        accel_g: 0.98,
        calibrated: true,
        rate_hz: 100,
    };
    let provider = imu_provider();
    c.bench_function("run_live_once_full_view", |b| {
        b.iter(|| {
            let mut io = NullPlatform;
            run_live_command(
                &mut io,
                black_box(&imu),
                &provider,
                black_box(&["imu", "once"]),
                0,
            )
        })
    });
}

fn bench_reject_unknown_view(c: &mut Criterion) {
    let imu = Imu {
        accel_g: 0.98,
        calibrated: true,
        rate_hz: 100,
    };
    let provider = imu_provider();
    c.bench_function("run_live_unknown_view", |b| {
        b.iter(|| {
            let mut io = NullPlatform;
            run_live_command(
                &mut io,
                black_box(&imu),
                &provider,
                black_box(&["imu", "once", "bogus"]),
                0,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_parse_view,
    bench_run_once,
    bench_reject_unknown_view
);
criterion_main!(benches);
