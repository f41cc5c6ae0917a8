// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Reads a numeric override such as `ORTHOROUTE_BENCH_SAMPLES=20`; garbage falls back to `default`.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse().ok()).unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let frequency = env_or("ORTHOROUTE_PROFILE_FREQ", 100_i32).clamp(1, 1000);
    let samples = env_or("ORTHOROUTE_BENCH_SAMPLES", 50_usize).clamp(10, 200);
    let warmup = env_or("ORTHOROUTE_BENCH_WARMUP_SECS", 2_u64).clamp(1, 60);
    let measurement = env_or("ORTHOROUTE_BENCH_MEASUREMENT_SECS", 5_u64).clamp(1, 120);

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measurement))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
