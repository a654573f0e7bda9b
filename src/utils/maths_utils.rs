use argminmax::ArgMinMax;
use itertools::Itertools;
use statrs::statistics::Statistics;

use crate::config::EPSILON;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.mean()
}

/// Population standard deviation (denominator N, matching the reference
/// implementation's conventions). Zero for fewer than two samples.
pub fn population_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    values.population_std_dev()
}

/// Z-score a series against its own mean and (epsilon-guarded) std
pub fn zscore(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    let sd = population_std(values);
    values.iter().map(|&x| (x - m) / (sd + EPSILON)).collect()
}

/// Successive differences, length N-1
pub fn diff(values: &[f64]) -> Vec<f64> {
    values.iter().tuple_windows().map(|(a, b)| b - a).collect()
}

/// Discrete gradient: central differences inside, one-sided at the edges.
/// Output length = input length.
pub fn gradient(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let mut grad = Vec::with_capacity(n);
            grad.push(values[1] - values[0]);
            for i in 1..n - 1 {
                grad.push((values[i + 1] - values[i - 1]) / 2.0);
            }
            grad.push(values[n - 1] - values[n - 2]);
            grad
        }
    }
}

// Reflect about the array edge: (d c b a | a b c d | d c b a).
// Loops because the kernel radius can exceed the array length.
fn reflect_index(mut idx: i64, n: i64) -> usize {
    loop {
        if idx < 0 {
            idx = -idx - 1;
        } else if idx >= n {
            idx = 2 * n - 1 - idx;
        } else {
            return idx as usize;
        }
    }
}

/// Gaussian smoothing with a discrete kernel truncated at 4 sigma and
/// reflect padding at the boundaries. Preserves peak shape while
/// suppressing sample-to-sample noise. Output length = input length.
pub fn gaussian_smooth(values: &[f64], sigma: f64) -> Vec<f64> {
    if values.is_empty() || sigma <= 0.0 {
        return values.to_vec();
    }

    let radius = (4.0 * sigma + 0.5) as i64;
    let mut kernel = Vec::with_capacity((2 * radius + 1) as usize);
    for x in -radius..=radius {
        kernel.push((-0.5 * (x as f64 / sigma).powi(2)).exp());
    }
    let kernel_sum: f64 = kernel.iter().sum();

    let n = values.len() as i64;
    (0..n)
        .map(|i| {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let offset = k as i64 - radius;
                acc += weight * values[reflect_index(i + offset, n)];
            }
            acc / kernel_sum
        })
        .collect()
}

/// Equal-width histogram over [min, max] with the final edge inclusive.
/// Returns (counts, edges); edges has `bins` + 1 entries. A constant series
/// widens its range by ±0.5 so every sample still lands in a bucket.
pub fn histogram(values: &[f64], bins: usize) -> (Vec<f64>, Vec<f64>) {
    assert!(bins > 0, "histogram needs at least one bucket");
    if values.is_empty() {
        return (vec![0.0; bins], linspace(0.0, 1.0, bins + 1));
    }

    let mut lo = get_min(values);
    let mut hi = get_max(values);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0.0; bins];
    for &x in values {
        let idx = (((x - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1.0;
    }

    (counts, linspace(lo, hi, bins + 1))
}

/// Histogram normalized so that the buckets integrate to one:
/// count / (total * bucket_width)
pub fn histogram_density(values: &[f64], bins: usize) -> Vec<f64> {
    let (counts, edges) = histogram(values, bins);
    let total: f64 = counts.iter().sum();
    if total == 0.0 {
        return counts;
    }
    let width = edges[1] - edges[0];
    counts.iter().map(|&c| c / (total * width)).collect()
}

pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    if points == 0 {
        return Vec::new();
    }
    if points == 1 {
        return vec![start];
    }
    let step = (end - start) / (points - 1) as f64;
    (0..points).map(|i| start + step * i as f64).collect()
}

// Normalizes a vector of (positive) f64 to 0.0 to 1.0. Guarantees largest value is 1.0
// Smallest output value will be 0.0 iff smallest input value = 0.0
// Name: `Max normalization`, `Max-Abs normalization`, or `L∞ normalization`
pub fn normalize_max(vec: &[f64]) -> Vec<f64> {
    if vec.is_empty() {
        return Vec::new();
    }
    match get_max(vec) {
        val if val <= 0.0 => vec.to_vec(),
        val => vec.iter().map(|&x| x / val).collect(),
    }
}
