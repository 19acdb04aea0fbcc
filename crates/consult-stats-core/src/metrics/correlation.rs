//! Age versus prescription-count correlation.

use crate::dataset::Dataset;

/// Pearson correlation coefficient of two paired samples.
///
/// Returns 0 when fewer than two pairs are given or when either sample has
/// zero variance. Pairs beyond the shorter slice are ignored.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return 0.0;
    }
    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

/// Correlation between age and number of medicines, over records with a
/// computable age. `ages` holds one entry per record in dataset order.
pub fn age_medicine_correlation(dataset: &Dataset, ages: &[Option<i32>]) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = dataset
        .iter()
        .zip(ages)
        .filter_map(|(record, age)| age.map(|a| (f64::from(a), record.medicine_count() as f64)))
        .unzip();
    pearson(&xs, &ys)
}
