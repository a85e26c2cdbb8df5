//! Datasets exercising each run rule.

/// 24 points around 10 with a single extreme value at index 4.
pub fn single_outlier() -> Vec<f64> {
    vec![
        10.1, 9.8, 10.2, 9.9, 25.0, 10.0, 10.3, 9.7, 10.1, 9.9, 10.2, 9.8, 10.0, 10.1, 9.9, 10.2,
        9.7, 10.3, 10.0, 9.8, 10.1, 9.9, 10.2, 10.0,
    ]
}

/// Strictly increasing for 8 points, then noise.
pub fn trend_up() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 4.0, 5.0, 3.5, 4.5]
}

/// Rises for three points, then falls for six (indices 2..=7).
pub fn trend_down() -> Vec<f64> {
    vec![5.0, 6.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0]
}

/// Eight points above the mean at indices 3..=10.
pub fn eight_above_mean() -> Vec<f64> {
    let mut data = vec![0.0; 3];
    data.extend(std::iter::repeat(10.0).take(8));
    data.extend(std::iter::repeat(0.0).take(9));
    data
}

/// 30 points of small alternating noise.
fn alternating_noise() -> Vec<f64> {
    (0..30).map(|i| if i % 2 == 0 { 0.1 } else { -0.1 }).collect()
}

/// Small alternating noise with outliers at indices 13 and 15.
///
/// The outliers sit on the sides given by `first` and `second`.
pub fn two_outliers(first: f64, second: f64) -> Vec<f64> {
    let mut data = alternating_noise();
    data[13] = first;
    data[15] = second;
    data
}

/// Small alternating noise with opposite-side outliers at indices 27 and
/// 29, so the violating window ends on the last point.
pub fn trailing_outliers() -> Vec<f64> {
    let mut data = alternating_noise();
    data[27] = 5.0;
    data[29] = -5.0;
    data
}

/// 41 points alternating ±3 followed by 19 points on the centre line.
pub fn mean_hugging() -> Vec<f64> {
    let mut data: Vec<f64> = (0..41)
        .map(|i| if i % 2 == 0 { 3.0 } else { -3.0 })
        .collect();
    data.extend(std::iter::repeat(0.0).take(19));
    data
}
