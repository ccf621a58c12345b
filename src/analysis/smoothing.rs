use crate::error::KaraokeError;

/// Savitzky-Golay smoothing: least-squares polynomial fit over a sliding
/// window, evaluated at the window center.
///
/// Keeps phrase-level energy swells intact while flattening per-frame
/// jitter that would otherwise read as spurious extrema. Output length
/// equals input length. The first and last `window_length / 2` samples are
/// produced by fitting one polynomial to the leading/trailing full window
/// and evaluating it at the positions the sliding kernel cannot reach.
pub fn savitzky_golay(
    values: &[f32],
    window_length: usize,
    polyorder: usize,
) -> Result<Vec<f32>, KaraokeError> {
    if window_length == 0 || window_length % 2 == 0 {
        return Err(KaraokeError::invalid_parameters(format!(
            "smoothing window must be odd and positive, got {window_length}"
        )));
    }
    if polyorder >= window_length {
        return Err(KaraokeError::invalid_parameters(format!(
            "polynomial order {polyorder} must be smaller than window {window_length}"
        )));
    }
    if window_length >= values.len() {
        return Err(KaraokeError::invalid_parameters(format!(
            "smoothing window {window_length} too large for {} frames; shrink the window or skip smoothing",
            values.len()
        )));
    }

    let half = window_length / 2;
    let kernel = central_kernel(window_length, polyorder)?;

    let mut smoothed = vec![0.0f32; values.len()];
    for i in half..values.len() - half {
        let mut acc = 0.0f64;
        for (k, &w) in kernel.iter().enumerate() {
            acc += w * values[i - half + k] as f64;
        }
        smoothed[i] = acc as f32;
    }

    let head = fit_window(&values[..window_length], polyorder)?;
    for (i, slot) in smoothed.iter_mut().take(half).enumerate() {
        *slot = eval_poly(&head, i as f64 - half as f64) as f32;
    }

    let tail_start = values.len() - window_length;
    let tail = fit_window(&values[tail_start..], polyorder)?;
    for i in values.len() - half..values.len() {
        let x = (i - tail_start) as f64 - half as f64;
        smoothed[i] = eval_poly(&tail, x) as f32;
    }

    Ok(smoothed)
}

/// Convolution weights producing the fitted-polynomial value at the window
/// center: solve (AᵀA) z = e₀ over positions -half..=half, then expand
/// w_i = Σ_k z_k · x_iᵏ.
fn central_kernel(window_length: usize, polyorder: usize) -> Result<Vec<f64>, KaraokeError> {
    let half = (window_length / 2) as i64;
    let dim = polyorder + 1;

    let mut gram = vec![vec![0.0f64; dim]; dim];
    for (j, row) in gram.iter_mut().enumerate() {
        for (k, cell) in row.iter_mut().enumerate() {
            *cell = (-half..=half).map(|x| (x as f64).powi((j + k) as i32)).sum();
        }
    }

    let mut rhs = vec![0.0f64; dim];
    rhs[0] = 1.0;
    let z = solve_linear(gram, rhs)?;

    let kernel = (-half..=half)
        .map(|x| {
            z.iter()
                .enumerate()
                .map(|(k, &zk)| zk * (x as f64).powi(k as i32))
                .sum()
        })
        .collect();
    Ok(kernel)
}

/// Least-squares polynomial coefficients for one full window, positions
/// centered at the window middle.
fn fit_window(window: &[f32], polyorder: usize) -> Result<Vec<f64>, KaraokeError> {
    let half = (window.len() / 2) as i64;
    let dim = polyorder + 1;

    let mut gram = vec![vec![0.0f64; dim]; dim];
    for (j, row) in gram.iter_mut().enumerate() {
        for (k, cell) in row.iter_mut().enumerate() {
            *cell = (-half..=half).map(|x| (x as f64).powi((j + k) as i32)).sum();
        }
    }

    let mut rhs = vec![0.0f64; dim];
    for (j, slot) in rhs.iter_mut().enumerate() {
        *slot = window
            .iter()
            .enumerate()
            .map(|(i, &y)| (i as f64 - half as f64).powi(j as i32) * y as f64)
            .sum();
    }

    solve_linear(gram, rhs)
}

fn eval_poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Gaussian elimination with partial pivoting. The systems here are tiny
/// (order + 1 unknowns) and, for valid window/order pairs, nonsingular.
fn solve_linear(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>, KaraokeError> {
    let n = b.len();
    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&x, &y| a[x][col].abs().total_cmp(&a[y][col].abs()))
            .unwrap_or(col);
        if a[pivot_row][col].abs() < 1e-12 {
            return Err(KaraokeError::invalid_parameters(
                "smoothing design matrix is singular",
            ));
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0f64; n];
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in row + 1..n {
            acc -= a[row][k] * x[k];
        }
        x[row] = acc / a[row][row];
    }
    Ok(x)
}
