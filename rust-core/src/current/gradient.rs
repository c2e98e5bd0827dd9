use crate::error::Error;

/// Numerical derivative of `values` sampled at `coords`.
///
/// Interior points use the second-order centred difference for non-uniform
/// spacing; the first and last points use first-order one-sided differences.
/// With spacings h_s = x_i - x_{i-1} and h_d = x_{i+1} - x_i:
///
/// ```text
/// f'_i = (h_s^2 f_{i+1} + (h_d^2 - h_s^2) f_i - h_d^2 f_{i-1}) / (h_s h_d (h_s + h_d))
/// ```
pub fn gradient(values: &[f64], coords: &[f64]) -> Result<Vec<f64>, Error> {
    if values.len() != coords.len() {
        return Err(Error::ShapeMismatch {
            left: "values",
            left_len: values.len(),
            right: "coords",
            right_len: coords.len(),
        });
    }

    let n = values.len();
    if n < 2 {
        return Err(Error::DegenerateInput(format!(
            "at least two samples are needed to differentiate, got {}",
            n
        )));
    }
    if let Some(i) = coords.windows(2).position(|w| w[1] == w[0]) {
        return Err(Error::DegenerateInput(format!(
            "samples {} and {} share the coordinate {}",
            i,
            i + 1,
            coords[i]
        )));
    }

    let mut derivative = Vec::with_capacity(n);
    derivative.push((values[1] - values[0]) / (coords[1] - coords[0]));

    for i in 1..n - 1 {
        let hs = coords[i] - coords[i - 1];
        let hd = coords[i + 1] - coords[i];
        let numerator =
            hs * hs * values[i + 1] + (hd * hd - hs * hs) * values[i] - hd * hd * values[i - 1];
        derivative.push(numerator / (hs * hd * (hs + hd)));
    }

    derivative.push((values[n - 1] - values[n - 2]) / (coords[n - 1] - coords[n - 2]));
    Ok(derivative)
}
