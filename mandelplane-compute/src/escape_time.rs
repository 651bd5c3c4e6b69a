use mandelplane_core::EngineConfig;

/// Escape-time iteration count for the point c = (real, imag).
///
/// Runs z ← z² + c starting from z = c and stops as soon as |z| reaches the
/// bailout radius or the iteration budget is spent. Returns 0 when c itself
/// lies outside the bailout radius and `config.max_iterations` when the orbit
/// never escapes (the point is treated as inside the set).
///
/// Pure f64 arithmetic. Magnitudes are compared squared, so no square root is
/// taken in the loop.
pub fn count_iterations(real: f64, imag: f64, config: &EngineConfig) -> u32 {
    let bailout_sq = config.bailout_sq();
    let max_iterations = config.max_iterations;

    let mut zx = real;
    let mut zy = imag;
    let mut iterations = 0;

    while iterations < max_iterations {
        let zx_sq = zx * zx;
        let zy_sq = zy * zy;
        if zx_sq + zy_sq >= bailout_sq {
            break;
        }

        // z = z^2 + c
        let new_zx = zx_sq - zy_sq + real;
        let new_zy = 2.0 * zx * zy + imag;
        zx = new_zx;
        zy = new_zy;
        iterations += 1;
    }

    iterations
}
