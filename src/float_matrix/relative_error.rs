// normalized difference between two scalars, used to decide when a floating
// point residual should be treated as an exact zero
pub fn relative_error(a: f64, b: f64) -> f64 {
    let error = (a - b).abs() / a.abs().max(b.abs());
    if error.is_finite() {
        error
    } else {
        // 0/0, or a NaN/Inf anywhere in the computation: a comparison that
        // produced no information reads as no error, so callers snap to zero
        0.0
    }
}
