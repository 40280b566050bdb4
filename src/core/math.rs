// Math helpers

/// Sign of an axis input: -1.0, 0.0 or 1.0.
pub fn axis_sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
