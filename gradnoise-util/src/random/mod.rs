/// Draws a seed fraction in `[0, 1)` from the thread-local, OS-seeded generator.
///
/// Used when a noise field is built without an explicit seed; the caller should
/// record the result if the field ever has to be reproduced.
pub fn entropy_fraction() -> f64 {
    rand::random::<f64>()
}
