//! Idle bob animation for hung frames

/// Vertical amplitude of the bob, in world units
pub const BOB_AMPLITUDE: f32 = 0.02;

/// Vertical offset at `elapsed` seconds for a frame hung at `phase_x`
///
/// The x position doubles as the phase so neighbouring frames drift out of
/// step. Purely cosmetic; callers never write it back to the model.
pub fn bob_offset(elapsed: f32, phase_x: f32, amplitude: f32) -> f32 {
    (elapsed + phase_x).sin() * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_bob_bounded_by_amplitude() {
        for step in 0..200 {
            let t = step as f32 * 0.1;
            assert!(bob_offset(t, -6.0, BOB_AMPLITUDE).abs() <= BOB_AMPLITUDE);
        }
    }

    #[test]
    fn test_bob_phase() {
        assert_eq!(bob_offset(0.0, 0.0, BOB_AMPLITUDE), 0.0);
        assert!((bob_offset(FRAC_PI_2, 0.0, BOB_AMPLITUDE) - BOB_AMPLITUDE).abs() < 1e-6);
        assert_eq!(bob_offset(3.0, 1.0, 0.0), 0.0);
    }
}
