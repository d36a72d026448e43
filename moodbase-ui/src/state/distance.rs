//! Distance Stepper
//!
//! Bounded search radius in km. The value is always within
//! [`MIN_RADIUS_KM`, `MAX_RADIUS_KM`] and a multiple of [`STEP_KM`].

pub const MIN_RADIUS_KM: u32 = 5;
pub const MAX_RADIUS_KM: u32 = 100;
pub const STEP_KM: u32 = 5;
pub const DEFAULT_RADIUS_KM: u32 = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistanceStepper {
    value: u32,
}

impl Default for DistanceStepper {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS_KM)
    }
}

impl DistanceStepper {
    /// Clamp into range and snap down onto the step grid
    pub fn new(initial: u32) -> Self {
        let clamped = initial.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);
        Self {
            value: clamped - clamped % STEP_KM,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn can_increment(&self) -> bool {
        self.value < MAX_RADIUS_KM
    }

    pub fn can_decrement(&self) -> bool {
        self.value > MIN_RADIUS_KM
    }

    /// Step up; no-op at the maximum. Returns whether the value changed.
    pub fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.value += STEP_KM;
        true
    }

    /// Step down; no-op at the minimum. Returns whether the value changed.
    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.value -= STEP_KM;
        true
    }

    /// Apply typed input. Rejected (and ignored) unless it parses to an
    /// in-range multiple of the step. Returns whether it was accepted.
    pub fn set_from_input(&mut self, input: &str) -> bool {
        match input.trim().parse::<u32>() {
            Ok(v) if (MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&v) && v % STEP_KM == 0 => {
                self.value = v;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(stepper: &DistanceStepper) {
        let v = stepper.value();
        assert!((MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&v), "out of range: {}", v);
        assert_eq!(v % STEP_KM, 0, "off step: {}", v);
    }

    #[test]
    fn test_default_value() {
        assert_eq!(DistanceStepper::default().value(), DEFAULT_RADIUS_KM);
    }

    #[test]
    fn test_new_clamps_and_snaps() {
        assert_eq!(DistanceStepper::new(0).value(), 5);
        assert_eq!(DistanceStepper::new(12).value(), 10);
        assert_eq!(DistanceStepper::new(250).value(), 100);
    }

    #[test]
    fn test_decrement_at_minimum_is_noop() {
        let mut stepper = DistanceStepper::new(MIN_RADIUS_KM);
        assert!(!stepper.decrement());
        assert_eq!(stepper.value(), MIN_RADIUS_KM);
    }

    #[test]
    fn test_increment_at_maximum_is_noop() {
        let mut stepper = DistanceStepper::new(MAX_RADIUS_KM);
        assert!(!stepper.increment());
        assert_eq!(stepper.value(), MAX_RADIUS_KM);
    }

    #[test]
    fn test_steps() {
        let mut stepper = DistanceStepper::new(25);
        assert!(stepper.increment());
        assert_eq!(stepper.value(), 30);
        assert!(stepper.decrement());
        assert!(stepper.decrement());
        assert_eq!(stepper.value(), 20);
    }

    #[test]
    fn test_input_accepted() {
        let mut stepper = DistanceStepper::default();
        assert!(stepper.set_from_input("50"));
        assert_eq!(stepper.value(), 50);
        assert!(stepper.set_from_input(" 5 "));
        assert_eq!(stepper.value(), 5);
    }

    #[test]
    fn test_input_rejected() {
        let mut stepper = DistanceStepper::new(40);
        for input in ["", "abc", "0", "3", "7", "101", "105", "-5", "12.5", "1e2"] {
            assert!(!stepper.set_from_input(input), "{:?} accepted", input);
            assert_eq!(stepper.value(), 40);
        }
    }

    #[test]
    fn test_any_operation_sequence_stays_valid() {
        // Deterministic pseudo-random walk over all three operations
        let inputs = ["15", "99", "100", "x", "5", "55", "0", "-"];
        let mut stepper = DistanceStepper::default();
        let mut seed: u32 = 0x2545_f491;

        for _ in 0..2_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            match seed % 3 {
                0 => {
                    stepper.increment();
                }
                1 => {
                    stepper.decrement();
                }
                _ => {
                    stepper.set_from_input(inputs[(seed as usize / 3) % inputs.len()]);
                }
            }
            assert_valid(&stepper);
        }
    }
}
