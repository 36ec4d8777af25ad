//! Steps of the "journey through the studio" block.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyStep {
    pub title: &'static str,
    pub text: &'static str,
    /// Marks the step the page opens on.
    pub start_active: bool,
}

/// The pre-marked step, or the first one when none is marked.
pub fn initial_index(steps: &[JourneyStep]) -> usize {
    steps.iter().position(|step| step.start_active).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(title: &'static str, start_active: bool) -> JourneyStep {
        JourneyStep {
            title,
            text: "",
            start_active,
        }
    }

    #[test]
    fn premarked_step_opens_first() {
        let steps = [step("one", false), step("two", true), step("three", false)];
        assert_eq!(initial_index(&steps), 1);
    }

    #[test]
    fn falls_back_to_the_first_step() {
        let steps = [step("one", false), step("two", false)];
        assert_eq!(initial_index(&steps), 0);
        assert_eq!(initial_index(&[]), 0);
    }
}
