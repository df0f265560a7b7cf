/// Default upper bound on executed instructions for a single run.
pub const DEFAULT_MAX_STEPS: u64 = 10_000_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of instructions `Cpu::run` may execute before giving up.
    pub max_steps: u64,
}

impl Default for Config {
    fn default() -> Config {
        Config { max_steps: DEFAULT_MAX_STEPS }
    }
}

impl Config {
    pub fn new() -> Config {
        Default::default()
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Config {
        self.max_steps = max_steps;
        self
    }

    /// Never stop a running program.
    pub fn unlimited() -> Config {
        Config { max_steps: u64::MAX }
    }
}

#[test]
fn config_builders() {
    assert_eq!(Config::new().max_steps, DEFAULT_MAX_STEPS);
    assert_eq!(Config::new().with_max_steps(5).max_steps, 5);
    assert_eq!(Config::unlimited().max_steps, u64::MAX);
}
