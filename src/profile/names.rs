/// Mark and measure names for one profiled instance.
///
/// Marks are keyed by the instance id alone, measures also carry the
/// factory name so they read well in a report:
///
/// | what          | name                         |
/// |---------------|------------------------------|
/// | run start     | `gen{id}-start`              |
/// | run end       | `gen{id}-end`                |
/// | run measure   | `{name}(#{id})`              |
/// | step start    | `gen{id}-next{step}-start`   |
/// | step end      | `gen{id}-next{step}-end`     |
/// | step measure  | `{name}(#{id}).next(#{step})`|
#[derive(Debug)]
pub(crate) struct Names {
    id: u64,
    run_start: String,
    run_measure: String,
}

impl Names {
    pub(crate) fn new(id: u64, factory: &str) -> Self {
        Self {
            id,
            run_start: format!("gen{id}-start"),
            run_measure: format!("{factory}(#{id})"),
        }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn run_start(&self) -> &str {
        &self.run_start
    }

    pub(crate) fn run_end(&self) -> String {
        format!("gen{}-end", self.id)
    }

    pub(crate) fn run_measure(&self) -> &str {
        &self.run_measure
    }

    pub(crate) fn step_start(&self, step: u64) -> String {
        format!("gen{}-next{step}-start", self.id)
    }

    pub(crate) fn step_end(&self, step: u64) -> String {
        format!("gen{}-next{step}-end", self.id)
    }

    pub(crate) fn step_measure(&self, step: u64) -> String {
        format!("{}.next(#{step})", self.run_measure)
    }
}
