use crate::core::record::RecordBuffer;
use crate::core::step::Step;
use crate::core::stepping::StepClassifier;
use crate::error::Result;

/// One event worker: a classifier plus its private record buffer.
///
/// Steps of one event are fed strictly in stepping order through `process`.
/// Workers never share state; a run merges their buffers at event or run
/// boundaries via [`drain_into`](EventRunner::drain_into). All of this is
/// `Send`, so workers can live on their own threads.
#[derive(Debug, Clone, Default)]
pub struct EventRunner {
    classifier: StepClassifier,
    records: RecordBuffer,
    events: u64,
}

impl EventRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event-lifecycle hook: reset the per-event aggregator state.
    pub fn begin_event(&mut self) {
        self.classifier.begin_event();
        self.events += 1;
    }

    /// Classify one step against the worker-local buffer.
    pub fn process(&mut self, step: &mut Step) -> Result<()> {
        self.classifier.process(step, &mut self.records)
    }

    /// Records accumulated by this worker so far.
    pub fn records(&self) -> &RecordBuffer {
        &self.records
    }

    /// Read access to the aggregator state (diagnostics).
    pub fn classifier(&self) -> &StepClassifier {
        &self.classifier
    }

    /// Number of events started on this worker.
    pub fn num_events(&self) -> u64 {
        self.events
    }

    /// Move this worker's records into a run-level buffer, preserving their
    /// order. The worker keeps its aggregator state and event count.
    pub fn drain_into(&mut self, run: &mut RecordBuffer) {
        run.absorb(&mut self.records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::step::{StepPoint, StepStatus};
    use crate::core::track::Track;
    use crate::core::units;

    fn crossing(energy_mev: f64, len_cm: f64) -> Result<Step> {
        let track = Track::new(
            1,
            0,
            11,
            "lepton",
            energy_mev * units::MEV,
            energy_mev * units::MEV + 0.511,
            len_cm * units::CM,
            [0.0, 0.0, 1.0],
            None,
        )?;
        Ok(Step::new(
            track,
            StepPoint::new(energy_mev, StepStatus::Ordinary)?,
            StepPoint::new(energy_mev, StepStatus::Boundary)?,
        ))
    }

    #[test]
    fn consecutive_events_are_isolated() -> Result<()> {
        let mut runner = EventRunner::new();

        runner.begin_event();
        runner.process(&mut crossing(10.0, 0.0)?)?;
        runner.process(&mut crossing(8.0, 5.0)?)?;

        runner.begin_event();
        runner.process(&mut crossing(20.0, 0.0)?)?;

        // One record from event 1, none yet from event 2.
        assert_eq!(runner.records().boundary().len(), 1);
        assert_eq!(runner.num_events(), 2);
        Ok(())
    }

    #[test]
    fn drain_into_empties_worker() -> Result<()> {
        let mut runner = EventRunner::new();
        runner.begin_event();
        runner.process(&mut crossing(10.0, 0.0)?)?;
        runner.process(&mut crossing(8.0, 5.0)?)?;

        let mut run = RecordBuffer::new();
        runner.drain_into(&mut run);
        assert!(runner.records().is_empty());
        assert_eq!(run.boundary().len(), 1);
        Ok(())
    }
}
