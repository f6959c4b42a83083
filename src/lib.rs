use numpy::ndarray::{Array1, Array2};
use numpy::IntoPyArray;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

pub mod core;
pub mod error;

use crate::core::{EventRunner, Step, StepPoint, StepStatus, Track, TrackStatus};

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// StepRec Python-facing wrapper around the Rust classification core.
///
/// The host engine owns event/run orchestration; this wrapper owns one event
/// worker. Per-event flow:
/// - begin_event()
/// - process_step(...) for every step, in stepping order
/// - read back the record tables at any point via get_boundary_records() /
///   get_photon_records()
#[pyclass]
pub struct StepRecorder {
    runner: EventRunner,
}

#[pymethods]
impl StepRecorder {
    #[new]
    fn new() -> Self {
        Self {
            runner: EventRunner::new(),
        }
    }

    /// Begin a new event: resets the per-event aggregator state.
    fn begin_event(&mut self) {
        self.runner.begin_event();
    }

    /// Feed one propagation step, in engine-internal units (MeV = 1, mm = 1).
    ///
    /// Parameters
    /// - track_id, parent_id: track identity; parent_id 0 marks the primary
    /// - pdg: PDG species code
    /// - category: engine species category tag (e.g. "photon", "lepton")
    /// - kinetic_energy, total_energy: current track energies
    /// - track_length: cumulative path length
    /// - direction: momentum direction, iterable of 3 floats (non-zero)
    /// - pre_energy: pre-step kinetic energy; defaults to the post-step value
    /// - boundary: True when the step ended on a geometry boundary
    /// - creator_process: creation-process name; None for primaries
    ///
    /// Returns True when the engine must terminate this track and its
    /// descendants. Raises ValueError on invalid kinematics or a photon-class
    /// track without provenance.
    #[pyo3(signature = (track_id, parent_id, pdg, category, kinetic_energy, total_energy,
                        track_length, direction, pre_energy=None, boundary=false,
                        creator_process=None))]
    #[allow(clippy::too_many_arguments)]
    fn process_step(
        &mut self,
        track_id: u32,
        parent_id: u32,
        pdg: i32,
        category: &str,
        kinetic_energy: f64,
        total_energy: f64,
        track_length: f64,
        direction: Vec<f64>,
        pre_energy: Option<f64>,
        boundary: bool,
        creator_process: Option<String>,
    ) -> PyResult<bool> {
        if direction.len() != 3 {
            return Err(py_err("direction must have length 3"));
        }
        let track = Track::new(
            track_id,
            parent_id,
            pdg,
            category,
            kinetic_energy,
            total_energy,
            track_length,
            [direction[0], direction[1], direction[2]],
            creator_process,
        )
        .map_err(py_err)?;
        let pre = StepPoint::new(pre_energy.unwrap_or(kinetic_energy), StepStatus::Ordinary)
            .map_err(py_err)?;
        let post_status = if boundary {
            StepStatus::Boundary
        } else {
            StepStatus::Ordinary
        };
        let post = StepPoint::new(kinetic_energy, post_status).map_err(py_err)?;

        let mut step = Step::new(track, pre, post);
        self.runner.process(&mut step).map_err(py_err)?;
        Ok(step.track.status == TrackStatus::KillWithSecondaries)
    }

    /// Boundary-crossing records as an (N, 5) float64 array with columns
    /// [energy, delta_energy, length, delta_length, loss_rate] (MeV / cm).
    fn get_boundary_records<'py>(
        &self,
        py: Python<'py>,
    ) -> PyResult<Py<numpy::PyArray2<f64>>> {
        let recs = self.runner.records().boundary();
        let mut arr = Array2::<f64>::zeros((recs.len(), 5));
        for (i, r) in recs.iter().enumerate() {
            arr[[i, 0]] = r.energy;
            arr[[i, 1]] = r.delta_energy;
            arr[[i, 2]] = r.length;
            arr[[i, 3]] = r.delta_length;
            arr[[i, 4]] = r.loss_rate;
        }
        Ok(arr.into_pyarray(py).unbind())
    }

    /// Photon-emission records as a dict of per-column numpy arrays
    /// ("primary_energy", "primary_length", "angle", "energy", "hash")
    /// plus "process": a list of creation-process names.
    fn get_photon_records<'py>(&self, py: Python<'py>) -> PyResult<Py<PyDict>> {
        let recs = self.runner.records().photon();
        let n = recs.len();
        let mut primary_energy = Array1::<f64>::zeros(n);
        let mut primary_length = Array1::<f64>::zeros(n);
        let mut angle = Array1::<f64>::zeros(n);
        let mut energy = Array1::<f64>::zeros(n);
        let mut hash = Array1::<u64>::zeros(n);
        let mut process: Vec<&str> = Vec::with_capacity(n);
        for (i, r) in recs.iter().enumerate() {
            primary_energy[i] = r.primary_energy;
            primary_length[i] = r.primary_length;
            angle[i] = r.angle;
            energy[i] = r.energy;
            hash[i] = r.process_hash;
            process.push(&r.process);
        }
        let out = PyDict::new(py);
        out.set_item("primary_energy", primary_energy.into_pyarray(py))?;
        out.set_item("primary_length", primary_length.into_pyarray(py))?;
        out.set_item("angle", angle.into_pyarray(py))?;
        out.set_item("energy", energy.into_pyarray(py))?;
        out.set_item("hash", hash.into_pyarray(py))?;
        out.set_item("process", process)?;
        Ok(out.into())
    }

    /// Number of boundary-crossing records accumulated so far.
    fn num_boundary_records(&self) -> usize {
        self.runner.records().boundary().len()
    }

    /// Number of photon-emission records accumulated so far.
    fn num_photon_records(&self) -> usize {
        self.runner.records().photon().len()
    }

    /// Number of events started on this recorder.
    fn num_events(&self) -> u64 {
        self.runner.num_events()
    }

    /// Latest primary-track state seen this event as (energy_mev, length_cm).
    fn get_primary_state(&self) -> (f64, f64) {
        let cls = self.runner.classifier();
        (cls.primary_energy(), cls.primary_length())
    }
}

/// The steprec Python module entry point.
#[pymodule]
fn steprec(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<StepRecorder>()?;
    Ok(())
}
