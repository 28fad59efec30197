//! Simulator backend implementation.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use mimir_hal::{
    Backend, BackendAvailability, Capabilities, Counts, ExecutionResult, HalError, HalResult, Job,
    JobId, JobStatus, ValidationResult,
};
use mimir_ir::Circuit;

use crate::statevector::Statevector;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector simulator backend.
///
/// Simulates circuits exactly (no noise) and samples measurement outcomes
/// from the final distribution. Supports circuits up to ~20 qubits
/// (limited by memory).
pub struct StatevectorBackend {
    /// Capabilities, cached at construction.
    capabilities: Capabilities,
    /// Jobs submitted to this backend.
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
}

impl StatevectorBackend {
    /// Default qubit limit.
    const DEFAULT_MAX_QUBITS: u32 = 20;

    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(Self::DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with a custom qubit limit.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Run simulation synchronously.
    ///
    /// The circuit's gates are applied once; the requested number of shots
    /// is then drawn from the final distribution. With terminal-only
    /// measurement the two are equivalent, and this avoids re-simulating
    /// the circuit per shot.
    #[instrument(skip(self, circuit))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!("Starting simulation: {} qubits, {} shots", num_qubits, shots);

        let mut sv = Statevector::new(num_qubits);

        // Apply gates and collect the measurement map. A later measure of
        // the same classical bit overwrites an earlier one.
        let mut measure_map: FxHashMap<u32, u32> = FxHashMap::default();
        for inst in circuit.instructions() {
            if inst.is_measure() {
                measure_map.insert(inst.clbits[0].0, inst.qubits[0].0);
            } else {
                sv.apply(inst);
            }
        }

        // Without measurements, read out every qubit (qubit i → bit i).
        let width = if measure_map.is_empty() {
            for q in 0..num_qubits as u32 {
                measure_map.insert(q, q);
            }
            num_qubits
        } else {
            circuit.num_clbits()
        };

        debug!(
            "Circuit applied: {} ops, sampling {} classical bits",
            circuit.num_ops(),
            width
        );

        let mut counts = Counts::new();
        let mut rng = rand::thread_rng();

        for _ in 0..shots {
            let outcome = sv.sample(&mut rng);

            let mut value: usize = 0;
            for (&clbit, &qubit) in &measure_map {
                value |= ((outcome >> qubit) & 1) << clbit;
            }

            counts.record(format!("{value:0width$b}"), 1);
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }

    fn check_size(&self, circuit: &Circuit) -> HalResult<()> {
        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }
        Ok(())
    }

    fn check_shots(&self, shots: u32) -> HalResult<()> {
        if shots == 0 {
            return Err(HalError::InvalidShots("shot count must be positive".into()));
        }
        if shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{} exceeds the backend maximum of {}",
                shots, self.capabilities.max_shots
            )));
        }
        Ok(())
    }

    fn lock_jobs(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, SimJob>> {
        self.jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for StatevectorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for StatevectorBackend {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        Ok(BackendAvailability::always_available())
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        let mut reasons = vec![];

        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            reasons.push(format!(
                "circuit has {} qubits, backend supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            ));
        }

        for inst in circuit.instructions() {
            if let Some(gate) = inst.as_gate() {
                if !self.capabilities.gate_set.supports(gate.name()) {
                    reasons.push(format!("unsupported gate '{}'", gate.name()));
                }
            }
        }

        // Measurement must be terminal per qubit: sampling happens from the
        // final distribution, so a gate after a measure would be unsound.
        let mut measured: Vec<bool> = vec![false; circuit.num_qubits()];
        for inst in circuit.instructions() {
            if inst.is_measure() {
                measured[inst.qubits[0].index()] = true;
            } else if inst.is_gate() {
                for q in &inst.qubits {
                    if measured[q.index()] {
                        reasons.push(format!("gate '{}' on {} after measurement", inst.name(), q));
                    }
                }
            }
        }

        if reasons.is_empty() {
            Ok(ValidationResult::Valid)
        } else {
            Ok(ValidationResult::Invalid { reasons })
        }
    }

    #[instrument(skip(self, circuit))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        self.check_size(circuit)?;
        self.check_shots(shots)?;

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend(self.name());

        {
            let mut jobs = self.lock_jobs();
            jobs.insert(job_id.0.clone(), SimJob { job, result: None });
        }

        debug!("Submitted job: {}", job_id);

        // Run the simulation immediately; the async lifecycle is preserved
        // for callers, the work itself is in-process.
        let result = self.run_simulation(circuit, shots);

        {
            let mut jobs = self.lock_jobs();
            if let Some(sim_job) = jobs.get_mut(&job_id.0) {
                sim_job.result = Some(result);
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Completed);
            }
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self.lock_jobs();
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self.lock_jobs();
        jobs.get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self.lock_jobs();
        match jobs.get_mut(&job_id.0) {
            Some(sim_job) => {
                if sim_job.job.status.is_pending() {
                    sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
                }
                Ok(())
            }
            None => Err(HalError::JobNotFound(job_id.0.clone())),
        }
    }
}
