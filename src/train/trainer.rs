use std::time::{Duration, Instant};

use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::network::xor_net::XorNet;
use crate::optim::sgd::Sgd;
use crate::train::checkpoint::Checkpoint;
use crate::train::train_config::TrainConfig;

/// Owns the model, the fixed dataset and the optimizer, and drives the
/// strictly sequential training loop.
pub struct Trainer {
    net: XorNet,
    inputs: Matrix,
    targets: Matrix,
    optimizer: Sgd,
    config: TrainConfig,
}

/// What `run` hands back once the fixed iteration count is exhausted.
#[derive(Debug, Clone)]
pub struct TrainingSummary {
    pub iterations: usize,
    /// Loss reported by the final update (measured on its pre-update parameters).
    pub final_loss: f64,
    /// Total wall-clock time spent inside the loop.
    pub elapsed: Duration,
}

impl Trainer {
    /// # Panics
    /// Panics if the config asks for zero iterations or a zero report period,
    /// or if inputs and targets disagree on the number of rows.
    pub fn new(net: XorNet, inputs: Matrix, targets: Matrix, config: TrainConfig) -> Trainer {
        assert!(config.iterations > 0, "iterations must be at least 1");
        assert!(config.report_every > 0, "report_every must be at least 1");
        assert_eq!(
            inputs.rows, targets.rows,
            "inputs and targets must have equal row counts"
        );
        let optimizer = Sgd::new(config.learning_rate);
        Trainer {
            net,
            inputs,
            targets,
            optimizer,
            config,
        }
    }

    /// Runs the full loop: update, then snapshot on every `report_every`-th
    /// iteration (0, report_every, 2·report_every, …).
    ///
    /// `observe` is an observability hook only; training behaves identically
    /// when it does nothing.
    pub fn run(&mut self, mut observe: impl FnMut(&Checkpoint)) -> TrainingSummary {
        let started = Instant::now();
        let mut last_loss = 0.0;

        for iteration in 0..self.config.iterations {
            last_loss = self.net.step(&self.inputs, &self.targets, &self.optimizer);
            if iteration % self.config.report_every == 0 {
                let checkpoint = self.snapshot(iteration);
                observe(&checkpoint);
            }
        }

        TrainingSummary {
            iterations: self.config.iterations,
            final_loss: last_loss,
            elapsed: started.elapsed(),
        }
    }

    /// Captures current predictions, parameters and loss. A pure read:
    /// repeated snapshots without an intervening update are identical.
    pub fn snapshot(&mut self, iteration: usize) -> Checkpoint {
        let predicted = self.net.forward(&self.inputs);
        let loss = MseLoss::loss(&predicted, &self.targets);
        Checkpoint {
            iteration,
            predictions: predicted.data.iter().map(|row| row[0]).collect(),
            hidden_weights: self.net.hidden.weights.clone(),
            hidden_biases: self.net.hidden.biases.clone(),
            output_weights: self.net.output.weights.clone(),
            output_biases: self.net.output.biases.clone(),
            loss,
        }
    }

    pub fn net(&self) -> &XorNet {
        &self.net
    }
}
