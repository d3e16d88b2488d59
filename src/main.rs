use std::path::Path;

use xornet::logging::run_log::{self, RunInfo};
use xornet::network::xor_net::{HIDDEN_UNITS, INPUT_FEATURES, OUTPUT_UNITS};
use xornet::{dataset, Activation, Reporter, TrainConfig, Trainer, XorNet};

fn main() -> std::io::Result<()> {
    let config = TrainConfig::default();

    // One-time run description for external viewers; never read back.
    run_log::write_run_log(
        Path::new("logs/xor_logs"),
        &RunInfo {
            name: "xor".to_string(),
            input_features: INPUT_FEATURES,
            hidden_units: HIDDEN_UNITS,
            output_units: OUTPUT_UNITS,
            hidden_activation: Activation::ReLU,
            output_activation: Activation::Sigmoid,
            learning_rate: config.learning_rate,
            iterations: config.iterations,
        },
    )?;

    let mut trainer = Trainer::new(
        XorNet::random(),
        dataset::xor_inputs(),
        dataset::xor_targets(),
        config,
    );
    let summary = trainer.run(Reporter::report);

    println!("{}", "_".repeat(80));
    println!("Elapsed time  {:.3}s", summary.elapsed.as_secs_f64());
    Ok(())
}
