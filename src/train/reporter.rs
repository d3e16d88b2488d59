use crate::math::matrix::Matrix;
use crate::train::checkpoint::Checkpoint;

/// Renders checkpoints as the run's console text blocks.
pub struct Reporter;

impl Reporter {
    /// Prints one checkpoint block to stdout.
    pub fn report(checkpoint: &Checkpoint) {
        print!("{}", Reporter::render(checkpoint));
    }

    /// One block per checkpoint: separator, epoch, predictions, the four
    /// parameter matrices, loss. Pure function of the checkpoint.
    pub fn render(checkpoint: &Checkpoint) -> String {
        let mut out = String::new();
        out.push_str(&"_".repeat(80));
        out.push('\n');
        out.push_str(&format!("Epoch:  {}\n", checkpoint.iteration));

        out.push_str("   y_estimated:\n");
        for value in &checkpoint.predictions {
            out.push_str(&format!("     {value:.6}\n"));
        }

        render_matrix(&mut out, "W", &checkpoint.hidden_weights);
        render_matrix(&mut out, "c", &checkpoint.hidden_biases);
        render_matrix(&mut out, "w", &checkpoint.output_weights);
        render_matrix(&mut out, "b", &checkpoint.output_biases);

        out.push_str(&format!("   loss:  {:.6}\n", checkpoint.loss));
        out
    }
}

fn render_matrix(out: &mut String, label: &str, matrix: &Matrix) {
    out.push_str(&format!("   {label}:\n"));
    for row in &matrix.data {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.6}")).collect();
        out.push_str(&format!("     [{}]\n", cells.join(", ")));
    }
}
