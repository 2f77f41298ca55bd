// src/utils/report.rs

use crate::model::{OrderingConvention, OrientationSettings, Tensor};
use crate::physics::orientation::{euler_between, tensor_euler};

/// Generates the text for the analysis tab when a tensor is selected
pub fn tensor_summary(tensor: &Tensor, label: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Tensor: {}\n", label));
    out.push_str("--------------------------------------------------\n");

    let m = tensor.raw();
    for i in 0..3 {
        out.push_str(&format!(
            "{:<12.5} {:<12.5} {:<12.5}\n",
            m[(i, 0)],
            m[(i, 1)],
            m[(i, 2)]
        ));
    }
    out.push_str("--------------------------------------------------\n");

    let inc = tensor.eigenvalues(OrderingConvention::Increasing);
    let haeb = tensor.eigenvalues(OrderingConvention::Haeberlen);
    out.push_str(&format!(
        "Eigenvalues:    {:<12.5} {:<12.5} {:<12.5}\n",
        inc[0], inc[1], inc[2]
    ));
    out.push_str(&format!(
        "Haeberlen:      {:<12.5} {:<12.5} {:<12.5}\n",
        haeb[0], haeb[1], haeb[2]
    ));

    let inv = tensor.invariants();
    out.push_str(&format!("Isotropy:       {:.5}\n", inv.isotropy));
    out.push_str(&format!("Anisotropy:     {:.5}\n", inv.anisotropy));
    out.push_str(&format!("Red. aniso:     {:.5}\n", inv.reduced_anisotropy));
    out.push_str(&format!("Asymmetry:      {:.5}\n", inv.asymmetry));
    out.push_str(&format!("Span:           {:.5}\n", inv.span));
    out.push_str(&format!("Skew:           {:.5}\n", inv.skew));

    let settings = OrientationSettings::default().with_ordering(OrderingConvention::Haeberlen);
    match tensor_euler(tensor, &settings) {
        Ok(solution) => {
            out.push_str(&format!("Euler (zyz):    {}\n", solution.angles));
            for adv in &solution.advisories {
                out.push_str(&format!("Note: {}\n", adv));
            }
        }
        Err(e) => out.push_str(&format!("Euler (zyz):    unavailable ({})\n", e)),
    }

    out
}

/// Generates the text for the analysis tab when two tensors are selected
pub fn relative_orientation_summary(a: &Tensor, b: &Tensor, label_a: &str, label_b: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Selection: {} - {}\n\n", label_a, label_b));

    let settings = OrientationSettings::default().with_ordering(OrderingConvention::Haeberlen);
    match euler_between(a, b, &settings) {
        Ok(solution) => {
            out.push_str(&format!("Relative Euler (zyz): {}\n", solution.angles));
            for adv in &solution.advisories {
                out.push_str(&format!("Note: {}\n", adv));
            }
        }
        Err(e) => out.push_str(&format!("Relative Euler (zyz): unavailable ({})\n", e)),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_invariants() {
        let t = Tensor::new([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, -6.0]]);
        let text = tensor_summary(&t, "C1 ms");
        assert!(text.contains("Tensor: C1 ms"));
        assert!(text.contains("Isotropy:       -1.00000"));
        assert!(text.contains("Asymmetry:      0.20000"));
        assert!(text.contains("Euler (zyz):"));
    }

    #[test]
    fn test_pair_summary_mentions_identical_tensors() {
        let t = Tensor::new([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, -6.0]]);
        let text = relative_orientation_summary(&t, &t.clone(), "C1", "C1");
        assert!(text.contains("Relative Euler"));
        assert!(text.contains("identical"));
    }
}
