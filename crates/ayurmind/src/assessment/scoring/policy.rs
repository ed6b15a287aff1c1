const CONFIDENCE_MULTIPLIER: f64 = 20.0;

/// Mean selected option score scaled to 0..=100. No selections means no confidence.
pub fn confidence_score(selected_scores: &[u32]) -> f64 {
    if selected_scores.is_empty() {
        return 0.0;
    }

    let sum: u32 = selected_scores.iter().sum();
    let mean = sum as f64 / selected_scores.len() as f64;
    (mean * CONFIDENCE_MULTIPLIER).clamp(0.0, 100.0)
}
