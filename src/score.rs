/// Distance of a query to one reference. Lower is more similar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub label: String,
    pub distance: f64,
}
impl ScoreEntry {
    pub fn new<S: Into<String>>(label: S, distance: f64) -> Self {
        ScoreEntry {
            label: label.into(),
            distance,
        }
    }
    /// Sorts entries by ascending distance, breaking ties by label.
    pub fn rank(entries: &mut [ScoreEntry]) {
        entries.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.label.cmp(&b.label))
        });
    }
}

/// Per-metric distances of a query against every reference, in library order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreResult {
    pub euclidean: Vec<ScoreEntry>,
    pub dtw: Vec<ScoreEntry>,
}
impl ScoreResult {
    pub fn ranked(&self) -> ScoreResult {
        let mut result = self.clone();
        ScoreEntry::rank(&mut result.euclidean);
        ScoreEntry::rank(&mut result.dtw);
        result
    }
    pub fn best_euclidean(&self) -> Option<&ScoreEntry> {
        best(&self.euclidean)
    }
    pub fn best_dtw(&self) -> Option<&ScoreEntry> {
        best(&self.dtw)
    }
}

fn best(entries: &[ScoreEntry]) -> Option<&ScoreEntry> {
    entries.iter().min_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.label.cmp(&b.label))
    })
}

#[test]
fn it_ranks_by_distance_then_label() {
    let mut entries = vec![
        ScoreEntry::new("c", 2.),
        ScoreEntry::new("b", 0.5),
        ScoreEntry::new("a", 2.),
        ScoreEntry::new("d", f64::INFINITY),
    ];
    ScoreEntry::rank(&mut entries);
    let labels = entries.iter().map(|e| e.label.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, vec!["b", "a", "c", "d"]);
}

#[test]
fn it_leaves_the_unranked_result_untouched() {
    let result = ScoreResult {
        euclidean: vec![ScoreEntry::new("a", 3.), ScoreEntry::new("b", 1.)],
        dtw: vec![ScoreEntry::new("a", 0.2), ScoreEntry::new("b", 0.4)],
    };
    let ranked = result.ranked();
    assert_eq!(ranked.euclidean[0].label, "b");
    assert_eq!(ranked.dtw[0].label, "a");
    assert_eq!(result.euclidean[0].label, "a");
    assert_eq!(result.best_euclidean().unwrap().label, "b");
    assert_eq!(result.best_dtw().unwrap().label, "a");
    assert!(ScoreResult::default().best_dtw().is_none());
}
