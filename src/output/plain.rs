use crate::drift::DriftReport;
use crate::stats::Summary;

/// One line per test, in fixed order: minimum, mean/std, IQR.
///
/// Booleans are capitalised (`True`/`False`) so existing consumers of the
/// historical output keep parsing it.
pub fn render_report(report: &DriftReport) -> String {
    report
        .results
        .iter()
        .map(|r| format!("{}\n", python_bool(r.drifted)))
        .collect()
}

pub fn render_summary(summary: &Summary) -> String {
    let rows = [
        ("count", summary.count.to_string()),
        ("min", summary.min.to_string()),
        ("max", summary.max.to_string()),
        ("mean", summary.mean.to_string()),
        ("std_dev", summary.std_dev.to_string()),
        ("q25", summary.q25.to_string()),
        ("median", summary.median.to_string()),
        ("q75", summary.q75.to_string()),
        ("iqr", summary.iqr.to_string()),
    ];
    rows.iter()
        .map(|(name, value)| format!("{name} {value}\n"))
        .collect()
}

fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drift::{detect, Direction, DriftThresholds};
    use crate::scores::ScoreHistory;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_three_lines_in_fixed_order() {
        let history = ScoreHistory::new(vec![0.5, 0.6, 0.7, 0.8]).unwrap();
        let report = detect(
            &history,
            0.3625,
            Direction::HigherIsBetter,
            DriftThresholds::default(),
        )
        .unwrap();

        assert_eq!(render_report(&report), "True\nTrue\nFalse\n");
    }

    #[test]
    fn test_summary_lines() {
        let summary = Summary::from_values(&[1.0, 3.0]).unwrap();
        let expected = indoc! {"
            count 2
            min 1
            max 3
            mean 2
            std_dev 1
            q25 1.5
            median 2
            q75 2.5
            iqr 1
        "};
        assert_eq!(render_summary(&summary), expected);
    }
}
