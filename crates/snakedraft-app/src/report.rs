// Draft report rendering: pick order line, roster heading, pretty JSON.

use snakedraft_core::{DraftOutcome, PickOrderEntry};

/// The round-1 pick order as `A (17), B (42), ...`.
pub fn order_line(order: &[PickOrderEntry]) -> String {
    order
        .iter()
        .map(PickOrderEntry::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the full report printed to stdout.
pub fn render(outcome: &DraftOutcome) -> serde_json::Result<String> {
    let teams = serde_json::to_string_pretty(&outcome.rosters)?;
    Ok(format!(
        "Draft order: {}\nTeams:\n{}\n",
        order_line(&outcome.pick_order),
        teams
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use snakedraft_core::PreferenceStore;

    #[test]
    fn order_line_formats_names_and_keys() {
        let order = vec![
            PickOrderEntry {
                captain: "Ann".into(),
                key: 3,
            },
            PickOrderEntry {
                captain: "Bob".into(),
                key: 71,
            },
        ];
        assert_eq!(order_line(&order), "Ann (3), Bob (71)");
        assert_eq!(order_line(&[]), "");
    }

    #[test]
    fn render_includes_headings_and_indented_json() {
        let mut store = PreferenceStore::load(vec![("Ann", "x")]);
        store.initialize_supply(["x"], 1);
        let outcome =
            snakedraft_core::run(&mut store, 1, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

        let text = render(&outcome).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Draft order: Ann ("));
        assert_eq!(lines.next(), Some("Teams:"));
        let json: String = lines.collect::<Vec<_>>().join("\n");
        assert_eq!(json, "{\n  \"Ann\": [\n    \"x\"\n  ]\n}");
    }

    #[test]
    fn render_empty_draft() {
        let outcome = snakedraft_core::run(
            &mut PreferenceStore::default(),
            6,
            &mut ChaCha8Rng::seed_from_u64(1),
        )
        .unwrap();
        assert_eq!(render(&outcome).unwrap(), "Draft order: \nTeams:\n{}\n");
    }
}
