//! End-to-end tests of the per-regime export bundle.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::indexing_slicing
)]

use tenure_report::export_regime;
use tenure_types::{AgentSnapshot, AgentType, Ethnicity, HouseId, HouseRecord, HouseholdId};

fn snapshot(step: u64, agent: u64, agent_type: AgentType, ethnicity: Ethnicity) -> AgentSnapshot {
    AgentSnapshot {
        step,
        agent_id: HouseholdId(agent),
        wealth: 1_000.0 * f64::from(u32::try_from(agent).unwrap()),
        agent_type,
        ethnicity,
        num_houses: u32::from(agent_type == AgentType::Owner),
    }
}

fn history() -> Vec<AgentSnapshot> {
    vec![
        snapshot(1, 0, AgentType::Displaced, Ethnicity::Black),
        snapshot(1, 1, AgentType::Owner, Ethnicity::White),
        snapshot(1, 2, AgentType::Owner, Ethnicity::Black),
        snapshot(2, 0, AgentType::Renter, Ethnicity::Black),
        snapshot(2, 1, AgentType::Owner, Ethnicity::White),
        snapshot(2, 2, AgentType::Owner, Ethnicity::Black),
    ]
}

fn houses() -> Vec<HouseRecord> {
    vec![
        HouseRecord {
            id: HouseId(11),
            price: 1_000_000.0,
            rent: 1_000.0,
        },
        HouseRecord {
            id: HouseId(12),
            price: 1_000_250.5,
            rent: 750.5,
        },
    ]
}

#[test]
fn bundle_writes_all_four_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("output");

    let files = export_regime(&out, 2, &history(), &houses()).unwrap();

    for path in files.paths() {
        assert!(path.exists(), "missing {}", path.display());
        assert!(path.starts_with(&out));
    }
    assert!(files.summary_stats.ends_with("summary_stats_2.csv"));
    assert!(files.pivot_table.ends_with("pivot_table_2.xlsx"));
}

#[test]
fn summary_file_is_grouped_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let files = export_regime(dir.path(), 1, &history(), &houses()).unwrap();

    let text = std::fs::read_to_string(&files.summary_stats).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Step,AgentType,Ethnicity,Count",
            "1,displaced,black,1",
            "1,owner,black,1",
            "1,owner,white,1",
            "2,owner,black,1",
            "2,owner,white,1",
            "2,renter,black,1",
        ]
    );
}

#[test]
fn wealth_file_has_rounded_means() {
    let dir = tempfile::tempdir().unwrap();
    let files = export_regime(dir.path(), 1, &history(), &houses()).unwrap();

    let text = std::fs::read_to_string(&files.wealth_report).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Step,AgentType,Wealth,NumHouses");
    // Owners at step 1 are agents 1 and 2: wealth 1000 and 2000.
    assert_eq!(lines[2], "1,owner,1500.0,1.0");
    assert_eq!(lines.len(), 5);
}

#[test]
fn house_file_lists_every_house() {
    let dir = tempfile::tempdir().unwrap();
    let files = export_regime(dir.path(), 1, &history(), &houses()).unwrap();

    let text = std::fs::read_to_string(&files.house_data).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["ID,Price,Rent", "11,1000000.0,1000.0", "12,1000250.5,750.5"]);
}

#[test]
fn empty_history_still_produces_headers() {
    let dir = tempfile::tempdir().unwrap();
    let files = export_regime(dir.path(), 5, &[], &[]).unwrap();

    let text = std::fs::read_to_string(&files.summary_stats).unwrap();
    assert_eq!(text, "Step,AgentType,Ethnicity,Count\n");
    assert!(files.pivot_table.exists());
}
