use std::sync::Arc;

use invoice_roi::domain::scenario::NewScenario;
use invoice_roi::domain::simulation_input::{RawField, SimulationInput};
use invoice_roi::services::roi_calculator::simulate;
use invoice_roi::services::scenario_store::ScenarioStore;
use invoice_roi::services::store_config::StoreConfig;
use tokio::task::JoinSet;

fn scenario_for_volume(volume: f64) -> NewScenario {
    let mut input = SimulationInput::new();
    input.monthly_invoice_volume = RawField::number(volume);
    input.num_ap_staff = RawField::number(1.0);
    input.avg_hours_per_invoice = RawField::number(0.2);
    input.hourly_wage = RawField::number(30.0);
    let result = simulate(&input);
    NewScenario::new(format!("volume {volume}"), result.inputs, result.results)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_persisted() {
    let temp = assert_fs::TempDir::new().unwrap();
    let store = Arc::new(ScenarioStore::new(StoreConfig::new(temp.path())));
    let count = 32;

    let mut tasks = JoinSet::new();
    for i in 0..count {
        let store = Arc::clone(&store);
        tasks.spawn(async move { store.create(scenario_for_volume(i as f64)).await });
    }
    let mut ids = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        ids.push(joined.unwrap().unwrap().id);
    }

    let summaries = store.list().await.unwrap();
    assert_eq!(summaries.len(), count);

    let mut listed: Vec<String> = summaries.into_iter().map(|summary| summary.id).collect();
    listed.sort();
    listed.dedup();
    ids.sort();
    assert_eq!(listed.len(), count);
    assert_eq!(listed, ids);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.document_path()).unwrap()).unwrap();
    assert_eq!(raw["scenarios"].as_array().unwrap().len(), count);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_never_observe_partial_documents() {
    let temp = assert_fs::TempDir::new().unwrap();
    let store = Arc::new(ScenarioStore::new(StoreConfig::new(temp.path())));
    let writes = 24;

    let writer = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for i in 0..writes {
                store.create(scenario_for_volume(i as f64)).await.unwrap();
            }
        })
    };
    let reader = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            // Writes only ever add records, so a shrinking count would mean a
            // torn document was read as empty.
            let mut last_seen = 0;
            for _ in 0..200 {
                let seen = store.list().await.unwrap().len();
                assert!(seen >= last_seen, "count dropped from {last_seen} to {seen}");
                last_seen = seen;
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
    assert_eq!(store.list().await.unwrap().len(), writes);
}

#[tokio::test]
async fn concurrent_deletes_of_same_id_report_one_removal() {
    let temp = assert_fs::TempDir::new().unwrap();
    let store = Arc::new(ScenarioStore::new(StoreConfig::new(temp.path())));
    let target = store.create(scenario_for_volume(10.0)).await.unwrap();
    store.create(scenario_for_volume(20.0)).await.unwrap();

    let mut tasks = JoinSet::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        let id = target.id.clone();
        tasks.spawn(async move { store.delete(&id).await.unwrap() });
    }
    let mut removed = 0;
    while let Some(joined) = tasks.join_next().await {
        if joined.unwrap() {
            removed += 1;
        }
    }

    assert_eq!(removed, 1);
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn independent_stores_do_not_share_state() {
    let first_dir = assert_fs::TempDir::new().unwrap();
    let second_dir = assert_fs::TempDir::new().unwrap();
    let first = ScenarioStore::new(StoreConfig::new(first_dir.path()));
    let second = ScenarioStore::new(StoreConfig::new(second_dir.path()));

    first.create(scenario_for_volume(1.0)).await.unwrap();
    first.create(scenario_for_volume(2.0)).await.unwrap();
    second.create(scenario_for_volume(3.0)).await.unwrap();

    assert_eq!(first.list().await.unwrap().len(), 2);
    assert_eq!(second.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn saved_values_round_trip_exactly() {
    let temp = assert_fs::TempDir::new().unwrap();
    let store = ScenarioStore::new(StoreConfig::new(temp.path()));
    let mut input = SimulationInput::new();
    input.monthly_invoice_volume = RawField::number(1234.567);
    input.num_ap_staff = RawField::number(3.0);
    input.avg_hours_per_invoice = RawField::number(0.1 + 0.2);
    input.hourly_wage = RawField::number(27.33);
    input.error_rate_manual = RawField::number(1.7);
    input.error_cost = RawField::number(13.0 / 7.0);
    input.time_horizon_months = RawField::number(18.0);
    input.one_time_implementation_cost = RawField::number(9999.99);
    let result = simulate(&input);

    let saved = store
        .create(NewScenario::new("Precise", result.inputs, result.results))
        .await
        .unwrap();
    let fetched = store.get(&saved.id).await.unwrap().unwrap();

    assert_eq!(fetched.inputs, result.inputs);
    assert_eq!(fetched.results, result.results);
}

#[tokio::test]
async fn overflowing_results_stay_readable() {
    let temp = assert_fs::TempDir::new().unwrap();
    let store = ScenarioStore::new(StoreConfig::new(temp.path()));
    let mut input = SimulationInput::new();
    input.monthly_invoice_volume = RawField::number(1e300);
    input.num_ap_staff = RawField::number(1.0);
    input.avg_hours_per_invoice = RawField::number(1.0);
    input.hourly_wage = RawField::number(1.0);
    input.time_horizon_months = RawField::number(1e10);
    let result = simulate(&input);
    assert!(result.results.monthly_savings.is_finite());
    assert_eq!(result.results.cumulative_savings, f64::INFINITY);

    let saved = store
        .create(NewScenario::new("Overflow", result.inputs, result.results))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(store.document_path()).unwrap();
    assert!(raw.contains("\"cumulative_savings\": null"));

    let fetched = store.get(&saved.id).await.unwrap().unwrap();
    assert_eq!(fetched.inputs, result.inputs);
    assert_eq!(fetched.results, result.results);

    let listed: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|summary| summary.id)
        .collect();
    assert_eq!(listed, vec![saved.id.clone()]);

    assert!(store.delete(&saved.id).await.unwrap());
    assert!(store.list().await.unwrap().is_empty());
}
