//! Integration tests for the SQLite repositories against a real database file.

use rust_decimal_macros::dec;
use tempfile::TempDir;

use fba_core::calculator::{
    calculate_profit, AdvertisingMode, AfterSale, CalculatorSettings, DuringSale,
    FbaCalculationResult, FbaCalculatorInput, PrePurchase,
};
use fba_core::money::MoneyInput;
use fba_core::projects::{BranchDraft, ProjectDraft, ProjectRepositoryTrait};
use fba_core::settings::SettingsRepositoryTrait;
use fba_storage_sqlite::projects::ProjectRepository;
use fba_storage_sqlite::settings::SettingsRepository;
use fba_storage_sqlite::{create_pool, init, run_migrations, spawn_writer};

struct TestDb {
    // Keeps the database directory alive for the duration of the test.
    _dir: TempDir,
    repository: ProjectRepository,
    settings: SettingsRepository,
}

fn setup() -> TestDb {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("fba.db");
    let db_path = init(db_path.to_str().unwrap()).expect("init database");
    let pool = create_pool(&db_path).expect("create pool");
    run_migrations(&pool).expect("run migrations");
    let writer = spawn_writer((*pool).clone());

    TestDb {
        _dir: dir,
        repository: ProjectRepository::new(pool.clone(), writer.clone()),
        settings: SettingsRepository::new(pool, writer),
    }
}

fn input() -> FbaCalculatorInput {
    FbaCalculatorInput {
        pre_purchase: PrePurchase {
            unit_cost: MoneyInput::from_usd(dec!(10.00)),
            quantity: 100,
            shipping_per_unit: MoneyInput::from_usd(dec!(2.00)),
        },
        during_sale: DuringSale {
            selling_price: MoneyInput::from_usd(dec!(29.99)),
            daily_sales: 5,
            sales_days: 20,
            advertising_mode: AdvertisingMode::Percentage,
            daily_ad_budget: None,
            ad_percentage: Some(dec!(10)),
            referral_fee_rate: dec!(15),
            fba_fee_per_unit: MoneyInput::from_usd(dec!(4.50)),
            monthly_storage_fee: MoneyInput::from_usd(dec!(0.50)),
        },
        after_sale: AfterSale {
            return_rate: dec!(5),
            resellable_rate: dec!(80),
        },
        settings: CalculatorSettings {
            exchange_rate: dec!(7.25),
        },
    }
}

fn draft(name: &str) -> (ProjectDraft, FbaCalculationResult) {
    let input = input();
    let result = calculate_profit(&input).expect("valid input");
    (
        ProjectDraft {
            name: name.to_string(),
            description: String::new(),
            input,
        },
        result,
    )
}

fn branch(name: &str) -> BranchDraft {
    BranchDraft {
        name: name.to_string(),
        description: String::new(),
    }
}

#[tokio::test]
async fn roots_mint_sequential_segments() {
    let db = setup();
    let (d1, r1) = draft("first");
    let (d2, r2) = draft("second");
    let (d3, r3) = draft("third");

    let a = db.repository.insert_root(d1, r1).await.unwrap();
    let b = db.repository.insert_root(d2, r2).await.unwrap();
    let c = db.repository.insert_root(d3, r3).await.unwrap();

    assert_eq!(a.branch_path, "A");
    assert_eq!(b.branch_path, "B");
    assert_eq!(c.branch_path, "C");
}

#[tokio::test]
async fn saved_project_round_trips_snapshots() {
    let db = setup();
    let (d, r) = draft("round trip");
    let created = db.repository.insert_root(d, r).await.unwrap();

    let loaded = db
        .repository
        .get_project(&created.id)
        .unwrap()
        .expect("project exists");
    assert_eq!(loaded.input, created.input);
    assert_eq!(loaded.result, created.result);
    assert_eq!(loaded.result.summary.total_revenue.usd, dec!(2999.00));
    assert_eq!(loaded.created_at, created.created_at);
}

#[tokio::test]
async fn get_unknown_project_is_none() {
    let db = setup();
    assert!(db.repository.get_project("missing").unwrap().is_none());
}

#[tokio::test]
async fn branches_extend_the_parent_path() {
    let db = setup();
    let (d1, r1) = draft("a");
    let (d2, r2) = draft("b");
    let _a = db.repository.insert_root(d1, r1).await.unwrap();
    let b = db.repository.insert_root(d2, r2).await.unwrap();

    let first = db
        .repository
        .insert_branch(&b.id, branch("variant"))
        .await
        .unwrap()
        .expect("parent exists");
    assert_eq!(first.branch_path, "B-A");
    assert_eq!(first.parent_id.as_deref(), Some(b.id.as_str()));
    assert_eq!(first.input, b.input);
    assert_eq!(first.result, b.result);

    let second = db
        .repository
        .insert_branch(&b.id, branch("variant 2"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.branch_path, "B-B");

    let nested = db
        .repository
        .insert_branch(&first.id, branch("nested"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(nested.branch_path, "B-A-A");
}

#[tokio::test]
async fn branching_unknown_parent_is_none() {
    let db = setup();
    let created = db
        .repository
        .insert_branch("missing", branch("variant"))
        .await
        .unwrap();
    assert!(created.is_none());
}

#[tokio::test]
async fn update_replaces_snapshots_and_keeps_path() {
    let db = setup();
    let (d, r) = draft("original");
    let created = db.repository.insert_root(d, r).await.unwrap();

    let mut new_input = input();
    new_input.during_sale.selling_price = MoneyInput::from_usd(dec!(39.99));
    let new_result = calculate_profit(&new_input).unwrap();
    let updated = db
        .repository
        .update_project(
            &created.id,
            ProjectDraft {
                name: "renamed".to_string(),
                description: "now with a description".to_string(),
                input: new_input,
            },
            new_result,
        )
        .await
        .unwrap()
        .expect("project exists");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.branch_path, created.branch_path);
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.result.summary.total_revenue.usd, dec!(3999.00));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_unknown_project_is_none() {
    let db = setup();
    let (d, r) = draft("x");
    let updated = db
        .repository
        .update_project("missing", d, r)
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[tokio::test]
async fn delete_cascades_through_descendants() {
    let db = setup();
    let (d1, r1) = draft("a");
    let (d2, r2) = draft("b");
    let a = db.repository.insert_root(d1, r1).await.unwrap();
    let b = db.repository.insert_root(d2, r2).await.unwrap();
    let child = db
        .repository
        .insert_branch(&a.id, branch("child"))
        .await
        .unwrap()
        .unwrap();
    let grandchild = db
        .repository
        .insert_branch(&child.id, branch("grandchild"))
        .await
        .unwrap()
        .unwrap();

    let mut deleted = db.repository.delete_cascade(&a.id).await.unwrap();
    deleted.sort();
    let mut expected = vec![a.id.clone(), child.id.clone(), grandchild.id.clone()];
    expected.sort();
    assert_eq!(deleted, expected);

    assert!(db.repository.get_project(&a.id).unwrap().is_none());
    assert!(db.repository.get_project(&child.id).unwrap().is_none());
    assert!(db.repository.get_project(&b.id).unwrap().is_some());
}

#[tokio::test]
async fn deleting_unknown_project_returns_empty() {
    let db = setup();
    let deleted = db.repository.delete_cascade("missing").await.unwrap();
    assert!(deleted.is_empty());
}

#[tokio::test]
async fn summaries_are_ordered_by_branch_path() {
    let db = setup();
    let (d1, r1) = draft("a");
    let (d2, r2) = draft("b");
    let a = db.repository.insert_root(d1, r1).await.unwrap();
    let _b = db.repository.insert_root(d2, r2).await.unwrap();
    let _child = db
        .repository
        .insert_branch(&a.id, branch("child"))
        .await
        .unwrap()
        .unwrap();

    let summaries = db.repository.list_summaries().unwrap();
    let paths: Vec<&str> = summaries.iter().map(|s| s.branch_path.as_str()).collect();
    assert_eq!(paths, vec!["A", "A-A", "B"]);
}

#[tokio::test]
async fn settings_round_trip() {
    let db = setup();
    assert!(db.settings.get_setting("exchange_rate").unwrap().is_none());

    db.settings
        .set_setting("exchange_rate", "7.10")
        .await
        .unwrap();
    assert_eq!(
        db.settings.get_setting("exchange_rate").unwrap().as_deref(),
        Some("7.10")
    );

    db.settings
        .set_setting("exchange_rate", "6.95")
        .await
        .unwrap();
    assert_eq!(
        db.settings.get_setting("exchange_rate").unwrap().as_deref(),
        Some("6.95")
    );
}
