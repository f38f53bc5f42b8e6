use chrono::NaiveDate;
use gitawisdom::config::Config;
use gitawisdom::core::quotes::QuoteCatalog;
use gitawisdom::core::reading::{DEFAULT_TRANSLATION, ReadingCatalog};
use gitawisdom::db::pool::DbPool;
use gitawisdom::db::saved_quotes;
use gitawisdom::models::QuoteRef;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod common;
use common::{gw, init_db, reset_home, setup_test_db, ts};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

#[test]
fn quote_of_day_is_stable_per_date() {
    let catalog = QuoteCatalog::load().expect("catalogue");
    assert_eq!(catalog.len(), 7);

    let q1 = catalog.quote_of_day(day("2024-01-01"));
    assert_eq!(q1.reference().to_string(), "4.39");
    assert_eq!(catalog.quote_of_day(day("2024-01-01")), q1);
    assert_eq!(
        catalog.quote_of_day(day("2024-01-02")).reference().to_string(),
        "18.65"
    );
    // one full rotation later
    assert_eq!(catalog.quote_of_day(day("2024-01-08")), q1);
}

#[test]
fn random_quote_comes_from_the_catalogue() {
    let catalog = QuoteCatalog::load().expect("catalogue");
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let q = catalog.random(&mut rng);
        assert!(catalog.find(q.reference()).is_some());
    }
}

#[test]
fn quote_refs_parse_both_separators() {
    let r = QuoteRef::parse("2.47").expect("dot");
    assert_eq!((r.chapter, r.verse_number), (2, 47));
    assert_eq!(QuoteRef::parse(" 18:65 ").expect("colon").to_string(), "18.65");

    for bad in ["", "2", "2.", "x.47", "0.1", "2.0", "2-47"] {
        assert!(QuoteRef::parse(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn catalogue_lookup_reports_unknown_verses() {
    let catalog = QuoteCatalog::load().expect("catalogue");
    let known = QuoteRef::parse("2.47").expect("ref");
    let unknown = QuoteRef::parse("17.3").expect("ref");

    assert!(catalog.get(known).is_ok());
    assert!(catalog.get(unknown).is_err());
}

#[test]
fn empty_catalogue_is_rejected() {
    assert!(QuoteCatalog::from_yaml("[]").is_err());
}

#[test]
fn share_text_format() {
    let catalog = QuoteCatalog::load().expect("catalogue");
    let q = catalog.find(QuoteRef::parse("2.47").expect("ref")).expect("2.47");
    let text = q.share_text();

    assert!(text.starts_with(&q.verse));
    assert!(text.contains(&format!("\n\n{}\n\n", q.translation)));
    assert!(text.ends_with("~ Bhagavad Gita Ch.2, Verse 47"));
}

#[test]
fn saving_the_same_verse_twice_keeps_one_copy() {
    let pool = DbPool::in_memory().expect("db");
    let catalog = QuoteCatalog::load().expect("catalogue");
    let q = catalog.quote_of_day(day("2024-01-01"));

    assert!(saved_quotes::save(&pool.conn, q, ts("2024-01-01 09:00")).expect("save"));
    assert!(!saved_quotes::save(&pool.conn, q, ts("2024-01-01 10:00")).expect("save again"));
    assert_eq!(saved_quotes::count(&pool.conn).expect("count"), 1);

    let found = saved_quotes::find(&pool.conn, q.reference()).expect("find");
    assert_eq!(found.as_ref(), Some(q));

    assert!(saved_quotes::remove(&pool.conn, q.reference()).expect("remove"));
    assert!(!saved_quotes::remove(&pool.conn, q.reference()).expect("remove again"));
    assert!(saved_quotes::list(&pool.conn).expect("list").is_empty());
}

#[test]
fn test_quote_command_uses_the_clock() {
    gw("quote_cmd")
        .args(["--at", "2024-01-01", "quote"])
        .assert()
        .success()
        .stdout(contains("Bhagavad Gita 4.39"));

    gw("quote_cmd")
        .args(["quote", "--date", "2024-01-02", "--share"])
        .assert()
        .success()
        .stdout(contains("~ Bhagavad Gita Ch.18, Verse 65"));

    gw("quote_cmd")
        .args(["quote", "--date", "02/01/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_saved_quotes_flow() {
    let db_path = setup_test_db("saved_flow");
    init_db("saved_flow", &db_path);

    gw("saved_flow")
        .args(["--db", &db_path, "saved"])
        .assert()
        .success()
        .stdout(contains("No saved quotes yet."));

    gw("saved_flow")
        .args(["--db", &db_path, "quote", "--date", "2024-01-01", "--save"])
        .assert()
        .success()
        .stdout(contains("Quote saved"));

    gw("saved_flow")
        .args(["--db", &db_path, "quote", "--date", "2024-01-01", "--save"])
        .assert()
        .success()
        .stdout(contains("already in your saved collection"));

    gw("saved_flow")
        .args(["--db", &db_path, "saved", "--list"])
        .assert()
        .success()
        .stdout(contains("4.39"))
        .stdout(contains("No saved quotes yet.").not());

    gw("saved_flow")
        .args(["--db", &db_path, "saved", "--share", "4:39"])
        .assert()
        .success()
        .stdout(contains("~ Bhagavad Gita Ch.4, Verse 39"));

    gw("saved_flow")
        .args(["--db", &db_path, "saved", "--remove", "4.39"])
        .assert()
        .success()
        .stdout(contains("Quote Deleted"));

    gw("saved_flow")
        .args(["--db", &db_path, "saved", "--remove", "4.39"])
        .assert()
        .failure()
        .stderr(contains("Not found"));

    gw("saved_flow")
        .args(["--db", &db_path, "saved", "--share", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid quote reference"));
}

#[test]
fn reading_catalogue_has_all_chapters() {
    let catalog = ReadingCatalog::load().expect("catalogue");

    assert_eq!(catalog.chapters().len(), 18);
    assert_eq!(catalog.total_verses(), 701);
    assert_eq!(catalog.chapter(2).expect("ch 2").title, "Sankhya Yoga");
    assert_eq!(catalog.chapter(18).expect("ch 18").verses, 78);
    assert!(catalog.chapter(19).is_err());

    let ids: Vec<&str> = catalog.translations().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["swami-prabhupada", "gita-press", "sanskrit"]);
    assert!(catalog.translation(DEFAULT_TRANSLATION).is_ok());
    assert!(catalog.translation("GITA-PRESS").is_ok());
    assert!(catalog.translation("kjv").is_err());
}

#[test]
fn test_read_lists_chapters_and_translations() {
    let home = reset_home("read_cmd");

    gw("read_cmd")
        .args(["read"])
        .assert()
        .success()
        .stdout(contains("Available Translations"))
        .stdout(contains("▶ swami-prabhupada"))
        .stdout(contains("Arjuna Vishada Yoga"))
        .stdout(contains("Moksha Sannyasa Yoga"))
        .stdout(contains("18 Chapter · 701 Verses"));

    gw("read_cmd")
        .args(["read", "--chapter", "12"])
        .assert()
        .success()
        .stdout(contains("Chapter 12: Bhakti Yoga"))
        .stdout(contains("Verses: 20"))
        .stdout(contains("Bhagavad Gita As It Is"));

    gw("read_cmd")
        .args(["read", "--translation", "gita-press"])
        .assert()
        .success()
        .stdout(contains("Reading translation set to"));

    let cfg = Config::load_from(&home.join("gitawisdom.conf")).expect("config");
    assert_eq!(cfg.translation, "gita-press");

    gw("read_cmd")
        .args(["read"])
        .assert()
        .success()
        .stdout(contains("▶ gita-press"));

    gw("read_cmd")
        .args(["read", "--chapter", "0"])
        .assert()
        .failure()
        .stderr(contains("chapter 0"));

    gw("read_cmd")
        .args(["read", "--translation", "kjv"])
        .assert()
        .failure()
        .stderr(contains("translation 'kjv'"));
}
