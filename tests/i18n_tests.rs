use gitawisdom::i18n::Translator;
use gitawisdom::models::Language;
use predicates::str::contains;

mod common;
use common::gw;

#[test]
fn translates_flat_and_nested_keys() {
    let en = Translator::new(Language::En).expect("table");
    assert_eq!(en.t("currentStreak"), "Current Streak");
    assert_eq!(en.t("gitaReading.title"), "Bhagavad Gita Reading");
    assert_eq!(
        en.t("gitaReading.translations.swamiPrabhupada.author"),
        "A.C. Bhaktivedanta Swami Prabhupada"
    );
}

#[test]
fn translates_into_the_selected_language() {
    let mut tr = Translator::new(Language::Hi).expect("table");
    assert_eq!(tr.t("currentStreak"), "वर्तमान लगातार");

    tr.set_language(Language::Sa);
    assert_eq!(tr.language(), Language::Sa);
    assert_eq!(tr.t("currentStreak"), "वर्तमान शृंखला");
}

#[test]
fn misses_fall_back_to_the_key() {
    let tr = Translator::new(Language::En).expect("table");

    assert_eq!(tr.t("no.such.key"), "no.such.key");
    // non-leaf node
    assert_eq!(tr.t("gitaReading"), "gitaReading");
    // path through a leaf
    assert_eq!(tr.t("currentStreak.en.extra"), "currentStreak.en.extra");
    assert_eq!(tr.t(""), "");
}

#[test]
fn missing_language_falls_back_to_the_key() {
    let yaml = "greeting:\n  en: Hello\n";
    let tr = Translator::from_yaml(yaml, Language::Hi).expect("table");

    assert_eq!(tr.t("greeting"), "greeting");
    assert!(tr.has("greeting", Language::En));
    assert!(!tr.has("greeting", Language::Hi));
}

#[test]
fn placeholders_are_replaced() {
    let tr = Translator::new(Language::En).expect("table");
    let msg = tr.t_with("checkIn.extended", &[("count", "4")]);
    assert_eq!(msg, "Streak extended: 4 days in a row!");

    let unknown = tr.t_with("unknown.{count}", &[("count", "4")]);
    assert_eq!(unknown, "unknown.4");
}

#[test]
fn every_bundled_key_has_all_languages() {
    let tr = Translator::new(Language::En).expect("table");
    for key in [
        "welcome",
        "currentStreak",
        "longestStreak",
        "checkIn.started",
        "checkIn.extended",
        "checkIn.reset",
        "checkIn.already",
        "gitaReading.title",
    ] {
        for lang in Language::ALL {
            assert!(tr.has(key, lang), "{} missing for {}", key, lang.code());
        }
    }
}

#[test]
fn translate_command_prints_lookup() {
    gw("i18n_translate")
        .args(["--lang", "hi", "translate", "currentStreak"])
        .assert()
        .success()
        .stdout(contains("वर्तमान लगातार"));

    gw("i18n_translate")
        .args(["translate", "no.such.key"])
        .assert()
        .success()
        .stdout(contains("no.such.key"));
}

#[test]
fn unknown_language_is_rejected() {
    gw("i18n_bad_lang")
        .args(["--lang", "fr", "translate", "welcome"])
        .assert()
        .failure();
}
