//! End-to-end tests for lbnorm-engine

use lbnorm_engine::*;

fn normalizer() -> Normalizer {
    Normalizer::new().unwrap()
}

#[test]
fn test_reference_sentences() {
    let n = normalizer();
    let cases = [
        ("den 30. Abrëll 2010", "den drëssegsten Abrëll zweedausendzéng"),
        ("17:58", "siwwenzéng Auer aachtafofzeg"),
        ("1970er", "nonzénghonnertsiwwenzeger"),
        ("Et stoung 2:1.", "Et stoung zwee zu eent."),
        ("Den 1. Mee", "Den éischte Mee"),
        ("um 8.30 Auer", "um aacht Auer drësseg"),
        ("Et kascht 2,50 EUR.", "Et kascht zwee Euro a fofzeg Cent."),
        ("12 Leit", "zwielef Leit"),
    ];
    for (input, expected) in cases {
        assert_eq!(n.normalize(input), expected, "{input}");
    }
}

#[test]
fn test_date_and_time_in_one_sentence() {
    assert_eq!(
        normalizer().normalize("Den 12.03.2024 um 14:30 Auer"),
        "Den zwielefte Mäerz zweedausendvéieranzwanzeg um véierzéng Auer drësseg"
    );
}

#[test]
fn test_acronyms_and_amounts() {
    let n = normalizer();
    assert_eq!(
        n.normalize("De BMW kascht 45.000 €."),
        "De Bee-Ämm-Wee kascht fënnefavéierzegdausend Euro."
    );
    assert_eq!(n.normalize("D'CFL an d'NATO"), "D'Zee-Äff-Äll an d'NATO");
}

#[test]
fn test_units_and_large_numbers() {
    let n = normalizer();
    assert_eq!(
        n.normalize("Et waren -5° an 2 Stonnen Reen."),
        "Et waren minus fënnef Grad an zwou Stonnen Reen."
    );
    assert_eq!(n.normalize("1.500 km"), "dausendfënnefhonnert Kilometer");
    assert_eq!(n.normalize("3 000 000 Awunner"), "dräi Milliounen Awunner");
    assert_eq!(
        n.normalize("D'Firma huet 2,5 Milliarden Euro verluer."),
        "D'Firma huet zwee Komma fënnef Milliarden Euro verluer."
    );
}

#[test]
fn test_phone_lines() {
    assert_eq!(
        normalizer().normalize("Telefon: 26 12 34"),
        "Telefon: zwee sechs eent zwee dräi véier"
    );
}

#[test]
fn test_unspellable_numbers_are_kept() {
    let huge = "123456789012345678901234567890123";
    let text = format!("Zuel {huge} hei");
    assert_eq!(normalizer().normalize(&text), text);
}

#[test]
fn test_trace_ends_with_normalized_text() {
    let n = normalizer();
    let steps = n.trace("17:58");
    assert_eq!(steps.len(), STANDARD_ORDER.len());
    assert_eq!(steps.last().unwrap().output, n.normalize("17:58"));
    let time = steps.iter().find(|s| s.pass == PassId::Time).unwrap();
    assert!(time.changed);
    assert!(steps.iter().filter(|s| s.changed).count() == 1);
}

#[test]
fn test_trace_serializes_pass_names() {
    let steps = normalizer().trace("5");
    let json = serde_json::to_string(&steps).unwrap();
    assert!(json.contains("\"pass\":\"bare-number\""));
    assert!(json.contains("\"output\":\"fënnef\""));
}

#[test]
fn test_free_functions() {
    assert_eq!(normalize("5").unwrap(), "fënnef");
    assert_eq!(to_unit("2 Stonnen a 5").unwrap(), "zwou Stonnen a 5");
}

#[test]
fn test_custom_rules_file() {
    let rules = include_str!("../configs/rules/luxembourgish.toml")
        .replace("connector = \"zu\"", "connector = \"géint\"");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    std::fs::write(&path, rules).unwrap();

    let n = Normalizer::builder().rules_file(&path).build().unwrap();
    assert_eq!(n.normalize("3:1"), "dräi géint eent");
}

#[test]
fn test_custom_lexicon_file() {
    let lexicon = include_str!("../../lbnorm-core/configs/lexicon/luxembourgish.toml")
        .replace("negative_word = \"minus\"", "negative_word = \"manner\"");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.toml");
    std::fs::write(&path, lexicon).unwrap();

    let n = Normalizer::builder().lexicon_file(&path).build().unwrap();
    assert_eq!(n.normalize("-10°"), "manner zéng Grad");
}

#[test]
fn test_invalid_rules_file_fails_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    std::fs::write(&path, "not = [valid").unwrap();

    let err = Normalizer::builder().rules_file(&path).build().unwrap_err();
    assert!(matches!(err, EngineError::ConfigurationFile { .. }));
}

#[test]
fn test_normalizer_is_shareable_across_threads() {
    let n = std::sync::Arc::new(normalizer());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let n = std::sync::Arc::clone(&n);
            std::thread::spawn(move || n.normalize(&format!("{i} Leit")))
        })
        .collect();
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs, ["null Leit", "eent Leit", "zwee Leit", "dräi Leit"]);
}
