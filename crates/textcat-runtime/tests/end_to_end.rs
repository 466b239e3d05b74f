//! End-to-end runs over corpora written to temporary directories: train,
//! classify, write the results listing, and validate it.

use std::fs;
use std::path::{Path, PathBuf};

use textcat_core::{ClassifierConfig, Error};
use textcat_runtime::{
    parse_results, read_results, tally, DocumentClassifier, ExpectedResults,
};

fn write(root: &Path, rel: &str, text: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, text).unwrap();
    path
}

fn config(root: &Path) -> ClassifierConfig {
    let stopwords = write(
        root,
        "stopwords.txt",
        "the, a, an, of, to, in, and\nwas were is for with on",
    );
    ClassifierConfig {
        stopwords_file: stopwords,
        ..ClassifierConfig::default()
    }
}

fn sports_and_politics(root: &Path) {
    write(root, "sports/s1.txt", "The game ended with a high score.");
    write(root, "sports/s2.txt", "Scoring was easy for the home team in every game.");
    write(root, "sports/s3.txt", "The games were scored by the visiting team.");
    write(root, "politics/p1.txt", "The election drew record voting numbers.");
    write(root, "politics/p2.txt", "Voters cast votes in the elections.");
    write(root, "politics/p3.txt", "The senator voted on the election law.");
}

fn listing(results: &textcat_runtime::ClassificationResults) -> String {
    results
        .iter()
        .map(|(path, category)| format!("{}: {}\n", path.display(), category))
        .collect()
}

#[test]
fn test_sports_politics_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let train = dir.path().join("train");
    sports_and_politics(&train);

    let classifier = DocumentClassifier::train(&config(dir.path()), &[&train]).unwrap();
    assert_eq!(classifier.summary().categories, vec!["politics", "sports"]);
    assert_eq!(classifier.summary().document_count, 6);

    let test = dir.path().join("test");
    write(&test, "sports/t1.txt", "A game with a late score.");
    write(&test, "sports/t2.txt", "The team scored twice.");
    write(&test, "politics/t3.txt", "Elections and voting.");
    write(&test, "politics/t4.txt", "The vote on election day.");

    let results = classifier.classify(&[&test]).unwrap();
    assert_eq!(results.len(), 4);
    for (path, category) in &results {
        let expected = path.parent().unwrap().file_name().unwrap().to_str().unwrap();
        assert_eq!(category, expected, "{}", path.display());
    }

    let results_file = write(dir.path(), "results.txt", &listing(&results));
    let parsed = read_results(&results_file).unwrap();
    assert_eq!(parsed, results);

    let expected = ExpectedResults::from_dirs(&[&test]).unwrap();
    let tallies = tally(&parsed, &expected).unwrap();
    for stats in tallies.values() {
        assert_eq!(stats.correct, 2);
        assert_eq!(stats.f_measure(), 1.0);
    }
}

#[test]
fn test_training_roots_merge() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first");
    let second = dir.path().join("second");
    write(&first, "sports/a.txt", "game score");
    write(&second, "sports/b.txt", "team game");
    write(&second, "politics/c.txt", "vote election");

    let classifier =
        DocumentClassifier::train(&config(dir.path()), &[&first, &second]).unwrap();
    assert_eq!(classifier.summary().document_count, 3);

    let sports = classifier.classifier().model("sports").unwrap();
    assert!((sports.category_log_prior() - (2.0f64 / 3.0).ln()).abs() < 1e-12);
}

#[test]
fn test_one_category_is_not_enough() {
    let dir = tempfile::tempdir().unwrap();
    let train = dir.path().join("train");
    write(&train, "sports/a.txt", "game score");
    write(&train, "sports/b.txt", "team game");

    let err = DocumentClassifier::train(&config(dir.path()), &[&train])
        .err()
        .unwrap();
    assert!(matches!(err, Error::InsufficientTrainingData(_)));
    assert!(err.to_string().contains("sports"));
}

#[test]
fn test_empty_training_root() {
    let dir = tempfile::tempdir().unwrap();
    let train = dir.path().join("train");
    fs::create_dir_all(&train).unwrap();

    let err = DocumentClassifier::train(&config(dir.path()), &[&train])
        .err()
        .unwrap();
    assert!(matches!(err, Error::InsufficientTrainingData(_)));
}

#[test]
fn test_identical_categories_tie_to_first_label() {
    let dir = tempfile::tempdir().unwrap();
    let train = dir.path().join("train");
    write(&train, "zebra/a.txt", "same words here");
    write(&train, "apple/a.txt", "same words here");

    let classifier = DocumentClassifier::train(&config(dir.path()), &[&train]).unwrap();
    assert_eq!(classifier.classify_text("").unwrap(), "apple");
    assert_eq!(classifier.classify_text("the of and").unwrap(), "apple");
}

#[test]
fn test_validation_with_misclassification() {
    let dir = tempfile::tempdir().unwrap();
    let expected_root = dir.path().join("expected");
    let a = write(&expected_root, "sports/a.txt", "");
    let b = write(&expected_root, "sports/b.txt", "");
    let c = write(&expected_root, "politics/c.txt", "");

    let text = format!(
        "{}: sports\n{}: politics\n{}: politics\nnot a result line\n",
        a.display(),
        b.display(),
        c.display()
    );
    let expected = ExpectedResults::from_dirs(&[&expected_root]).unwrap();
    let tallies = tally(&parse_results(&text), &expected).unwrap();

    let sports = tallies["sports"];
    assert_eq!((sports.correct, sports.misclassified_to_other), (1, 1));
    assert_eq!(sports.precision(), 1.0);
    assert_eq!(sports.recall(), 0.5);

    let politics = tallies["politics"];
    assert_eq!((politics.correct, politics.misclassified_to_this), (1, 1));
    assert_eq!(politics.precision(), 0.5);
    assert_eq!(politics.recall(), 1.0);
}

#[test]
fn test_report_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let train = dir.path().join("train");
    sports_and_politics(&train);
    let classifier = DocumentClassifier::train(&config(dir.path()), &[&train]).unwrap();

    let summary = serde_json::to_value(classifier.summary()).unwrap();
    assert!(summary["categories"].is_array());
    assert_eq!(summary["documentCount"], 6);
    assert!(summary["uniqueWordCount"].is_number());

    let scores = serde_json::to_value(classifier.scores_for_text("game").unwrap()).unwrap();
    assert_eq!(scores[0]["category"], "politics");
    assert!(scores[1]["logScore"].is_number());
}
