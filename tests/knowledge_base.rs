//! Loading the knowledge base and gazetteer from disk.

use std::fs;
use std::path::Path;

use kbner::config::{PipelineConfig, TypeCodes};
use kbner::kb::{Gazetteer, GazetteerLayout, KnowledgeBaseIndex};
use kbner::{EntityKind, Error, KnowledgeBaseLabeler, Label, Lexicons, TaggedSentence};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, body).unwrap();
    path
}

fn city_row(row_id: u64, source_id: u64, name: &str, cc: &str, population: u64) -> String {
    let mut cols = vec![String::new(); 20];
    cols[0] = row_id.to_string();
    cols[1] = source_id.to_string();
    cols[2] = name.to_string();
    cols[5] = "1.5".into();
    cols[6] = "-2.5".into();
    cols[9] = cc.to_string();
    cols[15] = population.to_string();
    cols.join("\t")
}

#[test]
fn load_through_config_with_data_dir() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "wikidata/transitive.tsv",
        "10\t2221906\n20\t5\n30\t783794\n30\t2221906\n40\t6256\n",
    );
    write(
        dir.path(),
        "wikidata/names.tsv",
        "10\ten\tlabel\tJordan\n\
         20\ten\tlabel\tMichael Jordan\n\
         30\ten\tlabel\tGeorgia\n\
         10\tde\talias\tJordanien\n\
         40\ten\tlabel\tFrance\n",
    );

    let config = PipelineConfig::from_toml_str(&format!(
        "data_dir = {:?}\n",
        dir.path().display().to_string()
    ))
    .unwrap();
    let kb = KnowledgeBaseIndex::load(&config).unwrap();

    assert_eq!(kb.exclusive_kind("Jordan"), Some(EntityKind::Location));
    assert_eq!(kb.exclusive_kind("Michael Jordan"), Some(EntityKind::Person));
    assert_eq!(kb.exclusive_kind("Georgia"), None);
    assert!(kb.entities_named("Jordanien").is_empty());
    assert!(kb.entities_named("France").is_empty());

    let lexicons = Lexicons::standard();
    let labeler = KnowledgeBaseLabeler::new(&kb, lexicons, EntityKind::Location);
    let sentence = TaggedSentence::parse("Jordan and Georgia", "NNP CC NNP").unwrap();
    let labels: Vec<Label> = labeler
        .label_sentence("d", "s", &sentence)
        .iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(labels, vec![Label::Positive, Label::Unknown]);
}

#[test]
fn missing_names_file_fails_before_loading() {
    let dir = TempDir::new().unwrap();
    let types = write(dir.path(), "transitive.tsv", "1\t5\n");
    let names = dir.path().join("names.tsv");
    let err = KnowledgeBaseIndex::load_files(&types, &names, TypeCodes::default(), Some("en"))
        .unwrap_err();
    assert!(matches!(err, Error::MissingFile(ref p) if p == &names), "{err}");
}

#[test]
fn bad_type_row_reports_file_and_line() {
    let dir = TempDir::new().unwrap();
    let types = write(dir.path(), "transitive.tsv", "1\t5\nQ2\t5\n");
    let names = write(dir.path(), "names.tsv", "");
    let err = KnowledgeBaseIndex::load_files(&types, &names, TypeCodes::default(), None)
        .unwrap_err();
    match err {
        Error::KnowledgeBase { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn gazetteer_file_with_row_ids() {
    let dir = TempDir::new().unwrap();
    let body = [
        city_row(1, 4250542, "Springfield", "US", 116_250),
        city_row(2, 2147714, "Springfield", "AU", 18_000),
        city_row(3, 2988507, "Paris", "FR", 2_138_551),
    ]
    .join("\n");
    let path = write(dir.path(), "cities1000_with_ids.txt", &(body + "\n"));

    let gaz = Gazetteer::load(&path, GazetteerLayout::WithIds).unwrap();
    assert_eq!(gaz.len(), 3);
    let springfields = gaz.lookup("Springfield");
    assert_eq!(springfields.len(), 2);
    assert_eq!(springfields[1].source_id, 2147714);
    assert_eq!(springfields[1].country_code, "AU");
    assert!((springfields[0].lat - 1.5).abs() < f64::EPSILON);
}

#[test]
fn missing_gazetteer_is_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Gazetteer::load(&dir.path().join("nope.txt"), GazetteerLayout::WithIds).unwrap_err();
    assert!(matches!(err, Error::MissingFile(_)));
}
