//! End-to-end stage tests over TSV text, the way the pipeline feeds them.

use kbner::kb::{Gazetteer, Location};
use kbner::{
    run_stage, ContextFeaturizer, CrossReferenceLinker, GazetteerLocationLabeler, Lexicons,
    ListCoordinator, NounPhraseSpanner, OrganizationLabeler, OutputFormat, SpanStage, Stage,
};
use kbner::{EntityKind, KnowledgeBaseIndex, KnowledgeBaseLabeler};

fn run<S: Stage>(stage: &S, input: &str) -> String {
    let mut out = Vec::new();
    run_stage(stage, input.as_bytes(), &mut out, OutputFormat::Tsv).unwrap();
    String::from_utf8(out).unwrap()
}

fn city(id: u64, name: &str, cc: &str, population: u64) -> Location {
    Location {
        id,
        source_id: id,
        name: name.to_string(),
        lat: 0.0,
        lon: 0.0,
        country_code: cc.to_string(),
        population,
    }
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn spans_for_paris_and_london() {
    let stage = SpanStage::new(NounPhraseSpanner::default());
    let out = run(&stage, "s1\tParis and London\tNNP CC NNP\n");
    assert_eq!(
        out,
        "s1\t0\t0\t1\trun\tParis\n\
         s1\t1\t2\t3\trun\tLondon\n\
         s1\t2\t0\t3\tand_joined\tParis and London\n"
    );
}

// =============================================================================
// Locations
// =============================================================================

mod locations {
    use super::*;

    fn gazetteer() -> Gazetteer {
        Gazetteer::from_locations([
            city(1, "Paris", "FR", 2_138_551),
            city(2, "Springfield", "US", 10_000),
            city(3, "Springfield", "US", 90_000),
        ])
    }

    #[test]
    fn unique_city_is_positive_with_features() {
        let gaz = gazetteer();
        let stage = GazetteerLocationLabeler::new(&gaz, Lexicons::standard());
        let out = run(&stage, "s1\tParis hosted Springfield\tNNP VBD NNP\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "\\N\ts1_0_1_1\ts1\t0\tParis\t0\t1\t1\t1\t{is_most_populous,country_FR,near_Springfield}"
        );
        assert!(lines[1].starts_with("\\N\ts1_2_3_2\ts1\t1\tSpringfield\t2\t3\t2\t\\N\t{country_US"));
        assert!(lines[2].contains("\t3\t\\N\t{is_most_populous,country_US,near_Paris}"));
    }

    #[test]
    fn rerun_is_byte_identical() {
        let gaz = gazetteer();
        let stage = GazetteerLocationLabeler::new(&gaz, Lexicons::standard());
        let input = "s1\tParis , Springfield and Paris\tNNP , NNP CC NNP\n\
                     s2\tnothing here\tNN RB\n";
        assert_eq!(run(&stage, input), run(&stage, input));
    }
}

// =============================================================================
// Knowledge-base entities
// =============================================================================

mod entities {
    use super::*;
    use kbner::config::TypeCodes;
    use kbner::kb::NameKind;

    fn kb() -> KnowledgeBaseIndex {
        let codes = TypeCodes::default();
        let mut b = KnowledgeBaseIndex::builder(codes);
        b.add_type(1, codes.location);
        b.add_type(2, codes.company);
        b.add_type(3, codes.location);
        b.add_name(1, "en", NameKind::Label, "Paris");
        b.add_name(2, "en", NameKind::Label, "Georgia");
        b.add_name(3, "en", NameKind::Alias, "Georgia");
        b.build()
    }

    #[test]
    fn exclusive_location_row() {
        let kb = kb();
        let stage = KnowledgeBaseLabeler::new(&kb, Lexicons::standard(), EntityKind::Location);
        let out = run(&stage, "d1\ts1\tflights to Paris\tNNS TO NNP\n");
        assert_eq!(out, "\\N\ts1_2_3\td1\ts1\t0\tParis\t2\t3\t1\t{kb_location}\n");
    }

    #[test]
    fn rerun_is_byte_identical() {
        let kb = kb();
        let stage = KnowledgeBaseLabeler::new(&kb, Lexicons::standard(), EntityKind::Location);
        let input = "d1\ts1\tParis and Georgia said\tNNP CC NNP VBD\n\
                     d1\ts2\tAtlantis , Paris , Georgia\tNNP , NNP , NNP\n";
        let first = run(&stage, input);
        assert!(!first.is_empty());
        assert_eq!(first, run(&stage, input));
    }
}

// =============================================================================
// Organizations
// =============================================================================

mod organizations {
    use super::*;
    use kbner::lexicon::LexiconKind;

    #[test]
    fn apple_inc_is_positive_despite_lexicons() {
        let lex = Lexicons::default()
            .with_words(LexiconKind::Titles, ["Apple"])
            .with_words(LexiconKind::Months, ["Apple"]);
        let stage = OrganizationLabeler::new(&lex);
        let out = run(&stage, "d1\tApple Inc. sued the Minister\tNNP NNP VBD DT NN\t\n");
        assert_eq!(
            out,
            "\\N\td1_0_0_2\td1\t0\t0\tApple Inc.\t0\t2\t1\t\t{suffix_Inc.}\n"
        );
    }

    #[test]
    fn headline_ticker_comes_first() {
        let stage = OrganizationLabeler::new(Lexicons::standard());
        let out = run(
            &stage,
            "d2\tShares of Acme rose\tNNS IN NNP VBD\tAcme Corp <ACME.N> rallies\n",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "\\N\td2_-1_0_3\td2\t-1\t0\tAcme Corp\t0\t3\t1\tACME.N\t{title_abbreviation}"
        );
        assert_eq!(
            lines[1],
            "\\N\td2_0_2_3\td2\t0\t0\tAcme\t2\t3\t\\N\t\t{}"
        );
    }

    #[test]
    fn rerun_is_byte_identical() {
        let stage = OrganizationLabeler::new(Lexicons::standard());
        let input = "d3\tSmith and Wesson Corp rose|^|Acme <ACME.N> fell in May\t\
                     NNP CC NNP NNP VBD|^|NNP NNP VBD IN NNP\t<Widget> and Acme <ACME.N>\n\
                     d4\tnothing here\tNN RB\t\n";
        let first = run(&stage, input);
        assert!(!first.is_empty());
        assert_eq!(first, run(&stage, input));
    }
}

// =============================================================================
// Lists, links, context
// =============================================================================

#[test]
fn four_way_list_is_one_list() {
    let stage = ListCoordinator::new(Lexicons::standard());
    let out = run(
        &stage,
        "d1\ts1\tParis , London , Rome and Oslo\tNNP , NNP , NNP CC NNP\n",
    );
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.ends_with("\td1_s1_0")));
}

#[test]
fn short_comma_list_is_silent() {
    let stage = ListCoordinator::new(Lexicons::standard());
    assert_eq!(run(&stage, "d1\ts1\tParis , London\tNNP , NNP\n"), "");
}

#[test]
fn orglinks_pairs_ibm_mentions() {
    let stage = CrossReferenceLinker::new();
    let out = run(
        &stage,
        "d1\tm0 m1 m2\tIBM|^|IBM Corp|^|Apple\t0 5 9\t1 7 10\n",
    );
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines.contains(&"\\N\tm1\tm0\t\\N\t{IS_PREFIX}"));
    assert!(lines.contains(&"\\N\tm2\tm0\t\\N\t{}"));
    assert!(lines.contains(&"\\N\tm2\tm2\t\\N\t{IS_PREFIX}"));
}

#[test]
fn context_features_row() {
    let stage = ContextFeaturizer::new(Lexicons::standard());
    let out = run(
        &stage,
        "s1\t0\t1\t2\tnear Rome and Milan\tIN NNP CC NNP\n",
    );
    assert_eq!(
        out,
        "s1\t0\t{NEAR_Milan,BEFORE_near,AFTER_and,AFTER_and_Milan}\n"
    );
}

#[test]
fn malformed_record_names_its_line() {
    let stage = ListCoordinator::new(Lexicons::standard());
    let mut out = Vec::new();
    let err = run_stage(
        &stage,
        "d1\ts1\tParis\tNNP\nd1\ts2\tParis\n".as_bytes(),
        &mut out,
        OutputFormat::Tsv,
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("line 2:"), "{err}");
}
