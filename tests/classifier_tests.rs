use langsniff::{
    Classifier, DetectionPattern, LanguageDefinition, PLAINTEXT, PatternScope, RegistryBuilder,
    classify, classify_by_file_name,
};
use regex::Regex;

/// A large mixed-language sample used for determinism checks.
const JAVA_SAMPLE: &str = r#"package com.example.app;

import java.util.ArrayList;
import java.util.List;

public class ItemStore {
    private final List<String> items = new ArrayList<>();

    public void add(String item) {
        items.add(item);
    }

    @Override
    public String toString() {
        return "ItemStore(" + items.size() + ")";
    }
}
"#;

#[test]
fn test_determinism() {
    let samples = [
        JAVA_SAMPLE,
        "#!/bin/bash\necho hi",
        "plain words only",
        "",
        "apiVersion: v1",
    ];
    for sample in samples {
        let first = classify(sample);
        for _ in 0..3 {
            assert_eq!(classify(sample), first, "unstable result for {sample:?}");
        }
    }
}

#[test]
fn test_empty_and_whitespace_invariant() {
    assert_eq!(classify(""), PLAINTEXT);
    assert_eq!(classify("   \n\t"), PLAINTEXT);
}

#[test]
fn test_allowlist_closure() {
    let classifier = Classifier::new();
    let samples = [
        JAVA_SAMPLE,
        "#!/bin/sh\nls | grep x",
        "SELECT * FROM users WHERE id = 1;",
        "random prose with no structure at all",
        "<?xml version=\"1.0\"?>\n<root/>",
        "def f():\n    return 1",
    ];
    for sample in samples {
        let label = classifier.classify(sample);
        assert!(
            label == PLAINTEXT || classifier.registry().is_allowed(label),
            "label {label} escaped the allowlist"
        );
    }
}

#[test]
fn test_first_line_dominance_shebang() {
    // Neutral body; the shebang bonus alone must carry the decision.
    let script = "#!/bin/bash\nsome words\nmore words\nnothing special here";
    assert_eq!(classify(script), "shell");
}

#[test]
fn test_first_line_dominance_outscores_content_hits() {
    // A handful of genuine SQL hits loses to the +10 shebang bonus.
    let script = "#!/bin/bash\nrun_query \"SELECT 1\"\nrun_query \"SELECT 2\"";
    assert_eq!(classify(script), "shell");
}

#[test]
fn test_override_precedence_kubernetes() {
    // Plenty of generic key:value lines to feed ini/properties scoring;
    // the apiVersion anchor must still win without a scoring round.
    let manifest = "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: app\ndata:\n  a: 1\n  b: 2\n  c: 3\n";
    assert_eq!(classify(manifest), "yaml");
}

#[test]
fn test_override_spring_properties() {
    let props = "server.port=8080\nspring.datasource.url=jdbc:h2:mem\n";
    assert_eq!(classify(props), "properties");
}

#[test]
fn test_override_embedded_filename_marker() {
    assert_eq!(classify("filename=\"config.yml\"\nwhatever"), "yaml");
    assert_eq!(classify("name=\"app.properties\"\nwhatever"), "properties");
}

#[test]
fn test_filename_independence() {
    assert_eq!(classify_by_file_name("main.py"), Some("python"));
    assert_eq!(classify_by_file_name("weird.xyz"), None);
    // None is a distinct outcome from a content-based plaintext result.
    assert_ne!(classify_by_file_name("weird.xyz"), Some(PLAINTEXT));
}

#[test]
fn test_tie_break_stability() {
    fn synthetic(language: &str) -> LanguageDefinition {
        LanguageDefinition {
            language: language.to_string(),
            patterns: vec![DetectionPattern {
                id: format!("{language}_token"),
                regex: Regex::new("token").unwrap(),
                scope: PatternScope::FullText,
                description: String::new(),
                enabled: true,
            }],
            extensions: vec![],
        }
    }

    let registry = RegistryBuilder::new()
        .definition(synthetic("first"))
        .definition(synthetic("second"))
        .allow("first")
        .allow("second")
        .build()
        .unwrap();
    let classifier = Classifier::with_registry(registry);
    for _ in 0..20 {
        assert_eq!(classifier.classify("token token token"), "first");
    }
}

#[test]
fn test_end_to_end_java() {
    let snippet =
        "package com.example;\npublic class Foo {}\n@Override\npublic String toString(){return \"\";}";
    assert_eq!(classify(snippet), "java");
    assert_eq!(classify(JAVA_SAMPLE), "java");
}

#[test]
fn test_end_to_end_html() {
    let page = "<!DOCTYPE html>\n<html>\n<head><title>t</title></head>\n<body><div class=\"x\">hi</div></body>\n</html>";
    assert_eq!(classify(page), "html");
}

#[test]
fn test_end_to_end_python() {
    let code = "import os\n\nclass Walker:\n    def walk(self, root):\n        for entry in os.listdir(root):\n            print(entry)\n";
    assert_eq!(classify(code), "python");
}

#[test]
fn test_end_to_end_sql() {
    let query = "SELECT name, COUNT(*) FROM users\nJOIN orders ON orders.user_id = users.id\nWHERE total > 100\nGROUP BY name;";
    assert_eq!(classify(query), "sql");
}

#[test]
fn test_end_to_end_dockerfile() {
    let dockerfile = "FROM rust:1.94\nWORKDIR /app\nCOPY . .\nRUN cargo build --release\nCMD [\"./target/release/app\"]";
    assert_eq!(classify(dockerfile), "dockerfile");
}

#[test]
fn test_end_to_end_json() {
    let doc = "{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\",\n  \"private\": true\n}";
    assert_eq!(classify(doc), "json");
}

#[test]
fn test_end_to_end_xml() {
    let doc = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\n</project>";
    assert_eq!(classify(doc), "xml");
}

#[test]
fn test_score_table_exposed_for_diagnostics() {
    let classifier = Classifier::new();
    let table = classifier.score(JAVA_SAMPLE);
    assert!(table.get("java") >= 3);
    assert!(table.get("java") > table.get("ruby"));
}

#[test]
fn test_classifier_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Classifier>();
}

#[test]
fn test_concurrent_classification() {
    let classifier = std::sync::Arc::new(Classifier::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let classifier = classifier.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    assert_eq!(classifier.classify(JAVA_SAMPLE), "java");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
