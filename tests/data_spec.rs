use diagramdex::data;
use diagramdex::models::*;
use speculate2::speculate;

speculate! {
    describe "builtin catalog" {
        it "contains the flowchart diagram type" {
            let catalog = data::builtin();

            assert_eq!(catalog.len(), 1);
            assert!(catalog.contains("flowchart"));

            let flowchart = catalog.get("flowchart").expect("Missing flowchart");
            assert_eq!(flowchart.name, "Flowchart");
            assert_eq!(flowchart.category, Category::Flow);
            assert_eq!(flowchart.status, DiagramStatus::Stable);
            assert!(flowchart.detailed_description.is_some());
            assert!(flowchart.docs_url.is_some());
        }

        it "ships eight flowchart examples ordered by difficulty progression" {
            let catalog = data::builtin();
            let flowchart = catalog.get("flowchart").expect("Missing flowchart");

            assert_eq!(flowchart.examples.len(), 8);
            assert_eq!(catalog.total_example_count(), 8);
            assert_eq!(flowchart.examples[0].id, "flowchart-basic");
            assert_eq!(flowchart.examples[0].level, Some(Level::Beginner));
            assert_eq!(flowchart.examples[6].id, "flowchart-complex");
            assert_eq!(flowchart.examples[6].level, Some(Level::Advanced));
        }

        it "gives every example an id unique within the type and non-empty code" {
            let catalog = data::builtin();
            for diagram in catalog.all() {
                for (n, example) in diagram.examples.iter().enumerate() {
                    assert!(!example.code.trim().is_empty(), "empty code in {}", example.id);
                    assert!(
                        !diagram.examples[..n].iter().any(|e| e.id == example.id),
                        "duplicate example id {} in {}",
                        example.id,
                        diagram.id
                    );
                }
            }
        }

        it "ships the full flowchart syntax reference" {
            let catalog = data::builtin();
            let flowchart = catalog.get("flowchart").expect("Missing flowchart");

            assert_eq!(flowchart.syntax.len(), 20);
            assert_eq!(flowchart.syntax[0].syntax, "flowchart TD");
            assert!(flowchart.syntax.iter().all(|s| !s.description.is_empty()));
        }

        it "groups into all four categories with three empty buckets" {
            let catalog = data::builtin();
            let grouped = catalog.grouped_by_category();

            assert_eq!(grouped.len(), 4);
            assert_eq!(grouped[&Category::Flow].len(), 1);
            assert!(grouped[&Category::Structure].is_empty());
            assert!(grouped[&Category::Timeline].is_empty());
            assert!(grouped[&Category::Other].is_empty());

            assert_eq!(catalog.by_category(Category::Flow).len(), 1);
            assert!(catalog.by_category(Category::Structure).is_empty());
        }

        it "finds flowchart by id, name, and substring, case-insensitively" {
            let catalog = data::builtin();

            assert_eq!(catalog.search("flow").len(), 1);
            assert_eq!(catalog.search("FLOW").len(), 1);
            assert_eq!(catalog.search("chart").len(), 1);
            assert!(catalog.search("zzz").is_empty());
        }
    }

    describe "category table" {
        it "has one info entry per variant, agreeing on the id" {
            for category in Category::ALL {
                let info = category.info();
                assert_eq!(info.id, category);
                assert!(!info.name.is_empty());
                assert!(!info.description.is_empty());
            }
        }

        it "round-trips through as_str and from_str" {
            for category in Category::ALL {
                assert_eq!(Category::from_str(category.as_str()), Some(category));
            }
            assert_eq!(Category::from_str("bogus"), None);
        }

        it "serializes to the lowercase wire names" {
            let encoded = serde_json::to_string(&Category::Structure).expect("Failed to encode");
            assert_eq!(encoded, "\"structure\"");

            let decoded: Category = serde_json::from_str("\"timeline\"").expect("Failed to decode");
            assert_eq!(decoded, Category::Timeline);
        }
    }

    describe "learning mode table" {
        it "has one info entry per variant, agreeing on the id" {
            for mode in LearningMode::ALL_MODES {
                let info = mode.info();
                assert_eq!(info.id, mode);
                assert!(info.tension <= 100);
            }
        }

        it "bounds every mode except All" {
            assert_eq!(LearningMode::DeepFocus.info().example_count, Some(2));
            assert_eq!(LearningMode::Balanced.info().example_count, Some(4));
            assert_eq!(LearningMode::BroadExploration.info().example_count, Some(6));
            assert_eq!(LearningMode::All.info().example_count, None);
        }

        it "round-trips through as_str and from_str" {
            for mode in LearningMode::ALL_MODES {
                assert_eq!(LearningMode::from_str(mode.as_str()), Some(mode));
            }
            assert_eq!(LearningMode::from_str("bogus"), None);
        }

        it "serializes to the kebab-case wire names" {
            let encoded = serde_json::to_string(&LearningMode::BroadExploration)
                .expect("Failed to encode");
            assert_eq!(encoded, "\"broad-exploration\"");

            let decoded: LearningMode =
                serde_json::from_str("\"deep-focus\"").expect("Failed to decode");
            assert_eq!(decoded, LearningMode::DeepFocus);
        }
    }

    describe "ui data contracts" {
        it "decodes a shareable state with only a diagram type" {
            let state: ShareableState =
                serde_json::from_str(r#"{"diagramType":"flowchart"}"#).expect("Failed to decode");

            assert_eq!(state.diagram_type, "flowchart");
            assert!(state.example_id.is_none());
            assert!(state.custom_code.is_none());
            assert!(state.mode.is_none());
        }

        it "round-trips a full shareable state through camelCase json" {
            let state = ShareableState {
                diagram_type: "flowchart".to_string(),
                example_id: Some("flowchart-basic".to_string()),
                custom_code: Some("flowchart TD\n    A --> B".to_string()),
                mode: Some(LearningMode::Balanced),
            };

            let encoded = serde_json::to_string(&state).expect("Failed to encode");
            assert!(encoded.contains("\"diagramType\""));
            assert!(encoded.contains("\"exampleId\""));

            let decoded: ShareableState = serde_json::from_str(&encoded).expect("Failed to decode");
            assert_eq!(decoded.diagram_type, state.diagram_type);
            assert_eq!(decoded.example_id, state.example_id);
            assert_eq!(decoded.mode, Some(LearningMode::Balanced));
        }

        it "resolves a shipped shareable state against the builtin catalog" {
            let catalog = data::builtin();
            let state = ShareableState {
                diagram_type: "flowchart".to_string(),
                example_id: Some("flowchart-subgraphs".to_string()),
                custom_code: None,
                mode: None,
            };

            let (diagram, example) = catalog.resolve(&state).expect("State should resolve");
            assert_eq!(diagram.id, "flowchart");
            assert_eq!(example.expect("Example should resolve").id, "flowchart-subgraphs");
        }

        it "decodes empty user preferences to all-absent fields" {
            let prefs: UserPreferences = serde_json::from_str("{}").expect("Failed to decode");
            assert!(prefs.learning_mode.is_none());
            assert!(prefs.dark_mode.is_none());
            assert!(prefs.last_diagram_type.is_none());
            assert!(prefs.bookmarks.is_none());
            assert!(prefs.completed_examples.is_none());
        }
    }
}
