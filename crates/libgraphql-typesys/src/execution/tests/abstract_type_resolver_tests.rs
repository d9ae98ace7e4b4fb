use crate::SchemaBuildError;
use crate::SchemaBuilder;
use crate::Schema;
use crate::diagnostics::DiagnosticIds;
use crate::diagnostics::DiagnosticSink;
use crate::diagnostics::Severity;
use crate::execution::Executor;
use crate::execution::GraphQLLocation;
use crate::execution::PathSegment;
use crate::schema::ResolverMap;
use crate::types::IsTypeOf;
use crate::types::TypeResolver;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

type Result<T> = std::result::Result<T, SchemaBuildError>;
type Recorded = Arc<Mutex<Vec<(String, DiagnosticIds, Severity)>>>;

const SDL: &str = concat!(
    "interface Character { name: String! }\n",
    "type Human implements Character { name: String! homePlanet: String }\n",
    "type Droid implements Character { name: String! primaryFunction: String }\n",
    "union SearchResult = Human | Droid\n",
    "type Query {\n",
    "  characters: [Character]\n",
    "  hero: Character\n",
    "  search: [SearchResult]\n",
    "}\n",
);

const CHARACTERS_QUERY: &str = "{\n  characters {\n    name\n    ... on Human { homePlanet }\n    ... on Droid { primaryFunction }\n  }\n}";

const SCAN_SUFFIX: &str = "Switching to slow resolution method using isTypeOf of all \
    possible implementations. It requires full schema scan and degrades query \
    performance significantly. Make sure your resolveType always returns valid \
    implementation or throws.";

fn root_value() -> serde_json::Value {
    json!({
        "characters": [
            {"name": "Luke Skywalker", "homePlanet": "Tatooine"},
            {"name": "R2-D2", "primaryFunction": "Astromech"},
        ],
    })
}

fn build(resolvers: ResolverMap) -> Result<Schema> {
    SchemaBuilder::new()
        .load_str(None, SDL)?
        .decorator(resolvers)
        .build()
}

fn with_is_type_of(resolvers: ResolverMap) -> ResolverMap {
    resolvers
        .is_type_of("Human", IsTypeOf::new(|value, _, _| value.get("homePlanet").is_some()))
        .is_type_of("Droid", IsTypeOf::new(|value, _, _| value.get("primaryFunction").is_some()))
}

fn recording_sink() -> (DiagnosticSink, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(vec![]));
    let handler_recorded = Arc::clone(&recorded);
    let sink = DiagnosticSink::with_handler(
        move |message: &str, id: DiagnosticIds, severity: Severity| {
            handler_recorded.lock().unwrap().push((message.to_string(), id, severity));
        },
    );
    (sink, recorded)
}

fn recorded_messages(recorded: &Recorded) -> Vec<String> {
    recorded.lock().unwrap().iter().map(|(message, _, _)| message.clone()).collect()
}

fn counting_is_type_of(calls: &Arc<AtomicUsize>, matches: bool) -> IsTypeOf {
    let calls = Arc::clone(calls);
    IsTypeOf::new(move |_, _, _| {
        calls.fetch_add(1, Ordering::SeqCst);
        matches
    })
}

mod is_type_of_scan {
    use super::*;

    #[test]
    fn resolves_each_value_by_is_type_of() -> Result<()> {
        let schema = build(with_is_type_of(ResolverMap::new()))?;
        let (sink, _) = recording_sink();
        let response = Executor::new(&schema)
            .root_value(root_value())
            .diagnostics(&sink)
            .execute_str(CHARACTERS_QUERY);

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data, Some(json!({
            "characters": [
                {"name": "Luke Skywalker", "homePlanet": "Tatooine"},
                {"name": "R2-D2", "primaryFunction": "Astromech"},
            ],
        })));
        Ok(())
    }

    #[test]
    fn missing_resolve_type_is_reported_once_per_sink() -> Result<()> {
        let schema = build(with_is_type_of(ResolverMap::new()))?;
        let (sink, recorded) = recording_sink();
        let executor = Executor::new(&schema)
            .root_value(root_value())
            .diagnostics(&sink);
        executor.execute_str(CHARACTERS_QUERY);
        executor.execute_str(CHARACTERS_QUERY);

        assert_eq!(recorded_messages(&recorded), vec![format!(
            "Interface type Character does not provide a resolveType function. {SCAN_SUFFIX}",
        )]);
        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded[0].1, DiagnosticIds::FULL_SCHEMA_SCAN);
        assert_eq!(recorded[0].2, Severity::Warning);
        Ok(())
    }

    #[test]
    fn sinks_do_not_share_warned_state() -> Result<()> {
        let schema = build(with_is_type_of(ResolverMap::new()))?;
        let (first_sink, first_recorded) = recording_sink();
        let (second_sink, second_recorded) = recording_sink();

        Executor::new(&schema)
            .root_value(root_value())
            .diagnostics(&first_sink)
            .execute_str(CHARACTERS_QUERY);
        Executor::new(&schema)
            .root_value(root_value())
            .diagnostics(&second_sink)
            .execute_str(CHARACTERS_QUERY);

        assert_eq!(recorded_messages(&first_recorded).len(), 1);
        assert_eq!(recorded_messages(&second_recorded).len(), 1);
        Ok(())
    }

    #[test]
    fn suppressed_sink_reports_nothing() -> Result<()> {
        let schema = build(with_is_type_of(ResolverMap::new()))?;
        let (sink, recorded) = recording_sink();
        sink.suppress(DiagnosticIds::FULL_SCHEMA_SCAN);

        let response = Executor::new(&schema)
            .root_value(root_value())
            .diagnostics(&sink)
            .execute_str(CHARACTERS_QUERY);

        assert_eq!(response.errors, vec![]);
        assert_eq!(recorded_messages(&recorded), Vec::<String>::new());
        Ok(())
    }

    #[test]
    fn union_members_are_scanned_too() -> Result<()> {
        let schema = build(with_is_type_of(ResolverMap::new()))?;
        let (sink, recorded) = recording_sink();
        let response = Executor::new(&schema)
            .root_value(json!({"search": [{"name": "R2-D2", "primaryFunction": "Astromech"}]}))
            .diagnostics(&sink)
            .execute_str("{ search { ... on Droid { name } } }");

        assert_eq!(response.data, Some(json!({"search": [{"name": "R2-D2"}]})));
        assert_eq!(recorded_messages(&recorded), vec![format!(
            "Union type SearchResult does not provide a resolveType function. {SCAN_SUFFIX}",
        )]);
        Ok(())
    }

    #[test]
    fn matching_type_is_asked_once() -> Result<()> {
        let human_calls = Arc::new(AtomicUsize::new(0));
        let schema = build(ResolverMap::new()
            .is_type_of("Human", counting_is_type_of(&human_calls, true)))?;
        let (sink, _) = recording_sink();
        let response = Executor::new(&schema)
            .root_value(json!({"hero": {"name": "Luke Skywalker", "homePlanet": "Tatooine"}}))
            .diagnostics(&sink)
            .execute_str("{ hero { name } }");

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data, Some(json!({"hero": {"name": "Luke Skywalker"}})));
        assert_eq!(human_calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[test]
    fn typename_entry_is_honored_without_hooks() -> Result<()> {
        let schema = build(ResolverMap::new())?;
        let (sink, recorded) = recording_sink();
        let response = Executor::new(&schema)
            .root_value(json!({"hero": {"__typename": "Droid", "name": "R2-D2"}}))
            .diagnostics(&sink)
            .execute_str("{ hero { __typename name } }");

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data, Some(json!({
            "hero": {"__typename": "Droid", "name": "R2-D2"},
        })));
        assert_eq!(recorded_messages(&recorded), Vec::<String>::new());
        Ok(())
    }
}

mod resolve_type_hook {
    use super::*;

    fn droids_only() -> ResolverMap {
        ResolverMap::new().resolve_type("Character", TypeResolver::new(|value, _, _| {
            value.get("primaryFunction").map(|_| "Droid".to_string())
        }))
    }

    #[test]
    fn named_type_is_used_directly() -> Result<()> {
        let schema = build(ResolverMap::new().resolve_type(
            "Character",
            TypeResolver::new(|_, _, _| Some("Human".to_string())),
        ))?;
        let (sink, recorded) = recording_sink();
        let response = Executor::new(&schema)
            .root_value(json!({"hero": {"name": "Leia Organa", "homePlanet": "Alderaan"}}))
            .diagnostics(&sink)
            .execute_str("{ hero { __typename ... on Human { homePlanet } } }");

        assert_eq!(response.data, Some(json!({
            "hero": {"__typename": "Human", "homePlanet": "Alderaan"},
        })));
        assert_eq!(recorded_messages(&recorded), Vec::<String>::new());
        Ok(())
    }

    #[test]
    fn hook_result_is_not_rechecked_by_is_type_of() -> Result<()> {
        let human_calls = Arc::new(AtomicUsize::new(0));
        let schema = build(ResolverMap::new()
            .resolve_type("Character", TypeResolver::new(|_, _, _| Some("Human".to_string())))
            .is_type_of("Human", counting_is_type_of(&human_calls, false)))?;
        let (sink, recorded) = recording_sink();
        let response = Executor::new(&schema)
            .root_value(json!({"hero": {"name": "Luke"}}))
            .diagnostics(&sink)
            .execute_str("{ hero { __typename name } }");

        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data, Some(json!({
            "hero": {"__typename": "Human", "name": "Luke"},
        })));
        assert_eq!(human_calls.load(Ordering::SeqCst), 0);
        assert_eq!(recorded_messages(&recorded), Vec::<String>::new());
        Ok(())
    }

    #[test]
    fn unresolved_value_becomes_a_located_field_error() -> Result<()> {
        let schema = build(droids_only())?;
        let (sink, _) = recording_sink();
        let response = Executor::new(&schema)
            .root_value(root_value())
            .diagnostics(&sink)
            .execute_str(CHARACTERS_QUERY);

        assert_eq!(response.data, Some(json!({
            "characters": [
                null,
                {"name": "R2-D2", "primaryFunction": "Astromech"},
            ],
        })));
        assert_eq!(response.errors.len(), 1);
        let err = &response.errors[0];
        assert_eq!(
            err.message,
            "Abstract type Character must resolve to an Object type at runtime for \
            field Query.characters with value \
            \"{\"name\":\"Luke Skywalker\",\"homePlanet\":\"Tatooine\"}\", received \
            \"null\". Either the Character type should provide a \"resolveType\" \
            function or each possible type should provide an \"isTypeOf\" function.",
        );
        assert_eq!(err.locations, vec![GraphQLLocation { line: 2, column: 3 }]);
        assert_eq!(err.path, vec![
            PathSegment::Field("characters".to_string()),
            PathSegment::ListIndex(0),
        ]);
        Ok(())
    }

    #[test]
    fn null_from_hook_is_reported_every_time() -> Result<()> {
        let schema = build(with_is_type_of(droids_only()))?;
        let (sink, recorded) = recording_sink();
        let executor = Executor::new(&schema)
            .root_value(root_value())
            .diagnostics(&sink);

        let response = executor.execute_str(CHARACTERS_QUERY);
        assert_eq!(response.errors, vec![]);
        assert_eq!(response.data, Some(json!({
            "characters": [
                {"name": "Luke Skywalker", "homePlanet": "Tatooine"},
                {"name": "R2-D2", "primaryFunction": "Astromech"},
            ],
        })));
        executor.execute_str(CHARACTERS_QUERY);

        let expected = format!(
            "Interface type Character returned null from its resolveType function \
            for value: {{\"name\":\"Luke Skywalker\",\"homePlanet\":\"Tatooine\"}}. \
            {SCAN_SUFFIX}",
        );
        assert_eq!(recorded_messages(&recorded), vec![expected.clone(), expected]);
        Ok(())
    }

    #[test]
    fn typename_entry_is_ignored_when_hook_is_present() -> Result<()> {
        let schema = build(droids_only())?;
        let response = Executor::new(&schema)
            .root_value(json!({"hero": {"__typename": "Human", "name": "Han Solo"}}))
            .diagnostics(&DiagnosticSink::with_handler(|_: &str, _: DiagnosticIds, _: Severity| ()))
            .execute_str("{ hero { name } }");

        assert_eq!(response.data, Some(json!({"hero": null})));
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.starts_with("Abstract type Character must resolve"));
        Ok(())
    }

    #[test]
    fn type_outside_possible_types_is_an_error() -> Result<()> {
        let schema = build(ResolverMap::new().resolve_type(
            "Character",
            TypeResolver::new(|_, _, _| Some("Query".to_string())),
        ))?;
        let response = Executor::new(&schema)
            .root_value(json!({"hero": {"name": "Chewbacca"}}))
            .execute_str("{ hero { name } }");

        assert_eq!(response.data, Some(json!({"hero": null})));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].message,
            "Runtime Object type \"Query\" is not a possible type for \"Character\".",
        );
        assert_eq!(response.errors[0].path, vec![PathSegment::Field("hero".to_string())]);
        Ok(())
    }
}
