//! Behavioural tests for the generator entry points.
//!
//! These scenarios cover seeded reproducibility, locale fallback, template
//! recursion and pattern expansion through the public API.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use factory_helper::{
    CategoryRegistry, Config, FactoryError, Generator, LocaleCatalog, LocaleNode,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

const SINGLE_NAME_BUNDLE: &str = r##"{
    "factory_helper": {
        "name": {
            "first_name": ["Ada"],
            "last_name": ["Lovelace"],
            "name": ["#{first_name} #{last_name}"]
        }
    }
}"##;

#[derive(Default, ScenarioState)]
struct World {
    generator: Slot<Generator>,
    outcome: Slot<Result<String, FactoryError>>,
    runs: Slot<(Vec<String>, Vec<String>)>,
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("the bundled generator for locale \"{locale}\"")]
fn the_bundled_generator_for_locale(world: &World, locale: String) {
    let generator = Generator::new(
        LocaleCatalog::bundled(),
        CategoryRegistry::bundled(),
        Config::new(&locale, 1),
    );
    world.generator.set(generator);
}

#[given("a generator with a single-name locale")]
fn a_generator_with_a_single_name_locale(world: &World) {
    let catalog = LocaleCatalog::from_json("en", SINGLE_NAME_BUNDLE).expect("valid bundle");
    let generator = Generator::new(catalog, CategoryRegistry::bundled(), Config::new("en", 1));
    world.generator.set(generator);
}

#[when("names are generated twice with seed {seed:u64}")]
fn names_are_generated_twice_with_seed(world: &World, seed: u64) {
    let mut generator = take_generator(world);
    let run = |generator: &mut Generator| -> Vec<String> {
        generator.set_seed(Some(seed));
        (0..10)
            .map(|_| generator.call("Name", "name").expect("bundled names"))
            .collect()
    };
    let first = run(&mut generator);
    let second = run(&mut generator);
    world.runs.set((first, second));
}

#[when("the operation \"{target}\" is called")]
fn the_operation_is_called(world: &World, target: String) {
    let mut generator = take_generator(world);
    let (category, operation) = target.split_once('.').expect("Category.operation");
    world.outcome.set(generator.call(category, operation));
}

#[when("the key \"{key}\" is fetched")]
fn the_key_is_fetched(world: &World, key: String) {
    let mut generator = take_generator(world);
    world.outcome.set(generator.fetch(&key));
}

#[when("the template \"{key}\" is parsed")]
fn the_template_is_parsed(world: &World, key: String) {
    let mut generator = take_generator(world);
    world.outcome.set(generator.parse(&key));
}

#[when("the pattern \"{pattern}\" is expanded with seed {seed:u64}")]
fn the_pattern_is_expanded_with_seed(world: &World, pattern: String, seed: u64) {
    let mut generator = take_generator(world);
    generator.set_seed(Some(seed));
    world.outcome.set(Ok(generator.regexify(&pattern)));
}

#[then("both runs produce the same names")]
fn both_runs_produce_the_same_names(world: &World) {
    let (first, second) = world.runs.get().expect("runs recorded");

    assert_eq!(first.len(), 10);
    assert_eq!(first, second);
}

#[then("the value is one of the \"{locale}\" entries for \"{key}\"")]
fn the_value_is_one_of_the_entries(world: &World, locale: String, key: String) {
    let value = value(world);
    let catalog = LocaleCatalog::bundled();
    let Some(LocaleNode::List(entries)) = catalog.lookup(&locale, &format!("factory_helper.{key}"))
    else {
        panic!("expected a list at {locale}.{key}");
    };

    assert!(entries.contains(&value), "unexpected value: {value}");
}

#[then("a missing translation is reported for \"{key}\" in \"{locale}\"")]
fn a_missing_translation_is_reported(world: &World, key: String, locale: String) {
    let outcome = world.outcome.get().expect("outcome recorded");

    assert_eq!(
        outcome,
        Err(FactoryError::MissingTranslation { key, locale })
    );
}

#[then("the value is \"{expected}\"")]
fn the_value_is(world: &World, expected: String) {
    assert_eq!(value(world), expected);
}

#[then("the value has {count:usize} digits")]
fn the_value_has_digits(world: &World, count: usize) {
    let value = value(world);

    assert_eq!(value.len(), count, "unexpected value: {value}");
    assert!(value.chars().all(|c| c.is_ascii_digit()), "unexpected value: {value}");
}

#[then("the value is one of \"{first}\", \"{second}\" or \"{third}\"")]
fn the_value_is_one_of(world: &World, first: String, second: String, third: String) {
    let value = value(world);

    assert!(
        [first, second, third].contains(&value),
        "unexpected value: {value}"
    );
}

#[then("an unknown operation is reported for \"{category}\" and \"{name}\"")]
fn an_unknown_operation_is_reported(world: &World, category: String, name: String) {
    let outcome = world.outcome.get().expect("outcome recorded");

    assert_eq!(
        outcome,
        Err(FactoryError::UnknownOperation { category, name })
    );
}

#[scenario(path = "tests/features/factory_helper.feature", index = 0)]
fn equal_seeds_reproduce_values(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/factory_helper.feature", index = 1)]
fn partial_locale_falls_back(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/factory_helper.feature", index = 2)]
fn missing_key_reports_requested_locale(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/factory_helper.feature", index = 3)]
fn templates_resolve_across_categories(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/factory_helper.feature", index = 4)]
fn delimited_values_expand_as_patterns(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/factory_helper.feature", index = 5)]
fn alternation_picks_one_alternative(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/factory_helper.feature", index = 6)]
fn unknown_operations_are_rejected(world: World) {
    drop(world);
}

fn take_generator(world: &World) -> Generator {
    world.generator.get().expect("generator should be set")
}

fn value(world: &World) -> String {
    world
        .outcome
        .get()
        .expect("outcome recorded")
        .expect("generation should succeed")
}
