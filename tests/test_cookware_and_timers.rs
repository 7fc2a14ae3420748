use cooklang_parser::{parse, Parser, ParserOptions, Quantity, StepElement};

fn timers(source: &str) -> Vec<cooklang_parser::Timer> {
    parse(source).steps[0]
        .iter()
        .filter_map(|element| match element {
            StepElement::Timer(timer) => Some(timer.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_cookware_empty_braces_get_default_quantity() {
    let result = parse("Heat the #pan{} first.");

    let pan = &result.cookwares[0];
    assert_eq!(pan.name, "pan");
    assert_eq!(pan.quantity, Quantity::Number(1.0));
    assert_eq!(pan.step, None);
}

#[test]
fn test_cookware_explicit_quantity() {
    let result = parse("Lay out #bowl{2}.");

    assert_eq!(result.cookwares[0].quantity, Quantity::Number(2.0));
}

#[test]
fn test_multiword_cookware() {
    let result = parse("Use a #cast iron pan{1} here.");

    assert_eq!(result.cookwares[0].name, "cast iron pan");
    assert_eq!(result.cookwares[0].quantity, Quantity::Number(1.0));
}

#[test]
fn test_single_word_cookware_without_braces() {
    let result = parse("Whisk in a #bowl until smooth.");

    assert_eq!(result.cookwares[0].name, "bowl");
    assert_eq!(result.cookwares[0].quantity, Quantity::Number(1.0));
}

#[test]
fn test_configured_default_cookware_amount() {
    let parser = Parser::new(ParserOptions {
        default_cookware_amount: Quantity::Text("one big".into()),
        ..ParserOptions::default()
    });
    let result = parser.parse("Grab a #skillet.");

    assert_eq!(
        result.cookwares[0].quantity,
        Quantity::Text("one big".into())
    );
}

#[test]
fn test_cookware_step_only_with_step_numbers() {
    let source = "Heat #pan{}.";

    let without = parse(source);
    assert_eq!(without.cookwares[0].step, None);

    let with = Parser::new(ParserOptions {
        include_step_number: true,
        ..ParserOptions::default()
    })
    .parse(source);
    assert_eq!(with.cookwares[0].step, Some(0));
}

#[test]
fn test_anonymous_timer() {
    let found = timers("Simmer for ~{10%minutes}.");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, None);
    assert_eq!(found[0].quantity, Quantity::Number(10.0));
    assert_eq!(found[0].units, "minutes");
}

#[test]
fn test_named_timer() {
    let found = timers("Let it ~rest{90%seconds} before carving.");

    assert_eq!(found[0].name.as_deref(), Some("rest"));
    assert_eq!(found[0].quantity, Quantity::Number(90.0));
    assert_eq!(found[0].units, "seconds");
}

#[test]
fn test_timer_without_units() {
    let found = timers("Count ~{5} breaths.");

    assert_eq!(found[0].quantity, Quantity::Number(5.0));
    assert_eq!(found[0].units, "");
}

#[test]
fn test_empty_timer_defaults_to_zero() {
    let found = timers("Wait ~{} and see.");

    assert_eq!(found[0].quantity, Quantity::Number(0.0));
    assert_eq!(found[0].name, None);
}

#[test]
fn test_timer_with_literal_quantity() {
    let found = timers("Chill ~{a while}.");

    assert_eq!(found[0].quantity, Quantity::Text("a while".into()));
}

#[test]
fn test_flat_cookware_matches_step_elements() {
    let result = parse("Move from #pan{} to #plate{2}.");

    let in_step: Vec<_> = result.steps[0]
        .iter()
        .filter_map(|element| match element {
            StepElement::Cookware(cookware) => Some(cookware.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(in_step, result.cookwares);
    assert_eq!(result.cookwares.len(), 2);
}
