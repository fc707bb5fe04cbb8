use super::*;

fn parse(line: &str) -> Command {
    line.parse().unwrap()
}

#[test]
fn parses_difficulties() {
    assert_eq!(parse("easy"), Command::Start(Difficulty::Easy));
    assert_eq!(parse("  Hard "), Command::Start(Difficulty::Hard));
    assert_eq!(parse("start medium"), Command::Start(Difficulty::Medium));
}

#[test]
fn start_coerces_unknown_difficulty() {
    assert_eq!(parse("start extreme"), Command::Start(Difficulty::Medium));
    assert_eq!(parse("start"), Command::Start(Difficulty::Medium));
}

#[test]
fn parses_option_numbers() {
    assert_eq!(parse("3"), Command::PickOption(3));
    assert_eq!(parse("0"), Command::PickOption(0));
}

#[test]
fn parses_typed_answers() {
    assert_eq!(
        parse("answer Leonardo da Vinci"),
        Command::Answer("Leonardo da Vinci".to_owned())
    );
    assert!("answer".parse::<Command>().is_err());
    assert!("answer   ".parse::<Command>().is_err());
}

#[test]
fn parses_navigation() {
    assert_eq!(parse("next"), Command::Next);
    assert_eq!(parse("PREV"), Command::Previous);
    assert_eq!(parse("retry"), Command::Retry);
    assert_eq!(parse("results"), Command::Results);
    assert_eq!(parse("home"), Command::Home);
    assert_eq!(parse("quit"), Command::Quit);
}

#[test]
fn rejects_unknown_commands() {
    assert!("dance".parse::<Command>().is_err());
    assert!("".parse::<Command>().is_err());
}
