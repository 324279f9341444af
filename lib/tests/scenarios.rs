use ca1d_lib::{
    Automaton, AutomatonKind, Config, ConfigError, Generation, ParseKindError, RuleNumError,
    SavedState, Symbols,
};

#[test]
fn test_rule_90_one_step() {
    let initial = Generation::from_symbols("00100100", '1');
    let mut automaton = Automaton::new(AutomatonKind::Elementary, 90, initial).unwrap();
    assert_eq!(automaton.evolve(1), 1);
    assert_eq!(automaton.current_generation().render('0', '1'), "01011010");
}

#[test]
fn test_rule_30_from_single_cell() {
    let config = Config::from_args(&["ECA", "30", ".", "#", "....#....", "4"]).unwrap();
    let automaton = Automaton::from_config(&config).unwrap();
    assert_eq!(
        automaton.render_all(),
        "....#....\n\
         ...###...\n\
         ..##..#..\n\
         .##.####.\n\
         ##..#...#"
    );
}

#[test]
fn test_totalistic_rule_20() {
    let initial = Generation::from_symbols("0001100000", '1');
    let mut automaton = Automaton::new(AutomatonKind::Totalistic, 20, initial).unwrap();
    assert_eq!(automaton.generation_at(1).render('0', '1'), "0011110000");
    assert_eq!(
        automaton.rule_table_string(),
        "5 4 3 2 1 0\n0 1 0 1 0 0"
    );
}

#[test]
fn test_totalistic_rule_0_dies_out() {
    let initial = Generation::from_symbols("1101110111", '1');
    let mut automaton = Automaton::new(AutomatonKind::Totalistic, 0, initial).unwrap();
    automaton.evolve(5);
    for generation in &automaton.generations()[1..] {
        assert_eq!(generation.population(), 0);
        assert_eq!(generation.size(), 10);
    }
}

#[test]
fn test_creation_errors() {
    let initial = Generation::from_symbols("010", '1');
    assert_eq!(
        Automaton::create("XCA", 90, initial.clone()),
        Err(ConfigError::UnknownKind(ParseKindError("XCA".to_string())))
    );

    let error = Automaton::create("ECA", 300, initial).unwrap_err();
    assert_eq!(
        error,
        ConfigError::InvalidRule(RuleNumError {
            rule_num: 300,
            min: 0,
            max: 255
        })
    );
    assert_eq!(error.to_string(), "ruleNum is outside the range [0, 255].");
}

#[test]
fn test_lazy_history_matches_stepwise() {
    let initial = Generation::from_symbols("0110100101101", '1');
    let mut lazy = Automaton::new(AutomatonKind::Elementary, 110, initial.clone()).unwrap();
    let mut stepwise = Automaton::new(AutomatonKind::Elementary, 110, initial).unwrap();

    for _ in 0..20 {
        stepwise.evolve(1);
    }
    let generation = lazy.generation_at(20).clone();
    assert_eq!(&generation, stepwise.current_generation());
    assert_eq!(lazy.render_all(), stepwise.render_all());

    assert_eq!(lazy.generation_at(20), &generation);
    assert_eq!(lazy.total_steps(), 20);
}

#[test]
fn test_saved_state_round_trip() {
    let text = "90\n.#\n...#...\n";
    let state: SavedState = text.parse().unwrap();
    let mut automaton = Automaton::from_state(AutomatonKind::Elementary, &state).unwrap();
    assert_eq!(automaton.symbols(), Symbols::new('.', '#'));

    automaton.evolve(3);
    assert_eq!(automaton.state().to_string(), text);

    let mut buf = Vec::new();
    automaton.write_evolution(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "...#...\n..#.#..\n.#...#.\n#.#.#.#\n"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let initial = Generation::from_symbols("0010011", '1');
    let mut automaton = Automaton::new(AutomatonKind::Totalistic, 42, initial).unwrap();
    automaton.evolve(3);

    let json = serde_json::to_string(&automaton).unwrap();
    let restored: Automaton = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, automaton);

    let invalid = json.replace("42", "99");
    assert!(serde_json::from_str::<Automaton>(&invalid).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rebuilds_history() {
    let initial = Generation::from_symbols("111", '1');
    let mut automaton = Automaton::new(AutomatonKind::Elementary, 0, initial).unwrap();
    automaton.evolve(2);

    let json = serde_json::to_string(&automaton).unwrap();
    assert!(!json.contains("generations"));

    // A session listing a history of its own is rejected.
    let forged = r#"{"rule":{"Elementary":0},"symbols":{"false_symbol":"0","true_symbol":"1"},"generations":[[true,true,true],[true],[true,false,true,false,true]]}"#;
    assert!(serde_json::from_str::<Automaton>(forged).is_err());

    // Editing the step count recomputes the history from the rule.
    let edited = json.replace("\"total_steps\":2", "\"total_steps\":4");
    let restored: Automaton = serde_json::from_str(&edited).unwrap();
    assert_eq!(restored.total_steps(), 4);
    assert_eq!(restored.render_all(), "111\n000\n000\n000\n000");
}
