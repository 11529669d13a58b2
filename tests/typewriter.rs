use gitfolio::typewriter::{
    Typewriter, DELETE_DELAY, EMPTY_PAUSE, FULL_PAUSE, PHRASES, TYPE_DELAY,
};

#[test]
fn reveals_characters_one_at_a_time() {
    let mut tw = Typewriter::new(&["hi"]);
    assert_eq!(tw.text(), "");

    assert_eq!(tw.step(), TYPE_DELAY);
    assert_eq!(tw.text(), "h");

    // The full phrase pauses before deletion starts.
    assert_eq!(tw.step(), FULL_PAUSE);
    assert_eq!(tw.text(), "hi");
}

#[test]
fn deletes_faster_than_it_types() {
    let mut tw = Typewriter::new(&["hi"]);
    tw.step();
    tw.step(); // full phrase shown, now deleting

    assert_eq!(tw.step(), DELETE_DELAY);
    assert_eq!(tw.text(), "h");
}

#[test]
fn pauses_at_empty_then_advances_to_next_phrase() {
    let mut tw = Typewriter::new(&["ab", "xy"]);
    // type a, type b (full pause), delete b, delete a (empty pause)
    tw.step();
    tw.step();
    tw.step();
    assert_eq!(tw.step(), EMPTY_PAUSE);
    assert_eq!(tw.text(), "");

    assert_eq!(tw.step(), TYPE_DELAY);
    assert_eq!(tw.text(), "x");
}

#[test]
fn wraps_after_the_last_phrase() {
    let mut tw = Typewriter::new(&["a", "b"]);
    // phrase "a": type+pause, delete+pause -> "b": type+pause, delete+pause -> back to "a"
    for _ in 0..4 {
        tw.step();
    }
    for _ in 0..4 {
        tw.step();
    }
    tw.step();
    assert_eq!(tw.text(), "a");
}

#[test]
fn multibyte_phrases_step_by_character() {
    let mut tw = Typewriter::new(&["héé"]);
    tw.step();
    assert_eq!(tw.text(), "h");
    tw.step();
    assert_eq!(tw.text(), "hé");
}

#[test]
fn runs_indefinitely_without_panicking() {
    let mut tw = Typewriter::default();
    for _ in 0..10_000 {
        tw.step();
        let text = tw.text();
        assert!(PHRASES.iter().any(|p| p.starts_with(text.as_str())));
    }
}

#[test]
fn ships_with_the_fixed_phrase_list() {
    assert_eq!(PHRASES.len(), 4);
    assert!(PHRASES.contains(&"Resilient Systems."));
}
