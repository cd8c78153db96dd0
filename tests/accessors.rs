mod common;

use common::{fields_lens, Shell};
use partwise::{accessors, Index};

fn text_accessors(slot: usize) -> partwise::Accessors<Shell, String> {
    accessors(fields_lens(), String::new(), Index::single(slot))
}

#[test]
fn get_on_absent_entry_yields_default() {
    let access = text_accessors(0);
    assert_eq!(access.get(&Shell::default()), "");
}

#[test]
fn set_then_get_round_trips() {
    let access = text_accessors(0);
    let shell = access.set("written".to_string(), Shell::default());
    assert_eq!(access.get(&shell), "written");
}

#[test]
fn map_transforms_in_place() {
    let access = text_accessors(0);
    let shell = access.set("abc".to_string(), Shell::default());
    let shell = access.map(|text| text.to_uppercase(), shell);
    assert_eq!(access.get(&shell), "ABC");
}

#[test]
fn map_on_absent_entry_starts_from_default() {
    let access = text_accessors(0);
    let shell = access.map(|text| format!("{text}!"), Shell::default());
    assert_eq!(access.get(&shell), "!");
    assert!(shell.fields.contains(&Index::single(0)));
}

#[test]
fn reset_restores_the_default() {
    let access = text_accessors(0);
    let shell = access.set("filled".to_string(), Shell::default());
    assert_eq!(access.get(&shell), "filled");

    let shell = access.reset(shell);
    assert_eq!(access.get(&shell), "");
    assert!(!shell.fields.contains(&Index::single(0)));
}

#[test]
fn reset_on_absent_entry_is_a_no_op() {
    let access = text_accessors(0);
    let shell = access.reset(Shell::default());
    assert_eq!(shell, Shell::default());
}

#[test]
fn reset_leaves_siblings_alone() {
    let zero = text_accessors(0);
    let one = text_accessors(1);

    let shell = zero.set("zero".to_string(), Shell::default());
    let shell = one.set("one".to_string(), shell);
    let shell = zero.reset(shell);

    assert_eq!(zero.get(&shell), "");
    assert_eq!(one.get(&shell), "one");
}
