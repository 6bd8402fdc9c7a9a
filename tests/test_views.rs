mod common;

use common::ScriptedPrompt;
use tline_zin::prelude::*;

fn inputs() -> LineInputs {
    LineInputs {
        frequency: "1000".into(),
        line_length: "10".into(),
        load_magnitude: "50".into(),
        load_phase: "0".into(),
        max_impedance: String::new(),
        autoscale: true,
    }
}

fn open_with(names: &[&str]) -> MainView<MemoryStore> {
    let mut store = CatalogStore::new(MemoryStore::new());
    let sets = names
        .iter()
        .enumerate()
        .map(|(i, name)| RlgcSet::new(*name, 10.0 * (i + 1) as f64, 0.605e-3, 4.35e-5, 0.0488e-6))
        .collect();
    store.save(&Catalog::new(sets)).unwrap();
    MainView::open(store, inputs()).unwrap()
}

#[test]
fn opening_an_empty_store_seeds_the_default() {
    let view = MainView::open(CatalogStore::new(MemoryStore::new()), inputs()).unwrap();

    let render = view.render().unwrap();
    assert_eq!(render.names, vec!["Default".to_string()]);
    assert_eq!(render.selected, 0);
    assert_eq!(view.form.name, "Default");
    assert_eq!(render.points().len(), 101);
    assert_eq!(render.bounds.x_max, 10.0);
    assert!(render.z0_polar().ends_with("° Ω"));
    assert!(render.attenuation().ends_with(" dB/km"));
}

#[test]
fn save_without_name_changes_nothing() {
    let mut view = open_with(&["a"]);
    let before = view.catalog().unwrap();

    view.form.name = "   ".into();
    let mut prompt = ScriptedPrompt::default();
    let res = view.save_form(&mut prompt);

    assert!(matches!(res, Err(Error::Validation { field: "name" })));
    assert_eq!(prompt.alerts.len(), 1);
    assert_eq!(view.catalog().unwrap(), before);
}

#[test]
fn save_appends_and_selects() {
    let mut view = open_with(&["a", "b"]);
    view.form.name = "new".into();
    view.form.r = "1.5".into();

    let mut prompt = ScriptedPrompt::default();
    assert_eq!(view.save_form(&mut prompt).unwrap(), Some(2));
    assert_eq!(view.selected(), 2);
    assert_eq!(view.catalog().unwrap().at(2).unwrap().params.r, 1.5);
    assert!(prompt.questions.is_empty());
    assert_eq!(prompt.alerts, vec!["RLGC set saved.".to_string()]);
}

#[test]
fn save_over_existing_name_asks_first() {
    let mut view = open_with(&["a", "b"]);
    view.select(1).unwrap();
    view.form.r = "99".into();

    let mut prompt = ScriptedPrompt::answering(&[false]);
    assert_eq!(view.save_form(&mut prompt).unwrap(), None);
    assert_eq!(prompt.questions.len(), 1);
    assert_eq!(view.catalog().unwrap().at(1).unwrap().params.r, 20.0);

    let mut prompt = ScriptedPrompt::answering(&[true]);
    assert_eq!(view.save_form(&mut prompt).unwrap(), Some(1));
    let catalog = view.catalog().unwrap();
    assert_eq!(catalog.names(), vec!["a", "b"]);
    assert_eq!(catalog.at(1).unwrap().params.r, 99.0);
}

#[test]
fn delete_needs_confirmation_and_selects_previous() {
    let mut view = open_with(&["a", "b", "c"]);
    view.select(2).unwrap();

    let mut prompt = ScriptedPrompt::answering(&[false]);
    assert!(!view.delete_selected(&mut prompt).unwrap());
    assert_eq!(view.catalog().unwrap().len(), 3);

    let mut prompt = ScriptedPrompt::answering(&[true]);
    assert!(view.delete_selected(&mut prompt).unwrap());
    assert_eq!(view.catalog().unwrap().names(), vec!["a", "b"]);
    assert_eq!(view.selected(), 1);
    assert_eq!(view.form.name, "b");
}

#[test]
fn deleting_the_only_set_restores_default() {
    let mut view = open_with(&["only"]);
    let mut prompt = ScriptedPrompt::answering(&[true]);
    assert!(view.delete_selected(&mut prompt).unwrap());

    assert_eq!(view.catalog().unwrap().names(), vec!["Default"]);
    assert_eq!(view.selected(), 0);
    assert_eq!(view.render().unwrap().names, vec!["Default".to_string()]);
}

#[test]
fn unparseable_form_field_uses_stored_value() {
    let mut view = open_with(&["a"]);
    let stored = view.recalculate().unwrap().profile.z0;

    view.form.r = "not a number".into();
    assert_eq!(view.recalculate().unwrap().profile.z0, stored);

    view.form.r = "0".into();
    assert_ne!(view.recalculate().unwrap().profile.z0, stored);
}

#[test]
fn invalid_display_bound_warns_but_computes() {
    let mut view = open_with(&["a"]);
    view.inputs.autoscale = false;
    view.inputs.max_impedance = "-3".into();

    let render = view.recalculate().unwrap();
    assert_eq!(render.bounds.y_max, Some(1e-50));
    assert!(matches!(render.warning, Some(Error::Configuration { .. })));
    assert_eq!(render.points().len(), 101);

    view.inputs.max_impedance = "400".into();
    let render = view.recalculate().unwrap();
    assert_eq!(render.bounds.y_max, Some(400.0));
    assert!(render.warning.is_none());
}

#[test]
fn list_delete_reaches_main_view_through_synchronizer() {
    let mut view = open_with(&["a", "b", "c"]);
    view.select(2).unwrap();
    let mut list = view.open_list().unwrap();
    assert_eq!(list.rows().len(), 3);

    let mut prompt = ScriptedPrompt::answering(&[true]);
    assert!(list.delete(0, &mut prompt).unwrap());
    assert_eq!(prompt.questions.len(), 1);
    assert_eq!(list.rows().len(), 2);
    assert_eq!(list.status().last().unwrap(), "Delete succeeded.");

    // the main view still shows the old catalog until it is synchronized
    assert_eq!(view.render().unwrap().names.len(), 3);
    let sync = view.synchronizer();
    assert_eq!(sync.propagate(&mut [&mut view, &mut list]).unwrap(), 1);

    // the selected set follows its new index
    let render = view.render().unwrap();
    assert_eq!(render.names, vec!["b".to_string(), "c".to_string()]);
    assert_eq!(view.selected(), 1);
    assert_eq!(view.form.name, "c");
}

#[test]
fn main_delete_after_list_delete_removes_the_shown_set() {
    let mut view = open_with(&["a", "b", "c", "d"]);
    view.select(2).unwrap();
    let mut list = view.open_list().unwrap();
    assert!(list.delete(0, &mut ScriptedPrompt::answering(&[true])).unwrap());

    // no propagate in between
    let mut prompt = ScriptedPrompt::answering(&[true]);
    assert!(view.delete_selected(&mut prompt).unwrap());

    assert_eq!(prompt.questions, vec!["Delete RLGC set \"c\"?".to_string()]);
    assert_eq!(view.catalog().unwrap().names(), vec!["b", "d"]);
    assert_eq!(view.selected(), 0);
    assert_eq!(view.form.name, "b");
}

#[test]
fn recalculate_after_list_delete_reloads_first() {
    let mut view = open_with(&["a", "b", "c"]);
    view.select(2).unwrap();
    let mut list = view.open_list().unwrap();
    assert!(list.delete(2, &mut ScriptedPrompt::answering(&[true])).unwrap());

    let render = view.recalculate().unwrap();
    assert_eq!(render.names, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(render.selected, 0);
    assert_eq!(view.form.name, "a");
}

#[test]
fn list_delete_of_only_set_shows_default() {
    let mut view = open_with(&["only"]);
    let mut list = view.open_list().unwrap();

    assert!(list.delete(0, &mut ScriptedPrompt::answering(&[true])).unwrap());
    let names: Vec<_> = list.rows().iter().map(|set| set.name.as_str()).collect();
    assert_eq!(names, vec!["Default"]);
    assert_eq!(list.status().last().unwrap(), "Delete succeeded.");

    view.recalculate().unwrap();
    assert_eq!(view.form.name, "Default");
}

#[test]
fn declined_list_delete_is_reported() {
    let view = open_with(&["a", "b"]);
    let mut list = view.open_list().unwrap();

    let mut prompt = ScriptedPrompt::answering(&[false]);
    assert!(!list.delete(0, &mut prompt).unwrap());
    assert_eq!(list.status(), ["Delete started.".to_string(), "Delete cancelled.".to_string()]);
    assert_eq!(list.rows().len(), 2);
    assert_eq!(view.catalog().unwrap().names(), vec!["a", "b"]);
}

#[test]
fn main_save_reaches_list_view() {
    let mut view = open_with(&["a"]);
    let mut list = view.open_list().unwrap();

    view.form.name = "b".into();
    view.save_form(&mut ScriptedPrompt::default()).unwrap();
    assert_eq!(list.rows().len(), 1);

    let sync = view.synchronizer();
    assert_eq!(sync.propagate(&mut [&mut view, &mut list]).unwrap(), 1);
    let names: Vec<_> = list.rows().iter().map(|set| set.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn list_reports_when_main_view_is_gone() {
    let view = open_with(&["a", "b"]);
    let mut list = view.open_list().unwrap();
    drop(view);

    let mut prompt = ScriptedPrompt::answering(&[true]);
    let res = list.delete(0, &mut prompt);

    assert!(matches!(res, Err(Error::UnavailableCollaborator)));
    assert_eq!(prompt.alerts.len(), 1);
    assert_eq!(list.status().last().unwrap(), "Delete failed.");
    assert_eq!(list.rows().len(), 2);
}

#[test]
fn list_delete_out_of_range_is_reported() {
    let view = open_with(&["a"]);
    let mut list = view.open_list().unwrap();

    let mut prompt = ScriptedPrompt::answering(&[true]);
    let res = list.delete(5, &mut prompt);
    assert!(matches!(res, Err(Error::Index { index: 5, len: 1 })));
    assert_eq!(view.catalog().unwrap().names(), vec!["a"]);
}
