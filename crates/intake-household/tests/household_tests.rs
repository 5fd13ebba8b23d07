use intake_household::{
    FieldWrite, HouseholdConfig, HouseholdEditor, HouseholdError, Role, AGE_FIELD, DISABLED_FIELD,
    ROLE_FIELD,
};
use intake_state::{ClientStore, Node, WriteChannel};
use intake_test_utils::{client_with, family_of_three, init_tracing, member, sample_store, timed_client};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn editor() -> HouseholdEditor {
    HouseholdEditor::new(HouseholdConfig::default()).unwrap()
}

fn household_json(store: &ClientStore) -> serde_json::Value {
    store.root().get("household").unwrap().to_json()
}

#[test]
fn test_append_append_remove_scenario() {
    init_tracing();
    let mut store = sample_store();
    let editor = editor();

    editor.append(&store.snapshot(), &mut store).unwrap();
    assert_eq!(
        household_json(&store),
        json!([member(40, "head", false), member(30, "spouse", false)])
    );

    editor.append(&store.snapshot(), &mut store).unwrap();
    assert_eq!(household_json(&store)[2], member(12, "member", false));

    editor.remove_at(&store.snapshot(), 1, &mut store).unwrap();
    assert_eq!(
        household_json(&store),
        json!([member(40, "head", false), member(12, "member", false)])
    );
    assert_eq!(store.revision(), 3);
}

#[test]
fn test_remove_rederives_roles() {
    let mut store = ClientStore::new(client_with(family_of_three()));
    let editor = editor();

    editor.remove_at(&store.snapshot(), 1, &mut store).unwrap();

    let roles: Vec<Role> = editor
        .rows(store.root())
        .unwrap()
        .iter()
        .map(|row| row.role)
        .collect();
    assert_eq!(roles, vec![Role::Head, Role::ChildOrOther]);
}

#[test]
fn test_head_protection() {
    let mut store = ClientStore::new(client_with(family_of_three()));
    let editor = editor();
    let before = store.snapshot();

    let result = editor.remove_at(&store.snapshot(), 0, &mut store);

    assert!(matches!(result, Err(HouseholdError::HeadRemoval)));
    assert!(store.root().same_ref(&before));
    assert_eq!(household_json(&store).as_array().unwrap().len(), 3);
}

#[test]
fn test_structural_edit_leaves_rendered_list_untouched() {
    let mut store = ClientStore::new(client_with(family_of_three()));
    let editor = editor();
    let rendered = store.snapshot();
    let rendered_json = rendered.to_json();

    editor.remove_at(&rendered, 2, &mut store).unwrap();
    editor.append(&store.snapshot(), &mut store).unwrap();

    assert_eq!(rendered.to_json(), rendered_json);
    // untouched branches are shared with the new root
    assert!(rendered
        .get("income")
        .unwrap()
        .same_ref(store.root().get("income").unwrap()));
}

#[test]
fn test_spouse_choice_reset_by_dropdown() {
    let mut store = ClientStore::new(client_with(family_of_three()));
    let editor = editor();

    let outcome = editor
        .set_member_input(&store.snapshot(), 1, ROLE_FIELD, "member", &mut store)
        .unwrap();
    assert_eq!(outcome, FieldWrite::Written(Node::from("member")));
    assert_eq!(editor.rows(store.root()).unwrap()[1].role, Role::ChildOrOther);

    editor
        .set_member_input(&store.snapshot(), 1, ROLE_FIELD, "spouse", &mut store)
        .unwrap();
    assert_eq!(editor.rows(store.root()).unwrap()[1].role, Role::Spouse);
}

#[test]
fn test_checkbox_write() {
    let mut store = sample_store();
    let editor = editor();

    editor
        .set_member_input(&store.snapshot(), 0, DISABLED_FIELD, "true", &mut store)
        .unwrap();

    assert_eq!(household_json(&store)[0], member(40, "head", true));
}

#[test]
fn test_timed_household_only_touches_current() {
    let mut store = ClientStore::new(timed_client(
        vec![member(40, "head", false)],
        vec![member(41, "head", false)],
    ));
    let editor = HouseholdEditor::new(HouseholdConfig::new().with_base_path("current/household"))
        .unwrap();

    editor
        .set_member_input(&store.snapshot(), 0, AGE_FIELD, "44", &mut store)
        .unwrap();

    assert_eq!(
        store.root().to_json(),
        json!({
            "current": {"household": [member(44, "head", false)]},
            "future": {"household": [member(41, "head", false)]},
        })
    );
}

#[test]
fn test_custom_defaults() {
    let mut store = sample_store();
    let editor = HouseholdEditor::new(
        HouseholdConfig::new()
            .with_spouse_age(35)
            .with_child_age(5),
    )
    .unwrap();

    editor.append(&store.snapshot(), &mut store).unwrap();
    editor.append(&store.snapshot(), &mut store).unwrap();

    let rows = editor.rows(store.root()).unwrap();
    assert_eq!(rows[1].age, 35);
    assert_eq!(rows[2].age, 5);
}

#[derive(Debug, Clone)]
enum Edit {
    Append,
    Remove(usize),
    SetRole(usize, bool),
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        Just(Edit::Append),
        (0usize..6).prop_map(Edit::Remove),
        (0usize..6, any::<bool>()).prop_map(|(i, spouse)| Edit::SetRole(i, spouse)),
    ]
}

proptest! {
    #[test]
    fn prop_role_invariants_hold_after_any_edit(edits in prop::collection::vec(arb_edit(), 0..24)) {
        let mut store = sample_store();
        let editor = editor();

        for edit in edits {
            let root = store.snapshot();
            let _ = match edit {
                Edit::Append => editor.append(&root, &mut store).map(|_| ()),
                Edit::Remove(i) => editor.remove_at(&root, i, &mut store).map(|_| ()),
                Edit::SetRole(i, spouse) => {
                    let tag = if spouse { "spouse" } else { "member" };
                    editor.set_member_input(&root, i, ROLE_FIELD, tag, &mut store).map(|_| ())
                }
            };

            let rows = editor.rows(store.root()).unwrap();
            prop_assert!(!rows.is_empty());
            prop_assert_eq!(rows[0].role, Role::Head);
            prop_assert_eq!(rows[0].age, 40);
            for row in rows.iter().skip(2) {
                prop_assert_eq!(row.role, Role::ChildOrOther);
            }
            for (i, row) in rows.iter().enumerate() {
                prop_assert_eq!(row.index, i);
            }
        }
    }

    #[test]
    fn prop_head_removal_never_shrinks(extra in 0usize..5) {
        let mut store = sample_store();
        let editor = editor();
        for _ in 0..extra {
            editor.append(&store.snapshot(), &mut store).unwrap();
        }
        let len = editor.rows(store.root()).unwrap().len();

        prop_assert!(editor.remove_at(&store.snapshot(), 0, &mut store).is_err());
        prop_assert_eq!(editor.rows(store.root()).unwrap().len(), len);
    }
}

#[test]
fn test_writes_go_through_channel_only() {
    let root = client_with(family_of_three());
    let editor = editor();
    let mut writes = Vec::new();
    let mut channel = |path: &intake_state::Path, value: Node| -> Result<(), intake_state::TreeError> {
        writes.push((path.to_string(), value.len()));
        Ok(())
    };

    editor.append(&root, &mut channel).unwrap();
    editor.remove_at(&root, 2, &mut channel).unwrap();
    channel.write_str("zip", Node::from("02140")).unwrap();

    assert_eq!(
        writes,
        vec![
            ("household".to_string(), 4),
            ("household".to_string(), 2),
            ("zip".to_string(), 0),
        ]
    );
}
