use super::*;
use canvas::template::Presence;

#[test]
fn import_reads_wire_form_with_presence() {
    let raw = r#"[
        {"name": "drill", "x": 1, "y": 2, "width": 3, "height": 4, "present": false},
        {"name": "tray", "x": 0, "y": 0, "width": 10, "height": 10}
    ]"#;
    let list = import_templates(raw).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].presence, Presence::Tracked { present: false });
    assert_eq!(list[0].rect, Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(list[1].presence, Presence::Untracked);
}

#[test]
fn import_rejects_negative_size() {
    let raw = r#"[{"name": "bad", "x": 0, "y": 0, "width": -1, "height": 4}]"#;
    assert!(import_templates(raw).is_err());
}

#[test]
fn import_rejects_malformed_json() {
    assert!(import_templates("[{").is_err());
}

#[test]
fn export_omits_presence_for_untracked() {
    let list = vec![Template::untracked("tray", Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap()];
    let json = export_templates(&list).unwrap();
    assert!(json.contains("\"tray\""));
    assert!(!json.contains("present"));
}

#[test]
fn export_then_import_keeps_list() {
    let list = vec![
        Template::tracked("drill", Rect::new(5.0, 6.0, 7.0, 8.0), true).unwrap(),
        Template::untracked("tray", Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap(),
    ];
    let json = export_templates(&list).unwrap();
    assert_eq!(import_templates(&json).unwrap(), list);
}

#[test]
fn next_template_picks_first_free_name() {
    let first = next_template(&[]).unwrap();
    assert_eq!(first.name, "template 1");
    assert_eq!(first.rect, Rect::new(0.0, 0.0, NEW_TEMPLATE_SIZE, NEW_TEMPLATE_SIZE));

    let taken = vec![first, Template::untracked("template 3", Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap()];
    assert_eq!(next_template(&taken).unwrap().name, "template 2");
}
