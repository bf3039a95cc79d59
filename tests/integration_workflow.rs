//! Recorrido completo: un workflow exportado se descarga (simulado con un
//! JSON literal), se edita localmente, se serializa para subirlo y se vuelve
//! a leer.
use galaxy_objects::hashing::to_canonical_json;
use galaxy_objects::{FromRecord, Record, Tracked, Workflow, WrapperError};
use serde_json::{json, Value};

fn exported_workflow() -> Value {
    json!({
        "a_galaxy_workflow": "true",
        "format-version": "0.1",
        "name": "Filter and concatenate",
        "annotation": "",
        "steps": {
            "0": {
                "id": 0,
                "type": "data_input",
                "tool_id": null,
                "tool_version": null,
                "tool_errors": null,
                "tool_state": "{\"name\": \"Input Dataset\"}",
                "input_connections": {}
            },
            "1": {
                "id": 1,
                "type": "tool",
                "tool_id": "Filter1",
                "tool_version": "1.1.0",
                "tool_errors": null,
                "tool_state": json!({"cond": "\"c1>5\"", "header_lines": "\"0\"", "input": "null"})
                    .to_string(),
                "input_connections": {"input": {"id": 0, "output_name": "output"}}
            },
            "2": {
                "id": 2,
                "type": "tool",
                "tool_id": "cat1",
                "tool_version": "1.0.0",
                "tool_errors": null,
                "tool_state": "{\"input1\": \"null\", \"queries\": \"[]\"}",
                "input_connections": {"input1": {"id": 1, "output_name": "out_file1"}}
            }
        }
    })
}

fn record() -> Record {
    exported_workflow().as_object().cloned().expect("object fixture")
}

fn server_links() -> Record {
    json!({"0": {"label": "Input Dataset"}}).as_object().cloned().expect("object fixture")
}

#[test]
fn edit_and_reupload_cycle() {
    let links = server_links();
    let mut wf = Workflow::new(&record(), Some("ebfb8f50c6abde6d".into()), Some(&links))
        .expect("valid workflow");
    assert_eq!(wf.name().expect("name"), "Filter and concatenate");
    assert_eq!(wf.links().and_then(|l| l.get("Input Dataset")).map(String::as_str), Some("0"));
    assert!(!wf.is_dirty());

    let filter = wf.steps()[1].tool().expect("filter is a tool");
    assert_eq!(filter.id().expect("tool id"), "Filter1");
    assert_eq!(filter.get("cond").expect("cond"), json!("c1>5"));
    assert!(matches!(wf.steps()[0].tool(), Err(WrapperError::NotATool(_))));

    wf.step_mut(1)
        .expect("step 1")
        .tool_mut()
        .expect("tool")
        .set("cond", json!("c1>10"))
        .expect("existing param");
    assert!(wf.is_dirty());
    assert_eq!(wf.id(), None);

    let upload = wf.to_json();
    let reread = Workflow::from_json(&upload).expect("round trip");
    assert_eq!(reread.steps()[1].tool().expect("tool").get("cond").expect("cond"), json!("c1>10"));
    assert_eq!(reread.to_json(), upload);
    assert_eq!(reread.fingerprint(), wf.fingerprint());
}

#[test]
fn serialized_form_is_canonical() {
    let wf = Workflow::from_record(&record()).expect("valid workflow");
    assert_eq!(wf.to_json(), to_canonical_json(&exported_workflow()));
}

#[test]
fn caller_record_is_never_touched() {
    let original = record();
    let mut wf = Workflow::new(&original, None, None).expect("valid workflow");
    wf.set("annotation", json!("edited")).expect("existing field");
    wf.step_mut(2)
        .expect("step 2")
        .tool_mut()
        .expect("tool")
        .set("queries", json!([{"input2": null}]))
        .expect("existing param");
    assert_eq!(original, record());
}
