use itm_core::domain::{IncidentState, OnHoldReason, ResolutionCode};
use itm_core::incident::Incident;
use itm_core::record::IncidentRecord;

fn base(state: &str) -> IncidentRecord {
    IncidentRecord {
        id: 4,
        caller: "Canada Dry".to_string(),
        category: "Software".to_string(),
        priority: "Medium".to_string(),
        name: "login loop".to_string(),
        owner: Some("sesmith5".to_string()),
        change_request: None,
        on_hold_reason: None,
        resolution_code: None,
        cancellation_code: None,
        state: state.to_string(),
        notes: vec!["reported".to_string(), "looking".to_string()],
    }
}

fn load_err(record: &IncidentRecord) -> String {
    let err = Incident::from_record(record).expect_err("record must be rejected");
    assert_eq!(err.code, "LOAD_RECORD_INVALID");
    err.details.unwrap_or_default()
}

#[test]
fn valid_record_restores_every_field() {
    let record = IncidentRecord {
        on_hold_reason: Some("Awaiting Change".to_string()),
        change_request: Some("CR-9".to_string()),
        ..base("On Hold")
    };
    let inc = Incident::from_record(&record).expect("valid record");
    assert_eq!(inc.id(), 4);
    assert_eq!(inc.state(), IncidentState::OnHold);
    assert_eq!(inc.on_hold_reason(), Some(OnHoldReason::AwaitingChange));
    assert_eq!(inc.change_request(), Some("CR-9"));
    assert_eq!(inc.owner(), Some("sesmith5"));
    assert_eq!(inc.notes().len(), 2);
}

#[test]
fn closed_record_keeps_resolution_code() {
    let record = IncidentRecord {
        resolution_code: Some("Caller Closed".to_string()),
        ..base("Closed")
    };
    let inc = Incident::from_record(&record).expect("valid record");
    assert_eq!(inc.resolution_code(), Some(ResolutionCode::CallerClosed));
}

#[test]
fn unknown_enum_labels_are_rejected() {
    assert!(load_err(&base("Pending")).contains("field=state"));
    assert!(load_err(&IncidentRecord {
        category: "Printers".to_string(),
        ..base("New")
    })
    .contains("field=category"));
    assert!(load_err(&IncidentRecord {
        priority: "urgent".to_string(),
        ..base("New")
    })
    .contains("field=priority"));
    assert!(load_err(&IncidentRecord {
        on_hold_reason: Some("Awaiting Godot".to_string()),
        ..base("On Hold")
    })
    .contains("field=on_hold_reason"));
    assert!(load_err(&IncidentRecord {
        resolution_code: Some("Fixed".to_string()),
        ..base("Resolved")
    })
    .contains("field=resolution_code"));
    assert!(load_err(&IncidentRecord {
        cancellation_code: Some("Spam".to_string()),
        ..base("Canceled")
    })
    .contains("field=cancellation_code"));
}

#[test]
fn blank_reason_labels_mean_absent() {
    let record = IncidentRecord {
        on_hold_reason: Some(String::new()),
        resolution_code: Some(" ".to_string()),
        ..base("In Progress")
    };
    let inc = Incident::from_record(&record).expect("blank labels are absent");
    assert_eq!(inc.on_hold_reason(), None);
    assert_eq!(inc.resolution_code(), None);
}

#[test]
fn reason_fields_must_match_state() {
    // Resolved with a leftover hold reason.
    load_err(&IncidentRecord {
        on_hold_reason: Some("Awaiting Caller".to_string()),
        resolution_code: Some("Workaround".to_string()),
        ..base("Resolved")
    });
    // On Hold without a reason.
    load_err(&base("On Hold"));
    // Resolved without a resolution code.
    load_err(&base("Resolved"));
    // Canceled without a cancellation code.
    load_err(&base("Canceled"));
    // In Progress still carrying a cancellation code.
    load_err(&IncidentRecord {
        cancellation_code: Some("Duplicate".to_string()),
        ..base("In Progress")
    });
}

#[test]
fn required_text_fields_are_checked() {
    load_err(&IncidentRecord {
        caller: String::new(),
        ..base("New")
    });
    load_err(&IncidentRecord {
        name: "  ".to_string(),
        ..base("New")
    });
    load_err(&IncidentRecord {
        notes: Vec::new(),
        ..base("New")
    });
}

#[test]
fn record_decodes_with_missing_optional_fields() {
    let record: IncidentRecord = serde_json::from_str(
        r#"{"id":2,"caller":"Jeff","category":"Inquiry","priority":"Low","name":"how do I","state":"New","notes":["hi"]}"#,
    )
    .unwrap();
    assert_eq!(record.owner, None);
    let inc = Incident::from_record(&record).unwrap();
    assert_eq!(inc.state(), IncidentState::New);
}
