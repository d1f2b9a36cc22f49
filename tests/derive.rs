use std::collections::HashMap;

use envstruct::{Binder, Envstruct, EnvstructError, Kind, Report, SpecialType};

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Envstruct, Debug, Default)]
struct Paths {
    #[env = "kind"]
    r#type: std::string::String,

    #[env("timeout")]
    timeout: std::time::Duration,

    #[env("endpoints")]
    endpoints: Vec<url::Url>,

    #[env("retries")]
    retries: Option<Vec<u8>>,

    #[env("labels")]
    labels: HashMap<String, String>,
}

#[test]
fn descriptors_from_qualified_paths() {
    let fields = Paths::FIELDS;
    assert_eq!(fields[0].name, "type");
    assert_eq!(fields[0].type_name, "std::string::String");
    assert_eq!(fields[0].kind, Kind::Text);
    assert_eq!(fields[1].kind, Kind::Special(SpecialType::Duration));
    assert_eq!(fields[2].kind, Kind::Seq(&Kind::Special(SpecialType::Url)));
    assert_eq!(fields[3].kind, Kind::Optional(&Kind::Seq(&Kind::Unsigned)));
    assert_eq!(fields[3].type_name, "Option<Vec<u8>>");
    assert_eq!(fields[4].kind, Kind::Other);
}

#[test]
fn name_value_tag_form() {
    assert_eq!(Paths::FIELDS[0].tag, "kind");
}

#[test]
fn binds_wrapped_special_types() {
    let mut paths = Paths::default();
    Binder::new()
        .vars(vars(&[
            ("TIMEOUT", "1m 30s"),
            ("ENDPOINTS", "https://a.example/, https://b.example/x"),
            ("RETRIES", "1,2,3"),
            ("LABELS", "ignored"),
        ]))
        .load(&mut paths)
        .unwrap();

    assert_eq!(paths.timeout.as_secs(), 90);
    let hosts: Vec<_> = paths.endpoints.iter().filter_map(|u| u.host_str()).collect();
    assert_eq!(hosts, ["a.example", "b.example"]);
    assert_eq!(paths.retries, Some(vec![1, 2, 3]));
    assert!(paths.labels.is_empty());
}

#[derive(Envstruct, Debug, Default)]
struct Generic<T> {
    #[env("generic_name")]
    name: String,

    payload: T,
}

#[test]
fn generic_records() {
    let mut record = Generic::<f32>::default();
    Binder::new()
        .vars(vars(&[("GENERIC_NAME", "g")]))
        .load(&mut record)
        .unwrap();
    assert_eq!(record.name, "g");

    assert_eq!(Generic::<u16>::FIELDS[1].kind, Kind::Other);

    let report = Report::of(&record);
    assert_eq!(report.rows[1].field, "payload");
    assert_eq!(report.rows[1].type_name, "T");
    assert_eq!(report.rows[1].value, "<unsupported>");
}

type Port = u16;
type Hosts = Vec<String>;

mod other {
    #[derive(Debug, Default, PartialEq)]
    pub struct Duration(pub u8);

    #[derive(Debug, Default, PartialEq)]
    pub struct Url;
}

/// No `Debug` impl.
#[derive(Default)]
struct Opaque;

#[derive(Envstruct, Default)]
struct Resolved {
    #[env("port")]
    port: Port,

    #[env("plain")]
    plain: u16,

    #[env("hosts")]
    hosts: Hosts,

    #[env("timeout")]
    timeout: other::Duration,

    #[env("endpoint")]
    endpoint: other::Url,

    #[env("handle")]
    handle: Opaque,

    #[env("ratios")]
    ratios: Vec<f64>,
}

#[test]
fn aliases_bind_as_their_target() {
    assert_eq!(Resolved::FIELDS[0].kind, Kind::Unsigned);
    assert_eq!(Resolved::FIELDS[0].type_name, "Port");
    assert_eq!(Resolved::FIELDS[2].kind, Kind::Seq(&Kind::Text));

    let mut record = Resolved::default();
    Binder::new()
        .vars(vars(&[("PORT", "8080"), ("PLAIN", "8080"), ("HOSTS", "a, b")]))
        .load(&mut record)
        .unwrap();
    assert_eq!(record.port, 8080);
    assert_eq!(record.plain, 8080);
    assert_eq!(record.hosts, ["a", "b"]);
}

#[test]
fn foreign_types_named_like_special_ones_are_unsupported() {
    assert_eq!(Resolved::FIELDS[3].kind, Kind::Other);
    assert_eq!(Resolved::FIELDS[4].kind, Kind::Other);

    let mut record = Resolved::default();
    Binder::new()
        .vars(vars(&[("TIMEOUT", "5s"), ("ENDPOINT", "https://example.com/")]))
        .load(&mut record)
        .unwrap();
    assert_eq!(record.timeout, other::Duration(0));
    assert_eq!(record.endpoint, other::Url);
}

#[test]
fn fields_without_debug_render_as_unsupported() {
    let mut record = Resolved::default();
    Binder::new()
        .vars(vars(&[("HANDLE", "x")]))
        .load(&mut record)
        .unwrap();

    let report = Report::of(&record);
    let handle = report.rows.iter().find(|r| r.field == "handle").unwrap();
    assert_eq!(handle.value, "<unsupported>");
    let timeout = report.rows.iter().find(|r| r.field == "timeout").unwrap();
    assert_eq!(timeout.value, "Duration(0)");
}

#[test]
fn sequences_of_unsupported_elements_are_left_alone() {
    assert_eq!(Resolved::FIELDS[6].kind, Kind::Other);

    let mut record = Resolved {
        ratios: vec![0.5],
        ..Resolved::default()
    };
    Binder::new()
        .vars(vars(&[("RATIOS", "1.5, 2.5")]))
        .load(&mut record)
        .unwrap();
    assert_eq!(record.ratios, [0.5]);

    let err = Binder::new()
        .strict(true)
        .vars(vars(&[("RATIOS", "1.5")]))
        .load(&mut Resolved::default())
        .unwrap_err();
    assert!(matches!(
        err,
        EnvstructError::UnsupportedType { field: "ratios", type_name: "Vec<f64>" }
    ));
}
