#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pathgate_core::PathGrant;
use pathgate_gateway::config::{self, GrantSourceConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
  mountt: "/files" # typo should fail
grants:
  source: static
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn unknown_grant_field_fails() {
    let bad = r#"
version: 1
grants:
  source: static
  users:
    alice:
      - { access: RW, path: "/docs", recursive: true }
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
grants:
  source: static
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.gateway.mount, "/files");
    assert_eq!(cfg.identity.user_header, "x-user-id");
    assert!(matches!(cfg.grants, GrantSourceConfig::Static { ref users } if users.is_empty()));
}

#[test]
fn static_grants_parse() {
    let ok = r#"
version: 1
gateway:
  mount: "/"
grants:
  source: static
  users:
    alice:
      - { access: RW, path: "/docs" }
      - { access: R, path: "/pub" }
"#;
    let cfg = config::load_from_str(ok).unwrap();
    let GrantSourceConfig::Static { users } = cfg.grants else {
        panic!("expected static source");
    };
    assert_eq!(
        users["alice"],
        vec![PathGrant::read_write("/docs"), PathGrant::read("/pub")]
    );
}

#[test]
fn file_source_parses() {
    let ok = r#"
version: 1
grants:
  source: file
  path: "/etc/pathgate/grants.yaml"
"#;
    let cfg = config::load_from_str(ok).unwrap();
    assert_eq!(cfg.grants.kind(), "file");
}

#[test]
fn validation_failures() {
    let cases = [
        "version: 2\ngrants: { source: static }",
        "version: 1\ngateway: { listen: \"nope\" }\ngrants: { source: static }",
        "version: 1\ngateway: { mount: \"files\" }\ngrants: { source: static }",
        "version: 1\ngateway: { mount: \"/files/\" }\ngrants: { source: static }",
        "version: 1\ngateway: { max_body_bytes: 0 }\ngrants: { source: static }",
        "version: 1\nidentity: { user_header: \"bad header\" }\ngrants: { source: static }",
        "version: 1\ngrants: { source: file, path: \"  \" }",
        "version: 1\ngrants: { source: static, users: { alice: [ { access: R, path: \"\" } ] } }",
        "version: 1\ngrants: { source: ldap }",
        "version: 1",
    ];
    for c in cases {
        let err = config::load_from_str(c).expect_err(c);
        assert_eq!(err.status(), Some(400), "{c}");
    }
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("/definitely/not/here/pathgate.yaml").unwrap_err();
    assert_eq!(err.status(), None);
}
