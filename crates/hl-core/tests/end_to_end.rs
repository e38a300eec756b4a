use std::fs;

use hl_core::{
    validate, ErrorKind, HlConfig, Interpreter, MemorySink, SourceFile, TypeName, Verdict,
};
use insta::assert_snapshot;
use tempfile::tempdir;

fn check(text: &str) -> (hl_core::CheckReport, MemorySink) {
    let mut sink = MemorySink::new();
    let report = Interpreter::default()
        .check_source(SourceFile::new("prog.hl", text), &mut sink)
        .unwrap();
    (report, sink)
}

#[test]
fn test_minimal_program() {
    let (report, sink) = check("x:integer;\nx:=5;\noutput<<x;");

    assert_eq!(report.verdict(), Verdict::NoErrors);
    assert_eq!(report.verdict_message(), "NO ERROR(S) FOUND");
    assert_eq!(sink.get("NOSPACES.TXT"), Some("x:integer;x:=5;output<<x;"));

    let tokens = &report.artifacts.reserved_symbols;
    for expected in ["integer", ":", ":=", "<<", ";", "output"] {
        assert!(tokens.iter().any(|t| t == expected), "missing {expected}");
    }
    assert_snapshot!(sink.get("RES_SYM.TXT").unwrap().trim_end(), @r###"
    :
    :=
    ;
    <<
    integer
    output
    "###);
}

#[test]
fn test_undeclared_assignment_fails() {
    let (report, sink) = check("x:=5;");
    assert_eq!(report.verdict(), Verdict::Error);
    assert_eq!(report.verdict_message(), "ERROR");
    assert_eq!(report.error().unwrap().kind(), ErrorKind::UndeclaredVariable);
    assert_eq!(sink.get("NOSPACES.TXT"), Some("x:=5;"));
}

#[test]
fn test_full_program() {
    let text = r#"
count : integer ;
ratio : double ;

count := 10 ;
ratio := -2.75 ;
output << "starting" ;
If ( count > 5 )
    output << count + ratio ;
If ( ratio != 0 )
	ratio := 1.5 ;
output << count ;
"#;
    let (report, _) = check(text);
    assert!(report.is_valid(), "{:?}", report.error());
    let symbols = report.symbols().unwrap();
    assert_eq!(symbols.get("count"), Some(TypeName::Integer));
    assert_eq!(symbols.get("ratio"), Some(TypeName::Double));
    assert_eq!(symbols.len(), 2);
}

#[test]
fn test_each_error_kind() {
    let cases = [
        ("a : integer ;\na : double ;", ErrorKind::Redeclaration),
        ("output << b ;", ErrorKind::UndeclaredVariable),
        ("a : integer ;\na := 0.5 ;", ErrorKind::TypeMismatch),
        ("a : integer ;\nIf ( a )", ErrorKind::MissingBody),
        ("a : integer ;\nIf ( a )\na := 1 ;", ErrorKind::MissingIndentation),
        ("a : integer ;\nwhile ( a )", ErrorKind::UnrecognizedStatement),
    ];
    for (text, kind) in cases {
        let err = validate(&SourceFile::new("prog.hl", text)).unwrap_err();
        assert_eq!(err.kind(), kind, "{text:?}");
    }
}

#[test]
fn test_double_accepts_negative_integer_literal() {
    let (report, _) = check("y : double ;\ny := -3 ;");
    assert!(report.is_valid());
}

#[test]
fn test_fresh_state_per_run() {
    let interpreter = Interpreter::default();
    let mut sink = MemorySink::new();
    let first = interpreter
        .check_source(SourceFile::new("a.hl", "x : integer ;"), &mut sink)
        .unwrap();
    assert!(first.is_valid());

    // A second run does not see declarations from the first.
    let second = interpreter
        .check_source(SourceFile::new("b.hl", "x : integer ;\nx := 1 ;"), &mut sink)
        .unwrap();
    assert!(second.is_valid());
    let third = interpreter
        .check_source(SourceFile::new("c.hl", "output << x ;"), &mut sink)
        .unwrap();
    assert!(!third.is_valid());
}

#[test]
fn test_check_file_with_discovered_config() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::write(
        dir.path().join("hl.toml"),
        format!(
            "[artifacts]\noutput_dir = {:?}\nno_spaces = \"flat.txt\"\n",
            out.display().to_string()
        ),
    )
    .unwrap();
    let src = dir.path().join("prog.hl");
    fs::write(&src, "v : integer ;\n").unwrap();

    let config = HlConfig::discover(&src).unwrap();
    let report = Interpreter::new(config).check_file(&src).unwrap();
    assert!(report.is_valid());
    assert_eq!(fs::read_to_string(out.join("flat.txt")).unwrap(), "v:integer;");
    assert!(out.join("RES_SYM.TXT").exists());
}

#[test]
fn test_json_output() {
    let (report, _) = check("a : integer ;\na := 2.5 ;");
    let json = serde_json::to_value(report.to_output()).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["verdict"], "ERROR");
    assert_eq!(json["errors"][0]["kind"], "type_mismatch");
    assert_eq!(json["errors"][0]["span"]["start"]["line"], 2);
    assert_eq!(json["artifacts"]["no_spaces"], "a:integer;a:=2.5;");
}
