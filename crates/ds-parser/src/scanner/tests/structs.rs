use pretty_assertions::assert_eq;

use super::*;

#[test]
fn every_struct_found_in_source_order() {
    let decls = scan_fixture();
    let names: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Point", "Empty", "Config", "Logger", "Server", "Pair", "Nested", "Alias", "local"
        ]
    );
}

#[test]
fn non_struct_types_are_skipped() {
    let decls = scan_fixture();
    assert!(decls.iter().all(|d| d.name != "Direction"));
}

#[test]
fn line_numbers_are_one_based() {
    let decls = scan_fixture();
    let lines: Vec<(&str, usize)> = decls.iter().map(|d| (d.name.as_str(), d.line)).collect();
    assert_eq!(
        lines,
        [
            ("Point", 10),
            ("Empty", 15),
            ("Config", 18),
            ("Logger", 33),
            ("Server", 36),
            ("Pair", 45),
            ("Nested", 53),
            ("Alias", 59),
            ("local", 64),
        ]
    );
}

#[test]
fn path_is_recorded_verbatim() {
    let decls = scan_fixture();
    assert!(decls.iter().all(|d| d.path == Path::new(FIXTURE_PATH)));
}

#[test]
fn empty_struct_has_no_fields() {
    let decls = scan_fixture();
    assert!(find_by_name(&decls, "Empty").fields.is_empty());
    assert!(find_by_name(&decls, "Logger").fields.is_empty());
}

#[test]
fn point_matches_listing() {
    let source = "package geo\n\ntype Point struct { X, Y int ; Label string \"json:\\\"label\\\"\" // name\n}\n";
    let decls = scan_source(source);
    assert_eq!(decls.len(), 1);

    let point = &decls[0];
    assert_eq!(point.name, "Point");
    assert_eq!(
        point.fields,
        vec![
            FieldDescriptor {
                names: "X Y".to_string(),
                type_text: "int".to_string(),
                tag: String::new(),
                comment: String::new(),
            },
            FieldDescriptor {
                names: "Label".to_string(),
                type_text: "string".to_string(),
                tag: r#""json:\"label\"""#.to_string(),
                comment: "/* name */".to_string(),
            },
        ]
    );
}

#[test]
fn generic_struct_uses_bare_name() {
    let decls = scan_fixture();
    let pair = find_by_name(&decls, "Pair");
    assert_eq!(field_of(pair, "Key").type_text, "K");
    assert_eq!(field_of(pair, "Value").type_text, "V");
}

#[test]
fn alias_to_struct_is_listed() {
    let decls = scan_fixture();
    let alias = find_by_name(&decls, "Alias");
    assert_eq!(field_of(alias, "ID").type_text, "string");
}

#[test]
fn file_without_structs_yields_nothing() {
    let decls = scan_source("package demo\n\ntype ID int\n\nfunc main() {}\n");
    assert!(decls.is_empty());
}
