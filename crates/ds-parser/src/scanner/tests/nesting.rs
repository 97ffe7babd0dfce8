use pretty_assertions::assert_eq;

use super::*;

#[test]
fn anonymous_struct_field_renders_inline() {
    let decls = scan_fixture();
    let nested = find_by_name(&decls, "Nested");
    assert_eq!(field_of(nested, "Inner").type_text, "struct { A int }");
}

#[test]
fn struct_declared_in_function_body_is_found() {
    let decls = scan_fixture();
    let local = find_by_name(&decls, "local");
    assert_eq!(field_of(local, "hidden").type_text, "bool");
}

#[test]
fn grouped_declarations_are_each_visited() {
    let source = "package demo\n\ntype (\n\tA struct{ X int }\n\tB string\n\tC struct{}\n)\n";
    let names: Vec<String> = scan_source(source).into_iter().map(|d| d.name).collect();
    assert_eq!(names, ["A", "C"]);
}

#[test]
fn method_bodies_are_searched_in_order() {
    let source = "package demo

type Outer struct{ N int }

func (o *Outer) First() {
	type inFirst struct{}
}

func Second() {
	func() {
		type inClosure struct{ Z float64 }
	}()
}
";
    let decls = scan_source(source);
    let found: Vec<(&str, usize)> = decls.iter().map(|d| (d.name.as_str(), d.line)).collect();
    assert_eq!(found, [("Outer", 3), ("inFirst", 6), ("inClosure", 11)]);
}
