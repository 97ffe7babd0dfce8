use std::path::Path;

use ast_grep_language::LanguageExt;

use super::*;

mod nesting;
mod structs;

const FIXTURE_PATH: &str = "/work/sample/sample.go";

fn scan_source(source: &str) -> Vec<StructDecl> {
    let root = SupportLang::Go.ast_grep(source);
    scan(&root, Path::new(FIXTURE_PATH))
}

fn scan_fixture() -> Vec<StructDecl> {
    scan_source(include_str!("../../../tests/fixtures/sample.go"))
}

fn find_by_name<'a>(decls: &'a [StructDecl], name: &str) -> &'a StructDecl {
    decls
        .iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("should find struct named '{name}'"))
}

fn field_of<'a>(decl: &'a StructDecl, names: &str) -> &'a FieldDescriptor {
    decl.fields
        .iter()
        .find(|f| f.names == names)
        .unwrap_or_else(|| panic!("{} should have field '{names}': {:?}", decl.name, decl.fields))
}
