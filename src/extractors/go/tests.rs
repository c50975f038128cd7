use std::collections::HashSet;
use std::path::PathBuf;

use tree_sitter::Parser;

use super::GoExtractor;
use crate::ast::visit::{self, Visitor};
use crate::ast::{
    AssignOp, ChanDir, Decl, Expr, ExprKind, File, GenDecl, Pos, Span, Spec, Stmt, StmtKind,
};
use crate::error::ExtractError;

fn lower(source: &str) -> Result<File, ExtractError> {
    lower_from(source, 0).map(|(file, _)| file)
}

fn lower_from(source: &str, first_id: u32) -> Result<(File, u32), ExtractError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .expect("Go grammar loads");
    let tree = parser.parse(source, None).expect("parse");

    let mut extractor = GoExtractor::new(PathBuf::from("a.go"), source, first_id);
    let file = extractor.extract_file(&tree)?;
    Ok((file, extractor.next_id()))
}

fn gen_decl(file: &File, index: usize) -> &GenDecl {
    match &file.decls[index] {
        Decl::Gen(decl) => decl,
        other => panic!("expected a general declaration, got {other:?}"),
    }
}

/// Body statements of the function declared at `index`
fn body_of(file: &File, index: usize) -> &[Stmt] {
    match &file.decls[index] {
        Decl::Func(func) => &func.body.as_ref().expect("function body").stmts,
        other => panic!("expected a function, got {other:?}"),
    }
}

/// The initializer of `var _ = <expr>`
fn var_value(file: &File) -> &Expr {
    match &gen_decl(file, 0).specs[0] {
        Spec::Value(spec) => &spec.values[0],
        other => panic!("expected a value spec, got {other:?}"),
    }
}

#[derive(Default)]
struct IdCollector {
    ids: Vec<u32>,
}

impl Visitor for IdCollector {
    fn visit_expr(&mut self, expr: &Expr) {
        self.ids.push(expr.id.0);
    }
}

#[test]
fn test_file_header_and_span() {
    let source = "package shapes\n\nfunc Area() int { return 0 }\n";
    let file = lower(source).unwrap();

    assert_eq!(file.package_name.name, "shapes");
    assert_eq!(file.path, PathBuf::from("a.go"));
    assert_eq!(file.decls.len(), 1);
    assert_eq!(file.span, Span::new(Pos::new(1, 1), Pos::new(3, 29)));
}

#[test]
fn test_expression_ids_are_unique_and_continue() {
    let source = "package p\n\nvar a, b = 1 + 2, f(x)\n";
    let (file, next) = lower_from(source, 100).unwrap();

    let mut collector = IdCollector::default();
    visit::walk_file(&mut collector, &file);

    let unique: HashSet<u32> = collector.ids.iter().copied().collect();
    assert_eq!(unique.len(), collector.ids.len());
    assert!(collector.ids.iter().all(|&id| (100..next).contains(&id)));
    // 1, 2, 1+2, f, x, f(x)
    assert_eq!(next, 106);
}

#[test]
fn test_doc_comments_attach_to_declarations() {
    let source = "// Package p does things.\npackage p\n\n// Area computes.\n// Twice.\nfunc Area() {}\n\n// detached\n\nfunc Other() {}\n";
    let file = lower(source).unwrap();

    let file_doc = file.doc.as_ref().expect("file doc");
    assert_eq!(file_doc.comments[0].text, "// Package p does things.");

    match &file.decls[0] {
        Decl::Func(func) => {
            let doc = func.doc.as_ref().expect("func doc");
            assert_eq!(doc.comments.len(), 2);
            assert_eq!(doc.comments[1].text, "// Twice.");
        }
        other => panic!("expected a function, got {other:?}"),
    }
    match &file.decls[1] {
        Decl::Func(func) => assert!(func.doc.is_none()),
        other => panic!("expected a function, got {other:?}"),
    }
}

#[test]
fn test_ungrouped_declaration_gives_trailing_comment_to_spec() {
    let source = "package p\n\n// Limit doc\nvar Limit = 10 // trailing\n";
    let file = lower(source).unwrap();
    let decl = gen_decl(&file, 0);

    assert!(decl.doc.is_some());
    match &decl.specs[0] {
        Spec::Value(spec) => {
            assert!(spec.doc.is_none());
            let comment = spec.comment.as_ref().expect("trailing comment");
            assert_eq!(comment.comments[0].text, "// trailing");
        }
        other => panic!("expected a value spec, got {other:?}"),
    }
}

#[test]
fn test_grouped_specs_carry_their_own_comments() {
    let source = "package p\n\nconst (\n\t// A doc\n\tA = iota // first\n\tB\n)\n";
    let file = lower(source).unwrap();
    let decl = gen_decl(&file, 0);

    assert!(decl.doc.is_none());
    assert_eq!(decl.specs.len(), 2);
    match &decl.specs[0] {
        Spec::Value(spec) => {
            assert!(spec.doc.is_some());
            assert!(spec.comment.is_some());
        }
        other => panic!("expected a value spec, got {other:?}"),
    }
    match &decl.specs[1] {
        Spec::Value(spec) => {
            assert_eq!(spec.names[0].name, "B");
            assert!(spec.values.is_empty());
            assert!(spec.doc.is_none());
        }
        other => panic!("expected a value spec, got {other:?}"),
    }
}

#[test]
fn test_multi_name_const_spec_keeps_only_identifiers() {
    let file = lower("package p\n\nconst x, y = 1, 2\n").unwrap();

    match &gen_decl(&file, 0).specs[0] {
        Spec::Value(spec) => {
            let names: Vec<&str> = spec.names.iter().map(|n| n.name.as_str()).collect();
            assert_eq!(names, vec!["x", "y"]);
            assert_eq!(spec.values.len(), 2);
        }
        other => panic!("expected a value spec, got {other:?}"),
    }
}

#[test]
fn test_multi_type_case_lists_each_type() {
    let source = "package p\n\nfunc f(v any) {\n\tswitch v.(type) {\n\tcase int, string, error:\n\t}\n}\n";
    let file = lower(source).unwrap();

    match &body_of(&file, 0)[0].kind {
        StmtKind::TypeSwitch { body, .. } => match &body.stmts[0].kind {
            StmtKind::CaseClause { list, .. } => {
                let names: Vec<&str> = list
                    .iter()
                    .map(|ty| match &ty.kind {
                        ExprKind::Ident(ident) => ident.name.as_str(),
                        other => panic!("expected a type name, got {other:?}"),
                    })
                    .collect();
                assert_eq!(names, vec!["int", "string", "error"]);
            }
            other => panic!("expected a case clause, got {other:?}"),
        },
        other => panic!("expected a type switch, got {other:?}"),
    }
}

#[test]
fn test_parenthesized_single_import_is_grouped() {
    let source = "package p\n\nimport (\n\tstr \"strings\"\n)\n";
    let file = lower(source).unwrap();
    let decl = gen_decl(&file, 0);

    match &decl.specs[..] {
        [Spec::Import(spec)] => {
            assert_eq!(spec.name.as_ref().map(|n| n.name.as_str()), Some("str"));
            assert_eq!(spec.path.value, "\"strings\"");
        }
        other => panic!("expected one import spec, got {other:?}"),
    }
}

#[test]
fn test_generic_function_is_unsupported() {
    let source = "package p\n\nfunc Map[T any](x T) T { return x }\n";
    match lower(source) {
        Err(ExtractError::UnsupportedConstruct { kind, pos, .. }) => {
            assert_eq!(kind, "type_parameter_list");
            assert_eq!(pos.line, 3);
        }
        other => panic!("expected UnsupportedConstruct, got {other:?}"),
    }
}

#[test]
fn test_variadic_parameter_lowers_to_ellipsis() {
    let source = "package p\n\nfunc f(format string, args ...any) {}\n";
    let file = lower(source).unwrap();

    match &file.decls[0] {
        Decl::Func(func) => {
            let params = func.ty.params.as_ref().expect("params");
            assert_eq!(params.fields.len(), 2);
            assert_eq!(params.fields[1].names[0].name, "args");
            assert!(matches!(
                params.fields[1].ty.kind,
                ExprKind::Ellipsis(Some(_))
            ));
        }
        other => panic!("expected a function, got {other:?}"),
    }
}

#[test]
fn test_method_receiver_and_results() {
    let source = "package p\n\nfunc (s *Shape) Size() (w, h int) { return }\n";
    let file = lower(source).unwrap();

    match &file.decls[0] {
        Decl::Func(func) => {
            let recv = func.recv.as_ref().expect("receiver");
            assert!(matches!(recv.fields[0].ty.kind, ExprKind::Star(_)));
            let results = func.ty.results.as_ref().expect("results");
            assert_eq!(results.fields[0].names.len(), 2);
        }
        other => panic!("expected a function, got {other:?}"),
    }
}

#[test]
fn test_struct_fields_embedding_and_tags() {
    let source = "package p\n\ntype T struct {\n\t*Base\n\tName string `json:\"name\"` // the name\n}\n";
    let file = lower(source).unwrap();

    let ty = match &gen_decl(&file, 0).specs[0] {
        Spec::Type(spec) => &spec.ty,
        other => panic!("expected a type spec, got {other:?}"),
    };
    match &ty.kind {
        ExprKind::StructType { fields, .. } => {
            assert_eq!(fields.fields.len(), 2);
            assert!(fields.fields[0].names.is_empty());
            assert!(matches!(fields.fields[0].ty.kind, ExprKind::Star(_)));
            assert!(fields.fields[1].tag.is_some());
            assert!(fields.fields[1].comment.is_some());
        }
        other => panic!("expected a struct, got {other:?}"),
    }
}

#[test]
fn test_channel_directions() {
    let source = "package p\n\nvar a chan int\nvar b chan<- int\nvar c <-chan int\n";
    let file = lower(source).unwrap();

    let dirs: Vec<ChanDir> = (0..3)
        .map(|i| match &gen_decl(&file, i).specs[0] {
            Spec::Value(spec) => match &spec.ty.as_ref().expect("type").kind {
                ExprKind::ChanType { dir, .. } => *dir,
                other => panic!("expected a channel type, got {other:?}"),
            },
            other => panic!("expected a value spec, got {other:?}"),
        })
        .collect();
    assert_eq!(dirs, vec![ChanDir::Both, ChanDir::Send, ChanDir::Recv]);
}

#[test]
fn test_three_index_slice() {
    let file = lower("package p\n\nvar _ = s[1:2:3]\n").unwrap();
    match &var_value(&file).kind {
        ExprKind::Slice { slice3, max, .. } => {
            assert!(*slice3);
            assert!(max.is_some());
        }
        other => panic!("expected a slice, got {other:?}"),
    }

    let file = lower("package p\n\nvar _ = s[:2]\n").unwrap();
    match &var_value(&file).kind {
        ExprKind::Slice { slice3, low, .. } => {
            assert!(!*slice3);
            assert!(low.is_none());
        }
        other => panic!("expected a slice, got {other:?}"),
    }
}

#[test]
fn test_composite_literal_with_elided_types() {
    let file = lower("package p\n\nvar _ = [][]int{{1}, {2, 3}}\n").unwrap();
    match &var_value(&file).kind {
        ExprKind::CompositeLit { ty, elts, .. } => {
            assert!(ty.is_some());
            assert_eq!(elts.len(), 2);
            assert!(matches!(
                &elts[1].kind,
                ExprKind::CompositeLit { ty: None, elts, .. } if elts.len() == 2
            ));
        }
        other => panic!("expected a composite literal, got {other:?}"),
    }
}

#[test]
fn test_statement_kinds() {
    let source = r#"package p

func f(ch chan int, m map[string]int) {
	x := 1
	x += 2
	x++
	ch <- x
	go g()
	defer g()
	if y := x; y > 0 {
	} else {
	}
	for i := 0; i < 3; i++ {
		continue
	}
	for k, v := range m {
		_, _ = k, v
	}
	for {
		break
	}
}
"#;
    let file = lower(source).unwrap();
    let stmts = body_of(&file, 0);

    let kinds: Vec<&str> = stmts
        .iter()
        .map(|s| match &s.kind {
            StmtKind::Assign { op: AssignOp::Define, .. } => "define",
            StmtKind::Assign { op: AssignOp::Add, .. } => "add-assign",
            StmtKind::IncDec { .. } => "incdec",
            StmtKind::Send { .. } => "send",
            StmtKind::Go(_) => "go",
            StmtKind::Defer(_) => "defer",
            StmtKind::If { init: Some(_), els: Some(_), .. } => "if-else",
            StmtKind::For { init: Some(_), .. } => "for",
            StmtKind::Range { op: Some(AssignOp::Define), value: Some(_), .. } => "range",
            StmtKind::For { cond: None, .. } => "loop",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "define",
            "add-assign",
            "incdec",
            "send",
            "go",
            "defer",
            "if-else",
            "for",
            "range",
            "loop"
        ]
    );
}

#[test]
fn test_type_switch_with_binding() {
    let source = "package p\n\nfunc f(v any) {\n\tswitch t := v.(type) {\n\tcase int, string:\n\t\t_ = t\n\tdefault:\n\t}\n}\n";
    let file = lower(source).unwrap();

    match &body_of(&file, 0)[0].kind {
        StmtKind::TypeSwitch { init, assign, body } => {
            assert!(init.is_none());
            match &assign.kind {
                StmtKind::Assign { lhs, op, rhs } => {
                    assert_eq!(*op, AssignOp::Define);
                    assert_eq!(lhs.len(), 1);
                    assert!(matches!(rhs[0].kind, ExprKind::TypeAssert { ty: None, .. }));
                    // `t := v.(type)` ends at the closing paren
                    assert_eq!(assign.span.end, Pos::new(4, 22));
                }
                other => panic!("expected an assignment, got {other:?}"),
            }
            assert_eq!(body.stmts.len(), 2);
            match &body.stmts[0].kind {
                StmtKind::CaseClause { list, body } => {
                    assert_eq!(list.len(), 2);
                    assert_eq!(body.len(), 1);
                }
                other => panic!("expected a case clause, got {other:?}"),
            }
            assert!(matches!(
                &body.stmts[1].kind,
                StmtKind::CaseClause { list, .. } if list.is_empty()
            ));
        }
        other => panic!("expected a type switch, got {other:?}"),
    }
}

#[test]
fn test_select_clauses() {
    let source = "package p\n\nfunc f(in, out chan int) {\n\tselect {\n\tcase v, ok := <-in:\n\t\t_, _ = v, ok\n\tcase out <- 1:\n\tdefault:\n\t}\n}\n";
    let file = lower(source).unwrap();

    match &body_of(&file, 0)[0].kind {
        StmtKind::Select { body } => {
            assert_eq!(body.stmts.len(), 3);
            match &body.stmts[0].kind {
                StmtKind::CommClause { comm: Some(comm), body } => {
                    assert!(matches!(
                        comm.kind,
                        StmtKind::Assign { op: AssignOp::Define, .. }
                    ));
                    assert_eq!(body.len(), 1);
                }
                other => panic!("expected a receive clause, got {other:?}"),
            }
            assert!(matches!(
                &body.stmts[1].kind,
                StmtKind::CommClause { comm: Some(send), .. }
                    if matches!(send.kind, StmtKind::Send { .. })
            ));
            assert!(matches!(
                &body.stmts[2].kind,
                StmtKind::CommClause { comm: None, .. }
            ));
        }
        other => panic!("expected a select, got {other:?}"),
    }
}

#[test]
fn test_labels_and_branches() {
    let source = "package p\n\nfunc f() {\nouter:\n\tfor {\n\t\tbreak outer\n\t}\n\tgoto outer\n}\n";
    let file = lower(source).unwrap();
    let stmts = body_of(&file, 0);

    match &stmts[0].kind {
        StmtKind::Labeled { label, stmt } => {
            assert_eq!(label.name, "outer");
            match &stmt.kind {
                StmtKind::For { body, .. } => match &body.stmts[0].kind {
                    StmtKind::Branch { label: Some(label), .. } => {
                        assert_eq!(label.name, "outer")
                    }
                    other => panic!("expected a labeled break, got {other:?}"),
                },
                other => panic!("expected a loop, got {other:?}"),
            }
        }
        other => panic!("expected a labeled statement, got {other:?}"),
    }
    assert!(matches!(&stmts[1].kind, StmtKind::Branch { label: Some(_), .. }));
}

#[test]
fn test_switch_body_span_covers_braces() {
    let source = "package p\n\nfunc f(x int) {\n\tswitch x {\n\tcase 1:\n\t}\n}\n";
    let file = lower(source).unwrap();

    match &body_of(&file, 0)[0].kind {
        StmtKind::Switch { tag, body, .. } => {
            assert!(tag.is_some());
            assert_eq!(body.span, Span::new(Pos::new(4, 11), Pos::new(6, 3)));
        }
        other => panic!("expected a switch, got {other:?}"),
    }
}
