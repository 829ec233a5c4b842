//! Python parser: tree-sitter CST → `FunctionSyntax` records.
//!
//! Dispatch is a closed match over node kinds with an explicit fallback arm;
//! unrecognized statements become `BodyConstruct::Other` and the walk
//! continues. Nested `def`s and lambdas are collected as independent
//! records — the walk never descends into their bodies on the parent's
//! behalf.

pub mod types;

use tree_sitter::{Node, Parser};

use accord_core::ParseError;

pub use types::{BodyConstruct, BodyConstructs, FunctionSyntax};

/// Owns a tree-sitter parser configured for Python.
///
/// Not `Sync`: callers that parallelize at file granularity create one
/// parser per worker.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a parser with the Python grammar loaded.
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language: tree_sitter::Language = tree_sitter_python::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::Grammar {
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    /// Parse one source file into function records.
    ///
    /// Functions are discovered at module level, inside classes, inside
    /// other functions, and as lambdas; each record carries its nested
    /// definitions. Syntax errors in the source degrade the tree locally
    /// (tree-sitter produces ERROR nodes) but do not fail the parse.
    pub fn parse(&mut self, source: &str, file: &str) -> Result<Vec<FunctionSyntax>, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::TreeUnavailable {
                file: file.to_string(),
            })?;

        let mut functions = Vec::new();
        let mut scope = Vec::new();
        collect_definitions(&tree.root_node(), source.as_bytes(), &mut scope, &mut functions);
        Ok(functions)
    }
}

fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .collect()
}

fn node_text<'s>(node: &Node<'_>, source: &'s [u8]) -> &'s str {
    node.utf8_text(source).unwrap_or("")
}

fn qualify(scope: &[String], name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", scope.join("."), name)
    }
}

/// Find function definitions outside any function body: module level,
/// class bodies (any nesting), and conditionally-defined blocks.
fn collect_definitions(
    node: &Node<'_>,
    source: &[u8],
    scope: &mut Vec<String>,
    out: &mut Vec<FunctionSyntax>,
) {
    for child in named_children(node) {
        match child.kind() {
            "function_definition" => out.push(build_function(&child, source, scope)),
            "decorated_definition" => {
                // Unwrap to the inner definition
                for inner in named_children(&child) {
                    match inner.kind() {
                        "function_definition" => out.push(build_function(&inner, source, scope)),
                        "class_definition" => collect_class(&inner, source, scope, out),
                        _ => {}
                    }
                }
            }
            "class_definition" => collect_class(&child, source, scope, out),
            _ => collect_definitions(&child, source, scope, out),
        }
    }
}

fn collect_class(
    node: &Node<'_>,
    source: &[u8],
    scope: &mut Vec<String>,
    out: &mut Vec<FunctionSyntax>,
) {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default();
    scope.push(name);
    if let Some(body) = node.child_by_field_name("body") {
        collect_definitions(&body, source, scope, out);
    }
    scope.pop();
}

fn build_function(node: &Node<'_>, source: &[u8], scope: &mut Vec<String>) -> FunctionSyntax {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default();
    let qualified_name = qualify(scope, &name);
    let line = node.start_position().row as u32 + 1;

    let mut body = BodyConstructs::new();
    let mut nested = Vec::new();
    scope.push(name.clone());
    if let Some(block) = node.child_by_field_name("body") {
        walk_block(&block, source, scope, &mut body, &mut nested);
    }
    scope.pop();

    FunctionSyntax {
        qualified_name,
        name,
        line,
        body,
        nested,
    }
}

fn build_lambda(node: &Node<'_>, source: &[u8], scope: &mut Vec<String>) -> FunctionSyntax {
    let name = "<lambda>".to_string();
    let qualified_name = qualify(scope, &name);
    let line = node.start_position().row as u32 + 1;

    let mut body = BodyConstructs::new();
    let mut nested = Vec::new();
    scope.push(name.clone());
    if let Some(expr) = node.child_by_field_name("body") {
        walk_expression(&expr, source, scope, &mut body, &mut nested);
    }
    scope.pop();

    FunctionSyntax {
        qualified_name,
        name,
        line,
        body,
        nested,
    }
}

fn walk_block(
    node: &Node<'_>,
    source: &[u8],
    scope: &mut Vec<String>,
    body: &mut BodyConstructs,
    nested: &mut Vec<FunctionSyntax>,
) {
    for child in named_children(node) {
        walk_statement(&child, source, scope, body, nested);
    }
}

fn walk_statement(
    node: &Node<'_>,
    source: &[u8],
    scope: &mut Vec<String>,
    body: &mut BodyConstructs,
    nested: &mut Vec<FunctionSyntax>,
) {
    match node.kind() {
        "function_definition" => {
            body.push(BodyConstruct::NestedFunction);
            nested.push(build_function(node, source, scope));
        }
        "decorated_definition" => {
            for inner in named_children(node) {
                match inner.kind() {
                    "function_definition" => {
                        body.push(BodyConstruct::NestedFunction);
                        nested.push(build_function(&inner, source, scope));
                    }
                    "class_definition" => {
                        body.push(BodyConstruct::Other {
                            kind: inner.kind().to_string(),
                        });
                        collect_class(&inner, source, scope, nested);
                    }
                    _ => {}
                }
            }
        }
        "class_definition" => {
            // A class defined inside a function: its methods become nested
            // records; the class statement itself carries no verb.
            body.push(BodyConstruct::Other {
                kind: node.kind().to_string(),
            });
            collect_class(node, source, scope, nested);
        }
        "expression_statement" => {
            for child in named_children(node) {
                walk_expression(&child, source, scope, body, nested);
            }
        }
        "return_statement" => {
            body.push(BodyConstruct::Return);
            for child in named_children(node) {
                walk_expression(&child, source, scope, body, nested);
            }
        }
        "if_statement" => {
            body.push(BodyConstruct::Conditional);
            for child in named_children(node) {
                match child.kind() {
                    "elif_clause" => {
                        body.push(BodyConstruct::Conditional);
                        walk_clause(&child, source, scope, body, nested);
                    }
                    "else_clause" => walk_clause(&child, source, scope, body, nested),
                    "block" => walk_block(&child, source, scope, body, nested),
                    _ => walk_expression(&child, source, scope, body, nested),
                }
            }
        }
        // Each case arm counts as one conditional, mirroring if/elif.
        "match_statement" => walk_clause(node, source, scope, body, nested),
        "case_clause" => {
            body.push(BodyConstruct::Conditional);
            walk_clause(node, source, scope, body, nested);
        }
        "for_statement" | "while_statement" => {
            body.push(BodyConstruct::Loop);
            walk_clause(node, source, scope, body, nested);
        }
        "try_statement" => {
            for child in named_children(node) {
                match child.kind() {
                    "except_clause" | "except_group_clause" => {
                        body.push(BodyConstruct::TryHandler);
                        walk_clause(&child, source, scope, body, nested);
                    }
                    "else_clause" | "finally_clause" => {
                        walk_clause(&child, source, scope, body, nested)
                    }
                    "block" => walk_block(&child, source, scope, body, nested),
                    _ => walk_expression(&child, source, scope, body, nested),
                }
            }
        }
        // Statements with no verb of their own and nothing scoreable inside.
        "pass_statement" | "break_statement" | "continue_statement" | "import_statement"
        | "import_from_statement" | "future_import_statement" | "global_statement"
        | "nonlocal_statement" | "comment" => {}
        // Everything else: neutral marker, then a best-effort walk so calls
        // inside the construct still count (`with open(...)`, `raise X(...)`).
        _ => {
            body.push(BodyConstruct::Other {
                kind: node.kind().to_string(),
            });
            walk_clause(node, source, scope, body, nested);
        }
    }
}

/// Walk a clause-like node: blocks as statements, everything else as
/// expressions.
fn walk_clause(
    node: &Node<'_>,
    source: &[u8],
    scope: &mut Vec<String>,
    body: &mut BodyConstructs,
    nested: &mut Vec<FunctionSyntax>,
) {
    for child in named_children(node) {
        match child.kind() {
            "block" => walk_block(&child, source, scope, body, nested),
            "case_clause" => walk_statement(&child, source, scope, body, nested),
            "else_clause" | "elif_clause" | "except_clause" | "except_group_clause"
            | "finally_clause" => walk_clause(&child, source, scope, body, nested),
            _ => walk_expression(&child, source, scope, body, nested),
        }
    }
}

fn walk_expression(
    node: &Node<'_>,
    source: &[u8],
    scope: &mut Vec<String>,
    body: &mut BodyConstructs,
    nested: &mut Vec<FunctionSyntax>,
) {
    match node.kind() {
        "call" => {
            match node.child_by_field_name("function") {
                Some(callee) if callee.kind() == "identifier" => {
                    body.push(BodyConstruct::Call {
                        head: node_text(&callee, source).to_string(),
                    });
                }
                Some(callee) if callee.kind() == "attribute" => {
                    let head = callee
                        .child_by_field_name("attribute")
                        .map(|n| node_text(&n, source).to_string())
                        .unwrap_or_default();
                    body.push(BodyConstruct::MethodCall { head });
                    // The receiver may itself contain calls: get_db().close()
                    if let Some(object) = callee.child_by_field_name("object") {
                        walk_expression(&object, source, scope, body, nested);
                    }
                }
                Some(callee) => {
                    // Callee with no leading identifier (subscript, nested
                    // call result, lambda): unclassifiable head.
                    body.push(BodyConstruct::Other {
                        kind: node.kind().to_string(),
                    });
                    walk_expression(&callee, source, scope, body, nested);
                }
                None => {}
            }
            if let Some(arguments) = node.child_by_field_name("arguments") {
                for child in named_children(&arguments) {
                    walk_expression(&child, source, scope, body, nested);
                }
            }
        }
        "assignment" | "augmented_assignment" => {
            body.push(BodyConstruct::Assignment);
            for field in ["left", "right"] {
                if let Some(side) = node.child_by_field_name(field) {
                    walk_expression(&side, source, scope, body, nested);
                }
            }
        }
        "named_expression" => {
            body.push(BodyConstruct::Assignment);
            if let Some(value) = node.child_by_field_name("value") {
                walk_expression(&value, source, scope, body, nested);
            }
        }
        "conditional_expression" | "if_clause" => {
            body.push(BodyConstruct::Conditional);
            for child in named_children(node) {
                walk_expression(&child, source, scope, body, nested);
            }
        }
        "list_comprehension" | "set_comprehension" | "dictionary_comprehension"
        | "generator_expression" => {
            body.push(BodyConstruct::Loop);
            for child in named_children(node) {
                walk_expression(&child, source, scope, body, nested);
            }
        }
        "lambda" => {
            body.push(BodyConstruct::NestedFunction);
            nested.push(build_lambda(node, source, scope));
        }
        "identifier" | "string" | "integer" | "float" | "true" | "false" | "none" => {}
        _ => {
            for child in named_children(node) {
                walk_expression(&child, source, scope, body, nested);
            }
        }
    }
}
