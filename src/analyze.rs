use syn::visit::{self, Visit};
use syn::{BinOp, Block, Expr, ImplItem, Item, ItemFn};

use crate::types::{AnalyzeError, ComplexityReport, ComplexityScore};

/// Classification of a syntax node for metric purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `if` and `match`: one extra independent path, nesting-inducing.
    Branch,
    /// `while`, `for`, `loop`: treated exactly like a branch.
    Loop,
    /// `?` and `try` blocks: the error arm is an extra path.
    ExceptionHandler,
    /// `&&` and `||`: readability cost only, no extra independent path.
    BooleanCombinator,
    /// Everything else: no metric change, children still visited.
    Other,
}

/// Classify an expression into the metric model's node kinds.
#[must_use]
pub fn classify(expr: &Expr) -> NodeKind {
    match expr {
        Expr::If(_) | Expr::Match(_) => NodeKind::Branch,
        Expr::While(_) | Expr::ForLoop(_) | Expr::Loop(_) => NodeKind::Loop,
        Expr::Try(_) | Expr::TryBlock(_) => NodeKind::ExceptionHandler,
        Expr::Binary(binary) if matches!(binary.op, BinOp::And(_) | BinOp::Or(_)) => {
            NodeKind::BooleanCombinator
        }
        _ => NodeKind::Other,
    }
}

/// Pre-order depth-first walker accumulating both metrics in one pass.
///
/// Siblings contribute independently of order, but each nesting construct's
/// cognitive contribution is `1 + nesting` at the moment it is visited, so
/// parents must be scored before their children.
struct ComplexityVisitor {
    cyclomatic: u32,
    cognitive: u32,
    nesting: u32,
}

impl ComplexityVisitor {
    fn new() -> Self {
        Self {
            cyclomatic: 1,
            cognitive: 0,
            nesting: 0,
        }
    }

    fn score(&self) -> ComplexityScore {
        ComplexityScore {
            cyclomatic: self.cyclomatic,
            cognitive: self.cognitive,
        }
    }
}

impl<'ast> Visit<'ast> for ComplexityVisitor {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        match classify(expr) {
            NodeKind::Branch | NodeKind::Loop | NodeKind::ExceptionHandler => {
                self.cyclomatic += 1;
                self.cognitive += 1 + self.nesting;
                self.nesting += 1;
                visit::visit_expr(self, expr);
                self.nesting -= 1;
            }
            NodeKind::BooleanCombinator => {
                // `a && b && c` parses as nested binaries; charge a uniform
                // left-associative chain once, at its innermost link.
                if !continues_chain(expr) {
                    self.cognitive += 1;
                }
                visit::visit_expr(self, expr);
            }
            NodeKind::Other => visit::visit_expr(self, expr),
        }
    }
}

/// Whether this logical binary's left operand is another link of the same
/// operator, i.e. the node extends a chain rather than starting one.
fn continues_chain(expr: &Expr) -> bool {
    let Expr::Binary(binary) = expr else {
        return false;
    };
    match &*binary.left {
        Expr::Binary(left) => matches!(
            (&binary.op, &left.op),
            (BinOp::And(_), BinOp::And(_)) | (BinOp::Or(_), BinOp::Or(_))
        ),
        _ => false,
    }
}

/// Score a single function body.
#[must_use]
pub fn analyze_block(block: &Block) -> ComplexityScore {
    let mut visitor = ComplexityVisitor::new();
    visitor.visit_block(block);
    // Net nesting change across a full walk is zero
    debug_assert_eq!(visitor.nesting, 0);
    visitor.score()
}

/// Score a parsed function item. Equivalent to analyzing its body.
#[must_use]
pub fn analyze_fn(item: &ItemFn) -> ComplexityScore {
    analyze_block(&item.block)
}

/// Locate `function_name` in `source` and score its body.
///
/// `source` may be a bare `fn` or a larger snippet; top-level functions and
/// `impl`-block methods are searched. Retrieval and parse failures are never
/// propagated: the returned report carries a zero score and the error
/// description, with the requested name still attached.
#[must_use]
pub fn analyze_source(function_name: &str, source: &str) -> ComplexityReport {
    match locate_and_score(function_name, source) {
        Ok(score) => ComplexityReport::ok(function_name, score),
        Err(err) => ComplexityReport::failed(function_name, err.to_string()),
    }
}

fn locate_and_score(function_name: &str, source: &str) -> Result<ComplexityScore, AnalyzeError> {
    let file: syn::File = syn::parse_str(source)?;
    find_block(&file, function_name)
        .map(analyze_block)
        .ok_or_else(|| AnalyzeError::FunctionNotFound {
            name: function_name.to_owned(),
        })
}

fn find_block<'a>(file: &'a syn::File, name: &str) -> Option<&'a Block> {
    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == name => return Some(&item_fn.block),
            Item::Impl(item_impl) => {
                for impl_item in &item_impl.items {
                    if let ImplItem::Fn(method) = impl_item {
                        if method.sig.ident == name {
                            return Some(&method.block);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    None
}
