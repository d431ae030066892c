//! Lowering of swc modules into the arena [`SyntaxTree`].
//!
//! The lowering keeps the parent chain shaped the way the rules expect:
//! - Parenthesized expressions, optional chains and TypeScript wrappers
//!   (`as`, `!`, `satisfies`) are transparent.
//! - Import sources and object keys are never materialized as literals.
//! - Patterns, statements and expressions the rules do not model become
//!   [`NodeKind::Other`], so literals below them never look like they sit in
//!   a reportable position.

use swc_common::{BytePos, Span, Spanned};
use swc_ecma_ast::{
    BinaryOp, CallExpr, Callee, Expr, ExprOrSpread, JSXAttr, JSXAttrName, JSXAttrValue,
    JSXElement, JSXElementName, JSXExprContainer, JSXFragment, JSXObject, JSXText, Lit,
    MemberExpr, MemberProp, Module, OptCall, Pat, Prop, PropName, Stmt, Str, TaggedTpl, Tpl,
    TplElement, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::tree::{LiteralValue, NodeId, NodeKind, SyntaxTree, TreeBuilder};

/// Lower a parsed module into a [`SyntaxTree`] rooted at [`NodeKind::Program`].
pub fn lower_module(module: &Module) -> SyntaxTree {
    let mut lowerer = Lowerer {
        builder: TreeBuilder::new(),
    };
    lowerer.within(NodeKind::Program, module.span, |this| {
        module.visit_children_with(this)
    });
    lowerer.builder.finish()
}

struct Lowerer {
    builder: TreeBuilder,
}

impl Lowerer {
    fn within<F>(&mut self, kind: NodeKind, span: Span, f: F) -> NodeId
    where
        F: FnOnce(&mut Self),
    {
        let id = self.builder.open(kind, span);
        f(self);
        self.builder.close();
        id
    }

    fn lower_call(&mut self, span: Span, callee: Option<&Expr>, args: &[ExprOrSpread]) {
        let id = self
            .builder
            .open(NodeKind::CallExpression { callee: None }, span);

        let callee = callee.and_then(|expr| self.lower_child(expr));
        if let Some(NodeKind::CallExpression { callee: slot }) = self.builder.kind_mut(id) {
            *slot = callee;
        }

        for arg in args {
            arg.visit_with(self);
        }
        self.builder.close();
    }

    /// Visit an expression and return the first node it produced.
    fn lower_child(&mut self, expr: &Expr) -> Option<NodeId> {
        let next = self.builder.next_id();
        expr.visit_with(self);
        self.builder.contains(next).then_some(next)
    }
}

fn str_value(s: &Str) -> String {
    s.value.to_string_lossy().to_string()
}

fn literal_value(lit: &Lit) -> LiteralValue {
    match lit {
        Lit::Str(s) => LiteralValue::String(str_value(s)),
        Lit::Bool(b) => LiteralValue::Boolean(b.value),
        Lit::Num(n) => LiteralValue::Number(n.value),
        Lit::Null(_) => LiteralValue::Null,
        Lit::JSXText(text) => LiteralValue::String(text.value.to_string()),
        _ => LiteralValue::Other,
    }
}

fn quasi_text(quasi: &TplElement) -> String {
    quasi
        .cooked
        .as_ref()
        .and_then(|cooked| cooked.as_str())
        .map(str::to_owned)
        .unwrap_or_else(|| quasi.raw.to_string())
}

fn jsx_object_name(object: &JSXObject) -> String {
    match object {
        JSXObject::Ident(ident) => ident.sym.to_string(),
        JSXObject::JSXMemberExpr(member) => {
            format!("{}.{}", jsx_object_name(&member.obj), member.prop.sym)
        }
    }
}

fn element_name(name: &JSXElementName) -> Option<String> {
    match name {
        JSXElementName::Ident(ident) => Some(ident.sym.to_string()),
        JSXElementName::JSXMemberExpr(member) => Some(format!(
            "{}.{}",
            jsx_object_name(&member.obj),
            member.prop.sym
        )),
        JSXElementName::JSXNamespacedName(ns) => Some(format!("{}:{}", ns.ns.sym, ns.name.sym)),
    }
}

fn attr_name(name: &JSXAttrName) -> String {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

fn is_logical(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing
    )
}

impl Visit for Lowerer {
    fn visit_expr(&mut self, node: &Expr) {
        let kind = match node {
            Expr::Lit(lit) => {
                self.builder
                    .leaf(NodeKind::Literal(literal_value(lit)), lit.span());
                return;
            }
            Expr::Ident(ident) => {
                self.builder.leaf(
                    NodeKind::Identifier {
                        name: ident.sym.to_string(),
                    },
                    ident.span,
                );
                return;
            }
            Expr::This(this) => {
                self.builder.leaf(NodeKind::ThisExpression, this.span);
                return;
            }
            Expr::Array(_) => NodeKind::ArrayExpression,
            Expr::Object(_) => NodeKind::ObjectExpression,
            Expr::Bin(bin) if is_logical(bin.op) => NodeKind::LogicalExpression,
            Expr::Bin(_) => NodeKind::BinaryExpression,
            Expr::Assign(_) => NodeKind::AssignmentExpression,
            Expr::Cond(_) => NodeKind::ConditionalExpression,
            Expr::New(_) => NodeKind::NewExpression,
            Expr::Arrow(_) => NodeKind::ArrowFunction,
            // Handled by the dedicated visitors below, or transparent.
            Expr::Call(_)
            | Expr::Member(_)
            | Expr::Tpl(_)
            | Expr::TaggedTpl(_)
            | Expr::JSXElement(_)
            | Expr::JSXFragment(_)
            | Expr::OptChain(_)
            | Expr::Paren(_)
            | Expr::TsAs(_)
            | Expr::TsNonNull(_)
            | Expr::TsSatisfies(_)
            | Expr::TsConstAssertion(_)
            | Expr::TsTypeAssertion(_) => {
                node.visit_children_with(self);
                return;
            }
            _ => NodeKind::Other,
        };
        self.within(kind, node.span(), |this| node.visit_children_with(this));
    }

    fn visit_stmt(&mut self, node: &Stmt) {
        let kind = match node {
            Stmt::Return(_) => NodeKind::ReturnStatement,
            _ => NodeKind::Other,
        };
        self.within(kind, node.span(), |this| node.visit_children_with(this));
    }

    fn visit_pat(&mut self, node: &Pat) {
        self.within(NodeKind::Other, node.span(), |this| {
            node.visit_children_with(this)
        });
    }

    fn visit_prop(&mut self, node: &Prop) {
        let Prop::KeyValue(kv) = node else {
            self.within(NodeKind::Other, node.span(), |this| {
                node.visit_children_with(this)
            });
            return;
        };
        self.within(NodeKind::Property, node.span(), |this| {
            // Only the value sits in a reportable position.
            if let PropName::Computed(key) = &kv.key {
                this.within(NodeKind::Other, key.span, |this| key.visit_with(this));
            }
            kv.value.visit_with(this);
        });
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        let name = match &node.name {
            Pat::Ident(binding) => Some(binding.id.sym.to_string()),
            _ => None,
        };
        self.within(NodeKind::VariableDeclarator { name }, node.span, |this| {
            node.visit_children_with(this)
        });
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        let callee = match &node.callee {
            Callee::Expr(expr) => Some(&**expr),
            _ => None,
        };
        self.lower_call(node.span, callee, &node.args);
    }

    /// `a?.b(...)`; the `a?.b` member is lowered through the transparent chain.
    fn visit_opt_call(&mut self, node: &OptCall) {
        self.lower_call(node.span, Some(&*node.callee), &node.args);
    }

    fn visit_member_expr(&mut self, node: &MemberExpr) {
        let property = match &node.prop {
            MemberProp::Ident(ident) => Some(ident.sym.to_string()),
            _ => None,
        };
        let id = self.builder.open(
            NodeKind::MemberExpression {
                object: None,
                property,
            },
            node.span,
        );

        let object = self.lower_child(&node.obj);
        if let Some(NodeKind::MemberExpression { object: slot, .. }) = self.builder.kind_mut(id) {
            *slot = object;
        }

        if let MemberProp::Computed(computed) = &node.prop {
            computed.visit_with(self);
        }
        self.builder.close();
    }

    fn visit_tpl(&mut self, node: &Tpl) {
        let quasis = node.quasis.iter().map(quasi_text).collect();
        self.within(NodeKind::TemplateLiteral { quasis }, node.span, |this| {
            for expr in &node.exprs {
                expr.visit_with(this);
            }
        });
    }

    fn visit_tagged_tpl(&mut self, node: &TaggedTpl) {
        let tag = match &*node.tag {
            Expr::Ident(ident) => Some(ident.sym.to_string()),
            _ => None,
        };
        self.within(NodeKind::TaggedTemplate { tag }, node.span, |this| {
            node.tag.visit_with(this);
            node.tpl.visit_with(this);
        });
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        let name = element_name(&node.opening.name);
        self.within(NodeKind::JsxElement { name }, node.span, |this| {
            for attr in &node.opening.attrs {
                attr.visit_with(this);
            }
            for child in &node.children {
                child.visit_with(this);
            }
        });
    }

    fn visit_jsx_fragment(&mut self, node: &JSXFragment) {
        self.within(NodeKind::JsxFragment, node.span, |this| {
            for child in &node.children {
                child.visit_with(this);
            }
        });
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        let raw_value = &node.value;
        // Point the span at the first non-whitespace character so reports land
        // on the line where the text actually starts.
        let trim_start_offset = raw_value.len() - raw_value.trim_start().len();
        let lo = node.span.lo + BytePos(trim_start_offset as u32);
        self.builder.leaf(
            NodeKind::Literal(LiteralValue::String(raw_value.to_string())),
            Span::new(lo, node.span.hi),
        );
    }

    fn visit_jsx_expr_container(&mut self, node: &JSXExprContainer) {
        self.within(NodeKind::JsxExpressionContainer, node.span, |this| {
            node.visit_children_with(this)
        });
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        let name = Some(attr_name(&node.name));
        self.within(NodeKind::JsxAttribute { name }, node.span, |this| {
            match &node.value {
                Some(JSXAttrValue::Str(s)) => {
                    this.builder
                        .leaf(NodeKind::Literal(LiteralValue::String(str_value(s))), s.span);
                }
                Some(value) => value.visit_with(this),
                None => {}
            }
        });
    }
}
