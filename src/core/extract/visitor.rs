//! AST visitor collecting message definitions and module references.
//!
//! Two definition forms are recognized:
//!
//! ```js
//! const tr = createTranslator('Namespace', {
//!   greeting: 'Hello',
//!   farewell: { message: 'Bye', context: 'Shown when leaving' },
//! });
//!
//! export default {
//!   name: 'Namespace',
//!   $trs: { greeting: 'Hello' },
//! };
//! ```

use swc_ecma_ast::{
    BinaryOp, CallExpr, Callee, ExportAll, Expr, ImportDecl, Lit, MemberProp, NamedExport,
    ObjectLit, Prop, PropName, PropOrSpread,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::messages::{MessageDefinition, MessageMap};

const TRANSLATOR_FACTORY: &str = "createTranslator";
const COMPONENT_MESSAGES_PROP: &str = "$trs";
const COMPONENT_NAME_PROP: &str = "name";

/// Collects messages and import specifiers from one module.
#[derive(Debug, Default)]
pub struct MessageCollector {
    pub messages: MessageMap,
    /// Module specifiers from imports, re-exports, `import()` and `require()`.
    pub imports: Vec<String>,
    /// Definitions that could not be read statically, as human-readable labels.
    pub skipped: Vec<String>,
}

impl MessageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_definitions(&mut self, namespace: &str, messages: &ObjectLit) {
        for prop in &messages.props {
            let PropOrSpread::Prop(prop) = prop else {
                self.skipped.push(format!("{}.<spread>", namespace));
                continue;
            };
            let Prop::KeyValue(kv) = &**prop else {
                continue;
            };
            let Some(key) = prop_name(&kv.key) else {
                continue;
            };
            let id = format!("{}.{}", namespace, key);
            match message_definition(&kv.value) {
                Some(definition) => {
                    self.messages.insert(id, definition);
                }
                None => self.skipped.push(id),
            }
        }
    }

    fn check_translator_call(&mut self, node: &CallExpr) {
        let Callee::Expr(callee) = &node.callee else {
            return;
        };
        let is_factory = match &**callee {
            Expr::Ident(ident) => ident.sym.as_str() == TRANSLATOR_FACTORY,
            Expr::Member(member) => {
                matches!(&member.prop, MemberProp::Ident(p) if p.sym.as_str() == TRANSLATOR_FACTORY)
            }
            _ => false,
        };
        if !is_factory {
            return;
        }

        let namespace = node.args.first().and_then(|arg| static_string(&arg.expr));
        let messages = node.args.get(1).map(|arg| unwrap_expr(&arg.expr));
        match (namespace, messages) {
            (Some(namespace), Some(Expr::Object(obj))) => self.collect_definitions(&namespace, obj),
            (Some(namespace), _) => self.skipped.push(format!("{}.*", namespace)),
            (None, _) => self.skipped.push(format!("{}(<dynamic>)", TRANSLATOR_FACTORY)),
        }
    }

    fn check_module_call(&mut self, node: &CallExpr) {
        let is_module_call = match &node.callee {
            Callee::Import(_) => true,
            Callee::Expr(callee) => {
                matches!(&**callee, Expr::Ident(ident) if ident.sym.as_str() == "require")
            }
            Callee::Super(_) => false,
        };
        if is_module_call
            && let Some(specifier) = node.args.first().and_then(|arg| static_string(&arg.expr))
        {
            self.imports.push(specifier);
        }
    }
}

impl Visit for MessageCollector {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.check_translator_call(node);
        self.check_module_call(node);
        node.visit_children_with(self);
    }

    fn visit_object_lit(&mut self, node: &ObjectLit) {
        let mut name = None;
        let mut trs = None;
        for prop in &node.props {
            if let PropOrSpread::Prop(prop) = prop
                && let Prop::KeyValue(kv) = &**prop
            {
                match prop_name(&kv.key).as_deref() {
                    Some(COMPONENT_NAME_PROP) => name = static_string(&kv.value),
                    Some(COMPONENT_MESSAGES_PROP) => trs = Some(&kv.value),
                    _ => {}
                }
            }
        }

        if let Some(trs) = trs {
            match (name, unwrap_expr(trs)) {
                (Some(name), Expr::Object(obj)) => self.collect_definitions(&name, obj),
                (Some(name), _) => self.skipped.push(format!("{}.*", name)),
                (None, _) => self.skipped.push(format!("<unnamed>.{}", COMPONENT_MESSAGES_PROP)),
            }
        }

        node.visit_children_with(self);
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) {
        if let Some(src) = node.src.value.as_str() {
            self.imports.push(src.to_string());
        }
    }

    fn visit_export_all(&mut self, node: &ExportAll) {
        if let Some(src) = node.src.value.as_str() {
            self.imports.push(src.to_string());
        }
    }

    fn visit_named_export(&mut self, node: &NamedExport) {
        if let Some(src) = &node.src
            && let Some(src) = src.value.as_str()
        {
            self.imports.push(src.to_string());
        }
    }
}

/// `'text'` or `{ message: 'text', context: 'ctx' }`.
fn message_definition(expr: &Expr) -> Option<MessageDefinition> {
    match unwrap_expr(expr) {
        Expr::Object(obj) => {
            let mut message = None;
            let mut context = None;
            for prop in &obj.props {
                if let PropOrSpread::Prop(prop) = prop
                    && let Prop::KeyValue(kv) = &**prop
                {
                    match prop_name(&kv.key).as_deref() {
                        Some("message") => message = Some(static_string(&kv.value)?),
                        Some("context") => context = Some(static_string(&kv.value)?),
                        _ => {}
                    }
                }
            }
            Some(MessageDefinition {
                message: message?,
                context,
            })
        }
        other => static_string(other).map(MessageDefinition::new),
    }
}

/// String value of a literal, an expression-free template, or a `+` chain of those.
fn static_string(expr: &Expr) -> Option<String> {
    match unwrap_expr(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()
            .and_then(|q| q.cooked.as_ref())
            .and_then(|s| s.as_str().map(|s| s.to_string())),
        Expr::Bin(bin) if bin.op == BinaryOp::Add => {
            let left = static_string(&bin.left)?;
            let right = static_string(&bin.right)?;
            Some(left + right.as_str())
        }
        _ => None,
    }
}

fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

/// Strip parentheses and TypeScript-only wrappers.
fn unwrap_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::TsAs(ts_as) => unwrap_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_expr(&ts_sat.expr),
        Expr::Paren(paren) => unwrap_expr(&paren.expr),
        _ => expr,
    }
}
