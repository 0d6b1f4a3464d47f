use itertools::Itertools;

use crate::{Binary, Expr, Grouping, Literal, Unary, Visitor};

/// Renders an expression in parenthesized prefix form, e.g. `(* (- 123) (group 45.67))`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize<'e>(&mut self, name: &str, exprs: impl IntoIterator<Item = &'e Expr>) -> String {
        format!("({} {})", name, exprs.into_iter().map(|expr| expr.accept(self)).join(" "))
    }
}

impl Visitor<String> for AstPrinter {
    fn visit_binary(&mut self, binary: &Binary) -> String {
        self.parenthesize(binary.operator().lexeme(), [binary.left(), binary.right()])
    }

    fn visit_grouping(&mut self, grouping: &Grouping) -> String {
        self.parenthesize("group", [grouping.expression()])
    }

    fn visit_literal(&mut self, literal: &Literal) -> String {
        literal.value().to_string()
    }

    fn visit_unary(&mut self, unary: &Unary) -> String {
        self.parenthesize(unary.operator().lexeme(), [unary.right()])
    }
}

/// Renders an expression in reverse Polish notation, e.g. `1 2 + 4 3 - *`.
///
/// Groupings vanish since the notation needs no parentheses. Unary operators
/// are written after their operand, like binary ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }
}

impl Visitor<String> for RpnPrinter {
    fn visit_binary(&mut self, binary: &Binary) -> String {
        let left = binary.left().accept(self);
        let right = binary.right().accept(self);
        format!("{} {} {}", left, right, binary.operator())
    }

    fn visit_grouping(&mut self, grouping: &Grouping) -> String {
        grouping.expression().accept(self)
    }

    fn visit_literal(&mut self, literal: &Literal) -> String {
        literal.value().to_string()
    }

    fn visit_unary(&mut self, unary: &Unary) -> String {
        format!("{} {}", unary.right().accept(self), unary.operator())
    }
}
