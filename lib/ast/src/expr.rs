use std::fmt::{self, Display, Formatter};

use token::{LiteralValue, Token};

use crate::{AstPrinter, Visitor};

/// A node of the syntax tree.
///
/// Every child is boxed and owned by exactly one parent, so a tree can neither
/// share subtrees nor contain cycles. Nodes expose no way to modify them once
/// built; `Clone` makes an independent deep copy.
///
/// `Expr` implements `Drop`, so nodes can only be matched by reference. Code
/// that rebuilds a tree has to clone the parts it keeps:
///
/// ```
/// use ast::Expr;
///
/// let expr = Expr::grouping(Expr::literal(1.0));
/// let inner = match &expr {
///     Expr::Grouping(grouping) => grouping.expression().clone(),
///     other => other.clone(),
/// };
/// assert_eq!(inner, Expr::literal(1.0));
/// ```
///
/// ```compile_fail,E0509
/// use ast::Expr;
///
/// let expr = Expr::grouping(Expr::literal(1.0));
/// match expr {
///     Expr::Grouping(grouping) => drop(grouping),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum Expr {
    Binary(Binary),
    Grouping(Grouping),
    Literal(Literal),
    Unary(Unary),
}

impl Expr {
    pub fn binary(left: impl Into<Expr>, operator: Token, right: impl Into<Expr>) -> Self {
        Binary::new(left, operator, right).into()
    }

    pub fn grouping(expression: impl Into<Expr>) -> Self {
        Grouping::new(expression).into()
    }

    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Literal::new(value).into()
    }

    pub fn unary(operator: Token, right: impl Into<Expr>) -> Self {
        Unary::new(operator, right).into()
    }

    /// Calls the method of `visitor` that matches this node's variant and
    /// returns its result untouched.
    pub fn accept<T, V: Visitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        log::trace!("Dispatching {} expression", self.kind());
        match self {
            Expr::Binary(binary) => binary.accept(visitor),
            Expr::Grouping(grouping) => grouping.accept(visitor),
            Expr::Literal(literal) => literal.accept(visitor),
            Expr::Unary(unary) => unary.accept(visitor),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Binary(_) => "binary",
            Expr::Grouping(_) => "grouping",
            Expr::Literal(_) => "literal",
            Expr::Unary(_) => "unary",
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Expr> {
        match self {
            Expr::Binary(binary) => [Some(binary.left()), Some(binary.right())],
            Expr::Grouping(grouping) => [Some(grouping.expression()), None],
            Expr::Literal(_) => [None, None],
            Expr::Unary(unary) => [Some(unary.right()), None],
        }
        .into_iter()
        .flatten()
    }

    // Moves every non-leaf child into `pending`, leaving a nil literal behind.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        let children = match self {
            Expr::Binary(binary) => [Some(&mut binary.left), Some(&mut binary.right)],
            Expr::Grouping(grouping) => [Some(&mut grouping.expression), None],
            Expr::Literal(_) => [None, None],
            Expr::Unary(unary) => [Some(&mut unary.right), None],
        };

        for child in children.into_iter().flatten() {
            if !matches!(**child, Expr::Literal(_)) {
                let placeholder = Expr::Literal(Literal::new(LiteralValue::Nil));
                pending.push(std::mem::replace(&mut **child, placeholder));
            }
        }
    }
}

// The derived drop glue would recurse once per nesting level, so deep chains
// are torn down through a work-list instead.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", AstPrinter.print(self))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    left: Box<Expr>,
    operator: Token,
    right: Box<Expr>,
}

impl Binary {
    /// Children are moved in, so the same node can't end up under two parents:
    ///
    /// ```compile_fail,E0382
    /// use ast::{Expr, Token, TokenType};
    ///
    /// let child = Expr::literal(1.0);
    /// let plus = Token::new(TokenType::Plus, "+", None, 1);
    /// Expr::binary(child, plus, child);
    /// ```
    ///
    /// A copy has to be made explicitly and is independent of the original:
    ///
    /// ```
    /// use ast::{Expr, Token, TokenType};
    ///
    /// let child = Expr::literal(1.0);
    /// let plus = Token::new(TokenType::Plus, "+", None, 1);
    /// let sum = Expr::binary(child.clone(), plus, child);
    /// assert_eq!(sum.to_string(), "(+ 1 1)");
    /// ```
    pub fn new(left: impl Into<Expr>, operator: Token, right: impl Into<Expr>) -> Self {
        Self { left: Box::new(left.into()), operator, right: Box::new(right.into()) }
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }

    pub fn accept<T, V: Visitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.visit_binary(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    expression: Box<Expr>,
}

impl Grouping {
    pub fn new(expression: impl Into<Expr>) -> Self {
        Self { expression: Box::new(expression.into()) }
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    pub fn accept<T, V: Visitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.visit_grouping(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: LiteralValue,
}

impl Literal {
    pub fn new(value: impl Into<LiteralValue>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &LiteralValue {
        &self.value
    }

    pub fn accept<T, V: Visitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.visit_literal(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    operator: Token,
    right: Box<Expr>,
}

impl Unary {
    pub fn new(operator: Token, right: impl Into<Expr>) -> Self {
        Self { operator, right: Box::new(right.into()) }
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }

    pub fn accept<T, V: Visitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.visit_unary(self)
    }
}
